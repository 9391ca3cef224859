//! Interaction scripts and their simulated-clock runner.
//!
//! ```json
//! {
//!   "viewport": { "width": 390, "height": 844 },
//!   "config": { "enable_pan_down_to_close": true },
//!   "steps": [
//!     { "op": "mount" },
//!     { "op": "advance", "ms": 800 },
//!     { "op": "drag", "samples": [-5, -20, -50], "release": -50 },
//!     { "op": "close", "validate": true },
//!     { "op": "pointer", "events": [{ "kind": "down", "x": 200, "y": 700 }] }
//!   ]
//! }
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};
use sheet_core::animation::AnimatedValue;
use sheet_core::event::{PointerEvent, PointerKind};
use sheet_core::geometry::Viewport;
use sheet_widgets::{BottomSheet, SheetConfig, SheetControl, SheetPosition};

use crate::error::{HarnessError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportSpec {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerKindSpec {
    Down,
    Move,
    Up,
    Cancel,
}

impl From<PointerKindSpec> for PointerKind {
    fn from(kind: PointerKindSpec) -> Self {
        match kind {
            PointerKindSpec::Down => Self::Down,
            PointerKindSpec::Move => Self::Move,
            PointerKindSpec::Up => Self::Up,
            PointerKindSpec::Cancel => Self::Cancel,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerSpec {
    pub kind: PointerKindSpec,
    pub x: f64,
    pub y: f64,
}

impl From<PointerSpec> for PointerEvent {
    fn from(spec: PointerSpec) -> Self {
        PointerEvent::new(spec.kind.into(), spec.x, spec.y)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    Mount,
    FirstPosition,
    SecondPosition {
        #[serde(default)]
        validate: bool,
    },
    Close {
        #[serde(default)]
        validate: bool,
    },
    /// Captured drag samples (cumulative dy), optionally released.
    Drag {
        samples: Vec<f64>,
        #[serde(default)]
        release: Option<f64>,
    },
    /// Raw pointer samples routed through hit testing and capture.
    Pointer { events: Vec<PointerSpec> },
    /// Advance the simulated clock.
    Advance { ms: u64 },
}

impl Step {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mount => "mount",
            Self::FirstPosition => "first_position",
            Self::SecondPosition { .. } => "second_position",
            Self::Close { .. } => "close",
            Self::Drag { .. } => "drag",
            Self::Pointer { .. } => "pointer",
            Self::Advance { .. } => "advance",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Script {
    pub viewport: ViewportSpec,
    #[serde(default)]
    pub config: Option<SheetConfig>,
    pub steps: Vec<Step>,
}

impl Script {
    pub fn from_json_str(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }
}

/// Sheet state after one step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepRecord {
    pub step: usize,
    pub op: &'static str,
    pub settled: SheetPosition,
    pub settled_offset: f64,
    pub offset: f64,
    pub animating: bool,
    pub curve: Option<&'static str>,
    pub elapsed_ms: u64,
}

/// Runs a script against a sheet driven by a fixed-step frame clock.
#[derive(Debug)]
pub struct Runner {
    sheet: BottomSheet<AnimatedValue>,
    frame: Duration,
    elapsed: Duration,
}

impl Runner {
    /// Build the sheet for `viewport`. The offset starts off-screen.
    pub fn new(viewport: ViewportSpec, config: SheetConfig, frame: Duration) -> Result<Self> {
        if frame.is_zero() {
            return Err(HarnessError::invalid("frame duration must be > 0"));
        }
        let viewport = Viewport::try_new(viewport.width, viewport.height)
            .map_err(|error| HarnessError::invalid(error.to_string()))?;
        let config = config.validated()?;
        Ok(Self {
            sheet: BottomSheet::new(viewport, config, AnimatedValue::new(viewport.height)),
            frame,
            elapsed: Duration::ZERO,
        })
    }

    #[must_use]
    pub fn sheet(&self) -> &BottomSheet<AnimatedValue> {
        &self.sheet
    }

    /// Apply one step and report the resulting state.
    pub fn apply(&mut self, index: usize, step: &Step) -> StepRecord {
        let _span = tracing::debug_span!("harness.step", step = index, op = step.name()).entered();
        match step {
            Step::Mount => self.sheet.mount(),
            Step::FirstPosition => self.sheet.first_position(),
            Step::SecondPosition { validate } => self.sheet.second_position(*validate),
            Step::Close { validate } => self.sheet.close(*validate),
            Step::Drag { samples, release } => {
                for dy in samples {
                    self.sheet.handle_drag_move(*dy);
                }
                if let Some(dy) = release {
                    self.sheet.handle_drag_release(*dy);
                }
            }
            Step::Pointer { events } => {
                for event in events {
                    self.sheet.handle_pointer(&PointerEvent::from(*event));
                }
            }
            Step::Advance { ms } => self.advance(Duration::from_millis(*ms)),
        }
        self.record(index, step.name())
    }

    fn advance(&mut self, total: Duration) {
        let mut remaining = total;
        while !remaining.is_zero() {
            let dt = remaining.min(self.frame);
            self.sheet.driver_mut().tick(dt);
            remaining -= dt;
        }
        self.elapsed += total;
    }

    fn record(&self, index: usize, op: &'static str) -> StepRecord {
        let driver = self.sheet.driver();
        StepRecord {
            step: index,
            op,
            settled: self.sheet.settled(),
            settled_offset: self.sheet.settled_offset(),
            offset: driver.value(),
            animating: driver.is_animating(),
            curve: driver.active_curve().map(|curve| curve.as_str()),
            elapsed_ms: u64::try_from(self.elapsed.as_millis()).unwrap_or(u64::MAX),
        }
    }
}

/// Run every step of `script`, returning one record per step.
pub fn run_script(script: &Script, config: Option<SheetConfig>, frame: Duration) -> Result<Vec<StepRecord>> {
    let config = config.or_else(|| script.config.clone()).unwrap_or_default();
    let mut runner = Runner::new(script.viewport, config, frame)?;
    Ok(script
        .steps
        .iter()
        .enumerate()
        .map(|(index, step)| runner.apply(index, step))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS_16: Duration = Duration::from_millis(16);

    fn script(json: &str) -> Script {
        Script::from_json_str(json).unwrap()
    }

    #[test]
    fn parses_every_step_kind() {
        let s = script(
            r#"{
                "viewport": { "width": 390, "height": 844 },
                "steps": [
                    { "op": "mount" },
                    { "op": "first_position" },
                    { "op": "second_position", "validate": true },
                    { "op": "close" },
                    { "op": "drag", "samples": [1, 2] },
                    { "op": "pointer", "events": [{ "kind": "down", "x": 1, "y": 2 }] },
                    { "op": "advance", "ms": 10 }
                ]
            }"#,
        );
        let names: Vec<_> = s.steps.iter().map(Step::name).collect();
        assert_eq!(
            names,
            [
                "mount",
                "first_position",
                "second_position",
                "close",
                "drag",
                "pointer",
                "advance"
            ]
        );
        assert_eq!(s.steps[3], Step::Close { validate: false });
        assert!(s.config.is_none());
    }

    #[test]
    fn unknown_op_is_rejected() {
        let err = Script::from_json_str(r#"{ "viewport": { "width": 1, "height": 1 }, "steps": [{ "op": "fling" }] }"#);
        assert!(err.is_err());
    }

    #[test]
    fn mount_then_advance_settles_at_peek() {
        let s = script(
            r#"{ "viewport": { "width": 400, "height": 800 },
                 "steps": [{ "op": "mount" }, { "op": "advance", "ms": 5000 }] }"#,
        );
        let records = run_script(&s, None, MS_16).unwrap();
        assert_eq!(records[0].settled, SheetPosition::Peek);
        assert_eq!(records[0].offset, 800.0);
        assert_eq!(records[0].curve, Some("spring"));
        assert_eq!(records[1].offset, 240.0);
        assert!(!records[1].animating);
        assert_eq!(records[1].elapsed_ms, 5000);
    }

    #[test]
    fn explicit_config_overrides_script_config() {
        let s = script(
            r#"{ "viewport": { "width": 400, "height": 800 },
                 "config": { "index_start": 1 },
                 "steps": [{ "op": "mount" }] }"#,
        );
        assert_eq!(run_script(&s, None, MS_16).unwrap()[0].settled, SheetPosition::Open);
        let closed = SheetConfig::default().with_index_start(-1);
        let records = run_script(&s, Some(closed), MS_16).unwrap();
        assert_eq!(records[0].settled, SheetPosition::Closed);
        assert!(!records[0].animating);
    }

    #[test]
    fn invalid_inputs_are_errors() {
        let s = script(r#"{ "viewport": { "width": 400, "height": -5 }, "steps": [] }"#);
        assert_eq!(run_script(&s, None, MS_16).unwrap_err().exit_code(), 2);

        let s = script(r#"{ "viewport": { "width": 400, "height": 800 }, "steps": [] }"#);
        assert_eq!(run_script(&s, None, Duration::ZERO).unwrap_err().exit_code(), 2);

        let bad = SheetConfig::default().with_spring_friction(-1.0);
        assert_eq!(run_script(&s, Some(bad), MS_16).unwrap_err().exit_code(), 3);
    }

    #[test]
    fn partial_frames_are_ticked() {
        let mut runner = Runner::new(
            ViewportSpec {
                width: 400.0,
                height: 800.0,
            },
            SheetConfig::default(),
            MS_16,
        )
        .unwrap();
        runner.apply(0, &Step::Close { validate: false });
        runner.apply(1, &Step::FirstPosition);
        let record = runner.apply(2, &Step::Advance { ms: 500 });
        assert_eq!(record.offset, 240.0);
        assert!(!record.animating);
        assert!(!runner.sheet().is_mounted());
    }
}
