#![forbid(unsafe_code)]

//! Sheet configuration.
//!
//! [`SheetConfig`] carries the construction-time inputs of a sheet. With the
//! `config-file` feature it can be loaded from TOML or JSON:
//!
//! ```toml
//! index_start = 0
//! enable_pan_down_to_close = true
//! bottom_insets = 34.0
//! spring_friction = 6.0
//! timing_duration_ms = 500
//! ```
//!
//! ```rust,ignore
//! let config = SheetConfig::from_toml_file("sheet.toml")?;
//! let config = SheetConfig::from_json_str(json)?;
//! ```
//!
//! # Defaults
//!
//! `SheetConfig::default()` starts at peek, closes only imperatively, lets
//! the content body drag, and uses a friction-6 spring and a 500ms timing
//! curve.

#[cfg(feature = "config-file")]
use std::path::Path;
use std::time::Duration;

#[cfg(feature = "config-file")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Construction-time inputs of a [`crate::BottomSheet`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "config-file", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config-file", serde(default))]
pub struct SheetConfig {
    /// Initial position: negative → closed, `0` → peek, other → open.
    pub index_start: i32,

    /// Dragging down from open releases to closed instead of peek.
    /// Also makes the handle a drag surface.
    pub enable_pan_down_to_close: bool,

    /// The content body does not receive drag gestures.
    pub disable_pan_down_children: bool,

    /// Bottom margin applied to the sheet container.
    pub bottom_insets: f64,

    /// The owner renders its own handle instead of the default bar.
    pub custom_handle: bool,

    /// Friction constant of the spring used for drag releases and mount-in.
    pub spring_friction: f64,

    /// Duration of imperative timing animations, in milliseconds.
    pub timing_duration_ms: u64,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            index_start: 0,
            enable_pan_down_to_close: false,
            disable_pan_down_children: false,
            bottom_insets: 0.0,
            custom_handle: false,
            spring_friction: 6.0,
            timing_duration_ms: 500,
        }
    }
}

impl SheetConfig {
    /// Set the initial position index (builder pattern).
    #[must_use]
    pub fn with_index_start(mut self, index_start: i32) -> Self {
        self.index_start = index_start;
        self
    }

    /// Release downward drags from open to closed (builder pattern).
    #[must_use]
    pub fn with_pan_down_to_close(mut self, enabled: bool) -> Self {
        self.enable_pan_down_to_close = enabled;
        self
    }

    /// Stop the content body from receiving drags (builder pattern).
    #[must_use]
    pub fn with_disable_pan_down_children(mut self, disabled: bool) -> Self {
        self.disable_pan_down_children = disabled;
        self
    }

    /// Set the bottom container margin (builder pattern).
    #[must_use]
    pub fn with_bottom_insets(mut self, insets: f64) -> Self {
        self.bottom_insets = insets;
        self
    }

    /// Use an owner-rendered handle (builder pattern).
    #[must_use]
    pub fn with_custom_handle(mut self, custom: bool) -> Self {
        self.custom_handle = custom;
        self
    }

    /// Set the spring friction constant (builder pattern).
    #[must_use]
    pub fn with_spring_friction(mut self, friction: f64) -> Self {
        self.spring_friction = friction;
        self
    }

    /// Set the timing animation duration (builder pattern).
    #[must_use]
    pub fn with_timing_duration(mut self, duration: Duration) -> Self {
        self.timing_duration_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Duration of imperative timing animations.
    #[must_use]
    pub fn timing_duration(&self) -> Duration {
        Duration::from_millis(self.timing_duration_ms)
    }

    /// Bottom margin with invalid values treated as zero.
    #[must_use]
    pub fn effective_bottom_insets(&self) -> f64 {
        if self.bottom_insets.is_finite() {
            self.bottom_insets.max(0.0)
        } else {
            0.0
        }
    }

    /// Validate all parameters are within acceptable ranges.
    ///
    /// An empty list means the config is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if !self.bottom_insets.is_finite() || self.bottom_insets < 0.0 {
            errors.push(format!(
                "bottom_insets must be finite and >= 0, got {}",
                self.bottom_insets
            ));
        }

        if !self.spring_friction.is_finite() || self.spring_friction <= 0.0 {
            errors.push(format!(
                "spring_friction must be finite and > 0, got {}",
                self.spring_friction
            ));
        }

        if self.timing_duration_ms == 0 {
            errors.push("timing_duration_ms must be > 0".into());
        }

        errors
    }

    /// Return the config if it validates cleanly.
    pub fn validated(self) -> Result<Self, SheetConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(SheetConfigError::Validation(errors))
        }
    }

    /// Load from a TOML string.
    #[cfg(feature = "config-file")]
    pub fn from_toml_str(s: &str) -> Result<Self, SheetConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validated()
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "config-file")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, SheetConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "config-file")]
    pub fn from_json_str(s: &str) -> Result<Self, SheetConfigError> {
        let config: Self = serde_json::from_str(s)?;
        config.validated()
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "config-file")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SheetConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors that can occur when loading a sheet configuration.
#[derive(Debug, Error)]
pub enum SheetConfigError {
    /// I/O error reading a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parse error.
    #[cfg(feature = "config-file")]
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON parse error.
    #[cfg(feature = "config-file")]
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Validation errors.
    #[error("validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}
