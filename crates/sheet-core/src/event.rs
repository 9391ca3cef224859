#![forbid(unsafe_code)]

//! Canonical pointer event types.
//!
//! A touch sequence is `Down`, zero or more `Move`, then `Up` or `Cancel`.
//! Coordinates are absolute viewport positions; cumulative deltas are
//! derived by [`crate::gesture::DragTracker`].

/// Phase of a pointer sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// Finger or button went down.
    Down,
    /// Pointer moved while down.
    Move,
    /// Finger lifted.
    Up,
    /// The platform revoked the touch sequence.
    Cancel,
}

/// A single pointer sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// What happened.
    pub kind: PointerKind,
    /// Horizontal position.
    pub x: f64,
    /// Vertical position.
    pub y: f64,
}

impl PointerEvent {
    /// Create a pointer event.
    #[must_use]
    pub const fn new(kind: PointerKind, x: f64, y: f64) -> Self {
        Self { kind, x, y }
    }

    /// Touch-down at `(x, y)`.
    #[must_use]
    pub const fn down(x: f64, y: f64) -> Self {
        Self::new(PointerKind::Down, x, y)
    }

    /// Move to `(x, y)`.
    #[must_use]
    pub const fn moved(x: f64, y: f64) -> Self {
        Self::new(PointerKind::Move, x, y)
    }

    /// Lift at `(x, y)`.
    #[must_use]
    pub const fn up(x: f64, y: f64) -> Self {
        Self::new(PointerKind::Up, x, y)
    }

    /// Cancellation at `(x, y)`.
    #[must_use]
    pub const fn cancel(x: f64, y: f64) -> Self {
        Self::new(PointerKind::Cancel, x, y)
    }
}
