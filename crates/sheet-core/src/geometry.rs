#![forbid(unsafe_code)]

//! Geometric primitives in device-independent pixels.
//!
//! The y axis points down: `y = 0` is the top of the viewport.

use std::fmt;

/// Viewport metrics supplied by the host platform.
///
/// Queried once when a sheet is constructed. Dimensions are always finite
/// and non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    /// Viewport width.
    pub width: f64,
    /// Viewport height.
    pub height: f64,
}

/// Rejected viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportError {
    /// Width was negative, NaN or infinite.
    InvalidWidth(f64),
    /// Height was negative, NaN or infinite.
    InvalidHeight(f64),
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWidth(w) => write!(f, "invalid viewport width: {w}"),
            Self::InvalidHeight(h) => write!(f, "invalid viewport height: {h}"),
        }
    }
}

impl std::error::Error for ViewportError {}

fn sanitize(v: f64) -> f64 {
    if v.is_finite() { v.max(0.0) } else { 0.0 }
}

impl Viewport {
    /// Create a viewport, clamping negative or non-finite dimensions to zero.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: sanitize(width),
            height: sanitize(height),
        }
    }

    /// Create a viewport, rejecting negative or non-finite dimensions.
    pub fn try_new(width: f64, height: f64) -> Result<Self, ViewportError> {
        if !width.is_finite() || width < 0.0 {
            return Err(ViewportError::InvalidWidth(width));
        }
        if !height.is_finite() || height < 0.0 {
            return Err(ViewportError::InvalidHeight(height));
        }
        Ok(Self { width, height })
    }

    /// The full viewport as a rectangle anchored at the origin.
    #[inline]
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

/// An axis-aligned rectangle used for region geometry and hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: f64,
    /// Top edge (inclusive).
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (exclusive).
    #[inline]
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    #[inline]
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Check if the rectangle has zero area.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Check if a point is inside the rectangle. NaN coordinates never are.
    #[inline]
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// The same rectangle shifted vertically by `dy`.
    #[inline]
    #[must_use]
    pub fn translate_y(&self, dy: f64) -> Self {
        Self {
            y: self.y + dy,
            ..*self
        }
    }
}
