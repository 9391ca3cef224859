#![forbid(unsafe_code)]

//! Layout calculator: device-size-adaptive sheet constants.
//!
//! Computed once from the viewport at construction. A later viewport
//! change does not recompute them; build a new sheet instead.

use sheet_core::geometry::Viewport;

use crate::position::SheetPosition;

/// Viewport heights below this use the compact proportions.
pub const COMPACT_HEIGHT_BREAKPOINT: f64 = 750.0;

/// Layout constants derived from the viewport height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetLayout {
    viewport: Viewport,
    peek_offset: f64,
    sheet_height: f64,
}

impl SheetLayout {
    /// Derive the layout for `viewport`.
    ///
    /// | height | peek offset | sheet height |
    /// |---|---|---|
    /// | `< 750` | `0.35 × H` | `H / 2` |
    /// | `>= 750` | `0.30 × H` | `H / 2.3` |
    #[must_use]
    pub fn for_viewport(viewport: Viewport) -> Self {
        let (peek_offset, sheet_height) = Self::constants(viewport.height);
        Self {
            viewport,
            peek_offset,
            sheet_height,
        }
    }

    /// The pure `(peek_offset, sheet_height)` pair for a viewport height.
    #[must_use]
    pub fn constants(height: f64) -> (f64, f64) {
        if height < COMPACT_HEIGHT_BREAKPOINT {
            (height * 35.0 / 100.0, height / 2.0)
        } else {
            (height * 30.0 / 100.0, height / 2.3)
        }
    }

    /// Vertical distance from the open position to the peek position.
    #[inline]
    #[must_use]
    pub fn peek_offset(&self) -> f64 {
        self.peek_offset
    }

    /// Visible panel height.
    #[inline]
    #[must_use]
    pub fn sheet_height(&self) -> f64 {
        self.sheet_height
    }

    /// Offset of the closed position (the viewport height).
    #[inline]
    #[must_use]
    pub fn closed_offset(&self) -> f64 {
        self.viewport.height
    }

    /// Viewport the layout was derived from.
    #[inline]
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Offset at which `position` rests.
    #[must_use]
    pub fn offset_of(&self, position: SheetPosition) -> f64 {
        match position {
            SheetPosition::Open => 0.0,
            SheetPosition::Peek => self.peek_offset,
            SheetPosition::Closed => self.closed_offset(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(h: f64) -> SheetLayout {
        SheetLayout::for_viewport(Viewport::new(390.0, h))
    }

    #[test]
    fn compact_device() {
        let l = layout(700.0);
        assert!((l.peek_offset() - 245.0).abs() < 1e-9);
        assert!((l.sheet_height() - 350.0).abs() < 1e-9);
        assert_eq!(l.closed_offset(), 700.0);
    }

    #[test]
    fn tall_device() {
        let l = layout(920.0);
        assert!((l.peek_offset() - 276.0).abs() < 1e-9);
        assert!((l.sheet_height() - 400.0).abs() < 1e-9);
    }

    #[test]
    fn breakpoint_uses_tall_proportions() {
        let (peek, height) = SheetLayout::constants(750.0);
        assert!((peek - 225.0).abs() < 1e-9);
        assert!((height - 750.0 / 2.3).abs() < 1e-9);
        let (peek, _) = SheetLayout::constants(749.0);
        assert!((peek - 749.0 * 0.35).abs() < 1e-9);
    }

    #[test]
    fn offsets_of_positions() {
        let l = layout(800.0);
        assert_eq!(l.offset_of(SheetPosition::Open), 0.0);
        assert_eq!(l.offset_of(SheetPosition::Peek), l.peek_offset());
        assert_eq!(l.offset_of(SheetPosition::Closed), 800.0);
    }
}
