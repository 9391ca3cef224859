#![forbid(unsafe_code)]

//! Drag-surface attachment and per-frame region geometry.
//!
//! A sheet has two regions: the handle strip above the panel and the content
//! body. Which of them receives drag gestures depends on configuration:
//!
//! | region | drag enabled when |
//! |---|---|
//! | handle (bar or custom) | `enable_pan_down_to_close` |
//! | content body | not `disable_pan_down_children` |
//!
//! [`SheetFrame`] places both regions for a given offset so the host can
//! paint them and route touch-downs with [`SheetFrame::hit_test`].

use bitflags::bitflags;
use sheet_core::geometry::{Rect, Viewport};

use crate::config::SheetConfig;
use crate::layout::SheetLayout;

/// Height of the handle strip.
pub const HANDLE_HEIGHT: f64 = 40.0;

/// How far the handle strip overlaps the top of the panel.
pub const HANDLE_OVERLAP: f64 = 15.0;

/// Total horizontal inset of the panel and handle (split evenly).
pub const HORIZONTAL_INSET: f64 = 30.0;

/// Stacking order of the default bar handle.
pub const BAR_HANDLE_Z: u8 = 1;

/// Stacking order of an owner-rendered handle.
pub const CUSTOM_HANDLE_Z: u8 = 4;

bitflags! {
    /// Regions that receive drag gestures.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DragSurfaces: u8 {
        /// The handle strip.
        const HANDLE = 0b01;
        /// The content body.
        const BODY = 0b10;
    }
}

impl DragSurfaces {
    /// Surfaces wired for `config`.
    #[must_use]
    pub fn for_config(config: &SheetConfig) -> Self {
        let mut surfaces = Self::empty();
        if config.enable_pan_down_to_close {
            surfaces |= Self::HANDLE;
        }
        if !config.disable_pan_down_children {
            surfaces |= Self::BODY;
        }
        surfaces
    }
}

/// Visual of the handle strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleKind {
    /// Default rounded bar.
    Bar,
    /// Owner-rendered handle.
    Custom,
}

impl HandleKind {
    /// Stacking order for this handle kind.
    #[must_use]
    pub const fn z_index(self) -> u8 {
        match self {
            Self::Bar => BAR_HANDLE_Z,
            Self::Custom => CUSTOM_HANDLE_Z,
        }
    }
}

/// A region that can receive a touch-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SheetRegion {
    /// The handle strip.
    Handle,
    /// The content body.
    Body,
}

/// Where each part of the sheet sits for one offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetFrame {
    /// Container spanning the viewport, lifted by the bottom insets.
    pub container: Rect,
    /// Handle strip, already translated by the offset.
    pub handle: Rect,
    /// Handle visual.
    pub handle_kind: HandleKind,
    /// Content body, already translated by the offset.
    pub content: Rect,
    /// Regions receiving drag gestures.
    pub surfaces: DragSurfaces,
    /// Offset the frame was computed for.
    pub offset: f64,
}

impl SheetFrame {
    /// Compute the frame for `offset`.
    #[must_use]
    pub fn compute(layout: &SheetLayout, config: &SheetConfig, offset: f64) -> Self {
        let Viewport { width, height } = layout.viewport();
        let insets = config.effective_bottom_insets();
        let container = Rect::new(0.0, -insets, width, height);

        let panel_width = (width - HORIZONTAL_INSET).max(0.0);
        let panel_x = (width - panel_width) / 2.0;
        let sheet_height = layout.sheet_height();

        let content = Rect::new(
            panel_x,
            container.bottom() - sheet_height,
            panel_width,
            sheet_height,
        )
        .translate_y(offset);

        let handle_bottom = container.bottom() - (sheet_height - HANDLE_OVERLAP);
        let handle = Rect::new(
            panel_x,
            handle_bottom - HANDLE_HEIGHT,
            panel_width,
            HANDLE_HEIGHT,
        )
        .translate_y(offset);

        let handle_kind = if config.custom_handle {
            HandleKind::Custom
        } else {
            HandleKind::Bar
        };

        Self {
            container,
            handle,
            handle_kind,
            content,
            surfaces: DragSurfaces::for_config(config),
            offset,
        }
    }

    /// Drag-enabled region under `(x, y)`. The handle is stacked above the
    /// body and wins where they overlap.
    #[must_use]
    pub fn hit_test(&self, x: f64, y: f64) -> Option<SheetRegion> {
        if self.surfaces.contains(DragSurfaces::HANDLE) && self.handle.contains(x, y) {
            return Some(SheetRegion::Handle);
        }
        if self.surfaces.contains(DragSurfaces::BODY) && self.content.contains(x, y) {
            return Some(SheetRegion::Body);
        }
        None
    }
}
