use std::io::Write;

use clap::Args;
use serde::Serialize;
use sheet_core::geometry::Viewport;
use sheet_widgets::{SheetConfig, SheetFrame, SheetLayout, SheetPosition};

use crate::error::{HarnessError, Result};

#[derive(Debug, Clone, Args)]
pub struct LayoutArgs {
    /// Viewport height in device pixels.
    #[arg(long)]
    pub height: f64,

    /// Viewport width in device pixels.
    #[arg(long, default_value_t = 390.0)]
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutReport {
    pub width: f64,
    pub height: f64,
    pub compact: bool,
    pub peek_offset: f64,
    pub sheet_height: f64,
    pub closed_offset: f64,
    pub panel_width: f64,
    pub handle_top_at_open: f64,
}

impl LayoutReport {
    #[must_use]
    pub fn for_viewport(viewport: Viewport) -> Self {
        let layout = SheetLayout::for_viewport(viewport);
        let open = SheetFrame::compute(
            &layout,
            &SheetConfig::default(),
            layout.offset_of(SheetPosition::Open),
        );
        Self {
            width: viewport.width,
            height: viewport.height,
            compact: viewport.height < sheet_widgets::layout::COMPACT_HEIGHT_BREAKPOINT,
            peek_offset: layout.peek_offset(),
            sheet_height: layout.sheet_height(),
            closed_offset: layout.closed_offset(),
            panel_width: open.content.width,
            handle_top_at_open: open.handle.y,
        }
    }
}

pub fn run_layout(args: LayoutArgs, out: &mut impl Write) -> Result<()> {
    let viewport = Viewport::try_new(args.width, args.height)
        .map_err(|error| HarnessError::invalid(error.to_string()))?;
    let report = LayoutReport::for_viewport(viewport);
    serde_json::to_writer(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}
