#![forbid(unsafe_code)]

//! Bottom sheet widget.
//!
//! A panel that slides up from the bottom edge of the viewport and snaps
//! between three resting positions: [`SheetPosition::Open`],
//! [`SheetPosition::Peek`] and [`SheetPosition::Closed`]. It is driven either
//! by finger drags (settled with a spring) or by the imperative
//! [`SheetControl`] operations (settled with a timing curve).
//!
//! # Role in the workspace
//! `sheet-widgets` holds the decision logic only. Painting belongs to the
//! host; [`SheetFrame`] describes where each region sits for a given
//! offset. Interpolation belongs to an [`AnimationDriver`]; the default is
//! [`sheet_core::animation::AnimatedValue`].
//!
//! # State
//! A [`BottomSheet`] owns exactly two mutable quantities:
//! - the **offset**, held by the driver and written by drags and animations;
//! - the **settled position**, the last position the sheet was deliberately
//!   sent to. Every decision branches on the settled position, never on the
//!   animated offset.
//!
//! Both are updated together inside a single `&mut self` call, so the pair
//! is consistent at every event boundary.

pub mod config;
pub mod control;
pub mod driver;
pub mod filter;
pub mod layout;
pub mod position;
pub mod sheet;
pub mod surface;

pub use config::{SheetConfig, SheetConfigError};
pub use control::SheetControl;
pub use driver::AnimationDriver;
pub use filter::GestureFilter;
pub use layout::SheetLayout;
pub use position::SheetPosition;
pub use sheet::BottomSheet;
pub use surface::{DragSurfaces, HandleKind, SheetFrame, SheetRegion};
