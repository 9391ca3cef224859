#![forbid(unsafe_code)]

//! Command-line harness for the bottom sheet.
//!
//! `layout` prints the layout constants for a viewport. `replay` runs a JSON
//! script of mounts, imperative calls, drags and clock advances against a
//! [`sheet_widgets::BottomSheet`] driven by a simulated frame clock, writing
//! one JSON line per step to stdout. Logs go to stderr.

pub mod cli;
pub mod error;
pub mod layout;
pub mod logging;
pub mod replay;
pub mod script;

pub use cli::run_from_env;
pub use error::{HarnessError, Result};
