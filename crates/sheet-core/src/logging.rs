#![forbid(unsafe_code)]

//! Tracing facade.
//!
//! Only compiled with the `tracing` feature. Downstream crates can depend on
//! `sheet-core` alone and still emit spans through the same macros.

pub use tracing::{debug, debug_span, info, info_span, trace, trace_span, warn};
