//! Stderr log subscriber.
//!
//! `RUST_LOG` wins when set. Otherwise `--verbose` turns on the sheet's
//! debug spans and drag traces; the default only reports warnings.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::prelude::*;

const VERBOSE_FILTER: &str = "sheet_widgets=trace,sheet_core=debug,sheet_harness=debug";
const QUIET_FILTER: &str = "warn";

/// Filter directives used when `RUST_LOG` is unset.
#[must_use]
pub fn default_directives(verbose: bool) -> &'static str {
    if verbose { VERBOSE_FILTER } else { QUIET_FILTER }
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_span_events(FmtSpan::NEW)
        .with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();
}
