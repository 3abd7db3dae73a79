//! Logging setup for hosts embedding the fuzzy match processor.
//!
//! Processor events are emitted under the [`target`] names, so a host can
//! tune routing and provenance output separately, e.g.
//! `RUST_LOG=fuzzmatch::provenance=info,fuzzmatch::routing=debug`.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Provenance events on, per-record routing limited to failures
pub const DEFAULT_FILTER: &str = "info,fuzzmatch::routing=warn";

/// Install a compact terminal subscriber filtered by `RUST_LOG`, or by
/// [`DEFAULT_FILTER`] when it is unset.
pub fn init() {
    init_with_filter(DEFAULT_FILTER);
}

/// Same as [`init`] with a host-chosen fallback filter.
///
/// A no-op when the host already installed a global subscriber.
pub fn init_with_filter(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .try_init();
}

/// Log targets used by the processor.
pub mod target {
    /// Per-record scoring and routing
    pub const ROUTING: &str = "fuzzmatch::routing";
    /// Attribute modification events
    pub const PROVENANCE: &str = "fuzzmatch::provenance";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init_with_filter("warn");
        init();
    }
}
