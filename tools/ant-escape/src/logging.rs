//! Diagnostic tracing for the ant-escape tool.
//!
//! Stdout carries only the result (the bare count, or the JSON report), so
//! every diagnostic goes to stderr. Useful filters:
//!
//! - `RUST_LOG=ant_escape=info` - the summary line after the image is written
//! - `RUST_LOG=unshape_ant=debug` - walk start and end, image path
//! - `RUST_LOG=unshape_ant=trace` - one event per step (tens of thousands at
//!   the default size)

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset or unparsable.
const DEFAULT_FILTER: &str = "warn";

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber: compact lines on stderr, without
/// timestamps since a run lasts well under a second.
pub fn init() {
    tracing_subscriber::registry()
        .with(filter())
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .compact(),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_filters_parse() {
        for directive in [
            DEFAULT_FILTER,
            "ant_escape=info",
            "unshape_ant=debug",
            "unshape_ant=trace",
        ] {
            assert!(EnvFilter::try_new(directive).is_ok(), "{directive}");
        }
    }
}
