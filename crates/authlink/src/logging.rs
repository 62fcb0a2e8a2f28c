//! Log output setup for binaries that embed the bridge.
//!
//! Library code only emits `tracing` events. Installing a subscriber is
//! left to whoever owns `main`.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Installs a `fmt` subscriber filtered by `RUST_LOG`.
///
/// Calling it again is harmless: the second install is rejected and
/// ignored.
pub fn init() {
    init_with_default(DEFAULT_FILTER);
}

/// Like [`init`], with a custom fallback filter.
///
/// Returns `true` if this call installed the global subscriber.
pub fn init_with_default(fallback: &str) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_rejected() {
        init();
        assert!(!init_with_default("debug"));
    }
}
