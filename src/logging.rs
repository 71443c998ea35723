// VidKit Logging Setup
// Copyright (c) 2026 Xing_The_Creator | VidKit

use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber. Logs go to stderr so stdout stays
/// clean for progress lines and dry-run JSON. `RUST_LOG` overrides the
/// default `info` level.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // A second call (e.g. from tests) leaves the first subscriber in place.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
