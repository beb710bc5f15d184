//! Shared helpers for the `taskdeps` integration tests.

pub mod builders;

use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Filter used when `RUST_LOG` is unset: the engine's `debug!` summaries
/// (chain counts, critical path length, snapshot loads) and nothing noisier
/// from dependencies.
const DEFAULT_TEST_FILTER: &str = "warn,taskdeps=debug";

/// Install a subscriber once per test binary.
///
/// Output goes through the test writer, so it only shows up for failing
/// tests or under `-- --nocapture`.
///
/// Cycle-guard hits and dangling references are logged at `trace`:
/// `RUST_LOG=taskdeps::dag=trace cargo test --test chains -- --nocapture`
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_TEST_FILTER));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .init();
    });
}
