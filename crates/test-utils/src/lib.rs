//! Shared helpers for `shopflow` tests: order builders, seeded services and
//! a captured tracing subscriber.

pub mod builders;
pub mod fixtures;

use std::future::Future;
use std::sync::Once;
use std::time::Duration;

use tracing_subscriber::fmt;

static INIT: Once = Once::new();

/// How long an async test may run before it is treated as hung.
pub const TEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Route `tracing` output into the test harness.
///
/// Uses the crate's own filter, so `SHOPFLOW_LOG=debug cargo test` turns up
/// logging. Output shows for failing tests only unless `--nocapture` is set.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = fmt()
            .with_env_filter(shopflow::logging::env_filter(None))
            .with_test_writer()
            .with_target(true)
            .try_init();
    });
}

/// Await `f`, panicking if it outlives [`TEST_TIMEOUT`].
pub async fn with_timeout<F, T>(f: F) -> T
where
    F: Future<Output = T>,
{
    match tokio::time::timeout(TEST_TIMEOUT, f).await {
        Ok(value) => value,
        Err(_) => panic!("test did not finish within {TEST_TIMEOUT:?}"),
    }
}
