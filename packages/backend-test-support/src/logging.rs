//! Logging for unit and integration tests.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Quiet by default; migrations and sqlx are noisy even at `info`.
const DEFAULT_FILTER: &str = "warn,sqlx=error,sea_orm_migration=error";

/// Install the test subscriber once per process.
///
/// The filter is taken from `TEST_LOG`, then `RUST_LOG`, then
/// [`DEFAULT_FILTER`]. Safe to call from every test binary's ctor.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let directives = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| DEFAULT_FILTER.to_string());

        let installed = fmt()
            .with_env_filter(EnvFilter::new(directives))
            .with_test_writer()
            .without_time()
            .try_init();
        // A test binary may already have its own subscriber.
        drop(installed);
    });
}
