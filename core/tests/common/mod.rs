use tracing_subscriber::{EnvFilter, Layer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Installs a test-captured console subscriber filtered by the `TEST_LOG` environment variable.
pub fn init_tracing() {
  let filter = EnvFilter::try_from_env("TEST_LOG").unwrap_or_default();
  let _ = tracing_subscriber::registry() // Ignore error ok: another test in this binary already installed it.
    .with(
      tracing_subscriber::fmt::layer()
        .with_test_writer()
        .with_filter(filter)
    )
    .try_init();
}
