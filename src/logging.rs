use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Installs the global subscriber. Filtering follows `RUST_LOG` and defaults
/// to `info` for refscan's own crates.
///
/// Logs go to stderr; stdout is reserved for extracted records.
pub fn init() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,refscan=info,refscan_repository=info,refscan_crawl=info".into()),
        )
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
