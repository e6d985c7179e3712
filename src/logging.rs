// 🔎 Logging setup
// `RUST_LOG` wins when set; otherwise this crate logs at info.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Used when `RUST_LOG` is unset, empty or unparsable
pub const DEFAULT_LOG_DIRECTIVE: &str = "coding_notes=info";

/// Build the filter from a `RUST_LOG`-style directive string
pub fn log_filter(directives: Option<&str>) -> EnvFilter {
    match directives.map(str::trim) {
        Some(d) if !d.is_empty() => {
            EnvFilter::try_new(d).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVE))
        }
        _ => EnvFilter::new(DEFAULT_LOG_DIRECTIVE),
    }
}

/// Install the global subscriber. Logs go to stderr so stdout stays clean.
pub fn init_logging() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::registry()
        .with(log_filter(directives.as_deref()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
