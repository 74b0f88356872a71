//! Diagnostic logging setup

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directive for the crate at `level`
pub fn log_filter(level: &str) -> String {
    format!("hms_notify={}", level)
}

/// Install the stderr subscriber. `RUST_LOG` wins over `--log-level`.
pub fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_filter(level)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init();

    tracing::debug!("Starting hms-notify v{}", env!("CARGO_PKG_VERSION"));
}
