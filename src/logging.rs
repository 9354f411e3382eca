use std::sync::Arc;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing with file output.
///
/// Logging is disabled unless the `RESUMATCH_LOG` env var names a log file:
/// writing to stdout would corrupt the alternate-screen TUI. Levels follow
/// `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let Ok(log_path) = std::env::var("RESUMATCH_LOG") else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&log_path) else {
        eprintln!("Warning: failed to create log file: {log_path}");
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}
