use std::fs::OpenOptions;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize tracing for a terminal application.
///
/// A TUI owns stdout, so diagnostics only go to a file, and only when one is
/// named via the `CONTACT_FORM_LOG` environment variable. Without it nothing
/// is emitted.
pub fn init_tracing() {
    let Some(log_path) = std::env::var("CONTACT_FORM_LOG").ok() else {
        return;
    };

    let file = match OpenOptions::new().create(true).append(true).open(&log_path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Failed to open log file {log_path}: {err}");
            return;
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_filter(filter);

    tracing_subscriber::registry().with(file_layer).init();
}
