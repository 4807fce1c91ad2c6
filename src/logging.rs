use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file used while the terminal view runs.
pub const LOG_FILE_ENV: &str = "STATELINK_LOG";

/// Where log output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// The terminal is owned by the view: log to a file or not at all.
    File,
    /// Headless commands log to stderr.
    Stderr,
}

fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Initialize tracing.
///
/// `RUST_LOG` takes precedence over `default_level`.
///
/// For [`LogTarget::File`], logging is disabled unless `STATELINK_LOG` names
/// a file path. Log files get unique names so that several instances can
/// run at once: `{path}.{timestamp}.{pid}`.
pub fn init_tracing(default_level: &str, target: LogTarget) {
    match target {
        LogTarget::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(default_level))
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true)
                .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
                .init();
        }
        LogTarget::File => {
            let Some(log_path) = std::env::var(LOG_FILE_ENV).ok() else {
                // Writing to the terminal would corrupt the view.
                return;
            };

            let pid = std::process::id();
            let timestamp = std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0);
            let unique_path = format!("{}.{}.{}", log_path, timestamp, pid);

            let Ok(file) = std::fs::File::create(&unique_path) else {
                eprintln!("Warning: Failed to create log file: {}", unique_path);
                return;
            };

            let file_layer = fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_target(true)
                .with_level(true);

            tracing_subscriber::registry()
                .with(env_filter(default_level))
                .with(file_layer)
                .init();
        }
    }
}
