use std::path::PathBuf;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming a log file path.
pub const LOG_FILE_ENV: &str = "CONDUIT_LOG";

/// Initialize tracing for the terminal front end.
///
/// Filtering follows `RUST_LOG` and defaults to `warn`. Output goes to
/// stderr unless `CONDUIT_LOG` names a file, see [`log_file_path`].
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let Some(base) = std::env::var(LOG_FILE_ENV).ok().filter(|p| !p.is_empty()) else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_timer(fmt::time::UtcTime::rfc_3339())
            .init();
        return;
    };

    let path = log_file_path(&base, std::process::id());
    let file = match std::fs::File::create(&path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Warning: could not create log file {}: {}", path.display(), e);
            return;
        }
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_timer(fmt::time::UtcTime::rfc_3339()),
        )
        .init();
}

/// `{base}.{unix_seconds}.{pid}`, unique per invocation.
pub fn log_file_path(base: &str, pid: u32) -> PathBuf {
    let seconds = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    PathBuf::from(format!("{}.{}.{}", base, seconds, pid))
}
