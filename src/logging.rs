use std::fs::File;
use std::sync::Mutex;

use tracing_subscriber::fmt::{self, time::UtcTime, writer::BoxMakeWriter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable naming a log file path.
pub const LOG_PATH_ENV: &str = "MODELER_LAUNCH_LOG";

/// Initialize tracing.
///
/// Filtered by `RUST_LOG` (default `warn`). Output goes to stderr unless
/// `MODELER_LAUNCH_LOG` is set, in which case each process writes its own
/// `{path}.{timestamp}.{pid}` file.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let (writer, ansi) = match open_log_file() {
        Some(file) => (BoxMakeWriter::new(Mutex::new(file)), false),
        None => (BoxMakeWriter::new(std::io::stderr), true),
    };

    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(true)
        .with_level(true)
        .with_timer(UtcTime::rfc_3339());

    // A subscriber may already be installed (tests, embedding callers).
    let _ = tracing_subscriber::registry().with(filter).with(layer).try_init();
}

fn open_log_file() -> Option<File> {
    let base = std::env::var_os(LOG_PATH_ENV)?;
    let stamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let mut path = base;
    path.push(format!(".{}.{}", stamp, std::process::id()));

    match File::create(&path) {
        Ok(file) => Some(file),
        Err(e) => {
            eprintln!(
                "Warning: cannot open log file {}: {}; logging to stderr",
                path.to_string_lossy(),
                e
            );
            None
        }
    }
}
