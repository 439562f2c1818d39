//! File-based logging for terminal hosts.
//!
//! A TUI owns stdout, so diagnostics go to a file instead. Widgets emit
//! [`tracing`] events; [`init_file_logging`] installs a subscriber that
//! appends them to a log file.

use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Errors raised while setting up logging.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// The log file could not be opened.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The filter directive did not parse.
    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),
    /// A global subscriber was already installed.
    #[error("a global tracing subscriber is already installed")]
    AlreadyInstalled,
}

/// Open a log file in append mode, creating it if needed.
///
/// # Example
///
/// ```no_run
/// use combo_core::log::log_to_file;
/// use std::io::Write;
///
/// let mut f = log_to_file("debug.log").unwrap();
/// writeln!(f, "debug message").unwrap();
/// ```
pub fn log_to_file(path: impl AsRef<Path>) -> Result<std::fs::File, std::io::Error> {
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
}

/// Install a global `tracing` subscriber writing to `path`.
///
/// `filter` uses [`EnvFilter`] syntax, e.g. `"combo_widgets=debug"`. The
/// `RUST_LOG` environment variable, when set, takes precedence.
///
/// ```no_run
/// combo_core::log::init_file_logging("combo.log", "combo_widgets=debug").unwrap();
/// ```
pub fn init_file_logging(path: impl AsRef<Path>, filter: &str) -> Result<(), LogError> {
    let file = log_to_file(path)?;
    let filter = match EnvFilter::try_from_default_env() {
        Ok(from_env) => from_env,
        Err(_) => EnvFilter::try_new(filter)?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|_| LogError::AlreadyInstalled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_to_file_appends() {
        use std::io::Write;

        let path = std::env::temp_dir().join(format!("combo-log-{}.log", std::process::id()));
        let _ = std::fs::remove_file(&path);
        {
            let mut f = log_to_file(&path).unwrap();
            writeln!(f, "first").unwrap();
        }
        {
            let mut f = log_to_file(&path).unwrap();
            writeln!(f, "second").unwrap();
        }
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "first\nsecond\n");
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let path = std::env::temp_dir()
            .join("combo-no-such-dir")
            .join("nested")
            .join("x.log");
        let err = init_file_logging(&path, "debug").unwrap_err();
        assert!(matches!(err, LogError::Io(_)));
    }
}
