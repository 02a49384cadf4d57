//! Opt-in diagnostic logging.
//!
//! The editor owns stdout, so log records go to a file. Set `KILO_LOG` to a
//! path to enable logging; `KILO_LOG_LEVEL` takes an `EnvFilter` directive
//! and defaults to `debug`.

use std::env;
use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable naming the log file.
pub const LOG_PATH_VAR: &str = "KILO_LOG";
/// Environment variable holding the filter directive.
pub const LOG_LEVEL_VAR: &str = "KILO_LOG_LEVEL";

const DEFAULT_DIRECTIVE: &str = "debug";

/// Install the file logger if `KILO_LOG` is set.
///
/// Returns `Ok(true)` when a subscriber was installed.
pub fn init() -> io::Result<bool> {
    let Some(path) = env::var_os(LOG_PATH_VAR) else {
        return Ok(false);
    };
    let directive = env::var(LOG_LEVEL_VAR).unwrap_or_else(|_| DEFAULT_DIRECTIVE.to_string());
    init_file(Path::new(&path), &directive)
}

/// Install a subscriber appending to `path`, filtered by `directive`.
///
/// An invalid directive falls back to `debug`. Returns `Ok(false)` if a
/// global subscriber was already installed.
pub fn init_file(path: &Path, directive: &str) -> io::Result<bool> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter =
        EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(true)
        .with_writer(Mutex::new(file))
        .try_init()
        .is_ok();

    if installed {
        tracing::info!(version = env!("CARGO_PKG_VERSION"), "logging started");
    }
    Ok(installed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_logger_writes_records() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("kilo.log");

        let installed = init_file(&path, "not a valid [directive").unwrap();
        assert!(path.exists());
        if installed {
            tracing::debug!("probe record");
            let text = std::fs::read_to_string(&path).unwrap();
            assert!(text.contains("logging started"));
            assert!(text.contains("probe record"));
            assert!(!text.contains('\x1b'), "log file must not contain colours");
        }
    }

    #[test]
    fn test_unwritable_path_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("kilo.log");
        assert!(init_file(&path, "debug").is_err());
    }
}
