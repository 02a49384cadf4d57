//! Error types for the editor.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Result type alias for editor operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for editor operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error with no more specific context.
    Io(io::Error),
    /// A terminal system call failed (`tcgetattr`, `tcsetattr`, `read`, `write`).
    Terminal {
        op: &'static str,
        source: io::Error,
    },
    /// Neither the ioctl geometry query nor the cursor-report fallback worked.
    WindowSize,
    /// Opening or saving a file failed.
    Storage { path: PathBuf, source: io::Error },
}

impl Error {
    /// Wrap an I/O error from the named terminal operation.
    #[must_use]
    pub fn terminal(op: &'static str, source: io::Error) -> Self {
        Self::Terminal { op, source }
    }

    /// Whether this error means the terminal is unusable and the process must exit.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Io(_) | Self::Terminal { .. } | Self::WindowSize)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Terminal { op, source } => write!(f, "{op}: {source}"),
            Self::WindowSize => write!(f, "getWindowSize: unable to determine terminal size"),
            Self::Storage { path, source } => write!(f, "{}: {source}", path.display()),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) | Self::Terminal { source: e, .. } | Self::Storage { source: e, .. } => {
                Some(e)
            }
            Self::WindowSize => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
