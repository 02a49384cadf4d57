//! Command-line parsing and editor tunables.

use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

/// Usage text printed for `--help`.
pub const HELP_TEXT: &str = "kilo - a small raw-terminal text editor

USAGE:
    kilo [OPTIONS] [FILE]

OPTIONS:
    -h, --help              Print this help message and exit
    -V, --version           Print version information and exit

KEYS:
    Ctrl-S                  Save (prompts for a name if the buffer has none)
    Ctrl-Q                  Quit (press repeatedly to discard unsaved changes)
    Ctrl-F                  Incremental search; arrows step between matches

ENVIRONMENT:
    KILO_LOG                Write a debug log to this file
    KILO_LOG_LEVEL          Log filter directive (default: debug)
";

/// Tunables shared by the editor components.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorOptions {
    /// Extra Ctrl-Q presses needed to quit with unsaved changes.
    pub quit_times: usize,
    /// How long a status message stays visible.
    pub message_timeout: Duration,
    /// Centred on the screen when the document is empty.
    pub banner: String,
    /// Status message shown at startup.
    pub help_message: String,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            quit_times: 3,
            message_timeout: Duration::from_secs(5),
            banner: format!("Kilo editor -- version {}", env!("CARGO_PKG_VERSION")),
            help_message: "HELP: Ctrl-S = save | Ctrl-Q = quit | Ctrl-F = find".to_string(),
        }
    }
}

/// Parsed command line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// File to open, if any.
    pub path: Option<PathBuf>,
    pub options: EditorOptions,
}

/// Result of CLI parsing.
#[derive(Debug)]
pub enum ParseResult {
    /// Successfully parsed configuration.
    Config(Config),
    /// User requested help.
    Help,
    /// User requested the version.
    Version,
    /// Parse error with message.
    Error(String),
}

impl Config {
    /// Parse configuration from command-line arguments.
    pub fn from_args<I>(args: I) -> ParseResult
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();
        let mut options_done = false;

        // Skip program name
        args.next();

        for arg in args {
            let arg_str = arg.to_string_lossy();

            if !options_done && arg_str.starts_with('-') && arg_str.len() > 1 {
                match arg_str.as_ref() {
                    "-h" | "--help" => return ParseResult::Help,
                    "-V" | "--version" => return ParseResult::Version,
                    "--" => options_done = true,
                    other => return ParseResult::Error(format!("Unknown option: {other}")),
                }
                continue;
            }

            if config.path.is_some() {
                return ParseResult::Error(format!("Unexpected argument: {arg_str}"));
            }
            config.path = Some(PathBuf::from(arg));
        }

        ParseResult::Config(config)
    }
}
