//! `kilo` - edit a file in the terminal.
//!
//! ```bash
//! kilo notes.txt
//! KILO_LOG=/tmp/kilo.log kilo notes.txt
//! ```

use kilo_rust::ansi::sequences;
use kilo_rust::config::HELP_TEXT;
use kilo_rust::terminal::restore_saved_mode;
use kilo_rust::{
    Config, Document, Editor, EditorState, ParseResult, Result, Tty, is_tty, logging,
    query_window_size,
};
use std::io::{self, Write};
use std::process::ExitCode;

/// Terminal rows taken by the status and message bars.
const BAR_ROWS: u16 = 2;

fn main() -> ExitCode {
    let config = match Config::from_args(std::env::args_os()) {
        ParseResult::Config(config) => config,
        ParseResult::Help => {
            print!("{HELP_TEXT}");
            return ExitCode::SUCCESS;
        }
        ParseResult::Version => {
            println!("kilo {}", env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        ParseResult::Error(msg) => {
            eprintln!("Error: {msg}");
            eprintln!("Run with --help for usage information.");
            return ExitCode::FAILURE;
        }
    };

    if !is_tty(&io::stdin()) || !is_tty(&io::stdout()) {
        eprintln!("Error: kilo must be run in an interactive terminal");
        return ExitCode::FAILURE;
    }

    if let Err(e) = logging::init() {
        eprintln!("Error: cannot open log file: {e}");
        return ExitCode::FAILURE;
    }
    install_panic_hook();

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, fatal = e.is_fatal(), "exiting");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: Config) -> Result<()> {
    let document = match &config.path {
        Some(path) => Document::open(path)?,
        None => Document::new(),
    };

    let mut tty = Tty::open()?;
    let (rows, cols) = match query_window_size(&mut tty) {
        Ok(size) => size,
        Err(e) => {
            clear_screen(&mut tty);
            tty.restore()?;
            return Err(e);
        }
    };
    tracing::info!(rows, cols, path = ?config.path, "editor starting");

    let mut state = EditorState::new(
        document,
        config.path,
        usize::from(rows.saturating_sub(BAR_ROWS)),
        usize::from(cols),
        config.options,
    );
    let help = state.options.help_message.clone();
    state.set_status(help);

    let mut editor = Editor::new(tty, state);
    let result = editor.run();

    let mut tty = editor.into_terminal();
    if result.is_err() {
        clear_screen(&mut tty);
    }
    let restored = tty.restore();
    result.and(restored)
}

/// Best-effort clear before reporting a fatal error.
fn clear_screen(out: &mut impl Write) {
    let _ = out.write_all(sequences::CLEAR_SCREEN.as_bytes());
    let _ = out.write_all(sequences::CURSOR_HOME.as_bytes());
}

/// Restore the terminal before the default hook prints the panic.
fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_saved_mode();
        clear_screen(&mut io::stdout());
        let _ = io::stdout().flush();
        previous(info);
    }));
}
