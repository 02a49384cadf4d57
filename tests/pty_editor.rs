//! Visual PTY tests for the `kilo` binary.
//!
//! Spawns the editor in a real pseudo-terminal with portable-pty and parses
//! its output with vt100, so raw mode, geometry discovery and frame output
//! are exercised exactly as a user's terminal would see them.

#![cfg(feature = "pty-tests")]

use portable_pty::{CommandBuilder, PtySize, native_pty_system};
use std::io::{Read, Write};
use std::path::Path;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};
use tempfile::TempDir;

/// Screen capture from the virtual terminal.
#[derive(Debug)]
pub struct ScreenCapture {
    /// Rows of text with trailing blanks trimmed.
    pub rows: Vec<String>,
    /// Cursor position (row, col)
    pub cursor: (u16, u16),
}

impl ScreenCapture {
    /// Check if a specific row contains a substring.
    pub fn row_contains(&self, row: usize, substring: &str) -> bool {
        self.rows.get(row).is_some_and(|r| r.contains(substring))
    }

    /// Find the first row containing a substring.
    pub fn find_row_containing(&self, substring: &str) -> Option<usize> {
        self.rows.iter().position(|r| r.contains(substring))
    }

    /// Dump the screen to a string for debugging.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for (i, row) in self.rows.iter().enumerate() {
            out.push_str(&format!("{i:3}| {row}\n"));
        }
        out
    }
}

/// PTY test harness around the `kilo` binary.
pub struct PtyTestHarness {
    pty_writer: Box<dyn Write + Send>,
    child: Box<dyn portable_pty::Child + Send + Sync>,
    parser: vt100::Parser,
    reader_rx: mpsc::Receiver<Vec<u8>>,
    width: u16,
    height: u16,
}

impl PtyTestHarness {
    /// Spawn `kilo` with `args` in a `width x height` PTY.
    pub fn spawn(args: &[&str], width: u16, height: u16) -> std::io::Result<Self> {
        let pair = native_pty_system()
            .openpty(PtySize {
                rows: height,
                cols: width,
                pixel_width: 0,
                pixel_height: 0,
            })
            .map_err(std::io::Error::other)?;

        let mut cmd = CommandBuilder::new(env!("CARGO_BIN_EXE_kilo"));
        cmd.args(args);
        cmd.env("TERM", "xterm-256color");

        let child = pair
            .slave
            .spawn_command(cmd)
            .map_err(std::io::Error::other)?;

        let mut reader = pair
            .master
            .try_clone_reader()
            .map_err(std::io::Error::other)?;
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let mut buf = [0u8; 4096];
            loop {
                match reader.read(&mut buf) {
                    Ok(0) | Err(_) => break,
                    Ok(n) => {
                        if tx.send(buf[..n].to_vec()).is_err() {
                            break;
                        }
                    }
                }
            }
        });

        let writer = pair.master.take_writer().map_err(std::io::Error::other)?;

        Ok(Self {
            pty_writer: writer,
            child,
            parser: vt100::Parser::new(height, width, 0),
            reader_rx: rx,
            width,
            height,
        })
    }

    fn drain(&mut self) {
        while let Ok(data) = self.reader_rx.try_recv() {
            self.parser.process(&data);
        }
    }

    /// Send raw bytes to the PTY.
    pub fn send(&mut self, bytes: &[u8]) -> std::io::Result<()> {
        self.pty_writer.write_all(bytes)?;
        self.pty_writer.flush()
    }

    /// Capture the current screen state.
    pub fn capture_screen(&mut self) -> ScreenCapture {
        self.drain();
        let screen = self.parser.screen();
        ScreenCapture {
            rows: screen
                .rows(0, self.width)
                .take(usize::from(self.height))
                .map(|r| r.trim_end().to_string())
                .collect(),
            cursor: screen.cursor_position(),
        }
    }

    /// Wait for the screen to contain a specific string.
    pub fn wait_for_text(&mut self, text: &str, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while Instant::now() < deadline {
            if let Ok(data) = self.reader_rx.recv_timeout(Duration::from_millis(50)) {
                self.parser.process(&data);
            }
            if self.capture_screen().find_row_containing(text).is_some() {
                return true;
            }
        }
        false
    }

    /// Wait for the process to exit and return exit code.
    pub fn wait_exit(&mut self, timeout: Duration) -> Option<u32> {
        let deadline = Instant::now() + timeout;
        while Instant::now() < deadline {
            self.drain();
            if let Ok(Some(status)) = self.child.try_wait() {
                return Some(status.exit_code());
            }
            thread::sleep(Duration::from_millis(50));
        }
        None
    }
}

impl Drop for PtyTestHarness {
    fn drop(&mut self) {
        let _ = self.child.kill();
    }
}

fn write_file(dir: &Path, name: &str, body: &[u8]) -> String {
    let path = dir.join(name);
    std::fs::write(&path, body).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn test_opens_file_and_shows_status_bar() {
    let dir = TempDir::new().unwrap();
    let path = write_file(dir.path(), "hello.txt", b"Hello\tWorld\nfoo\n");

    let mut harness = PtyTestHarness::spawn(&[&path], 80, 24).expect("Failed to spawn kilo");
    assert!(
        harness.wait_for_text("hello.txt - 2 lines", Duration::from_secs(5)),
        "status bar should name the file"
    );

    let screen = harness.capture_screen();
    println!("{}", screen.dump());
    assert_eq!(screen.rows[0], "Hello   World");
    assert!(screen.row_contains(22, "1/2"));
    assert!(screen.row_contains(23, "HELP: Ctrl-S = save"));
    assert_eq!(screen.cursor, (0, 0));

    harness.send(b"\x11").unwrap();
    assert_eq!(harness.wait_exit(Duration::from_secs(5)), Some(0));
}

#[test]
fn test_empty_buffer_shows_banner() {
    let mut harness = PtyTestHarness::spawn(&[], 80, 24).expect("Failed to spawn kilo");
    assert!(harness.wait_for_text("Kilo editor -- version", Duration::from_secs(5)));

    let screen = harness.capture_screen();
    assert_eq!(screen.find_row_containing("Kilo editor"), Some(22 / 3));

    harness.send(b"\x11").unwrap();
    assert_eq!(harness.wait_exit(Duration::from_secs(5)), Some(0));
}

#[test]
fn test_edit_save_and_quit() {
    let dir = TempDir::new().unwrap();
    let path = write_file(dir.path(), "edit.txt", b"abc\n");

    let mut harness = PtyTestHarness::spawn(&[&path], 80, 24).expect("Failed to spawn kilo");
    assert!(harness.wait_for_text("edit.txt", Duration::from_secs(5)));

    harness.send(b"\x1b[Fxyz").unwrap();
    assert!(harness.wait_for_text("(modified)", Duration::from_secs(5)));
    harness.send(b"\x13").unwrap();
    assert!(harness.wait_for_text("bytes written to disk", Duration::from_secs(5)));

    harness.send(b"\x11").unwrap();
    assert_eq!(harness.wait_exit(Duration::from_secs(5)), Some(0));
    assert_eq!(std::fs::read(dir.path().join("edit.txt")).unwrap(), b"abcxyz\n");
}

#[test]
fn test_search_moves_cursor() {
    let dir = TempDir::new().unwrap();
    let path = write_file(dir.path(), "search.txt", b"one\ntwo\nthree\n");

    let mut harness = PtyTestHarness::spawn(&[&path], 80, 24).expect("Failed to spawn kilo");
    assert!(harness.wait_for_text("search.txt", Duration::from_secs(5)));

    harness.send(b"\x06thr").unwrap();
    assert!(harness.wait_for_text("Search: thr", Duration::from_secs(5)));
    harness.send(b"\r").unwrap();
    assert!(harness.wait_for_text("3/3", Duration::from_secs(5)));

    harness.send(b"\x11").unwrap();
    assert_eq!(harness.wait_exit(Duration::from_secs(5)), Some(0));
}

#[test]
fn test_missing_file_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.txt");
    let mut harness = PtyTestHarness::spawn(&[missing.to_str().unwrap()], 80, 24)
        .expect("Failed to spawn kilo");
    assert_eq!(harness.wait_exit(Duration::from_secs(5)), Some(1));
}
