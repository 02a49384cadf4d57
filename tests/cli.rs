//! Command-line behaviour that does not need a terminal.

use std::process::{Command, Stdio};

fn kilo(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_kilo"))
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("Failed to run kilo")
}

#[test]
fn test_help_works_without_terminal() {
    let out = kilo(&["--help"]);
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("Ctrl-F"));
}

#[test]
fn test_version_prints_package_version() {
    let out = kilo(&["-V"]);
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8_lossy(&out.stdout).trim(),
        format!("kilo {}", env!("CARGO_PKG_VERSION"))
    );
}

#[test]
fn test_unknown_option_fails() {
    let out = kilo(&["--bogus"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Unknown option: --bogus"));
}

#[test]
fn test_refuses_to_run_without_terminal() {
    let out = kilo(&[]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("interactive terminal"));
    assert!(out.stdout.is_empty(), "no frame should be drawn");
}
