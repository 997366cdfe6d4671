use std::process::Command;

use logging::LOG_LEVEL_ENV;
use test_support::ScratchDir;

fn binary_output(args: &[&str], level_env: Option<&str>) -> std::process::Output {
    let path = env!("CARGO_BIN_EXE_clkmgr-dump");
    let mut command = Command::new(path);
    command.args(args).env_remove(LOG_LEVEL_ENV);
    if let Some(level) = level_env {
        command.env(LOG_LEVEL_ENV, level);
    }
    command
        .output()
        .unwrap_or_else(|error| panic!("failed to run {}: {}", path, error))
}

fn stderr_utf8(output: &std::process::Output) -> String {
    String::from_utf8(output.stderr.clone()).expect("stderr is UTF-8")
}

#[test]
fn clkmgr_dump_help_lists_usage() {
    let output = binary_output(&["--help"], None);
    assert!(output.status.success(), "--help should succeed");
    assert!(
        output.stderr.is_empty(),
        "help output should not write to stderr"
    );
    let stdout = String::from_utf8(output.stdout).expect("stdout is UTF-8");
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("clkmgr-dump"));
}

#[test]
fn clkmgr_dump_without_operands_shows_usage() {
    let output = binary_output(&[], None);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_utf8(&output).contains("Usage:"));
}

#[test]
fn clkmgr_dump_renders_file_on_stderr() {
    let scratch = ScratchDir::new().expect("scratch dir");
    let bytes: Vec<u8> = (0..17).collect();
    let path = scratch.write_file("frame.bin", &bytes).expect("write");

    let output = binary_output(&["-m", "frame", path.to_str().expect("utf-8 path")], None);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = stderr_utf8(&output);
    let lines: Vec<&str> = stderr.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("*   Info: frame at line "));
    assert_eq!(
        lines[1],
        "0x00 0x01 0x02 0x03 0x04 0x05 0x06 0x07 0x08 0x09 0x0a 0x0b 0x0c 0x0d 0x0e 0x0f"
    );
    assert_eq!(lines[2], "0x10");
    assert!(lines[3].starts_with("*   Info: dumped 17 bytes from "));
}

#[test]
fn clkmgr_dump_honours_level_env_var() {
    let scratch = ScratchDir::new().expect("scratch dir");
    let path = scratch.write_file("quiet.bin", &[1, 2, 3]).expect("write");
    let path = path.to_str().expect("utf-8 path");

    let output = binary_output(&[path], Some("info"));
    assert!(output.status.success());
    let stderr = stderr_utf8(&output);
    assert!(!stderr.contains("0x01"));
    assert!(stderr.starts_with("*   Info: dumped 3 bytes from "));

    let output = binary_output(&["--level", "debug", path], Some("error"));
    assert!(stderr_utf8(&output).contains("0x01 0x02 0x03"));
}

#[test]
fn clkmgr_dump_rejects_invalid_env_level() {
    let output = binary_output(&["whatever.bin"], Some("chatty"));
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_utf8(&output).contains("chatty"));
}

#[test]
fn clkmgr_dump_missing_file_exits_with_failure() {
    let scratch = ScratchDir::new().expect("scratch dir");
    let missing = scratch.path().join("absent.bin");

    let output = binary_output(&[missing.to_str().expect("utf-8 path")], None);
    assert_eq!(output.status.code(), Some(1));
    let stderr = stderr_utf8(&output);
    assert!(stderr.starts_with("*** Error: cannot read "));
    assert!(stderr.contains(" at line "));
}
