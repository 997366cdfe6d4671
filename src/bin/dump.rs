//! Command-line front-end for `clkmgr-dump`.
//!
//! Reads each FILE operand and renders it through a [`Logger`] octet dump on
//! standard error. The threshold comes from `--level`, then
//! `CLKMGR_LOG_LEVEL`, then defaults to `debug` so dumps are visible.

use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use clap::{Arg, ArgAction, Command};
use logging::{
    LogLevel, LogLevelParseError, Logger, LoggerConfig, OsErrorCode, call_site, log_error, log_info,
};

const PROGRAM_NAME: &str = "clkmgr-dump";

/// Exit status when every operand was dumped.
const EXIT_SUCCESS: u8 = 0;
/// Exit status when at least one operand could not be read.
const EXIT_READ_FAILURE: u8 = 1;
/// Exit status for invalid command lines and configuration.
const EXIT_USAGE: u8 = 2;

/// Builds the `clap` command used for parsing.
fn clap_command() -> Command {
    Command::new(PROGRAM_NAME)
        .version(env!("CARGO_PKG_VERSION"))
        .about("Hex-dump files through the clkmgr diagnostic logger.")
        .arg(
            Arg::new("level")
                .long("level")
                .short('l')
                .value_name("LEVEL")
                .help("Log threshold: debug, info or error (default: $CLKMGR_LOG_LEVEL, else debug).")
                .value_parser(|value: &str| value.parse::<LogLevel>()),
        )
        .arg(
            Arg::new("message")
                .long("message")
                .short('m')
                .value_name("TEXT")
                .help("Header text for each dump (default: the file path)."),
        )
        .arg(
            Arg::new("files")
                .value_name("FILE")
                .required(true)
                .num_args(1..)
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Append),
        )
}

/// Parses `args`, dumps every operand and returns the process exit status.
///
/// Help and version output go to `stdout`; every diagnostic goes to `stderr`.
pub fn run_with<I, T, Out, Err>(args: I, stdout: &mut Out, stderr: &mut Err) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    Out: Write,
    Err: Write,
{
    let matches = match clap_command().try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(error) => {
            let target: &mut dyn Write = if error.use_stderr() { stderr } else { stdout };
            let _ = write!(target, "{}", error.render());
            return u8::try_from(error.exit_code()).unwrap_or(EXIT_USAGE);
        }
    };

    let level = match matches.get_one::<LogLevel>("level") {
        Some(level) => *level,
        None => match resolve_env_level() {
            Ok(level) => level,
            Err(error) => {
                let _ = writeln!(stderr, "{PROGRAM_NAME}: {error}");
                return EXIT_USAGE;
            }
        },
    };

    let header = matches.get_one::<String>("message");
    let logger = Logger::with_level(stderr, level);
    let mut failed = false;

    for path in matches.get_many::<PathBuf>("files").into_iter().flatten() {
        match fs::read(path) {
            Ok(bytes) => {
                let fallback = path.display().to_string();
                let message = header.map_or(fallback.as_str(), String::as_str);
                logger.dump_octets(message, &bytes, call_site!());
                log_info!(logger, "dumped {} bytes from {}", bytes.len(), path.display());
            }
            Err(error) => {
                failed = true;
                log_error!(
                    logger,
                    OsErrorCode::from_io(&error),
                    "cannot read {}",
                    path.display()
                );
            }
        }
    }

    if failed {
        EXIT_READ_FAILURE
    } else {
        EXIT_SUCCESS
    }
}

/// Threshold from `CLKMGR_LOG_LEVEL`, or `debug` when it is unset.
fn resolve_env_level() -> Result<LogLevel, LogLevelParseError> {
    Ok(LoggerConfig::level_from_env()?.unwrap_or(LogLevel::Debug))
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_support::ScratchDir;

    fn run(args: &[&str]) -> (u8, String, String) {
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let status = run_with(args.iter().copied(), &mut stdout, &mut stderr);
        (
            status,
            String::from_utf8(stdout).expect("stdout utf-8"),
            String::from_utf8(stderr).expect("stderr utf-8"),
        )
    }

    #[test]
    fn dumps_file_with_explicit_level() {
        let scratch = ScratchDir::new().expect("scratch");
        let path = scratch.write_file("reply.bin", &[0x00, 0x0a, 0xff]).expect("write");
        let path = path.to_str().expect("utf-8 path");

        let (status, stdout, stderr) =
            run(&[PROGRAM_NAME, "--level", "debug", "-m", "test", path]);
        assert_eq!(status, EXIT_SUCCESS);
        assert!(stdout.is_empty());
        let lines: Vec<&str> = stderr.lines().collect();
        assert!(lines[0].starts_with("*   Info: test at line "));
        assert!(lines[0].ends_with(":run_with"));
        assert_eq!(lines[1], "0x00 0x0a 0xff");
        assert!(lines[2].starts_with("*   Info: dumped 3 bytes from "));
    }

    #[test]
    fn error_level_prints_nothing_for_readable_files() {
        let scratch = ScratchDir::new().expect("scratch");
        let path = scratch.write_file("a.bin", &[1, 2, 3]).expect("write");
        let path = path.to_str().expect("utf-8 path");

        let (status, _, stderr) = run(&[PROGRAM_NAME, "--level", "error", path]);
        assert_eq!(status, EXIT_SUCCESS);
        assert!(stderr.is_empty());
    }

    #[test]
    fn missing_file_reports_error_and_continues() {
        let scratch = ScratchDir::new().expect("scratch");
        let present = scratch.write_file("b.bin", &[0x42]).expect("write");
        let missing = scratch.path().join("missing.bin");

        let (status, _, stderr) = run(&[
            PROGRAM_NAME,
            "--level",
            "info",
            missing.to_str().expect("utf-8 path"),
            present.to_str().expect("utf-8 path"),
        ]);
        assert_eq!(status, EXIT_READ_FAILURE);
        let lines: Vec<&str> = stderr.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("*** Error: cannot read "));
        assert!(lines[0].contains("missing.bin "));
        assert!(lines[1].starts_with("*   Info: dumped 1 bytes from "));
    }

    #[test]
    fn invalid_level_is_a_usage_error() {
        let (status, stdout, stderr) = run(&[PROGRAM_NAME, "--level", "loud", "x"]);
        assert_eq!(status, EXIT_USAGE);
        assert!(stdout.is_empty());
        assert!(stderr.contains("loud"));
    }

    #[test]
    fn help_goes_to_stdout() {
        let (status, stdout, stderr) = run(&[PROGRAM_NAME, "--help"]);
        assert_eq!(status, EXIT_SUCCESS);
        assert!(stdout.contains("Usage:"));
        assert!(stderr.is_empty());
    }
}
