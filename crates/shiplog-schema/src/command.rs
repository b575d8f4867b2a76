//! Running external programs and capturing their output

use std::process::Command;

use tracing::debug;

use shiplog_core::error::{Result, SchemaError};

/// Run a program to completion and return its standard output.
///
/// Spawn failures and non-zero exits become `CommandFailed`, carrying the
/// program's stderr when there is any.
pub(crate) fn capture_stdout(program: &str, args: &[String]) -> Result<Vec<u8>> {
    let command_line = std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ");
    debug!(command = %command_line, "running command");

    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|e| SchemaError::CommandFailed {
            command: command_line.clone(),
            reason: e.to_string(),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let reason = if stderr.trim().is_empty() {
            output.status.to_string()
        } else {
            stderr.trim().to_string()
        };
        return Err(SchemaError::CommandFailed {
            command: command_line,
            reason,
        }
        .into());
    }

    debug!(command = %command_line, bytes = output.stdout.len(), "command finished");
    Ok(output.stdout)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use shiplog_core::ShiplogError;

    fn sh(script: &str) -> Vec<String> {
        vec!["-c".to_string(), script.to_string()]
    }

    #[test]
    fn test_captures_stdout() {
        let out = capture_stdout("sh", &sh("printf hello")).unwrap();
        assert_eq!(out, b"hello");
    }

    #[test]
    fn test_nonzero_exit_reports_stderr() {
        let err = capture_stdout("sh", &sh("echo boom >&2; exit 3")).unwrap_err();
        match err {
            ShiplogError::Schema(SchemaError::CommandFailed { reason, .. }) => {
                assert_eq!(reason, "boom")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_failure_names_full_command_line() {
        let err = capture_stdout("sh", &sh("exit 1")).unwrap_err();
        match err {
            ShiplogError::Schema(SchemaError::CommandFailed { command, .. }) => {
                assert_eq!(command, "sh -c exit 1")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_program() {
        let err = capture_stdout("shiplog-no-such-program", &[]).unwrap_err();
        assert!(matches!(
            err,
            ShiplogError::Schema(SchemaError::CommandFailed { .. })
        ));
    }
}
