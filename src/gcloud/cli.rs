//! gcloud CLI command execution.
//!
//! Provides utilities for running gcloud commands and decoding their JSON output.

use crate::config;
use crate::error::{CommandError, InspectorError};
use colored::Colorize;
use serde::de::DeserializeOwned;
use std::process::Command;

/// Run `program` with `args` and return its stdout.
///
/// Arguments are passed as given, never re-split.
///
/// # Arguments
/// * `program` - Executable name or path
/// * `args` - Arguments, one element per argv entry
///
/// # Returns
/// * `Ok(String)` - The stdout output on success
/// * `Err` - If the command cannot start, exits non-zero, or produces too much output
pub fn run(program: &str, args: &[&str]) -> Result<String, CommandError> {
    let cmd = format!("{program} {}", args.join(" "));
    log::debug!("run({cmd})", cmd = cmd.on_blue());
    log::trace!("argv program={program:?} args={args:?}");

    let output = Command::new(program).args(args).output().map_err(|e| {
        log::error!("Command execution failed: {}", e);
        CommandError::Spawn(e)
    })?;

    if output.status.success() {
        log::debug!("Success cmd: {cmd}");
        log::debug!("Success output.stdout.len(): {}", output.stdout.len());

        if output.stdout.len() > config::MAX_OUTPUT_BYTES {
            return Err(CommandError::OutputTooLarge(output.stdout.len()));
        }
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        log::trace!(
            "code={code:?}, status={status}\n┎######\nstderr=\n{stderr}\n┖######",
            code = output.status.code(),
            status = output.status,
            stderr = stderr.red()
        );
        log::warn!(
            "{failed} to run {cmd}",
            failed = "failed".on_red(),
            cmd = cmd.on_blue()
        );
        return Err(CommandError::Failed {
            code: output.status.code(),
            stderr,
        });
    }

    Ok(String::from_utf8(output.stdout)?)
}

/// Run a gcloud command and decode its JSON output into `T`.
///
/// `operation` names the call in error messages.
pub fn run_json<T: DeserializeOwned>(
    program: &str,
    args: &[&str],
    operation: &str,
) -> Result<T, InspectorError> {
    let output = run(program, args).map_err(|e| InspectorError::inventory(operation, e))?;
    parse_json(&output, operation)
}

/// Decode JSON, reporting the path of the first field that fails.
pub fn parse_json<T: DeserializeOwned>(json: &str, operation: &str) -> Result<T, InspectorError> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        log::debug!("OUTPUT START:\n\n{}\n\nOUTPUT END\n", json);
        InspectorError::malformed(format!(
            "{operation}: path={} error={}",
            e.path(),
            e.inner()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[test]
    fn test_run_missing_binary() {
        let result = run("definitely-not-a-real-gcloud-binary-4711", &["--version"]);
        assert!(matches!(result, Err(CommandError::Spawn(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_run_failure_carries_stderr() {
        let result = run("sh", &["-c", "echo 'PERMISSION_DENIED' >&2; exit 3"]);
        match result {
            Err(CommandError::Failed { code, stderr }) => {
                assert_eq!(code, Some(3));
                assert_eq!(stderr, "PERMISSION_DENIED");
            }
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_run_keeps_arguments_whole() {
        let stdout = run("printf", &["%s|", "a b", "--c d"]).expect("printf should run");
        assert_eq!(stdout, "a b|--c d|");
    }

    #[test]
    fn test_parse_json_reports_path() {
        #[derive(Deserialize, Debug)]
        #[allow(dead_code)]
        struct Item {
            name: String,
        }
        let err = parse_json::<Vec<Item>>(r#"[{"name": "a"}, {"name": 7}]"#, "zones p1")
            .expect_err("name 7 is not a string");
        let msg = err.to_string();
        assert!(msg.contains("zones p1"), "{msg}");
        assert!(msg.contains("[1].name"), "{msg}");
    }
}
