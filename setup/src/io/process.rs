//! Helpers for running external tools.
//!
//! One invocation either streams its stdout live to the controlling terminal
//! or captures it for parsing, never both. No timeout is applied: a hung tool
//! hangs the setup run. On non-zero exit the error embeds the command line
//! and the tool's stderr text verbatim.

use std::process::{Command, Stdio};

use anyhow::{Context, Result, anyhow};
use tracing::{debug, instrument};

/// Render a command line for diagnostics.
fn render(cmd: &Command) -> String {
    let program = cmd.get_program().to_string_lossy().into_owned();
    let args: Vec<String> = cmd
        .get_args()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    if args.is_empty() {
        program
    } else {
        format!("{} {}", program, args.join(" "))
    }
}

/// Run a command, streaming stdout to the terminal and capturing stderr.
#[instrument(skip_all, fields(command = %render(&cmd)))]
pub fn run_streaming(mut cmd: Command) -> Result<()> {
    let line = render(&cmd);
    debug!("spawning child process");
    let output = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::piped())
        .output()
        .with_context(|| format!("spawn {line}"))?;
    debug!(exit_code = ?output.status.code(), "command finished");

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(anyhow!("{line} failed: {}", stderr.trim()));
    }
    Ok(())
}

/// Run a command, capturing its output; returns trimmed stdout on success.
#[instrument(skip_all, fields(command = %render(&cmd)))]
pub fn run_capture(mut cmd: Command) -> Result<String> {
    let line = render(&cmd);
    debug!("spawning child process");
    let output = cmd
        .stdin(Stdio::null())
        .output()
        .with_context(|| format!("spawn {line}"))?;
    debug!(exit_code = ?output.status.code(), "command finished");

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(anyhow!("{line} failed: {}", stderr.trim()));
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_returns_trimmed_stdout() {
        let mut cmd = Command::new("echo");
        cmd.arg("hello");
        let out = run_capture(cmd).expect("run echo");
        assert_eq!(out, "hello");
    }

    #[test]
    fn capture_embeds_stderr_on_failure() {
        let mut cmd = Command::new("git");
        cmd.arg("definitely-not-a-subcommand");
        let err = run_capture(cmd).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("git definitely-not-a-subcommand failed:"));
    }

    #[test]
    fn streaming_reports_nonzero_exit() {
        let cmd = Command::new("false");
        let err = run_streaming(cmd).unwrap_err();
        assert!(err.to_string().contains("false failed:"));
    }

    #[test]
    fn spawn_failure_names_the_command() {
        let cmd = Command::new("no-such-binary-for-setup-tests");
        let err = run_streaming(cmd).unwrap_err();
        assert!(format!("{err:#}").contains("spawn no-such-binary-for-setup-tests"));
    }
}
