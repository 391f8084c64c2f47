//! Subprocess plumbing shared by the tmux command layer.

use crate::error::TmuxError;
use tokio::process::Command;

/// Captured result of one tmux invocation.
#[derive(Debug, Clone)]
pub(super) struct RawOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Spawn the tmux binary with the given arguments and wait for it to exit.
///
/// No timeout is applied; the future resolves when the child does. The
/// child is killed if the owning future is dropped mid-flight.
pub(super) async fn run_tmux(binary: &str, args: &[String]) -> Result<RawOutput, TmuxError> {
    tracing::debug!("running {} {}", binary, args.join(" "));
    let mut cmd = Command::new(binary);
    cmd.kill_on_drop(true);
    cmd.args(args);

    let output = cmd
        .output()
        .await
        .map_err(|e| TmuxError::Spawn(format!("{binary}: {e}")))?;

    Ok(RawOutput {
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    })
}

/// Convert non-zero command status into contextual command errors.
pub(super) fn ensure_success(output: RawOutput, command: &str) -> Result<RawOutput, TmuxError> {
    if output.exit_code == 0 {
        return Ok(output);
    }

    let mut detail = if output.stderr.trim().is_empty() {
        output.stdout.trim().to_string()
    } else {
        output.stderr.trim().to_string()
    };
    if detail.is_empty() {
        detail = format!("command exited with {}", output.exit_code);
    }

    Err(TmuxError::CommandFailed {
        command: command.to_string(),
        detail,
    })
}

/// Split captured output into its non-empty lines, stdout before stderr.
pub(super) fn split_lines(output: &RawOutput) -> Vec<String> {
    output
        .stdout
        .lines()
        .chain(output.stderr.lines())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
