//! The tmux driver contract and its subprocess-backed implementation.

use crate::error::TmuxError;
use async_trait::async_trait;

use super::process::{ensure_success, run_tmux, split_lines};
use super::windows::LIST_WINDOWS_FORMAT;

/// Operations the session layer needs from a tmux driver.
///
/// The production implementation shells out to the tmux binary; tests
/// substitute scripted implementations so session logic runs without
/// spawning subprocesses.
#[async_trait]
pub trait TmuxCommands: Send + Sync {
    /// `new-session -s <name> -d` plus caller-supplied extra arguments.
    async fn new_session(&self, name: &str, extra_args: &[String]) -> Result<(), TmuxError>;
    /// `list-sessions -F '#{session_name}'`; one session name per line.
    async fn list_sessions(&self) -> Result<Vec<String>, TmuxError>;
    /// `rename-session -t <old> <new>`.
    async fn rename_session(&self, old: &str, new: &str) -> Result<(), TmuxError>;
    /// `kill-session -t <name>`.
    async fn kill_session(&self, name: &str) -> Result<(), TmuxError>;
    /// `new-window -d -t <session> -n <name>`.
    async fn new_window(&self, session: &str, name: &str) -> Result<(), TmuxError>;
    /// `list-windows -t <session> -F ...`; one unparsed line per window.
    async fn list_windows(&self, session: &str) -> Result<Vec<String>, TmuxError>;
    /// `send-keys -t <target> <keys...>`.
    async fn send_keys(&self, target: &str, keys: &[String]) -> Result<(), TmuxError>;
    /// `capture-pane -p -t <target>`; the visible pane lines.
    async fn capture_pane(&self, target: &str) -> Result<Vec<String>, TmuxError>;
}

/// Driver that invokes the configured tmux binary, one subprocess per call.
#[derive(Debug, Clone)]
pub struct CliDriver {
    binary: String,
    socket: Option<String>,
}

impl CliDriver {
    /// A driver for the given binary, optionally pinned to a `-L` socket so
    /// it talks to an isolated server.
    pub fn new(binary: impl Into<String>, socket: Option<String>) -> Self {
        Self {
            binary: binary.into(),
            socket,
        }
    }

    async fn run(&self, subcommand: &str, args: &[String]) -> Result<Vec<String>, TmuxError> {
        let invocation = invocation_args(self.socket.as_deref(), subcommand, args);
        let output = run_tmux(&self.binary, &invocation).await?;
        let output = ensure_success(output, subcommand)?;
        Ok(split_lines(&output))
    }
}

#[async_trait]
impl TmuxCommands for CliDriver {
    async fn new_session(&self, name: &str, extra_args: &[String]) -> Result<(), TmuxError> {
        self.run("new-session", &new_session_args(name, extra_args))
            .await?;
        Ok(())
    }

    async fn list_sessions(&self) -> Result<Vec<String>, TmuxError> {
        self.run("list-sessions", &list_sessions_args()).await
    }

    async fn rename_session(&self, old: &str, new: &str) -> Result<(), TmuxError> {
        self.run("rename-session", &rename_session_args(old, new))
            .await?;
        Ok(())
    }

    async fn kill_session(&self, name: &str) -> Result<(), TmuxError> {
        self.run("kill-session", &kill_session_args(name)).await?;
        Ok(())
    }

    async fn new_window(&self, session: &str, name: &str) -> Result<(), TmuxError> {
        self.run("new-window", &new_window_args(session, name))
            .await?;
        Ok(())
    }

    async fn list_windows(&self, session: &str) -> Result<Vec<String>, TmuxError> {
        self.run("list-windows", &list_windows_args(session)).await
    }

    async fn send_keys(&self, target: &str, keys: &[String]) -> Result<(), TmuxError> {
        self.run("send-keys", &send_keys_args(target, keys)).await?;
        Ok(())
    }

    async fn capture_pane(&self, target: &str) -> Result<Vec<String>, TmuxError> {
        self.run("capture-pane", &capture_pane_args(target)).await
    }
}

// ---------------------------------------------------------------------------
// Argument builders
// ---------------------------------------------------------------------------

/// Fixed detached create, then whatever the caller appends.
fn new_session_args(name: &str, extra_args: &[String]) -> Vec<String> {
    let mut args = vec!["-s".to_string(), name.to_string(), "-d".to_string()];
    args.extend(extra_args.iter().cloned());
    args
}

fn list_sessions_args() -> Vec<String> {
    vec!["-F".to_string(), "#{session_name}".to_string()]
}

fn rename_session_args(old: &str, new: &str) -> Vec<String> {
    vec!["-t".to_string(), old.to_string(), new.to_string()]
}

fn kill_session_args(name: &str) -> Vec<String> {
    vec!["-t".to_string(), name.to_string()]
}

/// `-d` keeps window creation from stealing focus in an attached client.
fn new_window_args(session: &str, name: &str) -> Vec<String> {
    vec![
        "-d".to_string(),
        "-t".to_string(),
        session.to_string(),
        "-n".to_string(),
        name.to_string(),
    ]
}

fn list_windows_args(session: &str) -> Vec<String> {
    vec![
        "-t".to_string(),
        session.to_string(),
        "-F".to_string(),
        LIST_WINDOWS_FORMAT.to_string(),
    ]
}

fn send_keys_args(target: &str, keys: &[String]) -> Vec<String> {
    let mut args = vec!["-t".to_string(), target.to_string()];
    args.extend(keys.iter().cloned());
    args
}

fn capture_pane_args(target: &str) -> Vec<String> {
    vec!["-p".to_string(), "-t".to_string(), target.to_string()]
}

/// Full command line for one invocation: optional `-L` socket selector,
/// then the subcommand, then its arguments.
fn invocation_args(socket: Option<&str>, subcommand: &str, args: &[String]) -> Vec<String> {
    let mut full = Vec::with_capacity(args.len() + 3);
    if let Some(socket) = socket {
        full.push("-L".to_string());
        full.push(socket.to_string());
    }
    full.push(subcommand.to_string());
    full.extend(args.iter().cloned());
    full
}
