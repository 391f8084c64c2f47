//! Programmatic control of tmux sessions and windows.
//!
//! Two layers: the command layer ([`client`], [`process`]) builds
//! per-operation argument lists and shells out to the tmux binary, returning
//! the non-empty output lines; the session layer ([`session`]) wraps those
//! results in typed handles. Everything is strictly request/response, one
//! subprocess per operation, with no state held beyond the session name.

mod client;
mod process;
mod session;
mod windows;

pub use client::{CliDriver, TmuxCommands};
pub use session::{list_sessions, session_exists, Session, SessionOptions};
pub use windows::{parse_window_line, Window, LIST_WINDOWS_FORMAT};

use crate::config::Config;
use crate::error::TmuxError;
use std::sync::Arc;

/// Cheap-to-clone handle to a tmux driver, shared by session handles.
#[derive(Clone)]
pub struct TmuxClient {
    inner: Arc<dyn TmuxCommands>,
}

impl TmuxClient {
    /// Client for the binary and socket named in the configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::from_commands(CliDriver::new(
            config.tmux.binary.clone(),
            config.tmux.socket.clone(),
        ))
    }

    /// Client over any driver implementation. Tests use this to substitute
    /// scripted drivers for the subprocess-backed one.
    pub fn from_commands(commands: impl TmuxCommands + 'static) -> Self {
        Self {
            inner: Arc::new(commands),
        }
    }

    /// See [`TmuxCommands::new_session`].
    pub async fn new_session(&self, name: &str, extra_args: &[String]) -> Result<(), TmuxError> {
        self.inner.new_session(name, extra_args).await
    }

    /// See [`TmuxCommands::list_sessions`].
    pub async fn list_sessions(&self) -> Result<Vec<String>, TmuxError> {
        self.inner.list_sessions().await
    }

    /// See [`TmuxCommands::rename_session`].
    pub async fn rename_session(&self, old: &str, new: &str) -> Result<(), TmuxError> {
        self.inner.rename_session(old, new).await
    }

    /// See [`TmuxCommands::kill_session`].
    pub async fn kill_session(&self, name: &str) -> Result<(), TmuxError> {
        self.inner.kill_session(name).await
    }

    /// See [`TmuxCommands::new_window`].
    pub async fn new_window(&self, session: &str, name: &str) -> Result<(), TmuxError> {
        self.inner.new_window(session, name).await
    }

    /// See [`TmuxCommands::list_windows`].
    pub async fn list_windows(&self, session: &str) -> Result<Vec<String>, TmuxError> {
        self.inner.list_windows(session).await
    }

    /// See [`TmuxCommands::send_keys`].
    pub async fn send_keys(&self, target: &str, keys: &[String]) -> Result<(), TmuxError> {
        self.inner.send_keys(target, keys).await
    }

    /// See [`TmuxCommands::capture_pane`].
    pub async fn capture_pane(&self, target: &str) -> Result<Vec<String>, TmuxError> {
        self.inner.capture_pane(target).await
    }
}
