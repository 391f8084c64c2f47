//! Typed session handles over the tmux command layer.
//!
//! A session is identified solely by its name, matching tmux's own model.
//! Handles hold no state beyond that name, so they can go stale if the
//! server changes out from under them; every query re-asks tmux instead of
//! caching.

use crate::error::TmuxError;
use std::fmt;
use std::path::PathBuf;

use super::windows::{parse_window_line, Window};
use super::TmuxClient;

/// Options applied when creating a session.
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Name for the initial window (`-n`).
    pub window_name: Option<String>,
    /// Working directory for the initial window (`-c`).
    pub start_directory: Option<PathBuf>,
}

impl SessionOptions {
    /// Extra `new-session` arguments for the options that are set.
    fn args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if let Some(window_name) = &self.window_name {
            args.push("-n".to_string());
            args.push(window_name.clone());
        }
        if let Some(dir) = &self.start_directory {
            args.push("-c".to_string());
            args.push(dir.display().to_string());
        }
        args
    }
}

/// Handle to one named tmux session.
#[derive(Clone)]
pub struct Session {
    client: TmuxClient,
    name: String,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session").field("name", &self.name).finish()
    }
}

impl Session {
    /// Create the named session on the server, detached, and return a handle
    /// to it. tmux rejects duplicate names; that surfaces as a command error.
    pub async fn create(
        client: TmuxClient,
        name: impl Into<String>,
        options: &SessionOptions,
    ) -> Result<Self, TmuxError> {
        let name = name.into();
        client.new_session(&name, &options.args()).await?;
        Ok(Self { client, name })
    }

    /// Handle to an already-existing session. No subprocess is spawned and
    /// the name is not verified against the server.
    pub fn attach(client: TmuxClient, name: impl Into<String>) -> Self {
        Self {
            client,
            name: name.into(),
        }
    }

    /// The session name as last observed by this handle.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether a session of this handle's name currently exists, determined
    /// by re-listing all sessions.
    pub async fn exists(&self) -> Result<bool, TmuxError> {
        session_exists(&self.client, &self.name).await
    }

    /// Kill the session. On success the handle must not be reused.
    pub async fn kill(&self) -> Result<(), TmuxError> {
        self.client.kill_session(&self.name).await
    }

    /// Rename the session. The stored name updates only when tmux reports
    /// success; on failure the handle keeps the old name and the error is
    /// returned.
    pub async fn rename(&mut self, new_name: impl Into<String>) -> Result<(), TmuxError> {
        let new_name = new_name.into();
        self.client.rename_session(&self.name, &new_name).await?;
        self.name = new_name;
        Ok(())
    }

    /// Send key tokens to pane 0 of the named window.
    pub async fn send_keys(&self, window_name: &str, keys: &[String]) -> Result<(), TmuxError> {
        let target = self.pane_target(window_name);
        self.client.send_keys(&target, keys).await
    }

    /// The windows of this session, freshly listed.
    pub async fn windows(&self) -> Result<Vec<Window>, TmuxError> {
        let lines = self.client.list_windows(&self.name).await?;
        lines.iter().map(|line| parse_window_line(line)).collect()
    }

    /// Create the named window unless the session already has one. Safe to
    /// call repeatedly; a race with an out-of-band creation between the list
    /// and the create is not guarded.
    pub async fn ensure_window(&self, window_name: &str) -> Result<(), TmuxError> {
        let windows = self.windows().await?;
        if windows.iter().any(|window| window.name == window_name) {
            return Ok(());
        }
        self.client.new_window(&self.name, window_name).await
    }

    /// The visible text of pane 0 of the named window.
    pub async fn capture(&self, window_name: &str) -> Result<Vec<String>, TmuxError> {
        let target = self.pane_target(window_name);
        self.client.capture_pane(&target).await
    }

    /// Pane 0 of a window, in tmux target syntax.
    fn pane_target(&self, window_name: &str) -> String {
        format!("{}:{}.0", self.name, window_name)
    }
}

/// All sessions on the server.
///
/// A failed listing command means no server is reachable and yields an empty
/// list; a spawn failure still propagates, since a missing binary is an
/// environment problem rather than an empty server.
pub async fn list_sessions(client: &TmuxClient) -> Result<Vec<Session>, TmuxError> {
    let names = match client.list_sessions().await {
        Ok(names) => names,
        Err(TmuxError::CommandFailed { .. }) => Vec::new(),
        Err(e) => return Err(e),
    };
    Ok(names
        .into_iter()
        .map(|name| Session::attach(client.clone(), name))
        .collect())
}

/// Whether a session of the given name exists, by re-listing all sessions
/// and comparing names.
pub async fn session_exists(client: &TmuxClient, name: &str) -> Result<bool, TmuxError> {
    let sessions = list_sessions(client).await?;
    Ok(sessions.iter().any(|session| session.name() == name))
}
