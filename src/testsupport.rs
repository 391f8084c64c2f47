//! Shared test fixtures for config and session-layer test modules.
//!
//! `FakeTmux` is a scripted in-memory driver so session logic can be
//! exercised without a tmux server or any subprocess. `TestTempDir` backs
//! config-file fixtures. Both are intentionally std-only plumbing.

use crate::error::TmuxError;
use crate::tmux::TmuxCommands;
use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

// ---------------------------------------------------------------------------
// FakeTmux
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
enum ScriptedFailure {
    Command(String),
    Spawn(String),
}

#[derive(Debug)]
struct FakeSession {
    name: String,
    windows: Vec<String>,
}

#[derive(Debug, Default)]
struct FakeState {
    sessions: Vec<FakeSession>,
    calls: Vec<String>,
    failures: Vec<(String, ScriptedFailure)>,
    window_lines: Option<Vec<String>>,
    capture_lines: Vec<String>,
}

/// In-memory tmux double implementing the driver contract.
///
/// Clones share state, so a test can keep one handle for assertions after
/// moving another into a client.
#[derive(Clone, Default)]
pub struct FakeTmux {
    state: Arc<Mutex<FakeState>>,
}

impl FakeTmux {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed one session holding the given window names, indexed in order.
    pub fn with_session(self, name: &str, windows: &[&str]) -> Self {
        self.state.lock().expect("fake state").sessions.push(FakeSession {
            name: name.to_string(),
            windows: windows.iter().map(|w| w.to_string()).collect(),
        });
        self
    }

    /// Script a non-zero exit for one subcommand, every time it runs.
    pub fn fail_command(self, subcommand: &str, detail: &str) -> Self {
        self.state.lock().expect("fake state").failures.push((
            subcommand.to_string(),
            ScriptedFailure::Command(detail.to_string()),
        ));
        self
    }

    /// Script a spawn failure for one subcommand, every time it runs.
    pub fn fail_spawn(self, subcommand: &str, detail: &str) -> Self {
        self.state.lock().expect("fake state").failures.push((
            subcommand.to_string(),
            ScriptedFailure::Spawn(detail.to_string()),
        ));
        self
    }

    /// Replace list-windows output with fixed raw lines.
    pub fn with_window_lines(self, lines: &[&str]) -> Self {
        self.state.lock().expect("fake state").window_lines =
            Some(lines.iter().map(|line| line.to_string()).collect());
        self
    }

    /// Script the text returned by capture-pane.
    pub fn with_capture_lines(self, lines: &[&str]) -> Self {
        self.state.lock().expect("fake state").capture_lines =
            lines.iter().map(|line| line.to_string()).collect();
        self
    }

    /// Every driver call so far, as `subcommand arg arg ...` strings.
    pub fn calls(&self) -> Vec<String> {
        self.state.lock().expect("fake state").calls.clone()
    }

    fn record(&self, subcommand: &str, args: &[String]) {
        let mut parts = vec![subcommand.to_string()];
        parts.extend(args.iter().cloned());
        self.state
            .lock()
            .expect("fake state")
            .calls
            .push(parts.join(" "));
    }

    fn scripted_failure(&self, subcommand: &str) -> Option<TmuxError> {
        let state = self.state.lock().expect("fake state");
        state
            .failures
            .iter()
            .find(|(command, _)| command == subcommand)
            .map(|(command, failure)| match failure {
                ScriptedFailure::Command(detail) => TmuxError::CommandFailed {
                    command: command.clone(),
                    detail: detail.clone(),
                },
                ScriptedFailure::Spawn(detail) => TmuxError::Spawn(detail.clone()),
            })
    }
}

/// Initial window name tmux would pick for a create call: `-n` when given,
/// the default shell window otherwise.
fn initial_window_name(extra_args: &[String]) -> String {
    let mut args = extra_args.iter();
    while let Some(arg) = args.next() {
        if arg == "-n" {
            if let Some(name) = args.next() {
                return name.clone();
            }
        }
    }
    "shell".to_string()
}

#[async_trait]
impl TmuxCommands for FakeTmux {
    async fn new_session(&self, name: &str, extra_args: &[String]) -> Result<(), TmuxError> {
        let mut recorded = vec![name.to_string()];
        recorded.extend(extra_args.iter().cloned());
        self.record("new-session", &recorded);
        if let Some(err) = self.scripted_failure("new-session") {
            return Err(err);
        }
        let mut state = self.state.lock().expect("fake state");
        if state.sessions.iter().any(|session| session.name == name) {
            return Err(TmuxError::CommandFailed {
                command: "new-session".into(),
                detail: format!("duplicate session: {name}"),
            });
        }
        state.sessions.push(FakeSession {
            name: name.to_string(),
            windows: vec![initial_window_name(extra_args)],
        });
        Ok(())
    }

    async fn list_sessions(&self) -> Result<Vec<String>, TmuxError> {
        self.record("list-sessions", &[]);
        if let Some(err) = self.scripted_failure("list-sessions") {
            return Err(err);
        }
        let state = self.state.lock().expect("fake state");
        Ok(state
            .sessions
            .iter()
            .map(|session| session.name.clone())
            .collect())
    }

    async fn rename_session(&self, old: &str, new: &str) -> Result<(), TmuxError> {
        self.record("rename-session", &[old.to_string(), new.to_string()]);
        if let Some(err) = self.scripted_failure("rename-session") {
            return Err(err);
        }
        let mut state = self.state.lock().expect("fake state");
        if state.sessions.iter().any(|session| session.name == new) {
            return Err(TmuxError::CommandFailed {
                command: "rename-session".into(),
                detail: format!("duplicate session: {new}"),
            });
        }
        match state.sessions.iter_mut().find(|session| session.name == old) {
            Some(session) => {
                session.name = new.to_string();
                Ok(())
            }
            None => Err(TmuxError::CommandFailed {
                command: "rename-session".into(),
                detail: format!("can't find session: {old}"),
            }),
        }
    }

    async fn kill_session(&self, name: &str) -> Result<(), TmuxError> {
        self.record("kill-session", &[name.to_string()]);
        if let Some(err) = self.scripted_failure("kill-session") {
            return Err(err);
        }
        let mut state = self.state.lock().expect("fake state");
        let before = state.sessions.len();
        state.sessions.retain(|session| session.name != name);
        if state.sessions.len() == before {
            return Err(TmuxError::CommandFailed {
                command: "kill-session".into(),
                detail: format!("can't find session: {name}"),
            });
        }
        Ok(())
    }

    async fn new_window(&self, session: &str, name: &str) -> Result<(), TmuxError> {
        self.record("new-window", &[session.to_string(), name.to_string()]);
        if let Some(err) = self.scripted_failure("new-window") {
            return Err(err);
        }
        let mut state = self.state.lock().expect("fake state");
        match state.sessions.iter_mut().find(|s| s.name == session) {
            Some(s) => {
                s.windows.push(name.to_string());
                Ok(())
            }
            None => Err(TmuxError::CommandFailed {
                command: "new-window".into(),
                detail: format!("can't find session: {session}"),
            }),
        }
    }

    async fn list_windows(&self, session: &str) -> Result<Vec<String>, TmuxError> {
        self.record("list-windows", &[session.to_string()]);
        if let Some(err) = self.scripted_failure("list-windows") {
            return Err(err);
        }
        let state = self.state.lock().expect("fake state");
        if let Some(lines) = &state.window_lines {
            return Ok(lines.clone());
        }
        match state.sessions.iter().find(|s| s.name == session) {
            Some(s) => Ok(s
                .windows
                .iter()
                .enumerate()
                .map(|(index, name)| format!("{index}\t{name}"))
                .collect()),
            None => Err(TmuxError::CommandFailed {
                command: "list-windows".into(),
                detail: format!("can't find session: {session}"),
            }),
        }
    }

    async fn send_keys(&self, target: &str, keys: &[String]) -> Result<(), TmuxError> {
        let mut recorded = vec![target.to_string()];
        recorded.extend(keys.iter().cloned());
        self.record("send-keys", &recorded);
        if let Some(err) = self.scripted_failure("send-keys") {
            return Err(err);
        }
        let state = self.state.lock().expect("fake state");
        let session = target.split(':').next().unwrap_or(target);
        if !state.sessions.iter().any(|s| s.name == session) {
            return Err(TmuxError::CommandFailed {
                command: "send-keys".into(),
                detail: format!("can't find pane: {target}"),
            });
        }
        Ok(())
    }

    async fn capture_pane(&self, target: &str) -> Result<Vec<String>, TmuxError> {
        self.record("capture-pane", &[target.to_string()]);
        if let Some(err) = self.scripted_failure("capture-pane") {
            return Err(err);
        }
        let state = self.state.lock().expect("fake state");
        Ok(state.capture_lines.clone())
    }
}

// ---------------------------------------------------------------------------
// TestTempDir
// ---------------------------------------------------------------------------

static TEST_DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Temporary directory fixture with best-effort cleanup.
#[derive(Debug)]
pub struct TestTempDir {
    path: PathBuf,
}

impl TestTempDir {
    /// Create a unique temporary directory with a readable prefix.
    pub fn new(prefix: &str) -> Self {
        let suffix = TEST_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let dir = std::env::temp_dir().join(format!("muxctl-{prefix}-{millis}-{suffix}"));
        fs::create_dir_all(&dir).expect("failed to create temporary fixture directory");
        Self { path: dir }
    }

    /// Root directory path for this fixture.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Build a child path under the fixture root.
    pub fn child(&self, relative: &str) -> PathBuf {
        self.path.join(relative)
    }

    /// Write UTF-8 text to a child path, creating parent directories as needed.
    pub fn write_text(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.child(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent directories for fixture");
        }
        fs::write(&path, content).expect("failed to write fixture file");
        path
    }
}

impl Drop for TestTempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}
