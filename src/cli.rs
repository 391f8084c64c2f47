//! CLI argument parsing via clap.

use clap::{Parser, Subcommand};
use muxctl::build_info;
use std::path::PathBuf;

/// Drive tmux sessions and windows from scripts and other tooling.
#[derive(Debug, Parser)]
#[command(name = "muxctl", version = build_info::cli_version_text())]
pub struct Args {
    /// Path to config file (default: ./muxctl.toml or ~/.config/muxctl/muxctl.toml).
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,

    /// Override the tmux binary to invoke.
    #[arg(long = "binary", global = true)]
    pub binary: Option<String>,

    /// Talk to the server on this -L socket instead of the default one.
    #[arg(short = 'L', long = "socket", global = true)]
    pub socket: Option<String>,

    /// Enable debug logging.
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// One subcommand per session/window operation.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a detached session.
    NewSession {
        /// Session name.
        name: String,
        /// Name for the initial window.
        #[arg(short = 'n', long = "window")]
        window: Option<String>,
        /// Working directory for the initial window.
        #[arg(long = "directory")]
        directory: Option<PathBuf>,
    },
    /// List session names, one per line.
    ListSessions {
        /// Emit a JSON array instead of plain lines.
        #[arg(long)]
        json: bool,
    },
    /// Exit 0 when the session exists, 1 when it does not.
    HasSession {
        /// Session name to check.
        name: String,
    },
    /// Rename a session.
    RenameSession {
        /// Current session name.
        old: String,
        /// New session name.
        new: String,
    },
    /// Kill a session.
    KillSession {
        /// Session name to kill.
        name: String,
    },
    /// Create a window in a session unless one of that name already exists.
    EnsureWindow {
        /// Session to create the window in.
        session: String,
        /// Window name to converge on.
        window: String,
    },
    /// List a session's windows as `index<TAB>name` lines.
    ListWindows {
        /// Session whose windows to list.
        session: String,
        /// Emit a JSON array instead of plain lines.
        #[arg(long)]
        json: bool,
    },
    /// Send key tokens to pane 0 of a window.
    SendKeys {
        /// Session holding the window.
        session: String,
        /// Window whose pane 0 receives the keys.
        window: String,
        /// Keys exactly as tmux send-keys expects them (e.g. `ls Enter`).
        #[arg(required = true)]
        keys: Vec<String>,
    },
    /// Print the visible text of pane 0 of a window.
    Capture {
        /// Session holding the window.
        session: String,
        /// Window whose pane 0 to capture.
        window: String,
    },
}
