//! CLI entry point for muxctl.

mod cli;

use clap::Parser;
use muxctl::build_info;
use muxctl::config::load_config;
use muxctl::error::TmuxError;
use muxctl::tmux::{self, Session, SessionOptions, TmuxClient};

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt().with_env_filter(filter).init();
    tracing::debug!("muxctl {}", build_info::startup_metadata_line());

    let mut config = match load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    // Apply CLI overrides.
    if let Some(binary) = &args.binary {
        config.tmux.binary = binary.clone();
    }
    if let Some(socket) = &args.socket {
        config.tmux.socket = Some(socket.clone());
    }

    let client = TmuxClient::from_config(&config);
    let output = match run_command(client, args.command).await {
        Ok(output) => output,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    for line in &output.lines {
        println!("{line}");
    }
    if output.exit_code != 0 {
        std::process::exit(output.exit_code);
    }
}

/// What a subcommand wants printed and returned to the shell.
#[derive(Debug)]
struct CommandOutput {
    lines: Vec<String>,
    exit_code: i32,
}

impl CommandOutput {
    fn ok() -> Self {
        Self {
            lines: Vec::new(),
            exit_code: 0,
        }
    }

    fn lines(lines: Vec<String>) -> Self {
        Self {
            lines,
            exit_code: 0,
        }
    }

    fn status(exit_code: i32) -> Self {
        Self {
            lines: Vec::new(),
            exit_code,
        }
    }
}

/// Encode a payload for `--json` output.
///
/// The payloads are plain strings and string/number structs, so encoding
/// cannot realistically fail; if it ever does, bail like any other fatal
/// CLI error.
fn json_line(value: &impl serde::Serialize) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        eprintln!("error: json encoding failed: {e}");
        std::process::exit(1);
    })
}

async fn run_command(client: TmuxClient, command: cli::Command) -> Result<CommandOutput, TmuxError> {
    match command {
        cli::Command::NewSession {
            name,
            window,
            directory,
        } => {
            let options = SessionOptions {
                window_name: window,
                start_directory: directory,
            };
            Session::create(client, name, &options).await?;
            Ok(CommandOutput::ok())
        }
        cli::Command::ListSessions { json } => {
            let sessions = tmux::list_sessions(&client).await?;
            let names: Vec<&str> = sessions.iter().map(Session::name).collect();
            if json {
                Ok(CommandOutput::lines(vec![json_line(&names)]))
            } else {
                Ok(CommandOutput::lines(
                    names.iter().map(|name| name.to_string()).collect(),
                ))
            }
        }
        cli::Command::HasSession { name } => {
            if tmux::session_exists(&client, &name).await? {
                Ok(CommandOutput::ok())
            } else {
                Ok(CommandOutput::status(1))
            }
        }
        cli::Command::RenameSession { old, new } => {
            let mut session = Session::attach(client, old);
            session.rename(new).await?;
            Ok(CommandOutput::ok())
        }
        cli::Command::KillSession { name } => {
            Session::attach(client, name).kill().await?;
            Ok(CommandOutput::ok())
        }
        cli::Command::EnsureWindow { session, window } => {
            Session::attach(client, session)
                .ensure_window(&window)
                .await?;
            Ok(CommandOutput::ok())
        }
        cli::Command::ListWindows { session, json } => {
            let windows = Session::attach(client, session).windows().await?;
            if json {
                Ok(CommandOutput::lines(vec![json_line(&windows)]))
            } else {
                Ok(CommandOutput::lines(
                    windows
                        .iter()
                        .map(|window| format!("{}\t{}", window.index, window.name))
                        .collect(),
                ))
            }
        }
        cli::Command::SendKeys {
            session,
            window,
            keys,
        } => {
            Session::attach(client, session)
                .send_keys(&window, &keys)
                .await?;
            Ok(CommandOutput::ok())
        }
        cli::Command::Capture { session, window } => {
            let lines = Session::attach(client, session).capture(&window).await?;
            Ok(CommandOutput::lines(lines))
        }
    }
}
