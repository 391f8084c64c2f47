//! Muxctl — a thin programmatic wrapper around the tmux CLI.
//!
//! This crate drives tmux by spawning its binary as a subprocess and parsing
//! the line-oriented output, instead of speaking the control-mode protocol.
//! It exposes a low-level command layer ([`tmux::TmuxCommands`]) and a
//! higher-level session abstraction ([`tmux::Session`]) on top of it.
//!
//! # Quick start
//!
//! ```no_run
//! use muxctl::config::load_config;
//! use muxctl::tmux::{Session, SessionOptions, TmuxClient};
//!
//! # async fn example() {
//! let config = load_config(None).unwrap();
//! let client = TmuxClient::from_config(&config);
//! let session = Session::create(client, "work", &SessionOptions::default())
//!     .await
//!     .unwrap();
//! session.ensure_window("logs").await.unwrap();
//! # }
//! ```

pub mod build_info;
pub mod config;
pub mod error;
#[cfg(test)]
pub mod testsupport;
pub mod tmux;
