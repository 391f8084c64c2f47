//! Configuration loading from TOML files and environment variables.
//!
//! Config is loaded in this order of precedence (highest wins):
//! 1. Environment variables (`MUXCTL_TMUX`, `MUXCTL_SOCKET`)
//! 2. TOML file specified via --config CLI flag
//! 3. ./muxctl.toml in the current directory
//! 4. $XDG_CONFIG_HOME/muxctl/muxctl.toml (or ~/.config/muxctl/muxctl.toml)
//! 5. Built-in defaults

use crate::error::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_TMUX_BINARY: &str = "tmux";

/// Top-level runtime configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub tmux: TmuxConfig,
}

/// Settings for reaching the tmux binary and server.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TmuxConfig {
    /// Binary to invoke; a bare name is resolved through PATH.
    pub binary: String,
    /// Optional `-L` socket name. Unset means the default server.
    pub socket: Option<String>,
}

impl Default for TmuxConfig {
    fn default() -> Self {
        Self {
            binary: DEFAULT_TMUX_BINARY.into(),
            socket: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Load configuration from disk and environment.
///
/// `path_override` is an explicit config file path (from --config flag).
pub fn load_config(path_override: Option<&str>) -> Result<Config, ConfigError> {
    load_config_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok(),
        config_root_dir,
    )
}

/// Loader over injectable sources so tests can script files, environment,
/// and the global config root without touching the process state.
fn load_config_from_sources<FRead, FEnv, FRoot>(
    path_override: Option<&str>,
    read_file: FRead,
    env_lookup: FEnv,
    config_root: FRoot,
) -> Result<Config, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let config_text = read_config_text(path_override, &read_file, &config_root)?;
    let mut config: Config = toml::from_str(&config_text)?;
    apply_env_overrides_with(&mut config, &env_lookup);
    normalize(&mut config);
    validate(&config)?;
    Ok(config)
}

fn read_config_text<FRead, FRoot>(
    path_override: Option<&str>,
    read_file: &FRead,
    config_root: &FRoot,
) -> Result<String, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FRoot: Fn() -> Option<PathBuf>,
{
    if let Some(p) = path_override {
        // Explicit path — fail if it doesn't exist.
        return Ok(read_file(Path::new(p))?);
    }

    if let Ok(text) = read_file(Path::new("muxctl.toml")) {
        return Ok(text);
    }
    if let Some(dir) = config_root() {
        let global = dir.join("muxctl").join("muxctl.toml");
        if let Ok(text) = read_file(&global) {
            return Ok(text);
        }
    }

    Ok(String::new())
}

fn apply_env_overrides_with<F>(config: &mut Config, env_lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(binary) = env_lookup("MUXCTL_TMUX") {
        config.tmux.binary = binary;
    }
    if let Some(socket) = env_lookup("MUXCTL_SOCKET") {
        config.tmux.socket = normalized_string(&socket);
    }
}

fn normalize(config: &mut Config) {
    config.tmux.binary = config.tmux.binary.trim().to_string();
    config.tmux.socket = normalized_option(&config.tmux.socket);
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.tmux.binary.is_empty() {
        return Err(ConfigError::Invalid(
            "tmux.binary must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn normalized_option(value: &Option<String>) -> Option<String> {
    value.as_deref().and_then(normalized_string)
}

fn normalized_string(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn config_root_dir() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }
    dirs::home_dir()
        .map(|home| home.join(".config"))
        .or_else(dirs::config_dir)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
