//! Configuration loading from TOML files.
//!
//! Lookup order:
//! 1. `$BIQUAD_CONFIG` environment variable
//! 2. Platform config dir (`~/.config/biquad/config.toml` on Linux)
//! 3. Built-in defaults (everything is optional)

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use tracing_subscriber::filter::LevelFilter;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Result rendering settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Decimal places for roots in text output.
    pub precision: usize,
    /// Print the polynomial value at each root.
    pub verify: bool,
}

/// Logging settings. `RUST_LOG` directives still apply on top.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
}

impl LogConfig {
    pub fn level_filter(&self) -> Result<LevelFilter> {
        self.level
            .parse()
            .map_err(|_| anyhow!("invalid log.level in config: {:?}", self.level))
    }
}

// --- Defaults ---

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            precision: 6,
            verify: false,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
        }
    }
}

/// Load config from disk. Returns defaults if no config file exists.
pub fn load_config() -> Result<Config> {
    match config_path() {
        Some(p) if p.exists() => load_config_from(&p),
        _ => Ok(Config::default()),
    }
}

pub fn load_config_from(path: &Path) -> Result<Config> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))
}

/// Resolve the config file path.
fn config_path() -> Option<PathBuf> {
    if let Ok(p) = std::env::var("BIQUAD_CONFIG") {
        return Some(PathBuf::from(p));
    }

    directories::ProjectDirs::from("dev", "biquad", "biquad")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Show the active config path (for `biquad config`).
pub fn show_config_path() -> String {
    match config_path() {
        Some(p) if p.exists() => format!("{} (loaded)", p.display()),
        Some(p) => format!("{} (not found, using defaults)", p.display()),
        None => "no config path resolved (using defaults)".into(),
    }
}
