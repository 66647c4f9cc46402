//! Configuration for the primecache CLI.
//!
//! Settings live in a TOML file. The path is taken from `--config`, then the
//! `PRIMECACHE_CONFIG` environment variable, then
//! `<config dir>/primecache/config.toml`. A missing default file yields the
//! built-in defaults; an explicitly named file must exist.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "PRIMECACHE_CONFIG";

/// Upper bound accepted for `cache.preload`.
pub const MAX_PRELOAD: u64 = 10_000_000;

/// How command results are rendered.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// A single JSON document
    Json,
}

/// Cache warm-up settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CacheConfig {
    /// Expand the cache up to this bound before running a command (0 = seed only).
    pub preload: u64,
}

/// Output and logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color: bool,
    /// Default tracing level when neither `RUST_LOG` nor `-v` is given.
    pub log_level: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
            log_level: "warn".to_string(),
        }
    }
}

/// Complete configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub cache: CacheConfig,
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration, honouring an explicit path first.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_file(path);
        }
        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
            return Self::load_file(Path::new(&path));
        }
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Default location: `<config dir>/primecache/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("primecache").join("config.toml"))
    }

    /// Read and validate a specific config file.
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::parse(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse and validate TOML content.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("Failed to parse TOML")?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.cache.preload > MAX_PRELOAD {
            bail!(
                "cache.preload too large: {} (max {})",
                self.cache.preload,
                MAX_PRELOAD
            );
        }
        if self.output.log_level.trim().is_empty() {
            bail!("output.log_level cannot be empty");
        }
        Ok(())
    }
}
