//! Configuration management for hpgl-scan.
//!
//! Handles:
//! - Command-line argument parsing
//! - Optional TOML config file (explicit path or user config directory)
//!
//! Command-line flags win over the config file, which wins over defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Deserialize;

/// Command-line arguments for hpgl-scan
#[derive(Debug, Default, Parser)]
#[command(name = "hpgl-scan")]
#[command(about = "Extract pen moves from HP-GL/2 plot files")]
#[command(version)]
pub struct Args {
    /// HP-GL/2 file to read; standard input when omitted
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Config file to use instead of the default location
    #[arg(long, help = "Path to a TOML config file")]
    pub config: Option<PathBuf>,

    /// Log level
    #[arg(
        long,
        default_value = "warn",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// What hpgl-scan writes to standard output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per Pen Up / Pen Down event
    #[default]
    Events,
    /// Pen events as a JSON array
    Json,
    /// SVG-style path data
    Path,
    /// Every matched command with its offset
    Commands,
}

/// Contents of a config file
#[derive(Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub format: Option<OutputFormat>,
    pub pretty: Option<bool>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Combined configuration from all sources
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Input file, `None` for stdin
    pub input: Option<PathBuf>,
    pub format: OutputFormat,
    pub pretty: bool,
    pub log_level: String,
    /// Config file that was applied, if any
    pub config_file: Option<PathBuf>,
}

impl Config {
    /// Create configuration from explicit arguments
    ///
    /// An explicit `--config` must load; a broken file in the default
    /// location is logged and ignored.
    pub fn from_args(args: Args) -> Result<Self> {
        let loaded = match &args.config {
            Some(path) => Some((path.clone(), ConfigFile::load(path)?)),
            None => default_config_path()
                .filter(|path| path.is_file())
                .and_then(|path| match ConfigFile::load(&path) {
                    Ok(file) => Some((path, file)),
                    Err(e) => {
                        log::warn!("Ignoring config file: {:#}", e);
                        None
                    }
                }),
        };

        let (config_file, file) = match loaded {
            Some((path, file)) => {
                log::info!("Using config file {}", path.display());
                (Some(path), file)
            }
            None => (None, ConfigFile::default()),
        };

        Ok(Config {
            input: args.input,
            format: args.format.or(file.format).unwrap_or_default(),
            pretty: args.pretty || file.pretty.unwrap_or(false),
            log_level: args.log_level,
            config_file,
        })
    }
}

/// `<user config dir>/hpgl-scan/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("hpgl-scan").join("config.toml"))
}
