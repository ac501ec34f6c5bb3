//! Configuration loaded from environment variables.

use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};

/// How `render` prints its result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Html,
    /// Render descriptors as JSON.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "html" => Ok(OutputFormat::Html),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{other}' (expected html or json)")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
        })
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Content snapshot file (`CAMPUS_SNAPSHOT`), JSON or YAML.
    pub snapshot_path: Option<PathBuf>,

    /// Route name of the page to compose (`CAMPUS_PAGE`, default: home).
    pub page: String,

    /// Output format for `render` (`CAMPUS_OUTPUT`, default: html).
    pub output: OutputFormat,

    /// Directory of template overrides (`CAMPUS_THEME_DIR`).
    pub theme_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let snapshot_path = lookup("CAMPUS_SNAPSHOT")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let page = lookup("CAMPUS_PAGE").unwrap_or_else(|| "home".to_string());

        let output = match lookup("CAMPUS_OUTPUT") {
            Some(raw) => raw
                .parse()
                .map_err(anyhow::Error::msg)
                .context("CAMPUS_OUTPUT must be html or json")?,
            None => OutputFormat::default(),
        };

        let theme_dir = lookup("CAMPUS_THEME_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            snapshot_path,
            page,
            output,
            theme_dir,
        })
    }

    /// The snapshot path, which every command needs.
    pub fn snapshot_path(&self) -> Result<&Path> {
        self.snapshot_path
            .as_deref()
            .context("CAMPUS_SNAPSHOT environment variable or --snapshot is required")
    }
}
