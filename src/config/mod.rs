use serde::Deserialize;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

fn default_clip_low() -> f64 {
    0.0
}
fn default_clip_high() -> f64 {
    100.0
}

/// Settings read from `isogrid.toml`; command-line flags take precedence
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FileConfig {
    #[serde(default)]
    pub verbose: bool,
    /// Only emit grid points on the boundary footprint
    #[serde(default)]
    pub inside: bool,
    /// Fixed decimals for printed coordinates
    #[serde(default)]
    pub precision: Option<usize>,
    /// Lower percentile for results clipping (`isogrid-map`)
    #[serde(default = "default_clip_low")]
    pub clip_low: f64,
    /// Upper percentile for results clipping (`isogrid-map`)
    #[serde(default = "default_clip_high")]
    pub clip_high: f64,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            inside: false,
            precision: None,
            clip_low: default_clip_low(),
            clip_high: default_clip_high(),
        }
    }
}

impl FileConfig {
    /// Load an explicitly requested config file, which must exist
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            bail!("Config file not found: {:?}", path);
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&contents).context("Failed to parse config file")
    }

    /// Search the usual locations; the first file that parses wins
    pub fn load() -> Option<Self> {
        for path in get_config_paths() {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }

    /// Explicit path if given, otherwise the auto-searched file
    pub fn resolve(explicit: Option<&Path>) -> Result<Option<Self>> {
        match explicit {
            Some(path) => Self::from_path(path).map(Some),
            None => Ok(Self::load()),
        }
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("isogrid.toml"));
    paths.push(PathBuf::from(".isogrid.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("isogrid").join("config.toml"));
        paths.push(config_dir.join("isogrid.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".isogrid.toml"));
        paths.push(home.join(".config").join("isogrid").join("config.toml"));
    }

    paths
}
