//! Application configuration
//!
//! Read from a TOML file; every field falls back to its default so an empty
//! or missing file is a valid configuration.

use crate::control::CloseBehavior;
use crate::error::{EssayError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Essay collection used when `--essays` is not given
    pub essays: Option<PathBuf>,
    /// Lines left above a match when scrolling to it
    pub scroll_margin: usize,
    /// Animate scrolling instead of jumping
    pub smooth_scroll: bool,
    /// Close the search bar on a click outside it
    pub close_on_outside_click: bool,
    pub close_behavior: CloseBehavior,
    /// UI tick in milliseconds
    pub tick_ms: u64,
    /// Default log filter; `RUST_LOG` takes precedence
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            essays: None,
            scroll_margin: 2,
            smooth_scroll: true,
            close_on_outside_click: true,
            close_behavior: CloseBehavior::RestoreAll,
            tick_ms: 50,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Default config location: `<config dir>/essay-search/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("essay-search").join("config.toml"))
    }

    /// Load from `path`, or from the default location when `None`.
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path.map(Path::to_path_buf).or_else(Self::default_path) {
            Some(p) => p,
            None => return Ok(Self::default()),
        };

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents =
            fs::read_to_string(&path).map_err(|e| EssayError::ReadError(path.clone(), e))?;
        Self::parse(&contents, &path)
    }

    pub fn parse(contents: &str, origin: &Path) -> Result<Self> {
        toml::from_str(contents)
            .map_err(|e| EssayError::ConfigError(origin.to_path_buf(), e.to_string()))
    }
}
