//! Configuration management for castgate
//!
//! Handles the deploy-time policy values: which catalog to resolve against,
//! which stream format this deployment serves, and the browse shelf title.
//! Config is stored at ~/.config/castgate/config.toml

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::api::DEFAULT_CATALOG_URL;
use crate::models::StreamFormat;
use crate::shelf::DEFAULT_SHELF_TITLE;

/// Deployment configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Catalog document URL
    pub catalog_url: String,
    /// Stream format served to the player (dash or hls); the single
    /// configuration point for format policy
    pub stream_format: StreamFormat,
    /// Title shown above the browse shelf
    pub shelf_title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            stream_format: StreamFormat::Dash,
            shelf_title: DEFAULT_SHELF_TITLE.to_string(),
        }
    }
}

impl Config {
    /// Get config file path (~/.config/castgate/config.toml)
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("castgate").join("config.toml"))
    }

    /// Load config from file, or return default if not found
    pub fn load() -> Self {
        Self::path()
            .and_then(|p| std::fs::read_to_string(p).ok())
            .and_then(|s| toml::from_str(&s).ok())
            .unwrap_or_default()
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::path().ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml = toml::to_string_pretty(self)?;
        std::fs::write(path, toml)?;
        Ok(())
    }
}
