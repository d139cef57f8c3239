//! Runtime configuration.
//!
//! Everything has a default, so a config file is optional. A file may override the store
//! settings and replace the built-in menu:
//!
//! ```toml
//! [store]
//! first_order_id = 5001
//! channel_capacity = 64
//!
//! [[menu]]
//! name = "Margherita"
//! available_sizes = ["Small", "Large"]
//! base_price = 8.0
//! ```

use crate::menu::{MenuCatalog, MenuError};
use crate::model::MenuItem;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid menu: {0}")]
    Menu(#[from] MenuError),

    #[error("Invalid store settings: {0}")]
    Store(String),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub store: StoreConfig,
    /// Replaces the built-in menu when present.
    pub menu: Option<Vec<MenuItem>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// ID given to the first order.
    pub first_order_id: u32,
    /// Requests that may queue for the store before callers wait.
    pub channel_capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            first_order_id: 1001,
            channel_capacity: 32,
        }
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        if config.store.first_order_id == u32::MAX {
            return Err(ConfigError::Store(format!(
                "first_order_id must be below {}",
                u32::MAX
            )));
        }
        if config.store.channel_capacity == 0 {
            return Err(ConfigError::Store("channel_capacity must be at least 1".into()));
        }
        Ok(config)
    }

    /// The configured menu, or the built-in one.
    pub fn menu_catalog(&self) -> Result<MenuCatalog, ConfigError> {
        match &self.menu {
            Some(items) => Ok(MenuCatalog::new(items.clone())?),
            None => Ok(MenuCatalog::default()),
        }
    }
}
