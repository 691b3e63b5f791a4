//! Gallery configuration.
//!
//! A small, sparse config in the spirit of a `config.toml` next to the
//! manifests — override just the values you want:
//!
//! ```toml
//! page_size = 24
//! autoplay_interval_ms = 5000
//! asset_base = "/media"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Engine configuration. All fields have defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Items per grid page.
    pub page_size: usize,
    /// Autoplay advance period.
    pub autoplay_interval_ms: u64,
    /// Build-time base path prepended to item paths by the host when
    /// resolving assets. The engine itself never touches it.
    pub asset_base: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            page_size: 40,
            autoplay_interval_ms: 3000,
            asset_base: String::new(),
        }
    }
}

impl GalleryConfig {
    /// Parse and validate a TOML config document.
    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::Validation(
                "page_size must be at least 1".to_string(),
            ));
        }
        if self.autoplay_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "autoplay_interval_ms must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
