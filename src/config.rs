//! Codec configuration
//!
//! Loaded from TOML. Every field has a default, so an empty file is valid:
//!
//! ```toml
//! validation = "reject"   # or "clamp"
//! log_filter = "info,morton63=debug"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

/// What to do with inputs outside the codec's domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationPolicy {
    /// Out-of-range coordinates snap to the grid edge, bit 63 of keys is ignored
    #[default]
    Clamp,
    /// Out-of-range coordinates and keys with bit 63 set are errors
    Reject,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    pub validation: ValidationPolicy,
    /// env_logger filter used by the binaries
    pub log_filter: String,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            validation: ValidationPolicy::Clamp,
            log_filter: "info".to_string(),
        }
    }
}

impl CodecConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&raw)?;
        log::debug!("Loaded codec config from {}: {:?}", path.display(), config);
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
