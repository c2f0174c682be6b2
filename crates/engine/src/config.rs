//! Configuration via `contentdb.toml`
//!
//! On first start the host writes a default `contentdb.toml`. To change
//! settings, edit the file and restart.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use contentdb_core::{Error, Result};

/// Config file name placed in the data directory.
pub const CONFIG_FILE_NAME: &str = "contentdb.toml";

/// Dispatcher and storage configuration loaded from `contentdb.toml`.
///
/// # Example
///
/// ```toml
/// max_search_limit = 100
/// default_search_limit = 20
/// max_bulk_get = 100
/// strict_versions = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Largest page size a search may request.
    #[serde(default = "default_max_search_limit")]
    pub max_search_limit: u32,
    /// Page size used when a search does not specify one.
    #[serde(default = "default_search_limit")]
    pub default_search_limit: u32,
    /// Largest number of ids in one bulk get.
    #[serde(default = "default_max_bulk_get")]
    pub max_bulk_get: usize,
    /// Reject request versions newer than the content type's latest.
    #[serde(default = "default_strict_versions")]
    pub strict_versions: bool,
}

fn default_max_search_limit() -> u32 {
    100
}

fn default_search_limit() -> u32 {
    20
}

fn default_max_bulk_get() -> usize {
    100
}

fn default_strict_versions() -> bool {
    true
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            max_search_limit: default_max_search_limit(),
            default_search_limit: default_search_limit(),
            max_bulk_get: default_max_bulk_get(),
            strict_versions: default_strict_versions(),
        }
    }
}

impl ContentConfig {
    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns `Validation` if a limit is zero or the default search limit
    /// exceeds the maximum.
    pub fn validate(&self) -> Result<()> {
        if self.max_search_limit == 0 {
            return Err(Error::validation("max_search_limit must be >= 1"));
        }
        if self.max_bulk_get == 0 {
            return Err(Error::validation("max_bulk_get must be >= 1"));
        }
        if self.default_search_limit == 0 || self.default_search_limit > self.max_search_limit {
            return Err(Error::validation(format!(
                "default_search_limit must be between 1 and max_search_limit ({})",
                self.max_search_limit
            )));
        }
        Ok(())
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# ContentDB configuration
#
# Largest page size a search may request (default: 100)
max_search_limit = 100

# Page size used when a search does not specify one (default: 20)
default_search_limit = 20

# Largest number of ids accepted by one bulk get (default: 100)
max_bulk_get = 100

# Reject requests for a version newer than the content type's latest (default: true)
strict_versions = true
"#
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::internal(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config: ContentConfig = toml::from_str(&content).map_err(|e| {
            Error::validation(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        config.validate()?;
        info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| {
                Error::internal(format!(
                    "Failed to write default config file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::internal(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content).map_err(|e| {
            Error::internal(format!(
                "Failed to write config file '{}': {}",
                path.display(),
                e
            ))
        })
    }
}
