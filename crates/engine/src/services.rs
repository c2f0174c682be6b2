//! Explicit service context
//!
//! [`Services`] carries the process-level values that CRUD factories and the
//! dispatcher need: build information and configuration. It is constructed by
//! the host and passed down; there is no global instance. Reading build
//! information before [`Services::init`] returns `Error::Uninitialized`.

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use tracing::info;

use contentdb_core::{Error, Result};

use crate::config::ContentConfig;

const BUILD_INFO: &str = "build info";

/// Build information of the running platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildInfo {
    /// Source branch, e.g. "main"
    pub branch: String,
    /// Platform version, e.g. "8.12.0"
    pub version: String,
    /// Build flavor, e.g. "traditional" or "serverless"
    pub build_flavor: String,
    /// Version of the bundled prebuilt package, when one ships
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prebuilt_package_version: Option<String>,
}

/// Services shared by factories and the dispatcher.
///
/// `init` may succeed once per lifetime; `reset` tears the value down so it
/// can be initialized again.
#[derive(Debug)]
pub struct Services {
    build: OnceCell<BuildInfo>,
    config: ContentConfig,
}

impl Services {
    /// Create uninitialized services with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `Validation` if the configuration fails
    /// [`ContentConfig::validate`].
    pub fn new(config: ContentConfig) -> Result<Self> {
        config.validate()?;
        Ok(Services {
            build: OnceCell::new(),
            config,
        })
    }

    /// Record build information.
    ///
    /// Fails with `Validation` if a required field is empty and with
    /// `Conflict` if already initialized.
    pub fn init(&self, build: BuildInfo) -> Result<()> {
        for (field, value) in [
            ("branch", &build.branch),
            ("version", &build.version),
            ("build_flavor", &build.build_flavor),
        ] {
            if value.is_empty() {
                return Err(Error::validation(format!("{} must not be empty", field)));
            }
        }

        self.build
            .set(build)
            .map_err(|_| Error::conflict("services already initialized"))?;

        if let Some(build) = self.build.get() {
            info!(
                branch = %build.branch,
                version = %build.version,
                build_flavor = %build.build_flavor,
                "services initialized"
            );
        }
        Ok(())
    }

    /// Whether `init` has run
    pub fn is_initialized(&self) -> bool {
        self.build.get().is_some()
    }

    /// Build information
    pub fn build_info(&self) -> Result<&BuildInfo> {
        self.build.get().ok_or_else(|| Error::Uninitialized {
            service: BUILD_INFO.to_string(),
        })
    }

    /// Source branch
    pub fn branch(&self) -> Result<&str> {
        Ok(&self.build_info()?.branch)
    }

    /// Platform version
    pub fn version(&self) -> Result<&str> {
        Ok(&self.build_info()?.version)
    }

    /// Build flavor
    pub fn build_flavor(&self) -> Result<&str> {
        Ok(&self.build_info()?.build_flavor)
    }

    /// Prebuilt package version. Optional even after `init`, so never an error.
    pub fn prebuilt_package_version(&self) -> Option<&str> {
        self.build
            .get()
            .and_then(|b| b.prebuilt_package_version.as_deref())
    }

    /// Configuration
    pub fn config(&self) -> &ContentConfig {
        &self.config
    }

    /// Tear down build information, returning it if it was set.
    pub fn reset(&mut self) -> Option<BuildInfo> {
        self.build.take()
    }
}

impl Default for Services {
    fn default() -> Self {
        Services {
            build: OnceCell::new(),
            config: ContentConfig::default(),
        }
    }
}
