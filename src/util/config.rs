//! Configuration file support.
//!
//! Two configuration file locations are read:
//! - Global: `~/.codegen-arch/config.toml` - User-wide defaults
//! - Project: `.codegen-arch/config.toml` - Project-specific overrides
//!
//! Project config takes precedence over global config.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::axis::Axis;
use crate::host::DeclaredArches;
use crate::resolver::{OverrideSource, SelectOptions};

/// Name of the per-user and per-project configuration directory.
pub const CONFIG_DIR_NAME: &str = ".codegen-arch";

/// Configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Device settings
    pub device: DeviceConfigSection,

    /// Architecture override settings
    pub overrides: OverrideConfig,
}

/// The device configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceConfigSection {
    /// Declared device architectures (e.g. ["arm64", "x86_64"])
    pub arches: Vec<String>,
}

/// Where override strings come from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverrideConfig {
    /// Environment variable with the host override
    pub host_var: Option<String>,

    /// Environment variable with the device override
    pub device_var: Option<String>,

    /// Host override used when the variable is unset
    pub host: Option<String>,

    /// Device override used when the variable is unset
    pub device: Option<String>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if !other.device.arches.is_empty() {
            self.device.arches = other.device.arches;
        }

        if other.overrides.host_var.is_some() {
            self.overrides.host_var = other.overrides.host_var;
        }
        if other.overrides.device_var.is_some() {
            self.overrides.device_var = other.overrides.device_var;
        }
        if other.overrides.host.is_some() {
            self.overrides.host = other.overrides.host;
        }
        if other.overrides.device.is_some() {
            self.overrides.device = other.overrides.device;
        }
    }

    /// Override lookup settings for the selector.
    pub fn select_options(&self) -> SelectOptions {
        SelectOptions {
            host: self.override_source(Axis::Host),
            device: self.override_source(Axis::Device),
        }
    }

    fn override_source(&self, axis: Axis) -> OverrideSource {
        let (var, default) = match axis {
            Axis::Host => (&self.overrides.host_var, &self.overrides.host),
            Axis::Device => (&self.overrides.device_var, &self.overrides.device),
        };

        OverrideSource {
            var: var
                .clone()
                .unwrap_or_else(|| axis.default_override_var().to_string()),
            default: default.clone().unwrap_or_default(),
        }
    }

    /// The configured device.
    pub fn device_config(&self) -> DeclaredArches {
        DeclaredArches(self.device.arches.clone())
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (.codegen-arch/config.toml)
/// 2. Global config (~/.codegen-arch/config.toml)
/// 3. Defaults
pub fn load_config(global_path: &Path, project_path: &Path) -> Config {
    let mut config = Config::default();

    if global_path.exists() {
        let global = Config::load_or_default(global_path);
        config.merge(global);
    }

    if project_path.exists() {
        let project = Config::load_or_default(project_path);
        config.merge(project);
    }

    config
}

/// Get the global config directory (~/.codegen-arch).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(CONFIG_DIR_NAME))
}

/// Get the project config path (.codegen-arch/config.toml).
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_DIR_NAME).join("config.toml")
}
