// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::error::{JhomeError, Result};
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const CONFIG_DIR_NAME: &str = "jhome";
const CONFIG_FILE_NAME: &str = "config.toml";
const ENV_PREFIX: &str = "JHOME";

pub const DEFAULT_LAUNCHER: &str = "java";
pub const DEFAULT_ENV_VARIABLE: &str = "JAVA_HOME";

/// Controls how the Java home is looked up.
///
/// Values come from built-in defaults, then an optional `config.toml`, then
/// `JHOME_*` environment variables (`JHOME_PROPERTY__ENABLED=false`).
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct JhomeConfig {
    #[serde(default)]
    pub property: PropertyConfig,

    #[serde(default)]
    pub environment: EnvironmentConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PropertyConfig {
    /// Ask the Java runtime on PATH for its `java.home` property
    #[serde(default = "default_property_enabled")]
    pub enabled: bool,

    /// Launcher looked up on PATH to report the property
    #[serde(default = "default_launcher")]
    pub launcher: String,
}

impl Default for PropertyConfig {
    fn default() -> Self {
        Self {
            enabled: default_property_enabled(),
            launcher: default_launcher(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct EnvironmentConfig {
    #[serde(default = "default_env_variable")]
    pub variable: String,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            variable: default_env_variable(),
        }
    }
}

fn default_property_enabled() -> bool {
    true
}

fn default_launcher() -> String {
    DEFAULT_LAUNCHER.to_string()
}

fn default_env_variable() -> String {
    DEFAULT_ENV_VARIABLE.to_string()
}

/// Location of the user-level config file, if the platform has a config directory
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

impl JhomeConfig {
    /// Load from the user-level config file (if any) plus environment overrides.
    pub fn load() -> Result<Self> {
        match default_config_path() {
            Some(path) => Self::load_from(&path),
            None => {
                log::debug!("No config directory on this platform, using defaults");
                Self::build(None)
            }
        }
    }

    /// Load from an explicit config file plus environment overrides.
    ///
    /// A missing file is not an error.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            log::debug!("Loading config from {config_path:?}");
        } else {
            log::debug!("Config file not found at {config_path:?}, using defaults");
        }
        Self::build(Some(config_path))
    }

    fn build(config_path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(path) = config_path {
            builder = builder.add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(false),
            );
        }

        let config = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| JhomeError::ConfigError(format!("Failed to load configuration: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| JhomeError::ConfigError(format!("Failed to parse configuration: {e}")))
    }
}
