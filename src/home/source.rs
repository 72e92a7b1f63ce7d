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

//! Ordered lookup of the Java home directory.

use crate::config::JhomeConfig;
use crate::error::{JhomeError, Result};
use crate::home::property::{JAVA_HOME_PROPERTY, query_property};
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Where a resolved home directory came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeOrigin {
    /// `java.home` reported by the Java runtime on PATH
    RuntimeProperty,
    /// The named environment variable
    Environment(String),
    /// Handed in by the caller
    Explicit,
}

impl fmt::Display for HomeOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HomeOrigin::RuntimeProperty => write!(f, "runtime property {JAVA_HOME_PROPERTY}"),
            HomeOrigin::Environment(name) => write!(f, "environment variable {name}"),
            HomeOrigin::Explicit => write!(f, "explicit"),
        }
    }
}

/// One place the home directory may be read from.
#[cfg_attr(test, mockall::automock)]
pub trait HomeSource {
    /// Name used in logs and error messages, e.g. `JAVA_HOME`
    fn name(&self) -> String;

    fn origin(&self) -> HomeOrigin;

    /// `None` when this source has nothing to offer
    fn lookup(&self) -> Option<PathBuf>;
}

/// Reads `java.home` from the runtime behind a launcher found on PATH.
pub struct RuntimePropertySource {
    launcher: String,
}

impl RuntimePropertySource {
    pub fn new(launcher: impl Into<String>) -> Self {
        Self {
            launcher: launcher.into(),
        }
    }
}

impl HomeSource for RuntimePropertySource {
    fn name(&self) -> String {
        JAVA_HOME_PROPERTY.to_string()
    }

    fn origin(&self) -> HomeOrigin {
        HomeOrigin::RuntimeProperty
    }

    fn lookup(&self) -> Option<PathBuf> {
        let launcher = match which::which(&self.launcher) {
            Ok(path) => path,
            Err(e) => {
                log::debug!("Launcher '{}' not found: {e}", self.launcher);
                return None;
            }
        };

        query_property(&launcher, JAVA_HOME_PROPERTY).map(PathBuf::from)
    }
}

/// Reads an environment variable; an empty value counts as unset.
pub struct EnvVarSource {
    variable: String,
}

impl EnvVarSource {
    pub fn new(variable: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
        }
    }
}

impl HomeSource for EnvVarSource {
    fn name(&self) -> String {
        self.variable.clone()
    }

    fn origin(&self) -> HomeOrigin {
        HomeOrigin::Environment(self.variable.clone())
    }

    fn lookup(&self) -> Option<PathBuf> {
        env::var_os(&self.variable)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    }
}

/// Sources in priority order: runtime property (if enabled), then the environment variable
pub fn default_sources(config: &JhomeConfig) -> Vec<Box<dyn HomeSource>> {
    let mut sources: Vec<Box<dyn HomeSource>> = Vec::new();
    if config.property.enabled {
        sources.push(Box::new(RuntimePropertySource::new(
            config.property.launcher.clone(),
        )));
    }
    sources.push(Box::new(EnvVarSource::new(
        config.environment.variable.clone(),
    )));
    sources
}

/// Try each source in order and stop at the first that yields a path.
pub fn resolve_home(sources: &[Box<dyn HomeSource>]) -> Result<(PathBuf, HomeOrigin)> {
    for source in sources {
        match source.lookup() {
            Some(home) => {
                let origin = source.origin();
                log::debug!("Resolved Java home {} from {origin}", home.display());
                return Ok((home, origin));
            }
            None => log::debug!("{} is not set", source.name()),
        }
    }

    Err(JhomeError::UnresolvedHome {
        sources: sources.iter().map(|source| source.name()).collect(),
    })
}
