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

//! The Java home directory and the executables inside it.
//!
//! ```no_run
//! use jhome::Jhome;
//!
//! let jhome = Jhome::new()?;
//! println!("java lives at {}", jhome.java_executable().display());
//! # Ok::<(), jhome::error::JhomeError>(())
//! ```

pub mod property;
pub mod source;

pub use source::{EnvVarSource, HomeOrigin, HomeSource, RuntimePropertySource};

use crate::config::JhomeConfig;
use crate::error::{JhomeError, Result};
use crate::platform::{host_os_name, normalize_separators, with_executable_extension};
use std::fmt;
use std::path::{Path, PathBuf};

pub const BIN_DIR: &str = "bin";

/// A resolved Java home directory.
///
/// The home is fixed at construction; every derived path is computed from it
/// on demand. Only [`Jhome::javac_executable`] and [`Jhome::javac_exists`]
/// touch the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Jhome {
    home: PathBuf,
    origin: HomeOrigin,
    os_name: String,
}

impl Jhome {
    /// Resolve the home from the runtime's `java.home`, falling back to `JAVA_HOME`.
    ///
    /// Lookup settings come from [`JhomeConfig::load`]. A config file or
    /// `JHOME_*` variable that fails to parse is logged and the defaults are
    /// used instead. To treat it as an error, call [`JhomeConfig::load`] yourself
    /// and pass the result to [`Jhome::with_config`].
    ///
    /// With the property lookup enabled this runs the `java` launcher found on
    /// PATH once and waits for it to exit, without a timeout. A launcher that
    /// hangs blocks this call; set `JHOME_PROPERTY__ENABLED=false` to skip the
    /// child process.
    pub fn new() -> Result<Self> {
        let config = JhomeConfig::load().unwrap_or_else(|e| {
            log::warn!("Ignoring invalid jhome configuration: {e}");
            JhomeConfig::default()
        });
        Self::with_config(&config)
    }

    pub fn with_config(config: &JhomeConfig) -> Result<Self> {
        Self::from_sources(&source::default_sources(config))
    }

    /// Resolve the home from `sources`, tried in order.
    pub fn from_sources(sources: &[Box<dyn HomeSource>]) -> Result<Self> {
        let (home, origin) = source::resolve_home(sources)?;
        Ok(Self {
            home,
            origin,
            os_name: host_os_name().to_string(),
        })
    }

    /// Use `home` as is, without any lookup or validation.
    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        Self {
            home: home.into(),
            origin: HomeOrigin::Explicit,
            os_name: host_os_name().to_string(),
        }
    }

    /// Derive executable names as they would be on the named operating system.
    pub fn on_os(mut self, os_name: impl Into<String>) -> Self {
        self.os_name = os_name.into();
        self
    }

    /// The home directory itself
    pub fn path(&self) -> &Path {
        &self.home
    }

    pub fn origin(&self) -> &HomeOrigin {
        &self.origin
    }

    pub fn os_name(&self) -> &str {
        &self.os_name
    }

    /// Join relative locations onto the home, in order.
    ///
    /// Both `/` and `\` are accepted as separators. Empty segments are
    /// skipped; with no segments the home itself is returned.
    pub fn join<I, S>(&self, segments: I) -> PathBuf
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut path = self.home.clone();
        for segment in segments {
            let segment = segment.as_ref();
            if segment.is_empty() {
                continue;
            }
            path.push(normalize_separators(segment));
        }
        path
    }

    /// Join a single location such as `"bin/java"` onto the home
    pub fn resolve(&self, location: &str) -> PathBuf {
        self.join([location])
    }

    /// `bin/<tool>` with the platform's executable extension. Not checked for existence.
    pub fn tool_executable(&self, tool: &str) -> PathBuf {
        let name = with_executable_extension(tool, &self.os_name);
        self.join([BIN_DIR, name.as_str()])
    }

    /// Path of the `java` launcher. Not checked for existence.
    pub fn java_executable(&self) -> PathBuf {
        self.tool_executable("java")
    }

    /// Path of `javac`, which must exist.
    ///
    /// A JRE ships `java` but not `javac`, so this fails with
    /// [`JhomeError::MissingJavac`] when the home is not a full JDK.
    pub fn javac_executable(&self) -> Result<PathBuf> {
        let javac = self.tool_executable("javac");
        if !javac.exists() {
            log::debug!(
                "javac not found at {} (home resolved from {})",
                javac.display(),
                self.origin
            );
            return Err(JhomeError::MissingJavac {
                javac,
                home: self.home.clone(),
            });
        }
        Ok(javac)
    }

    pub fn javac_exists(&self) -> bool {
        self.tool_executable("javac").exists()
    }
}

impl fmt::Display for Jhome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.home.display())
    }
}
