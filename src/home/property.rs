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

//! Reading system properties reported by a Java runtime.

use std::path::Path;
use std::process::Command;

/// Property holding the installation directory of the running JVM
pub const JAVA_HOME_PROPERTY: &str = "java.home";

/// Ask the runtime behind `launcher` for the value of one system property.
///
/// Runs `<launcher> -XshowSettings:properties -version` and reads the
/// property listing. Returns `None` if the launcher cannot be run or does not
/// report the property.
pub fn query_property(launcher: &Path, key: &str) -> Option<String> {
    let output = match Command::new(launcher)
        .arg("-XshowSettings:properties")
        .arg("-version")
        .output()
    {
        Ok(output) => output,
        Err(e) => {
            log::debug!("Failed to run {}: {e}", launcher.display());
            return None;
        }
    };

    if !output.status.success() {
        log::debug!(
            "{} -XshowSettings:properties exited with {}",
            launcher.display(),
            output.status
        );
    }

    // Java prints the settings listing to stderr
    let settings = String::from_utf8_lossy(&output.stderr);
    parse_property(&settings, key)
}

/// Find `key = value` in a `-XshowSettings:properties` listing.
///
/// Continuation lines of multi-valued properties carry no `=` and are skipped.
pub fn parse_property(settings: &str, key: &str) -> Option<String> {
    settings
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once('=')?;
            (name.trim() == key).then(|| value.trim().to_string())
        })
        .filter(|value| !value.is_empty())
}
