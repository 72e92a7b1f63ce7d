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

//! Checks against the Java installation of the machine running the tests.
//!
//! A JDK (9 or later, so that `javac` ships with it) must be on PATH or in
//! JAVA_HOME. Run with `--features integration_tests`.

use jhome::Jhome;
use std::fs;
use std::process::Command;

fn bin_listing(jhome: &Jhome) -> String {
    fs::read_dir(jhome.resolve("bin"))
        .map(|entries| {
            entries
                .flatten()
                .map(|entry| entry.path().display().to_string())
                .collect::<Vec<_>>()
                .join("\n")
        })
        .unwrap_or_default()
}

#[test]
#[cfg_attr(not(feature = "integration_tests"), ignore)]
fn test_finds_home() {
    let jhome = Jhome::new().unwrap();
    assert!(
        jhome.path().exists(),
        "Default home should lead to an existing folder: {jhome}"
    );
    assert!(
        jhome.resolve("bin").exists(),
        "Bin folder should exist in the Java home {jhome}"
    );
}

#[test]
#[cfg_attr(not(feature = "integration_tests"), ignore)]
fn test_finds_java() {
    let jhome = Jhome::new().unwrap();
    let java = jhome.java_executable();
    assert!(
        java.is_file(),
        "java binary file doesn't exist at '{}'. All files in bin folder:\n{}",
        java.display(),
        bin_listing(&jhome)
    );
}

#[test]
#[cfg_attr(not(feature = "integration_tests"), ignore)]
fn test_finds_javac() {
    let jhome = Jhome::new().unwrap();
    assert!(jhome.javac_exists(), "javac should exist in {jhome}");

    let javac = jhome.javac_executable().unwrap();
    assert!(
        javac.is_file(),
        "javac binary file doesn't exist at '{}'. All files in bin folder:\n{}",
        javac.display(),
        bin_listing(&jhome)
    );
}

#[test]
#[cfg_attr(not(feature = "integration_tests"), ignore)]
fn test_java_reports_version() {
    let jhome = Jhome::new().unwrap();
    let output = Command::new(jhome.java_executable())
        .arg("-version")
        .output()
        .unwrap();

    assert!(output.status.success());
    // Java outputs version info to stderr
    let version = String::from_utf8_lossy(&output.stderr);
    assert!(version.contains("version"), "unexpected output: {version}");
}
