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

//! Platform-specific constants and utility functions.

use std::path::MAIN_SEPARATOR;

/// Name of the host operating system, e.g. `"linux"`, `"windows"`, `"macos"`
pub fn host_os_name() -> &'static str {
    std::env::consts::OS
}

/// Executable file extension for the named operating system.
///
/// Any name starting with `win` (case-insensitive) is treated as a
/// Windows-family system, matching both `"windows"` and names like
/// `"Windows 11"` but not `"Darwin"`.
pub fn exe_suffix(os_name: &str) -> &'static str {
    if os_name.trim_start().to_lowercase().starts_with("win") {
        ".exe"
    } else {
        ""
    }
}

/// Executable file extension for the host operating system
pub fn executable_extension() -> &'static str {
    exe_suffix(host_os_name())
}

/// Add the executable extension of the named operating system to a file name
pub fn with_executable_extension(name: &str, os_name: &str) -> String {
    format!("{name}{}", exe_suffix(os_name))
}

/// Rewrite both `/` and `\` in a relative location to the host separator
pub fn normalize_separators(location: &str) -> String {
    location
        .chars()
        .map(|c| if c == '/' || c == '\\' { MAIN_SEPARATOR } else { c })
        .collect()
}
