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

/// Shared test fixtures for creating fake Java installations
use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Creates a fake Java home with the given tools under `bin/`
///
/// # Arguments
/// * `root` - Directory to create the installation in
/// * `name` - Installation directory name (e.g., "temurin-21")
/// * `tools` - Tool names without extension (e.g., "java", "javac")
///
/// # Returns
/// The path to the created Java home
#[allow(dead_code)]
pub fn create_test_jdk_fs(root: &Path, name: &str, tools: &[&str]) -> PathBuf {
    let jdk_path = root.join(name);
    let bin_dir = jdk_path.join("bin");
    fs::create_dir_all(&bin_dir).unwrap();

    for tool in tools {
        let tool_path = if cfg!(windows) {
            bin_dir.join(format!("{tool}.exe"))
        } else {
            bin_dir.join(tool)
        };
        write_executable(&tool_path, "#!/bin/sh\necho test\n");
    }

    jdk_path
}

/// Creates a launcher script that reports `java.home` the way a real JVM does
/// for `-XshowSettings:properties -version`
#[cfg(unix)]
#[allow(dead_code)]
pub fn create_fake_launcher(dir: &Path, java_home: &Path) -> PathBuf {
    let launcher = dir.join("fake-java");
    let script = format!(
        "#!/bin/sh\n\
         echo 'Property settings:' >&2\n\
         echo '    file.encoding = UTF-8' >&2\n\
         echo '    java.home = {}' >&2\n\
         echo '    java.version = 21.0.5' >&2\n\
         echo '' >&2\n\
         echo 'openjdk version \"21.0.5\" 2024-10-15 LTS' >&2\n",
        java_home.display()
    );
    write_executable(&launcher, &script);
    launcher
}

fn write_executable(path: &Path, contents: &str) {
    fs::write(path, contents).unwrap();

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let metadata = fs::metadata(path).unwrap();
        let mut perms = metadata.permissions();
        perms.set_mode(0o755);
        fs::set_permissions(path, perms).unwrap();
    }
}

/// Sets or clears an environment variable and restores the previous value on drop.
///
/// Tests using this must be `#[serial]`.
pub struct EnvVarGuard {
    name: String,
    original: Option<OsString>,
}

impl EnvVarGuard {
    #[allow(dead_code)]
    pub fn set(name: &str, value: impl AsRef<std::ffi::OsStr>) -> Self {
        let original = env::var_os(name);
        unsafe {
            env::set_var(name, value);
        }
        Self {
            name: name.to_string(),
            original,
        }
    }

    #[allow(dead_code)]
    pub fn remove(name: &str) -> Self {
        let original = env::var_os(name);
        unsafe {
            env::remove_var(name);
        }
        Self {
            name: name.to_string(),
            original,
        }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(value) => env::set_var(&self.name, value),
                None => env::remove_var(&self.name),
            }
        }
    }
}
