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

mod context;
mod format;

pub use context::ErrorContext;
pub use format::format_error_chain;

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JhomeError {
    #[error("{}", describe_unset(.sources))]
    UnresolvedHome { sources: Vec<String> },

    #[error("javac binary file doesn't exist in the home folder '{}'", .home.display())]
    MissingJavac { javac: PathBuf, home: PathBuf },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

pub type Result<T> = std::result::Result<T, JhomeError>;

fn describe_unset(sources: &[String]) -> String {
    match sources {
        [] => "No Java home source is configured".to_string(),
        [only] => format!("{only} is not set"),
        _ => format!("Neither {} are set", sources.join(" nor ")),
    }
}
