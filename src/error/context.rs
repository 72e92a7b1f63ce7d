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

use crate::error::JhomeError;
use std::fmt;

pub struct ErrorContext<'a> {
    pub error: &'a JhomeError,
    pub suggestion: Option<String>,
    pub details: Option<String>,
}

impl<'a> ErrorContext<'a> {
    pub fn new(error: &'a JhomeError) -> Self {
        let (suggestion, details) = match error {
            JhomeError::UnresolvedHome { sources } => {
                let suggestion = if cfg!(windows) {
                    Some(
                        "Put a Java runtime on your PATH, or point JAVA_HOME at a JDK: set \
                         JAVA_HOME=C:\\Program Files\\Java\\jdk-21"
                            .to_string(),
                    )
                } else {
                    Some(
                        "Put a Java runtime on your PATH, or point JAVA_HOME at a JDK: export \
                         JAVA_HOME=/usr/lib/jvm/jdk-21"
                            .to_string(),
                    )
                };
                let details = if sources.is_empty() {
                    None
                } else {
                    Some(format!(
                        "Consulted in order:\n{}",
                        sources
                            .iter()
                            .map(|s| format!("  - {s}"))
                            .collect::<Vec<_>>()
                            .join("\n")
                    ))
                };
                (suggestion, details)
            }
            JhomeError::MissingJavac { javac, home } => {
                let suggestion = Some(format!(
                    "The home folder {} may be wrong, or it holds a JRE or an incomplete \
                     installation. Point JAVA_HOME at a full JDK.",
                    home.display()
                ));
                let details = Some(format!("Expected javac at: {}", javac.display()));
                (suggestion, details)
            }
            JhomeError::ConfigError(msg) => {
                let suggestion = Some(
                    "Check the [property] and [environment] sections of jhome's config.toml and \
                     any JHOME_* environment variables."
                        .to_string(),
                );
                let details = Some(msg.clone());
                (suggestion, details)
            }
        };

        ErrorContext {
            error,
            suggestion,
            details,
        }
    }

    pub fn with_suggestion(mut self, suggestion: String) -> Self {
        self.suggestion = Some(suggestion);
        self
    }

    pub fn with_details(mut self, details: String) -> Self {
        self.details = Some(details);
        self
    }
}

impl<'a> fmt::Display for ErrorContext<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\n\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}
