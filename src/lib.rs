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

//! Finds the Java home directory even when `JAVA_HOME` is not set, and the
//! `java`/`javac` executables inside it.

pub mod config;
pub mod error;
pub mod home;
pub mod platform;

pub use crate::config::JhomeConfig;
pub use crate::error::{JhomeError, Result};
pub use crate::home::{HomeOrigin, HomeSource, Jhome};
