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

//! Platform detection utilities.
//!
//! Executable suffix selection is a pure function of an OS name so callers
//! can ask about a host other than the one they run on.

mod constants;

pub use constants::{
    executable_extension, exe_suffix, host_os_name, normalize_separators,
    with_executable_extension,
};
