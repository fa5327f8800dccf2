// IOC Config - Occultation Configuration Toolkit
//
// Copyright (c) 2025 IOC Config contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! JSON Pointer (RFC 6901) access to a configuration tree.
//!
//! `/section/key` addresses a parameter and `/section` a section. `/` and
//! the empty string address the root.

use crate::error::{ConfigError, ConfigResult};
use crate::tree::ConfigTree;

/// Split a pointer into unescaped tokens. The root yields no tokens.
pub fn parse_path(path: &str) -> Vec<String> {
    path.split('/')
        .filter(|token| !token.is_empty())
        .map(unescape_token)
        .collect()
}

/// Escape `~` as `~0` and `/` as `~1`.
pub fn escape_token(token: &str) -> String {
    token.replace('~', "~0").replace('/', "~1")
}

/// Reverse [`escape_token`]. `~1` is decoded before `~0`.
pub fn unescape_token(token: &str) -> String {
    token.replace("~1", "/").replace("~0", "~")
}

/// Build a pointer from raw tokens.
pub fn join_path<'a>(tokens: impl IntoIterator<Item = &'a str>) -> String {
    let mut out = String::new();
    for token in tokens {
        out.push('/');
        out.push_str(&escape_token(token));
    }
    if out.is_empty() {
        out.push('/');
    }
    out
}

impl ConfigTree {
    /// Parameter value at `/section/key`.
    pub fn get_path(&self, path: &str) -> Option<&str> {
        match parse_path(path).as_slice() {
            [section, key] => self.value(section, key),
            _ => None,
        }
    }

    /// Set the value at `/section/key`, or create `/section`.
    pub fn set_path(&mut self, path: &str, value: impl Into<String>) -> ConfigResult<()> {
        match parse_path(path).as_slice() {
            [section] => {
                self.add_section(section);
                Ok(())
            }
            [section, key] => {
                self.set_parameter(section, key.clone(), value);
                Ok(())
            }
            [] => Err(ConfigError::path("cannot assign to the root")),
            _ => Err(ConfigError::path(format!("path '{path}' is deeper than section/key"))),
        }
    }

    pub fn has_path(&self, path: &str) -> bool {
        match parse_path(path).as_slice() {
            [] => true,
            [section] => self.has_section(section),
            [section, key] => self.parameter(section, key).is_some(),
            _ => false,
        }
    }

    /// Remove a parameter or a whole section. Returns whether anything was removed.
    pub fn delete_path(&mut self, path: &str) -> bool {
        match parse_path(path).as_slice() {
            [section] => self.remove_section(section).is_some(),
            [section, key] => self.remove_parameter(section, key).is_some(),
            _ => false,
        }
    }

    /// Every section path followed by its parameter paths.
    pub fn all_paths(&self) -> Vec<String> {
        let mut paths = Vec::with_capacity(self.len() + self.parameter_count());
        for section in self.sections() {
            paths.push(join_path([section.name.as_str()]));
            for param in section.iter() {
                paths.push(join_path([section.name.as_str(), param.key.as_str()]));
            }
        }
        paths
    }
}
