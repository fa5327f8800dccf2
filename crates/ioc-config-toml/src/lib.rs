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

//! IOC Config TOML Conversion
//!
//! Each section is a TOML table. Top-level keys that are not tables are read
//! into the `general` section.
//!
//! ```rust
//! use ioc_config_toml::{config_to_toml, toml_to_config};
//!
//! let text = "title = \"survey\"\n\n[object]\nid = 17030\n";
//! let tree = toml_to_config(text).unwrap();
//! assert_eq!(tree.value("general", "title"), Some("survey"));
//! assert_eq!(tree.value("object", "id"), Some("17030"));
//!
//! let out = config_to_toml(&tree).unwrap();
//! assert!(out.contains("[object]"));
//! ```

mod from_toml;
mod to_toml;

pub use from_toml::{from_toml, from_toml_table, FromTomlConfig};
pub use to_toml::{to_toml, to_toml_table, ToTomlConfig};

use ioc_config_core::convert::{FromFormat, ToFormat};
use ioc_config_core::ConfigTree;
use thiserror::Error;

/// Errors that can occur during TOML conversion
#[derive(Error, Debug)]
pub enum TomlError {
    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// TOML serialization failed
    #[error("TOML serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A parameter value was itself a table
    #[error("Nested table at '{path}' - parameters must be scalars or arrays")]
    NestedTable { path: String },
}

/// TOML format marker for the generic converter traits
#[derive(Debug, Clone, Copy, Default)]
pub struct Toml;

impl FromFormat for Toml {
    type Config = FromTomlConfig;
    type Error = TomlError;

    fn from_format(input: &str, config: &Self::Config) -> Result<ConfigTree, Self::Error> {
        from_toml(input, config)
    }
}

impl ToFormat for Toml {
    type Config = ToTomlConfig;
    type Error = TomlError;

    fn to_format(tree: &ConfigTree, config: &Self::Config) -> Result<String, Self::Error> {
        to_toml(tree, config)
    }
}

/// Convert a tree to typed TOML
pub fn config_to_toml(tree: &ConfigTree) -> Result<String, TomlError> {
    to_toml(tree, &ToTomlConfig::default())
}

/// Parse TOML with default settings
pub fn toml_to_config(text: &str) -> Result<ConfigTree, TomlError> {
    from_toml(text, &FromTomlConfig::default())
}
