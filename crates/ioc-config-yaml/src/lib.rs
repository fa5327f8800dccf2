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

//! IOC Config YAML Conversion
//!
//! Bidirectional conversion between configuration trees and YAML. Each
//! section is a mapping of its parameters; values are typed on output the
//! same way the JSON converter types them.
//!
//! # Examples
//!
//! ```rust
//! use ioc_config_yaml::{config_to_yaml, yaml_to_config};
//!
//! let yaml = "object:\n  id: 17030\n  name: Sierpinski\n";
//! let tree = yaml_to_config(yaml).unwrap();
//! assert_eq!(tree.value("object", "name"), Some("Sierpinski"));
//!
//! let out = config_to_yaml(&tree).unwrap();
//! assert!(out.contains("id: 17030"));
//! ```

mod error;
mod from_yaml;
mod to_yaml;

pub use error::YamlError;
pub use from_yaml::{
    from_yaml, from_yaml_value, FromYamlConfig, FromYamlConfigBuilder, DEFAULT_MAX_DOCUMENT_SIZE,
};
pub use to_yaml::{to_yaml, to_yaml_value, ToYamlConfig};

use ioc_config_core::convert::{FromFormat, ToFormat};
use ioc_config_core::ConfigTree;

/// YAML format marker for the generic converter traits
#[derive(Debug, Clone, Copy, Default)]
pub struct Yaml;

impl FromFormat for Yaml {
    type Config = FromYamlConfig;
    type Error = YamlError;

    fn from_format(input: &str, config: &Self::Config) -> Result<ConfigTree, Self::Error> {
        from_yaml(input, config)
    }
}

impl ToFormat for Yaml {
    type Config = ToYamlConfig;
    type Error = YamlError;

    fn to_format(tree: &ConfigTree, config: &Self::Config) -> Result<String, Self::Error> {
        to_yaml(tree, config)
    }
}

/// Convert a tree to typed YAML
pub fn config_to_yaml(tree: &ConfigTree) -> Result<String, YamlError> {
    to_yaml(tree, &ToYamlConfig::default())
}

/// Parse YAML with default settings
pub fn yaml_to_config(yaml: &str) -> Result<ConfigTree, YamlError> {
    from_yaml(yaml, &FromYamlConfig::default())
}
