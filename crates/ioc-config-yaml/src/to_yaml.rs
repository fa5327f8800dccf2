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

use crate::YamlError;
use ioc_config_core::convert::TypedValue;
use ioc_config_core::ConfigTree;
use serde_yaml::{Mapping, Number, Value as YamlValue};

/// Configuration for YAML output
#[derive(Debug, Clone)]
pub struct ToYamlConfig {
    /// Emit numbers, booleans and sequences for values that look like them
    /// (default: true). When false every value is a YAML string.
    pub typed_values: bool,
}

impl Default for ToYamlConfig {
    fn default() -> Self {
        Self { typed_values: true }
    }
}

/// Convert a tree to a YAML string
pub fn to_yaml(tree: &ConfigTree, config: &ToYamlConfig) -> Result<String, YamlError> {
    let value = to_yaml_value(tree, config);
    Ok(serde_yaml::to_string(&value)?)
}

/// Convert a tree to a `serde_yaml::Value` mapping of section mappings
pub fn to_yaml_value(tree: &ConfigTree, config: &ToYamlConfig) -> YamlValue {
    let mut root = Mapping::new();
    for section in tree.sections() {
        let mut params = Mapping::new();
        for param in section.iter() {
            let value = if config.typed_values {
                typed_to_yaml(TypedValue::from_raw(&param.value))
            } else {
                YamlValue::String(param.value.clone())
            };
            params.insert(YamlValue::String(param.key.clone()), value);
        }
        root.insert(
            YamlValue::String(section.name.clone()),
            YamlValue::Mapping(params),
        );
    }
    YamlValue::Mapping(root)
}

fn typed_to_yaml(value: TypedValue) -> YamlValue {
    match value {
        TypedValue::Int(n) => YamlValue::Number(Number::from(n)),
        TypedValue::Float(f) => YamlValue::Number(Number::from(f)),
        TypedValue::Bool(b) => YamlValue::Bool(b),
        TypedValue::List(items) => {
            YamlValue::Sequence(items.into_iter().map(typed_to_yaml).collect())
        }
        TypedValue::Text(s) => YamlValue::String(s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> ConfigTree {
        let mut tree = ConfigTree::new();
        tree.set_parameter("object", "id", "17030");
        tree.set_parameter("search", "max_magnitude", "16.5");
        tree.set_parameter("search", "use_gaia", ".false.");
        tree.set_parameter("filters", "bands", "[V, R]");
        tree
    }

    #[test]
    fn test_typed_scalars() {
        let value = to_yaml_value(&tree(), &ToYamlConfig::default());
        assert_eq!(value["object"]["id"], YamlValue::Number(17030.into()));
        assert_eq!(value["search"]["max_magnitude"].as_f64(), Some(16.5));
        assert_eq!(value["search"]["use_gaia"], YamlValue::Bool(false));
        assert_eq!(value["filters"]["bands"].as_sequence().map(Vec::len), Some(2));
    }

    #[test]
    fn test_untyped_scalars() {
        let config = ToYamlConfig { typed_values: false };
        let value = to_yaml_value(&tree(), &config);
        assert_eq!(value["object"]["id"].as_str(), Some("17030"));
        assert_eq!(value["search"]["use_gaia"].as_str(), Some(".false."));
    }

    #[test]
    fn test_yaml_text() {
        let mut small = ConfigTree::new();
        small.set_parameter("gaia", "catalog", "DR3");
        let text = to_yaml(&small, &ToYamlConfig::default()).unwrap();
        assert_eq!(text, "gaia:\n  catalog: DR3\n");
    }

    #[test]
    fn test_empty_tree() {
        let text = to_yaml(&ConfigTree::new(), &ToYamlConfig::default()).unwrap();
        assert_eq!(text.trim(), "{}");
    }
}
