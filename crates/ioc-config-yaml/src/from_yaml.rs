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
use ioc_config_core::convert::{join_list, DEFAULT_SECTION};
use ioc_config_core::ConfigTree;
use serde_yaml::{Mapping, Value as YamlValue};

/// Default maximum document size (10 MB)
pub const DEFAULT_MAX_DOCUMENT_SIZE: usize = 10 * 1024 * 1024;

/// Configuration for YAML import
#[derive(Debug, Clone)]
pub struct FromYamlConfig {
    /// Section receiving top-level scalars (default: `general`)
    pub default_section: String,
    /// Drop `null` parameters instead of storing an empty value (default: true)
    pub skip_nulls: bool,
    /// Reject input larger than this many bytes
    pub max_document_size: usize,
}

impl Default for FromYamlConfig {
    fn default() -> Self {
        Self {
            default_section: DEFAULT_SECTION.to_string(),
            skip_nulls: true,
            max_document_size: DEFAULT_MAX_DOCUMENT_SIZE,
        }
    }
}

impl FromYamlConfig {
    pub fn builder() -> FromYamlConfigBuilder {
        FromYamlConfigBuilder::default()
    }
}

/// Builder for `FromYamlConfig`
#[derive(Debug, Clone, Default)]
pub struct FromYamlConfigBuilder {
    config: FromYamlConfig,
}

impl FromYamlConfigBuilder {
    pub fn default_section(mut self, name: impl Into<String>) -> Self {
        self.config.default_section = name.into();
        self
    }

    pub fn skip_nulls(mut self, skip: bool) -> Self {
        self.config.skip_nulls = skip;
        self
    }

    pub fn max_document_size(mut self, size: usize) -> Self {
        self.config.max_document_size = size;
        self
    }

    pub fn build(self) -> FromYamlConfig {
        self.config
    }
}

/// Parse YAML text into a tree
///
/// An empty document yields an empty tree.
pub fn from_yaml(yaml: &str, config: &FromYamlConfig) -> Result<ConfigTree, YamlError> {
    if yaml.len() > config.max_document_size {
        return Err(YamlError::DocumentTooLarge {
            size: yaml.len(),
            max_size: config.max_document_size,
        });
    }
    let value: YamlValue = serde_yaml::from_str(yaml)?;
    from_yaml_value(&value, config)
}

/// Convert a parsed YAML value into a tree
pub fn from_yaml_value(value: &YamlValue, config: &FromYamlConfig) -> Result<ConfigTree, YamlError> {
    let root = match value {
        YamlValue::Mapping(map) => map,
        YamlValue::Null => return Ok(ConfigTree::new()),
        YamlValue::Tagged(tagged) => return from_yaml_value(&tagged.value, config),
        other => {
            return Err(YamlError::InvalidRootType {
                found: yaml_type_name(other).to_string(),
            })
        }
    };

    let mut tree = ConfigTree::new();
    for (key, member) in root {
        let name = key_to_string(key, "")?;
        match untag(member) {
            YamlValue::Mapping(params) => {
                tree.add_section(&name);
                read_section(&mut tree, &name, params, config)?;
            }
            other => {
                let section = config.default_section.as_str();
                if let Some(raw) = scalar_to_raw(other, section, &name, config)? {
                    tree.set_parameter(section, name, raw);
                }
            }
        }
    }
    Ok(tree)
}

fn read_section(
    tree: &mut ConfigTree,
    section: &str,
    params: &Mapping,
    config: &FromYamlConfig,
) -> Result<(), YamlError> {
    for (key, value) in params {
        let key = key_to_string(key, section)?;
        if let Some(raw) = scalar_to_raw(untag(value), section, &key, config)? {
            tree.set_parameter(section, key, raw);
        }
    }
    Ok(())
}

fn scalar_to_raw(
    value: &YamlValue,
    section: &str,
    key: &str,
    config: &FromYamlConfig,
) -> Result<Option<String>, YamlError> {
    let raw = match value {
        YamlValue::Null if config.skip_nulls => return Ok(None),
        YamlValue::Sequence(items) => join_list(items.iter().map(|item| item_to_raw(untag(item)))),
        YamlValue::Mapping(_) => {
            return Err(YamlError::NestedMapping {
                path: format!("{section}.{key}"),
            })
        }
        other => item_to_raw(other),
    };
    Ok(Some(raw))
}

fn item_to_raw(value: &YamlValue) -> String {
    match value {
        YamlValue::Null => String::new(),
        YamlValue::Bool(b) => b.to_string(),
        YamlValue::Number(n) => n.to_string(),
        YamlValue::String(s) => s.clone(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

fn key_to_string(key: &YamlValue, path: &str) -> Result<String, YamlError> {
    match key {
        YamlValue::String(s) => Ok(s.clone()),
        YamlValue::Number(n) => Ok(n.to_string()),
        YamlValue::Bool(b) => Ok(b.to_string()),
        other => Err(YamlError::NonStringKey {
            key_type: yaml_type_name(other).to_string(),
            path: if path.is_empty() { "root".to_string() } else { path.to_string() },
        }),
    }
}

fn untag(value: &YamlValue) -> &YamlValue {
    match value {
        YamlValue::Tagged(tagged) => untag(&tagged.value),
        other => other,
    }
}

fn yaml_type_name(value: &YamlValue) -> &'static str {
    match value {
        YamlValue::Null => "null",
        YamlValue::Bool(_) => "boolean",
        YamlValue::Number(_) => "number",
        YamlValue::String(_) => "string",
        YamlValue::Sequence(_) => "sequence",
        YamlValue::Mapping(_) => "mapping",
        YamlValue::Tagged(_) => "tagged",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(yaml: &str) -> Result<ConfigTree, YamlError> {
        from_yaml(yaml, &FromYamlConfig::default())
    }

    // ==================== Section mapping tests ====================

    #[test]
    fn test_sections() {
        let tree = parse(
            "object:\n  id: 17030\n  name: Sierpinski\nsearch:\n  max_magnitude: 16.5\n  bands: [V, R]\n",
        )
        .unwrap();
        assert_eq!(tree.section_names(), vec!["object", "search"]);
        assert_eq!(tree.value("object", "id"), Some("17030"));
        assert_eq!(tree.value("search", "max_magnitude"), Some("16.5"));
        assert_eq!(tree.value("search", "bands"), Some("[V, R]"));
    }

    #[test]
    fn test_top_level_scalars() {
        let tree = parse("version: 2\nobject:\n  id: 1\n").unwrap();
        assert_eq!(tree.value("general", "version"), Some("2"));
    }

    #[test]
    fn test_numeric_keys_are_stringified() {
        let tree = parse("bands:\n  1: V\n  2: R\n").unwrap();
        assert_eq!(tree.value("bands", "1"), Some("V"));
    }

    #[test]
    fn test_empty_document() {
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn test_nulls() {
        let tree = parse("object:\n  id: ~\n").unwrap();
        assert!(tree.parameter("object", "id").is_none());

        let keep = FromYamlConfig::builder().skip_nulls(false).build();
        let tree = from_yaml("object:\n  id: ~\n", &keep).unwrap();
        assert_eq!(tree.value("object", "id"), Some(""));
    }

    // ==================== Error tests ====================

    #[test]
    fn test_sequence_root_rejected() {
        assert_eq!(
            parse("- a\n- b\n").unwrap_err(),
            YamlError::InvalidRootType {
                found: "sequence".to_string()
            }
        );
    }

    #[test]
    fn test_nested_mapping_rejected() {
        assert_eq!(
            parse("search:\n  limits:\n    max: 20\n").unwrap_err(),
            YamlError::NestedMapping {
                path: "search.limits".to_string()
            }
        );
    }

    #[test]
    fn test_document_size_limit() {
        let config = FromYamlConfig::builder().max_document_size(8).build();
        let err = from_yaml("object:\n  id: 17030\n", &config).unwrap_err();
        assert!(matches!(err, YamlError::DocumentTooLarge { max_size: 8, .. }));
    }
}
