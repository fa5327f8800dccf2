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

//! JSON to configuration tree conversion

use crate::JsonConversionError;
use ioc_config_core::convert::{join_list, DEFAULT_SECTION};
use ioc_config_core::ConfigTree;
use serde_json::Value as JsonValue;

/// Configuration for JSON import
///
/// ```
/// use ioc_config_json::FromJsonConfig;
///
/// let config = FromJsonConfig::builder()
///     .default_section("globals")
///     .skip_nulls(false)
///     .build();
/// assert_eq!(config.default_section, "globals");
/// ```
#[derive(Debug, Clone)]
pub struct FromJsonConfig {
    /// Section receiving top-level scalars (default: `general`)
    pub default_section: String,
    /// Drop `null` parameters instead of storing an empty value (default: true)
    pub skip_nulls: bool,
}

impl Default for FromJsonConfig {
    fn default() -> Self {
        Self {
            default_section: DEFAULT_SECTION.to_string(),
            skip_nulls: true,
        }
    }
}

impl FromJsonConfig {
    pub fn builder() -> FromJsonConfigBuilder {
        FromJsonConfigBuilder::default()
    }
}

/// Builder for `FromJsonConfig`
#[derive(Debug, Clone, Default)]
pub struct FromJsonConfigBuilder {
    config: FromJsonConfig,
}

impl FromJsonConfigBuilder {
    pub fn default_section(mut self, name: impl Into<String>) -> Self {
        self.config.default_section = name.into();
        self
    }

    pub fn skip_nulls(mut self, skip: bool) -> Self {
        self.config.skip_nulls = skip;
        self
    }

    pub fn build(self) -> FromJsonConfig {
        self.config
    }
}

/// Parse JSON text into a tree
pub fn from_json(json: &str, config: &FromJsonConfig) -> Result<ConfigTree, JsonConversionError> {
    let value: JsonValue = serde_json::from_str(json)?;
    from_json_value(&value, config)
}

/// Convert a parsed JSON value into a tree
///
/// The root must be an object. Object members become sections; any other
/// member is stored in the default section under its own key.
pub fn from_json_value(
    value: &JsonValue,
    config: &FromJsonConfig,
) -> Result<ConfigTree, JsonConversionError> {
    let root = value
        .as_object()
        .ok_or_else(|| JsonConversionError::InvalidRoot(json_type_name(value).to_string()))?;

    let mut tree = ConfigTree::new();
    for (name, member) in root {
        match member {
            JsonValue::Object(params) => {
                tree.add_section(name);
                for (key, param) in params {
                    if let Some(raw) = scalar_to_raw(name, key, param, config)? {
                        tree.set_parameter(name, key.clone(), raw);
                    }
                }
            }
            other => {
                if let Some(raw) = scalar_to_raw(&config.default_section, name, other, config)? {
                    tree.set_parameter(&config.default_section, name.clone(), raw);
                }
            }
        }
    }
    Ok(tree)
}

fn scalar_to_raw(
    section: &str,
    key: &str,
    value: &JsonValue,
    config: &FromJsonConfig,
) -> Result<Option<String>, JsonConversionError> {
    let raw = match value {
        JsonValue::Null if config.skip_nulls => return Ok(None),
        JsonValue::Null => String::new(),
        JsonValue::Bool(b) => b.to_string(),
        JsonValue::Number(n) => n.to_string(),
        JsonValue::String(s) => s.clone(),
        JsonValue::Array(items) => join_list(items.iter().map(list_item_to_raw)),
        JsonValue::Object(_) => {
            return Err(JsonConversionError::NestedObject {
                section: section.to_string(),
                key: key.to_string(),
            })
        }
    };
    Ok(Some(raw))
}

fn list_item_to_raw(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        JsonValue::Null => String::new(),
        other => other.to_string(),
    }
}

fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Section mapping tests ====================

    #[test]
    fn test_sections_and_scalars() {
        let json = r#"{
            "object": {"id": 17030, "name": "Sierpinski", "active": true},
            "search": {"max_magnitude": 16.5, "bands": ["V", "R", 3]}
        }"#;
        let tree = from_json(json, &FromJsonConfig::default()).unwrap();
        assert_eq!(tree.section_names(), vec!["object", "search"]);
        assert_eq!(tree.value("object", "id"), Some("17030"));
        assert_eq!(tree.value("object", "active"), Some("true"));
        assert_eq!(tree.value("search", "max_magnitude"), Some("16.5"));
        assert_eq!(tree.value("search", "bands"), Some("[V, R, 3]"));
    }

    #[test]
    fn test_top_level_scalars_go_to_default_section() {
        let json = r#"{"version": "1.2", "object": {"id": 1}}"#;
        let tree = from_json(json, &FromJsonConfig::default()).unwrap();
        assert_eq!(tree.value("general", "version"), Some("1.2"));

        let config = FromJsonConfig::builder().default_section("meta").build();
        let tree = from_json(json, &config).unwrap();
        assert_eq!(tree.value("meta", "version"), Some("1.2"));
    }

    #[test]
    fn test_empty_section_is_kept() {
        let tree = from_json(r#"{"database": {}}"#, &FromJsonConfig::default()).unwrap();
        assert!(tree.has_section("database"));
        assert!(tree.section("database").unwrap().is_empty());
    }

    // ==================== Null tests ====================

    #[test]
    fn test_nulls() {
        let json = r#"{"object": {"id": null}}"#;
        let tree = from_json(json, &FromJsonConfig::default()).unwrap();
        assert!(tree.parameter("object", "id").is_none());

        let keep = FromJsonConfig::builder().skip_nulls(false).build();
        let tree = from_json(json, &keep).unwrap();
        assert_eq!(tree.value("object", "id"), Some(""));
    }

    // ==================== Error tests ====================

    #[test]
    fn test_invalid_root() {
        let err = from_json("[1, 2]", &FromJsonConfig::default()).unwrap_err();
        assert!(matches!(err, JsonConversionError::InvalidRoot(ref t) if t == "array"));
    }

    #[test]
    fn test_nested_object_rejected() {
        let err = from_json(r#"{"a": {"b": {"c": 1}}}"#, &FromJsonConfig::default()).unwrap_err();
        assert!(matches!(err, JsonConversionError::NestedObject { .. }));
        assert_eq!(err.to_string(), "Nested object at 'a.b' - parameters must be scalars or arrays");
    }

    #[test]
    fn test_malformed_json() {
        let err = from_json("{not json", &FromJsonConfig::default()).unwrap_err();
        assert!(matches!(err, JsonConversionError::ParseError(_)));
    }
}
