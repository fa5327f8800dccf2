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

use crate::TomlError;
use ioc_config_core::convert::{join_list, DEFAULT_SECTION};
use ioc_config_core::ConfigTree;
use toml::{Table, Value as TomlValue};

/// Configuration for TOML import
#[derive(Debug, Clone)]
pub struct FromTomlConfig {
    /// Section receiving top-level keys that are not tables (default: `general`)
    pub default_section: String,
}

impl Default for FromTomlConfig {
    fn default() -> Self {
        Self {
            default_section: DEFAULT_SECTION.to_string(),
        }
    }
}

/// Parse TOML text into a tree
pub fn from_toml(text: &str, config: &FromTomlConfig) -> Result<ConfigTree, TomlError> {
    let table: Table = toml::from_str(text)?;
    from_toml_table(&table, config)
}

/// Convert a parsed table into a tree
pub fn from_toml_table(table: &Table, config: &FromTomlConfig) -> Result<ConfigTree, TomlError> {
    let mut tree = ConfigTree::new();
    for (name, member) in table {
        match member {
            TomlValue::Table(params) => {
                tree.add_section(name);
                for (key, value) in params {
                    let raw = value_to_raw(value, name, key)?;
                    tree.set_parameter(name, key.clone(), raw);
                }
            }
            other => {
                let section = config.default_section.as_str();
                let raw = value_to_raw(other, section, name)?;
                tree.set_parameter(section, name.clone(), raw);
            }
        }
    }
    Ok(tree)
}

fn value_to_raw(value: &TomlValue, section: &str, key: &str) -> Result<String, TomlError> {
    let raw = match value {
        TomlValue::Array(items) => {
            let parts = items
                .iter()
                .map(|item| match item {
                    TomlValue::Array(_) | TomlValue::Table(_) => Err(nested(section, key)),
                    scalar => Ok(scalar_to_raw(scalar)),
                })
                .collect::<Result<Vec<_>, _>>()?;
            join_list(parts)
        }
        TomlValue::Table(_) => return Err(nested(section, key)),
        scalar => scalar_to_raw(scalar),
    };
    Ok(raw)
}

fn scalar_to_raw(value: &TomlValue) -> String {
    match value {
        TomlValue::String(s) => s.clone(),
        TomlValue::Integer(n) => n.to_string(),
        TomlValue::Float(f) => format_float(*f),
        TomlValue::Boolean(b) => b.to_string(),
        TomlValue::Datetime(dt) => dt.to_string(),
        TomlValue::Array(_) | TomlValue::Table(_) => String::new(),
    }
}

/// Whole floats keep a `.0` so they still read back as floats.
fn format_float(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 {
        format!("{f:.1}")
    } else {
        f.to_string()
    }
}

fn nested(section: &str, key: &str) -> TomlError {
    TomlError::NestedTable {
        path: format!("{section}.{key}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<ConfigTree, TomlError> {
        from_toml(text, &FromTomlConfig::default())
    }

    // ==================== Table mapping tests ====================

    #[test]
    fn test_tables_become_sections() {
        let tree = parse(
            "[object]\nid = 17030\nname = \"Sierpinski\"\n\n[propag]\nstep_size = 0.05\nadaptive = false\n",
        )
        .unwrap();
        assert_eq!(tree.section_names(), vec!["object", "propag"]);
        assert_eq!(tree.value("object", "id"), Some("17030"));
        assert_eq!(tree.value("propag", "step_size"), Some("0.05"));
        assert_eq!(tree.value("propag", "adaptive"), Some("false"));
    }

    #[test]
    fn test_top_level_keys_go_to_default_section() {
        let tree = parse("version = 3\n[object]\nid = 1\n").unwrap();
        assert_eq!(tree.value("general", "version"), Some("3"));
        assert_eq!(tree.section_names(), vec!["general", "object"]);
    }

    #[test]
    fn test_arrays_and_dates() {
        let tree = parse("[time]\nstart = 2025-01-01\nbands = [\"V\", 2, 3.5]\n").unwrap();
        assert_eq!(tree.value("time", "start"), Some("2025-01-01"));
        assert_eq!(tree.value("time", "bands"), Some("[V, 2, 3.5]"));
    }

    #[test]
    fn test_whole_float_keeps_fraction() {
        let tree = parse("[search]\nmax_magnitude = 20.0\n").unwrap();
        assert_eq!(tree.value("search", "max_magnitude"), Some("20.0"));
    }

    // ==================== Error tests ====================

    #[test]
    fn test_nested_table_rejected() {
        let err = parse("[search.limits]\nmax = 20\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Nested table at 'search.limits' - parameters must be scalars or arrays"
        );
    }

    #[test]
    fn test_array_of_tables_rejected() {
        let err = parse("[[observers]]\nname = \"a\"\n").unwrap_err();
        assert!(matches!(err, TomlError::NestedTable { .. }));
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(parse("[object\nid = 1"), Err(TomlError::Parse(_))));
    }
}
