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
use ioc_config_core::convert::TypedValue;
use ioc_config_core::ConfigTree;
use toml::{Table, Value as TomlValue};

/// Configuration for TOML output
#[derive(Debug, Clone)]
pub struct ToTomlConfig {
    /// Emit integers, floats, booleans and arrays for values that look like
    /// them (default: true). When false every value is a TOML string.
    pub typed_values: bool,
    /// Use the multi-line array layout (default: false)
    pub pretty: bool,
}

impl Default for ToTomlConfig {
    fn default() -> Self {
        Self {
            typed_values: true,
            pretty: false,
        }
    }
}

/// Convert a tree to TOML text
pub fn to_toml(tree: &ConfigTree, config: &ToTomlConfig) -> Result<String, TomlError> {
    let table = to_toml_table(tree, config);
    let text = if config.pretty {
        toml::to_string_pretty(&table)?
    } else {
        toml::to_string(&table)?
    };
    Ok(text)
}

/// Convert a tree to a table of section tables
pub fn to_toml_table(tree: &ConfigTree, config: &ToTomlConfig) -> Table {
    let mut root = Table::new();
    for section in tree.sections() {
        let mut params = Table::new();
        for param in section.iter() {
            let value = if config.typed_values {
                typed_to_toml(TypedValue::from_raw(&param.value))
            } else {
                TomlValue::String(param.value.clone())
            };
            params.insert(param.key.clone(), value);
        }
        root.insert(section.name.clone(), TomlValue::Table(params));
    }
    root
}

fn typed_to_toml(value: TypedValue) -> TomlValue {
    match value {
        TypedValue::Int(n) => TomlValue::Integer(n),
        TypedValue::Float(f) => TomlValue::Float(f),
        TypedValue::Bool(b) => TomlValue::Boolean(b),
        TypedValue::List(items) => TomlValue::Array(items.into_iter().map(typed_to_toml).collect()),
        TypedValue::Text(s) => TomlValue::String(s),
    }
}
