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

//! Configuration tree to JSON conversion

use crate::JsonConversionError;
use ioc_config_core::convert::TypedValue;
use ioc_config_core::ConfigTree;
use serde_json::{Map, Number, Value as JsonValue};

/// Configuration for JSON output
#[derive(Debug, Clone)]
pub struct ToJsonConfig {
    /// Pretty-print with indentation (default: true)
    pub pretty: bool,
    /// Emit numbers, booleans and arrays for values that look like them
    /// (default: true). When false every value is a JSON string.
    pub typed_values: bool,
}

impl Default for ToJsonConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            typed_values: true,
        }
    }
}

impl ToJsonConfig {
    pub fn builder() -> ToJsonConfigBuilder {
        ToJsonConfigBuilder::default()
    }
}

/// Builder for `ToJsonConfig`
#[derive(Debug, Clone, Default)]
pub struct ToJsonConfigBuilder {
    config: ToJsonConfig,
}

impl ToJsonConfigBuilder {
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.config.pretty = pretty;
        self
    }

    pub fn typed_values(mut self, typed: bool) -> Self {
        self.config.typed_values = typed;
        self
    }

    pub fn build(self) -> ToJsonConfig {
        self.config
    }
}

/// Convert a tree to a JSON string
pub fn to_json(tree: &ConfigTree, config: &ToJsonConfig) -> Result<String, JsonConversionError> {
    let value = to_json_value(tree, config);
    let text = if config.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    Ok(text)
}

/// Convert a tree to a `serde_json::Value`
///
/// The result is an object of sections in tree order, each an object of
/// parameters.
pub fn to_json_value(tree: &ConfigTree, config: &ToJsonConfig) -> JsonValue {
    let mut root = Map::with_capacity(tree.len());
    for section in tree.sections() {
        let mut params = Map::with_capacity(section.len());
        for param in section.iter() {
            let value = if config.typed_values {
                typed_to_json(TypedValue::from_raw(&param.value))
            } else {
                JsonValue::String(param.value.clone())
            };
            params.insert(param.key.clone(), value);
        }
        root.insert(section.name.clone(), JsonValue::Object(params));
    }
    JsonValue::Object(root)
}

fn typed_to_json(value: TypedValue) -> JsonValue {
    match value {
        TypedValue::Int(n) => JsonValue::Number(Number::from(n)),
        TypedValue::Float(f) => Number::from_f64(f)
            .map(JsonValue::Number)
            .unwrap_or_else(|| JsonValue::String(f.to_string())),
        TypedValue::Bool(b) => JsonValue::Bool(b),
        TypedValue::List(items) => JsonValue::Array(items.into_iter().map(typed_to_json).collect()),
        TypedValue::Text(s) => JsonValue::String(s),
    }
}
