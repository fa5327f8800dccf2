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

//! IOC Config JSON Conversion
//!
//! Bidirectional conversion between configuration trees and JSON, plus JSON
//! renderings of schemas, diffs and version history.
//!
//! # Mapping
//!
//! - each section is a JSON object of its parameters
//! - parameter values are typed on output (`"16.5"` becomes `16.5`,
//!   `.true.` becomes `true`, `[a, b]` becomes an array)
//! - on input, top-level non-object members land in the `general` section
//!
//! # Examples
//!
//! ```rust
//! use ioc_config_json::{config_to_json, json_to_config};
//!
//! let json = r#"{"object": {"id": 17030, "name": "Sierpinski"}}"#;
//! let tree = json_to_config(json).unwrap();
//! assert_eq!(tree.value("object", "id"), Some("17030"));
//!
//! let out = config_to_json(&tree).unwrap();
//! assert!(out.contains("\"name\": \"Sierpinski\""));
//! ```
//!
//! ## JSON Schema export
//!
//! ```rust
//! use ioc_config_core::Schema;
//! use ioc_config_json::schema_export::to_json_schema;
//!
//! let schema = to_json_schema(&Schema::default_schema());
//! assert_eq!(schema["required"][0], "object");
//! ```

mod from_json;
mod report;
pub mod schema_export;
mod to_json;

pub use from_json::{from_json, from_json_value, FromJsonConfig, FromJsonConfigBuilder};
pub use report::{diff_to_json, history_to_json, report_to_json};
pub use to_json::{to_json, to_json_value, ToJsonConfig, ToJsonConfigBuilder};

use ioc_config_core::convert::{FromFormat, ToFormat};
use ioc_config_core::ConfigTree;

/// Errors that can occur during JSON conversion
#[derive(Debug, Clone, thiserror::Error)]
pub enum JsonConversionError {
    /// JSON parsing or serialization failed
    #[error("JSON parse error: {0}")]
    ParseError(String),

    /// Root value must be an object
    #[error("Root must be a JSON object, found {0}")]
    InvalidRoot(String),

    /// A parameter value was itself an object
    #[error("Nested object at '{section}.{key}' - parameters must be scalars or arrays")]
    NestedObject { section: String, key: String },
}

impl From<serde_json::Error> for JsonConversionError {
    fn from(err: serde_json::Error) -> Self {
        JsonConversionError::ParseError(err.to_string())
    }
}

/// JSON format marker for the generic converter traits
#[derive(Debug, Clone, Copy, Default)]
pub struct Json;

impl FromFormat for Json {
    type Config = FromJsonConfig;
    type Error = JsonConversionError;

    fn from_format(input: &str, config: &Self::Config) -> Result<ConfigTree, Self::Error> {
        from_json(input, config)
    }
}

impl ToFormat for Json {
    type Config = ToJsonConfig;
    type Error = JsonConversionError;

    fn to_format(tree: &ConfigTree, config: &Self::Config) -> Result<String, Self::Error> {
        to_json(tree, config)
    }
}

/// Convert a tree to pretty, typed JSON
pub fn config_to_json(tree: &ConfigTree) -> Result<String, JsonConversionError> {
    to_json(tree, &ToJsonConfig::default())
}

/// Parse JSON with default settings
pub fn json_to_config(json: &str) -> Result<ConfigTree, JsonConversionError> {
    from_json(json, &FromJsonConfig::default())
}
