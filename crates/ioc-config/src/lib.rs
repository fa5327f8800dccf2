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

//! # IOC Config - Occultation Configuration Toolkit
//!
//! Sectioned key/value configuration for stellar occultation search tools:
//! a string-backed tree, numeric constraint expressions, a declarative
//! schema, and converters to the common text formats.
//!
//! ## Quick Start
//!
//! ```rust
//! use ioc_config::{from_json, validate, Schema};
//!
//! let json = r#"{
//!     "object": {"id": 17030, "name": "Sierpinski"},
//!     "time": {"start_date": "2025-01-01", "end_date": "2025-12-31"},
//!     "search": {"max_magnitude": 16.5}
//! }"#;
//!
//! let tree = from_json(json).unwrap();
//! let report = validate(&Schema::default_schema(), &tree);
//! assert!(report.is_valid());
//! ```
//!
//! ## Modules
//!
//! - [`json`]: JSON conversion and JSON-Schema export
//! - [`path`], [`merge`], [`diff`], [`query`], [`versioning`], [`batch`]:
//!   tree operations from the core crate
//!
//! ### Optional Format Converters (feature-gated)
//!
//! - `yaml`: YAML conversion (feature = "yaml")
//! - `xml`: XML conversion (feature = "xml")
//! - `csv`: CSV conversion (feature = "csv")
//! - `toml`: TOML conversion (feature = "toml")

// Re-export core types
pub use ioc_config_core::{
    // Validation
    validate,
    validate_with,
    // Main types
    ConfigBuilder,
    // Errors
    ConfigError,
    ConfigErrorKind,
    ConfigResult,
    ConfigTree,
    ConfigView,
    ConstraintError,
    NonNumericPolicy,
    Parameter,
    ParameterSpec,
    // Constraints
    RangeConstraint,
    Schema,
    SchemaViolation,
    Section,
    SectionKind,
    SectionSpec,
    ValidationOptions,
    ValidationReport,
    ValueType,
    CATALOG_SENTINEL,
};

pub use ioc_config_core::{batch, diff, merge, path, query, versioning};

// Error handling extensions
mod error_ext;
pub use error_ext::{ConfigResultExt, IntoConfigError};

mod format;
pub use format::{convert, Format};

// Re-export JSON conversion
pub mod json {
    //! JSON conversion utilities
    pub use ioc_config_json::{
        config_to_json, diff_to_json, from_json, from_json_value, history_to_json,
        json_to_config, report_to_json, to_json, to_json_value, FromJsonConfig,
        JsonConversionError, ToJsonConfig,
    };
    pub use ioc_config_json::schema_export::{
        to_json_schema, to_json_schema_string, validate_required_fields,
    };
}

// Optional format converters

/// YAML conversion utilities (requires `yaml` feature)
#[cfg(feature = "yaml")]
pub mod yaml {
    pub use ioc_config_yaml::{
        config_to_yaml, from_yaml, to_yaml, yaml_to_config, FromYamlConfig, ToYamlConfig,
        YamlError,
    };
}

/// XML conversion utilities (requires `xml` feature)
#[cfg(feature = "xml")]
pub mod xml {
    pub use ioc_config_xml::{
        config_to_xml, from_xml, to_xml, xml_to_config, FromXmlConfig, ToXmlConfig, XmlError,
    };
}

/// CSV conversion utilities (requires `csv` feature)
#[cfg(feature = "csv")]
pub mod csv {
    pub use ioc_config_csv::{
        config_to_csv, csv_to_config, detect_delimiter, from_csv, to_csv, CsvError,
        FromCsvConfig, ToCsvConfig,
    };
}

/// TOML conversion utilities (requires `toml` feature)
#[cfg(feature = "toml")]
pub mod toml {
    pub use ioc_config_toml::{
        config_to_toml, from_toml, to_toml, toml_to_config, FromTomlConfig, TomlError,
        ToTomlConfig,
    };
}

// Convenience functions at crate root

/// Parse a JSON document into a tree.
///
/// # Examples
///
/// ```rust
/// use ioc_config::from_json;
///
/// let tree = from_json(r#"{"gaia": {"catalog": "DR3"}}"#).unwrap();
/// assert_eq!(tree.value("gaia", "catalog"), Some("DR3"));
/// ```
#[inline]
pub fn from_json(json: &str) -> ConfigResult<ConfigTree> {
    ioc_config_json::json_to_config(json).into_config_result()
}

/// Serialize a tree as pretty JSON with typed values.
///
/// # Examples
///
/// ```rust
/// use ioc_config::{to_json, ConfigTree};
///
/// let mut tree = ConfigTree::new();
/// tree.set_parameter("search", "max_magnitude", "16.5");
/// assert!(to_json(&tree).unwrap().contains("\"max_magnitude\": 16.5"));
/// ```
#[inline]
pub fn to_json(tree: &ConfigTree) -> ConfigResult<String> {
    ioc_config_json::config_to_json(tree).into_config_result()
}

/// Parse a tree and validate it against a schema in one step.
///
/// Parse failures are errors; schema violations are reported in the
/// returned [`ValidationReport`].
pub fn load_and_validate(
    input: &str,
    format: Format,
    schema: &Schema,
) -> ConfigResult<(ConfigTree, ValidationReport)> {
    let tree = format.read(input)?;
    let report = validate(schema, &tree);
    Ok((tree, report))
}

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_roundtrip() {
        let tree = from_json(r#"{"object": {"id": 17030}}"#).unwrap();
        let json = to_json(&tree).unwrap();
        assert!(json.contains("17030"));
    }

    #[test]
    fn test_from_json_error_kind() {
        let err = from_json("not json").unwrap_err();
        assert_eq!(err.kind, ConfigErrorKind::Conversion);
        assert!(err.message.starts_with("JSON parse error"));
    }

    #[test]
    fn test_load_and_validate() {
        let (tree, report) = load_and_validate(
            r#"{"object": {"id": 17030}}"#,
            Format::Json,
            &Schema::default_schema(),
        )
        .unwrap();
        assert_eq!(tree.value("object", "id"), Some("17030"));
        assert!(!report.is_valid());
    }

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
