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

//! JSON Schema export
//!
//! Renders a [`Schema`] as a JSON Schema Draft 7 document so external tools
//! can check configuration files written as JSON. Numeric constraints map to
//! `minimum`/`maximum` keywords (or their `exclusive` forms), allowed values
//! to `enum`.
//!
//! # Example
//!
//! ```rust
//! use ioc_config_core::{ParameterSpec, RangeConstraint, Schema, SectionSpec};
//! use ioc_config_json::schema_export::to_json_schema;
//!
//! let schema = Schema::new("survey", "2.1").section(
//!     SectionSpec::required("search")
//!         .parameter(ParameterSpec::required("max_magnitude").constraint(RangeConstraint::less_than(20.0))),
//! );
//! let doc = to_json_schema(&schema);
//! let prop = &doc["properties"]["search"]["properties"]["max_magnitude"];
//! assert_eq!(prop["type"], "number");
//! assert_eq!(prop["exclusiveMaximum"], 20.0);
//! ```

use crate::JsonConversionError;
use ioc_config_core::{ConfigTree, ParameterSpec, Schema, SectionSpec};
use serde_json::{json, Map, Value as JsonValue};

/// Draft 7 meta-schema URI
pub const DRAFT_07: &str = "http://json-schema.org/draft-07/schema#";

/// Render a schema as a JSON Schema value
pub fn to_json_schema(schema: &Schema) -> JsonValue {
    let mut doc = Map::new();
    doc.insert("$schema".to_string(), json!(DRAFT_07));
    doc.insert("title".to_string(), json!(schema.name));
    doc.insert("version".to_string(), json!(schema.version));
    doc.insert("type".to_string(), json!("object"));

    let mut properties = Map::new();
    for section in schema.sections() {
        properties.insert(section.name.clone(), section_to_schema(section));
    }
    doc.insert("properties".to_string(), JsonValue::Object(properties));

    let required: Vec<&str> = schema.required_sections().map(|s| s.name.as_str()).collect();
    doc.insert("required".to_string(), json!(required));

    JsonValue::Object(doc)
}

/// Render a schema as pretty-printed JSON Schema text
pub fn to_json_schema_string(schema: &Schema) -> Result<String, JsonConversionError> {
    Ok(serde_json::to_string_pretty(&to_json_schema(schema))?)
}

fn section_to_schema(section: &SectionSpec) -> JsonValue {
    let mut prop = Map::new();
    prop.insert("type".to_string(), json!("object"));
    prop.insert("description".to_string(), json!(section.description));

    let mut params = Map::new();
    for spec in section.parameters() {
        params.insert(spec.key.clone(), parameter_to_schema(spec));
    }
    prop.insert("properties".to_string(), JsonValue::Object(params));

    let required: Vec<&str> = section.required_parameters().map(|p| p.key.as_str()).collect();
    if !required.is_empty() {
        prop.insert("required".to_string(), json!(required));
    }
    JsonValue::Object(prop)
}

fn parameter_to_schema(spec: &ParameterSpec) -> JsonValue {
    let mut prop = Map::new();
    if !spec.description.is_empty() {
        prop.insert("description".to_string(), json!(spec.description));
    }

    // allowed values decide validity on their own, so the range is not exported
    let constraint = &spec.constraint;
    if !spec.allowed_values.is_empty() {
        prop.insert("enum".to_string(), json!(spec.allowed_values));
    } else if constraint.is_enabled() {
        prop.insert("type".to_string(), json!("number"));
        if let Some(min) = constraint.finite_min() {
            let keyword = if constraint.min_inclusive() {
                "minimum"
            } else {
                "exclusiveMinimum"
            };
            prop.insert(keyword.to_string(), json!(min));
        }
        if let Some(max) = constraint.finite_max() {
            let keyword = if constraint.max_inclusive() {
                "maximum"
            } else {
                "exclusiveMaximum"
            };
            prop.insert(keyword.to_string(), json!(max));
        }
        prop.insert("constraint".to_string(), json!(constraint.expression()));
    } else {
        prop.insert("type".to_string(), json!("string"));
    }

    if let Some(default) = &spec.default_value {
        prop.insert("default".to_string(), json!(default));
    }
    JsonValue::Object(prop)
}

/// Check a tree against the top-level `required` list of a JSON Schema
///
/// Each listed field must exist as a parameter key in some section. The
/// returned messages are empty when every field is present.
pub fn validate_required_fields(tree: &ConfigTree, json_schema: &JsonValue) -> Vec<String> {
    let Some(required) = json_schema.get("required").and_then(JsonValue::as_array) else {
        return Vec::new();
    };
    required
        .iter()
        .filter_map(JsonValue::as_str)
        .filter(|field| tree.find_parameter(field).is_none())
        .map(|field| format!("Missing required field: {field}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ioc_config_core::RangeConstraint;

    // ==================== Document shape tests ====================

    #[test]
    fn test_default_schema_header() {
        let doc = to_json_schema(&Schema::default_schema());
        assert_eq!(doc["$schema"], DRAFT_07);
        assert_eq!(doc["title"], "IOoccultCalc Default");
        assert_eq!(doc["version"], "1.0");
        assert_eq!(doc["type"], "object");
        assert_eq!(doc["required"], json!(["object", "time", "search"]));
    }

    #[test]
    fn test_section_required_parameters() {
        let doc = to_json_schema(&Schema::default_schema());
        let object = &doc["properties"]["object"];
        assert_eq!(object["type"], "object");
        assert_eq!(object["required"], json!(["id", "name"]));
        // only optional parameters: no required key
        assert!(doc["properties"]["propag"].get("required").is_none());
    }

    // ==================== Constraint mapping tests ====================

    #[test]
    fn test_inclusive_range_maps_to_minimum_maximum() {
        let doc = to_json_schema(&Schema::default_schema());
        let step = &doc["properties"]["propag"]["properties"]["step_size"];
        assert_eq!(step["type"], "number");
        assert_eq!(step["minimum"], 0.001);
        assert_eq!(step["maximum"], 10.0);
        assert_eq!(step["constraint"], "0.001..10");
    }

    #[test]
    fn test_exclusive_lower_bound() {
        let schema = Schema::new("s", "1").section(
            SectionSpec::required("a")
                .parameter(ParameterSpec::required("x").constraint(RangeConstraint::greater_than(0.0))),
        );
        let x = &to_json_schema(&schema)["properties"]["a"]["properties"]["x"];
        assert_eq!(x["exclusiveMinimum"], 0.0);
        assert!(x.get("maximum").is_none());
        assert!(x.get("exclusiveMaximum").is_none());
    }

    #[test]
    fn test_catalog_range_has_no_upper_bound() {
        let schema = Schema::new("s", "1").section(
            SectionSpec::required("a")
                .parameter(ParameterSpec::required("n").constraint(RangeConstraint::up_to_catalog(1.0))),
        );
        let n = &to_json_schema(&schema)["properties"]["a"]["properties"]["n"];
        assert_eq!(n["minimum"], 1.0);
        assert!(n.get("maximum").is_none());
    }

    #[test]
    fn test_enum_and_plain_string() {
        let schema = Schema::new("s", "1").section(
            SectionSpec::required("propag")
                .parameter(ParameterSpec::required("integrator").allowed_values(["RK4", "RKF78"]))
                .parameter(
                    ParameterSpec::optional("comment")
                        .description("Free text")
                        .default_value("none"),
                ),
        );
        let doc = to_json_schema(&schema);
        let props = &doc["properties"]["propag"]["properties"];
        assert_eq!(props["integrator"]["enum"], json!(["RK4", "RKF78"]));
        assert!(props["integrator"].get("type").is_none());
        assert_eq!(props["comment"]["type"], "string");
        assert_eq!(props["comment"]["description"], "Free text");
        assert_eq!(props["comment"]["default"], "none");
    }

    #[test]
    fn test_enum_wins_over_constraint() {
        let schema = Schema::new("s", "1").section(
            SectionSpec::required("propag").parameter(
                ParameterSpec::required("integrator")
                    .expression("d < 0")
                    .unwrap()
                    .allowed_values(["RK4", "RKF78"]),
            ),
        );
        let doc = to_json_schema(&schema);
        let integrator = &doc["properties"]["propag"]["properties"]["integrator"];
        assert_eq!(integrator["enum"], json!(["RK4", "RKF78"]));
        assert!(integrator.get("type").is_none());
        assert!(integrator.get("exclusiveMaximum").is_none());
        assert!(integrator.get("constraint").is_none());
    }

    #[test]
    fn test_schema_string_is_pretty() {
        let text = to_json_schema_string(&Schema::default_schema()).unwrap();
        assert!(text.starts_with("{\n"));
        assert!(text.contains("draft-07"));
    }

    // ==================== Required field tests ====================

    #[test]
    fn test_validate_required_fields() {
        let mut tree = ConfigTree::new();
        tree.set_parameter("object", "id", "17030");
        let schema = json!({"required": ["id", "name"]});
        assert_eq!(
            validate_required_fields(&tree, &schema),
            vec!["Missing required field: name"]
        );
    }

    #[test]
    fn test_validate_required_fields_without_list() {
        assert!(validate_required_fields(&ConfigTree::new(), &json!({})).is_empty());
    }
}
