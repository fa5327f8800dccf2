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

//! JSON renderings of diffs, version history and validation reports

use ioc_config_core::{diff, ConfigTree, ValidationReport, VersionedConfig};
use serde_json::{json, Map, Value as JsonValue};

/// Compare two trees and render the changes as a JSON array
///
/// Unchanged parameters are left out. Each element carries `type`,
/// `section` and `key`, plus `old_value` and `new_value` where they apply.
pub fn diff_to_json(old: &ConfigTree, new: &ConfigTree) -> JsonValue {
    let entries = diff(old, new)
        .into_iter()
        .filter(|entry| entry.is_change())
        .map(|entry| {
            let mut obj = Map::new();
            obj.insert("type".to_string(), json!(entry.kind));
            obj.insert("section".to_string(), json!(entry.section));
            obj.insert("key".to_string(), json!(entry.key));
            if let Some(old_value) = entry.old_value {
                obj.insert("old_value".to_string(), json!(old_value));
            }
            if let Some(new_value) = entry.new_value {
                obj.insert("new_value".to_string(), json!(new_value));
            }
            JsonValue::Object(obj)
        })
        .collect();
    JsonValue::Array(entries)
}

/// Render version history as `[{version, description, timestamp}]`
pub fn history_to_json(config: &VersionedConfig) -> JsonValue {
    config
        .history()
        .iter()
        .map(|entry| {
            json!({
                "version": entry.version,
                "description": entry.description,
                "timestamp": entry.timestamp_rfc3339(),
            })
        })
        .collect()
}

/// Render a validation report as `{valid, errors: [{code, section, message}]}`
pub fn report_to_json(report: &ValidationReport) -> JsonValue {
    let errors: Vec<JsonValue> = report
        .violations()
        .iter()
        .map(|v| {
            json!({
                "code": v.code(),
                "section": v.section(),
                "message": v.to_string(),
            })
        })
        .collect();
    json!({
        "valid": report.is_valid(),
        "errors": errors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ioc_config_core::Schema;

    fn trees() -> (ConfigTree, ConfigTree) {
        let mut old = ConfigTree::new();
        old.set_parameter("search", "max_magnitude", "16.5");
        old.set_parameter("search", "min_duration", "0.5");
        old.set_parameter("object", "id", "17030");
        let mut new = old.clone();
        new.set_parameter("search", "max_magnitude", "18");
        new.remove_parameter("search", "min_duration");
        new.set_parameter("object", "name", "Sierpinski");
        (old, new)
    }

    // ==================== Diff tests ====================

    #[test]
    fn test_diff_to_json_lists_changes_only() {
        let (old, new) = trees();
        let value = diff_to_json(&old, &new);
        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), 3);
        assert!(entries
            .iter()
            .all(|e| e["type"] != "unchanged"));
    }

    #[test]
    fn test_diff_to_json_entry_fields() {
        let (old, new) = trees();
        let value = diff_to_json(&old, &new);
        let modified = value
            .as_array()
            .unwrap()
            .iter()
            .find(|e| e["type"] == "modified")
            .unwrap();
        assert_eq!(modified["section"], "search");
        assert_eq!(modified["key"], "max_magnitude");
        assert_eq!(modified["old_value"], "16.5");
        assert_eq!(modified["new_value"], "18");

        let added = value
            .as_array()
            .unwrap()
            .iter()
            .find(|e| e["type"] == "added")
            .unwrap();
        assert!(added.get("old_value").is_none());
        assert_eq!(added["new_value"], "Sierpinski");
    }

    #[test]
    fn test_diff_to_json_identical_is_empty() {
        let (old, _) = trees();
        assert_eq!(diff_to_json(&old, &old), json!([]));
    }

    // ==================== History tests ====================

    #[test]
    fn test_history_to_json() {
        let mut versioned = VersionedConfig::new(trees().0);
        versioned.enable_versioning("Initial").unwrap();
        versioned.create_version("Tighter magnitude").unwrap();
        let value = history_to_json(&versioned);
        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["version"], 1);
        assert_eq!(entries[1]["description"], "Tighter magnitude");
        assert!(entries[0]["timestamp"].as_str().unwrap().ends_with('Z'));
    }

    #[test]
    fn test_history_to_json_disabled() {
        let versioned = VersionedConfig::new(ConfigTree::new());
        assert_eq!(history_to_json(&versioned), json!([]));
    }

    // ==================== Report tests ====================

    #[test]
    fn test_report_to_json() {
        let report = Schema::default_schema().validate(&ConfigTree::new());
        let value = report_to_json(&report);
        assert_eq!(value["valid"], false);
        let errors = value["errors"].as_array().unwrap();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors[0]["section"], "object");
        assert_eq!(errors[0]["message"], "Missing required section: object");
    }
}
