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

//! End-to-end validation scenarios.

use ioc_config_core::{
    validate, ConfigBuilder, ConfigTree, ParameterSpec, RangeConstraint, Schema, SchemaViolation,
    SectionSpec,
};

fn object_with_optional_search() -> Schema {
    Schema::new("scenario", "1.0")
        .section(SectionSpec::required("object").parameter(ParameterSpec::required("id")))
        .section(
            SectionSpec::optional("search").parameter(
                ParameterSpec::optional("max_magnitude")
                    .expression("d < 20")
                    .unwrap(),
            ),
        )
}

// ==================== Scenario tests ====================

#[test]
fn test_object_only_config_passes() {
    let tree = ConfigBuilder::new()
        .section("object")
        .param("id", "17030")
        .unwrap()
        .build();
    let (ok, errors) = validate(&object_with_optional_search(), &tree).into_parts();
    assert!(ok);
    assert!(errors.is_empty());
}

#[test]
fn test_empty_config_reports_only_required_section() {
    let (ok, errors) = validate(&object_with_optional_search(), &ConfigTree::new()).into_parts();
    assert!(!ok);
    assert_eq!(errors, vec!["Missing required section: object"]);
}

#[test]
fn test_required_numeric_violation_surfaces() {
    let schema = Schema::new("scenario", "1.0").section(
        SectionSpec::required("search").parameter(
            ParameterSpec::required("max_magnitude")
                .expression("d < 20")
                .unwrap(),
        ),
    );
    let mut tree = ConfigTree::new();
    tree.set_parameter("search", "max_magnitude", "25");
    let report = validate(&schema, &tree);
    assert_eq!(report.len(), 1);
    assert!(matches!(
        &report.violations()[0],
        SchemaViolation::InvalidValue { key, .. } if key == "max_magnitude"
    ));
}

#[test]
fn test_required_parameter_in_optional_section_is_not_checked() {
    let schema = Schema::new("scenario", "1.0").section(
        SectionSpec::optional("propag").parameter(
            ParameterSpec::required("step_size")
                .constraint(RangeConstraint::between_inclusive(0.001, 10.0)),
        ),
    );
    let mut tree = ConfigTree::new();
    tree.set_parameter("propag", "step_size", "500");
    assert!(validate(&schema, &tree).is_valid());
}

#[test]
fn test_enumerated_parameter() {
    let schema = Schema::new("scenario", "1.0").section(
        SectionSpec::required("propag").parameter(
            ParameterSpec::required("integrator")
                .constraint(RangeConstraint::less_than(0.0))
                .allowed_values(["RK4", "RKF78"]),
        ),
    );
    let mut tree = ConfigTree::new();
    tree.set_parameter("propag", "integrator", "RK4");
    assert!(validate(&schema, &tree).is_valid());

    tree.set_parameter("propag", "integrator", "Euler");
    let report = validate(&schema, &tree);
    assert_eq!(
        report.messages(),
        vec!["Parameter 'integrator' in section 'propag' failed validation: d < 0"]
    );
}

// ==================== Default schema tests ====================

#[test]
fn test_default_schema_accepts_complete_config() {
    let tree = ConfigBuilder::new()
        .section("object")
        .params([("id", "17030"), ("name", "Sierpinski")])
        .unwrap()
        .section("time")
        .params([("start_date", "2025-01-01"), ("end_date", "2025-12-31")])
        .unwrap()
        .section("search")
        .param("max_magnitude", "35")
        .unwrap()
        .build();
    // max_magnitude is optional, so its out-of-range value is not reported
    assert!(Schema::default_schema().validate(&tree).is_valid());
}

#[test]
fn test_default_schema_reports_in_schema_order() {
    let mut tree = ConfigTree::new();
    tree.add_section("search");
    tree.set_parameter("time", "start_date", "2025-01-01");
    let report = Schema::default_schema().validate(&tree);
    assert_eq!(
        report.messages(),
        vec![
            "Missing required section: object",
            "Missing required parameter 'end_date' in section 'time'",
        ]
    );
}

// ==================== Logging tests ====================

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("trace")),
        )
        .with_test_writer()
        .try_init();
}

#[test]
fn test_lenient_schema_with_logging() {
    init_tracing();
    let schema = Schema::new("lenient", "1.0").section(
        SectionSpec::required("search").parameter(
            ParameterSpec::required("max_magnitude")
                .constraint(RangeConstraint::parse_lenient("below twenty")),
        ),
    );
    let mut tree = ConfigTree::new();
    tree.set_parameter("search", "max_magnitude", "99");
    // the discarded expression leaves a disabled constraint
    assert!(schema.validate(&tree).is_valid());
}
