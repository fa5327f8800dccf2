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

//! Declarative schema model.
//!
//! A [`Schema`] lists [`SectionSpec`]s, each listing [`ParameterSpec`]s.
//! Both lists keep insertion order and unique names: adding a spec whose
//! name is already present replaces the earlier one in place.
//!
//! ```
//! use ioc_config_core::{ParameterSpec, RangeConstraint, Schema, SectionSpec};
//!
//! let schema = Schema::new("Survey", "2.1")
//!     .section(
//!         SectionSpec::required("search")
//!             .parameter(ParameterSpec::required("max_magnitude")
//!                 .constraint(RangeConstraint::less_than(20.0))),
//!     );
//! assert!(schema.section_spec("search").is_some());
//! ```

use crate::constraint::{ConstraintError, RangeConstraint};
use crate::value::parse_number;
use serde::{Deserialize, Serialize};

/// How a value that is not a number is treated when a range constraint is
/// active and no allowed-value list applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NonNumericPolicy {
    /// The value fails the constraint.
    #[default]
    FailConstraint,
    /// The value is not range-checked and passes.
    SkipConstraint,
}

/// Rule for one parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSpec {
    pub key: String,
    pub required: bool,
    #[serde(default)]
    pub description: String,
    /// Documented default. Never applied by validation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(default)]
    pub constraint: RangeConstraint,
    /// When non-empty, membership is the whole check and `constraint` is ignored.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed_values: Vec<String>,
}

impl ParameterSpec {
    pub fn new(key: impl Into<String>, required: bool) -> Self {
        Self {
            key: key.into(),
            required,
            description: String::new(),
            default_value: None,
            constraint: RangeConstraint::none(),
            allowed_values: Vec::new(),
        }
    }

    pub fn required(key: impl Into<String>) -> Self {
        Self::new(key, true)
    }

    pub fn optional(key: impl Into<String>) -> Self {
        Self::new(key, false)
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn constraint(mut self, constraint: RangeConstraint) -> Self {
        self.constraint = constraint;
        self
    }

    /// Attach a constraint parsed from `expression`.
    pub fn expression(self, expression: &str) -> Result<Self, ConstraintError> {
        Ok(self.constraint(RangeConstraint::parse(expression)?))
    }

    /// Set the allowed values. Duplicates are dropped, first occurrence wins.
    pub fn allowed_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_values.clear();
        for value in values {
            let value = value.into();
            if !self.allowed_values.contains(&value) {
                self.allowed_values.push(value);
            }
        }
        self
    }

    /// Validity of a raw value under the default [`NonNumericPolicy`].
    pub fn is_valid(&self, raw: &str) -> bool {
        self.is_valid_with(raw, NonNumericPolicy::default())
    }

    /// Validity of a raw value.
    ///
    /// Allowed values are matched by exact string equality. Otherwise the
    /// value is parsed as a number and range-checked.
    pub fn is_valid_with(&self, raw: &str, policy: NonNumericPolicy) -> bool {
        if !self.allowed_values.is_empty() {
            return self.allowed_values.iter().any(|v| v == raw);
        }
        match parse_number(raw) {
            Some(n) => self.constraint.is_satisfied(n),
            None => match policy {
                NonNumericPolicy::FailConstraint => !self.constraint.is_enabled(),
                NonNumericPolicy::SkipConstraint => true,
            },
        }
    }

    /// Text used in validation failures.
    pub fn describe_rule(&self) -> String {
        self.constraint.describe().to_string()
    }
}

/// Rule for one section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawSectionSpec")]
pub struct SectionSpec {
    pub name: String,
    pub required: bool,
    pub description: String,
    parameters: Vec<ParameterSpec>,
}

#[derive(Deserialize)]
struct RawSectionSpec {
    name: String,
    required: bool,
    #[serde(default)]
    description: String,
    #[serde(default)]
    parameters: Vec<ParameterSpec>,
}

impl From<RawSectionSpec> for SectionSpec {
    fn from(raw: RawSectionSpec) -> Self {
        let mut spec = SectionSpec::new(raw.name, raw.required).description(raw.description);
        for p in raw.parameters {
            spec.add_parameter(p);
        }
        spec
    }
}

impl SectionSpec {
    pub fn new(name: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            required,
            description: String::new(),
            parameters: Vec::new(),
        }
    }

    pub fn required(name: impl Into<String>) -> Self {
        Self::new(name, true)
    }

    pub fn optional(name: impl Into<String>) -> Self {
        Self::new(name, false)
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn parameter(mut self, spec: ParameterSpec) -> Self {
        self.add_parameter(spec);
        self
    }

    /// Add a parameter spec, replacing any spec with the same key in place.
    pub fn add_parameter(&mut self, spec: ParameterSpec) {
        match self.parameters.iter_mut().find(|p| p.key == spec.key) {
            Some(existing) => *existing = spec,
            None => self.parameters.push(spec),
        }
    }

    pub fn parameter_spec(&self, key: &str) -> Option<&ParameterSpec> {
        self.parameters.iter().find(|p| p.key == key)
    }

    pub fn parameters(&self) -> &[ParameterSpec] {
        &self.parameters
    }

    pub fn required_parameters(&self) -> impl Iterator<Item = &ParameterSpec> {
        self.parameters.iter().filter(|p| p.required)
    }
}

/// A named, versioned set of section rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawSchema")]
pub struct Schema {
    pub name: String,
    pub version: String,
    sections: Vec<SectionSpec>,
}

#[derive(Deserialize)]
struct RawSchema {
    name: String,
    #[serde(default)]
    version: String,
    #[serde(default)]
    sections: Vec<SectionSpec>,
}

impl From<RawSchema> for Schema {
    fn from(raw: RawSchema) -> Self {
        let mut schema = Schema::new(raw.name, raw.version);
        for s in raw.sections {
            schema.add_section(s);
        }
        schema
    }
}

impl Schema {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            sections: Vec::new(),
        }
    }

    pub fn section(mut self, spec: SectionSpec) -> Self {
        self.add_section(spec);
        self
    }

    /// Add a section spec, replacing any spec with the same name in place.
    pub fn add_section(&mut self, spec: SectionSpec) {
        match self.sections.iter_mut().find(|s| s.name == spec.name) {
            Some(existing) => *existing = spec,
            None => self.sections.push(spec),
        }
    }

    pub fn section_spec(&self, name: &str) -> Option<&SectionSpec> {
        self.sections.iter().find(|s| s.name == name)
    }

    pub fn sections(&self) -> &[SectionSpec] {
        &self.sections
    }

    pub fn required_sections(&self) -> impl Iterator<Item = &SectionSpec> {
        self.sections.iter().filter(|s| s.required)
    }

    /// The conventional occultation-search schema.
    ///
    /// Each call builds a fresh value.
    pub fn default_schema() -> Self {
        Schema::new("IOoccultCalc Default", "1.0")
            .section(
                SectionSpec::required("object")
                    .description("Target object specification")
                    .parameter(ParameterSpec::required("id").description("Object identifier"))
                    .parameter(ParameterSpec::required("name").description("Object name")),
            )
            .section(
                SectionSpec::required("time")
                    .description("Time range specification")
                    .parameter(
                        ParameterSpec::required("start_date").description("Start date (YYYY-MM-DD)"),
                    )
                    .parameter(
                        ParameterSpec::required("end_date").description("End date (YYYY-MM-DD)"),
                    ),
            )
            .section(
                SectionSpec::required("search")
                    .description("Occultation search parameters")
                    .parameter(
                        ParameterSpec::optional("max_magnitude")
                            .description("Maximum magnitude")
                            .constraint(RangeConstraint::less_than(20.0)),
                    ),
            )
            .section(SectionSpec::optional("database").description("Database configuration"))
            .section(
                SectionSpec::optional("propag")
                    .description("Propagation settings")
                    .parameter(
                        ParameterSpec::optional("step_size")
                            .description("Integration step size")
                            .constraint(RangeConstraint::between_inclusive(0.001, 10.0)),
                    ),
            )
    }

    /// Quick structural check: the three sections every search needs,
    /// with no parameter rules.
    pub fn default_sections_only() -> Self {
        Schema::new("IOoccultCalc Sections", "1.0")
            .section(SectionSpec::required("object").description("Target object specification"))
            .section(SectionSpec::required("time").description("Time range specification"))
            .section(
                SectionSpec::required("search").description("Occultation search parameters"),
            )
    }
}
