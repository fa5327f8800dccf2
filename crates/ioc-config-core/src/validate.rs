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

//! Schema validation.
//!
//! Only required entries are checked. An optional section is skipped
//! entirely, even when present with bad values, and an optional parameter
//! inside a required section is never range-checked. Violations are
//! collected in one pass, sections in schema order and parameters in
//! section-spec order.

use crate::schema::{NonNumericPolicy, Schema};
use crate::tree::ConfigTree;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use thiserror::Error;

/// Read-only access to a section/parameter tree.
pub trait ConfigView {
    fn has_section(&self, section: &str) -> bool;

    fn lookup(&self, section: &str, key: &str) -> Option<&str>;
}

impl ConfigView for ConfigTree {
    fn has_section(&self, section: &str) -> bool {
        ConfigTree::has_section(self, section)
    }

    fn lookup(&self, section: &str, key: &str) -> Option<&str> {
        self.value(section, key)
    }
}

impl ConfigView for BTreeMap<String, BTreeMap<String, String>> {
    fn has_section(&self, section: &str) -> bool {
        self.contains_key(section)
    }

    fn lookup(&self, section: &str, key: &str) -> Option<&str> {
        self.get(section)?.get(key).map(String::as_str)
    }
}

impl ConfigView for HashMap<String, HashMap<String, String>> {
    fn has_section(&self, section: &str) -> bool {
        self.contains_key(section)
    }

    fn lookup(&self, section: &str, key: &str) -> Option<&str> {
        self.get(section)?.get(key).map(String::as_str)
    }
}

/// One schema violation. `Display` renders the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaViolation {
    #[error("Missing required section: {section}")]
    MissingSection { section: String },

    #[error("Missing required parameter '{key}' in section '{section}'")]
    MissingParameter { section: String, key: String },

    #[error("Parameter '{key}' in section '{section}' failed validation: {rule}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        rule: String,
    },
}

impl SchemaViolation {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingSection { .. } => "missing_section",
            Self::MissingParameter { .. } => "missing_parameter",
            Self::InvalidValue { .. } => "invalid_value",
        }
    }

    pub fn section(&self) -> &str {
        match self {
            Self::MissingSection { section }
            | Self::MissingParameter { section, .. }
            | Self::InvalidValue { section, .. } => section,
        }
    }
}

/// Validation behaviour switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Treatment of non-numeric values under an active range constraint.
    pub non_numeric: NonNumericPolicy,
}

impl ValidationOptions {
    pub fn non_numeric(mut self, policy: NonNumericPolicy) -> Self {
        self.non_numeric = policy;
        self
    }
}

/// Outcome of a validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    violations: Vec<SchemaViolation>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[SchemaViolation] {
        &self.violations
    }

    /// Messages in discovery order.
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }

    /// Verdict plus messages.
    pub fn into_parts(self) -> (bool, Vec<String>) {
        let messages = self.messages();
        (self.violations.is_empty(), messages)
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.violations.is_empty() {
            return write!(f, "valid");
        }
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

/// Validate with default options.
pub fn validate<V: ConfigView + ?Sized>(schema: &Schema, config: &V) -> ValidationReport {
    validate_with(schema, config, &ValidationOptions::default())
}

/// Validate a configuration against a schema.
pub fn validate_with<V: ConfigView + ?Sized>(
    schema: &Schema,
    config: &V,
    options: &ValidationOptions,
) -> ValidationReport {
    let mut violations = Vec::new();

    for section in schema.sections() {
        if !section.required {
            tracing::trace!(section = %section.name, "skipping optional section");
            continue;
        }
        if !config.has_section(&section.name) {
            violations.push(SchemaViolation::MissingSection {
                section: section.name.clone(),
            });
            continue;
        }
        for spec in section.required_parameters() {
            match config.lookup(&section.name, &spec.key) {
                None => violations.push(SchemaViolation::MissingParameter {
                    section: section.name.clone(),
                    key: spec.key.clone(),
                }),
                Some(value) if !spec.is_valid_with(value, options.non_numeric) => {
                    violations.push(SchemaViolation::InvalidValue {
                        section: section.name.clone(),
                        key: spec.key.clone(),
                        value: value.to_string(),
                        rule: spec.describe_rule(),
                    })
                }
                Some(_) => {}
            }
        }
    }

    tracing::debug!(
        schema = %schema.name,
        violations = violations.len(),
        "schema validation finished"
    );
    ValidationReport { violations }
}

impl Schema {
    /// Validate a configuration with default options.
    pub fn validate<V: ConfigView + ?Sized>(&self, config: &V) -> ValidationReport {
        validate(self, config)
    }
}
