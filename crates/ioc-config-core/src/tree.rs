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

//! In-memory configuration tree.
//!
//! A tree is an ordered list of named sections. Each section maps parameter
//! keys to raw string values. Section order follows insertion; parameter
//! order within a section is by key.

use crate::value::{parse_number, ValueType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Well-known section names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Object,
    Propagation,
    Asteroids,
    Time,
    Search,
    Database,
    Gaia,
    Observer,
    Output,
    Performance,
    Occultation,
    Filters,
    Unknown,
}

impl SectionKind {
    /// Classify a section by its name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "object" => Self::Object,
            "propag" | "propagation" => Self::Propagation,
            "asteroids" => Self::Asteroids,
            "time" => Self::Time,
            "search" => Self::Search,
            "database" => Self::Database,
            "gaia" => Self::Gaia,
            "observer" => Self::Observer,
            "output" => Self::Output,
            "performance" => Self::Performance,
            "occultation" => Self::Occultation,
            "filters" => Self::Filters,
            _ => Self::Unknown,
        }
    }

    /// Canonical lowercase name; `propag` sections render as `propagation`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Object => "object",
            Self::Propagation => "propagation",
            Self::Asteroids => "asteroids",
            Self::Time => "time",
            Self::Search => "search",
            Self::Database => "database",
            Self::Gaia => "gaia",
            Self::Observer => "observer",
            Self::Output => "output",
            Self::Performance => "performance",
            Self::Occultation => "occultation",
            Self::Filters => "filters",
            Self::Unknown => "unknown",
        }
    }
}

/// A single `key = value` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub key: String,
    /// Raw value text, never pre-converted.
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Parameter {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Inferred type of the raw value.
    pub fn value_type(&self) -> ValueType {
        ValueType::infer(&self.value)
    }

    /// Value as a float, if the whole value is numeric.
    pub fn as_f64(&self) -> Option<f64> {
        parse_number(&self.value)
    }

    /// Value as an integer. Floats with a fractional part are rejected.
    pub fn as_i64(&self) -> Option<i64> {
        let s = self.value.trim();
        if let Ok(n) = s.parse::<i64>() {
            return Some(n);
        }
        let f = parse_number(s)?;
        if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
            Some(f as i64)
        } else {
            None
        }
    }

    /// Value as a boolean.
    ///
    /// Accepts `.true.`, `true`, `1`, `yes` and `.false.`, `false`, `0`, `no`
    /// in any case.
    pub fn as_bool(&self) -> Option<bool> {
        let s = self.value.trim().to_ascii_lowercase();
        match s.as_str() {
            ".true." | "true" | "1" | "yes" => Some(true),
            ".false." | "false" | "0" | "no" => Some(false),
            _ => None,
        }
    }

    /// Value split into list items.
    ///
    /// Surrounding brackets are optional; items are trimmed and empty items
    /// dropped.
    pub fn as_list(&self) -> Vec<String> {
        split_list(&self.value)
    }
}

/// Split a raw list value such as `[a, b, c]` or `a,b,c`.
pub fn split_list(raw: &str) -> Vec<String> {
    let s = raw.trim();
    let inner = s
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .unwrap_or(s);
    inner
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// A named group of parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub name: String,
    pub kind: SectionKind,
    pub parameters: BTreeMap<String, Parameter>,
}

impl Section {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            kind: SectionKind::from_name(&name),
            name,
            parameters: BTreeMap::new(),
        }
    }

    /// Insert or overwrite a parameter, returning the previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        match self.parameters.get_mut(&key) {
            Some(existing) => Some(std::mem::replace(&mut existing.value, value)),
            None => {
                self.parameters
                    .insert(key.clone(), Parameter::new(key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&Parameter> {
        self.parameters.get(key)
    }

    /// Raw value of a parameter.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.parameters.get(key).map(|p| p.value.as_str())
    }

    pub fn has(&self, key: &str) -> bool {
        self.parameters.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Parameter> {
        self.parameters.remove(key)
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters.values()
    }
}

/// A whole configuration: sections in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigTree {
    sections: Vec<Section>,
}

impl ConfigTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    pub fn section_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.name == name)
    }

    pub fn has_section(&self, name: &str) -> bool {
        self.section(name).is_some()
    }

    /// Get a section, appending an empty one when it does not exist.
    pub fn add_section(&mut self, name: &str) -> &mut Section {
        let idx = match self.sections.iter().position(|s| s.name == name) {
            Some(idx) => idx,
            None => {
                self.sections.push(Section::new(name));
                self.sections.len() - 1
            }
        };
        &mut self.sections[idx]
    }

    /// Append or replace a whole section, keeping its position when replaced.
    pub fn insert_section(&mut self, section: Section) {
        match self.section_mut(&section.name) {
            Some(existing) => *existing = section,
            None => self.sections.push(section),
        }
    }

    /// Set a parameter value, creating the section when missing.
    pub fn set_parameter(
        &mut self,
        section: &str,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.add_section(section).set(key, value)
    }

    pub fn parameter(&self, section: &str, key: &str) -> Option<&Parameter> {
        self.section(section)?.get(key)
    }

    /// Raw value at `section.key`.
    pub fn value(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section)?.value(key)
    }

    /// First parameter named `key` in any section, scanning sections in order.
    pub fn find_parameter(&self, key: &str) -> Option<(&Section, &Parameter)> {
        self.sections
            .iter()
            .find_map(|s| s.get(key).map(|p| (s, p)))
    }

    pub fn remove_section(&mut self, name: &str) -> Option<Section> {
        let idx = self.sections.iter().position(|s| s.name == name)?;
        Some(self.sections.remove(idx))
    }

    pub fn remove_parameter(&mut self, section: &str, key: &str) -> Option<Parameter> {
        self.section_mut(section)?.remove(key)
    }

    pub fn section_names(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.name.as_str()).collect()
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Total number of parameters across all sections.
    pub fn parameter_count(&self) -> usize {
        self.sections.iter().map(Section::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn clear(&mut self) {
        self.sections.clear();
    }

    /// Iterate `(section, parameter)` pairs in tree order.
    pub fn iter_parameters(&self) -> impl Iterator<Item = (&Section, &Parameter)> {
        self.sections
            .iter()
            .flat_map(|s| s.iter().map(move |p| (s, p)))
    }
}
