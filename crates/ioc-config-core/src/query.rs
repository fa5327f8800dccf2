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

//! Filtering parameters and sections.

use crate::tree::{ConfigTree, Parameter, Section};
use crate::value::ValueType;
use regex::Regex;
use thiserror::Error;

/// Query errors.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The pattern is not a valid regular expression.
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// A parameter together with the name of its section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'a> {
    pub section: &'a str,
    pub parameter: &'a Parameter,
}

impl Match<'_> {
    pub fn key(&self) -> &str {
        &self.parameter.key
    }

    pub fn value(&self) -> &str {
        &self.parameter.value
    }
}

impl ConfigTree {
    /// All parameters for which `predicate` holds, in tree order.
    pub fn parameters_where<P>(&self, mut predicate: P) -> Vec<Match<'_>>
    where
        P: FnMut(&Parameter) -> bool,
    {
        self.iter_parameters()
            .filter(|&(_, p)| predicate(p))
            .map(|(s, p)| Match {
                section: &s.name,
                parameter: p,
            })
            .collect()
    }

    pub fn sections_where<P>(&self, mut predicate: P) -> Vec<&Section>
    where
        P: FnMut(&Section) -> bool,
    {
        self.sections().iter().filter(|&s| predicate(s)).collect()
    }

    /// First parameter for which `predicate` holds.
    pub fn find_where<P>(&self, mut predicate: P) -> Option<Match<'_>>
    where
        P: FnMut(&Parameter) -> bool,
    {
        self.iter_parameters()
            .find(|&(_, p)| predicate(p))
            .map(|(s, p)| Match {
                section: &s.name,
                parameter: p,
            })
    }

    /// Parameters whose key contains a match for `pattern`.
    pub fn parameters_by_key_pattern(&self, pattern: &str) -> Result<Vec<Match<'_>>, QueryError> {
        let re = Regex::new(pattern)?;
        Ok(self.parameters_where(|p| re.is_match(&p.key)))
    }

    /// Parameters whose value contains a match for `pattern`.
    pub fn parameters_by_value_pattern(
        &self,
        pattern: &str,
    ) -> Result<Vec<Match<'_>>, QueryError> {
        let re = Regex::new(pattern)?;
        Ok(self.parameters_where(|p| re.is_match(&p.value)))
    }

    pub fn parameters_by_type(&self, value_type: ValueType) -> Vec<Match<'_>> {
        self.parameters_where(|p| p.value_type() == value_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ConfigTree {
        let mut tree = ConfigTree::new();
        tree.set_parameter("object", "id", "17030");
        tree.set_parameter("object", "name", "Sierpinski");
        tree.set_parameter("time", "start_date", "2025-01-01");
        tree.set_parameter("time", "end_date", "2025-12-31");
        tree.set_parameter("search", "max_magnitude", "16.5");
        tree.set_parameter("search", "use_gaia", ".true.");
        tree
    }

    // ==================== Predicate tests ====================

    #[test]
    fn test_parameters_where() {
        let tree = sample();
        let found = tree.parameters_where(|p| p.key.ends_with("_date"));
        let keys: Vec<_> = found.iter().map(Match::key).collect();
        assert_eq!(keys, vec!["end_date", "start_date"]);
        assert!(found.iter().all(|m| m.section == "time"));
    }

    #[test]
    fn test_sections_where() {
        let tree = sample();
        let found = tree.sections_where(|s| s.len() == 2);
        assert_eq!(found.len(), 3);
        let none = tree.sections_where(|s| s.is_empty());
        assert!(none.is_empty());
    }

    #[test]
    fn test_find_where() {
        let tree = sample();
        let hit = tree.find_where(|p| p.value == "Sierpinski").unwrap();
        assert_eq!(hit.section, "object");
        assert_eq!(hit.key(), "name");
        assert!(tree.find_where(|p| p.value == "Ceres").is_none());
    }

    // ==================== Pattern tests ====================

    #[test]
    fn test_key_pattern() {
        let tree = sample();
        let found = tree.parameters_by_key_pattern("^(start|end)_").unwrap();
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_value_pattern() {
        let tree = sample();
        let found = tree.parameters_by_value_pattern(r"^\d{4}-\d{2}-\d{2}$").unwrap();
        assert_eq!(found.len(), 2);
        let found = tree.parameters_by_value_pattern("^Sier").unwrap();
        assert_eq!(found[0].value(), "Sierpinski");
    }

    #[test]
    fn test_invalid_pattern() {
        let tree = sample();
        assert!(matches!(
            tree.parameters_by_key_pattern("(unclosed"),
            Err(QueryError::InvalidPattern(_))
        ));
    }

    // ==================== Type tests ====================

    #[test]
    fn test_parameters_by_type() {
        let tree = sample();
        assert_eq!(tree.parameters_by_type(ValueType::Int).len(), 1);
        assert_eq!(tree.parameters_by_type(ValueType::Float).len(), 1);
        assert_eq!(tree.parameters_by_type(ValueType::Bool).len(), 1);
        assert_eq!(tree.parameters_by_type(ValueType::String).len(), 3);
        assert!(tree.parameters_by_type(ValueType::Array).is_empty());
    }
}
