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

//! Fluent construction of configuration trees.

use crate::error::{ConfigError, ConfigResult};
use crate::tree::ConfigTree;

/// Builds a [`ConfigTree`] one section at a time.
///
/// ```
/// use ioc_config_core::ConfigBuilder;
///
/// # fn main() -> Result<(), ioc_config_core::ConfigError> {
/// let tree = ConfigBuilder::new()
///     .section("object")
///     .param("id", "17030")?
///     .param("name", "Sierpinski")?
///     .section("time")
///     .param("start_date", "2025-01-01")?
///     .build();
/// assert_eq!(tree.value("object", "id"), Some("17030"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    tree: ConfigTree,
    current: Option<String>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a section (creating it if needed) and make it current.
    pub fn section(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.tree.add_section(&name);
        self.current = Some(name);
        self
    }

    /// Set a parameter in the current section.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> ConfigResult<Self> {
        let key = key.into();
        let Some(section) = self.current.as_deref() else {
            return Err(ConfigError::builder(format!(
                "cannot add parameter '{key}' without a current section"
            )));
        };
        self.tree.set_parameter(section, key, value);
        Ok(self)
    }

    /// Set several parameters in the current section.
    pub fn params<I, K, V>(mut self, entries: I) -> ConfigResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in entries {
            self = self.param(key, value)?;
        }
        Ok(self)
    }

    /// Close the current section.
    pub fn end_section(mut self) -> Self {
        self.current = None;
        self
    }

    /// Copy section `name` from `source` and make it current.
    pub fn section_from(mut self, source: &ConfigTree, name: &str) -> ConfigResult<Self> {
        let section = source
            .section(name)
            .ok_or_else(|| ConfigError::builder(format!("section '{name}' not found in source")))?;
        self.tree.insert_section(section.clone());
        self.current = Some(name.to_string());
        Ok(self)
    }

    pub fn current_section(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn section_count(&self) -> usize {
        self.tree.len()
    }

    pub fn section_names(&self) -> Vec<&str> {
        self.tree.section_names()
    }

    /// Drop everything built so far.
    pub fn clear(mut self) -> Self {
        self.tree.clear();
        self.current = None;
        self
    }

    pub fn build(self) -> ConfigTree {
        self.tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigErrorKind;

    #[test]
    fn test_build_sections() {
        let builder = ConfigBuilder::new()
            .section("object")
            .param("id", "17030")
            .unwrap()
            .section("search")
            .params([("max_magnitude", "16"), ("min_duration", "0.5")])
            .unwrap();
        assert_eq!(builder.section_count(), 2);
        assert_eq!(builder.section_names(), vec!["object", "search"]);
        assert_eq!(builder.current_section(), Some("search"));
        let tree = builder.build();
        assert_eq!(tree.value("search", "min_duration"), Some("0.5"));
    }

    #[test]
    fn test_param_without_section_fails() {
        let err = ConfigBuilder::new().param("id", "1").unwrap_err();
        assert_eq!(err.kind, ConfigErrorKind::Builder);
    }

    #[test]
    fn test_end_section_closes_current() {
        let result = ConfigBuilder::new()
            .section("object")
            .end_section()
            .param("id", "1");
        assert!(result.is_err());
    }

    #[test]
    fn test_reopen_section_appends() {
        let tree = ConfigBuilder::new()
            .section("object")
            .param("id", "1")
            .unwrap()
            .section("time")
            .section("object")
            .param("name", "x")
            .unwrap()
            .build();
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.section("object").map(|s| s.len()), Some(2));
    }

    #[test]
    fn test_section_from() {
        let mut source = ConfigTree::new();
        source.set_parameter("gaia", "catalog", "DR3");
        let tree = ConfigBuilder::new()
            .section_from(&source, "gaia")
            .unwrap()
            .param("radius", "0.1")
            .unwrap()
            .build();
        assert_eq!(tree.value("gaia", "catalog"), Some("DR3"));
        assert_eq!(tree.value("gaia", "radius"), Some("0.1"));

        assert!(ConfigBuilder::new().section_from(&source, "missing").is_err());
    }

    #[test]
    fn test_clear() {
        let builder = ConfigBuilder::new().section("a").clear();
        assert_eq!(builder.section_count(), 0);
        assert_eq!(builder.current_section(), None);
    }
}
