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

//! Shared test fixtures and utilities for IOC Config format converters.
//!
//! ```rust
//! use ioc_config_test::{fixtures, entries};
//!
//! let tree = fixtures::occultation_search();
//! assert_eq!(entries(&tree).len(), tree.parameter_count());
//! ```

use ioc_config_core::ConfigTree;
use std::collections::BTreeMap;

/// Type alias for a list of fixture functions (name, generator).
pub type FixtureList = Vec<(&'static str, fn() -> ConfigTree)>;

/// Canonical configuration trees.
pub mod fixtures;

pub use fixtures::all;

/// Flatten a tree into `(section, key) -> value`, ignoring section order.
///
/// Converters that cannot keep section order (TOML tables, YAML mappings
/// from some writers) are compared through this.
pub fn entries(tree: &ConfigTree) -> BTreeMap<(String, String), String> {
    tree.iter_parameters()
        .map(|(s, p)| ((s.name.clone(), p.key.clone()), p.value.clone()))
        .collect()
}

/// Section names in tree order.
pub fn section_names(tree: &ConfigTree) -> Vec<String> {
    tree.sections().iter().map(|s| s.name.clone()).collect()
}
