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

//! Canonical configuration trees.
//!
//! - **occultation_search**: a complete configuration for the default schema
//! - **typed_values**: one parameter of every inferred type
//! - **special_strings**: values that need quoting or escaping in some formats
//! - **single_section** / **empty**: edge cases

use crate::FixtureList;
use ioc_config_core::ConfigTree;

/// Returns all fixture functions for iteration.
pub fn all() -> FixtureList {
    vec![
        ("occultation_search", occultation_search),
        ("typed_values", typed_values),
        ("special_strings", special_strings),
        ("single_section", single_section),
        ("empty", empty),
    ]
}

/// Complete configuration accepted by the default schema.
pub fn occultation_search() -> ConfigTree {
    let mut tree = ConfigTree::new();
    tree.set_parameter("object", "id", "17030");
    tree.set_parameter("object", "name", "Sierpinski");
    tree.set_parameter("time", "start_date", "2025-01-01");
    tree.set_parameter("time", "end_date", "2025-12-31");
    tree.set_parameter("search", "max_magnitude", "16.5");
    tree.set_parameter("search", "min_duration", "0.5");
    tree.set_parameter("propag", "step_size", "0.05");
    tree.set_parameter("propag", "integrator", "RKF78");
    tree
}

/// One parameter per inferred type.
pub fn typed_values() -> ConfigTree {
    let mut tree = ConfigTree::new();
    tree.set_parameter("values", "count", "42");
    tree.set_parameter("values", "ratio", "0.25");
    tree.set_parameter("values", "enabled", "true");
    tree.set_parameter("values", "bands", "[V, R, I]");
    tree.set_parameter("values", "label", "Main belt");
    tree
}

/// Values with separators, markup characters and non-ASCII text.
pub fn special_strings() -> ConfigTree {
    let mut tree = ConfigTree::new();
    tree.set_parameter("observer", "site", "Col, \"La Silla\"");
    tree.set_parameter("observer", "note", "a < b & c > d");
    tree.set_parameter("observer", "name", "Ondřejov");
    tree.set_parameter("observer", "path", "data;archive");
    tree
}

pub fn single_section() -> ConfigTree {
    let mut tree = ConfigTree::new();
    tree.set_parameter("gaia", "catalog", "DR3");
    tree
}

pub fn empty() -> ConfigTree {
    ConfigTree::new()
}
