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

//! Property-based tests for ioc-config-yaml using proptest.
//!
//! - string values survive YAML exactly when values are written untyped
//! - integer and float values keep their numeric value when typed
//! - section and key sets are preserved

use ioc_config_core::ConfigTree;
use ioc_config_yaml::{from_yaml, to_yaml, FromYamlConfig, ToYamlConfig};
use proptest::prelude::*;
use std::collections::BTreeMap;

fn arb_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,10}"
}

fn arb_tree() -> impl Strategy<Value = ConfigTree> {
    prop::collection::btree_map(
        arb_name(),
        prop::collection::btree_map(arb_name(), "[a-zA-Z0-9_ ,.]{0,30}", 1..5),
        1..4,
    )
    .prop_map(build_tree)
}

fn build_tree(sections: BTreeMap<String, BTreeMap<String, String>>) -> ConfigTree {
    let mut tree = ConfigTree::new();
    for (section, params) in sections {
        for (key, value) in params {
            tree.set_parameter(&section, key, value);
        }
    }
    tree
}

proptest! {
    #[test]
    fn prop_untyped_strings_roundtrip(tree in arb_tree()) {
        let yaml = to_yaml(&tree, &ToYamlConfig { typed_values: false }).unwrap();
        let back = from_yaml(&yaml, &FromYamlConfig::default()).unwrap();
        prop_assert_eq!(back, tree);
    }

    #[test]
    fn prop_integers_roundtrip(n in any::<i64>()) {
        let mut tree = ConfigTree::new();
        tree.set_parameter("values", "n", n.to_string());
        let yaml = to_yaml(&tree, &ToYamlConfig::default()).unwrap();
        let back = from_yaml(&yaml, &FromYamlConfig::default()).unwrap();
        let expected = n.to_string();
        prop_assert_eq!(back.value("values", "n"), Some(expected.as_str()));
    }

    #[test]
    fn prop_floats_keep_value(f in -1e10f64..1e10f64) {
        let mut tree = ConfigTree::new();
        tree.set_parameter("values", "f", f.to_string());
        let yaml = to_yaml(&tree, &ToYamlConfig::default()).unwrap();
        let back = from_yaml(&yaml, &FromYamlConfig::default()).unwrap();
        let parsed: f64 = back.value("values", "f").unwrap().parse().unwrap();
        prop_assert_eq!(parsed, f);
    }

    #[test]
    fn prop_booleans_normalize(b in any::<bool>(), fortran in any::<bool>()) {
        let raw = match (b, fortran) {
            (true, true) => ".true.",
            (false, true) => ".false.",
            (true, false) => "true",
            (false, false) => "false",
        };
        let mut tree = ConfigTree::new();
        tree.set_parameter("flags", "on", raw);
        let yaml = to_yaml(&tree, &ToYamlConfig::default()).unwrap();
        let back = from_yaml(&yaml, &FromYamlConfig::default()).unwrap();
        let expected = b.to_string();
        prop_assert_eq!(back.value("flags", "on"), Some(expected.as_str()));
    }
}
