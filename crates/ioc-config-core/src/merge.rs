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

//! Merging one configuration tree into another.

use crate::tree::{split_list, ConfigTree};
use crate::value::ValueType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How incoming values combine with existing ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeStrategy {
    /// Incoming values overwrite existing ones.
    #[default]
    Replace,
    /// Existing values win; only new keys and sections are added.
    Append,
    /// Like `Replace`, except two arrays are concatenated without duplicates.
    DeepMerge,
}

/// A key present on both sides with different values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeConflict {
    pub section: String,
    pub key: String,
    pub existing_value: String,
    pub incoming_value: String,
}

/// Counters for one merge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeStats {
    pub sections_added: usize,
    pub sections_updated: usize,
    pub parameters_added: usize,
    pub parameters_modified: usize,
    pub conflicts: usize,
    /// `section.key` of each conflict, in discovery order.
    pub conflict_keys: Vec<String>,
}

impl fmt::Display for MergeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sections: +{} modified {} | Parameters: +{} modified {} | Conflicts: {}",
            self.sections_added,
            self.sections_updated,
            self.parameters_added,
            self.parameters_modified,
            self.conflicts
        )
    }
}

impl ConfigTree {
    /// Merge `other` into `self` with a built-in strategy.
    pub fn merge(&mut self, other: &ConfigTree, strategy: MergeStrategy) -> MergeStats {
        self.merge_with_resolver(other, |conflict| match strategy {
            MergeStrategy::Replace => Some(conflict.incoming_value.clone()),
            MergeStrategy::Append => None,
            MergeStrategy::DeepMerge => Some(deep_merge_value(
                &conflict.existing_value,
                &conflict.incoming_value,
            )),
        })
    }

    /// Merge `other` into `self`, asking `resolver` for every conflict.
    ///
    /// The resolver returns the value to keep, or `None` to leave the
    /// existing value untouched.
    pub fn merge_with_resolver<F>(&mut self, other: &ConfigTree, mut resolver: F) -> MergeStats
    where
        F: FnMut(&MergeConflict) -> Option<String>,
    {
        let mut stats = MergeStats::default();

        for incoming in other.sections() {
            if !self.has_section(&incoming.name) {
                stats.sections_added += 1;
                stats.parameters_added += incoming.len();
                self.insert_section(incoming.clone());
                continue;
            }

            let section = self.add_section(&incoming.name);
            let mut touched = false;
            for param in incoming.iter() {
                let existing = match section.value(&param.key) {
                    None => {
                        section.parameters.insert(param.key.clone(), param.clone());
                        stats.parameters_added += 1;
                        touched = true;
                        continue;
                    }
                    Some(existing) if existing == param.value => continue,
                    Some(existing) => existing.to_string(),
                };

                let conflict = MergeConflict {
                    section: incoming.name.clone(),
                    key: param.key.clone(),
                    existing_value: existing,
                    incoming_value: param.value.clone(),
                };
                stats.conflicts += 1;
                stats
                    .conflict_keys
                    .push(format!("{}.{}", conflict.section, conflict.key));

                match resolver(&conflict) {
                    Some(resolved) if resolved != conflict.existing_value => {
                        tracing::trace!(
                            section = %conflict.section,
                            key = %conflict.key,
                            "conflict resolved to new value"
                        );
                        section.set(param.key.clone(), resolved);
                        stats.parameters_modified += 1;
                        touched = true;
                    }
                    _ => {}
                }
            }
            if touched {
                stats.sections_updated += 1;
            }
        }

        tracing::debug!(%stats, "merge finished");
        stats
    }
}

/// Concatenate two arrays, dropping incoming items already present.
/// Non-array values resolve to the incoming value.
fn deep_merge_value(existing: &str, incoming: &str) -> String {
    if ValueType::infer(existing) != ValueType::Array || ValueType::infer(incoming) != ValueType::Array
    {
        return incoming.to_string();
    }
    let mut items = split_list(existing);
    for item in split_list(incoming) {
        if !items.contains(&item) {
            items.push(item);
        }
    }
    format!("[{}]", items.join(", "))
}
