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

//! Applying one operation to many named configurations.
//!
//! Items are `(name, tree)` pairs. A failing item is counted and recorded;
//! it never stops the batch.

use crate::merge::{MergeStats, MergeStrategy};
use crate::schema::Schema;
use crate::tree::ConfigTree;
use crate::validate::validate;
use std::fmt;

/// Outcome counters for a batch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchStats {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
    /// `(item name, reason)` for each failure.
    pub errors: Vec<(String, String)>,
}

impl BatchStats {
    fn record<E: fmt::Display>(&mut self, name: &str, outcome: Result<(), E>) {
        self.total += 1;
        match outcome {
            Ok(()) => self.successful += 1,
            Err(err) => {
                self.failed += 1;
                self.errors.push((name.to_string(), err.to_string()));
            }
        }
    }

    /// Share of successful items in percent; 0 for an empty batch.
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.successful as f64 * 100.0 / self.total as f64
    }
}

impl fmt::Display for BatchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total: {} | Success: {} | Failed: {} | Rate: {:.1}%",
            self.total,
            self.successful,
            self.failed,
            self.success_rate()
        )
    }
}

/// Validate every item against `schema`.
///
/// A failure's reason is the validation report, one message per line.
pub fn validate_all<'a, I>(schema: &Schema, items: I) -> BatchStats
where
    I: IntoIterator<Item = (&'a str, &'a ConfigTree)>,
{
    let mut stats = BatchStats::default();
    for (name, tree) in items {
        let report = validate(schema, tree);
        let outcome = if report.is_valid() { Ok(()) } else { Err(report) };
        stats.record(name, outcome);
    }
    tracing::debug!(%stats, "batch validation finished");
    stats
}

/// Fold every item into one tree, in order.
pub fn merge_all<'a, I>(items: I, strategy: MergeStrategy) -> (ConfigTree, BatchStats, MergeStats)
where
    I: IntoIterator<Item = (&'a str, &'a ConfigTree)>,
{
    let mut merged = ConfigTree::new();
    let mut stats = BatchStats::default();
    let mut totals = MergeStats::default();
    for (name, tree) in items {
        let step = merged.merge(tree, strategy);
        totals.sections_added += step.sections_added;
        totals.sections_updated += step.sections_updated;
        totals.parameters_added += step.parameters_added;
        totals.parameters_modified += step.parameters_modified;
        totals.conflicts += step.conflicts;
        totals.conflict_keys.extend(step.conflict_keys);
        stats.record::<String>(name, Ok(()));
    }
    (merged, stats, totals)
}

/// Run a fallible conversion over every item, keeping the successful outputs.
pub fn convert_all<'a, I, F, T, E>(items: I, mut convert: F) -> (Vec<(String, T)>, BatchStats)
where
    I: IntoIterator<Item = (&'a str, &'a ConfigTree)>,
    F: FnMut(&ConfigTree) -> Result<T, E>,
    E: fmt::Display,
{
    let mut outputs = Vec::new();
    let mut stats = BatchStats::default();
    for (name, tree) in items {
        match convert(tree) {
            Ok(out) => {
                outputs.push((name.to_string(), out));
                stats.record::<E>(name, Ok(()));
            }
            Err(err) => stats.record(name, Err(err)),
        }
    }
    tracing::debug!(%stats, "batch conversion finished");
    (outputs, stats)
}
