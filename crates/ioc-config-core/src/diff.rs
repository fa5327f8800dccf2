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

//! Parameter-level comparison of two configuration trees.

use crate::tree::{ConfigTree, Section};
use crate::value::ValueType;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Write as _;

/// Kind of change for one parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffKind {
    Added,
    Removed,
    Modified,
    Unchanged,
}

impl DiffKind {
    fn marker(self) -> char {
        match self {
            Self::Added => '+',
            Self::Removed => '-',
            Self::Modified => '~',
            Self::Unchanged => '=',
        }
    }

    fn heading(self) -> &'static str {
        match self {
            Self::Added => "Added",
            Self::Removed => "Removed",
            Self::Modified => "Modified",
            Self::Unchanged => "Unchanged",
        }
    }
}

/// One compared parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffEntry {
    pub kind: DiffKind,
    pub section: String,
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_type: Option<ValueType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_type: Option<ValueType>,
}

impl DiffEntry {
    fn new(kind: DiffKind, section: &str, key: &str, old: Option<&str>, new: Option<&str>) -> Self {
        Self {
            kind,
            section: section.to_string(),
            key: key.to_string(),
            old_value: old.map(str::to_string),
            new_value: new.map(str::to_string),
            old_type: old.map(ValueType::infer),
            new_type: new.map(ValueType::infer),
        }
    }

    /// Whether the entry is a change.
    pub fn is_change(&self) -> bool {
        self.kind != DiffKind::Unchanged
    }
}

impl fmt::Display for DiffEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let old = self.old_value.as_deref().unwrap_or_default();
        let new = self.new_value.as_deref().unwrap_or_default();
        let marker = self.kind.marker();
        match self.kind {
            DiffKind::Added => write!(f, "[{marker}] {}.{} = {new}", self.section, self.key),
            DiffKind::Removed => write!(f, "[{marker}] {}.{} (was {old})", self.section, self.key),
            DiffKind::Modified => {
                write!(f, "[{marker}] {}.{}: {old} → {new}", self.section, self.key)
            }
            DiffKind::Unchanged => write!(f, "[{marker}] {}.{}", self.section, self.key),
        }
    }
}

/// Entry counts per kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffSummary {
    pub added: usize,
    pub removed: usize,
    pub modified: usize,
    pub unchanged: usize,
}

impl DiffSummary {
    pub fn from_entries(entries: &[DiffEntry]) -> Self {
        let mut summary = Self::default();
        for entry in entries {
            match entry.kind {
                DiffKind::Added => summary.added += 1,
                DiffKind::Removed => summary.removed += 1,
                DiffKind::Modified => summary.modified += 1,
                DiffKind::Unchanged => summary.unchanged += 1,
            }
        }
        summary
    }

    pub fn changes(&self) -> usize {
        self.added + self.removed + self.modified
    }
}

impl fmt::Display for DiffSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} added, {} removed, {} modified, {} unchanged",
            self.added, self.removed, self.modified, self.unchanged
        )
    }
}

fn diff_section(old: Option<&Section>, new: Option<&Section>, name: &str, out: &mut Vec<DiffEntry>) {
    let mut keys: Vec<&str> = old
        .into_iter()
        .chain(new)
        .flat_map(|s| s.parameters.keys().map(String::as_str))
        .collect();
    keys.sort_unstable();
    keys.dedup();

    for key in keys {
        let before = old.and_then(|s| s.value(key));
        let after = new.and_then(|s| s.value(key));
        let kind = match (before, after) {
            (None, Some(_)) => DiffKind::Added,
            (Some(_), None) => DiffKind::Removed,
            (Some(a), Some(b)) if a == b => DiffKind::Unchanged,
            (Some(_), Some(_)) => DiffKind::Modified,
            (None, None) => continue,
        };
        out.push(DiffEntry::new(kind, name, key, before, after));
    }
}

/// Compare `old` with `new`.
///
/// Sections of `old` come first in their order, then sections only in
/// `new`. Keys within a section are sorted.
pub fn diff(old: &ConfigTree, new: &ConfigTree) -> Vec<DiffEntry> {
    let mut entries = Vec::new();
    for section in old.sections() {
        diff_section(Some(section), new.section(&section.name), &section.name, &mut entries);
    }
    for section in new.sections() {
        if !old.has_section(&section.name) {
            diff_section(None, Some(section), &section.name, &mut entries);
        }
    }
    entries
}

/// Human-readable report grouped by change kind, ending with a summary line.
pub fn diff_report(old: &ConfigTree, new: &ConfigTree, only_changes: bool) -> String {
    let entries = diff(old, new);
    let summary = DiffSummary::from_entries(&entries);
    let mut out = String::from("Configuration Diff\n");

    let mut kinds = vec![DiffKind::Added, DiffKind::Removed, DiffKind::Modified];
    if !only_changes {
        kinds.push(DiffKind::Unchanged);
    }
    for kind in kinds {
        let group: Vec<_> = entries.iter().filter(|e| e.kind == kind).collect();
        if group.is_empty() {
            continue;
        }
        let _ = writeln!(out, "\n{} ({}):", kind.heading(), group.len());
        for entry in group {
            let _ = writeln!(out, "  {entry}");
        }
    }
    let _ = writeln!(out, "\nSummary: {summary}");
    out
}

impl ConfigTree {
    /// Entries describing how `other` differs from `self`.
    pub fn diff(&self, other: &ConfigTree) -> Vec<DiffEntry> {
        diff(self, other)
    }

    pub fn diff_report(&self, other: &ConfigTree, only_changes: bool) -> String {
        diff_report(self, other, only_changes)
    }
}
