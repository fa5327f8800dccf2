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

//! Snapshot history for a configuration tree.

use crate::error::{ConfigError, ConfigResult};
use crate::tree::ConfigTree;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// One recorded snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VersionEntry {
    /// 1-based version number.
    pub version: u32,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing)]
    pub snapshot: ConfigTree,
}

impl VersionEntry {
    /// Timestamp as `YYYY-MM-DDTHH:MM:SSZ`.
    pub fn timestamp_rfc3339(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

/// A configuration tree with optional version history.
///
/// Versioning starts disabled. While disabled, every history operation
/// fails with [`ConfigErrorKind::Version`](crate::ConfigErrorKind::Version).
#[derive(Debug, Clone, Default)]
pub struct VersionedConfig {
    tree: ConfigTree,
    history: Vec<VersionEntry>,
    current: u32,
    enabled: bool,
}

impl VersionedConfig {
    pub fn new(tree: ConfigTree) -> Self {
        Self {
            tree,
            ..Self::default()
        }
    }

    pub fn tree(&self) -> &ConfigTree {
        &self.tree
    }

    /// Mutable access to the working tree. Changes are not recorded until
    /// [`create_version`](Self::create_version).
    pub fn tree_mut(&mut self) -> &mut ConfigTree {
        &mut self.tree
    }

    pub fn into_inner(self) -> ConfigTree {
        self.tree
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Turn versioning on and record the working tree as version 1.
    pub fn enable_versioning(&mut self, description: impl Into<String>) -> ConfigResult<u32> {
        if self.enabled {
            return Err(ConfigError::version("versioning is already enabled"));
        }
        self.enabled = true;
        self.history.clear();
        self.create_version(description)
    }

    /// Turn versioning off and drop the history.
    pub fn disable_versioning(&mut self) -> ConfigResult<()> {
        self.ensure_enabled()?;
        self.enabled = false;
        self.history.clear();
        self.current = 0;
        Ok(())
    }

    /// Snapshot the working tree as a new version.
    pub fn create_version(&mut self, description: impl Into<String>) -> ConfigResult<u32> {
        self.ensure_enabled()?;
        let version = self.history.len() as u32 + 1;
        self.history.push(VersionEntry {
            version,
            description: description.into(),
            timestamp: Utc::now(),
            snapshot: self.tree.clone(),
        });
        self.current = version;
        tracing::debug!(version, "configuration version created");
        Ok(version)
    }

    /// Number of recorded versions; 0 while disabled.
    pub fn version_count(&self) -> usize {
        self.history.len()
    }

    /// Version the working tree was last created from or rolled back to; 0 while disabled.
    pub fn current_version(&self) -> u32 {
        self.current
    }

    pub fn history(&self) -> &[VersionEntry] {
        &self.history
    }

    pub fn version(&self, version: u32) -> Option<&VersionEntry> {
        let idx = usize::try_from(version).ok()?.checked_sub(1)?;
        self.history.get(idx)
    }

    pub fn description(&self, version: u32) -> Option<&str> {
        self.version(version).map(|v| v.description.as_str())
    }

    /// Restore the working tree from `version`.
    pub fn rollback(&mut self, version: u32) -> ConfigResult<()> {
        self.ensure_enabled()?;
        let snapshot = self
            .version(version)
            .map(|v| v.snapshot.clone())
            .ok_or_else(|| ConfigError::version(format!("unknown version {version}")))?;
        self.tree = snapshot;
        self.current = version;
        tracing::debug!(version, "configuration rolled back");
        Ok(())
    }

    /// Roll back one version from the current one.
    pub fn rollback_previous(&mut self) -> ConfigResult<()> {
        self.ensure_enabled()?;
        if self.current <= 1 {
            return Err(ConfigError::version("no previous version"));
        }
        self.rollback(self.current - 1)
    }

    /// Collapse the history into a single version holding the working tree.
    pub fn clear_history(&mut self) -> ConfigResult<()> {
        self.ensure_enabled()?;
        let description = self
            .version(self.current)
            .map(|v| v.description.clone())
            .unwrap_or_default();
        self.history.clear();
        self.create_version(description).map(|_| ())
    }

    fn ensure_enabled(&self) -> ConfigResult<()> {
        if self.enabled {
            Ok(())
        } else {
            Err(ConfigError::version("versioning is not enabled"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigErrorKind;

    fn versioned(value: &str) -> VersionedConfig {
        let mut tree = ConfigTree::new();
        tree.set_parameter("s", "p", value);
        VersionedConfig::new(tree)
    }

    // ==================== Lifecycle tests ====================

    #[test]
    fn test_enable_disable() {
        let mut v = versioned("v");
        assert!(!v.is_enabled());
        assert_eq!(v.enable_versioning("Init").unwrap(), 1);
        assert!(v.is_enabled());
        assert!(v.enable_versioning("again").is_err());
        v.disable_versioning().unwrap();
        assert_eq!(v.version_count(), 0);
    }

    #[test]
    fn test_create_versions() {
        let mut v = versioned("v");
        v.enable_versioning("V1").unwrap();
        v.create_version("V2").unwrap();
        v.create_version("V3").unwrap();
        assert_eq!(v.version_count(), 3);
        assert_eq!(v.current_version(), 3);
        let numbers: Vec<_> = v.history().iter().map(|e| e.version).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_descriptions_and_timestamps() {
        let mut v = versioned("v");
        v.enable_versioning("Desc1").unwrap();
        v.create_version("Desc2").unwrap();
        assert_eq!(v.description(1), Some("Desc1"));
        assert_eq!(v.description(2), Some("Desc2"));
        assert_eq!(v.description(0), None);
        let ts = v.version(1).unwrap().timestamp_rfc3339();
        assert!(ts.contains('T'));
        assert!(ts.ends_with('Z'));
    }

    // ==================== Rollback tests ====================

    #[test]
    fn test_rollback_restores_snapshot() {
        let mut v = versioned("orig");
        v.enable_versioning("V1").unwrap();
        v.create_version("V2").unwrap();
        v.tree_mut().set_parameter("s", "p", "changed");
        v.rollback(1).unwrap();
        assert_eq!(v.tree().value("s", "p"), Some("orig"));
        assert_eq!(v.current_version(), 1);
    }

    #[test]
    fn test_snapshots_are_independent() {
        let mut v = versioned("a");
        v.enable_versioning("V1").unwrap();
        v.tree_mut().set_parameter("s", "p", "b");
        v.create_version("V2").unwrap();
        v.tree_mut().set_parameter("s", "p", "c");
        assert_eq!(v.version(1).unwrap().snapshot.value("s", "p"), Some("a"));
        assert_eq!(v.version(2).unwrap().snapshot.value("s", "p"), Some("b"));
    }

    #[test]
    fn test_rollback_previous() {
        let mut v = versioned("v");
        v.enable_versioning("V1").unwrap();
        v.create_version("V2").unwrap();
        v.create_version("V3").unwrap();
        v.rollback_previous().unwrap();
        assert_eq!(v.current_version(), 2);
        v.rollback_previous().unwrap();
        assert_eq!(v.current_version(), 1);
        assert!(v.rollback_previous().is_err());
    }

    #[test]
    fn test_rollback_unknown_version() {
        let mut v = versioned("v");
        v.enable_versioning("V1").unwrap();
        let err = v.rollback(99).unwrap_err();
        assert_eq!(err.kind, ConfigErrorKind::Version);
    }

    // ==================== History tests ====================

    #[test]
    fn test_clear_history() {
        let mut v = versioned("v");
        v.enable_versioning("V1").unwrap();
        v.create_version("V2").unwrap();
        v.create_version("V3").unwrap();
        v.clear_history().unwrap();
        assert_eq!(v.version_count(), 1);
        assert_eq!(v.current_version(), 1);
        assert_eq!(v.description(1), Some("V3"));
    }

    #[test]
    fn test_disabled_operations_fail() {
        let mut v = versioned("v");
        assert!(v.create_version("fail").is_err());
        assert!(v.rollback(1).is_err());
        assert!(v.clear_history().is_err());
        assert_eq!(v.version_count(), 0);
        assert_eq!(v.current_version(), 0);
    }
}
