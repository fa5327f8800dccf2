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

//! Error types for configuration operations.

use std::fmt;
use thiserror::Error;

/// The kind of error that occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigErrorKind {
    /// Malformed constraint expression.
    Constraint,
    /// Schema construction or schema document problem.
    Schema,
    /// Invalid or unresolvable path.
    Path,
    /// Builder used out of order.
    Builder,
    /// Merge could not be completed.
    Merge,
    /// Versioning disabled or unknown version.
    Version,
    /// Error during format conversion (JSON, YAML, XML, etc.).
    Conversion,
}

impl fmt::Display for ConfigErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constraint => write!(f, "ConstraintError"),
            Self::Schema => write!(f, "SchemaError"),
            Self::Path => write!(f, "PathError"),
            Self::Builder => write!(f, "BuilderError"),
            Self::Merge => write!(f, "MergeError"),
            Self::Version => write!(f, "VersionError"),
            Self::Conversion => write!(f, "ConversionError"),
        }
    }
}

/// An error raised by a configuration operation.
#[derive(Debug, Clone, Error)]
#[error("{kind}: {message}")]
pub struct ConfigError {
    /// The kind of error.
    pub kind: ConfigErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// Additional context (e.g., "while merging batch item 3").
    pub context: Option<String>,
}

impl ConfigError {
    /// Create a new error.
    pub fn new(kind: ConfigErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: None,
        }
    }

    /// Add context information.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    // Convenience constructors for each error kind
    pub fn constraint(message: impl Into<String>) -> Self {
        Self::new(ConfigErrorKind::Constraint, message)
    }

    pub fn schema(message: impl Into<String>) -> Self {
        Self::new(ConfigErrorKind::Schema, message)
    }

    pub fn path(message: impl Into<String>) -> Self {
        Self::new(ConfigErrorKind::Path, message)
    }

    pub fn builder(message: impl Into<String>) -> Self {
        Self::new(ConfigErrorKind::Builder, message)
    }

    pub fn merge(message: impl Into<String>) -> Self {
        Self::new(ConfigErrorKind::Merge, message)
    }

    pub fn version(message: impl Into<String>) -> Self {
        Self::new(ConfigErrorKind::Version, message)
    }

    pub fn conversion(message: impl Into<String>) -> Self {
        Self::new(ConfigErrorKind::Conversion, message)
    }
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
