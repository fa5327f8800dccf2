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

//! Error context helpers.
//!
//! Every crate in the workspace has its own error type. This module folds
//! them into [`ConfigError`] and lets callers annotate failures as they
//! propagate.
//!
//! # Examples
//!
//! ```rust
//! use ioc_config::{ConfigResultExt, RangeConstraint};
//!
//! let err = RangeConstraint::parse("between 1 and 5")
//!     .context("in parameter 'object.diameter'")
//!     .unwrap_err();
//! assert_eq!(err.context.as_deref(), Some("in parameter 'object.diameter'"));
//! ```
//!
//! Context chains through several layers, newest first:
//!
//! ```rust
//! use ioc_config::{ConfigError, ConfigResultExt};
//!
//! let result: Result<(), ConfigError> = Err(ConfigError::merge("conflict on 'search.max_magnitude'"));
//! let err = result
//!     .context("merging site overrides")
//!     .with_context(|| format!("loading {}", "observatory.yaml"))
//!     .unwrap_err();
//! assert_eq!(
//!     err.context.as_deref(),
//!     Some("loading observatory.yaml; merging site overrides")
//! );
//! ```

use ioc_config_core::{ConfigError, ConfigErrorKind, ConstraintError, QueryError};
use std::fmt;

/// Conversion of a crate error into [`ConfigError`].
///
/// Parse and write failures of the format crates become
/// [`ConfigErrorKind::Conversion`]; constraint and query failures keep
/// their own kinds.
pub trait IntoConfigError {
    fn into_config_error(self) -> ConfigError;
}

impl IntoConfigError for ConfigError {
    fn into_config_error(self) -> ConfigError {
        self
    }
}

impl IntoConfigError for ConstraintError {
    fn into_config_error(self) -> ConfigError {
        ConfigError::constraint(self.to_string())
    }
}

impl IntoConfigError for QueryError {
    fn into_config_error(self) -> ConfigError {
        ConfigError::new(ConfigErrorKind::Path, self.to_string())
    }
}

impl IntoConfigError for ioc_config_json::JsonConversionError {
    fn into_config_error(self) -> ConfigError {
        ConfigError::conversion(self.to_string())
    }
}

#[cfg(feature = "yaml")]
impl IntoConfigError for ioc_config_yaml::YamlError {
    fn into_config_error(self) -> ConfigError {
        ConfigError::conversion(self.to_string())
    }
}

#[cfg(feature = "xml")]
impl IntoConfigError for ioc_config_xml::XmlError {
    fn into_config_error(self) -> ConfigError {
        ConfigError::conversion(self.to_string())
    }
}

#[cfg(feature = "csv")]
impl IntoConfigError for ioc_config_csv::CsvError {
    fn into_config_error(self) -> ConfigError {
        ConfigError::conversion(self.to_string())
    }
}

#[cfg(feature = "toml")]
impl IntoConfigError for ioc_config_toml::TomlError {
    fn into_config_error(self) -> ConfigError {
        ConfigError::conversion(self.to_string())
    }
}

/// Extension trait for adding context to any result whose error converts
/// into [`ConfigError`].
///
/// `context()` evaluates its argument immediately; `with_context()` only
/// runs the closure on the error path. Context is prepended to whatever
/// the error already carries, separated by `"; "`. An empty context
/// leaves the error untouched.
pub trait ConfigResultExt<T> {
    /// Convert the error and add context to it.
    fn context<C>(self, context: C) -> Result<T, ConfigError>
    where
        C: fmt::Display;

    /// Convert the error and add lazily built context to it.
    fn with_context<C, F>(self, f: F) -> Result<T, ConfigError>
    where
        C: fmt::Display,
        F: FnOnce() -> C;

    /// Convert the error without adding context.
    fn into_config_result(self) -> Result<T, ConfigError>;
}

impl<T, E: IntoConfigError> ConfigResultExt<T> for Result<T, E> {
    fn context<C>(self, context: C) -> Result<T, ConfigError>
    where
        C: fmt::Display,
    {
        self.map_err(|e| add_context_to_error(e.into_config_error(), context.to_string()))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, ConfigError>
    where
        C: fmt::Display,
        F: FnOnce() -> C,
    {
        self.map_err(|e| add_context_to_error(e.into_config_error(), f().to_string()))
    }

    fn into_config_result(self) -> Result<T, ConfigError> {
        self.map_err(IntoConfigError::into_config_error)
    }
}

// Format: "new context; existing context"
fn add_context_to_error(mut error: ConfigError, new_context: String) -> ConfigError {
    if new_context.is_empty() {
        return error;
    }
    error.context = Some(match error.context {
        Some(existing) => format!("{}; {}", new_context, existing),
        None => new_context,
    });
    error
}
