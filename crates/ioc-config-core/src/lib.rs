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

//! Core data model and validation for IOC Config.
//!
//! This crate holds the format-independent parts of the toolkit:
//!
//! - [`ConfigTree`]: sections of raw string parameters, typed on demand
//!   through [`ValueType`]
//! - [`RangeConstraint`]: the `d < 20` / `0.001..10` / `1..N` expression
//!   language and its evaluator
//! - [`Schema`], [`SectionSpec`], [`ParameterSpec`]: the declarative
//!   contract, and [`validate`] which checks a tree against it
//! - path access, merge, diff, query, versioning and batch helpers
//!
//! Format converters live in the `ioc-config-*` sibling crates and only
//! produce or consume [`ConfigTree`] values.
//!
//! # Example
//!
//! ```
//! use ioc_config_core::{validate, ConfigTree, Schema};
//!
//! let mut tree = ConfigTree::new();
//! tree.set_parameter("object", "id", "17030");
//!
//! let report = validate(&Schema::default_schema(), &tree);
//! assert!(!report.is_valid());
//! assert_eq!(report.messages()[0], "Missing required parameter 'name' in section 'object'");
//! ```

pub mod batch;
mod builder;
mod constraint;
pub mod convert;
pub mod diff;
mod error;
pub mod merge;
pub mod path;
pub mod query;
mod schema;
mod tree;
mod validate;
mod value;
pub mod versioning;

pub use builder::ConfigBuilder;
pub use constraint::{ConstraintError, RangeConstraint, CATALOG_SENTINEL};
pub use diff::{diff, diff_report, DiffEntry, DiffKind, DiffSummary};
pub use error::{ConfigError, ConfigErrorKind, ConfigResult};
pub use merge::{MergeConflict, MergeStats, MergeStrategy};
pub use query::{Match, QueryError};
pub use schema::{NonNumericPolicy, ParameterSpec, Schema, SectionSpec};
pub use tree::{split_list, ConfigTree, Parameter, Section, SectionKind};
pub use validate::{
    validate, validate_with, ConfigView, SchemaViolation, ValidationOptions, ValidationReport,
};
pub use value::{parse_number, ValueType};
pub use versioning::{VersionEntry, VersionedConfig};
