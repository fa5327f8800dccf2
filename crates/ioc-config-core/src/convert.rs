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

//! Shared pieces for the format converter crates.
//!
//! Every converter maps between a [`ConfigTree`] and one text format. Typed
//! formats (JSON, YAML, TOML) write values through [`TypedValue`] so each
//! parameter keeps the type [`ValueType::infer`] gives it, and read scalars
//! back into raw text with [`join_list`] for sequences.

use crate::tree::{split_list, ConfigTree};
use crate::value::ValueType;

/// Section that receives top-level scalars from formats allowing them.
pub const DEFAULT_SECTION: &str = "general";

/// Parameter key holding an XML element's text content.
pub const CONTENT_KEY: &str = "_content";

/// Trait for formats that can be read into a tree.
pub trait FromFormat {
    /// The configuration type for this format.
    type Config: Default;

    /// The error type returned on conversion failure.
    type Error;

    fn from_format(input: &str, config: &Self::Config) -> Result<ConfigTree, Self::Error>;
}

/// Trait for formats a tree can be written to.
pub trait ToFormat {
    /// The configuration type for this format.
    type Config: Default;

    /// The error type returned on conversion failure.
    type Error;

    fn to_format(tree: &ConfigTree, config: &Self::Config) -> Result<String, Self::Error>;
}

/// A raw value resolved to its inferred type.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    List(Vec<TypedValue>),
    Text(String),
}

impl TypedValue {
    /// Resolve a raw parameter value.
    ///
    /// Integers too large for `i64` fall back to `Float`; list items are
    /// resolved one by one.
    pub fn from_raw(raw: &str) -> Self {
        let s = raw.trim();
        match ValueType::infer(s) {
            ValueType::Array => Self::List(split_list(s).iter().map(|i| Self::from_raw(i)).collect()),
            ValueType::Bool => Self::Bool(s.trim_matches('.').eq_ignore_ascii_case("true")),
            ValueType::Int => match s.parse::<i64>() {
                Ok(n) => Self::Int(n),
                Err(_) => s.parse::<f64>().map_or_else(|_| Self::Text(raw.to_string()), Self::Float),
            },
            ValueType::Float => s.parse::<f64>().map_or_else(|_| Self::Text(raw.to_string()), Self::Float),
            ValueType::String => Self::Text(raw.to_string()),
        }
    }
}

/// Render list items as a raw `[a, b, c]` value.
pub fn join_list<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let parts: Vec<String> = items.into_iter().map(|s| s.as_ref().to_string()).collect();
    format!("[{}]", parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== TypedValue tests ====================

    #[test]
    fn test_typed_scalars() {
        assert_eq!(TypedValue::from_raw("42"), TypedValue::Int(42));
        assert_eq!(TypedValue::from_raw("2.5"), TypedValue::Float(2.5));
        assert_eq!(TypedValue::from_raw(".TRUE."), TypedValue::Bool(true));
        assert_eq!(TypedValue::from_raw("false"), TypedValue::Bool(false));
        assert_eq!(TypedValue::from_raw("Vesta"), TypedValue::Text("Vesta".into()));
    }

    #[test]
    fn test_typed_exponent_int_becomes_float() {
        assert_eq!(TypedValue::from_raw("1e3"), TypedValue::Float(1000.0));
    }

    #[test]
    fn test_typed_list() {
        assert_eq!(
            TypedValue::from_raw("[1, x, .false.]"),
            TypedValue::List(vec![
                TypedValue::Int(1),
                TypedValue::Text("x".into()),
                TypedValue::Bool(false),
            ])
        );
    }

    #[test]
    fn test_join_list() {
        assert_eq!(join_list(["a", "b"]), "[a, b]");
        assert_eq!(join_list(Vec::<String>::new()), "[]");
    }
}
