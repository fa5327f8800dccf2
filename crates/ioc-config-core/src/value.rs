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

//! Value-type inference for raw configuration strings.
//!
//! Configuration values are stored as text. Their type is classified on
//! demand, so formats without native typing (CSV, key/value text) and
//! typed formats (JSON, TOML) feed the same tree.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Inferred type of a raw configuration value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    /// Whole number (`42`, `-7`, `1e3`).
    Int,
    /// Number containing a decimal point (`3.14`).
    Float,
    /// Boolean literal (`.true.`, `false`, ...).
    Bool,
    /// Bracketed list (`[1, 2, 3]`).
    Array,
    /// Anything else.
    String,
}

/// Boolean literals recognised by [`ValueType::infer`], compared case-insensitively.
const BOOL_LITERALS: [&str; 4] = [".true.", ".false.", "true", "false"];

impl ValueType {
    /// Classify a raw value.
    ///
    /// Rules are applied in order on the trimmed input:
    /// 1. `[...]` is an array
    /// 2. a boolean literal is a bool
    /// 3. a string consumed entirely by a numeric parse is a float when it
    ///    contains `.`, an int otherwise
    /// 4. everything else is a string
    pub fn infer(raw: &str) -> Self {
        let s = raw.trim();

        if s.starts_with('[') && s.ends_with(']') {
            return Self::Array;
        }

        if BOOL_LITERALS.iter().any(|lit| s.eq_ignore_ascii_case(lit)) {
            return Self::Bool;
        }

        if parse_number(s).is_some() {
            if s.contains('.') {
                return Self::Float;
            }
            return Self::Int;
        }

        Self::String
    }

    /// Lowercase name used in exports and queries.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::Array => "array",
            Self::String => "string",
        }
    }

    /// Parse a lowercase type name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "int" | "integer" => Some(Self::Int),
            "float" | "double" => Some(Self::Float),
            "bool" | "boolean" => Some(Self::Bool),
            "array" => Some(Self::Array),
            "string" => Some(Self::String),
            _ => None,
        }
    }

    /// Returns true for `Int` and `Float`.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Int | Self::Float)
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a whole string as a finite number.
///
/// The entire trimmed input must be numeric. Spelled-out specials such as
/// `inf` or `NaN` are not numbers here.
pub fn parse_number(raw: &str) -> Option<f64> {
    let s = raw.trim();
    let first = *s.as_bytes().first()?;
    if !(first.is_ascii_digit() || matches!(first, b'-' | b'+' | b'.')) {
        return None;
    }
    s.parse::<f64>().ok().filter(|n| n.is_finite())
}
