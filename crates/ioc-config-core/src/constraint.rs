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

//! Numeric range constraints.
//!
//! A constraint is written as a short expression over the variable `d`,
//! which stands for the parameter value:
//!
//! | form | example | bounds |
//! |------|---------|--------|
//! | inclusive range | `0.001..10` | `0.001 <= d <= 10` |
//! | catalog range | `1..N` | `d >= 1`, upper bound supplied later |
//! | double inequality | `5 < d <= 30` | per operator |
//! | reversed double inequality | `30 > d > 5` | `5 <= d <= 30` |
//! | single comparison | `d >= 4` | one side open |
//!
//! Whitespace is ignored everywhere, so `d` must appear as a lone letter.
//! The reversed double inequality is inclusive on both ends regardless of
//! which operators it uses.

use crate::value::parse_number;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Upper bound stored for `MIN..N` until the real catalog size is known.
pub const CATALOG_SENTINEL: f64 = 1e308;

/// The variable letter in comparison expressions.
const VARIABLE: char = 'd';

/// Reasons a constraint expression is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConstraintError {
    /// Expression was empty or whitespace only.
    #[error("empty constraint expression")]
    Empty,

    /// Expression matched none of the supported forms.
    #[error("unrecognized constraint expression '{0}'")]
    Unrecognized(String),

    /// A bound in the expression is not a finite number.
    #[error("invalid number '{token}' in constraint expression '{expression}'")]
    InvalidNumber { expression: String, token: String },

    /// Lower bound exceeds upper bound.
    #[error("lower bound {min} exceeds upper bound {max}")]
    InvertedBounds { min: f64, max: f64 },
}

/// A parsed numeric admissibility rule.
///
/// The default value is disabled and accepts every number. A constraint
/// never changes after construction except through
/// [`with_catalog_size`](Self::with_catalog_size), which returns a copy.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeConstraint {
    expression: String,
    min: f64,
    max: f64,
    min_inclusive: bool,
    max_inclusive: bool,
    open_ended_to_catalog: bool,
    enabled: bool,
}

impl Default for RangeConstraint {
    fn default() -> Self {
        Self {
            expression: String::new(),
            min: f64::NEG_INFINITY,
            max: f64::INFINITY,
            min_inclusive: true,
            max_inclusive: true,
            open_ended_to_catalog: false,
            enabled: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Comparison {
    Less,
    LessEq,
    Greater,
    GreaterEq,
}

impl Comparison {
    fn is_less(self) -> bool {
        matches!(self, Self::Less | Self::LessEq)
    }

    fn is_inclusive(self) -> bool {
        matches!(self, Self::LessEq | Self::GreaterEq)
    }
}

// Two-character operators come first so `<=` is never read as `<`.
const OPERATORS: [(&str, Comparison); 4] = [
    ("<=", Comparison::LessEq),
    (">=", Comparison::GreaterEq),
    ("<", Comparison::Less),
    (">", Comparison::Greater),
];

#[derive(Debug, Clone, Copy)]
struct Bounds {
    min: f64,
    max: f64,
    min_inclusive: bool,
    max_inclusive: bool,
    open_ended_to_catalog: bool,
}

impl Bounds {
    fn closed(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            min_inclusive: true,
            max_inclusive: true,
            open_ended_to_catalog: false,
        }
    }
}

impl RangeConstraint {
    /// A constraint that accepts everything.
    pub fn none() -> Self {
        Self::default()
    }

    /// Parse an expression.
    ///
    /// Forms are tried in order: range (`..`), double inequality, single
    /// comparison. A malformed range is an error straight away; a double
    /// inequality that does not parse is retried as a single comparison.
    pub fn parse(expression: &str) -> Result<Self, ConstraintError> {
        let compact: String = expression.chars().filter(|c| !c.is_whitespace()).collect();
        if compact.is_empty() {
            return Err(ConstraintError::Empty);
        }

        let bounds = if let Some(bounds) = parse_range(&compact)? {
            bounds
        } else if let Some(bounds) = parse_double_inequality(&compact) {
            bounds
        } else if let Some(bounds) = parse_single_comparison(&compact)? {
            bounds
        } else {
            return Err(ConstraintError::Unrecognized(expression.trim().to_string()));
        };

        if bounds.min > bounds.max {
            return Err(ConstraintError::InvertedBounds {
                min: bounds.min,
                max: bounds.max,
            });
        }

        Ok(Self::from_bounds(expression.trim().to_string(), bounds))
    }

    /// Parse an expression, falling back to a disabled constraint.
    ///
    /// The failure is logged at `warn` level.
    pub fn parse_lenient(expression: &str) -> Self {
        match Self::parse(expression) {
            Ok(constraint) => constraint,
            Err(err) => {
                tracing::warn!(expression, error = %err, "ignoring malformed constraint expression");
                Self::default()
            }
        }
    }

    /// `d < value`
    pub fn less_than(value: f64) -> Self {
        Self::one_sided(format!("d < {value}"), Comparison::Less, value)
    }

    /// `d <= value`
    pub fn at_most(value: f64) -> Self {
        Self::one_sided(format!("d <= {value}"), Comparison::LessEq, value)
    }

    /// `d > value`
    pub fn greater_than(value: f64) -> Self {
        Self::one_sided(format!("d > {value}"), Comparison::Greater, value)
    }

    /// `d >= value`
    pub fn at_least(value: f64) -> Self {
        Self::one_sided(format!("d >= {value}"), Comparison::GreaterEq, value)
    }

    /// `a..b`, with the bounds put in order.
    pub fn between_inclusive(a: f64, b: f64) -> Self {
        let (min, max) = if a <= b { (a, b) } else { (b, a) };
        Self::from_bounds(format!("{min}..{max}"), Bounds::closed(min, max))
    }

    /// `min..N`
    pub fn up_to_catalog(min: f64) -> Self {
        let mut bounds = Bounds::closed(min, CATALOG_SENTINEL);
        bounds.open_ended_to_catalog = true;
        Self::from_bounds(format!("{min}..N"), bounds)
    }

    fn one_sided(expression: String, op: Comparison, value: f64) -> Self {
        Self::from_bounds(expression, single_bounds(op, value))
    }

    fn from_bounds(expression: String, bounds: Bounds) -> Self {
        Self {
            expression,
            min: bounds.min,
            max: bounds.max,
            min_inclusive: bounds.min_inclusive,
            max_inclusive: bounds.max_inclusive,
            open_ended_to_catalog: bounds.open_ended_to_catalog,
            enabled: true,
        }
    }

    /// Replace the catalog placeholder with a real size.
    ///
    /// Constraints not written as `MIN..N` are returned unchanged.
    pub fn with_catalog_size(&self, size: f64) -> Self {
        let mut resolved = self.clone();
        if self.open_ended_to_catalog {
            resolved.max = size.max(self.min);
        }
        resolved
    }

    /// Whether `value` passes. Disabled constraints accept everything.
    pub fn is_satisfied(&self, value: f64) -> bool {
        if !self.enabled {
            return true;
        }
        let min_ok = if self.min_inclusive {
            value >= self.min
        } else {
            value > self.min
        };
        let max_ok = if self.max_inclusive {
            value <= self.max
        } else {
            value < self.max
        };
        min_ok && max_ok
    }

    /// Expression text, or `no constraint` when disabled.
    pub fn describe(&self) -> &str {
        if self.enabled {
            &self.expression
        } else {
            "no constraint"
        }
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn min_inclusive(&self) -> bool {
        self.min_inclusive
    }

    pub fn max_inclusive(&self) -> bool {
        self.max_inclusive
    }

    pub fn is_open_ended_to_catalog(&self) -> bool {
        self.open_ended_to_catalog
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Lower bound when it is a real finite number.
    pub fn finite_min(&self) -> Option<f64> {
        (self.enabled && self.min.is_finite()).then_some(self.min)
    }

    /// Upper bound when it is a real finite number (not the catalog placeholder).
    pub fn finite_max(&self) -> Option<f64> {
        let placeholder = self.open_ended_to_catalog && self.max == CATALOG_SENTINEL;
        (self.enabled && self.max.is_finite() && !placeholder).then_some(self.max)
    }
}

impl fmt::Display for RangeConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

impl FromStr for RangeConstraint {
    type Err = ConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for RangeConstraint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.enabled {
            serializer.serialize_some(&self.expression)
        } else {
            serializer.serialize_none()
        }
    }
}

impl<'de> Deserialize<'de> for RangeConstraint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(Self::default()),
            Some(expr) => Self::parse(&expr).map_err(serde::de::Error::custom),
        }
    }
}

fn number(token: &str, expression: &str) -> Result<f64, ConstraintError> {
    parse_number(token).ok_or_else(|| ConstraintError::InvalidNumber {
        expression: expression.to_string(),
        token: token.to_string(),
    })
}

fn parse_range(s: &str) -> Result<Option<Bounds>, ConstraintError> {
    let Some(pos) = s.find("..") else {
        return Ok(None);
    };
    let (left, right) = (&s[..pos], &s[pos + 2..]);
    let min = number(left, s)?;
    if right == "N" {
        let mut bounds = Bounds::closed(min, CATALOG_SENTINEL);
        bounds.open_ended_to_catalog = true;
        return Ok(Some(bounds));
    }
    let max = number(right, s)?;
    Ok(Some(Bounds::closed(min, max)))
}

fn split_trailing_op(s: &str) -> Option<(&str, Comparison)> {
    OPERATORS
        .iter()
        .find_map(|&(token, op)| s.strip_suffix(token).map(|rest| (rest, op)))
}

fn split_leading_op(s: &str) -> Option<(Comparison, &str)> {
    OPERATORS
        .iter()
        .find_map(|&(token, op)| s.strip_prefix(token).map(|rest| (op, rest)))
}

fn parse_double_inequality(s: &str) -> Option<Bounds> {
    let d_pos = s.find(VARIABLE)?;
    if d_pos == 0 || d_pos + 1 >= s.len() {
        return None;
    }
    let (lhs, before) = split_trailing_op(&s[..d_pos])?;
    let (after, rhs) = split_leading_op(&s[d_pos + 1..])?;
    let a = parse_number(lhs)?;
    let b = parse_number(rhs)?;

    match (before.is_less(), after.is_less()) {
        (true, true) => Some(Bounds {
            min: a,
            max: b,
            min_inclusive: before.is_inclusive(),
            max_inclusive: after.is_inclusive(),
            open_ended_to_catalog: false,
        }),
        (false, false) => Some(Bounds::closed(b, a)),
        _ => None,
    }
}

fn single_bounds(op: Comparison, value: f64) -> Bounds {
    if op.is_less() {
        Bounds {
            min: f64::NEG_INFINITY,
            max: value,
            min_inclusive: true,
            max_inclusive: op.is_inclusive(),
            open_ended_to_catalog: false,
        }
    } else {
        Bounds {
            min: value,
            max: f64::INFINITY,
            min_inclusive: op.is_inclusive(),
            max_inclusive: true,
            open_ended_to_catalog: false,
        }
    }
}

fn parse_single_comparison(s: &str) -> Result<Option<Bounds>, ConstraintError> {
    let Some((op, rest)) = s.strip_prefix(VARIABLE).and_then(split_leading_op) else {
        return Ok(None);
    };
    let value = number(rest, s)?;
    Ok(Some(single_bounds(op, value)))
}
