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

//! Error types for YAML conversion operations.

use thiserror::Error;

/// Errors that can occur during YAML conversion.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum YamlError {
    /// YAML parsing or serialization failed
    #[error("YAML parse error: {0}")]
    ParseError(String),

    /// Root element must be a mapping
    #[error("Root must be a YAML mapping, found {found}")]
    InvalidRootType { found: String },

    /// Non-string key encountered in mapping
    #[error("Non-string keys not supported, found {key_type} at path {path}")]
    NonStringKey { key_type: String, path: String },

    /// A parameter value was itself a mapping
    #[error("Nested mapping at path {path} - parameters must be scalars or sequences")]
    NestedMapping { path: String },

    /// Document too large
    #[error("Document size {size} bytes exceeds maximum of {max_size} bytes")]
    DocumentTooLarge { size: usize, max_size: usize },
}

impl From<serde_yaml::Error> for YamlError {
    fn from(err: serde_yaml::Error) -> Self {
        YamlError::ParseError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = YamlError::ParseError("invalid syntax".to_string());
        assert_eq!(err.to_string(), "YAML parse error: invalid syntax");
    }

    #[test]
    fn test_invalid_root_type_display() {
        let err = YamlError::InvalidRootType {
            found: "sequence".to_string(),
        };
        assert_eq!(err.to_string(), "Root must be a YAML mapping, found sequence");
    }

    #[test]
    fn test_nested_mapping_display() {
        let err = YamlError::NestedMapping {
            path: "search.limits".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Nested mapping at path search.limits - parameters must be scalars or sequences"
        );
    }

    #[test]
    fn test_from_serde_yaml_error() {
        let err: YamlError = serde_yaml::from_str::<serde_yaml::Value>("a: [unclosed")
            .unwrap_err()
            .into();
        assert!(matches!(err, YamlError::ParseError(_)));
    }
}
