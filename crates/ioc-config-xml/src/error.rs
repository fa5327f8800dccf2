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

//! Error types for XML conversion

use thiserror::Error;

/// Errors that can occur during XML conversion operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum XmlError {
    /// XML parsing failed due to malformed syntax.
    #[error("XML parse error at position {pos}: {message}")]
    ParseError {
        /// Byte offset where the error occurred
        pos: usize,
        message: String,
    },

    /// Writing XML output failed.
    #[error("Failed to write {context}: {message}")]
    WriteError { context: String, message: String },

    /// A section name or parameter key cannot be used as an XML name.
    ///
    /// ```text
    /// Invalid XML name '2nd pass' for section
    /// ```
    #[error("Invalid XML name '{name}' for {role}")]
    InvalidName { name: String, role: &'static str },

    /// Element nesting went past the configured limit.
    #[error("XML nesting depth exceeded (max: {max})")]
    MaxDepthExceeded { max: usize },
}

impl XmlError {
    pub(crate) fn write(context: &str, err: impl std::fmt::Display) -> Self {
        XmlError::WriteError {
            context: context.to_string(),
            message: err.to_string(),
        }
    }
}
