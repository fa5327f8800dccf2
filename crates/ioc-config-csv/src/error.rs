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

//! Error types for CSV conversion operations.

use thiserror::Error;

/// CSV conversion error types.
///
/// # Examples
///
/// ```
/// use ioc_config_csv::CsvError;
///
/// let err = CsvError::MissingSection { line: 3 };
/// assert_eq!(err.to_string(), "Empty section name at line 3");
/// ```
#[derive(Debug, Error)]
pub enum CsvError {
    /// The input held no records at all.
    #[error("CSV input is empty")]
    Empty,

    /// A record could not be interpreted.
    #[error("CSV parse error at line {line}: {message}")]
    ParseError {
        /// Line number where the error occurred (1-based).
        line: usize,
        message: String,
    },

    /// A record's first column was empty.
    #[error("Empty section name at line {line}")]
    MissingSection { line: usize },

    /// Error from the underlying csv crate.
    #[error("CSV error: {0}")]
    CsvLib(#[from] csv::Error),

    /// Producing the output text failed.
    #[error("CSV write error: {0}")]
    Write(String),
}
