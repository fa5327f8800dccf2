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

//! CSV conversion for IOC Config trees.
//!
//! The writer produces long format, one `Section,Key,Value` record per
//! parameter. The reader accepts that layout and also the wide layout where
//! each row is a section and each header column a parameter key. The
//! delimiter (`,`, `;` or tab) is detected from the first line unless set.
//!
//! ```
//! use ioc_config_csv::{csv_to_config, config_to_csv};
//!
//! let tree = csv_to_config("section;id;name\nobject;17030;Vesta\n").unwrap();
//! assert_eq!(tree.value("object", "name"), Some("Vesta"));
//!
//! let out = config_to_csv(&tree).unwrap();
//! assert_eq!(out, "Section,Key,Value\nobject,id,17030\nobject,name,Vesta\n");
//! ```

mod error;
mod from_csv;
mod to_csv;

pub use error::CsvError;
pub use from_csv::{detect_delimiter, from_csv, FromCsvConfig, CANDIDATE_DELIMITERS};
pub use to_csv::{to_csv, ToCsvConfig, LONG_HEADER};

use ioc_config_core::convert::{FromFormat, ToFormat};
use ioc_config_core::ConfigTree;

/// CSV format marker for the generic converter traits
#[derive(Debug, Clone, Copy, Default)]
pub struct Csv;

impl FromFormat for Csv {
    type Config = FromCsvConfig;
    type Error = CsvError;

    fn from_format(input: &str, config: &Self::Config) -> Result<ConfigTree, Self::Error> {
        from_csv(input, config)
    }
}

impl ToFormat for Csv {
    type Config = ToCsvConfig;
    type Error = CsvError;

    fn to_format(tree: &ConfigTree, config: &Self::Config) -> Result<String, Self::Error> {
        to_csv(tree, config)
    }
}

/// Write a tree as long-format CSV with a header
pub fn config_to_csv(tree: &ConfigTree) -> Result<String, CsvError> {
    to_csv(tree, &ToCsvConfig::default())
}

/// Read CSV with delimiter detection and a header row
pub fn csv_to_config(input: &str) -> Result<ConfigTree, CsvError> {
    from_csv(input, &FromCsvConfig::default())
}
