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

use crate::CsvError;
use ioc_config_core::ConfigTree;

/// Header written before long-format records.
pub const LONG_HEADER: [&str; 3] = ["Section", "Key", "Value"];

/// Configuration for CSV output
#[derive(Debug, Clone)]
pub struct ToCsvConfig {
    /// Field delimiter (default: `,`)
    pub delimiter: u8,
    /// Write the `Section,Key,Value` header row (default: true)
    pub include_headers: bool,
}

impl Default for ToCsvConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            include_headers: true,
        }
    }
}

/// Write a tree as long-format CSV, one `section,key,value` record per
/// parameter
///
/// A section without parameters is written as a record with an empty key
/// and value so it survives a round trip.
pub fn to_csv(tree: &ConfigTree, config: &ToCsvConfig) -> Result<String, CsvError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(config.delimiter)
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(Vec::new());

    if config.include_headers {
        writer.write_record(LONG_HEADER)?;
    }
    for section in tree.sections() {
        if section.is_empty() {
            writer.write_record([section.name.as_str(), "", ""])?;
            continue;
        }
        for param in section.iter() {
            writer.write_record([
                section.name.as_str(),
                param.key.as_str(),
                param.value.as_str(),
            ])?;
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| CsvError::Write(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| CsvError::Write(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> ConfigTree {
        let mut tree = ConfigTree::new();
        tree.set_parameter("object", "id", "17030");
        tree.set_parameter("object", "name", "Vesta");
        tree.set_parameter("search", "bands", "[V, R]");
        tree
    }

    #[test]
    fn test_long_format() {
        let csv = to_csv(&tree(), &ToCsvConfig::default()).unwrap();
        assert_eq!(
            csv,
            "Section,Key,Value\nobject,id,17030\nobject,name,Vesta\nsearch,bands,\"[V, R]\"\n"
        );
    }

    #[test]
    fn test_without_header_and_semicolon() {
        let config = ToCsvConfig {
            delimiter: b';',
            include_headers: false,
        };
        let csv = to_csv(&tree(), &config).unwrap();
        assert_eq!(csv, "object;id;17030\nobject;name;Vesta\nsearch;bands;[V, R]\n");
    }

    #[test]
    fn test_empty_section_record() {
        let mut tree = ConfigTree::new();
        tree.add_section("database");
        let csv = to_csv(&tree, &ToCsvConfig::default()).unwrap();
        assert_eq!(csv, "Section,Key,Value\ndatabase,,\n");
    }
}
