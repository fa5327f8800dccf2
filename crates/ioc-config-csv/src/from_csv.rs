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

/// Delimiters tried by [`detect_delimiter`], in tie-break order.
pub const CANDIDATE_DELIMITERS: [u8; 3] = [b',', b';', b'\t'];

/// Configuration for CSV import
///
/// # Examples
///
/// ```
/// use ioc_config_csv::FromCsvConfig;
///
/// let config = FromCsvConfig::default();
/// assert_eq!(config.delimiter, None);
/// assert!(config.has_headers);
/// assert!(config.trim);
/// ```
#[derive(Debug, Clone)]
pub struct FromCsvConfig {
    /// Field delimiter; `None` detects it from the first line (default)
    pub delimiter: Option<u8>,
    /// Whether the first record is a header (default: true)
    pub has_headers: bool,
    /// Trim whitespace around fields (default: true)
    pub trim: bool,
}

impl Default for FromCsvConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            has_headers: true,
            trim: true,
        }
    }
}

/// Pick the delimiter occurring most often in the first line
///
/// Ties go to the earlier entry of [`CANDIDATE_DELIMITERS`]; a line with
/// none of them yields `,`.
pub fn detect_delimiter(input: &str) -> u8 {
    let first_line = input.lines().next().unwrap_or("");
    let mut best = (b',', 0usize);
    for delimiter in CANDIDATE_DELIMITERS {
        let count = first_line.bytes().filter(|&b| b == delimiter).count();
        if count > best.1 {
            best = (delimiter, count);
        }
    }
    best.0
}

/// Read CSV into a tree
///
/// Two layouts are accepted:
///
/// - long: a `section,key,value` header (any case), then one parameter per
///   record; an empty key only declares the section
/// - wide: the first column names the section and the remaining header
///   names are parameter keys; several records for one section merge
///
/// Without a header every record is wide and keys are `col1`, `col2`, ...
pub fn from_csv(input: &str, config: &FromCsvConfig) -> Result<ConfigTree, CsvError> {
    if input.trim().is_empty() {
        return Err(CsvError::Empty);
    }
    let delimiter = config.delimiter.unwrap_or_else(|| detect_delimiter(input));
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .trim(if config.trim {
            csv::Trim::All
        } else {
            csv::Trim::None
        })
        .from_reader(input.as_bytes());

    let mut records = reader.records();
    let header: Option<Vec<String>> = if config.has_headers {
        match records.next() {
            Some(record) => Some(record?.iter().map(str::to_string).collect()),
            None => return Err(CsvError::Empty),
        }
    } else {
        None
    };

    let long = header.as_deref().is_some_and(is_long_header);
    let mut tree = ConfigTree::new();
    for (idx, result) in records.enumerate() {
        let record = result?;
        let line = record.position().map_or(idx + 1, |p| p.line() as usize);
        if record.iter().all(str::is_empty) {
            continue;
        }
        let section = record.get(0).unwrap_or("");
        if section.is_empty() {
            return Err(CsvError::MissingSection { line });
        }

        if long {
            if record.len() < 3 {
                return Err(CsvError::ParseError {
                    line,
                    message: format!("expected 3 fields, found {}", record.len()),
                });
            }
            let key = &record[1];
            tree.add_section(section);
            if !key.is_empty() {
                tree.set_parameter(section, key, &record[2]);
            }
        } else {
            tree.add_section(section);
            for (col, value) in record.iter().enumerate().skip(1) {
                let key = header
                    .as_ref()
                    .and_then(|h| h.get(col))
                    .filter(|k| !k.is_empty())
                    .cloned()
                    .unwrap_or_else(|| format!("col{col}"));
                tree.set_parameter(section, key, value);
            }
        }
    }

    if header.is_none() && tree.is_empty() {
        return Err(CsvError::Empty);
    }
    Ok(tree)
}

fn is_long_header(header: &[String]) -> bool {
    header.len() == 3
        && header
            .iter()
            .zip(["section", "key", "value"])
            .all(|(h, expected)| h.trim().eq_ignore_ascii_case(expected))
}
