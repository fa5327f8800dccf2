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

//! IOC Config XML Conversion
//!
//! Provides bidirectional conversion between configuration trees and XML.
//!
//! The document root (`<config>` by default) holds one element per section.
//! Parameters are written as attributes of the section element, or as child
//! elements when [`ToXmlConfig::use_attributes`] is off. The reader accepts
//! both layouts, and stores a section's own text under `_content`.
//!
//! # Examples
//!
//! ```rust
//! use ioc_config_xml::{from_xml, to_xml, FromXmlConfig, ToXmlConfig};
//!
//! let xml = r#"<config><object id="17030" name="Sierpinski"/></config>"#;
//! let tree = from_xml(xml, &FromXmlConfig::default()).unwrap();
//! assert_eq!(tree.value("object", "id"), Some("17030"));
//!
//! let out = to_xml(&tree, &ToXmlConfig::default()).unwrap();
//! assert!(out.starts_with("<?xml"));
//! ```

mod error;
mod from_xml;
mod to_xml;

pub use error::XmlError;
pub use from_xml::{from_xml, FromXmlConfig, DEFAULT_MAX_DEPTH};
pub use to_xml::{to_xml, ToXmlConfig};

use ioc_config_core::convert::{FromFormat, ToFormat};
use ioc_config_core::ConfigTree;

/// XML format marker for the generic converter traits
#[derive(Debug, Clone, Copy, Default)]
pub struct Xml;

impl FromFormat for Xml {
    type Config = FromXmlConfig;
    type Error = XmlError;

    fn from_format(input: &str, config: &Self::Config) -> Result<ConfigTree, Self::Error> {
        from_xml(input, config)
    }
}

impl ToFormat for Xml {
    type Config = ToXmlConfig;
    type Error = XmlError;

    fn to_format(tree: &ConfigTree, config: &Self::Config) -> Result<String, Self::Error> {
        to_xml(tree, config)
    }
}

/// Convert a tree to XML with default settings
pub fn config_to_xml(tree: &ConfigTree) -> Result<String, XmlError> {
    to_xml(tree, &ToXmlConfig::default())
}

/// Parse XML with default settings
pub fn xml_to_config(xml: &str) -> Result<ConfigTree, XmlError> {
    from_xml(xml, &FromXmlConfig::default())
}

/// Whether `name` can be written as an element or attribute name.
///
/// Namespaced names (containing `:`) are not accepted.
pub fn is_xml_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xml_names() {
        assert!(is_xml_name("object"));
        assert!(is_xml_name("_content"));
        assert!(is_xml_name("limits.max"));
        assert!(is_xml_name("step-size2"));
        assert!(!is_xml_name(""));
        assert!(!is_xml_name("2nd"));
        assert!(!is_xml_name("max mag"));
        assert!(!is_xml_name("ns:tag"));
    }
}
