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

//! Configuration tree to XML conversion

use crate::{is_xml_name, XmlError};
use ioc_config_core::convert::CONTENT_KEY;
use ioc_config_core::{ConfigTree, Section};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Cursor;

/// Configuration for XML output
#[derive(Debug, Clone)]
pub struct ToXmlConfig {
    /// Root element name (default: `config`)
    pub root_element: String,
    /// Spaces per indentation level; 0 writes everything on one line
    pub indent: usize,
    /// Write the `<?xml ...?>` declaration
    pub declaration: bool,
    /// Write parameters as attributes of the section element (default: true).
    /// When false each parameter is a child element.
    pub use_attributes: bool,
}

impl Default for ToXmlConfig {
    fn default() -> Self {
        Self {
            root_element: "config".to_string(),
            indent: 2,
            declaration: true,
            use_attributes: true,
        }
    }
}

/// Convert a tree to an XML string
pub fn to_xml(tree: &ConfigTree, config: &ToXmlConfig) -> Result<String, XmlError> {
    let mut writer = if config.indent > 0 {
        Writer::new_with_indent(Cursor::new(Vec::new()), b' ', config.indent)
    } else {
        Writer::new(Cursor::new(Vec::new()))
    };

    if config.declaration {
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(|e| XmlError::write("XML declaration", e))?;
    }

    check_name(&config.root_element, "root element")?;
    writer
        .write_event(Event::Start(BytesStart::new(config.root_element.as_str())))
        .map_err(|e| XmlError::write("root element", e))?;

    for section in tree.sections() {
        write_section(&mut writer, section, config)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new(config.root_element.as_str())))
        .map_err(|e| XmlError::write("root element", e))?;

    let bytes = writer.into_inner().into_inner();
    String::from_utf8(bytes).map_err(|e| XmlError::write("UTF-8 output", e))
}

fn write_section<W: std::io::Write>(
    writer: &mut Writer<W>,
    section: &Section,
    config: &ToXmlConfig,
) -> Result<(), XmlError> {
    check_name(&section.name, "section")?;
    let mut elem = BytesStart::new(section.name.as_str());
    let params: Vec<_> = section.iter().filter(|p| p.key != CONTENT_KEY).collect();
    for param in &params {
        check_name(&param.key, "parameter")?;
    }

    if config.use_attributes {
        for param in &params {
            elem.push_attribute((param.key.as_str(), param.value.as_str()));
        }
    }

    let content = section.value(CONTENT_KEY).filter(|c| !c.is_empty());
    let has_children = !config.use_attributes && !params.is_empty();
    if content.is_none() && !has_children {
        return writer
            .write_event(Event::Empty(elem))
            .map_err(|e| XmlError::write("section element", e));
    }

    writer
        .write_event(Event::Start(elem))
        .map_err(|e| XmlError::write("section element", e))?;
    if has_children {
        for param in &params {
            write_text_element(writer, &param.key, &param.value)?;
        }
    }
    if let Some(text) = content {
        writer
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(|e| XmlError::write("section content", e))?;
    }
    writer
        .write_event(Event::End(BytesEnd::new(section.name.as_str())))
        .map_err(|e| XmlError::write("section element", e))
}

fn write_text_element<W: std::io::Write>(
    writer: &mut Writer<W>,
    name: &str,
    value: &str,
) -> Result<(), XmlError> {
    if value.is_empty() {
        return writer
            .write_event(Event::Empty(BytesStart::new(name)))
            .map_err(|e| XmlError::write("parameter element", e));
    }
    writer
        .write_event(Event::Start(BytesStart::new(name)))
        .map_err(|e| XmlError::write("parameter element", e))?;
    writer
        .write_event(Event::Text(BytesText::new(value)))
        .map_err(|e| XmlError::write("parameter value", e))?;
    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(|e| XmlError::write("parameter element", e))
}

fn check_name(name: &str, role: &'static str) -> Result<(), XmlError> {
    if is_xml_name(name) {
        Ok(())
    } else {
        Err(XmlError::InvalidName {
            name: name.to_string(),
            role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> ConfigTree {
        let mut tree = ConfigTree::new();
        tree.set_parameter("object", "id", "17030");
        tree.set_parameter("object", "name", "Sierpinski");
        tree.set_parameter("search", "max_magnitude", "16.5");
        tree
    }

    #[test]
    fn test_declaration_root_and_attributes() {
        let xml = to_xml(&tree(), &ToXmlConfig::default()).unwrap();
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<config>"));
        assert!(xml.contains("<object id=\"17030\" name=\"Sierpinski\"/>"));
        assert!(xml.contains("<search max_magnitude=\"16.5\"/>"));
        assert!(xml.trim_end().ends_with("</config>"));
    }

    #[test]
    fn test_child_elements() {
        let config = ToXmlConfig {
            use_attributes: false,
            indent: 0,
            declaration: false,
            ..ToXmlConfig::default()
        };
        let xml = to_xml(&tree(), &config).unwrap();
        assert_eq!(
            xml,
            "<config><object><id>17030</id><name>Sierpinski</name></object>\
             <search><max_magnitude>16.5</max_magnitude></search></config>"
        );
    }

    #[test]
    fn test_content_and_escaping() {
        let mut tree = ConfigTree::new();
        tree.set_parameter("observer", "note", "a < b & \"c\"");
        tree.set_parameter("observer", CONTENT_KEY, "Main site");
        let config = ToXmlConfig {
            indent: 0,
            declaration: false,
            ..ToXmlConfig::default()
        };
        let xml = to_xml(&tree, &config).unwrap();
        assert_eq!(
            xml,
            "<config><observer note=\"a &lt; b &amp; &quot;c&quot;\">Main site</observer></config>"
        );
    }

    #[test]
    fn test_custom_root() {
        let config = ToXmlConfig {
            root_element: "ioc".to_string(),
            ..ToXmlConfig::default()
        };
        let xml = to_xml(&ConfigTree::new(), &config).unwrap();
        assert!(xml.contains("<ioc>"));
        assert!(xml.contains("</ioc>"));
    }

    #[test]
    fn test_invalid_names_rejected() {
        let mut tree = ConfigTree::new();
        tree.set_parameter("2nd pass", "x", "1");
        let err = to_xml(&tree, &ToXmlConfig::default()).unwrap_err();
        assert!(matches!(err, XmlError::InvalidName { role: "section", .. }));

        let mut tree = ConfigTree::new();
        tree.set_parameter("search", "max mag", "1");
        let err = to_xml(&tree, &ToXmlConfig::default()).unwrap_err();
        assert!(matches!(err, XmlError::InvalidName { role: "parameter", .. }));
    }
}
