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

//! XML to configuration tree conversion

use crate::XmlError;
use ioc_config_core::convert::CONTENT_KEY;
use ioc_config_core::ConfigTree;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Default maximum element nesting depth.
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// Configuration for XML import
#[derive(Debug, Clone)]
pub struct FromXmlConfig {
    /// Deepest element nesting accepted, counting the root as 1
    pub max_depth: usize,
}

impl Default for FromXmlConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Parse XML into a tree
///
/// The root element's name is not checked. Each child of the root is a
/// section: its attributes and text-bearing child elements become
/// parameters, its own text becomes `_content`. Elements nested deeper are
/// flattened into dotted keys (`<limits><max>20</max></limits>` gives
/// `limits.max`).
pub fn from_xml(xml: &str, config: &FromXmlConfig) -> Result<ConfigTree, XmlError> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut tree = ConfigTree::new();
    loop {
        match reader.read_event() {
            Ok(Event::Start(_)) => {
                read_sections(&mut reader, &mut tree, config)?;
                break;
            }
            Ok(Event::Empty(_)) | Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(parse_error(&reader, e)),
        }
    }
    Ok(tree)
}

fn read_sections(
    reader: &mut Reader<&[u8]>,
    tree: &mut ConfigTree,
    config: &FromXmlConfig,
) -> Result<(), XmlError> {
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = element_name(&e);
                tree.add_section(&name);
                read_attributes(reader, &e, tree, &name, "")?;
                read_element(reader, tree, config, &name, "", 2)?;
            }
            Ok(Event::Empty(e)) => {
                let name = element_name(&e);
                tree.add_section(&name);
                read_attributes(reader, &e, tree, &name, "")?;
            }
            Ok(Event::End(_)) | Ok(Event::Eof) => return Ok(()),
            Ok(_) => {}
            Err(e) => return Err(parse_error(reader, e)),
        }
    }
}

/// Read the body of an element up to its end tag.
///
/// `prefix` is the dotted key of the element inside its section, empty for
/// the section element itself.
fn read_element(
    reader: &mut Reader<&[u8]>,
    tree: &mut ConfigTree,
    config: &FromXmlConfig,
    section: &str,
    prefix: &str,
    depth: usize,
) -> Result<(), XmlError> {
    if depth > config.max_depth {
        return Err(XmlError::MaxDepthExceeded {
            max: config.max_depth,
        });
    }

    let mut text = String::new();
    let mut has_children = false;
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                has_children = true;
                let key = join_key(prefix, &element_name(&e));
                read_attributes(reader, &e, tree, section, &key)?;
                read_element(reader, tree, config, section, &key, depth + 1)?;
            }
            Ok(Event::Empty(e)) => {
                has_children = true;
                if depth + 1 > config.max_depth {
                    return Err(XmlError::MaxDepthExceeded {
                        max: config.max_depth,
                    });
                }
                let key = join_key(prefix, &element_name(&e));
                if read_attributes(reader, &e, tree, section, &key)? == 0 {
                    tree.set_parameter(section, key, "");
                }
            }
            Ok(Event::Text(e)) => {
                let unescaped = e.unescape().map_err(|err| parse_error(reader, err))?;
                text.push_str(&unescaped);
            }
            Ok(Event::CData(e)) => {
                text.push_str(&String::from_utf8_lossy(&e.into_inner()));
            }
            Ok(Event::End(_)) => break,
            Ok(Event::Eof) => {
                return Err(XmlError::ParseError {
                    pos: reader.buffer_position(),
                    message: format!("unexpected end of input inside '{section}'"),
                })
            }
            Ok(_) => {}
            Err(e) => return Err(parse_error(reader, e)),
        }
    }

    if prefix.is_empty() {
        if !text.is_empty() {
            tree.set_parameter(section, CONTENT_KEY, text);
        }
    } else if !text.is_empty() || !has_children {
        tree.set_parameter(section, prefix, text);
    }
    Ok(())
}

/// Store the attributes of `elem` under `prefix`; returns how many were read.
fn read_attributes(
    reader: &Reader<&[u8]>,
    elem: &BytesStart<'_>,
    tree: &mut ConfigTree,
    section: &str,
    prefix: &str,
) -> Result<usize, XmlError> {
    let mut count = 0;
    for attr in elem.attributes() {
        let attr = attr.map_err(|e| parse_error(reader, e))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value().map_err(|e| parse_error(reader, e))?;
        tree.set_parameter(section, join_key(prefix, &key), value.into_owned());
        count += 1;
    }
    Ok(count)
}

fn element_name(elem: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(elem.name().as_ref()).into_owned()
}

fn join_key(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}

fn parse_error(reader: &Reader<&[u8]>, err: impl std::fmt::Display) -> XmlError {
    XmlError::ParseError {
        pos: reader.buffer_position(),
        message: err.to_string(),
    }
}
