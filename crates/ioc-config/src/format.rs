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

//! Format selection and tree-based conversion between formats.

use crate::error_ext::ConfigResultExt;
use ioc_config_core::{ConfigError, ConfigResult, ConfigTree};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// A serialization format a [`ConfigTree`] can be read from or written to.
///
/// JSON is always available. The other formats depend on the crate
/// feature of the same name; [`Format::is_enabled`] tells which are
/// compiled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Json,
    Yaml,
    Xml,
    Csv,
    Toml,
}

impl Format {
    /// Every format, enabled or not.
    pub const ALL: [Format; 5] = [
        Format::Json,
        Format::Yaml,
        Format::Xml,
        Format::Csv,
        Format::Toml,
    ];

    /// Look a format up by file extension, with or without the leading dot.
    ///
    /// ```
    /// use ioc_config::Format;
    ///
    /// assert_eq!(Format::from_extension(".YML"), Some(Format::Yaml));
    /// assert_eq!(Format::from_extension("ini"), None);
    /// ```
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.trim_start_matches('.').to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Format::Json),
            "yaml" | "yml" => Some(Format::Yaml),
            "xml" => Some(Format::Xml),
            "csv" => Some(Format::Csv),
            "toml" => Some(Format::Toml),
            _ => None,
        }
    }

    /// Format implied by a path's extension.
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Lowercase name, also the cargo feature that enables the format.
    pub fn name(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Yaml => "yaml",
            Format::Xml => "xml",
            Format::Csv => "csv",
            Format::Toml => "toml",
        }
    }

    /// Whether support for this format was compiled in.
    pub fn is_enabled(self) -> bool {
        match self {
            Format::Json => true,
            Format::Yaml => cfg!(feature = "yaml"),
            Format::Xml => cfg!(feature = "xml"),
            Format::Csv => cfg!(feature = "csv"),
            Format::Toml => cfg!(feature = "toml"),
        }
    }

    /// Parse `input` into a tree with the format's default settings.
    pub fn read(self, input: &str) -> ConfigResult<ConfigTree> {
        match self {
            Format::Json => ioc_config_json::json_to_config(input).into_config_result(),
            #[cfg(feature = "yaml")]
            Format::Yaml => ioc_config_yaml::yaml_to_config(input).into_config_result(),
            #[cfg(feature = "xml")]
            Format::Xml => ioc_config_xml::xml_to_config(input).into_config_result(),
            #[cfg(feature = "csv")]
            Format::Csv => ioc_config_csv::csv_to_config(input).into_config_result(),
            #[cfg(feature = "toml")]
            Format::Toml => ioc_config_toml::toml_to_config(input).into_config_result(),
            #[allow(unreachable_patterns)]
            disabled => Err(disabled.not_enabled()),
        }
    }

    /// Serialize a tree with the format's default settings.
    pub fn write(self, tree: &ConfigTree) -> ConfigResult<String> {
        match self {
            Format::Json => ioc_config_json::config_to_json(tree).into_config_result(),
            #[cfg(feature = "yaml")]
            Format::Yaml => ioc_config_yaml::config_to_yaml(tree).into_config_result(),
            #[cfg(feature = "xml")]
            Format::Xml => ioc_config_xml::config_to_xml(tree).into_config_result(),
            #[cfg(feature = "csv")]
            Format::Csv => ioc_config_csv::config_to_csv(tree).into_config_result(),
            #[cfg(feature = "toml")]
            Format::Toml => ioc_config_toml::config_to_toml(tree).into_config_result(),
            #[allow(unreachable_patterns)]
            disabled => Err(disabled.not_enabled()),
        }
    }

    #[allow(dead_code)]
    fn not_enabled(self) -> ConfigError {
        ConfigError::conversion(format!(
            "{} support is not compiled in; build with the `{}` feature",
            self.name().to_uppercase(),
            self.name()
        ))
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_extension(s)
            .ok_or_else(|| ConfigError::conversion(format!("unknown format '{}'", s)))
    }
}

/// Convert text from one format to another through a [`ConfigTree`].
///
/// The error context names the failing side.
///
/// ```
/// use ioc_config::{convert, Format};
///
/// let json = r#"{"object": {"id": 17030, "name": "Sierpinski"}}"#;
/// let back = convert(json, Format::Json, Format::Json).unwrap();
/// assert!(back.contains("\"name\": \"Sierpinski\""));
/// ```
pub fn convert(input: &str, from: Format, to: Format) -> ConfigResult<String> {
    let tree = from
        .read(input)
        .with_context(|| format!("reading {}", from))?;
    tracing::debug!(
        from = %from,
        to = %to,
        sections = tree.len(),
        parameters = tree.parameter_count(),
        "converting configuration"
    );
    to.write(&tree).with_context(|| format!("writing {}", to))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Extension tests ====================

    #[test]
    fn test_from_extension() {
        assert_eq!(Format::from_extension("json"), Some(Format::Json));
        assert_eq!(Format::from_extension(".yaml"), Some(Format::Yaml));
        assert_eq!(Format::from_extension("yml"), Some(Format::Yaml));
        assert_eq!(Format::from_extension("XML"), Some(Format::Xml));
        assert_eq!(Format::from_extension("Csv"), Some(Format::Csv));
        assert_eq!(Format::from_extension("toml"), Some(Format::Toml));
        assert_eq!(Format::from_extension(""), None);
        assert_eq!(Format::from_extension("txt"), None);
    }

    #[test]
    fn test_from_path() {
        assert_eq!(Format::from_path("conf/ioc.toml"), Some(Format::Toml));
        assert_eq!(Format::from_path("IOC.JSON"), Some(Format::Json));
        assert_eq!(Format::from_path("Makefile"), None);
    }

    #[test]
    fn test_display_and_parse() {
        for format in Format::ALL {
            assert_eq!(format.to_string().parse::<Format>().unwrap(), format);
        }
        let err = "ini".parse::<Format>().unwrap_err();
        assert_eq!(err.message, "unknown format 'ini'");
    }

    // ==================== Conversion tests ====================

    #[test]
    fn test_json_always_enabled() {
        assert!(Format::Json.is_enabled());
        let tree = Format::Json.read(r#"{"gaia": {"catalog": "DR3"}}"#).unwrap();
        assert_eq!(tree.value("gaia", "catalog"), Some("DR3"));
    }

    #[test]
    fn test_convert_error_context() {
        let err = convert("[]", Format::Json, Format::Json).unwrap_err();
        assert_eq!(err.context.as_deref(), Some("reading json"));
    }

    #[cfg(not(feature = "yaml"))]
    #[test]
    fn test_disabled_format_error() {
        assert!(!Format::Yaml.is_enabled());
        let err = Format::Yaml.write(&ConfigTree::new()).unwrap_err();
        assert!(err.message.contains("`yaml` feature"));
    }
}
