//! Theme file formats and parsing.

use chartkit_common::ConfigError;
use chartkit_style::ThemeConfig;
use std::path::Path;

/// Serialization format of a theme file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeFormat {
    Toml,
    Yaml,
    Json,
}

impl ThemeFormat {
    /// Extensions tried, in order, when resolving a theme by name.
    pub const EXTENSIONS: &'static [&'static str] = &["toml", "yaml", "yml", "json"];

    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "toml" => Some(ThemeFormat::Toml),
            "yaml" | "yml" => Some(ThemeFormat::Yaml),
            "json" => Some(ThemeFormat::Json),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
            .ok_or_else(|| ConfigError::UnsupportedFormat(path.display().to_string()))
    }

    /// Parse theme file content in this format.
    pub fn parse(self, content: &str) -> Result<ThemeConfig, ConfigError> {
        match self {
            ThemeFormat::Toml => toml::from_str(content)
                .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}"))),
            ThemeFormat::Yaml => serde_yaml::from_str(content)
                .map_err(|e| ConfigError::ParseError(format!("failed to parse YAML: {e}"))),
            ThemeFormat::Json => serde_json::from_str(content)
                .map_err(|e| ConfigError::ParseError(format!("failed to parse JSON: {e}"))),
        }
    }
}
