//! Theme file loading.
//!
//! Theme files map series keys to colors and may be TOML, YAML or JSON.
//! Key order in the file is kept, so generated CSS follows it.

mod format;
mod paths;
mod template;


pub use format::ThemeFormat;
pub use paths::{resolve_theme_path, resolve_theme_path_in, theme_search_dirs};
pub use template::create_example_theme;

use chartkit_common::ConfigError;
use chartkit_style::ThemeConfig;
use std::path::Path;
use tracing::{info, warn};

/// Load a theme config from a file; the format follows the extension.
pub fn load_from_path(path: &Path) -> Result<ThemeConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let format = ThemeFormat::from_path(path)?;
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config = format.parse(&content)?;

    if !config.has_colors() {
        warn!("theme {} defines no colors", path.display());
    }

    info!(
        "loaded theme from {} ({} entries)",
        path.display(),
        config.len()
    );
    Ok(config)
}

/// Resolve a theme by name or path and load it.
pub fn load_theme(name: &str) -> Result<ThemeConfig, ConfigError> {
    let path = resolve_theme_path(name)?;
    load_from_path(&path)
}
