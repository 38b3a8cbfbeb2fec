//! Example theme file written by `chartkit --init`.

use super::format::ThemeFormat;
use chartkit_common::ConfigError;
use std::path::Path;
use tracing::info;

/// Example theme content in the given format.
pub(crate) fn example_theme(format: ThemeFormat) -> &'static str {
    match format {
        ThemeFormat::Toml => example_theme_toml(),
        ThemeFormat::Yaml => example_theme_yaml(),
        ThemeFormat::Json => example_theme_json(),
    }
}

/// Documented example theme in TOML.
fn example_theme_toml() -> &'static str {
    r##"# Chart theme
#
# One table per series key. Each key becomes a `--color-<key>` custom
# property on the chart container. Keys are reduced to [A-Za-z0-9_-].
#
# Accepted colors: #rgb, #rrggbb, #rrggbbaa, rgb()/rgba()/hsl()/hsla(),
# var(--name), or a named color such as `teal`.

[desktop]
label = "Desktop"
color = "#2563eb"

[mobile]
label = "Mobile"

[mobile.theme]
light = "#60a5fa"
dark = "#1e3a8a"
"##
}

fn example_theme_yaml() -> &'static str {
    r##"# Chart theme: one entry per series key, emitted as `--color-<key>`.
desktop:
  label: Desktop
  color: "#2563eb"
mobile:
  label: Mobile
  theme:
    light: "#60a5fa"
    dark: "#1e3a8a"
"##
}

fn example_theme_json() -> &'static str {
    r##"{
  "desktop": { "label": "Desktop", "color": "#2563eb" },
  "mobile": {
    "label": "Mobile",
    "theme": { "light": "#60a5fa", "dark": "#1e3a8a" }
  }
}
"##
}

/// Write the example theme to `path`, creating parent directories.
///
/// The content follows the path's extension; an unknown extension is
/// refused before anything is written.
pub fn create_example_theme(path: &Path) -> Result<(), ConfigError> {
    let format = ThemeFormat::from_path(path)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to create theme directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    std::fs::write(path, example_theme(format)).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to write example theme to {}: {e}",
            path.display()
        ))
    })?;

    info!("created example theme at {}", path.display());
    Ok(())
}
