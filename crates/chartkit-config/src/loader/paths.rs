//! Theme path resolution.

use super::format::ThemeFormat;
use chartkit_common::ConfigError;
use std::path::{Path, PathBuf};

/// Directories searched for named themes, in priority order.
///
/// `./themes` first, then `<config dir>/chartkit/themes`.
pub fn theme_search_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![PathBuf::from("themes")];
    if let Some(config_dir) = dirs::config_dir() {
        dirs.push(config_dir.join("chartkit").join("themes"));
    }
    dirs
}

/// Whether `name` should be taken as a path rather than a theme name.
fn looks_like_path(name: &str) -> bool {
    name.contains('/')
        || name.contains('\\')
        || Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| ThemeFormat::from_extension(e).is_some())
}

/// Resolve a theme name or path to an existing file.
pub fn resolve_theme_path(name: &str) -> Result<PathBuf, ConfigError> {
    resolve_theme_path_in(name, &theme_search_dirs())
}

/// Resolve `name` against an explicit list of search directories.
///
/// A name that looks like a path is used as-is. Otherwise each directory is
/// tried with each known extension.
pub fn resolve_theme_path_in(name: &str, search_dirs: &[PathBuf]) -> Result<PathBuf, ConfigError> {
    if looks_like_path(name) {
        let path = PathBuf::from(name);
        if path.exists() {
            return Ok(path);
        }
        return Err(ConfigError::FileNotFound(path));
    }

    for dir in search_dirs {
        for ext in ThemeFormat::EXTENSIONS {
            let candidate = dir.join(format!("{name}.{ext}"));
            if candidate.exists() {
                return Ok(candidate);
            }
        }
    }

    Err(ConfigError::FileNotFound(PathBuf::from(format!(
        "theme '{name}' not found in any search path"
    ))))
}
