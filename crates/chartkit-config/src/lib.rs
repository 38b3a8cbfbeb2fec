//! Chart theme file loading.
//!
//! Loads a [`ThemeConfig`](chartkit_style::ThemeConfig) from TOML, YAML or
//! JSON, resolves named themes against the search path, and watches theme
//! files for live regeneration.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use chartkit_config::load_theme;
//!
//! let config = load_theme("sales").expect("failed to load theme");
//! let css = chartkit_style::generate("revenue", &config);
//! println!("{}", css.unwrap_or_default());
//! ```

pub mod loader;
pub mod watcher;

pub use loader::{
    create_example_theme, load_from_path, load_theme, resolve_theme_path, ThemeFormat,
};
pub use watcher::ThemeWatcher;
