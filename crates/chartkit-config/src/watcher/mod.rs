//! File watcher for live theme regeneration.
//!
//! Uses the `notify` crate to watch a theme file for changes,
//! with a 500ms debounce to avoid rapid regeneration.

mod theme_watcher;


pub use theme_watcher::ThemeWatcher;
