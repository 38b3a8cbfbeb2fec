//! Per-chart theme stylesheets.
//!
//! Turns a caller-supplied [`ThemeConfig`] into CSS custom properties scoped
//! to one chart instance via `[data-chart=<id>]`, with a `.dark` variant.
//! The output is injected into the page without escaping, so every byte of
//! it is either template text, a sanitized identifier, or a validated color:
//!
//! - [`sanitize_identifier`] reduces scope ids and keys to `[A-Za-z0-9_-]`;
//! - [`is_valid_color`] combines a color allow-list with an injection deny-list;
//! - [`assemble`] builds the Normal and Dark blocks;
//! - [`generate`] is the guarded entry point.
//!
//! ```
//! use chartkit_style::{generate, ThemeConfig, ThemeEntry};
//!
//! let config = ThemeConfig::new()
//!     .with("desktop", ThemeEntry::flat("#2563eb"))
//!     .with("mobile", ThemeEntry::per_mode("#60a5fa", "#1e3a8a"));
//! let css = generate("revenue", &config).unwrap();
//! assert!(css.contains(".dark [data-chart=revenue] {"));
//! ```

pub mod assemble;
pub mod color;
pub mod diagnostics;
pub mod guard;
pub mod sanitize;
pub mod theme;

pub use assemble::assemble;
pub use color::{check_color, is_valid_color, ColorRejection, DenyRule};
pub use diagnostics::Diagnostic;
pub use guard::{generate, generate_report, style_element, ChartScope, GenerationReport};
pub use sanitize::sanitize_identifier;
pub use theme::{Mode, ThemeColor, ThemeConfig, ThemeEntry};
