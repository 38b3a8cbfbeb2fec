//! Theme CSS assembly.
//!
//! Produces one rule block per [`Mode`] that has at least one valid color:
//!
//! ```text
//!  [data-chart=chart1] {
//!   --color-desktop: #2563eb;
//! }
//! .dark [data-chart=chart1] {
//!   --color-desktop: #60a5fa;
//! }
//! ```
//!
//! Only static template text, sanitized identifiers and validated colors
//! reach the output.

use crate::color::check_color;
use crate::diagnostics::Diagnostic;
use crate::sanitize::sanitize_identifier;
use crate::theme::{Mode, ThemeConfig};

/// Assemble the stylesheet for an already-sanitized, non-empty scope id.
///
/// Returns `None` when no mode produced a single line.
pub fn assemble(scope_id: &str, config: &ThemeConfig) -> Option<String> {
    assemble_collecting(scope_id, config, &mut Vec::new())
}

/// Like [`assemble`], recording rejected colors into `diagnostics`.
pub(crate) fn assemble_collecting(
    scope_id: &str,
    config: &ThemeConfig,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<String> {
    let blocks: Vec<String> = Mode::ALL
        .into_iter()
        .filter_map(|mode| mode_block(scope_id, mode, config, diagnostics))
        .collect();

    if blocks.is_empty() {
        None
    } else {
        Some(blocks.join("\n"))
    }
}

/// Build the rule block for a single mode, or `None` if it has no lines.
fn mode_block(
    scope_id: &str,
    mode: Mode,
    config: &ThemeConfig,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<String> {
    let mut lines = Vec::new();

    for (key, entry) in config.iter() {
        if entry.color.is_inert() {
            continue;
        }

        let key = sanitize_identifier(key);
        if key.is_empty() {
            continue;
        }

        let Some(candidate) = entry.color.resolve(mode) else {
            continue;
        };

        match check_color(candidate) {
            Ok(()) => lines.push(format!("  --color-{key}: {};", candidate.trim())),
            Err(reason) => diagnostics.push(Diagnostic::RejectedColor {
                key,
                mode,
                value: candidate.to_string(),
                reason,
            }),
        }
    }

    if lines.is_empty() {
        return None;
    }

    Some(format!(
        "{} [data-chart={scope_id}] {{\n{}\n}}",
        mode.selector_prefix(),
        lines.join("\n")
    ))
}
