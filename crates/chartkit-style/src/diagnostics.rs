//! Diagnostics raised while generating a chart stylesheet.
//!
//! None of these change the output beyond omitting the offending unit. They
//! are collected into a [`GenerationReport`](crate::GenerationReport) and
//! logged through `tracing`.

use crate::color::ColorRejection;
use crate::theme::Mode;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Diagnostic {
    /// The scope id sanitized to an empty string; nothing was generated.
    #[error("chart identifier is empty after sanitization")]
    InvalidIdentifier { raw: String },

    /// No entry in the theme config carries a color.
    #[error("theme config has no color-bearing entries")]
    EmptyConfig,

    /// A resolved color failed validation and its line was dropped.
    #[error("color for '{key}' in {mode} mode rejected: {reason}")]
    RejectedColor {
        key: String,
        mode: Mode,
        value: String,
        reason: ColorRejection,
    },
}

impl Diagnostic {
    /// Stable category name, used as the `diagnostic` log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Diagnostic::InvalidIdentifier { .. } => "InvalidIdentifier",
            Diagnostic::EmptyConfig => "EmptyConfig",
            Diagnostic::RejectedColor { .. } => "RejectedColor",
        }
    }

    /// Send this diagnostic to the `tracing` sink.
    pub fn emit(&self) {
        match self {
            Diagnostic::InvalidIdentifier { raw } => {
                warn!(diagnostic = self.kind(), raw = %raw, "{self}");
            }
            Diagnostic::EmptyConfig => {
                debug!(diagnostic = self.kind(), "{self}");
            }
            Diagnostic::RejectedColor {
                key,
                mode,
                value,
                reason,
            } => {
                warn!(
                    diagnostic = self.kind(),
                    key = %key,
                    mode = mode.as_str(),
                    value = %value,
                    error = %reason,
                    "Theme color rejected by sanitizer"
                );
            }
        }
    }
}
