//! Color value validation.
//!
//! A value is accepted only when it passes two independent layers:
//!
//! 1. a deny-list of known-dangerous substrings ([`DenyRule`]), checked first;
//! 2. an allow-list of color grammars: `#rgb`/`#rrggbb`/`#rrggbbaa`,
//!    `rgb()`/`rgba()`/`hsl()`/`hsla()`, `var(--name)`, or a bare
//!    alphabetic named color.
//!
//! The named-color rule is deliberately loose (`scriptalert` passes). It can
//! never carry delimiters, and the deny-list still applies if any allow rule
//! is loosened later.

mod patterns;


pub use patterns::DenyRule;

use patterns::{COLOR_FN_RE, HEX_RE, NAMED_RE, VAR_RE};

/// Why a color value was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorRejection {
    #[error("empty color value")]
    Empty,

    #[error("CSS injection blocked: {0}")]
    Blocked(DenyRule),

    #[error("unrecognized color format")]
    Unrecognized,
}

/// Check a color value, reporting the first reason it is refused.
///
/// Whitespace around the value is ignored.
pub fn check_color(input: &str) -> Result<(), ColorRejection> {
    let value = input.trim();

    if value.is_empty() {
        return Err(ColorRejection::Empty);
    }

    if let Some(rule) = DenyRule::ALL.into_iter().find(|r| r.is_match(value)) {
        return Err(ColorRejection::Blocked(rule));
    }

    let allowed = HEX_RE.is_match(value)
        || COLOR_FN_RE.is_match(value)
        || VAR_RE.is_match(value)
        || NAMED_RE.is_match(value);

    if allowed {
        Ok(())
    } else {
        Err(ColorRejection::Unrecognized)
    }
}

/// Whether `input` is a color value safe to emit into a stylesheet.
pub fn is_valid_color(input: &str) -> bool {
    check_color(input).is_ok()
}
