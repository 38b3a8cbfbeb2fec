//! Static regexes for the color validator.
//!
//! Deny rules are matched case-insensitively anywhere in the value.
//! Allow rules are anchored and must match the whole trimmed value.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// A known-dangerous construct that disqualifies a color value outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyRule {
    /// `<script` or `</script`.
    ScriptTag,
    /// `<style` or `</style`.
    StyleTag,
    /// Legacy IE `expression(`.
    Expression,
    /// `url(javascript:...)` or `url(data:...)`.
    ScriptUrl,
    /// `;` followed by `}`: closes the declaration and the rule.
    RuleBreak,
    /// `}` followed by `<`: closes the rule and opens markup.
    MarkupAfterBrace,
}

impl DenyRule {
    pub const ALL: [DenyRule; 6] = [
        DenyRule::ScriptTag,
        DenyRule::StyleTag,
        DenyRule::Expression,
        DenyRule::ScriptUrl,
        DenyRule::RuleBreak,
        DenyRule::MarkupAfterBrace,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DenyRule::ScriptTag => "script tag",
            DenyRule::StyleTag => "style tag",
            DenyRule::Expression => "expression()",
            DenyRule::ScriptUrl => "javascript:/data: url()",
            DenyRule::RuleBreak => "rule break",
            DenyRule::MarkupAfterBrace => "markup after brace",
        }
    }

    fn pattern(self) -> &'static str {
        match self {
            DenyRule::ScriptTag => r"(?i)<\s*/?\s*script",
            DenyRule::StyleTag => r"(?i)<\s*/?\s*style",
            DenyRule::Expression => r"(?i)expression\s*\(",
            DenyRule::ScriptUrl => r#"(?i)url\s*\(\s*['"]?\s*(?:javascript|data)\s*:"#,
            DenyRule::RuleBreak => r";\s*\}",
            DenyRule::MarkupAfterBrace => r"\}\s*<",
        }
    }

    pub(crate) fn is_match(self, value: &str) -> bool {
        DENY_RES[self as usize].is_match(value)
    }
}

impl fmt::Display for DenyRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compiled deny rules, indexed by `DenyRule as usize`.
static DENY_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    DenyRule::ALL
        .iter()
        .map(|rule| Regex::new(rule.pattern()).unwrap())
        .collect()
});

/// Hex color: #RGB, #RRGGBB, or #RRGGBBAA.
pub(crate) static HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap());

/// rgb()/rgba()/hsl()/hsla() with numbers, units, commas, slashes and
/// spaces or tabs. At least one argument character is required.
pub(crate) static COLOR_FN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:rgba?|hsla?)\([ \t]*[0-9a-z.,%/+-][0-9a-z.,%/+ \t-]*\)$").unwrap()
});

/// Reference to another custom property: `var(--name)`.
pub(crate) static VAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^var\(--[A-Za-z0-9_-]+\)$").unwrap());

/// Bare alphabetic token, taken as a named color.
pub(crate) static NAMED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]+$").unwrap());
