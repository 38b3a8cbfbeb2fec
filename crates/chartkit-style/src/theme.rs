//! Theme configuration types.
//!
//! A [`ThemeConfig`] maps semantic keys (`desktop`, `mobile`, ...) to a
//! [`ThemeEntry`]. Keys keep their insertion order so the generated
//! stylesheet is deterministic.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// MODES
// =============================================================================

/// Rendering variant of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Default (light) rendering, unprefixed selector.
    Normal,
    /// Dark rendering, selector prefixed with `.dark`.
    Dark,
}

impl Mode {
    /// Every mode, in output order.
    pub const ALL: [Mode; 2] = [Mode::Normal, Mode::Dark];

    /// Selector prefix placed in front of `[data-chart=...]`.
    pub const fn selector_prefix(self) -> &'static str {
        match self {
            Mode::Normal => "",
            Mode::Dark => ".dark",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Mode::Normal => "normal",
            Mode::Dark => "dark",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// ENTRIES
// =============================================================================

/// Color source of a theme entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeColor {
    /// One color for every mode.
    Flat(String),
    /// Per-mode colors. A missing mode falls back to `fallback`.
    PerMode {
        light: Option<String>,
        dark: Option<String>,
        fallback: Option<String>,
    },
    /// No color at all; the entry contributes nothing.
    Inert,
}

impl ThemeColor {
    /// Candidate color for `mode`, before validation.
    pub fn resolve(&self, mode: Mode) -> Option<&str> {
        match self {
            ThemeColor::Flat(color) => Some(color.as_str()),
            ThemeColor::PerMode {
                light,
                dark,
                fallback,
            } => {
                let specific = match mode {
                    Mode::Normal => light,
                    Mode::Dark => dark,
                };
                specific.as_deref().or(fallback.as_deref())
            }
            ThemeColor::Inert => None,
        }
    }

    pub fn is_inert(&self) -> bool {
        matches!(self, ThemeColor::Inert)
    }

    /// Whether any mode resolves to a candidate color.
    pub fn has_color(&self) -> bool {
        Mode::ALL.into_iter().any(|mode| self.resolve(mode).is_some())
    }
}

/// One semantic key's entry in a [`ThemeConfig`].
///
/// Serialized as `{ label?, color?, theme?: { light?, dark? } }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawThemeEntry", into = "RawThemeEntry")]
pub struct ThemeEntry {
    /// Display name for legends and tooltips. Never emitted as CSS.
    pub label: Option<String>,
    pub color: ThemeColor,
}

impl ThemeEntry {
    pub fn flat(color: impl Into<String>) -> Self {
        Self {
            label: None,
            color: ThemeColor::Flat(color.into()),
        }
    }

    pub fn per_mode(light: impl Into<String>, dark: impl Into<String>) -> Self {
        Self {
            label: None,
            color: ThemeColor::PerMode {
                light: Some(light.into()),
                dark: Some(dark.into()),
                fallback: None,
            },
        }
    }

    pub fn inert() -> Self {
        Self {
            label: None,
            color: ThemeColor::Inert,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Wire shape of a theme entry, where `color` and `theme` may co-exist.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct RawThemeEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    theme: Option<RawModeColors>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct RawModeColors {
    #[serde(skip_serializing_if = "Option::is_none")]
    light: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dark: Option<String>,
}

impl From<RawThemeEntry> for ThemeEntry {
    fn from(raw: RawThemeEntry) -> Self {
        let color = match (raw.theme, raw.color) {
            (Some(theme), fallback) => ThemeColor::PerMode {
                light: theme.light,
                dark: theme.dark,
                fallback,
            },
            (None, Some(color)) => ThemeColor::Flat(color),
            (None, None) => ThemeColor::Inert,
        };
        Self {
            label: raw.label,
            color,
        }
    }
}

impl From<ThemeEntry> for RawThemeEntry {
    fn from(entry: ThemeEntry) -> Self {
        let (color, theme) = match entry.color {
            ThemeColor::Flat(color) => (Some(color), None),
            ThemeColor::PerMode {
                light,
                dark,
                fallback,
            } => (fallback, Some(RawModeColors { light, dark })),
            ThemeColor::Inert => (None, None),
        };
        Self {
            label: entry.label,
            color,
            theme,
        }
    }
}

// =============================================================================
// CONFIG
// =============================================================================

/// Insertion-ordered mapping from semantic key to [`ThemeEntry`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeConfig(IndexMap<String, ThemeEntry>);

impl ThemeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an entry. A replaced key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, entry: ThemeEntry) -> Option<ThemeEntry> {
        self.0.insert(key.into(), entry)
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, entry: ThemeEntry) -> Self {
        self.insert(key, entry);
        self
    }

    pub fn get(&self, key: &str) -> Option<&ThemeEntry> {
        self.0.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ThemeEntry)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether at least one entry resolves to a candidate color in some mode.
    pub fn has_colors(&self) -> bool {
        self.0.values().any(|entry| entry.color.has_color())
    }
}

impl<K: Into<String>> FromIterator<(K, ThemeEntry)> for ThemeConfig {
    fn from_iter<I: IntoIterator<Item = (K, ThemeEntry)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_prefixes() {
        assert_eq!(Mode::Normal.selector_prefix(), "");
        assert_eq!(Mode::Dark.selector_prefix(), ".dark");
        assert_eq!(Mode::ALL, [Mode::Normal, Mode::Dark]);
    }

    #[test]
    fn flat_resolves_for_every_mode() {
        let color = ThemeColor::Flat("#fff".into());
        assert_eq!(color.resolve(Mode::Normal), Some("#fff"));
        assert_eq!(color.resolve(Mode::Dark), Some("#fff"));
    }

    #[test]
    fn per_mode_prefers_mode_value_then_fallback() {
        let color = ThemeColor::PerMode {
            light: Some("#111".into()),
            dark: None,
            fallback: Some("#999".into()),
        };
        assert_eq!(color.resolve(Mode::Normal), Some("#111"));
        assert_eq!(color.resolve(Mode::Dark), Some("#999"));
    }

    #[test]
    fn per_mode_without_fallback_leaves_mode_unresolved() {
        let color = ThemeColor::PerMode {
            light: None,
            dark: Some("#eee".into()),
            fallback: None,
        };
        assert_eq!(color.resolve(Mode::Normal), None);
        assert_eq!(color.resolve(Mode::Dark), Some("#eee"));
        assert!(color.has_color());
    }

    #[test]
    fn inert_resolves_nothing() {
        assert_eq!(ThemeColor::Inert.resolve(Mode::Normal), None);
        assert!(ThemeColor::Inert.is_inert());
        assert!(!ThemeColor::Inert.has_color());
    }

    #[test]
    fn deserializes_all_entry_shapes() {
        let config: ThemeConfig = serde_json::from_str(
            r##"{
                "desktop": { "label": "Desktop", "color": "#2563eb" },
                "mobile": { "theme": { "light": "#60a5fa", "dark": "#93c5fd" } },
                "tablet": { "color": "#999", "theme": { "dark": "#000" } },
                "other": { "label": "Other" }
            }"##,
        )
        .unwrap();

        assert_eq!(
            config.get("desktop"),
            Some(&ThemeEntry::flat("#2563eb").with_label("Desktop"))
        );
        assert_eq!(
            config.get("mobile"),
            Some(&ThemeEntry::per_mode("#60a5fa", "#93c5fd"))
        );
        assert_eq!(
            config.get("tablet").unwrap().color,
            ThemeColor::PerMode {
                light: None,
                dark: Some("#000".into()),
                fallback: Some("#999".into()),
            }
        );
        assert!(config.get("other").unwrap().color.is_inert());
    }

    #[test]
    fn deserialization_preserves_key_order() {
        let config: ThemeConfig = serde_json::from_str(
            r##"{ "zeta": { "color": "red" }, "alpha": { "color": "blue" }, "mid": {} }"##,
        )
        .unwrap();
        let keys: Vec<&str> = config.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn serializes_back_to_wire_shape() {
        let config = ThemeConfig::new()
            .with("a", ThemeEntry::flat("#fff"))
            .with("b", ThemeEntry::per_mode("#111", "#eee").with_label("B"));
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(
            json,
            r##"{"a":{"color":"#fff"},"b":{"label":"B","theme":{"light":"#111","dark":"#eee"}}}"##
        );
    }

    #[test]
    fn replacing_a_key_keeps_its_position() {
        let mut config = ThemeConfig::new()
            .with("a", ThemeEntry::flat("red"))
            .with("b", ThemeEntry::flat("blue"));
        config.insert("a", ThemeEntry::flat("green"));
        let keys: Vec<&str> = config.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["a", "b"]);
        assert_eq!(config.get("a"), Some(&ThemeEntry::flat("green")));
    }

    #[test]
    fn has_colors_ignores_inert_entries() {
        let config: ThemeConfig = [("a", ThemeEntry::inert()), ("b", ThemeEntry::inert())]
            .into_iter()
            .collect();
        assert!(!config.has_colors());
        assert!(config.with("c", ThemeEntry::flat("red")).has_colors());
    }
}
