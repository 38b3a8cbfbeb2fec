//! Identifier sanitization for CSS selector values and custom-property names.
//!
//! Chart scope ids end up inside `[data-chart=...]` and theme keys inside
//! `--color-...`. Both are reduced to `[A-Za-z0-9_-]` so neither can close
//! the selector, the declaration or the surrounding `<style>` element.

/// Returns `true` for characters allowed in a sanitized identifier.
#[inline]
pub fn is_identifier_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == '-'
}

/// Strip every character outside `[A-Za-z0-9_-]`.
///
/// Never fails; an input made only of disallowed characters yields an empty
/// string, which callers must treat as "no identifier".
pub fn sanitize_identifier(input: &str) -> String {
    input.chars().filter(|&c| is_identifier_char(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn keeps_safe_identifiers_unchanged() {
        assert_eq!(sanitize_identifier("chart1"), "chart1");
        assert_eq!(sanitize_identifier("brand-color_2"), "brand-color_2");
        assert_eq!(sanitize_identifier("ABC-xyz"), "ABC-xyz");
    }

    #[test]
    fn strips_selector_breaking_characters() {
        assert_eq!(
            sanitize_identifier("chart1; } </style><script>"),
            "chart1stylescript"
        );
        assert_eq!(sanitize_identifier("a]b[c=d\"e'f"), "abcdef");
        assert_eq!(sanitize_identifier("with space\tand\nnewline"), "withspaceandnewline");
    }

    #[test]
    fn strips_non_ascii() {
        assert_eq!(sanitize_identifier("café"), "caf");
        assert_eq!(sanitize_identifier("图表"), "");
        assert_eq!(sanitize_identifier("ｃｈａｒｔ"), "");
    }

    #[test]
    fn pathological_input_becomes_empty() {
        assert_eq!(sanitize_identifier(""), "");
        assert_eq!(sanitize_identifier("<>{};:'\" "), "");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn output_only_contains_identifier_chars(input in any::<String>()) {
            let out = sanitize_identifier(&input);
            prop_assert!(out.chars().all(is_identifier_char));
        }

        #[test]
        fn output_is_never_longer(input in any::<String>()) {
            prop_assert!(sanitize_identifier(&input).len() <= input.len());
        }

        #[test]
        fn sanitizing_is_idempotent(input in any::<String>()) {
            let once = sanitize_identifier(&input);
            prop_assert_eq!(sanitize_identifier(&once), once.clone());
        }
    }
}
