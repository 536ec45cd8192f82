//! Accent- and case-insensitive lookup keys
//!
//! Every lexicon key and every runtime lookup goes through [`normalize`], which is
//! what lets "água", "agua" and "ÁGUA" resolve to the same entry.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::canonical_combining_class;

/// Lower-case `text` and strip its diacritics.
///
/// The text is decomposed (NFKD) and lower-cased, then decomposed again, and
/// every character with a non-zero canonical combining class is dropped. Base
/// letters, digits, punctuation and whitespace are kept as they are.
///
/// Lower-casing runs after the first decomposition because compatibility
/// forms such as "ℌ" decompose to upper-case letters. The second
/// decomposition catches lower-case mappings that carry a combining mark
/// ("İ" lower-cases to "i" plus a combining dot).
///
/// # Example
///
/// ```
/// use menu_translator::engine::normalize::normalize;
///
/// assert_eq!(normalize("ÁGUA"), "agua");
/// assert_eq!(normalize("Feijão"), "feijao");
/// ```
pub fn normalize(text: &str) -> String {
    let folded: String = text.nfkd().flat_map(char::to_lowercase).collect();
    folded
        .nfkd()
        .filter(|c| canonical_combining_class(*c) == 0)
        .collect()
}

/// [`normalize`] a multi-word span with its words joined by single spaces, the
/// form phrase keys are compared in.
pub(crate) fn normalize_words<'a>(words: impl IntoIterator<Item = &'a str>) -> String {
    normalize(&words.into_iter().collect::<Vec<_>>().join(" "))
}

/// Whether a normalized key ends in "s" and is long enough to be a naive plural.
pub(crate) fn looks_plural(key: &str) -> bool {
    key.chars().count() > 1 && key.ends_with('s')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_and_accent_erased() {
        assert_eq!(normalize("ÁGUA"), normalize("agua"));
        assert_eq!(normalize("Agua"), normalize("água"));
        assert_eq!(normalize("água"), "agua");
    }

    #[test]
    fn test_idempotent() {
        for text in [
            "Água com Gás",
            "PÃO",
            "cardápio",
            "Crème Brûlée",
            "",
            "  x  ",
            "ℌ",
            "𝐀GUA",
            "İ",
            "ﬁ",
        ] {
            let once = normalize(text);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", text);
        }
    }

    #[test]
    fn test_compatibility_capitals_are_lowered() {
        assert_eq!(normalize("ℌ"), "h");
        assert_eq!(normalize("𝐀GUA"), "agua");
        assert_eq!(normalize("İ"), "i");
    }

    #[test]
    fn test_normalize_words_collapses_whitespace() {
        assert_eq!(normalize_words("Batata  \tFrita".split_whitespace()), "batata frita");
        assert_eq!(normalize_words(["Água", "com", "Gás"]), "agua com gas");
    }

    #[test]
    fn test_decomposed_input_matches_precomposed() {
        // "a" followed by COMBINING ACUTE ACCENT
        assert_eq!(normalize("a\u{0301}gua"), "agua");
    }

    #[test]
    fn test_leaves_digits_punctuation_and_whitespace() {
        assert_eq!(normalize("Menu 2, Pão  Francês."), "menu 2, pao  frances.");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_looks_plural() {
        assert!(looks_plural("batatas"));
        assert!(!looks_plural("s"));
        assert!(!looks_plural("batata"));
        assert!(!looks_plural(""));
    }
}
