//! Casing reapplication
//!
//! Lookups are case-insensitive, so the casing of a translated unit has to be
//! recovered from the text it replaces. The rule is applied per replaced word
//! or phrase, never to a whole line.

/// Mirror the casing style of `source` onto `target`.
///
/// - ALL CAPS source: the target is upper-cased.
/// - Title Case source: every word of the target is capitalized.
/// - Anything else (lower-case, mixed): the target is returned unchanged.
///
/// ```
/// use menu_translator::engine::casing::match_casing;
///
/// assert_eq!(match_casing("AGUA", "water"), "WATER");
/// assert_eq!(match_casing("Batata Frita", "french fries"), "French Fries");
/// assert_eq!(match_casing("carne", "beef"), "beef");
/// ```
pub fn match_casing(source: &str, target: &str) -> String {
    if is_upper(source) {
        return target.to_uppercase();
    }
    if is_title(source) {
        return target
            .split_whitespace()
            .map(capitalize)
            .collect::<Vec<_>>()
            .join(" ");
    }
    target.to_string()
}

/// At least one cased character and no lower-case ones.
pub fn is_upper(text: &str) -> bool {
    let mut has_cased = false;
    for c in text.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_cased = true;
        }
    }
    has_cased
}

/// Every run of cased characters starts with an upper-case letter and
/// continues in lower case, and there is at least one cased character.
pub fn is_title(text: &str) -> bool {
    let mut has_cased = false;
    let mut previous_cased = false;
    for c in text.chars() {
        if c.is_uppercase() {
            if previous_cased {
                return false;
            }
            previous_cased = true;
            has_cased = true;
        } else if c.is_lowercase() {
            if !previous_cased {
                return false;
            }
            previous_cased = true;
            has_cased = true;
        } else {
            previous_cased = false;
        }
    }
    has_cased
}

/// First character upper-cased, the rest lower-cased.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
