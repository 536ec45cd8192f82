//! Naive plural handling
//!
//! Only used after a direct lookup has missed. The rules are deliberately
//! simple: a trailing "s" marks a plural on the source side, and the output
//! side follows a handful of English spelling rules. There is no attempt at
//! real morphology.
//!
//! The two directions are asymmetric. Source → target re-pluralizes the
//! translated word ("batatas" → "potatoes"); target → source returns the
//! singular source word ("potatoes" → "batata").

use tracing::debug;

use super::lexicon::{Direction, LexiconTable};
use super::normalize::looks_plural;

/// Irregular plurals, as `(singular, plural)` suffixes. Checked in both
/// directions before the regular rules.
const IRREGULAR_PLURALS: &[(&str, &str)] = &[("potato", "potatoes")];

/// Endings that take "es" in the plural. Depluralizing removes the whole
/// ending ("ches", "shes", ...) rather than only the "es".
const SIBILANT_ENDINGS: &[&str] = &["ch", "sh", "s", "x", "z"];

/// Look up the singular form of a plural-looking `key` and inflect the result.
///
/// `key` is a normalized token whose direct lookup in `table` failed.
/// Returns `None` if no singular candidate is in the table either.
pub fn inflected_lookup(key: &str, table: &LexiconTable, direction: Direction) -> Option<String> {
    match direction {
        Direction::SourceToTarget => {
            if !looks_plural(key) {
                return None;
            }
            let singular = &key[..key.len() - 1];
            let target = table.lookup_word(singular)?;
            let plural = pluralize(target, table);
            debug!("Plural '{}' → '{}' → '{}'", key, singular, plural);
            Some(plural)
        }
        Direction::TargetToSource => {
            let singular = depluralize(key);
            if singular == key {
                return None;
            }
            // The source word stays singular
            let source = table.lookup_word(&singular)?;
            debug!("Plural '{}' → '{}' → '{}'", key, singular, source);
            Some(source.to_string())
        }
    }
}

/// Pluralize an output-language (English) word.
///
/// Rules, in order: uncountable nouns stay as they are; irregular plurals;
/// words ending in s/x/z/ch/sh take "es"; consonant + "y" becomes "ies";
/// everything else takes "s".
pub fn pluralize(word: &str, table: &LexiconTable) -> String {
    if table.is_uncountable(word) {
        return word.to_string();
    }

    let lower = word.to_lowercase();
    // Offsets found in `lower` only index `word` when the lengths agree
    let base = if lower.len() == word.len() {
        word
    } else {
        lower.as_str()
    };

    for (singular, plural) in IRREGULAR_PLURALS {
        if let Some(stem) = lower.strip_suffix(singular) {
            return format!("{}{}", &base[..stem.len()], plural);
        }
    }

    if SIBILANT_ENDINGS.iter().any(|ending| lower.ends_with(ending)) {
        return format!("{}es", base);
    }

    if ends_with_consonant_y(&lower) {
        return format!("{}ies", &base[..base.len() - 1]);
    }

    format!("{}s", base)
}

/// Guess the singular of a normalized output-language (English) word.
///
/// Irregular plurals first, then "ches/shes/xes/zes/ses" are removed whole,
/// then "ies" becomes "y", then a single trailing "s" is dropped. A word that
/// matches none of these is returned unchanged.
pub fn depluralize(key: &str) -> String {
    for (singular, plural) in IRREGULAR_PLURALS {
        if let Some(stem) = key.strip_suffix(plural) {
            return format!("{}{}", stem, singular);
        }
    }

    for ending in SIBILANT_ENDINGS {
        let suffix = format!("{}es", ending);
        if let Some(stem) = key.strip_suffix(suffix.as_str()) {
            return stem.to_string();
        }
    }

    if let Some(stem) = key.strip_suffix("ies") {
        return format!("{}y", stem);
    }

    if looks_plural(key) {
        return key[..key.len() - 1].to_string();
    }

    key.to_string()
}

fn ends_with_consonant_y(word: &str) -> bool {
    let mut chars = word.chars().rev();
    match (chars.next(), chars.next()) {
        (Some('y'), Some(before)) => !"aeiou".contains(before),
        _ => false,
    }
}
