//! Console helpers for the `menu-translator` binary
//!
//! Everything here is input/output plumbing around the engine: tidying raw
//! items before translation and assembling the translated items into one
//! sentence afterwards.

use std::sync::LazyLock;

use regex::Regex;

use crate::engine::Direction;

static TRAILING_PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,\s.]+$").expect("trailing punctuation pattern is valid"));

/// Strip surrounding whitespace and any trailing commas or dots from a raw item.
///
/// ```
/// use menu_translator::shell::clean_item;
///
/// assert_eq!(clean_item("  Arroz e feijão.  "), "Arroz e feijão");
/// assert_eq!(clean_item("batata frita, "), "batata frita");
/// ```
pub fn clean_item(raw: &str) -> String {
    TRAILING_PUNCTUATION.replace(raw.trim(), "").trim().to_string()
}

/// Join translated items into a single sentence: items separated by ". " and
/// exactly one final period.
pub fn join_items(items: &[String]) -> String {
    let mut sentence = items.join(". ").trim().to_string();
    if !sentence.ends_with('.') {
        sentence.push('.');
    }
    sentence
}

/// Map a `--direction` value to a forced direction. `auto` (and anything
/// unrecognized) means the direction is detected per item.
pub fn forced_direction(mode: &str) -> Option<Direction> {
    match mode {
        "forward" => Some(Direction::SourceToTarget),
        "reverse" => Some(Direction::TargetToSource),
        _ => None,
    }
}

/// Title line of the interactive session, e.g. `PT <-> EN`.
pub fn banner(source_language: &str, target_language: &str) -> String {
    format!(
        "=== Menu Translator ({} <-> {}, auto-detect + basic plurals) ===",
        source_language.to_uppercase(),
        target_language.to_uppercase()
    )
}

/// Usage notes printed before the first prompt.
pub const INSTRUCTIONS: &str = "Instructions:
- Type ONE menu item per line (either language).
- Accents are optional; trailing comma or dot is accepted.
- Press ENTER with no input to finish.
";

/// Prompt shown before each interactive item.
pub const PROMPT: &str = "Item (ENTER to finish): ";

/// Printed instead of a translation when no item was entered.
pub const NO_ITEMS: &str = "No items provided.";
