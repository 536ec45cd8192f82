//! Translation of one menu item
//!
//! [`Translator`] ties the engine together for a single line:
//!
//! 1. detect the direction of the line
//! 2. substitute known phrases for that direction
//! 3. split on whitespace and translate each token by direct lookup, falling
//!    back to plural handling on a miss
//! 4. reapply the casing of each translated token
//! 5. join the tokens with single spaces
//!
//! Tokens that cannot be translated are kept exactly as typed, so the output
//! never loses a word.

use std::sync::Arc;

use tracing::debug;

use super::casing::match_casing;
use super::direction::{self, DirectionScore};
use super::lexicon::{Direction, Lexicon, LexiconTable};
use super::morphology::inflected_lookup;
use super::normalize::normalize;
use super::phrase::replace_phrases;

/// The result of translating one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    /// Translated text, casing matched to the input
    pub text: String,
    /// Direction the item was translated in
    pub direction: Direction,
    /// Detection scores; `None` when the direction was forced by the caller
    pub score: Option<DirectionScore>,
}

/// Translates menu items with a shared, read-only lexicon.
///
/// Cloning is cheap and clones share the lexicon, so one translator can be
/// handed to as many threads as needed.
///
/// # Example
///
/// ```
/// use menu_translator::Translator;
///
/// let translator = Translator::builtin();
/// assert_eq!(translator.translate("Batatas com Queijo"), "Potatoes with Cheese");
/// assert_eq!(translator.translate("french fries"), "batata frita");
/// ```
#[derive(Debug, Clone)]
pub struct Translator {
    lexicon: Arc<Lexicon>,
}

impl Translator {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// A translator over the built-in Portuguese ⇄ English lexicon.
    pub fn builtin() -> Self {
        Self::new(Arc::new(Lexicon::builtin()))
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Translate `item`, detecting its language first.
    pub fn translate(&self, item: &str) -> String {
        let direction = direction::detect_direction(item, &self.lexicon);
        self.translate_with(direction, item)
    }

    /// Translate `item`, detecting its language first, and report the direction
    /// and detection scores alongside the text.
    pub fn translate_detailed(&self, item: &str) -> Translation {
        let score = direction::score(item, &self.lexicon);
        let direction = score.winner();
        Translation {
            text: self.translate_with(direction, item),
            direction,
            score: Some(score),
        }
    }

    /// Like [`translate_with`](Self::translate_with), wrapped in a
    /// [`Translation`] without detection scores.
    pub fn translate_detailed_with(&self, direction: Direction, item: &str) -> Translation {
        Translation {
            text: self.translate_with(direction, item),
            direction,
            score: None,
        }
    }

    /// Translate `item` in a fixed `direction`, skipping detection.
    pub fn translate_with(&self, direction: Direction, item: &str) -> String {
        let table = self.lexicon.table(direction);
        let phrased = replace_phrases(item, table);

        phrased
            .split_whitespace()
            .map(|token| translate_token(token, table, direction))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Translate a single token, or return it untouched if it is unknown.
fn translate_token(token: &str, table: &LexiconTable, direction: Direction) -> String {
    let key = normalize(token);
    let translated = match table.lookup_word(&key) {
        Some(word) => Some(word.to_string()),
        None => inflected_lookup(&key, table, direction),
    };

    match translated {
        Some(word) => match_casing(token, &word),
        None => {
            debug!("No translation for '{}'", token);
            token.to_string()
        }
    }
}
