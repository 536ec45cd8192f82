//! Bidirectional word and phrase tables
//!
//! A [`Lexicon`] holds one [`LexiconTable`] per [`Direction`]. Both are built
//! once from [`LexiconData`] and are read-only afterwards, so a lexicon can be
//! shared between threads behind an `Arc` without locking.
//!
//! The reverse (target → source) table is derived by inverting the forward
//! lists. Inversion is lossy when several source entries translate to the same
//! target text: the first inserted entry keeps the reverse mapping.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use super::data::LexiconData;
use super::error::LexiconResult;
use super::normalize::normalize;

/// Orientation of one translation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Source language → target language (pt → en in the built-in data)
    #[default]
    SourceToTarget,
    /// Target language → source language (en → pt in the built-in data)
    TargetToSource,
}

impl Direction {
    pub fn reverse(self) -> Self {
        match self {
            Direction::SourceToTarget => Direction::TargetToSource,
            Direction::TargetToSource => Direction::SourceToTarget,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::SourceToTarget => write!(f, "source-to-target"),
            Direction::TargetToSource => write!(f, "target-to-source"),
        }
    }
}

/// Lookup tables for one direction, keyed by normalized text.
#[derive(Debug, Clone, Default)]
pub struct LexiconTable {
    words: HashMap<String, String>,
    phrases: HashMap<String, String>,
    /// Phrase keys, longest first; ties keep insertion order
    phrase_keys: Vec<String>,
    /// Uncountable nouns of this direction's output language, normalized
    uncountable: HashSet<String>,
}

impl LexiconTable {
    fn new<'a>(
        words: impl IntoIterator<Item = (&'a str, &'a str)>,
        phrases: impl IntoIterator<Item = (&'a str, &'a str)>,
        uncountable: impl IntoIterator<Item = &'a str>,
        direction: Direction,
    ) -> Self {
        let mut table = LexiconTable::default();

        for (source, target) in words {
            insert_first_wins(&mut table.words, normalize(source), target, direction);
        }

        for (source, target) in phrases {
            let key = normalize(source);
            if key.split_whitespace().count() < 2 {
                // Inverting a phrase can produce a single word on this side.
                // Single words belong to the word table, never to the phrase pass.
                debug!(
                    "Skipping {} phrase '{}': fewer than two words",
                    direction, source
                );
                continue;
            }
            if insert_first_wins(&mut table.phrases, key.clone(), target, direction) {
                table.phrase_keys.push(key);
            }
        }
        // Stable sort, so equal lengths stay in insertion order
        table
            .phrase_keys
            .sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));

        table.uncountable = uncountable.into_iter().map(normalize).collect();
        table
    }

    /// Translate a single normalized word.
    pub fn lookup_word(&self, key: &str) -> Option<&str> {
        self.words.get(key).map(String::as_str)
    }

    /// Translate a normalized multi-word phrase.
    pub fn lookup_phrase(&self, key: &str) -> Option<&str> {
        self.phrases.get(key).map(String::as_str)
    }

    /// Phrase keys ordered so that a longer idiom is always tried before any
    /// shorter phrase it contains.
    pub fn phrase_keys_by_descending_length(&self) -> &[String] {
        &self.phrase_keys
    }

    /// Whether `word` is an uncountable noun of this direction's output
    /// language. Compared by normalized form.
    pub fn is_uncountable(&self, word: &str) -> bool {
        self.uncountable.contains(&normalize(word))
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn phrase_count(&self) -> usize {
        self.phrases.len()
    }
}

/// Insert `key → value` unless `key` is already mapped. Returns whether the
/// entry was inserted.
fn insert_first_wins(
    map: &mut HashMap<String, String>,
    key: String,
    value: &str,
    direction: Direction,
) -> bool {
    match map.entry(key) {
        Entry::Vacant(slot) => {
            slot.insert(value.to_string());
            true
        }
        Entry::Occupied(existing) => {
            if existing.get() != value {
                match direction {
                    // Several source words collapsing onto one target word is expected
                    Direction::TargetToSource => debug!(
                        "'{}' already maps to '{}', ignoring '{}'",
                        existing.key(),
                        existing.get(),
                        value
                    ),
                    Direction::SourceToTarget => warn!(
                        "Duplicate lexicon key '{}': keeping '{}', ignoring '{}'",
                        existing.key(),
                        existing.get(),
                        value
                    ),
                }
            }
            false
        }
    }
}

/// An immutable bilingual lexicon.
#[derive(Debug, Clone)]
pub struct Lexicon {
    source_language: String,
    target_language: String,
    forward: LexiconTable,
    reverse: LexiconTable,
}

impl Lexicon {
    /// The built-in Portuguese ⇄ English menu lexicon.
    pub fn builtin() -> Self {
        Self::build(&LexiconData::builtin())
    }

    /// Validate `data` and build both direction tables from it.
    pub fn from_data(data: &LexiconData) -> LexiconResult<Self> {
        data.validate()?;
        Ok(Self::build(data))
    }

    fn build(data: &LexiconData) -> Self {
        fn pairs(entries: &[(String, String)]) -> Vec<(&str, &str)> {
            entries
                .iter()
                .map(|(source, target)| (source.as_str(), target.as_str()))
                .collect()
        }
        let words = pairs(&data.words);
        let phrases = pairs(&data.phrases);

        let forward = LexiconTable::new(
            words.iter().copied(),
            phrases.iter().copied(),
            data.uncountable.target.iter().map(String::as_str),
            Direction::SourceToTarget,
        );
        let reverse = LexiconTable::new(
            words.iter().map(|&(source, target)| (target, source)),
            phrases.iter().map(|&(source, target)| (target, source)),
            data.uncountable.source.iter().map(String::as_str),
            Direction::TargetToSource,
        );

        debug!(
            "Built {}-{} lexicon: {} words / {} phrases forward, {} words / {} phrases reverse",
            data.source_language,
            data.target_language,
            forward.word_count(),
            forward.phrase_count(),
            reverse.word_count(),
            reverse.phrase_count()
        );

        Lexicon {
            source_language: data.source_language.clone(),
            target_language: data.target_language.clone(),
            forward,
            reverse,
        }
    }

    /// The tables used when translating in `direction`.
    pub fn table(&self, direction: Direction) -> &LexiconTable {
        match direction {
            Direction::SourceToTarget => &self.forward,
            Direction::TargetToSource => &self.reverse,
        }
    }

    pub fn source_language(&self) -> &str {
        &self.source_language
    }

    pub fn target_language(&self) -> &str {
        &self.target_language
    }

    /// `(from, to)` language codes for `direction`.
    pub fn languages(&self, direction: Direction) -> (&str, &str) {
        match direction {
            Direction::SourceToTarget => (&self.source_language, &self.target_language),
            Direction::TargetToSource => (&self.target_language, &self.source_language),
        }
    }
}
