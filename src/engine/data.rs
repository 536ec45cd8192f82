//! Bilingual lexicon data
//!
//! [`LexiconData`] is the plain description of a lexicon: the
//! forward (source → target) word and phrase lists plus the uncountable nouns
//! of each language. The reverse tables are derived from it by
//! [`Lexicon`](super::lexicon::Lexicon), so only one direction is written down.
//!
//! Entry order matters. When several entries collapse onto the same
//! normalized key, the first one wins.

use serde::Deserialize;

use super::error::{LexiconError, LexiconResult};
use super::normalize::normalize;

/// Built-in Portuguese → English words.
///
/// Plurals are left to the morphology fallback; only irregular ones are listed.
const PT_EN_WORDS: &[(&str, &str)] = &[
    ("cardápio", "menu"),
    ("menu", "menu"),
    ("entrada", "starter"),
    ("principal", "main"),
    ("sobremesa", "dessert"),
    ("bebida", "drink"),
    ("água", "water"),
    ("suco", "juice"),
    ("refrigerante", "soda"),
    ("cerveja", "beer"),
    ("vinho", "wine"),
    ("café", "coffee"),
    ("chá", "tea"),
    ("pão", "bread"),
    ("manteiga", "butter"),
    ("queijo", "cheese"),
    ("frango", "chicken"),
    ("carne", "beef"),
    ("porco", "pork"),
    ("peixe", "fish"),
    ("salada", "salad"),
    ("sopa", "soup"),
    ("massa", "pasta"),
    ("molho", "sauce"),
    ("tomate", "tomato"),
    ("batata", "potato"),
    ("arroz", "rice"),
    // feijão is usually served as a plural dish on English menus
    ("feijão", "beans"),
    ("feijões", "beans"),
    ("com", "with"),
    ("sem", "without"),
    ("e", "and"),
    ("de", "of"),
];

/// Built-in Portuguese → English idioms, translated as a unit.
const PT_EN_PHRASES: &[(&str, &str)] = &[
    ("prato principal", "main course"),
    ("água com gás", "sparkling water"),
    ("águas com gás", "sparkling water"),
    ("água sem gás", "still water"),
    ("batata frita", "french fries"),
    ("batatas fritas", "french fries"),
    ("molho de tomate", "tomato sauce"),
    ("arroz e feijão", "rice and beans"),
];

const PT_UNCOUNTABLE: &[&str] = &["arroz", "peixe", "água", "café", "chá", "pão"];

const EN_UNCOUNTABLE: &[&str] = &["rice", "fish", "water", "coffee", "tea", "bread"];

/// Uncountable nouns of each language of the pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UncountableNouns {
    /// Source-language nouns
    #[serde(default)]
    pub source: Vec<String>,
    /// Target-language nouns
    #[serde(default)]
    pub target: Vec<String>,
}

/// The source description of a bilingual lexicon.
///
/// # JSON form
///
/// ```json
/// {
///     "source_language": "pt",
///     "target_language": "en",
///     "words": [["água", "water"], ["batata", "potato"]],
///     "phrases": [["água com gás", "sparkling water"]],
///     "uncountable": { "source": ["água"], "target": ["water"] }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LexiconData {
    /// Language code of the source side (e.g. "pt")
    pub source_language: String,
    /// Language code of the target side (e.g. "en")
    pub target_language: String,
    /// Single-word entries, source → target, in insertion order
    pub words: Vec<(String, String)>,
    /// Multi-word idioms, source → target, in insertion order
    #[serde(default)]
    pub phrases: Vec<(String, String)>,
    #[serde(default)]
    pub uncountable: UncountableNouns,
}

impl LexiconData {
    /// The built-in Portuguese ⇄ English menu lexicon.
    pub fn builtin() -> Self {
        fn pairs(entries: &[(&str, &str)]) -> Vec<(String, String)> {
            entries
                .iter()
                .map(|(source, target)| (source.to_string(), target.to_string()))
                .collect()
        }
        fn words(entries: &[&str]) -> Vec<String> {
            entries.iter().map(|w| w.to_string()).collect()
        }

        LexiconData {
            source_language: "pt".to_string(),
            target_language: "en".to_string(),
            words: pairs(PT_EN_WORDS),
            phrases: pairs(PT_EN_PHRASES),
            uncountable: UncountableNouns {
                source: words(PT_UNCOUNTABLE),
                target: words(EN_UNCOUNTABLE),
            },
        }
    }

    /// Parse lexicon data from its JSON form.
    pub fn from_json_str(json: &str) -> LexiconResult<Self> {
        serde_json::from_str(json).map_err(|e| LexiconError::Parse(e.to_string()))
    }

    /// Check every entry against the lexicon rules.
    ///
    /// - word entries must be a single non-empty token on both sides
    /// - phrase sources must have at least two tokens, phrase targets must not be empty
    /// - uncountable nouns must not be empty
    pub fn validate(&self) -> LexiconResult<()> {
        for (index, (source, target)) in self.words.iter().enumerate() {
            for (side, text) in [("source", source), ("target", target)] {
                if token_count(text) != 1 {
                    return Err(LexiconError::InvalidEntry(format!(
                        "word #{} has {} '{}' that is not a single word",
                        index, side, text
                    )));
                }
            }
        }

        for (index, (source, target)) in self.phrases.iter().enumerate() {
            if token_count(&normalize(source)) < 2 {
                return Err(LexiconError::InvalidEntry(format!(
                    "phrase #{} '{}' has fewer than two words",
                    index, source
                )));
            }
            if target.trim().is_empty() {
                return Err(LexiconError::InvalidEntry(format!(
                    "phrase #{} '{}' has an empty translation",
                    index, source
                )));
            }
        }

        for (side, nouns) in [
            ("source", &self.uncountable.source),
            ("target", &self.uncountable.target),
        ] {
            if let Some(index) = nouns.iter().position(|w| w.trim().is_empty()) {
                return Err(LexiconError::InvalidEntry(format!(
                    "{} uncountable noun #{} is empty",
                    side, index
                )));
            }
        }

        Ok(())
    }
}

fn token_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_is_valid() {
        assert!(LexiconData::builtin().validate().is_ok());
    }

    #[test]
    fn test_builtin_has_no_regular_plural_for_batata() {
        let data = LexiconData::builtin();
        assert!(data.words.iter().all(|(source, _)| source != "batatas"));
        assert!(data.words.iter().any(|(source, _)| source == "batata"));
    }

    #[test]
    fn test_from_json_str() {
        let json = r#"{
            "source_language": "es",
            "target_language": "en",
            "words": [["agua", "water"], ["pan", "bread"]],
            "phrases": [["agua con gas", "sparkling water"]]
        }"#;
        let data = LexiconData::from_json_str(json).unwrap();
        assert_eq!(data.source_language, "es");
        assert_eq!(data.words.len(), 2);
        assert_eq!(data.words[1], ("pan".to_string(), "bread".to_string()));
        assert_eq!(data.phrases.len(), 1);
        assert!(data.uncountable.source.is_empty());
        assert!(data.validate().is_ok());
    }

    #[test]
    fn test_from_json_str_rejects_bad_shape() {
        let err = LexiconData::from_json_str(r#"{"words": "agua"}"#).unwrap_err();
        assert!(matches!(err, LexiconError::Parse(_)));
    }

    #[test]
    fn test_validate_rejects_multi_word_word_entry() {
        let mut data = LexiconData::builtin();
        data.words.push(("pão de queijo".to_string(), "cheese bread".to_string()));
        match data.validate() {
            Err(LexiconError::InvalidEntry(msg)) => assert!(msg.contains("pão de queijo")),
            other => panic!("expected InvalidEntry, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_single_word_phrase() {
        let mut data = LexiconData::builtin();
        data.phrases.push(("sobremesa".to_string(), "dessert".to_string()));
        assert!(matches!(data.validate(), Err(LexiconError::InvalidEntry(_))));
    }

    #[test]
    fn test_validate_rejects_empty_translation() {
        let mut data = LexiconData::builtin();
        data.words.push(("vinho".to_string(), "  ".to_string()));
        assert!(matches!(data.validate(), Err(LexiconError::InvalidEntry(_))));

        let mut data = LexiconData::builtin();
        data.phrases.push(("vinho tinto".to_string(), "".to_string()));
        assert!(matches!(data.validate(), Err(LexiconError::InvalidEntry(_))));
    }

    #[test]
    fn test_validate_reports_uncountable_side_and_index() {
        let mut data = LexiconData::builtin();
        data.uncountable.target.push(" ".to_string());
        let expected = format!(
            "target uncountable noun #{} is empty",
            data.uncountable.target.len() - 1
        );
        match data.validate() {
            Err(LexiconError::InvalidEntry(msg)) => assert_eq!(msg, expected),
            other => panic!("expected InvalidEntry, got {:?}", other),
        }

        let mut data = LexiconData::builtin();
        data.uncountable.source.insert(0, String::new());
        match data.validate() {
            Err(LexiconError::InvalidEntry(msg)) => {
                assert_eq!(msg, "source uncountable noun #0 is empty")
            }
            other => panic!("expected InvalidEntry, got {:?}", other),
        }
    }
}
