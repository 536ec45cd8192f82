//! Multi-word phrase substitution
//!
//! Idioms such as "água com gás" must be translated as a unit, before the
//! word-by-word pass can split them apart. [`replace_phrases`] works in two
//! tiers:
//!
//! 1. **Whole line** - if the entire input normalizes to a phrase key, the whole
//!    line is replaced and nothing else is scanned.
//! 2. **Sliding window** - otherwise the text is split into word runs (words
//!    separated only by whitespace) and, for each phrase key from longest to
//!    shortest, a window as wide as the key slides over every run. Matching
//!    windows are replaced and frozen, so a shorter key can never match inside
//!    or across a longer phrase that has already been substituted.
//!
//! ## Example
//!
//! ```text
//! "Prato de arroz e feijão, água com gás"
//!   runs:     [Prato de arroz e feijão] [água com gás]
//!   key "arroz e feijao" (14 chars) → "Prato de rice and beans, água com gás"
//!   key "agua com gas"   (12 chars) → "Prato de rice and beans, sparkling water"
//! ```

use tracing::debug;
use unicode_normalization::char::is_combining_mark;

use super::casing::match_casing;
use super::lexicon::LexiconTable;
use super::normalize::normalize_words;

/// A piece of the text being rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// Input text still eligible for phrase matching
    Open(String),
    /// A phrase translation; never scanned again
    Frozen(String),
}

impl Segment {
    fn into_text(self) -> String {
        match self {
            Segment::Open(text) | Segment::Frozen(text) => text,
        }
    }
}

/// Replace every known multi-word phrase in `text` with its casing-matched
/// translation from `table`, longest phrase first.
pub fn replace_phrases(text: &str, table: &LexiconTable) -> String {
    if let Some(target) = table.lookup_phrase(&normalize_words(text.split_whitespace())) {
        debug!("Whole line '{}' is the phrase '{}'", text, target);
        return match_casing(text, target);
    }

    let mut segments = vec![Segment::Open(text.to_string())];

    for key in table.phrase_keys_by_descending_length() {
        let Some(target) = table.lookup_phrase(key) else {
            continue;
        };
        let width = key.split_whitespace().count();
        if width < 2 {
            continue;
        }

        segments = segments
            .into_iter()
            .flat_map(|segment| match segment {
                Segment::Open(open) => replace_key(&open, key, width, target),
                frozen => vec![frozen],
            })
            .collect();
    }

    segments.into_iter().map(Segment::into_text).collect()
}

/// Replace every leftmost, non-overlapping window of `width` words in `text`
/// whose normalized form equals `key`. Words are compared joined by single
/// spaces, whatever whitespace separates them in `text`.
fn replace_key(text: &str, key: &str, width: usize, target: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    for run in word_runs(text) {
        let mut i = 0;
        while i + width <= run.len() {
            let start = run[i].0;
            let end = run[i + width - 1].1;
            let span = &text[start..end];
            let window = normalize_words(run[i..i + width].iter().map(|&(s, e)| &text[s..e]));

            if window == key {
                debug!("Phrase '{}' → '{}'", span, target);
                if start > cursor {
                    segments.push(Segment::Open(text[cursor..start].to_string()));
                }
                segments.push(Segment::Frozen(match_casing(span, target)));
                cursor = end;
                i += width;
            } else {
                i += 1;
            }
        }
    }

    if cursor < text.len() || segments.is_empty() {
        segments.push(Segment::Open(text[cursor..].to_string()));
    }
    segments
}

/// Letters (accented or not), digits, underscore, and combining marks, so that
/// decomposed accents stay inside their word.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || is_combining_mark(c)
}

/// Split `text` into runs of words separated only by whitespace.
///
/// Each word is a byte range into `text`. Any character that is neither a word
/// character nor whitespace ends the current run.
fn word_runs(text: &str) -> Vec<Vec<(usize, usize)>> {
    let mut runs = Vec::new();
    let mut run: Vec<(usize, usize)> = Vec::new();
    let mut word_start: Option<usize> = None;

    for (index, c) in text.char_indices() {
        if is_word_char(c) {
            if word_start.is_none() {
                word_start = Some(index);
            }
            continue;
        }
        if let Some(start) = word_start.take() {
            run.push((start, index));
        }
        if !c.is_whitespace() && !run.is_empty() {
            runs.push(std::mem::take(&mut run));
        }
    }

    if let Some(start) = word_start {
        run.push((start, text.len()));
    }
    if !run.is_empty() {
        runs.push(run);
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::data::LexiconData;
    use crate::engine::lexicon::{Direction, Lexicon};

    fn lexicon_with_phrases(phrases: &[(&str, &str)]) -> Lexicon {
        let mut data = LexiconData::builtin();
        data.phrases = phrases
            .iter()
            .map(|(s, t)| (s.to_string(), t.to_string()))
            .collect();
        Lexicon::from_data(&data).unwrap()
    }

    fn forward(text: &str) -> String {
        let lexicon = Lexicon::builtin();
        replace_phrases(text, lexicon.table(Direction::SourceToTarget))
    }

    fn words_of<'a>(text: &'a str, run: &[(usize, usize)]) -> Vec<&'a str> {
        run.iter().map(|&(s, e)| &text[s..e]).collect()
    }

    #[test]
    fn test_whole_line_phrase() {
        assert_eq!(forward("agua com gas"), "sparkling water");
        assert_eq!(forward("ÁGUA COM GÁS"), "SPARKLING WATER");
        assert_eq!(forward("Batata Frita"), "French Fries");
    }

    #[test]
    fn test_whole_line_mixed_casing_keeps_target() {
        assert_eq!(forward("Água com gás"), "sparkling water");
    }

    #[test]
    fn test_phrase_inside_line() {
        assert_eq!(forward("copo de água com gás"), "copo de sparkling water");
        assert_eq!(
            forward("frango com molho de tomate"),
            "frango com tomato sauce"
        );
    }

    #[test]
    fn test_extra_whitespace_inside_phrase() {
        assert_eq!(forward("Batata  Frita"), "French Fries");
        assert_eq!(forward("copo de água\tcom  gás"), "copo de sparkling water");
    }

    #[test]
    fn test_casing_is_per_phrase() {
        assert_eq!(
            forward("Prato Principal de frango"),
            "Main Course de frango"
        );
        assert_eq!(forward("frango e ARROZ E FEIJÃO"), "frango e RICE AND BEANS");
    }

    #[test]
    fn test_several_phrases_in_one_line() {
        assert_eq!(
            forward("Prato de arroz e feijão, água com gás"),
            "Prato de rice and beans, sparkling water"
        );
    }

    #[test]
    fn test_punctuation_ends_a_run() {
        // "água, com gás" is not the phrase "água com gás"
        assert_eq!(forward("água, com gás"), "água, com gás");
        assert_eq!(forward("água-com-gás"), "água-com-gás");
    }

    #[test]
    fn test_longest_phrase_wins() {
        let lexicon = lexicon_with_phrases(&[
            ("e feijão", "and beans"),
            ("arroz e feijão", "rice and beans"),
        ]);
        let table = lexicon.table(Direction::SourceToTarget);
        assert_eq!(
            replace_phrases("prato de arroz e feijão", table),
            "prato de rice and beans"
        );
        assert_eq!(replace_phrases("feijoada e feijão", table), "feijoada and beans");
    }

    #[test]
    fn test_replaced_text_is_not_rescanned() {
        let lexicon = lexicon_with_phrases(&[
            ("arroz e feijão", "rice and beans"),
            ("beans com", "broken"),
        ]);
        let table = lexicon.table(Direction::SourceToTarget);
        assert_eq!(
            replace_phrases("arroz e feijão com farofa", table),
            "rice and beans com farofa"
        );
    }

    #[test]
    fn test_repeated_phrase() {
        assert_eq!(
            forward("batata frita e batata frita"),
            "french fries e french fries"
        );
    }

    #[test]
    fn test_single_word_never_matches() {
        assert_eq!(forward("água"), "água");
        assert_eq!(forward(""), "");
    }

    #[test]
    fn test_reverse_direction() {
        let lexicon = Lexicon::builtin();
        let reverse = lexicon.table(Direction::TargetToSource);
        assert_eq!(
            replace_phrases("glass of Sparkling Water", reverse),
            "glass of Água Com Gás"
        );
    }

    #[test]
    fn test_word_runs_split_on_punctuation() {
        let text = "arroz e feijão, água  com gás.";
        let runs = word_runs(text);
        assert_eq!(runs.len(), 2);
        assert_eq!(words_of(text, &runs[0]), vec!["arroz", "e", "feijão"]);
        assert_eq!(words_of(text, &runs[1]), vec!["água", "com", "gás"]);
    }

    #[test]
    fn test_word_runs_keep_decomposed_accents() {
        let text = "a\u{0301}gua com ga\u{0301}s";
        let runs = word_runs(text);
        assert_eq!(runs.len(), 1);
        assert_eq!(words_of(text, &runs[0]), vec!["a\u{0301}gua", "com", "ga\u{0301}s"]);
        assert_eq!(forward(text), "sparkling water");
    }

    #[test]
    fn test_word_runs_empty() {
        assert!(word_runs("").is_empty());
        assert!(word_runs(" , . ").is_empty());
    }
}
