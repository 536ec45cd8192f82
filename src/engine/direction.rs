//! Source/target language detection
//!
//! A scoring heuristic, not a classifier. Each line is scored against both
//! lexicon directions:
//!
//! - the whole normalized line scores [`PHRASE_WEIGHT`] for every direction
//!   whose phrase table has it as a key
//! - every whitespace-separated token scores [`WORD_WEIGHT`] for every direction
//!   whose word table knows it (a word shared by both languages scores twice)
//!
//! The strictly higher score wins; ties, including 0–0, go to
//! [`Direction::SourceToTarget`]. Lines made of cognates or of words that exist
//! in both vocabularies can be misdetected.

use tracing::debug;

use super::lexicon::{Direction, Lexicon};
use super::normalize::{normalize, normalize_words};

/// Points for a line that is itself a known phrase.
pub const PHRASE_WEIGHT: u32 = 3;

/// Points for each known word.
pub const WORD_WEIGHT: u32 = 1;

/// Evidence collected for each direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DirectionScore {
    pub source_to_target: u32,
    pub target_to_source: u32,
}

impl DirectionScore {
    pub fn get(&self, direction: Direction) -> u32 {
        match direction {
            Direction::SourceToTarget => self.source_to_target,
            Direction::TargetToSource => self.target_to_source,
        }
    }

    fn add(&mut self, direction: Direction, points: u32) {
        match direction {
            Direction::SourceToTarget => self.source_to_target += points,
            Direction::TargetToSource => self.target_to_source += points,
        }
    }

    /// The direction with the strictly higher score, `SourceToTarget` on a tie.
    pub fn winner(&self) -> Direction {
        if self.target_to_source > self.source_to_target {
            Direction::TargetToSource
        } else {
            Direction::SourceToTarget
        }
    }
}

/// Score `text` against both directions of `lexicon`.
pub fn score(text: &str, lexicon: &Lexicon) -> DirectionScore {
    let mut score = DirectionScore::default();
    if text.split_whitespace().next().is_none() {
        return score;
    }

    let line = normalize_words(text.split_whitespace());
    let directions = [Direction::SourceToTarget, Direction::TargetToSource];

    for direction in directions {
        if lexicon.table(direction).lookup_phrase(&line).is_some() {
            score.add(direction, PHRASE_WEIGHT);
        }
    }

    for token in text.split_whitespace() {
        let key = normalize(token);
        for direction in directions {
            if lexicon.table(direction).lookup_word(&key).is_some() {
                score.add(direction, WORD_WEIGHT);
            }
        }
    }

    score
}

/// Decide which language `text` is written in.
pub fn detect_direction(text: &str, lexicon: &Lexicon) -> Direction {
    let score = score(text, lexicon);
    let direction = score.winner();
    debug!(
        "Direction for '{}': {} ({} vs {})",
        text, direction, score.source_to_target, score.target_to_source
    );
    direction
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(text: &str) -> Direction {
        detect_direction(text, &Lexicon::builtin())
    }

    #[test]
    fn test_source_phrase() {
        let lexicon = Lexicon::builtin();
        let s = score("batata frita", &lexicon);
        // phrase plus the known word "batata"
        assert_eq!(s.source_to_target, PHRASE_WEIGHT + WORD_WEIGHT);
        assert_eq!(s.target_to_source, 0);
        assert_eq!(s.winner(), Direction::SourceToTarget);
    }

    #[test]
    fn test_target_phrase() {
        let lexicon = Lexicon::builtin();
        let s = score("French Fries", &lexicon);
        assert_eq!(s.source_to_target, 0);
        assert_eq!(s.target_to_source, PHRASE_WEIGHT);
        assert_eq!(detect("French Fries"), Direction::TargetToSource);
    }

    #[test]
    fn test_phrase_scored_despite_extra_whitespace() {
        let lexicon = Lexicon::builtin();
        let s = score("french   fries", &lexicon);
        assert_eq!(s.target_to_source, PHRASE_WEIGHT);
    }

    #[test]
    fn test_words_decide() {
        assert_eq!(detect("frango com batata"), Direction::SourceToTarget);
        assert_eq!(detect("chicken with potato"), Direction::TargetToSource);
        assert_eq!(detect("ÁGUA"), Direction::SourceToTarget);
        assert_eq!(detect("WATER"), Direction::TargetToSource);
    }

    #[test]
    fn test_shared_word_scores_both_sides() {
        let lexicon = Lexicon::builtin();
        let s = score("menu", &lexicon);
        assert_eq!(s.get(Direction::SourceToTarget), WORD_WEIGHT);
        assert_eq!(s.get(Direction::TargetToSource), WORD_WEIGHT);
        assert_eq!(s.winner(), Direction::SourceToTarget);
    }

    #[test]
    fn test_ties_and_empty_default_to_source() {
        assert_eq!(detect(""), Direction::SourceToTarget);
        assert_eq!(detect("   "), Direction::SourceToTarget);
        assert_eq!(detect("pizza"), Direction::SourceToTarget);
        // one known word on each side
        assert_eq!(detect("beer cerveja"), Direction::SourceToTarget);
    }

    #[test]
    fn test_plurals_are_not_scored() {
        let lexicon = Lexicon::builtin();
        assert_eq!(score("potatoes", &lexicon), DirectionScore::default());
    }

    #[test]
    fn test_deterministic() {
        let lexicon = Lexicon::builtin();
        let first = score("Salada de tomate com queijo", &lexicon);
        for _ in 0..10 {
            assert_eq!(score("Salada de tomate com queijo", &lexicon), first);
        }
    }
}
