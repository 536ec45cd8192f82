/// Translation Engine
///
/// This module translates short menu items between the two languages of a small
/// curated bilingual lexicon. There is no statistical model: every output word
/// comes from the lexicon, from a naive plural rule applied to a lexicon word,
/// or is the input word passed through unchanged.
///
/// # Overview
///
/// The engine consists of several components, leaf-first:
///
/// 1. **Normalizer** - Lower-cases and strips accents to build lookup keys
/// 2. **Casing** - Reapplies the casing style of the input to each translated unit
/// 3. **Lexicon** - Word and phrase tables for both directions, built once
/// 4. **Phrase Matcher** - Substitutes multi-word idioms, longest first
/// 5. **Morphology** - Plural fallback for words missing from the lexicon
/// 6. **Direction Detector** - Scores a line against both languages
/// 7. **Pipeline** - Orchestrates the steps above for one item
///
/// # Example
///
/// ```
/// use menu_translator::engine::{Direction, Translator};
///
/// let translator = Translator::builtin();
///
/// // Accents are optional, casing is preserved
/// assert_eq!(translator.translate("AGUA COM GAS"), "SPARKLING WATER");
///
/// // The direction is detected per item
/// let translation = translator.translate_detailed("Rice and Beans");
/// assert_eq!(translation.direction, Direction::TargetToSource);
/// assert_eq!(translation.text, "Arroz E Feijão");
/// ```
pub mod casing;
pub mod data;
pub mod direction;
pub mod error;
pub mod lexicon;
pub mod morphology;
pub mod normalize;
pub mod phrase;
pub mod pipeline;


pub use casing::match_casing;
pub use data::{LexiconData, UncountableNouns};
pub use direction::{DirectionScore, detect_direction};
pub use error::{LexiconError, LexiconResult};
pub use lexicon::{Direction, Lexicon, LexiconTable};
pub use normalize::normalize;
pub use phrase::replace_phrases;
pub use pipeline::{Translation, Translator};
