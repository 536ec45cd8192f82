pub mod engine;
pub mod loader;
pub mod shell;

// Re-export the engine types for convenient access
pub use engine::{
    Direction, DirectionScore, Lexicon, LexiconData, LexiconError, LexiconResult, Translation,
    Translator,
};
pub use loader::{load_lexicon_data_from_file, load_lexicon_from_file};

/// Translate a batch of raw items with `translator`.
///
/// Items are cleaned first; items that are empty after cleaning are dropped.
/// Each remaining item is translated in `direction` when one is given,
/// otherwise its direction is detected.
pub fn translate_items<S: AsRef<str>>(
    translator: &Translator,
    items: &[S],
    direction: Option<Direction>,
) -> Vec<Translation> {
    items
        .iter()
        .map(|raw| shell::clean_item(raw.as_ref()))
        .filter(|item| !item.is_empty())
        .map(|item| match direction {
            Some(direction) => translator.translate_detailed_with(direction, &item),
            None => translator.translate_detailed(&item),
        })
        .collect()
}
