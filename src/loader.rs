use crate::engine::{Lexicon, LexiconData, LexiconError, LexiconResult};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Load lexicon data from a JSON file
///
/// The JSON file should have the following structure:
/// ```json
/// {
///     "source_language": "pt",
///     "target_language": "en",
///     "words": [["água", "water"], ["batata", "potato"]],
///     "phrases": [["água com gás", "sparkling water"]],
///     "uncountable": { "source": ["água"], "target": ["water"] }
/// }
/// ```
///
/// `phrases` and `uncountable` may be omitted.
///
/// # Arguments
/// * `path` - Path to the JSON file
///
/// # Errors
/// - File not found or unreadable
/// - Invalid JSON, or JSON of the wrong shape
pub fn load_lexicon_data_from_file(path: &Path) -> LexiconResult<LexiconData> {
    // Read the file
    let content = fs::read_to_string(path)
        .map_err(|e| LexiconError::Io(format!("Failed to read '{}': {}", path.display(), e)))?;

    // Parse JSON
    let data = LexiconData::from_json_str(&content).map_err(|e| match e {
        LexiconError::Parse(msg) => {
            LexiconError::Parse(format!("Failed to parse '{}': {}", path.display(), msg))
        }
        other => other,
    })?;

    if data.words.is_empty() && data.phrases.is_empty() {
        warn!("Lexicon file {} has no words and no phrases", path.display());
    }

    Ok(data)
}

/// Load, validate and build a lexicon from a JSON file
///
/// # Errors
/// Everything [`load_lexicon_data_from_file`] reports, plus
/// [`LexiconError::InvalidEntry`] for entries that break the lexicon rules.
pub fn load_lexicon_from_file(path: &Path) -> LexiconResult<Lexicon> {
    let data = load_lexicon_data_from_file(path)?;
    let lexicon = Lexicon::from_data(&data).map_err(|e| match e {
        LexiconError::InvalidEntry(msg) => {
            LexiconError::InvalidEntry(format!("{} (in '{}')", msg, path.display()))
        }
        other => other,
    })?;

    info!(
        "Loaded {}-{} lexicon from {}: {} words, {} phrases",
        data.source_language,
        data.target_language,
        path.display(),
        data.words.len(),
        data.phrases.len()
    );

    Ok(lexicon)
}
