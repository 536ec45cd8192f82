/// Error types for building a lexicon from external data.
///
/// Translation itself never fails: a lookup miss falls back to morphology and
/// then to passing the token through. Only reading and validating lexicon data
/// can go wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexiconError {
    /// The lexicon file could not be read
    Io(String),
    /// The lexicon file is not valid JSON or does not match the expected shape
    Parse(String),
    /// An entry violates the lexicon rules (empty text, multi-word "word", single-word "phrase")
    InvalidEntry(String),
}

impl std::fmt::Display for LexiconError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LexiconError::Io(msg) => write!(f, "Lexicon I/O error: {}", msg),
            LexiconError::Parse(msg) => write!(f, "Lexicon parse error: {}", msg),
            LexiconError::InvalidEntry(msg) => write!(f, "Invalid lexicon entry: {}", msg),
        }
    }
}

impl std::error::Error for LexiconError {}

/// Result type for lexicon loading and validation
pub type LexiconResult<T> = Result<T, LexiconError>;
