use thiserror::Error;

/// Result type for tagging operations
pub type Result<T> = std::result::Result<T, TaggerError>;

/// Errors that can occur while loading vocabulary or tagging documents
#[derive(Error, Debug)]
pub enum TaggerError {
    /// Vocabulary or alias JSON failed to parse
    #[error("Malformed vocabulary: {0}")]
    MalformedVocabulary(String),

    /// IO error occurred
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl TaggerError {
    /// Create a malformed-vocabulary error
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedVocabulary(msg.into())
    }
}

impl From<serde_json::Error> for TaggerError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedVocabulary(err.to_string())
    }
}
