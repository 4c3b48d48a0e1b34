use thiserror::Error;

/// Result type for CMR queries
pub type Result<T> = std::result::Result<T, CmrError>;

/// Errors that can occur while querying the CMR collection search
#[derive(Error, Debug)]
pub enum CmrError {
    /// HTTP transport or status failure
    #[error("CMR request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Response body did not have the expected shape
    #[error("Unexpected CMR response: {0}")]
    UnexpectedResponse(String),
}
