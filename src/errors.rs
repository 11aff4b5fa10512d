use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("Desired summary length should be at least 30 words.")]
    SummaryLengthTooShort,

    #[error("Failed to parse request: {0}")]
    ParseError(String),

    #[error("Failed to access OpenAI API: {0}")]
    ProviderError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Failed to append to request log: {0}")]
    LogError(String),
}

impl From<reqwest::Error> for SummarizeError {
    fn from(error: reqwest::Error) -> Self {
        SummarizeError::HttpError(error.to_string())
    }
}

impl From<std::io::Error> for SummarizeError {
    fn from(error: std::io::Error) -> Self {
        SummarizeError::LogError(error.to_string())
    }
}

impl From<serde_json::Error> for SummarizeError {
    fn from(error: serde_json::Error) -> Self {
        SummarizeError::LogError(error.to_string())
    }
}
