use thiserror::Error;

#[derive(Debug, Error)]
pub enum GrammarError {
    #[error("invalid grammar checker configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("grammar check request failed: {reason}")]
    RequestFailed { reason: String },

    #[error("grammar check response could not be decoded: {reason}")]
    InvalidResponse { reason: String },
}

impl From<reqwest::Error> for GrammarError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            GrammarError::InvalidResponse {
                reason: err.to_string(),
            }
        } else {
            GrammarError::RequestFailed {
                reason: err.to_string(),
            }
        }
    }
}
