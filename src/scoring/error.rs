use thiserror::Error;

use crate::embedding::EmbeddingError;
use crate::grammar::GrammarError;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("grammar check error: {0}")]
    Grammar(#[from] GrammarError),

    #[error("weight profile is missing criterion '{criterion}'")]
    MissingWeight { criterion: &'static str },

    #[error("invalid weight for '{criterion}': {value} (must be finite and non-negative)")]
    InvalidWeight { criterion: &'static str, value: f64 },
}
