//! Embedding + model utilities.
//!
//! - [`sentence`] provides the sentence encoder behind the semantic scorer.
//! - [`TextEmbedder`] is the seam the scorers depend on; swap in a
//!   [`MockEmbedder`] for tests.

/// Device selection (CPU / Metal / CUDA).
pub mod device;
mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
/// Sentence embedder (BERT + mean pooling).
pub mod sentence;
/// Tokenizer loading and vector helpers.
pub mod utils;

pub use error::EmbeddingError;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockEmbedder;
pub use sentence::{SENTENCE_EMBEDDING_DIM, SENTENCE_MAX_SEQ_LEN, SentenceConfig, SentenceEmbedder};
pub use utils::cosine_similarity;

/// Turns text into a fixed-size vector.
///
/// Implementations must be read-only after construction so one instance can
/// serve concurrent scoring calls.
pub trait TextEmbedder: Send + Sync {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;
}

impl<T: TextEmbedder + ?Sized> TextEmbedder for std::sync::Arc<T> {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        (**self).embed(text)
    }
}
