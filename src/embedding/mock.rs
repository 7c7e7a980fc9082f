//! Mock embedder for tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{EmbeddingError, TextEmbedder};

/// Embedder returning canned vectors, or failing on demand.
///
/// Unknown texts map to the first unit basis vector, so any two unknown
/// texts are identical.
#[derive(Debug, Default)]
pub struct MockEmbedder {
    vectors: HashMap<String, Vec<f32>>,
    fail_on: Option<String>,
    dim: usize,
    calls: AtomicUsize,
}

impl MockEmbedder {
    pub fn new(dim: usize) -> Self {
        Self {
            dim: dim.max(1),
            ..Default::default()
        }
    }

    /// Registers a fixed vector for `text`.
    pub fn with_vector(mut self, text: &str, vector: Vec<f32>) -> Self {
        self.vectors.insert(text.to_string(), vector);
        self
    }

    /// Makes `embed(text)` return an inference error.
    pub fn failing_on(mut self, text: &str) -> Self {
        self.fail_on = Some(text.to_string());
        self
    }

    /// Number of `embed` calls served so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl TextEmbedder for MockEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_on.as_deref() == Some(text) {
            return Err(EmbeddingError::InferenceFailed {
                reason: format!("mock failure for {text:?}"),
            });
        }

        if let Some(v) = self.vectors.get(text) {
            return Ok(v.clone());
        }

        let mut v = vec![0.0; self.dim.max(1)];
        v[0] = 1.0;
        Ok(v)
    }
}
