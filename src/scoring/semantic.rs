use tracing::debug;

use crate::constants::{FALLBACK_SCORE, clamp_unit};
use crate::embedding::{TextEmbedder, cosine_similarity};

use super::error::ScoringError;

/// Semantic closeness of `title` to `reference`, as `(cos + 1) / 2`.
///
/// Returns [`FALLBACK_SCORE`] when there is no usable reference. Embedding
/// failures are returned, never defaulted.
pub fn reward_semantic_similarity<E>(
    embedder: &E,
    title: &str,
    reference: Option<&str>,
) -> Result<f64, ScoringError>
where
    E: TextEmbedder + ?Sized,
{
    let Some(reference) = reference.filter(|r| !r.trim().is_empty()) else {
        return Ok(FALLBACK_SCORE);
    };

    let generated = embedder.embed(title)?;
    let reference = embedder.embed(reference)?;

    let cos = cosine_similarity(&generated, &reference);
    let score = clamp_unit((cos + 1.0) / 2.0);

    debug!(cos, score, "Semantic similarity scored");
    Ok(score)
}
