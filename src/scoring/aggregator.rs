use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::embedding::{SentenceEmbedder, TextEmbedder};
use crate::grammar::{GrammarChecker, RuleChecker, build_checker};

use super::error::ScoringError;
use super::fluency::reward_grammar_fluency;
use super::keyword::reward_seo_keywords;
use super::length::reward_length;
use super::semantic::reward_semantic_similarity;
use super::structure::reward_title_structure;
use super::types::{ProductAttributes, RewardBreakdown, RewardContext, WeightProfile};

/// Combines the five scorers into one bounded reward.
///
/// Holds the embedding model and grammar checker, both constructed once and
/// shared read-only by every call. Cloning is cheap.
#[derive(Clone)]
pub struct RewardEngine {
    embedder: Arc<dyn TextEmbedder>,
    grammar: Arc<dyn GrammarChecker>,
    weights: WeightProfile,
}

impl std::fmt::Debug for RewardEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RewardEngine")
            .field("weights", &self.weights)
            .finish_non_exhaustive()
    }
}

impl RewardEngine {
    pub fn new(embedder: Arc<dyn TextEmbedder>, grammar: Arc<dyn GrammarChecker>) -> Self {
        Self {
            embedder,
            grammar,
            weights: WeightProfile::default(),
        }
    }

    /// Stub embedder + built-in grammar rules; no model files or network needed.
    pub fn stub() -> Result<Self, ScoringError> {
        Ok(Self::new(
            Arc::new(SentenceEmbedder::stub()?),
            Arc::new(RuleChecker::new()),
        ))
    }

    /// Loads the configured embedder and grammar backend.
    pub fn from_config(config: &Config) -> Result<Self, ScoringError> {
        let embedder = SentenceEmbedder::load(config.sentence_config())?;
        let grammar = build_checker(&config.grammar_config())?;

        info!(
            stub_embedder = embedder.is_stub(),
            languagetool = config.languagetool_url.is_some(),
            weights = ?config.weights,
            "Reward engine ready"
        );

        Ok(Self::new(Arc::new(embedder), grammar).with_weights(config.weights))
    }

    /// Replaces the engine's default weight profile.
    pub fn with_weights(mut self, weights: WeightProfile) -> Self {
        let sum = weights.sum();
        if (sum - 1.0).abs() > 1e-6 {
            warn!(sum, "Weight profile does not sum to 1; totals are clamped to [0, 1]");
        }
        self.weights = weights;
        self
    }

    pub fn weights(&self) -> &WeightProfile {
        &self.weights
    }

    /// Scores `title` on every criterion.
    ///
    /// Each scorer runs exactly once. `weights` is used verbatim when given,
    /// otherwise the engine's profile applies. Embedding and grammar failures
    /// are returned unchanged.
    pub fn evaluate<S: AsRef<str>>(
        &self,
        title: &str,
        reference: Option<&str>,
        keywords: &[S],
        attributes: &ProductAttributes,
        weights: Option<&WeightProfile>,
    ) -> Result<RewardBreakdown, ScoringError> {
        let weights = weights.unwrap_or(&self.weights);

        let semantic = reward_semantic_similarity(self.embedder.as_ref(), title, reference)?;
        let seo = reward_seo_keywords(title, keywords);
        let grammar = reward_grammar_fluency(self.grammar.as_ref(), title)?;
        let structure = reward_title_structure(title, attributes);
        let length = reward_length(title);

        let breakdown =
            RewardBreakdown::combine(weights, semantic, seo, grammar, structure, length);

        debug!(
            title_len = title.len(),
            semantic,
            seo,
            grammar,
            structure,
            length,
            total = breakdown.total,
            "Title scored"
        );

        Ok(breakdown)
    }

    /// Weighted total in `[0, 1]`; see [`evaluate`](Self::evaluate).
    pub fn compute_total_reward<S: AsRef<str>>(
        &self,
        title: &str,
        reference: Option<&str>,
        keywords: &[S],
        attributes: &ProductAttributes,
        weights: Option<&WeightProfile>,
    ) -> Result<f64, ScoringError> {
        Ok(self
            .evaluate(title, reference, keywords, attributes, weights)?
            .total)
    }

    /// Scores `title` against a prepared context with the engine's weights.
    pub fn score(
        &self,
        title: &str,
        context: &RewardContext,
    ) -> Result<RewardBreakdown, ScoringError> {
        self.evaluate(
            title,
            context.reference.as_deref(),
            &context.keywords,
            &context.attributes,
            None,
        )
    }
}
