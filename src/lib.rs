//! Title reward library crate (used by the JSON-lines driver and integration tests).
//!
//! Scores machine-generated e-commerce product titles on five criteria and
//! combines them into one bounded reward for policy training.
//!
//! ## Core Types
//! - [`RewardEngine`] - Runs every scorer and returns a [`RewardBreakdown`]
//! - [`WeightProfile`], [`Criterion`] - Per-criterion weights
//! - [`ProductAttributes`], [`RewardContext`] - Scoring context for a prompt
//! - [`Config`], [`ConfigError`] - Environment configuration
//!
//! ## Scorers
//! [`reward_semantic_similarity`], [`reward_seo_keywords`],
//! [`reward_grammar_fluency`], [`reward_title_structure`], [`reward_length`].
//!
//! ## Models
//! - [`SentenceEmbedder`] behind the [`TextEmbedder`] trait
//! - [`LanguageToolChecker`], [`RuleChecker`] behind the [`GrammarChecker`] trait
//!
//! ## Group Scoring
//! [`score_group`] scores several completions of one prompt; [`RewardRequest`]
//! is the serde form of a single evaluation.
//!
//! ## Test/Mock Support
//! Mock implementations are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod batch;
pub mod config;
pub mod constants;
pub mod embedding;
pub mod grammar;
pub mod scoring;

pub use batch::{GroupRewards, KeywordList, RewardRequest, score_batch, score_group};
pub use config::{Config, ConfigError};
pub use constants::{FALLBACK_SCORE, clamp_unit};
#[cfg(any(test, feature = "mock"))]
pub use embedding::MockEmbedder;
pub use embedding::{
    EmbeddingError, SENTENCE_EMBEDDING_DIM, SENTENCE_MAX_SEQ_LEN, SentenceConfig,
    SentenceEmbedder, TextEmbedder,
};
#[cfg(any(test, feature = "mock"))]
pub use grammar::MockGrammarChecker;
pub use grammar::{
    GrammarChecker, GrammarConfig, GrammarError, GrammarIssue, LanguageToolChecker, RuleChecker,
    build_checker,
};
pub use scoring::{
    Criterion, ProductAttributes, RewardBreakdown, RewardContext, RewardEngine, ScoringError,
    WeightProfile, reward_grammar_fluency, reward_length, reward_semantic_similarity,
    reward_seo_keywords, reward_title_structure,
};
