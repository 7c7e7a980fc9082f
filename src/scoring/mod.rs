//! Title reward scoring.
//!
//! Five independent scorers each map a generated title (plus the context it
//! needs) to `[0, 1]`:
//!
//! | scorer | context | fallback |
//! |---|---|---|
//! | [`reward_semantic_similarity`] | reference title | `0.5` without a reference |
//! | [`reward_seo_keywords`] | category keywords | `0.5` without keywords |
//! | [`reward_grammar_fluency`] | none | `0.0` for a blank title |
//! | [`reward_title_structure`] | product attributes | none |
//! | [`reward_length`] | none | `0.0` for a blank title |
//!
//! [`RewardEngine`] runs all five and combines them with a [`WeightProfile`].
//! Every score is clamped before it leaves its scorer, and the weighted total
//! is clamped again.

pub mod aggregator;
pub mod error;
pub mod fluency;
pub mod keyword;
pub mod length;
pub mod semantic;
pub mod structure;
pub mod types;


pub use aggregator::RewardEngine;
pub use error::ScoringError;
pub use fluency::reward_grammar_fluency;
pub use keyword::reward_seo_keywords;
pub use length::reward_length;
pub use semantic::reward_semantic_similarity;
pub use structure::reward_title_structure;
pub use types::{Criterion, ProductAttributes, RewardBreakdown, RewardContext, WeightProfile};
