//! Group and record-level scoring on top of [`RewardEngine`].
//!
//! A policy samples several completions per prompt; [`score_group`] scores them
//! against the prompt's shared [`RewardContext`] and picks the best one.
//! [`RewardRequest`] is the self-contained, serde-friendly form of a single
//! evaluation used by the JSON-lines driver.

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::scoring::{
    ProductAttributes, RewardBreakdown, RewardContext, RewardEngine, ScoringError, WeightProfile,
};

/// Category keywords, given either as a JSON list or a comma-separated string.
///
/// A string is split on commas with blank pieces dropped. A list is kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "KeywordField", into = "Vec<String>")]
pub struct KeywordList(Vec<String>);

#[derive(Deserialize)]
#[serde(untagged)]
enum KeywordField {
    List(Vec<String>),
    Joined(String),
    Null,
}

impl From<KeywordField> for KeywordList {
    fn from(field: KeywordField) -> Self {
        match field {
            KeywordField::List(list) => Self(list),
            KeywordField::Joined(joined) => Self::parse(&joined),
            KeywordField::Null => Self::default(),
        }
    }
}

impl From<KeywordList> for Vec<String> {
    fn from(list: KeywordList) -> Self {
        list.0
    }
}

impl From<Vec<String>> for KeywordList {
    fn from(list: Vec<String>) -> Self {
        Self(list)
    }
}

impl KeywordList {
    /// Splits `"a, b,,c"` into `["a", "b", "c"]`.
    pub fn parse(joined: &str) -> Self {
        Self(
            joined
                .split(',')
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One title to score together with all of its context.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RewardRequest {
    pub generated_title: String,
    #[serde(default)]
    pub reference_title: Option<String>,
    #[serde(default)]
    pub category_keywords: KeywordList,
    #[serde(default)]
    pub product_info: ProductAttributes,
    /// Overrides the engine's weights. Must name all five criteria.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weights: Option<HashMap<String, f64>>,
}

impl RewardRequest {
    pub fn new<S: Into<String>>(generated_title: S) -> Self {
        Self {
            generated_title: generated_title.into(),
            ..Default::default()
        }
    }

    /// The request's context, without the title or weights.
    pub fn context(&self) -> RewardContext {
        RewardContext {
            reference: self.reference_title.clone(),
            keywords: self.category_keywords.as_slice().to_vec(),
            attributes: self.product_info.clone(),
        }
    }

    /// Scores the request. An incomplete weight map fails before any scorer runs.
    pub fn evaluate(&self, engine: &RewardEngine) -> Result<RewardBreakdown, ScoringError> {
        let weights = self
            .weights
            .as_ref()
            .map(WeightProfile::from_map)
            .transpose()?;

        engine.evaluate(
            &self.generated_title,
            self.reference_title.as_deref(),
            self.category_keywords.as_slice(),
            &self.product_info,
            weights.as_ref(),
        )
    }
}

/// Rewards for every completion of one prompt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupRewards {
    pub rewards: Vec<RewardBreakdown>,
    /// Index of the highest total; ties go to the earliest completion.
    pub best_index: Option<usize>,
    /// Mean total, `0.0` for an empty group.
    pub mean: f64,
}

impl GroupRewards {
    pub fn totals(&self) -> impl Iterator<Item = f64> + '_ {
        self.rewards.iter().map(|r| r.total)
    }

    pub fn best(&self) -> Option<&RewardBreakdown> {
        self.best_index.and_then(|i| self.rewards.get(i))
    }
}

/// Scores each completion against the shared `context`.
///
/// Stops at the first scorer failure.
pub fn score_group<S: AsRef<str>>(
    engine: &RewardEngine,
    context: &RewardContext,
    completions: &[S],
) -> Result<GroupRewards, ScoringError> {
    let rewards = completions
        .iter()
        .map(|title| engine.score(title.as_ref(), context))
        .collect::<Result<Vec<_>, _>>()?;

    let mut best_index = None;
    let mut best_total = f64::NEG_INFINITY;
    for (i, reward) in rewards.iter().enumerate() {
        if reward.total > best_total {
            best_total = reward.total;
            best_index = Some(i);
        }
    }

    let mean = if rewards.is_empty() {
        0.0
    } else {
        rewards.iter().map(|r| r.total).sum::<f64>() / rewards.len() as f64
    };

    debug!(
        completions = rewards.len(),
        best_index = ?best_index,
        mean,
        "Group scored"
    );

    Ok(GroupRewards {
        rewards,
        best_index,
        mean,
    })
}

/// Scores independent requests; one failure does not stop the rest.
pub fn score_batch(
    engine: &RewardEngine,
    requests: &[RewardRequest],
) -> Vec<Result<RewardBreakdown, ScoringError>> {
    requests.iter().map(|r| r.evaluate(engine)).collect()
}
