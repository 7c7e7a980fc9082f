use std::collections::HashMap;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::{
    DEFAULT_GRAMMAR_WEIGHT, DEFAULT_LENGTH_WEIGHT, DEFAULT_SEMANTIC_WEIGHT, DEFAULT_SEO_WEIGHT,
    DEFAULT_STRUCTURE_WEIGHT, clamp_unit,
};

use super::error::ScoringError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// The five scoring criteria.
pub enum Criterion {
    Semantic,
    Seo,
    Grammar,
    Structure,
    Length,
}

impl Criterion {
    pub const ALL: [Criterion; 5] = [
        Criterion::Semantic,
        Criterion::Seo,
        Criterion::Grammar,
        Criterion::Structure,
        Criterion::Length,
    ];

    /// Key used in weight maps.
    pub fn as_str(&self) -> &'static str {
        match self {
            Criterion::Semantic => "semantic",
            Criterion::Seo => "seo",
            Criterion::Grammar => "grammar",
            Criterion::Structure => "structure",
            Criterion::Length => "length",
        }
    }
}

impl std::fmt::Display for Criterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-criterion weights for the aggregate reward.
///
/// Always holds all five weights, each finite and non-negative. A profile
/// built from a map must name every criterion; nothing is filled in from
/// [`WeightProfile::default`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "HashMap<String, f64>")]
pub struct WeightProfile {
    semantic: f64,
    seo: f64,
    grammar: f64,
    structure: f64,
    length: f64,
}

impl Default for WeightProfile {
    fn default() -> Self {
        Self {
            semantic: DEFAULT_SEMANTIC_WEIGHT,
            seo: DEFAULT_SEO_WEIGHT,
            grammar: DEFAULT_GRAMMAR_WEIGHT,
            structure: DEFAULT_STRUCTURE_WEIGHT,
            length: DEFAULT_LENGTH_WEIGHT,
        }
    }
}

impl WeightProfile {
    pub fn new(
        semantic: f64,
        seo: f64,
        grammar: f64,
        structure: f64,
        length: f64,
    ) -> Result<Self, ScoringError> {
        let profile = Self {
            semantic,
            seo,
            grammar,
            structure,
            length,
        };

        for criterion in Criterion::ALL {
            let value = profile.get(criterion);
            if !value.is_finite() || value < 0.0 {
                return Err(ScoringError::InvalidWeight {
                    criterion: criterion.as_str(),
                    value,
                });
            }
        }

        Ok(profile)
    }

    /// Builds a profile from `criterion name -> weight`. Every criterion must be
    /// present; unknown keys are ignored.
    pub fn from_map(map: &HashMap<String, f64>) -> Result<Self, ScoringError> {
        let get = |criterion: Criterion| {
            map.get(criterion.as_str())
                .copied()
                .ok_or(ScoringError::MissingWeight {
                    criterion: criterion.as_str(),
                })
        };

        Self::new(
            get(Criterion::Semantic)?,
            get(Criterion::Seo)?,
            get(Criterion::Grammar)?,
            get(Criterion::Structure)?,
            get(Criterion::Length)?,
        )
    }

    pub fn get(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::Semantic => self.semantic,
            Criterion::Seo => self.seo,
            Criterion::Grammar => self.grammar,
            Criterion::Structure => self.structure,
            Criterion::Length => self.length,
        }
    }

    pub fn sum(&self) -> f64 {
        Criterion::ALL.iter().map(|c| self.get(*c)).sum()
    }
}

impl TryFrom<HashMap<String, f64>> for WeightProfile {
    type Error = ScoringError;

    fn try_from(map: HashMap<String, f64>) -> Result<Self, Self::Error> {
        Self::from_map(&map)
    }
}

/// Structured product attributes checked by the structure scorer.
///
/// Values are trimmed; empty values read as absent. When deserialized, numbers
/// and booleans are accepted and stringified (`"size": 10` reads as `"10"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductAttributes {
    #[serde(default, deserialize_with = "lenient_attribute")]
    brand: Option<String>,
    #[serde(default, deserialize_with = "lenient_attribute")]
    product_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_attribute")]
    material: Option<String>,
    #[serde(default, deserialize_with = "lenient_attribute")]
    color: Option<String>,
    #[serde(default, deserialize_with = "lenient_attribute")]
    size: Option<String>,
}

fn normalize_attribute(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn lenient_attribute<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde_json::Value;

    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(normalize_attribute(&s)),
        Some(Value::Number(n)) => Ok(normalize_attribute(&n.to_string())),
        Some(Value::Bool(b)) => Ok(normalize_attribute(&b.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "expected a scalar attribute value, got {}",
            other
        ))),
    }
}

impl ProductAttributes {
    /// Names of the attributes that earn the optional-attribute bonus.
    pub const OPTIONAL: [&'static str; 3] = ["material", "color", "size"];

    pub fn new() -> Self {
        Self::default()
    }

    /// Builds attributes from a string map; unknown keys are ignored.
    pub fn from_map(map: &HashMap<String, String>) -> Self {
        let get = |key: &str| map.get(key).and_then(|v| normalize_attribute(v));
        Self {
            brand: get("brand"),
            product_type: get("product_type"),
            material: get("material"),
            color: get("color"),
            size: get("size"),
        }
    }

    pub fn with_brand(mut self, value: &str) -> Self {
        self.brand = normalize_attribute(value);
        self
    }

    pub fn with_product_type(mut self, value: &str) -> Self {
        self.product_type = normalize_attribute(value);
        self
    }

    pub fn with_material(mut self, value: &str) -> Self {
        self.material = normalize_attribute(value);
        self
    }

    pub fn with_color(mut self, value: &str) -> Self {
        self.color = normalize_attribute(value);
        self
    }

    pub fn with_size(mut self, value: &str) -> Self {
        self.size = normalize_attribute(value);
        self
    }

    pub fn brand(&self) -> Option<&str> {
        self.brand.as_deref()
    }

    pub fn product_type(&self) -> Option<&str> {
        self.product_type.as_deref()
    }

    /// Looks an attribute up by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        match name {
            "brand" => self.brand.as_deref(),
            "product_type" => self.product_type.as_deref(),
            "material" => self.material.as_deref(),
            "color" => self.color.as_deref(),
            "size" => self.size.as_deref(),
            _ => None,
        }
    }

    /// Present values among `material`, `color` and `size`.
    pub fn optional_values(&self) -> impl Iterator<Item = &str> {
        Self::OPTIONAL.into_iter().filter_map(|name| self.get(name))
    }
}

/// Per-prompt context shared by every candidate title generated for it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RewardContext {
    pub reference: Option<String>,
    pub keywords: Vec<String>,
    pub attributes: ProductAttributes,
}

impl RewardContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reference<S: Into<String>>(mut self, reference: S) -> Self {
        self.reference = Some(reference.into());
        self
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_attributes(mut self, attributes: ProductAttributes) -> Self {
        self.attributes = attributes;
        self
    }
}

/// The five sub-scores and their weighted, clamped total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RewardBreakdown {
    pub semantic: f64,
    pub seo: f64,
    pub grammar: f64,
    pub structure: f64,
    pub length: f64,
    pub total: f64,
}

impl RewardBreakdown {
    /// Combines sub-scores with `weights`; the total is clamped to `[0, 1]`.
    pub fn combine(
        weights: &WeightProfile,
        semantic: f64,
        seo: f64,
        grammar: f64,
        structure: f64,
        length: f64,
    ) -> Self {
        let mut breakdown = Self {
            semantic,
            seo,
            grammar,
            structure,
            length,
            total: 0.0,
        };

        let weighted: f64 = Criterion::ALL
            .iter()
            .map(|c| weights.get(*c) * breakdown.component(*c))
            .sum();
        breakdown.total = clamp_unit(weighted);
        breakdown
    }

    pub fn component(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::Semantic => self.semantic,
            Criterion::Seo => self.seo,
            Criterion::Grammar => self.grammar,
            Criterion::Structure => self.structure,
            Criterion::Length => self.length,
        }
    }
}
