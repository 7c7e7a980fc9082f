//! Cross-cutting scoring constants.
//!
//! Every reward term lives here so the scorers, the aggregator and the tests
//! agree on one set of numbers.

/// Score returned when a scorer lacks the context it needs (no reference, no keywords).
pub const FALLBACK_SCORE: f64 = 0.5;

pub const DEFAULT_SEMANTIC_WEIGHT: f64 = 0.25;
pub const DEFAULT_SEO_WEIGHT: f64 = 0.15;
pub const DEFAULT_GRAMMAR_WEIGHT: f64 = 0.20;
pub const DEFAULT_STRUCTURE_WEIGHT: f64 = 0.25;
pub const DEFAULT_LENGTH_WEIGHT: f64 = 0.15;

// Keyword scorer.
pub const KEYWORD_FOUND_BONUS: f64 = 0.1;
pub const KEYWORD_REPEAT_PENALTY: f64 = 0.1;

// Fluency scorer.
pub const GRAMMAR_ISSUE_PENALTY: f64 = 0.1;
pub const DOUBLED_MARK_PENALTY: f64 = 0.2;
pub const PUNCTUATION_CHARS: &str = ".,;:!?|-";
pub const PUNCTUATION_ALLOWANCE: usize = 5;
pub const EXCESS_PUNCTUATION_PENALTY: f64 = 0.05;

// Structure scorer.
pub const BRAND_FOUND_BONUS: f64 = 0.2;
pub const BRAND_MISSING_PENALTY: f64 = 0.2;
pub const PRODUCT_TYPE_FOUND_BONUS: f64 = 0.3;
pub const PRODUCT_TYPE_MISSING_PENALTY: f64 = 0.5;
pub const OPTIONAL_ATTRIBUTE_BONUS: f64 = 0.1;
pub const MAX_OPTIONAL_ATTRIBUTES: usize = 3;
pub const BRAND_BEFORE_TYPE_BONUS: f64 = 0.1;

// Length scorer.
pub const MIN_TITLE_CHARS: usize = 30;
pub const OPTIMAL_MIN_CHARS: usize = 50;
pub const OPTIMAL_MAX_CHARS: usize = 100;
pub const MAX_TITLE_CHARS: usize = 120;
/// Highest value the ramps outside the optimal band can reach.
pub const LENGTH_RAMP_CEILING: f64 = 0.9;

/// Default output dimension of the stub sentence embedder.
pub const DEFAULT_EMBEDDING_DIM: usize = 384;

/// Max tokens fed to the sentence encoder.
pub const DEFAULT_MAX_SEQ_LEN: usize = 512;

/// Default LanguageTool language code.
pub const DEFAULT_LANGUAGE: &str = "en-US";

/// Restricts a score into `[0, 1]`. NaN maps to `0.0`.
#[inline]
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
