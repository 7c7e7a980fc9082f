use std::collections::BTreeSet;

use crate::constants::{FALLBACK_SCORE, KEYWORD_FOUND_BONUS, KEYWORD_REPEAT_PENALTY, clamp_unit};

/// Keyword coverage with a repetition penalty.
///
/// Coverage divides the distinct keywords found by the raw keyword count, so a
/// list with duplicate entries cannot reach full coverage. A blank keyword
/// trims to `""`, which every title contains once per character boundary, so
/// it is found and its repetition penalty usually zeroes the score.
pub fn reward_seo_keywords<S: AsRef<str>>(title: &str, keywords: &[S]) -> f64 {
    if keywords.is_empty() {
        return FALLBACK_SCORE;
    }

    let title_lower = title.to_lowercase();
    let found: BTreeSet<String> = keywords
        .iter()
        .map(|kw| kw.as_ref().to_lowercase().trim().to_string())
        .filter(|kw| title_lower.contains(kw.as_str()))
        .collect();

    let mut score = found.len() as f64 / keywords.len() as f64;
    if !found.is_empty() {
        score += KEYWORD_FOUND_BONUS;
    }

    for kw in &found {
        let occurrences = title_lower.matches(kw.as_str()).count();
        if occurrences > 1 {
            score -= KEYWORD_REPEAT_PENALTY * (occurrences - 1) as f64;
        }
    }

    clamp_unit(score)
}
