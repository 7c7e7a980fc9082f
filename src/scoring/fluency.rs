use tracing::debug;

use crate::constants::{
    DOUBLED_MARK_PENALTY, EXCESS_PUNCTUATION_PENALTY, GRAMMAR_ISSUE_PENALTY, PUNCTUATION_ALLOWANCE,
    PUNCTUATION_CHARS, clamp_unit,
};
use crate::grammar::GrammarChecker;

use super::error::ScoringError;

/// Grammatical well-formedness and punctuation hygiene.
pub fn reward_grammar_fluency<G>(checker: &G, title: &str) -> Result<f64, ScoringError>
where
    G: GrammarChecker + ?Sized,
{
    if title.trim().is_empty() {
        return Ok(0.0);
    }

    let issues = checker.check(title)?;
    let mut score = 1.0 - GRAMMAR_ISSUE_PENALTY * issues.len() as f64;

    if title.contains("!!") || title.contains("??") {
        score -= DOUBLED_MARK_PENALTY;
    }

    let punctuation = title
        .chars()
        .filter(|c| PUNCTUATION_CHARS.contains(*c))
        .count();
    if punctuation > PUNCTUATION_ALLOWANCE {
        score -= EXCESS_PUNCTUATION_PENALTY * (punctuation - PUNCTUATION_ALLOWANCE) as f64;
    }

    debug!(issues = issues.len(), punctuation, score, "Fluency scored");
    Ok(clamp_unit(score))
}
