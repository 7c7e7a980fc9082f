use crate::constants::{
    LENGTH_RAMP_CEILING, MAX_TITLE_CHARS, MIN_TITLE_CHARS, OPTIMAL_MAX_CHARS, OPTIMAL_MIN_CHARS,
    clamp_unit,
};

/// Piecewise-linear preference for titles of 50..=100 characters.
///
/// The ramps on either side top out at 0.9, so the score steps by 0.1 where
/// they meet the optimal band.
pub fn reward_length(title: &str) -> f64 {
    let length = title.trim().chars().count();

    let score = if !(MIN_TITLE_CHARS..=MAX_TITLE_CHARS).contains(&length) {
        0.0
    } else if (OPTIMAL_MIN_CHARS..=OPTIMAL_MAX_CHARS).contains(&length) {
        1.0
    } else if length < OPTIMAL_MIN_CHARS {
        (length - MIN_TITLE_CHARS) as f64 / (OPTIMAL_MIN_CHARS - MIN_TITLE_CHARS) as f64
            * LENGTH_RAMP_CEILING
    } else {
        (MAX_TITLE_CHARS - length) as f64 / (MAX_TITLE_CHARS - OPTIMAL_MAX_CHARS) as f64
            * LENGTH_RAMP_CEILING
    };

    clamp_unit(score)
}
