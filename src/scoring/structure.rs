use crate::constants::{
    BRAND_BEFORE_TYPE_BONUS, BRAND_FOUND_BONUS, BRAND_MISSING_PENALTY, MAX_OPTIONAL_ATTRIBUTES,
    OPTIONAL_ATTRIBUTE_BONUS, PRODUCT_TYPE_FOUND_BONUS, PRODUCT_TYPE_MISSING_PENALTY, clamp_unit,
};

use super::types::ProductAttributes;

/// Presence and ordering of structured attributes in the title.
///
/// A missing product type costs more than a missing brand. Intermediate sums
/// may go negative; only the final score is clamped.
pub fn reward_title_structure(title: &str, attributes: &ProductAttributes) -> f64 {
    let title_lower = title.to_lowercase();
    let position = |value: &str| title_lower.find(&value.to_lowercase());

    let mut score = 0.0;

    let brand_at = attributes.brand().map(position);
    match brand_at {
        Some(Some(_)) => score += BRAND_FOUND_BONUS,
        Some(None) => score -= BRAND_MISSING_PENALTY,
        None => {}
    }

    let type_at = attributes.product_type().map(position);
    match type_at {
        Some(Some(_)) => score += PRODUCT_TYPE_FOUND_BONUS,
        Some(None) => score -= PRODUCT_TYPE_MISSING_PENALTY,
        None => {}
    }

    let optional_found = attributes
        .optional_values()
        .filter(|value| position(*value).is_some())
        .count();
    score += OPTIONAL_ATTRIBUTE_BONUS * optional_found.min(MAX_OPTIONAL_ATTRIBUTES) as f64;

    if let (Some(Some(brand)), Some(Some(product_type))) = (brand_at, type_at)
        && brand < product_type
    {
        score += BRAND_BEFORE_TYPE_BONUS;
    }

    clamp_unit(score)
}
