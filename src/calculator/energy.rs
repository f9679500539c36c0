use crate::calculator::constants::{RER_EXPONENT, RER_MULTIPLIER};
use crate::models::DerRange;

/// Resting energy requirement in kcal/day.
///
/// `RER = round(weight^0.75 * 70)`. The caller guarantees `weight` lies in
/// the validated domain (0, 20].
pub fn calculate_rer(weight_kg: f64) -> u32 {
    (weight_kg.powf(RER_EXPONENT) * RER_MULTIPLIER).round() as u32
}

/// Daily energy requirement range in kcal/day.
///
/// Each bound is `round(rer * factor)`. The factors are not reordered, so an
/// inverted range yields `min > max`.
pub fn calculate_der(rer: u32, min_factor: f64, max_factor: f64) -> DerRange {
    let rer = rer as f64;
    DerRange {
        min: (rer * min_factor).round() as u32,
        max: (rer * max_factor).round() as u32,
    }
}
