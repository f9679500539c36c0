use tracing::debug;

use crate::calculator::constants::{RER_EXPONENT, RER_MULTIPLIER};
use crate::calculator::conversion::{food_portions, manual_totals};
use crate::calculator::energy::{calculate_der, calculate_rer};
use crate::calculator::validation::{
    parse_grams, parse_life_stage, parse_positive_weight, validate_submit,
};
use crate::error::ValidationError;
use crate::models::{CalorieReport, CatInputs, FactorRange, FoodType, ManualReport, ResultView};

/// Derive the full report from already-validated inputs.
pub fn build_report(weight_kg: f64, factors: FactorRange) -> CalorieReport {
    let rer = calculate_rer(weight_kg);
    let der = calculate_der(rer, factors.min, factors.max);
    let portions = food_portions(&der);

    debug!(weight_kg, %factors, rer, der_min = der.min, der_max = der.max, "computed report");

    CalorieReport {
        weight_kg,
        factors,
        rer,
        der,
        portions,
    }
}

/// Like [`build_report`], but `None` when the energy values would not fit in
/// a `u32` kcal count.
pub fn try_build_report(weight_kg: f64, factors: FactorRange) -> Option<CalorieReport> {
    let rer = (weight_kg.powf(RER_EXPONENT) * RER_MULTIPLIER).round();
    let largest = [rer, (rer * factors.min).round(), (rer * factors.max).round()]
        .into_iter()
        .fold(0.0, f64::max);

    if !largest.is_finite() || largest > u32::MAX as f64 {
        debug!(weight_kg, %factors, largest, "energy requirement out of range");
        return None;
    }
    Some(build_report(weight_kg, factors))
}

/// Explicit-submit path: every validation failure is returned to the caller.
pub fn compute_submit(inputs: &CatInputs) -> Result<CalorieReport, ValidationError> {
    let (weight, factors) = validate_submit(inputs)?;
    Ok(build_report(weight, factors))
}

/// Live-update path: incomplete or invalid inputs hide the result instead of
/// raising an error.
///
/// The plausibility ceiling is only enforced on submit. Weights so large that
/// the requirement cannot be represented are hidden as well.
pub fn compute_auto(inputs: &CatInputs) -> ResultView {
    let weight = parse_positive_weight(inputs.weight_str());
    let factors = parse_life_stage(inputs.life_stage_str());

    match (weight, factors) {
        (Ok(weight), Ok(factors)) => match try_build_report(weight, factors) {
            Some(report) => ResultView::Shown(report),
            None => ResultView::Hidden,
        },
        (weight, factors) => {
            debug!(
                weight_error = ?weight.err(),
                life_stage_error = ?factors.err(),
                "auto compute hidden"
            );
            ResultView::Hidden
        }
    }
}

/// Reverse mode from raw gram fields. Any invalid field aborts the whole
/// calculation.
pub fn compute_manual(
    fields: &[(FoodType, Option<&str>)],
) -> Result<ManualReport, ValidationError> {
    let amounts = fields
        .iter()
        .map(|(food, raw)| parse_grams(*food, *raw).map(|grams| (*food, grams)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(manual_totals(&amounts))
}
