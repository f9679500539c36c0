use crate::calculator::constants::FOOD_RATIOS;
use crate::models::{DerRange, FoodPortion, FoodType, ManualEntry, ManualReport};

/// Grams of a food needed to supply `kcal`, rounded to the nearest gram.
///
/// `ratio` is kcal per gram and must be positive. A zero ratio is not
/// guarded; the float division saturates to `u32::MAX`.
pub fn convert_kcal_to_grams(kcal: f64, ratio: f64) -> u32 {
    (kcal / ratio).round() as u32
}

/// kcal supplied by `grams` of a food, rounded to the nearest kcal.
pub fn convert_grams_to_kcal(grams: f64, ratio: f64) -> u32 {
    (grams * ratio).round() as u32
}

/// Convert both DER bounds into grams for every food type.
pub fn food_portions(der: &DerRange) -> Vec<FoodPortion> {
    FOOD_RATIOS
        .iter()
        .map(|ratio| FoodPortion {
            food: ratio.food,
            min_grams: convert_kcal_to_grams(der.min as f64, ratio.kcal_per_gram),
            max_grams: convert_kcal_to_grams(der.max as f64, ratio.kcal_per_gram),
        })
        .collect()
}

/// Convert user-entered masses into kcal and sum them.
///
/// Food types missing from `amounts` count as zero grams.
pub fn manual_totals(amounts: &[(FoodType, f64)]) -> ManualReport {
    let entries: Vec<ManualEntry> = FOOD_RATIOS
        .iter()
        .map(|ratio| {
            let grams = amounts
                .iter()
                .filter(|(food, _)| *food == ratio.food)
                .map(|(_, g)| *g)
                .sum::<f64>();
            ManualEntry {
                food: ratio.food,
                grams,
                kcal: convert_grams_to_kcal(grams, ratio.kcal_per_gram),
            }
        })
        .collect();

    let total_kcal = entries.iter().map(|e| e.kcal).fold(0, u32::saturating_add);

    ManualReport {
        entries,
        total_kcal,
    }
}
