use std::ops::RangeInclusive;

use crate::models::{FoodRatio, FoodType};

/// Exponent applied to body weight (kg) in the RER formula.
pub const RER_EXPONENT: f64 = 0.75;

/// Multiplier applied to the scaled weight in the RER formula.
pub const RER_MULTIPLIER: f64 = 70.0;

/// Heaviest weight (kg) accepted as plausible for a cat.
pub const MAX_PLAUSIBLE_WEIGHT_KG: f64 = 20.0;

/// Largest food mass (g) accepted in reverse mode.
pub const MAX_MANUAL_GRAMS: f64 = 100_000.0;

/// Whole-kilogram weights covered by the reference table.
pub const REFERENCE_WEIGHTS_KG: RangeInclusive<u32> = 1..=15;

/// kcal per gram for each food type.
pub const FOOD_RATIOS: [FoodRatio; 3] = [
    FoodRatio {
        food: FoodType::WetFood,
        kcal_per_gram: 1.0,
    },
    FoodRatio {
        food: FoodType::RawMeat,
        kcal_per_gram: 1.5,
    },
    FoodRatio {
        food: FoodType::FreezeDried,
        kcal_per_gram: 4.0,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_food_type_has_a_ratio() {
        for food in FoodType::ALL {
            assert!(FOOD_RATIOS.iter().any(|r| r.food == food));
        }
        let ratios: Vec<f64> = FOOD_RATIOS.iter().map(|r| r.kcal_per_gram).collect();
        assert_eq!(ratios, vec![1.0, 1.5, 4.0]);
    }
}
