use crate::calculator::constants::{MAX_MANUAL_GRAMS, MAX_PLAUSIBLE_WEIGHT_KG};
use crate::error::ValidationError;
use crate::models::{CatInputs, FactorRange, FoodType, LifeStage};

/// Parse a weight field that must be present and positive.
///
/// Does not apply the plausibility ceiling; see [`parse_weight`].
pub fn parse_positive_weight(raw: Option<&str>) -> Result<f64, ValidationError> {
    let raw = raw.map(str::trim).unwrap_or_default();
    if raw.is_empty() {
        return Err(ValidationError::MissingWeight);
    }

    let weight: f64 = raw.parse().map_err(|_| ValidationError::InvalidWeight)?;
    if !weight.is_finite() || weight <= 0.0 {
        return Err(ValidationError::InvalidWeight);
    }

    Ok(weight)
}

/// Reject weights above the plausibility ceiling. 20 kg itself is accepted.
pub fn check_plausible_weight(weight: f64) -> Result<f64, ValidationError> {
    if weight > MAX_PLAUSIBLE_WEIGHT_KG {
        return Err(ValidationError::ImplausibleWeight {
            max: MAX_PLAUSIBLE_WEIGHT_KG,
        });
    }
    Ok(weight)
}

/// Parse and fully validate a weight field, in kg.
pub fn parse_weight(raw: Option<&str>) -> Result<f64, ValidationError> {
    parse_positive_weight(raw).and_then(check_plausible_weight)
}

/// Parse a life-stage field: a preset name or a `"min,max"` pair.
pub fn parse_life_stage(raw: Option<&str>) -> Result<FactorRange, ValidationError> {
    LifeStage::resolve(raw.unwrap_or_default())
}

/// Parse a gram amount for reverse mode. An empty field counts as zero.
///
/// Amounts above [`MAX_MANUAL_GRAMS`] are refused so every kcal total fits in a `u32`.
pub fn parse_grams(food: FoodType, raw: Option<&str>) -> Result<f64, ValidationError> {
    let raw = raw.map(str::trim).unwrap_or_default();
    if raw.is_empty() {
        return Ok(0.0);
    }

    let invalid = || ValidationError::InvalidGrams {
        food: food.label().to_string(),
        value: raw.to_string(),
    };

    let grams: f64 = raw.parse().map_err(|_| invalid())?;
    if !grams.is_finite() || !(0.0..=MAX_MANUAL_GRAMS).contains(&grams) {
        return Err(invalid());
    }

    Ok(grams)
}

/// Validate both inputs for an explicit submit.
///
/// Checks run in a fixed order: missing or non-positive weight, then the
/// life stage, then the plausibility ceiling.
pub fn validate_submit(inputs: &CatInputs) -> Result<(f64, FactorRange), ValidationError> {
    let weight = parse_positive_weight(inputs.weight_str())?;
    let factors = parse_life_stage(inputs.life_stage_str())?;
    let weight = check_plausible_weight(weight)?;
    Ok((weight, factors))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_boundaries() {
        assert_eq!(parse_weight(Some("20")), Ok(20.0));
        assert_eq!(
            parse_weight(Some("20.01")),
            Err(ValidationError::ImplausibleWeight { max: 20.0 })
        );
        assert_eq!(parse_weight(Some("0")), Err(ValidationError::InvalidWeight));
        assert_eq!(parse_weight(Some("-3")), Err(ValidationError::InvalidWeight));
    }

    #[test]
    fn test_weight_missing_or_garbage() {
        assert_eq!(parse_weight(None), Err(ValidationError::MissingWeight));
        assert_eq!(parse_weight(Some("   ")), Err(ValidationError::MissingWeight));
        assert_eq!(parse_weight(Some("four")), Err(ValidationError::InvalidWeight));
        assert_eq!(parse_weight(Some("NaN")), Err(ValidationError::InvalidWeight));
        assert_eq!(parse_weight(Some("inf")), Err(ValidationError::InvalidWeight));
    }

    #[test]
    fn test_weight_trims_whitespace() {
        assert_eq!(parse_weight(Some(" 4.5 ")), Ok(4.5));
    }

    #[test]
    fn test_grams_empty_is_zero() {
        assert_eq!(parse_grams(FoodType::WetFood, None), Ok(0.0));
        assert_eq!(parse_grams(FoodType::WetFood, Some("")), Ok(0.0));
        assert_eq!(parse_grams(FoodType::WetFood, Some("12.5")), Ok(12.5));
    }

    #[test]
    fn test_grams_rejects_negative_and_garbage() {
        assert!(matches!(
            parse_grams(FoodType::RawMeat, Some("-1")),
            Err(ValidationError::InvalidGrams { .. })
        ));
        assert!(matches!(
            parse_grams(FoodType::RawMeat, Some("lots")),
            Err(ValidationError::InvalidGrams { .. })
        ));
    }

    #[test]
    fn test_grams_upper_bound() {
        assert_eq!(parse_grams(FoodType::FreezeDried, Some("100000")), Ok(MAX_MANUAL_GRAMS));
        for huge in ["100000.5", "2e9", "5e9", "1e300"] {
            assert!(
                matches!(
                    parse_grams(FoodType::FreezeDried, Some(huge)),
                    Err(ValidationError::InvalidGrams { .. })
                ),
                "{}",
                huge
            );
        }
    }

    #[test]
    fn test_submit_order_weight_before_life_stage() {
        let inputs = CatInputs::new(None, None);
        assert_eq!(validate_submit(&inputs), Err(ValidationError::MissingWeight));

        let inputs = CatInputs::new(Some("0".into()), None);
        assert_eq!(validate_submit(&inputs), Err(ValidationError::InvalidWeight));
    }

    #[test]
    fn test_submit_order_life_stage_before_ceiling() {
        let inputs = CatInputs::new(Some("25".into()), None);
        assert_eq!(validate_submit(&inputs), Err(ValidationError::MissingLifeStage));

        let inputs = CatInputs::new(Some("25".into()), Some("1,1.2".into()));
        assert_eq!(
            validate_submit(&inputs),
            Err(ValidationError::ImplausibleWeight { max: 20.0 })
        );
    }
}
