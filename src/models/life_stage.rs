use std::fmt;
use std::str::FromStr;

use strsim::jaro_winkler;

use crate::error::ValidationError;

/// Minimum similarity for a mistyped preset name to be suggested.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Largest multiplier accepted in a custom factor pair.
pub const MAX_FACTOR: f64 = 10.0;

/// A (min, max) multiplier pair applied to the resting energy requirement.
///
/// The textual form is `"min,max"`, e.g. `"1,1.2"`. That is also how a
/// selection is persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorRange {
    pub min: f64,
    pub max: f64,
}

impl FactorRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

impl fmt::Display for FactorRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.min, self.max)
    }
}

impl FromStr for FactorRange {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            ValidationError::InvalidLifeStage(format!("'{}' is not a 'min,max' factor pair", s))
        };

        let mut parts = s.split(',').map(str::trim);
        let (Some(min), Some(max), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(invalid());
        };

        let min: f64 = min.parse().map_err(|_| invalid())?;
        let max: f64 = max.parse().map_err(|_| invalid())?;

        // Ordering is not checked: an inverted pair is passed through as-is.
        let in_range = |f: f64| f.is_finite() && f > 0.0 && f <= MAX_FACTOR;
        if !(in_range(min) && in_range(max)) {
            return Err(invalid());
        }

        Ok(FactorRange { min, max })
    }
}

/// Preset physiological/activity categories and their factor ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifeStage {
    KittenUnder4Months,
    Kitten4To12Months,
    NeuteredAdult,
    IntactAdult,
    InactiveAdult,
    WeightLoss,
    WeightGain,
    Senior,
    Pregnant,
    Lactating,
}

impl LifeStage {
    pub const ALL: [LifeStage; 10] = [
        LifeStage::KittenUnder4Months,
        LifeStage::Kitten4To12Months,
        LifeStage::NeuteredAdult,
        LifeStage::IntactAdult,
        LifeStage::InactiveAdult,
        LifeStage::WeightLoss,
        LifeStage::WeightGain,
        LifeStage::Senior,
        LifeStage::Pregnant,
        LifeStage::Lactating,
    ];

    /// Command-line name of the preset.
    pub fn slug(&self) -> &'static str {
        match self {
            LifeStage::KittenUnder4Months => "kitten-young",
            LifeStage::Kitten4To12Months => "kitten",
            LifeStage::NeuteredAdult => "neutered-adult",
            LifeStage::IntactAdult => "intact-adult",
            LifeStage::InactiveAdult => "inactive-adult",
            LifeStage::WeightLoss => "weight-loss",
            LifeStage::WeightGain => "weight-gain",
            LifeStage::Senior => "senior",
            LifeStage::Pregnant => "pregnant",
            LifeStage::Lactating => "lactating",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            LifeStage::KittenUnder4Months => "Kitten (under 4 months)",
            LifeStage::Kitten4To12Months => "Kitten (4 to 12 months)",
            LifeStage::NeuteredAdult => "Adult, neutered",
            LifeStage::IntactAdult => "Adult, intact",
            LifeStage::InactiveAdult => "Adult, inactive or obese-prone",
            LifeStage::WeightLoss => "Weight loss",
            LifeStage::WeightGain => "Weight gain",
            LifeStage::Senior => "Senior (over 7 years)",
            LifeStage::Pregnant => "Pregnant",
            LifeStage::Lactating => "Lactating",
        }
    }

    pub fn factors(&self) -> FactorRange {
        match self {
            LifeStage::KittenUnder4Months => FactorRange::new(2.5, 3.0),
            LifeStage::Kitten4To12Months => FactorRange::new(2.0, 2.5),
            LifeStage::NeuteredAdult => FactorRange::new(1.2, 1.4),
            LifeStage::IntactAdult => FactorRange::new(1.4, 1.6),
            LifeStage::InactiveAdult => FactorRange::new(1.0, 1.2),
            LifeStage::WeightLoss => FactorRange::new(0.8, 1.0),
            LifeStage::WeightGain => FactorRange::new(1.2, 1.8),
            LifeStage::Senior => FactorRange::new(1.1, 1.4),
            LifeStage::Pregnant => FactorRange::new(1.6, 2.0),
            LifeStage::Lactating => FactorRange::new(2.0, 6.0),
        }
    }

    /// Find a preset by exact slug (case-insensitive).
    pub fn from_slug(name: &str) -> Option<LifeStage> {
        let name = name.trim().to_lowercase();
        Self::ALL.into_iter().find(|stage| stage.slug() == name)
    }

    /// Find the preset whose factor range equals `factors`, if any.
    pub fn from_factors(factors: &FactorRange) -> Option<LifeStage> {
        Self::ALL.into_iter().find(|stage| stage.factors() == *factors)
    }

    /// Closest preset name to a mistyped input.
    pub fn suggest(name: &str) -> Option<LifeStage> {
        let name = name.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .map(|stage| (stage, jaro_winkler(stage.slug(), &name)))
            .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(stage, _)| stage)
    }

    /// Resolve a preset name or a raw `"min,max"` pair into a factor range.
    pub fn resolve(input: &str) -> Result<FactorRange, ValidationError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ValidationError::MissingLifeStage);
        }

        if let Some(stage) = Self::from_slug(input) {
            return Ok(stage.factors());
        }

        if input.contains(',') {
            return input.parse();
        }

        let message = match Self::suggest(input) {
            Some(stage) => format!(
                "unknown life stage '{}' (did you mean '{}'?)",
                input,
                stage.slug()
            ),
            None => format!("unknown life stage '{}'", input),
        };
        Err(ValidationError::InvalidLifeStage(message))
    }
}

impl fmt::Display for LifeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
