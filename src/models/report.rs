use crate::models::{FactorRange, FoodType};

/// Daily energy requirement bounds in kcal/day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerRange {
    pub min: u32,
    pub max: u32,
}

/// Grams of one food type that cover the DER bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoodPortion {
    pub food: FoodType,
    pub min_grams: u32,
    pub max_grams: u32,
}

/// Everything derived from a weight and a life-stage factor range.
#[derive(Debug, Clone, PartialEq)]
pub struct CalorieReport {
    pub weight_kg: f64,
    pub factors: FactorRange,
    /// Resting energy requirement, kcal/day.
    pub rer: u32,
    pub der: DerRange,
    pub portions: Vec<FoodPortion>,
}

impl CalorieReport {
    /// Portion for a specific food type.
    pub fn portion(&self, food: FoodType) -> Option<&FoodPortion> {
        self.portions.iter().find(|p| p.food == food)
    }
}

/// What the result area should show after a live (auto) computation.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultView {
    /// Inputs are incomplete or invalid; nothing is displayed.
    Hidden,
    Shown(CalorieReport),
}

impl ResultView {
    pub fn is_hidden(&self) -> bool {
        matches!(self, ResultView::Hidden)
    }

    pub fn report(&self) -> Option<&CalorieReport> {
        match self {
            ResultView::Hidden => None,
            ResultView::Shown(report) => Some(report),
        }
    }
}

/// One line of a reverse (grams to kcal) calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ManualEntry {
    pub food: FoodType,
    pub grams: f64,
    pub kcal: u32,
}

/// Result of converting user-entered food masses back into calories.
#[derive(Debug, Clone, PartialEq)]
pub struct ManualReport {
    pub entries: Vec<ManualEntry>,
    pub total_kcal: u32,
}
