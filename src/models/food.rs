use std::fmt;

/// The food categories a daily requirement is converted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FoodType {
    /// Canned complete wet food.
    WetFood,
    /// Raw meat.
    RawMeat,
    /// Freeze-dried treats or meals.
    FreezeDried,
}

impl FoodType {
    /// All food types in display order.
    pub const ALL: [FoodType; 3] = [FoodType::WetFood, FoodType::RawMeat, FoodType::FreezeDried];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            FoodType::WetFood => "Wet food",
            FoodType::RawMeat => "Raw meat",
            FoodType::FreezeDried => "Freeze-dried",
        }
    }
}

impl fmt::Display for FoodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Energy density of a food type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoodRatio {
    pub food: FoodType,
    pub kcal_per_gram: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_display_order() {
        let labels: Vec<&str> = FoodType::ALL.iter().map(|f| f.label()).collect();
        assert_eq!(labels, vec!["Wet food", "Raw meat", "Freeze-dried"]);
    }
}
