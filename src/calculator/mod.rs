pub mod constants;
pub mod conversion;
pub mod energy;
pub mod reference;
pub mod report;
pub mod validation;

pub use constants::*;
pub use conversion::{convert_grams_to_kcal, convert_kcal_to_grams, food_portions, manual_totals};
pub use energy::{calculate_der, calculate_rer};
pub use reference::{reference_table, ReferenceRow};
pub use report::{build_report, compute_auto, compute_manual, compute_submit, try_build_report};
pub use validation::{parse_grams, parse_life_stage, parse_weight, validate_submit};
