mod food;
mod inputs;
mod life_stage;
mod report;

pub use food::{FoodRatio, FoodType};
pub use inputs::CatInputs;
pub use life_stage::{FactorRange, LifeStage, MAX_FACTOR};
pub use report::{CalorieReport, DerRange, FoodPortion, ManualEntry, ManualReport, ResultView};
