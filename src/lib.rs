pub mod calculator;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod state;

pub use error::{CalcError, Result, ValidationError};
pub use models::{CalorieReport, CatInputs, DerRange, FactorRange, FoodType, LifeStage};
