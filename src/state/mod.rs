mod manager;
mod persistence;

pub use manager::{InputStateManager, LIFE_STAGE_KEY, WEIGHT_KEY};
pub use persistence::{JsonFileStore, KeyValueStore};
