use tracing::info;

use crate::models::CatInputs;
use crate::state::persistence::KeyValueStore;

/// Store key for the last entered weight.
pub const WEIGHT_KEY: &str = "cat_weight";

/// Store key for the last selected life stage (`"min,max"` or preset name).
pub const LIFE_STAGE_KEY: &str = "cat_lifestage";

/// Remembers the user's last inputs across runs.
pub struct InputStateManager<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> InputStateManager<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read the saved inputs. Anything missing or unreadable is `None`.
    pub fn load(&self) -> CatInputs {
        CatInputs {
            weight: non_empty(self.store.get(WEIGHT_KEY)),
            life_stage: non_empty(self.store.get(LIFE_STAGE_KEY)),
        }
    }

    /// Save the non-empty fields of `inputs`; empty fields leave the stored
    /// value untouched.
    pub fn save(&mut self, inputs: &CatInputs) {
        if let Some(weight) = non_empty(inputs.weight.clone()) {
            self.store.set(WEIGHT_KEY, &weight);
            info!(weight = %weight, "saved weight");
        }
        if let Some(life_stage) = non_empty(inputs.life_stage.clone()) {
            self.store.set(LIFE_STAGE_KEY, &life_stage);
            info!(life_stage = %life_stage, "saved life stage");
        }
    }

    /// Record the fields the user just gave and return them layered over
    /// the saved ones.
    pub fn apply(&mut self, given: &CatInputs) -> CatInputs {
        self.save(given);
        self.load().merged_with(given)
    }

    /// Forget both saved inputs.
    pub fn clear(&mut self) {
        self.store.remove(WEIGHT_KEY);
        self.store.remove(LIFE_STAGE_KEY);
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
