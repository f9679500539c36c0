use dialoguer::{Confirm, Input, Select};

use crate::error::Result;
use crate::models::{CatInputs, FoodType, LifeStage};

const CUSTOM_RANGE_LABEL: &str = "Custom factor range...";

/// Prompt for the cat's weight, pre-filled with the saved value.
pub fn prompt_weight(saved: Option<&str>) -> Result<String> {
    let mut input = Input::<String>::new()
        .with_prompt("Cat's weight (kg)")
        .allow_empty(true);
    if let Some(saved) = saved {
        input = input.default(saved.to_string());
    }
    Ok(input.interact_text()?.trim().to_string())
}

/// Prompt for a life stage.
///
/// Returns the `"min,max"` form, which is what gets saved.
pub fn prompt_life_stage(saved: Option<&str>) -> Result<String> {
    let saved_range = saved.and_then(|s| LifeStage::resolve(s).ok());

    let mut options: Vec<String> = LifeStage::ALL
        .iter()
        .map(|stage| {
            let f = stage.factors();
            format!("{} ({} - {})", stage.description(), f.min, f.max)
        })
        .collect();
    options.push(CUSTOM_RANGE_LABEL.to_string());

    let default = match saved_range {
        Some(range) => LifeStage::ALL
            .iter()
            .position(|stage| stage.factors() == range)
            .unwrap_or(LifeStage::ALL.len()),
        None => 0,
    };

    let selection = Select::new()
        .with_prompt("Life stage")
        .items(&options)
        .default(default)
        .interact()?;

    if let Some(stage) = LifeStage::ALL.get(selection) {
        return Ok(stage.factors().to_string());
    }

    let mut input = Input::<String>::new()
        .with_prompt("Factor range (min,max)")
        .allow_empty(true);
    if let Some(range) = saved_range {
        input = input.default(range.to_string());
    }
    Ok(input.interact_text()?.trim().to_string())
}

/// Prompt for grams of one food type. Empty input means none.
pub fn prompt_grams(food: FoodType) -> Result<String> {
    let input: String = Input::new()
        .with_prompt(format!("{} (g)", food.label()))
        .allow_empty(true)
        .interact_text()?;
    Ok(input.trim().to_string())
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Ask for both inputs, starting from the saved ones.
pub fn collect_inputs(saved: &CatInputs) -> Result<CatInputs> {
    let weight = prompt_weight(saved.weight_str())?;
    let life_stage = prompt_life_stage(saved.life_stage_str())?;

    Ok(CatInputs::new(Some(weight), Some(life_stage)))
}
