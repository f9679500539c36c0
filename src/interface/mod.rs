pub mod export;
pub mod prompts;
pub mod render;

pub use export::write_reference_csv;
pub use prompts::{collect_inputs, prompt_grams, prompt_life_stage, prompt_weight, prompt_yes_no};
pub use render::{
    display_life_stages, display_manual_report, display_reference_table, display_report,
    display_result_view,
};
