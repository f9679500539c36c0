use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Cat Calorie Calculator — daily energy needs and food portions for a cat.
#[derive(Parser, Debug)]
#[command(name = "cat_calorie_calc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the saved-inputs JSON file.
    #[arg(short, long, env = "CAT_CALC_STATE", default_value = "cat_state.json")]
    pub file: PathBuf,
}

/// Weight and life stage as given on the command line.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Body weight in kg. Falls back to the saved value.
    #[arg(short, long)]
    pub weight: Option<String>,

    /// Life-stage preset name or a "min,max" factor pair. Falls back to the saved value.
    #[arg(short, long)]
    pub life_stage: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Prompt for weight and life stage, then compute.
    Interactive,

    /// Compute and report every validation problem.
    Calc(InputArgs),

    /// Compute silently: print nothing when inputs are incomplete.
    Auto(InputArgs),

    /// Convert food masses back into calories.
    Manual {
        /// Grams of wet food.
        #[arg(long)]
        wet: Option<String>,

        /// Grams of raw meat.
        #[arg(long)]
        raw: Option<String>,

        /// Grams of freeze-dried food.
        #[arg(long)]
        freeze_dried: Option<String>,
    },

    /// List life-stage presets.
    Stages,

    /// Show RER for 1 to 15 kg.
    Reference {
        /// Also show the DER range for this life stage.
        #[arg(short, long)]
        life_stage: Option<String>,

        /// Write the table to a CSV file.
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Forget the saved weight and life stage.
    Reset,
}

impl Default for Command {
    fn default() -> Self {
        Command::Interactive
    }
}
