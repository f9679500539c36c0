use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cat_calorie_calc::calculator::{
    compute_auto, compute_manual, compute_submit, parse_life_stage, reference_table,
};
use cat_calorie_calc::cli::{Cli, Command, InputArgs};
use cat_calorie_calc::error::Result;
use cat_calorie_calc::interface::{
    collect_inputs, display_life_stages, display_manual_report, display_reference_table,
    display_report, display_result_view, prompt_grams, prompt_yes_no, write_reference_csv,
};
use cat_calorie_calc::models::{CatInputs, FoodType, ResultView};
use cat_calorie_calc::state::{InputStateManager, JsonFileStore};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("cat_calorie_calc=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();
    let mut state = InputStateManager::new(JsonFileStore::new(&cli.file));

    match command {
        Command::Interactive => cmd_interactive(&mut state),
        Command::Calc(args) => cmd_calc(&mut state, args),
        Command::Auto(args) => cmd_auto(&mut state, args),
        Command::Manual {
            wet,
            raw,
            freeze_dried,
        } => cmd_manual(wet, raw, freeze_dried),
        Command::Stages => {
            display_life_stages();
            Ok(())
        }
        Command::Reference { life_stage, csv } => cmd_reference(life_stage, csv.as_deref()),
        Command::Reset => {
            state.clear();
            println!("Saved inputs cleared.");
            Ok(())
        }
    }
}

fn given_inputs(args: InputArgs) -> CatInputs {
    CatInputs::new(args.weight, args.life_stage)
}

/// Prompt until the inputs validate, then show the report.
fn cmd_interactive(state: &mut InputStateManager<JsonFileStore>) -> Result<()> {
    let mut current = state.load();

    if let ResultView::Shown(report) = compute_auto(&current) {
        println!("Last saved inputs:");
        display_report(&report);
    }

    loop {
        current = collect_inputs(&current)?;
        state.save(&current);

        match compute_submit(&current) {
            Ok(report) => {
                display_report(&report);
                return Ok(());
            }
            Err(e) => {
                eprintln!("{}", e);
                if !prompt_yes_no("Try again?", true)? {
                    return Ok(());
                }
            }
        }
    }
}

/// Explicit submit: validation failures abort with a message.
fn cmd_calc(state: &mut InputStateManager<JsonFileStore>, args: InputArgs) -> Result<()> {
    let inputs = state.apply(&given_inputs(args));
    let report = compute_submit(&inputs)?;
    display_report(&report);
    Ok(())
}

/// Live path: incomplete inputs produce no output and no error.
fn cmd_auto(state: &mut InputStateManager<JsonFileStore>, args: InputArgs) -> Result<()> {
    let inputs = state.apply(&given_inputs(args));
    display_result_view(&compute_auto(&inputs));
    Ok(())
}

fn cmd_manual(
    wet: Option<String>,
    raw: Option<String>,
    freeze_dried: Option<String>,
) -> Result<()> {
    let fields = [
        (FoodType::WetFood, wet),
        (FoodType::RawMeat, raw),
        (FoodType::FreezeDried, freeze_dried),
    ];

    // With no amounts on the command line, ask for each one.
    let interactive = fields.iter().all(|(_, value)| value.is_none());

    let mut values = Vec::with_capacity(fields.len());
    for (food, value) in fields {
        let value = match value {
            Some(value) => Some(value),
            None if interactive => Some(prompt_grams(food)?),
            None => None,
        };
        values.push((food, value));
    }

    let fields: Vec<(FoodType, Option<&str>)> = values
        .iter()
        .map(|(food, value)| (*food, value.as_deref()))
        .collect();
    display_manual_report(&compute_manual(&fields)?);
    Ok(())
}

fn cmd_reference(life_stage: Option<String>, csv: Option<&Path>) -> Result<()> {
    let factors = match life_stage {
        Some(stage) => Some(parse_life_stage(Some(stage.as_str()))?),
        None => None,
    };

    let rows = reference_table(factors);
    display_reference_table(&rows);

    if let Some(path) = csv {
        write_reference_csv(&rows, path)?;
        println!("Reference table written to {}", path.display());
    }
    Ok(())
}
