use crate::calculator::ReferenceRow;
use crate::models::{CalorieReport, FactorRange, LifeStage, ManualReport, ResultView};

/// Describe a factor range by its preset name when it has one.
pub fn describe_factors(factors: &FactorRange) -> String {
    match LifeStage::from_factors(factors) {
        Some(stage) => format!("{} ({})", stage.description(), factors),
        None => format!("custom ({})", factors),
    }
}

/// Display the full calorie report.
pub fn display_report(report: &CalorieReport) {
    println!();
    println!("=== Daily Calories ===");
    println!();
    println!("Weight:     {} kg", report.weight_kg);
    println!("Life stage: {}", describe_factors(&report.factors));
    println!();
    println!("RER: {} kcal/day", report.rer);
    println!("DER: {} - {} kcal/day", report.der.min, report.der.max);
    println!();
    println!("--- Food Equivalents ---");

    let width = report
        .portions
        .iter()
        .map(|p| p.food.label().len())
        .max()
        .unwrap_or(10);

    for portion in &report.portions {
        println!(
            "  {:<width$}  {:>4} - {:>4} g",
            portion.food.label(),
            portion.min_grams,
            portion.max_grams,
            width = width
        );
    }
    println!();
}

/// Display the result of a live computation; a hidden view prints nothing.
pub fn display_result_view(view: &ResultView) {
    if let ResultView::Shown(report) = view {
        display_report(report);
    }
}

/// Display a reverse (grams to kcal) calculation.
pub fn display_manual_report(report: &ManualReport) {
    println!();
    println!("=== Food Calories ===");
    println!();

    for entry in &report.entries {
        println!(
            "  {:<12} {:>7} g  => {:>5} kcal",
            entry.food.label(),
            entry.grams,
            entry.kcal
        );
    }

    println!();
    println!("Total: {} kcal", report.total_kcal);
    println!();
}

/// List the life-stage presets.
pub fn display_life_stages() {
    println!();
    println!("=== Life Stages ===");
    println!();

    let width = LifeStage::ALL
        .iter()
        .map(|s| s.slug().len())
        .max()
        .unwrap_or(10);

    for stage in LifeStage::ALL {
        let f = stage.factors();
        println!(
            "  {:<width$}  {:>3} - {:<3}  {}",
            stage.slug(),
            f.min,
            f.max,
            stage.description(),
            width = width
        );
    }
    println!();
}

/// Display the weight reference table.
pub fn display_reference_table(rows: &[ReferenceRow]) {
    println!();
    println!("=== RER Reference ===");
    println!();

    for row in rows {
        match row.der {
            Some(der) => println!(
                "  {:>2} kg  RER {:>4}  DER {:>4} - {:>4} kcal",
                row.weight_kg, row.rer, der.min, der.max
            ),
            None => println!("  {:>2} kg  RER {:>4} kcal", row.weight_kg, row.rer),
        }
    }
    println!();
}
