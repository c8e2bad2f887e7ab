use anyhow::{Context, Result};
use brewforge_core::{
    carbonation::PrimingDose, efficiency::EfficiencyEstimate, fermentation::FermentationForecast,
};
use brewforge_schemas::{recipe::Recipe, water::SaltAddition};
use serde::Serialize;
use std::{fs, path::Path};

/// Everything one brew-day run produced, for the printed report and the
/// JSON summary written next to the BeerXML file.
#[derive(Serialize)]
pub struct BrewDaySummary<'a> {
    pub recipe: &'a Recipe,
    pub salt_additions: Option<&'a [SaltAddition]>,
    pub priming: Option<&'a PrimingDose>,
    pub efficiency: Option<&'a EfficiencyEstimate>,
    pub forecast: Option<&'a FermentationForecast>,
}

pub fn write_summary_json(output_dir: &Path, summary: &BrewDaySummary) -> Result<()> {
    let path = output_dir.join("summary.json");
    let json = serde_json::to_string_pretty(summary)?;
    fs::write(&path, json).with_context(|| format!("Failed to write {:?}", path))?;
    Ok(())
}

pub fn print_summary(summary: &BrewDaySummary) {
    let recipe = summary.recipe;

    println!("\n\n--- [Brew-Day Summary] ---");
    println!("========================================");
    println!("Generated: {}", chrono::Utc::now().format("%Y-%m-%d %H:%M UTC"));
    println!("Recipe: {} ({})", recipe.name, recipe.style);
    println!(
        "  - Batch: {:>6.2} L | OG {:.3} | FG {:.3} | IBU {:.1}",
        recipe.batch_volume_l, recipe.og, recipe.fg, recipe.ibu
    );

    println!("\nWater Treatment:");
    match summary.salt_additions {
        Some(additions) if !additions.is_empty() => {
            for addition in additions {
                println!(
                    "  - {:<24} {:>6.1} {:<2} ({})",
                    addition.name, addition.amount, addition.unit, addition.rationale
                );
            }
        }
        Some(_) => println!("  - Source water already matches the target profile."),
        None => println!("  - No water profiles supplied."),
    }

    println!("\nBottling:");
    match summary.priming {
        Some(PrimingDose::Sugar { grams }) => {
            println!("  - Priming sugar (sucrose): {grams:.1} g");
        }
        Some(PrimingDose::Dextrose { grams }) => {
            println!("  - Dextrose: {grams:.1} g");
        }
        Some(PrimingDose::Speise { liters }) => {
            println!("  - Speise: {liters:.1} L of reserved wort");
        }
        Some(PrimingDose::Drops { count }) => {
            println!("  - Carbonation drops: {count} (one per 330 mL bottle)");
        }
        None => println!("  - No carbonation section supplied."),
    }

    println!("\nBrewhouse Efficiency:");
    match summary.efficiency {
        Some(estimate) => println!(
            "  - {:.1}% ({}) from {:.2} kg of grain",
            estimate.efficiency_percent, estimate.rating, estimate.total_grain_kg
        ),
        None => println!("  - Not computable (no measurement or empty grain bill)."),
    }

    println!("\nFermentation Forecast:");
    match summary.forecast {
        Some(forecast) if forecast.days_remaining == 0 => {
            println!("  - Final gravity reached; ready to bottle.");
        }
        Some(forecast) => println!(
            "  - About {} day(s) remaining, ready around {} (dropping {:.4} SG/day)",
            forecast.days_remaining,
            forecast.estimated_date.format("%Y-%m-%d"),
            forecast.daily_drop_sg
        ),
        None => println!("  - Not available (needs two readings and a falling gravity)."),
    }

    println!("========================================");
}
