use anyhow::{Context, Result};
use brewforge_core::{
    beerxml,
    carbonation::{self, ResidualCo2Model},
    efficiency, fermentation, gravity_log, normalize, units, water,
};
use brewforge_schemas::carbonation::CarbonationRequest;
use clap::Parser;
use std::fs;
use std::path::PathBuf;

mod config;
mod plotting;
mod report;

/// Brew-day calculators: water treatment, priming, efficiency, forecast,
/// and BeerXML export from a single brew sheet.
#[derive(Parser)]
#[command(name = "brewforge", version)]
struct Cli {
    /// Path to the brew sheet YAML file
    sheet: PathBuf,

    /// Fermentation log (CSV, or a JSON backup export)
    #[arg(long)]
    gravity_log: Option<PathBuf>,

    /// Output directory for the BeerXML file, summary and charts
    #[arg(long, default_value = "./out")]
    out_dir: PathBuf,

    /// Use the older residual-CO2 formula, for parity with batches bottled
    /// under it
    #[arg(long)]
    legacy_residual_co2: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    println!("--- Brewforge Application ---");

    let sheet = config::load_brew_sheet(&cli.sheet)?;
    let recipe = normalize::normalize_recipe(&sheet.recipe, sheet.unit_system);

    fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("Failed to create output directory {:?}", cli.out_dir))?;

    let residual_model = if cli.legacy_residual_co2 {
        ResidualCo2Model::Legacy
    } else {
        ResidualCo2Model::Current
    };

    let salt_additions = match (&sheet.source_water, &sheet.target_water) {
        (Some(source), Some(target)) => Some(water::plan_salt_additions(
            source,
            target,
            recipe.batch_volume_l,
        )),
        _ => None,
    };

    let priming = sheet.carbonation.as_ref().map(|section| {
        let request = CarbonationRequest {
            target_co2_g_l: section.target_co2_g_l,
            beer_temp_c: section.beer_temp_c,
            batch_volume_l: recipe.batch_volume_l,
            method: section.method,
            measured_og: section
                .measured_og
                .as_ref()
                .map(|og| units::parse_gravity(&og.as_text()).value()),
        };
        carbonation::priming_dose(&request, residual_model)
    });

    let efficiency = sheet.measured.as_ref().and_then(|measured| {
        let volume = measured
            .volume
            .as_ref()
            .map(|v| units::parse_volume(&v.as_text(), sheet.unit_system).value())?;
        let gravity = measured
            .gravity
            .as_ref()
            .map(|g| units::parse_gravity(&g.as_text()).value())?;
        efficiency::estimate_efficiency(&recipe, volume, gravity)
    });

    let readings = match &cli.gravity_log {
        Some(path) => {
            let path = path
                .to_str()
                .context("Gravity log path is not valid UTF-8")?;
            gravity_log::read_gravity_log(path)?
        }
        None => Vec::new(),
    };
    let target_fg = sheet
        .target_fg
        .as_ref()
        .map(|fg| units::parse_gravity(&fg.as_text()).value())
        .unwrap_or(recipe.fg);
    let forecast = fermentation::predict_completion(&readings, target_fg);

    let xml = beerxml::export_recipe(&recipe)?;
    let xml_path = cli.out_dir.join("recipe.xml");
    fs::write(&xml_path, &xml)
        .with_context(|| format!("Failed to write BeerXML file {:?}", xml_path))?;
    println!("BeerXML export written to '{}'.", xml_path.display());

    if !readings.is_empty() {
        plotting::plot_gravity_trend(&cli.out_dir, &readings, forecast.as_ref(), target_fg)?;
    }

    let summary = report::BrewDaySummary {
        recipe: &recipe,
        salt_additions: salt_additions.as_deref(),
        priming: priming.as_ref(),
        efficiency: efficiency.as_ref(),
        forecast: forecast.as_ref(),
    };
    report::write_summary_json(&cli.out_dir, &summary)?;
    report::print_summary(&summary);

    println!(
        "\nBrew-day run complete. Results are in '{}'",
        cli.out_dir.display()
    );
    Ok(())
}
