//! This module renders the fermentation gravity chart for a brew-day run.

use anyhow::Result;
use brewforge_core::fermentation::FermentationForecast;
use brewforge_schemas::gravity::GravityReading;
use chrono::{DateTime, Utc};
use plotters::prelude::*;
use std::path::Path;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Plots the gravity time series, the target FG line, and the extrapolated
/// completion segment when a forecast exists.
pub fn plot_gravity_trend(
    output_dir: &Path,
    readings: &[GravityReading],
    forecast: Option<&FermentationForecast>,
    target_fg: f64,
) -> Result<()> {
    println!("[Plotting] Generating gravity chart...");

    if readings.is_empty() {
        println!("[Plotting] Warning: No readings to plot.");
        return Ok(());
    }

    let mut sorted: Vec<&GravityReading> = readings.iter().collect();
    sorted.sort_by_key(|r| r.timestamp);
    let start = sorted[0].timestamp;
    let day_of =
        |timestamp: DateTime<Utc>| (timestamp - start).num_seconds() as f64 / SECONDS_PER_DAY;

    let last = sorted[sorted.len() - 1];
    let max_day = forecast
        .map_or(day_of(last.timestamp), |f| day_of(f.estimated_date))
        .max(day_of(last.timestamp))
        .max(1.0);

    let min_gravity = sorted
        .iter()
        .map(|r| r.gravity)
        .fold(target_fg, f64::min);
    let max_gravity = sorted.iter().map(|r| r.gravity).fold(1.0, f64::max);

    let path = output_dir.join("gravity_trend.png");
    let root = BitMapBackend::new(&path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Fermentation Gravity Over Time", ("sans-serif", 50).into_font())
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(60)
        .build_cartesian_2d(
            0f64..max_day * 1.05,
            (min_gravity - 0.002)..(max_gravity + 0.002),
        )?;

    chart
        .configure_mesh()
        .x_desc("Days since first reading")
        .y_desc("Specific gravity")
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            sorted.iter().map(|r| (day_of(r.timestamp), r.gravity)),
            BLUE.stroke_width(2),
        ))?
        .label("Readings")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.filled()));

    chart
        .draw_series(LineSeries::new(
            [(0.0, target_fg), (max_day * 1.05, target_fg)],
            RED.stroke_width(1),
        ))?
        .label("Target FG")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.filled()));

    if let Some(forecast) = forecast {
        chart
            .draw_series(LineSeries::new(
                [
                    (day_of(last.timestamp), last.gravity),
                    (day_of(forecast.estimated_date), target_fg),
                ],
                GREEN.stroke_width(2),
            ))?
            .label("Extrapolation")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GREEN.filled()));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    root.present()?;

    println!("[Plotting] Gravity chart saved to '{}'.", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use brewforge_schemas::gravity::ReadingSource;
    use chrono::{Duration, TimeZone};

    fn reading(day: i64, gravity: f64) -> GravityReading {
        GravityReading {
            timestamp: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap() + Duration::days(day),
            gravity,
            temperature_c: None,
            source: ReadingSource::Manual,
        }
    }

    #[test]
    fn chart_renders_readings_and_forecast() {
        let dir = tempfile::tempdir().expect("tempdir");
        let readings = vec![reading(0, 1.050), reading(2, 1.020)];
        let forecast = brewforge_core::fermentation::predict_completion(&readings, 1.010)
            .expect("predictable");

        plot_gravity_trend(dir.path(), &readings, Some(&forecast), 1.010).expect("renderable");
        assert!(dir.path().join("gravity_trend.png").exists());
    }

    #[test]
    fn empty_log_renders_nothing() {
        let dir = tempfile::tempdir().expect("tempdir");
        plot_gravity_trend(dir.path(), &[], None, 1.010).expect("no-op");
        assert!(!dir.path().join("gravity_trend.png").exists());
    }
}
