//! Completion-date forecasting from a sparse gravity time series.
//!
//! A two-point linear extrapolation over the last two readings. This is
//! intentionally not a regression over the full series; a fancier fit would
//! change the dates reported and break parity with the reference tool.

use brewforge_schemas::gravity::GravityReading;
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// Daily gravity drops below this are treated as a stalled fermentation.
pub const MIN_DAILY_DROP_SG: f64 = 0.001;

const SECONDS_PER_DAY: f64 = 86_400.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FermentationForecast {
    pub days_remaining: i64,
    pub estimated_date: DateTime<Utc>,
    /// Observed gravity drop per day between the last two readings.
    pub daily_drop_sg: f64,
}

/// Estimates when the beer reaches `target_fg`, or `None` when no sound
/// prediction is possible (fewer than two readings, stalled or rising
/// gravity, or readings without elapsed time between them).
pub fn predict_completion(
    readings: &[GravityReading],
    target_fg: f64,
) -> Option<FermentationForecast> {
    if readings.len() < 2 {
        return None;
    }

    let mut sorted: Vec<&GravityReading> = readings.iter().collect();
    sorted.sort_by_key(|r| r.timestamp);
    let last = sorted[sorted.len() - 1];
    let previous = sorted[sorted.len() - 2];

    let days_between =
        (last.timestamp - previous.timestamp).num_seconds() as f64 / SECONDS_PER_DAY;
    if days_between <= 0.0 {
        return None;
    }

    let daily_drop = (previous.gravity - last.gravity) / days_between;
    if daily_drop < MIN_DAILY_DROP_SG {
        // Stalled or rising; extrapolating noise produces nonsense dates.
        return None;
    }

    if last.gravity <= target_fg {
        return Some(FermentationForecast {
            days_remaining: 0,
            estimated_date: last.timestamp,
            daily_drop_sg: daily_drop,
        });
    }

    let days_remaining = ((last.gravity - target_fg) / daily_drop).ceil() as i64;
    Some(FermentationForecast {
        days_remaining,
        estimated_date: last.timestamp + Duration::days(days_remaining),
        daily_drop_sg: daily_drop,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use brewforge_schemas::gravity::ReadingSource;
    use chrono::TimeZone;

    fn reading(day: i64, gravity: f64) -> GravityReading {
        GravityReading {
            timestamp: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap() + Duration::days(day),
            gravity,
            temperature_c: None,
            source: ReadingSource::Manual,
        }
    }

    #[test]
    fn two_point_extrapolation() {
        let readings = vec![reading(0, 1.050), reading(2, 1.020)];
        let forecast = predict_completion(&readings, 1.010).expect("prediction possible");
        assert!((forecast.daily_drop_sg - 0.015).abs() < 1e-12);
        // ceil((1.020 − 1.010) / 0.015) = 1 day.
        assert_eq!(forecast.days_remaining, 1);
        assert_eq!(forecast.estimated_date, readings[1].timestamp + Duration::days(1));
    }

    #[test]
    fn unsorted_input_is_sorted_first() {
        let readings = vec![reading(2, 1.020), reading(0, 1.050)];
        let forecast = predict_completion(&readings, 1.010).expect("prediction possible");
        assert_eq!(forecast.days_remaining, 1);
    }

    #[test]
    fn a_single_reading_is_not_enough() {
        assert_eq!(predict_completion(&[reading(0, 1.050)], 1.010), None);
        assert_eq!(predict_completion(&[], 1.010), None);
    }

    #[test]
    fn stalled_fermentation_is_not_extrapolated() {
        let readings = vec![reading(0, 1.0125), reading(5, 1.0121)];
        assert_eq!(predict_completion(&readings, 1.010), None);
    }

    #[test]
    fn rising_gravity_is_not_extrapolated() {
        let readings = vec![reading(0, 1.010), reading(2, 1.014)];
        assert_eq!(predict_completion(&readings, 1.008), None);
    }

    #[test]
    fn simultaneous_readings_cannot_predict() {
        let readings = vec![reading(0, 1.050), reading(0, 1.020)];
        assert_eq!(predict_completion(&readings, 1.010), None);
    }

    #[test]
    fn already_at_target_reports_zero_days() {
        let readings = vec![reading(0, 1.020), reading(2, 1.009)];
        let forecast = predict_completion(&readings, 1.010).expect("prediction possible");
        assert_eq!(forecast.days_remaining, 0);
        assert_eq!(forecast.estimated_date, readings[1].timestamp);
    }

    #[test]
    fn only_the_last_two_points_matter() {
        // An early fast drop must not influence the forecast.
        let readings = vec![reading(0, 1.080), reading(1, 1.040), reading(3, 1.020)];
        let forecast = predict_completion(&readings, 1.010).expect("prediction possible");
        assert!((forecast.daily_drop_sg - 0.010).abs() < 1e-12);
        assert_eq!(forecast.days_remaining, 1);
    }
}
