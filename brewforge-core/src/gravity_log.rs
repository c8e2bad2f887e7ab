//! Persistence for a batch's fermentation log: an append-only CSV time
//! series of gravity readings, plus a JSON array loader for logs exported
//! from the app's cloud backup.

use crate::error::BrewforgeError;
use brewforge_schemas::gravity::GravityReading;
use csv::Writer;
use std::fs;

pub struct GravityLogger {
    writer: Writer<fs::File>,
}

impl GravityLogger {
    pub fn new(path: &str) -> Result<Self, BrewforgeError> {
        let writer =
            Writer::from_path(path).map_err(|e| BrewforgeError::CsvError(path.to_string(), e))?;
        Ok(Self { writer })
    }

    pub fn append(&mut self, reading: &GravityReading) -> Result<(), anyhow::Error> {
        self.writer.serialize(reading)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Loads a fermentation log. CSV is the native format; a `.json` path is
/// read as a plain array of readings instead.
pub fn read_gravity_log(path: &str) -> Result<Vec<GravityReading>, BrewforgeError> {
    if path.ends_with(".json") {
        let content =
            fs::read_to_string(path).map_err(|e| BrewforgeError::FileIO(path.to_string(), e))?;
        let readings: Vec<GravityReading> = serde_json::from_str(&content)?;
        return Ok(readings);
    }

    let mut reader =
        csv::Reader::from_path(path).map_err(|e| BrewforgeError::CsvError(path.to_string(), e))?;
    let mut readings = Vec::new();
    for result in reader.deserialize() {
        let reading: GravityReading =
            result.map_err(|e| BrewforgeError::CsvError(path.to_string(), e))?;
        readings.push(reading);
    }
    Ok(readings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use brewforge_schemas::gravity::ReadingSource;
    use chrono::{Duration, TimeZone, Utc};

    fn reading(day: i64, gravity: f64) -> GravityReading {
        GravityReading {
            timestamp: Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap() + Duration::days(day),
            gravity,
            temperature_c: Some(19.5),
            source: ReadingSource::Device,
        }
    }

    #[test]
    fn csv_log_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("fermentation.csv");
        let path = path.to_str().expect("utf-8 path");

        let mut logger = GravityLogger::new(path).expect("writable log");
        for (day, gravity) in [(0, 1.050), (1, 1.040), (2, 1.030)] {
            logger.append(&reading(day, gravity)).expect("append");
        }
        drop(logger);

        let readings = read_gravity_log(path).expect("readable log");
        assert_eq!(readings.len(), 3);
        assert_eq!(readings[0], reading(0, 1.050));
        assert_eq!(readings[2].gravity, 1.030);
    }

    #[test]
    fn json_export_is_accepted_too() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("backup.json");
        let readings = vec![reading(0, 1.050), reading(2, 1.020)];
        fs::write(&path, serde_json::to_string(&readings).expect("serializable"))
            .expect("write");

        let loaded = read_gravity_log(path.to_str().expect("utf-8 path")).expect("readable");
        assert_eq!(loaded, readings);
    }

    #[test]
    fn missing_csv_surfaces_as_csv_error() {
        let err = read_gravity_log("/nonexistent/fermentation.csv").unwrap_err();
        assert!(matches!(err, BrewforgeError::CsvError(_, _)));
    }
}
