use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadingSource {
    Manual,
    Device,
}

/// A single gravity measurement inside a batch's fermentation log.
/// Immutable once recorded; sequences are ordered by timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GravityReading {
    pub timestamp: DateTime<Utc>,
    /// Specific gravity, e.g. 1.050.
    pub gravity: f64,
    pub temperature_c: Option<f64>,
    pub source: ReadingSource,
}
