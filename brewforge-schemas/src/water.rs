use serde::{Deserialize, Serialize};

/// Mineral profile of a brewing water, all concentrations in mg/L.
/// Callers may supply partial profiles; missing ions default to 0.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WaterProfile {
    pub calcium: f64,
    pub magnesium: f64,
    pub sodium: f64,
    pub chloride: f64,
    pub sulfate: f64,
    pub bicarbonate: f64,
}

/// A proposed brewing-salt (or acid) addition. Output-only: produced fresh by
/// each solver invocation, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaltAddition {
    pub name: String,
    pub amount: f64,
    pub unit: String,
    pub rationale: String,
}
