use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimingMethod {
    Sugar,
    Dextrose,
    Speise,
    Drops,
}

/// Input to the priming calculator. Constructed and discarded per
/// calculation; missing optional fields fall back to documented defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CarbonationRequest {
    /// Target dissolved CO2 in g/L.
    pub target_co2_g_l: Option<f64>,
    /// Beer temperature at bottling time, determines residual CO2.
    pub beer_temp_c: Option<f64>,
    pub batch_volume_l: f64,
    pub method: PrimingMethod,
    /// Measured original gravity, required for speise dosing.
    pub measured_og: Option<f64>,
}
