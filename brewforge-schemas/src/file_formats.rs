use crate::{
    carbonation::PrimingMethod,
    recipe::{NumberOrText, RawRecipe, UnitSystem},
    water::WaterProfile,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct BrewSheetFile {
    pub schema_version: String,
    pub brew_sheet: BrewSheet,
}

/// Everything the application needs for one brew-day run: the recipe plus the
/// optional measurement sections feeding the individual calculators.
#[derive(Debug, Deserialize)]
pub struct BrewSheet {
    pub recipe: RawRecipe,
    #[serde(default)]
    pub unit_system: UnitSystem,
    pub source_water: Option<WaterProfile>,
    pub target_water: Option<WaterProfile>,
    pub carbonation: Option<CarbonationSection>,
    pub measured: Option<MeasuredBatch>,
    /// Target final gravity for the fermentation forecast; free text allowed.
    pub target_fg: Option<NumberOrText>,
}

#[derive(Debug, Deserialize)]
pub struct CarbonationSection {
    pub target_co2_g_l: Option<f64>,
    pub beer_temp_c: Option<f64>,
    #[serde(default = "default_priming_method")]
    pub method: PrimingMethod,
    pub measured_og: Option<NumberOrText>,
}

fn default_priming_method() -> PrimingMethod {
    PrimingMethod::Sugar
}

/// A single post-boil measurement point used for the efficiency estimate.
#[derive(Debug, Deserialize)]
pub struct MeasuredBatch {
    pub volume: Option<NumberOrText>,
    pub gravity: Option<NumberOrText>,
}
