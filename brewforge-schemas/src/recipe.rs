use serde::{Deserialize, Serialize};

/// Display/input unit convention for user-entered values without a suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitSystem {
    Metric,
    Imperial,
}

impl Default for UnitSystem {
    fn default() -> Self {
        UnitSystem::Metric
    }
}

/// A field that users (or source tools) may supply either as a number or as
/// free text with a unit suffix ("5 kg", "12°P", "90 min").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberOrText {
    Number(f64),
    Text(String),
}

impl NumberOrText {
    pub fn as_text(&self) -> String {
        match self {
            NumberOrText::Number(n) => n.to_string(),
            NumberOrText::Text(t) => t.clone(),
        }
    }
}

/// A recipe as it arrives from external tools: optional everything, legacy
/// field aliases, and free-text values. Resolved exactly once by the
/// normalization adapter; calculators never consume this shape.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRecipe {
    pub name: Option<String>,
    pub style: Option<String>,
    pub brewer: Option<String>,
    #[serde(alias = "original_gravity")]
    pub og: Option<NumberOrText>,
    #[serde(alias = "final_gravity", alias = "target_fg")]
    pub fg: Option<NumberOrText>,
    #[serde(alias = "batch_volume", alias = "volume")]
    pub batch_size: Option<NumberOrText>,
    #[serde(alias = "boil_duration")]
    pub boil_time: Option<NumberOrText>,
    pub ibu: Option<f64>,
    #[serde(alias = "color", alias = "ebc")]
    pub color_ebc: Option<f64>,
    #[serde(alias = "alcohol")]
    pub abv: Option<f64>,
    #[serde(default)]
    pub fermentables: Vec<RawFermentable>,
    #[serde(default)]
    pub hops: Vec<RawHop>,
    pub yeast: Option<RawYeast>,
    #[serde(default, alias = "mash_schedule")]
    pub mash_steps: Vec<RawMashStep>,
    /// Unrecognized legacy fields from source tools, tolerated rather than
    /// rejected.
    #[serde(flatten)]
    pub extra: std::collections::HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFermentable {
    pub name: Option<String>,
    /// Free-text amount ("5 kg", "250 g", "1.2 lb").
    #[serde(alias = "weight")]
    pub amount: Option<NumberOrText>,
    /// Legacy numeric fallback, always grams.
    #[serde(alias = "grams")]
    pub amount_g: Option<f64>,
    #[serde(alias = "yield")]
    pub yield_percent: Option<f64>,
    #[serde(alias = "color")]
    pub color_ebc: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawHop {
    pub name: Option<String>,
    /// Free-text amount; a bare number is grams.
    #[serde(alias = "weight")]
    pub amount: Option<NumberOrText>,
    #[serde(alias = "alpha_acid")]
    pub alpha_percent: Option<f64>,
    /// Boil time or usage text ("60 min", "dry hop 3 days").
    #[serde(alias = "boil_time")]
    pub time: Option<NumberOrText>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawYeast {
    pub name: Option<String>,
    pub laboratory: Option<String>,
    pub attenuation_percent: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMashStep {
    pub name: Option<String>,
    /// Absolute or relative free text; relative values are rejected during
    /// normalization and resolved by the exporter's fallback rules.
    #[serde(alias = "temp")]
    pub temperature: Option<NumberOrText>,
    #[serde(alias = "time")]
    pub duration: Option<NumberOrText>,
}

/// The normalized recipe every calculator consumes: canonical units only
/// (liters, kilograms, Celsius, minutes, specific gravity).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub style: String,
    pub brewer: String,
    pub og: f64,
    pub fg: f64,
    pub batch_volume_l: f64,
    pub boil_time_min: f64,
    pub ibu: f64,
    pub color_ebc: f64,
    pub abv: f64,
    pub fermentables: Vec<Fermentable>,
    pub hops: Vec<HopAddition>,
    pub yeast: Option<Yeast>,
    pub mash_steps: Vec<MashStep>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fermentable {
    pub name: String,
    pub amount_kg: f64,
    pub yield_percent: f64,
    pub color_ebc: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HopAddition {
    pub name: String,
    pub amount_kg: f64,
    pub alpha_percent: f64,
    pub time_min: f64,
    /// Original time text, kept for usage classification ("dry hop").
    pub time_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Yeast {
    pub name: String,
    pub laboratory: String,
    pub attenuation_percent: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MashStep {
    pub name: String,
    /// None when the user entered a relative or unparsable temperature.
    pub temperature_c: Option<f64>,
    pub duration_min: f64,
}
