//! Named fallback and conversion constants shared by all calculators.
//!
//! Brewers feed these calculators free-form text copied from many source
//! tools. The parsers degrade to these documented defaults instead of
//! erroring so that every downstream calculation always receives a usable
//! number. Exported files are numerically compared against reference brewing
//! software, so the exact values here are load-bearing.

/// Batch volume assumed when a volume field cannot be parsed at all.
pub const DEFAULT_BATCH_VOLUME_L: f64 = 20.0;

/// Gravity assumed when a gravity field cannot be parsed at all.
pub const DEFAULT_GRAVITY_SG: f64 = 1.050;

/// Final gravity assumed when a recipe carries no FG field whatsoever.
pub const DEFAULT_FINAL_GRAVITY_SG: f64 = 1.010;

/// Duration assumed when a time field cannot be parsed.
pub const DEFAULT_DURATION_MIN: f64 = 0.0;

/// Grain weight assumed when a weight field cannot be parsed.
pub const DEFAULT_WEIGHT_KG: f64 = 0.0;

/// Target dissolved CO2 when the bottling request omits one.
pub const DEFAULT_TARGET_CO2_G_L: f64 = 5.0;

/// Beer temperature at bottling when the request omits one.
pub const DEFAULT_BEER_TEMP_C: f64 = 20.0;

/// Mash temperature used when no main mash step has a parseable temperature.
pub const FALLBACK_MASH_TEMP_C: f64 = 67.0;

/// Strike offset applied to a "Mash In"/"Einmaischen" step without its own
/// absolute temperature, relative to the first main mash step.
pub const MASH_IN_STRIKE_OFFSET_C: f64 = 3.0;

// Unit conversion factors.
pub const GALLON_L: f64 = 3.78541;
pub const POUND_KG: f64 = 0.453592;
pub const OUNCE_KG: f64 = 0.0283495;

/// Grams of CO2 produced per gram of sucrose fermented.
pub const CO2_G_PER_G_SUCROSE: f64 = 0.495;

/// Grams of CO2 produced per gram of dextrose fermented.
pub const CO2_G_PER_G_DEXTROSE: f64 = 0.50;

/// Bottle size assumed when dosing carbonation drops, one drop per bottle.
pub const DROP_BOTTLE_ML: f64 = 330.0;
