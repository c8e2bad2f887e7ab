//! Priming-sugar dosing for bottle carbonation.
//!
//! Beer at bottling time already holds CO2 from fermentation; how much
//! depends on its temperature. The calculator subtracts that residual from
//! the target and converts the remainder into a dose of the chosen priming
//! agent. It never errors: missing inputs fall back to documented defaults.

use crate::{defaults, units::round_to_tenth};
use brewforge_schemas::carbonation::{CarbonationRequest, PrimingMethod};
use serde::Serialize;

/// Residual-CO2 model. Two formula generations coexist for parity with
/// batches computed under the older one; `Current` is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResidualCo2Model {
    /// Quadratic fit: `3.0378 − 0.05007·T + 0.00026555·T²`.
    Legacy,
    /// Empirical decay: `1.57 × 0.97^T`.
    #[default]
    Current,
}

/// CO2 (g/L) still dissolved in beer fermented at the given temperature.
pub fn residual_co2_g_l(beer_temp_c: f64, model: ResidualCo2Model) -> f64 {
    match model {
        ResidualCo2Model::Legacy => {
            3.0378 - 0.05007 * beer_temp_c + 0.00026555 * beer_temp_c * beer_temp_c
        }
        ResidualCo2Model::Current => 1.57 * 0.97_f64.powf(beer_temp_c),
    }
}

/// A computed priming dose, rounded to reporting precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PrimingDose {
    Sugar { grams: f64 },
    Dextrose { grams: f64 },
    Speise { liters: f64 },
    Drops { count: u32 },
}

/// Computes the priming dose for a bottling run.
pub fn priming_dose(request: &CarbonationRequest, model: ResidualCo2Model) -> PrimingDose {
    let target = request
        .target_co2_g_l
        .unwrap_or(defaults::DEFAULT_TARGET_CO2_G_L);
    let temp = request.beer_temp_c.unwrap_or(defaults::DEFAULT_BEER_TEMP_C);
    let volume = request.batch_volume_l;

    // Never prescribe negative sugar.
    let needed = (target - residual_co2_g_l(temp, model)).max(0.0);

    match request.method {
        PrimingMethod::Sugar => PrimingDose::Sugar {
            grams: round_to_tenth(needed * volume / defaults::CO2_G_PER_G_SUCROSE),
        },
        PrimingMethod::Dextrose => PrimingDose::Dextrose {
            grams: round_to_tenth(needed * volume / defaults::CO2_G_PER_G_DEXTROSE),
        },
        PrimingMethod::Speise => {
            let og = request
                .measured_og
                .filter(|og| *og > 1.0)
                .unwrap_or(defaults::DEFAULT_GRAVITY_SG);
            let extract_plato = (og - 1.0) * 250.0;
            PrimingDose::Speise {
                liters: round_to_tenth(needed * volume / (extract_plato * 0.5)),
            }
        }
        PrimingMethod::Drops => PrimingDose::Drops {
            count: (volume * 1000.0 / defaults::DROP_BOTTLE_ML).ceil() as u32,
        },
    }
}
