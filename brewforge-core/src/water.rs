//! Brewing-salt planner moving a source water profile toward a target.
//!
//! This is a deliberate greedy approximation with a fixed ion-priority
//! order (sulfate, chloride, magnesium), not a multi-ion equilibrium
//! solver. The per-gram contributions are calibrated against a 10 L
//! reference batch and scale linearly with batch volume. Behavior parity
//! with the reference tool is the acceptance criterion, so the constants
//! and ordering here must not be "improved".

use crate::units::round_to_tenth;
use brewforge_schemas::water::{SaltAddition, WaterProfile};

// Ion contributions in ppm per gram of salt in 10 L of water.
const GYPSUM_SO4_PPM: f64 = 55.8;
const GYPSUM_CA_PPM: f64 = 23.3;
const CALCIUM_CHLORIDE_CL_PPM: f64 = 48.2;
const CALCIUM_CHLORIDE_CA_PPM: f64 = 27.2;
const EPSOM_MG_PPM: f64 = 9.9;
const EPSOM_SO4_PPM: f64 = 39.0;

/// Lactic acid (80 %) dose per ppm of bicarbonate reduction per liter.
const LACTIC_ACID_ML_PER_PPM_L: f64 = 0.002;

/// Bicarbonate above this level is worth acidifying at all.
const BICARBONATE_ACTION_LEVEL_PPM: f64 = 60.0;

/// Additions below this mass/volume are not worth mentioning to the user.
const MATERIALITY_THRESHOLD: f64 = 0.5;

/// Proposes salt additions to move `source` toward `target` for the given
/// batch volume. Partial profiles are fine; missing ions read as 0.
pub fn plan_salt_additions(
    source: &WaterProfile,
    target: &WaterProfile,
    batch_volume_l: f64,
) -> Vec<SaltAddition> {
    let scale = batch_volume_l / 10.0;
    let mut additions = Vec::new();

    let needed_sulfate = (target.sulfate - source.sulfate).max(0.0);
    let needed_chloride = (target.chloride - source.chloride).max(0.0);
    let needed_magnesium = (target.magnesium - source.magnesium).max(0.0);
    let mut needed_calcium = (target.calcium - source.calcium).max(0.0);

    if needed_sulfate > 0.0 {
        let grams = needed_sulfate / GYPSUM_SO4_PPM * scale;
        let calcium_gained = grams * GYPSUM_CA_PPM / scale;
        needed_calcium = (needed_calcium - calcium_gained).max(0.0);
        push_if_material(
            &mut additions,
            "Gypsum (CaSO4)",
            grams,
            "g",
            format!(
                "raises sulfate by {:.0} ppm and calcium by {:.0} ppm",
                needed_sulfate, calcium_gained
            ),
        );
    }

    if needed_chloride > 0.0 {
        let grams = needed_chloride / CALCIUM_CHLORIDE_CL_PPM * scale;
        let calcium_gained = grams * CALCIUM_CHLORIDE_CA_PPM / scale;
        needed_calcium = (needed_calcium - calcium_gained).max(0.0);
        push_if_material(
            &mut additions,
            "Calcium chloride (CaCl2)",
            grams,
            "g",
            format!(
                "raises chloride by {:.0} ppm and calcium by {:.0} ppm",
                needed_chloride, calcium_gained
            ),
        );
    }

    if needed_magnesium > 0.0 {
        let grams = needed_magnesium / EPSOM_MG_PPM * scale;
        let sulfate_gained = grams * EPSOM_SO4_PPM / scale;
        push_if_material(
            &mut additions,
            "Epsom salt (MgSO4)",
            grams,
            "g",
            format!(
                "raises magnesium by {:.0} ppm (also adds {:.0} ppm sulfate)",
                needed_magnesium, sulfate_gained
            ),
        );
    }

    // The greedy pass leaves any remaining calcium deficit unaddressed.
    if needed_calcium > 0.0 {
        tracing::debug!(
            remaining_ppm = needed_calcium,
            "calcium deficit not fully covered by sulfate/chloride salts"
        );
    }

    if source.bicarbonate > BICARBONATE_ACTION_LEVEL_PPM
        && source.bicarbonate > target.bicarbonate
    {
        let reduction = source.bicarbonate - target.bicarbonate;
        let milliliters = reduction * LACTIC_ACID_ML_PER_PPM_L * batch_volume_l;
        push_if_material(
            &mut additions,
            "Lactic acid (80%)",
            milliliters,
            "mL",
            format!("lowers bicarbonate by roughly {:.0} ppm", reduction),
        );
    }

    additions
}

fn push_if_material(
    additions: &mut Vec<SaltAddition>,
    name: &str,
    amount: f64,
    unit: &str,
    rationale: String,
) {
    if amount < MATERIALITY_THRESHOLD {
        tracing::debug!(name, amount, "salt addition below materiality threshold, suppressed");
        return;
    }
    additions.push(SaltAddition {
        name: name.to_string(),
        amount: round_to_tenth(amount),
        unit: unit.to_string(),
        rationale,
    });
}
