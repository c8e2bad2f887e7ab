//! Brewhouse efficiency from one measured gravity/volume point against the
//! recipe's grain bill.

use crate::units::round_to_tenth;
use brewforge_schemas::recipe::Recipe;
use serde::Serialize;
use std::fmt;

/// Extract potential per kilogram of grain, in gravity points.
const POTENTIAL_POINTS_PER_KG: f64 = 300.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EfficiencyRating {
    Good,
    Ok,
    Poor,
}

impl fmt::Display for EfficiencyRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EfficiencyRating::Good => write!(f, "good"),
            EfficiencyRating::Ok => write!(f, "ok"),
            EfficiencyRating::Poor => write!(f, "poor"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EfficiencyEstimate {
    pub efficiency_percent: f64,
    pub rating: EfficiencyRating,
    pub total_grain_kg: f64,
    pub actual_points: f64,
    pub potential_points: f64,
}

/// Estimates mash/lautering efficiency, or `None` when the grain bill is
/// empty or the measurement is unusable.
pub fn estimate_efficiency(
    recipe: &Recipe,
    measured_volume_l: f64,
    measured_sg: f64,
) -> Option<EfficiencyEstimate> {
    let total_grain_kg: f64 = recipe.fermentables.iter().map(|f| f.amount_kg).sum();
    if total_grain_kg <= 0.0 || measured_volume_l <= 0.0 || !measured_sg.is_finite() {
        return None;
    }

    let potential_points = total_grain_kg * POTENTIAL_POINTS_PER_KG;
    let actual_points = measured_volume_l * (measured_sg - 1.0) * 1000.0;
    let efficiency_percent = round_to_tenth(actual_points / potential_points * 100.0);

    let rating = if efficiency_percent >= 70.0 {
        EfficiencyRating::Good
    } else if efficiency_percent < 60.0 {
        EfficiencyRating::Poor
    } else {
        EfficiencyRating::Ok
    };

    Some(EfficiencyEstimate {
        efficiency_percent,
        rating,
        total_grain_kg,
        actual_points,
        potential_points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use brewforge_schemas::recipe::Fermentable;

    fn recipe_with_grain(kilos: &[f64]) -> Recipe {
        Recipe {
            name: "Test".to_string(),
            style: String::new(),
            brewer: String::new(),
            og: 1.050,
            fg: 1.010,
            batch_volume_l: 20.0,
            boil_time_min: 60.0,
            ibu: 0.0,
            color_ebc: 0.0,
            abv: 0.0,
            fermentables: kilos
                .iter()
                .map(|kg| Fermentable {
                    name: "Pale malt".to_string(),
                    amount_kg: *kg,
                    yield_percent: 80.0,
                    color_ebc: 5.0,
                })
                .collect(),
            hops: vec![],
            yeast: None,
            mash_steps: vec![],
        }
    }

    #[test]
    fn reference_batch_is_ok() {
        let recipe = recipe_with_grain(&[5.0]);
        let estimate = estimate_efficiency(&recipe, 20.0, 1.050).expect("computable");
        // actual = 20 × 50 = 1000 points; potential = 5 × 300 = 1500.
        assert_eq!(estimate.efficiency_percent, 66.7);
        assert_eq!(estimate.rating, EfficiencyRating::Ok);
    }

    #[test]
    fn grain_bill_sums_across_fermentables() {
        let recipe = recipe_with_grain(&[4.0, 0.5, 0.5]);
        let estimate = estimate_efficiency(&recipe, 20.0, 1.050).expect("computable");
        assert_eq!(estimate.total_grain_kg, 5.0);
    }

    #[test]
    fn strong_extraction_rates_good() {
        let recipe = recipe_with_grain(&[5.0]);
        let estimate = estimate_efficiency(&recipe, 22.0, 1.050).expect("computable");
        assert!(estimate.efficiency_percent >= 70.0);
        assert_eq!(estimate.rating, EfficiencyRating::Good);
    }

    #[test]
    fn weak_extraction_rates_poor() {
        let recipe = recipe_with_grain(&[5.0]);
        let estimate = estimate_efficiency(&recipe, 20.0, 1.040).expect("computable");
        assert!(estimate.efficiency_percent < 60.0);
        assert_eq!(estimate.rating, EfficiencyRating::Poor);
    }

    #[test]
    fn empty_grain_bill_cannot_be_rated() {
        let recipe = recipe_with_grain(&[]);
        assert_eq!(estimate_efficiency(&recipe, 20.0, 1.050), None);
        let zeroed = recipe_with_grain(&[0.0]);
        assert_eq!(estimate_efficiency(&zeroed, 20.0, 1.050), None);
    }

    #[test]
    fn unusable_volume_cannot_be_rated() {
        let recipe = recipe_with_grain(&[5.0]);
        assert_eq!(estimate_efficiency(&recipe, 0.0, 1.050), None);
    }
}
