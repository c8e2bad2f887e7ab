//! The single adapter turning a loose [`RawRecipe`] into the normalized
//! [`Recipe`] every calculator consumes.
//!
//! Legacy field aliases are resolved by serde at deserialization time; this
//! module resolves the free-text values through the unit parsers exactly
//! once, so no `a ?? b ?? c` fallback chains leak into the calculators.

use crate::{defaults, units};
use brewforge_schemas::recipe::{
    Fermentable, HopAddition, MashStep, NumberOrText, RawFermentable, RawHop, RawMashStep,
    RawRecipe, Recipe, UnitSystem, Yeast,
};

pub fn normalize_recipe(raw: &RawRecipe, system: UnitSystem) -> Recipe {
    let og = parse_optional_gravity(raw.og.as_ref(), defaults::DEFAULT_GRAVITY_SG);
    let fg = parse_optional_gravity(raw.fg.as_ref(), defaults::DEFAULT_FINAL_GRAVITY_SG);

    let batch_volume_l = raw
        .batch_size
        .as_ref()
        .map(|v| units::parse_volume(&v.as_text(), system).value())
        .unwrap_or(defaults::DEFAULT_BATCH_VOLUME_L);

    let boil_time_min = raw
        .boil_time
        .as_ref()
        .map(|v| units::parse_duration(&v.as_text()).value())
        .unwrap_or(defaults::DEFAULT_DURATION_MIN);

    Recipe {
        name: raw.name.clone().unwrap_or_else(|| "Unnamed Recipe".to_string()),
        style: raw.style.clone().unwrap_or_default(),
        brewer: raw.brewer.clone().unwrap_or_default(),
        og,
        fg,
        batch_volume_l,
        boil_time_min,
        ibu: raw.ibu.unwrap_or(0.0),
        color_ebc: raw.color_ebc.unwrap_or(0.0),
        abv: raw.abv.unwrap_or(0.0),
        fermentables: raw.fermentables.iter().map(normalize_fermentable).collect(),
        hops: raw.hops.iter().map(normalize_hop).collect(),
        yeast: raw.yeast.as_ref().map(|y| Yeast {
            name: y.name.clone().unwrap_or_default(),
            laboratory: y.laboratory.clone().unwrap_or_default(),
            attenuation_percent: y.attenuation_percent,
        }),
        mash_steps: raw.mash_steps.iter().map(normalize_mash_step).collect(),
    }
}

fn parse_optional_gravity(value: Option<&NumberOrText>, missing_default: f64) -> f64 {
    match value {
        Some(v) => units::parse_gravity(&v.as_text()).value(),
        None => missing_default,
    }
}

fn normalize_fermentable(raw: &RawFermentable) -> Fermentable {
    // Prefer the free-text amount; fall back to the legacy grams field.
    let amount_kg = match &raw.amount {
        Some(text) => units::parse_weight(&text.as_text()).value(),
        None => raw.amount_g.map_or(defaults::DEFAULT_WEIGHT_KG, |g| g / 1000.0),
    };
    Fermentable {
        name: raw.name.clone().unwrap_or_default(),
        amount_kg,
        yield_percent: raw.yield_percent.unwrap_or(0.0),
        color_ebc: raw.color_ebc.unwrap_or(0.0),
    }
}

fn normalize_hop(raw: &RawHop) -> HopAddition {
    let time_text = raw.time.as_ref().map(|t| t.as_text()).unwrap_or_default();
    HopAddition {
        name: raw.name.clone().unwrap_or_default(),
        amount_kg: raw
            .amount
            .as_ref()
            .map(|a| units::parse_weight(&a.as_text()).value())
            .unwrap_or(defaults::DEFAULT_WEIGHT_KG),
        alpha_percent: raw.alpha_percent.unwrap_or(0.0),
        time_min: units::parse_duration(&time_text).value(),
        time_text,
    }
}

fn normalize_mash_step(raw: &RawMashStep) -> MashStep {
    MashStep {
        name: raw.name.clone().unwrap_or_default(),
        temperature_c: raw
            .temperature
            .as_ref()
            .and_then(|t| units::parse_temperature(&t.as_text())),
        duration_min: raw
            .duration
            .as_ref()
            .map(|d| units::parse_duration(&d.as_text()).value())
            .unwrap_or(defaults::DEFAULT_DURATION_MIN),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_and_free_text_resolve_once() {
        let yaml = r#"
name: Alias Ale
original_gravity: "12°P"
final_gravity: 1.012
batch_volume: "5 gal"
boil_duration: "1 h"
fermentables:
  - name: Pale malt
    weight: "4,5 kg"
  - name: Crystal
    grams: 500
hops:
  - name: Cascade
    weight: "30 g"
    alpha_acid: 5.5
    boil_time: "60 min"
mash_schedule:
  - name: Einmaischen
    temp: "target +2"
  - name: Saccharification
    temp: "67 °C"
    time: "60 min"
"#;
        let raw: RawRecipe = serde_yaml::from_str(yaml).expect("valid YAML");
        let recipe = normalize_recipe(&raw, UnitSystem::Metric);

        assert!((recipe.og - 1.0484).abs() < 0.001);
        assert_eq!(recipe.fg, 1.012);
        assert!((recipe.batch_volume_l - 18.92705).abs() < 1e-6);
        assert_eq!(recipe.boil_time_min, 60.0);

        assert_eq!(recipe.fermentables[0].amount_kg, 4.5);
        assert_eq!(recipe.fermentables[1].amount_kg, 0.5);

        assert_eq!(recipe.hops[0].amount_kg, 0.03);
        assert_eq!(recipe.hops[0].time_min, 60.0);

        // Relative mash-in temperature is rejected, not misread.
        assert_eq!(recipe.mash_steps[0].temperature_c, None);
        assert_eq!(recipe.mash_steps[1].temperature_c, Some(67.0));
        assert_eq!(recipe.mash_steps[1].duration_min, 60.0);
    }

    #[test]
    fn missing_fields_take_documented_defaults() {
        let recipe = normalize_recipe(&RawRecipe::default(), UnitSystem::Metric);
        assert_eq!(recipe.name, "Unnamed Recipe");
        assert_eq!(recipe.og, defaults::DEFAULT_GRAVITY_SG);
        assert_eq!(recipe.fg, defaults::DEFAULT_FINAL_GRAVITY_SG);
        assert_eq!(recipe.batch_volume_l, defaults::DEFAULT_BATCH_VOLUME_L);
        assert!(recipe.fermentables.is_empty());
    }

    #[test]
    fn imperial_bare_volumes_convert_to_liters() {
        let raw = RawRecipe {
            batch_size: Some(NumberOrText::Number(5.0)),
            ..RawRecipe::default()
        };
        let recipe = normalize_recipe(&raw, UnitSystem::Imperial);
        assert!((recipe.batch_volume_l - 5.0 * defaults::GALLON_L).abs() < 1e-9);
    }
}
