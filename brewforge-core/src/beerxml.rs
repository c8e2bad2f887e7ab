//! BeerXML v1 export.
//!
//! A string-template serializer: recipes are written tag by tag rather than
//! through an XML library, matching the fixed schema third-party brewing
//! tools expect. Volumes are always emitted in liters and weights in
//! kilograms regardless of the display unit system.
//!
//! The prolog declares ISO-8859-1 even though the body is built from UTF-8
//! strings; older BeerXML consumers expect that declaration and the quirk is
//! preserved on purpose.

use crate::{defaults, error::BrewforgeError};
use brewforge_schemas::recipe::{HopAddition, MashStep, Recipe};

const XML_PROLOG: &str = "<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?>\n";

const MAX_BATCH_VOLUME_L: f64 = 10_000.0;

/// Hops heavier than this are certainly data-entry garbage and are skipped.
const MAX_HOP_WEIGHT_KG: f64 = 100.0;

// Synthetic <STYLE> ranges around the recipe's point estimates.
const STYLE_OG_RANGE: f64 = 0.010;
const STYLE_FG_RANGE: f64 = 0.005;
const STYLE_IBU_RANGE: f64 = 10.0;
const STYLE_COLOR_RANGE: f64 = 2.0;
const STYLE_ABV_RANGE: f64 = 1.0;

/// Escapes the five XML-reserved characters in user-facing text.
pub fn xml_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HopUse {
    Boil,
    DryHop,
    Aroma,
}

impl HopUse {
    fn as_beerxml(self) -> &'static str {
        match self {
            HopUse::Boil => "Boil",
            HopUse::DryHop => "Dry Hop",
            HopUse::Aroma => "Aroma",
        }
    }
}

/// Classifies a hop addition: boiled when it has a boil time, dry hop when
/// the time text says so, aroma otherwise.
pub fn classify_hop(hop: &HopAddition) -> HopUse {
    if hop.time_min > 0.0 {
        HopUse::Boil
    } else if hop.time_text.to_lowercase().contains("dry") {
        HopUse::DryHop
    } else {
        HopUse::Aroma
    }
}

fn is_mash_in(name: &str) -> bool {
    let name = name.trim().to_lowercase();
    name == "mash in" || name == "einmaischen"
}

fn in_mash_range(temp: f64) -> bool {
    temp > 0.0 && temp < 200.0
}

/// Temperature of the first main (non mash-in) step with a usable value.
fn first_main_step_temp(steps: &[MashStep]) -> f64 {
    steps
        .iter()
        .filter(|s| !is_mash_in(&s.name))
        .find_map(|s| s.temperature_c.filter(|t| in_mash_range(*t)))
        .unwrap_or(defaults::FALLBACK_MASH_TEMP_C)
}

/// Resolves the temperature to emit for a mash step.
///
/// A "Mash In"/"Einmaischen" step without its own absolute temperature gets
/// the first main step's temperature plus a strike offset; any other step
/// falls back to the first main step's temperature when its own is missing
/// or out of range.
fn mash_step_temp(step: &MashStep, first_main_temp: f64) -> f64 {
    let own = step.temperature_c.filter(|t| in_mash_range(*t));
    if is_mash_in(&step.name) {
        own.unwrap_or(first_main_temp + defaults::MASH_IN_STRIKE_OFFSET_C)
    } else {
        own.unwrap_or(first_main_temp)
    }
}

fn push_tag(out: &mut String, indent: usize, name: &str, value: &str) {
    for _ in 0..indent {
        out.push_str("  ");
    }
    out.push('<');
    out.push_str(name);
    out.push('>');
    out.push_str(&xml_escape(value));
    out.push_str("</");
    out.push_str(name);
    out.push_str(">\n");
}

fn push_open(out: &mut String, indent: usize, name: &str) {
    for _ in 0..indent {
        out.push_str("  ");
    }
    out.push('<');
    out.push_str(name);
    out.push_str(">\n");
}

fn push_close(out: &mut String, indent: usize, name: &str) {
    for _ in 0..indent {
        out.push_str("  ");
    }
    out.push_str("</");
    out.push_str(name);
    out.push_str(">\n");
}

/// Serializes a normalized recipe to a BeerXML v1 document.
///
/// # Errors
///
/// Returns [`BrewforgeError::BatchVolumeOutOfRange`] when the computed batch
/// volume falls outside (0, 10000] liters. This is the one hard failure in
/// the crate: silently clamping would hand third-party tools an invalid file.
pub fn export_recipe(recipe: &Recipe) -> Result<String, BrewforgeError> {
    let batch = recipe.batch_volume_l;
    if !(batch > 0.0 && batch <= MAX_BATCH_VOLUME_L) {
        return Err(BrewforgeError::BatchVolumeOutOfRange(batch));
    }

    let mut xml = String::from(XML_PROLOG);
    push_open(&mut xml, 0, "RECIPES");
    push_open(&mut xml, 1, "RECIPE");

    push_tag(&mut xml, 2, "NAME", &recipe.name);
    push_tag(&mut xml, 2, "VERSION", "1");
    push_tag(&mut xml, 2, "TYPE", "All Grain");
    push_tag(&mut xml, 2, "BREWER", &recipe.brewer);
    push_tag(&mut xml, 2, "BATCH_SIZE", &format!("{batch:.2}"));
    push_tag(&mut xml, 2, "BOIL_SIZE", &format!("{batch:.2}"));
    push_tag(&mut xml, 2, "BOIL_TIME", &format!("{:.0}", recipe.boil_time_min));
    push_tag(&mut xml, 2, "OG", &format!("{:.3}", recipe.og));
    push_tag(&mut xml, 2, "FG", &format!("{:.3}", recipe.fg));
    push_tag(&mut xml, 2, "IBU", &format!("{:.1}", recipe.ibu));
    push_tag(&mut xml, 2, "EST_ABV", &format!("{:.1}", recipe.abv));

    write_style(&mut xml, recipe);
    write_fermentables(&mut xml, recipe);
    write_hops(&mut xml, recipe);
    write_yeasts(&mut xml, recipe);
    write_mash(&mut xml, recipe);

    push_close(&mut xml, 1, "RECIPE");
    push_close(&mut xml, 0, "RECIPES");
    Ok(xml)
}

/// The source recipe carries only point estimates, so the style block emits
/// fixed ranges around them.
fn write_style(xml: &mut String, recipe: &Recipe) {
    push_open(xml, 2, "STYLE");
    push_tag(xml, 3, "NAME", &recipe.style);
    push_tag(xml, 3, "VERSION", "1");
    push_tag(xml, 3, "OG_MIN", &format!("{:.3}", recipe.og - STYLE_OG_RANGE));
    push_tag(xml, 3, "OG_MAX", &format!("{:.3}", recipe.og + STYLE_OG_RANGE));
    push_tag(xml, 3, "FG_MIN", &format!("{:.3}", recipe.fg - STYLE_FG_RANGE));
    push_tag(xml, 3, "FG_MAX", &format!("{:.3}", recipe.fg + STYLE_FG_RANGE));
    push_tag(
        xml,
        3,
        "IBU_MIN",
        &format!("{:.1}", (recipe.ibu - STYLE_IBU_RANGE).max(0.0)),
    );
    push_tag(xml, 3, "IBU_MAX", &format!("{:.1}", recipe.ibu + STYLE_IBU_RANGE));
    push_tag(
        xml,
        3,
        "COLOR_MIN",
        &format!("{:.1}", (recipe.color_ebc - STYLE_COLOR_RANGE).max(0.0)),
    );
    push_tag(
        xml,
        3,
        "COLOR_MAX",
        &format!("{:.1}", recipe.color_ebc + STYLE_COLOR_RANGE),
    );
    push_tag(
        xml,
        3,
        "ABV_MIN",
        &format!("{:.1}", (recipe.abv - STYLE_ABV_RANGE).max(0.0)),
    );
    push_tag(xml, 3, "ABV_MAX", &format!("{:.1}", recipe.abv + STYLE_ABV_RANGE));
    push_close(xml, 2, "STYLE");
}

fn write_fermentables(xml: &mut String, recipe: &Recipe) {
    push_open(xml, 2, "FERMENTABLES");
    for fermentable in &recipe.fermentables {
        push_open(xml, 3, "FERMENTABLE");
        push_tag(xml, 4, "NAME", &fermentable.name);
        push_tag(xml, 4, "VERSION", "1");
        push_tag(xml, 4, "TYPE", "Grain");
        push_tag(xml, 4, "AMOUNT", &format!("{:.3}", fermentable.amount_kg));
        push_tag(xml, 4, "YIELD", &format!("{:.1}", fermentable.yield_percent));
        push_tag(xml, 4, "COLOR", &format!("{:.1}", fermentable.color_ebc));
        push_close(xml, 3, "FERMENTABLE");
    }
    push_close(xml, 2, "FERMENTABLES");
}

fn write_hops(xml: &mut String, recipe: &Recipe) {
    push_open(xml, 2, "HOPS");
    for hop in &recipe.hops {
        if hop.amount_kg <= 0.0 || hop.amount_kg > MAX_HOP_WEIGHT_KG {
            tracing::warn!(
                hop = %hop.name,
                amount_kg = hop.amount_kg,
                "hop weight implausible, skipping in export"
            );
            continue;
        }
        push_open(xml, 3, "HOP");
        push_tag(xml, 4, "NAME", &hop.name);
        push_tag(xml, 4, "VERSION", "1");
        push_tag(xml, 4, "ALPHA", &format!("{:.1}", hop.alpha_percent));
        push_tag(xml, 4, "AMOUNT", &format!("{:.4}", hop.amount_kg));
        push_tag(xml, 4, "USE", classify_hop(hop).as_beerxml());
        push_tag(xml, 4, "TIME", &format!("{:.0}", hop.time_min));
        push_close(xml, 3, "HOP");
    }
    push_close(xml, 2, "HOPS");
}

fn write_yeasts(xml: &mut String, recipe: &Recipe) {
    push_open(xml, 2, "YEASTS");
    if let Some(yeast) = &recipe.yeast {
        push_open(xml, 3, "YEAST");
        push_tag(xml, 4, "NAME", &yeast.name);
        push_tag(xml, 4, "VERSION", "1");
        push_tag(xml, 4, "LABORATORY", &yeast.laboratory);
        if let Some(attenuation) = yeast.attenuation_percent {
            push_tag(xml, 4, "ATTENUATION", &format!("{attenuation:.1}"));
        }
        push_close(xml, 3, "YEAST");
    }
    push_close(xml, 2, "YEASTS");
}

fn write_mash(xml: &mut String, recipe: &Recipe) {
    let first_main_temp = first_main_step_temp(&recipe.mash_steps);
    push_open(xml, 2, "MASH");
    push_tag(xml, 3, "NAME", "Mash");
    push_tag(xml, 3, "VERSION", "1");
    push_open(xml, 3, "MASH_STEPS");
    for step in &recipe.mash_steps {
        push_open(xml, 4, "MASH_STEP");
        push_tag(xml, 5, "NAME", &step.name);
        push_tag(xml, 5, "VERSION", "1");
        push_tag(xml, 5, "TYPE", "Infusion");
        push_tag(
            xml,
            5,
            "STEP_TEMP",
            &format!("{:.1}", mash_step_temp(step, first_main_temp)),
        );
        push_tag(xml, 5, "STEP_TIME", &format!("{:.0}", step.duration_min));
        push_close(xml, 4, "MASH_STEP");
    }
    push_close(xml, 3, "MASH_STEPS");
    push_close(xml, 2, "MASH");
}
