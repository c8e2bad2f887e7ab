//! Isolated parsers turning free-text user input into canonical units
//! (liters, kilograms, Celsius, minutes, specific gravity).
//!
//! Every parser except [`parse_temperature`] returns a tagged [`Parsed`]
//! value so callers and tests can tell a successful parse apart from a
//! fallback default. None of them ever errors or panics.

use crate::defaults;
use brewforge_schemas::recipe::UnitSystem;
use regex::Regex;
use std::sync::LazyLock;

/// Leading number (decimal point or comma) followed by an optional unit word.
static VALUE_WITH_UNIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d+(?:[.,]\d+)?)\s*([a-zA-Z°]*)\s*$").expect("static pattern compiles")
});

/// A parsed value tagged with whether the input was actually understood or
/// a documented default had to stand in for it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Parsed<T> {
    Ok(T),
    Fallback(T),
}

impl<T: Copy> Parsed<T> {
    pub fn value(&self) -> T {
        match self {
            Parsed::Ok(v) | Parsed::Fallback(v) => *v,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Parsed::Fallback(_))
    }
}

fn split_value_unit(text: &str) -> Option<(f64, String)> {
    let caps = VALUE_WITH_UNIT.captures(text)?;
    let value: f64 = caps[1].replace(',', ".").parse().ok()?;
    Some((value, caps[2].to_lowercase()))
}

/// Parses a volume into liters. A bare number is liters under the metric
/// convention and gallons under the imperial one.
pub fn parse_volume(text: &str, system: UnitSystem) -> Parsed<f64> {
    if let Some((value, unit)) = split_value_unit(text) {
        match unit.as_str() {
            "" => match system {
                UnitSystem::Metric => return Parsed::Ok(value),
                UnitSystem::Imperial => return Parsed::Ok(value * defaults::GALLON_L),
            },
            "l" | "liter" | "liters" | "litre" | "litres" => return Parsed::Ok(value),
            "gal" | "gallon" | "gallons" => return Parsed::Ok(value * defaults::GALLON_L),
            _ => {}
        }
    }
    tracing::debug!(input = text, "unparsable volume, falling back to default");
    Parsed::Fallback(defaults::DEFAULT_BATCH_VOLUME_L)
}

/// Parses a weight into kilograms. A bare number is grams.
pub fn parse_weight(text: &str) -> Parsed<f64> {
    if let Some((value, unit)) = split_value_unit(text) {
        match unit.as_str() {
            "kg" | "kilo" | "kilos" | "kilogram" | "kilograms" => return Parsed::Ok(value),
            "" | "g" | "gram" | "grams" => return Parsed::Ok(value / 1000.0),
            "lb" | "lbs" | "pound" | "pounds" => return Parsed::Ok(value * defaults::POUND_KG),
            "oz" | "ounce" | "ounces" => return Parsed::Ok(value * defaults::OUNCE_KG),
            _ => {}
        }
    }
    tracing::debug!(input = text, "unparsable weight, falling back to default");
    Parsed::Fallback(defaults::DEFAULT_WEIGHT_KG)
}

/// Parses an absolute temperature into Celsius.
///
/// Returns `None` for anything that looks like a *relative* offset (leading
/// `+`/`-`, or containing the word "target") rather than guessing a wrong
/// absolute value; callers must supply their own fallback base temperature.
/// Values outside (0, 200) °C are discarded as well.
pub fn parse_temperature(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.starts_with('+') || trimmed.starts_with('-') {
        return None;
    }
    if trimmed.to_lowercase().contains("target") {
        return None;
    }

    let (value, unit) = split_value_unit(trimmed)?;
    match unit.as_str() {
        "" | "c" | "°c" | "°" | "celsius" | "grad" => {}
        _ => return None,
    }
    if value > 0.0 && value < 200.0 {
        Some(value)
    } else {
        tracing::debug!(input = text, "temperature out of range, discarding");
        None
    }
}

/// Parses a duration into minutes. A bare number is minutes.
pub fn parse_duration(text: &str) -> Parsed<f64> {
    if let Some((value, unit)) = split_value_unit(text) {
        match unit.as_str() {
            "h" | "hr" | "hrs" | "hour" | "hours" => return Parsed::Ok(value * 60.0),
            "" | "min" | "mins" | "minute" | "minutes" => return Parsed::Ok(value),
            _ => {}
        }
    }
    tracing::debug!(input = text, "unparsable duration, falling back to default");
    Parsed::Fallback(defaults::DEFAULT_DURATION_MIN)
}

/// Parses a gravity reading into specific gravity.
///
/// Recognizes explicit Plato/Brix suffixes and the direct "1.xxx" SG form.
/// A bare value in (1, 2) is taken as SG already; a bare value below 30 is
/// taken as degrees Plato.
pub fn parse_gravity(text: &str) -> Parsed<f64> {
    if let Some((value, unit)) = split_value_unit(text) {
        match unit.as_str() {
            "p" | "°p" | "plato" | "brix" | "°brix" => return Parsed::Ok(plato_to_sg(value)),
            "" => {
                if value > 1.0 && value < 2.0 {
                    return Parsed::Ok(value);
                }
                if value < 30.0 {
                    return Parsed::Ok(plato_to_sg(value));
                }
            }
            _ => {}
        }
    }
    tracing::debug!(input = text, "unparsable gravity, falling back to default");
    Parsed::Fallback(defaults::DEFAULT_GRAVITY_SG)
}

/// Converts degrees Plato to specific gravity.
pub fn plato_to_sg(plato: f64) -> f64 {
    1.0 + plato / (258.6 - (plato / 258.2) * 227.1)
}

/// Rounds to one decimal place, the reporting precision for dosing amounts.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_with_explicit_units() {
        assert_eq!(parse_volume("20 L", UnitSystem::Metric), Parsed::Ok(20.0));
        assert_eq!(parse_volume("20l", UnitSystem::Imperial), Parsed::Ok(20.0));
        let gallons = parse_volume("5 gal", UnitSystem::Metric);
        assert!((gallons.value() - 18.92705).abs() < 1e-6);
        assert!(!gallons.is_fallback());
    }

    #[test]
    fn bare_volume_follows_unit_system() {
        assert_eq!(parse_volume("20", UnitSystem::Metric), Parsed::Ok(20.0));
        let imperial = parse_volume("5", UnitSystem::Imperial);
        assert!((imperial.value() - 5.0 * defaults::GALLON_L).abs() < 1e-9);
    }

    #[test]
    fn garbage_volume_falls_back_to_twenty_liters() {
        let parsed = parse_volume("a bucket or so", UnitSystem::Metric);
        assert!(parsed.is_fallback());
        assert_eq!(parsed.value(), 20.0);
    }

    #[test]
    fn weight_suffixes() {
        assert_eq!(parse_weight("5 kg"), Parsed::Ok(5.0));
        assert_eq!(parse_weight("250 g"), Parsed::Ok(0.25));
        assert!((parse_weight("1 lb").value() - 0.453592).abs() < 1e-9);
        assert!((parse_weight("2 oz").value() - 0.056699).abs() < 1e-6);
        // Bare numbers are grams.
        assert_eq!(parse_weight("4500"), Parsed::Ok(4.5));
    }

    #[test]
    fn weight_decimal_comma() {
        assert_eq!(parse_weight("4,5 kg"), Parsed::Ok(4.5));
    }

    #[test]
    fn relative_temperatures_are_rejected() {
        assert_eq!(parse_temperature("+2"), None);
        assert_eq!(parse_temperature("-1.5"), None);
        assert_eq!(parse_temperature("target 68"), None);
    }

    #[test]
    fn absolute_temperatures_are_range_checked() {
        assert_eq!(parse_temperature("67"), Some(67.0));
        assert_eq!(parse_temperature("67 °C"), Some(67.0));
        assert_eq!(parse_temperature("0"), None);
        assert_eq!(parse_temperature("250"), None);
    }

    #[test]
    fn durations() {
        assert_eq!(parse_duration("90"), Parsed::Ok(90.0));
        assert_eq!(parse_duration("90 min"), Parsed::Ok(90.0));
        assert_eq!(parse_duration("1.5 h"), Parsed::Ok(90.0));
        let fallback = parse_duration("a while");
        assert!(fallback.is_fallback());
        assert_eq!(fallback.value(), 0.0);
    }

    #[test]
    fn gravity_direct_sg() {
        assert_eq!(parse_gravity("1.050"), Parsed::Ok(1.050));
        assert_eq!(parse_gravity("1,050"), Parsed::Ok(1.050));
    }

    #[test]
    fn gravity_plato_conversion() {
        // 12°P is roughly 1.048 SG.
        let sg = parse_gravity("12 °P").value();
        assert!((sg - 1.0484).abs() < 0.001, "got {sg}");
        // A bare small value is treated as Plato too.
        let bare = parse_gravity("12").value();
        assert!((bare - sg).abs() < 1e-12);
    }

    #[test]
    fn gravity_fallback() {
        let parsed = parse_gravity("dunno");
        assert!(parsed.is_fallback());
        assert_eq!(parsed.value(), 1.050);
        // Values that are neither plausible SG nor Plato also fall back.
        assert!(parse_gravity("55").is_fallback());
    }
}
