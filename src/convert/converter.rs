use crate::convert::types::{Family, Unit};

/// Liters per gallon
pub const GAL_TO_L: f64 = 3.78541;
/// Kilometers per mile
pub const MI_TO_KM: f64 = 1.60934;
/// Kilograms per pound
pub const LBS_TO_KG: f64 = 0.453592;

/// Converted values are rounded to this many decimal places
const ROUND_SCALE: f64 = 100_000.0;

impl Family {
    /// Multiplicative factor from the first unit of the pair to the second
    pub fn factor(&self) -> f64 {
        match self {
            Family::Volume => GAL_TO_L,
            Family::Distance => MI_TO_KM,
            Family::Mass => LBS_TO_KG,
        }
    }
}

/// The other unit of `unit`'s family
pub fn paired_unit(unit: Unit) -> Unit {
    match unit {
        Unit::Gal => Unit::L,
        Unit::L => Unit::Gal,
        Unit::Mi => Unit::Km,
        Unit::Km => Unit::Mi,
        Unit::Lbs => Unit::Kg,
        Unit::Kg => Unit::Lbs,
    }
}

/// Spelled-out English name of a unit
pub fn unit_name(unit: Unit) -> &'static str {
    match unit {
        Unit::Gal => "gallons",
        Unit::L => "liters",
        Unit::Mi => "miles",
        Unit::Km => "kilometers",
        Unit::Lbs => "pounds",
        Unit::Kg => "kilograms",
    }
}

/// Convert `value` from `unit` into its paired unit, rounded to 5 decimals
pub fn convert(value: f64, unit: Unit) -> f64 {
    let family = unit.family();
    let (from, _) = family.units();

    let raw = if unit == from {
        value * family.factor()
    } else {
        value / family.factor()
    };

    round_to_scale(raw)
}

// f64::round rounds half away from zero
fn round_to_scale(value: f64) -> f64 {
    (value * ROUND_SCALE).round() / ROUND_SCALE
}
