use crate::convert::converter::unit_name;
use crate::convert::types::Unit;

/// Magnitudes at or above this are written in exponent form
const EXPONENT_UPPER: f64 = 1e21;
/// Non-zero magnitudes below this are written in exponent form
const EXPONENT_LOWER: f64 = 1e-6;

/// Render the outcome of a conversion as a sentence
/// e.g. "5 gallons converts to 18.9271 liters"
pub fn format_result(init_num: f64, init_unit: Unit, return_num: f64, return_unit: Unit) -> String {
    format!(
        "{} {} converts to {} {}",
        format_number(init_num),
        unit_name(init_unit),
        format_number(return_num),
        unit_name(return_unit)
    )
}

/// Shortest decimal form of a number: "5" rather than "5.0", no separators
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        // also covers -0.0
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= EXPONENT_UPPER || magnitude < EXPONENT_LOWER {
        let exp = format!("{:e}", value);
        // Rust writes "1.5e21", sign the positive exponent explicitly
        return match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                format!("{}e+{}", mantissa, power)
            }
            _ => exp,
        };
    }

    format!("{}", value)
}
