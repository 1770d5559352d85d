use crate::convert::error::ConvertError;
use crate::convert::types::Unit;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Leading run of non-alphabetic characters: the number token
    /// Examples: "3.1" in "3.1mi", "1/2" in "1/2km"
    static ref NUMBER_TOKEN: Regex = Regex::new(r"^[^a-zA-Z]+").unwrap();

    /// Trailing run of alphabetic characters: the unit token
    static ref UNIT_TOKEN: Regex = Regex::new(r"[a-zA-Z]+$").unwrap();

    /// Longest decimal prefix of a number string, after optional whitespace
    /// Matches: "5", "-2.5", ".5", "3." ; anything after the match is ignored
    /// ASCII digits only, other Unicode digits end the prefix
    static ref REAL_PREFIX: Regex = Regex::new(r"^\s*[+-]?([0-9]+\.?[0-9]*|\.[0-9]+)").unwrap();
}

/// Quantity assumed when the expression starts directly with the unit
pub const DEFAULT_NUMBER: f64 = 1.0;

/// Parse the numeric part of a quantity expression
/// "32L" -> 32, "1/2km" -> 0.5, "kg" -> 1
pub fn parse_number(input: &str) -> Result<f64, ConvertError> {
    let token = match NUMBER_TOKEN.find(input) {
        Some(m) => m.as_str(),
        None => {
            log::debug!("no number in '{}', defaulting to {}", input, DEFAULT_NUMBER);
            return Ok(DEFAULT_NUMBER);
        }
    };

    let mut parts = token.split('/');
    let numerator = parts.next().unwrap_or_default();

    match (parts.next(), parts.next()) {
        (None, _) => parse_real(numerator).ok_or(ConvertError::NotANumber),
        (Some(denominator), None) => {
            let numerator = parse_real(numerator).ok_or(ConvertError::NotANumber)?;
            let denominator = parse_real(denominator).ok_or(ConvertError::NotANumber)?;
            if denominator == 0.0 {
                return Err(ConvertError::NotANumber);
            }
            Ok(numerator / denominator)
        }
        (Some(_), Some(_)) => {
            log::debug!("rejecting double fraction '{}'", token);
            Err(ConvertError::DoubleFraction)
        }
    }
}

/// Parse the unit part of a quantity expression into its canonical form
pub fn parse_unit(input: &str) -> Result<Unit, ConvertError> {
    let token = UNIT_TOKEN
        .find(input)
        .map(|m| m.as_str())
        .ok_or(ConvertError::InvalidUnit)?;

    Unit::from_token(token).ok_or_else(|| {
        log::debug!("unknown unit '{}'", token);
        ConvertError::InvalidUnit
    })
}

/// Read the longest decimal prefix of `s`, or None if there is none
fn parse_real(s: &str) -> Option<f64> {
    let digits = REAL_PREFIX.find(s)?.as_str().trim_start();
    digits.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_number() {
        assert_eq!(parse_number("32L"), Ok(32.0));
    }

    #[test]
    fn test_decimal_number() {
        assert_eq!(parse_number("3.1mi"), Ok(3.1));
    }

    #[test]
    fn test_fraction() {
        assert_eq!(parse_number("1/2km"), Ok(0.5));
    }

    #[test]
    fn test_fraction_with_decimal() {
        let value = parse_number("5.4/3lbs").unwrap();
        assert!((value - 1.8).abs() < 1e-9);
    }

    #[test]
    fn test_double_fraction() {
        assert_eq!(parse_number("3/2/3kg"), Err(ConvertError::DoubleFraction));
        assert_eq!(parse_number("3/2/3kg").unwrap_err().to_string(), "invalid number");
    }

    #[test]
    fn test_default_to_one() {
        assert_eq!(parse_number("kg"), Ok(1.0));
        assert_eq!(parse_number(""), Ok(1.0));
    }

    #[test]
    fn test_not_a_number() {
        assert_eq!(parse_number("-kg"), Err(ConvertError::NotANumber));
        assert_eq!(parse_number(".mi"), Err(ConvertError::NotANumber));
        assert_eq!(parse_number("/2km"), Err(ConvertError::NotANumber));
        assert_eq!(parse_number("2/km"), Err(ConvertError::NotANumber));
        assert_eq!(parse_number("3/0L"), Err(ConvertError::NotANumber));
    }

    #[test]
    fn test_prefix_parsing() {
        assert_eq!(parse_number("1.2.3gal"), Ok(1.2));
        assert_eq!(parse_number("4 kg"), Ok(4.0));
        assert_eq!(parse_number(".5L"), Ok(0.5));
        assert_eq!(parse_number("-2mi"), Ok(-2.0));
        assert_eq!(parse_number("5\u{0663}kg"), Ok(5.0));
        assert_eq!(parse_number("\u{0663}kg"), Err(ConvertError::NotANumber));
    }

    #[test]
    fn test_each_valid_unit() {
        let cases = [
            ("gal", Unit::Gal),
            ("L", Unit::L),
            ("mi", Unit::Mi),
            ("km", Unit::Km),
            ("lbs", Unit::Lbs),
            ("kg", Unit::Kg),
        ];
        for (input, expected) in cases {
            assert_eq!(parse_unit(input), Ok(expected));
            assert_eq!(parse_unit(&input.to_uppercase()), Ok(expected));
            assert_eq!(parse_unit(&format!("10{}", input)), Ok(expected));
        }
        assert_eq!(parse_unit("5l").unwrap().to_string(), "L");
        assert_eq!(parse_unit("5KG").unwrap().to_string(), "kg");
    }

    #[test]
    fn test_invalid_unit() {
        assert_eq!(parse_unit("32g"), Err(ConvertError::InvalidUnit));
        assert_eq!(parse_unit("32"), Err(ConvertError::InvalidUnit));
        assert_eq!(parse_unit("5 kg "), Err(ConvertError::InvalidUnit));
        assert_eq!(parse_unit("kilomegagram"), Err(ConvertError::InvalidUnit));
        assert_eq!(parse_unit("32g").unwrap_err().to_string(), "invalid unit");
    }
}
