#[cfg(test)]
mod tests {
    use super::super::converter::{convert, paired_unit, unit_name};
    use super::super::error::ConvertError;
    use super::super::formatter::format_result;
    use super::super::parser::{parse_number, parse_unit};
    use super::super::types::Unit;

    const VALID_INPUTS: [&str; 6] = ["gal", "L", "mi", "km", "lbs", "kg"];

    #[test]
    fn test_reads_each_valid_input_unit() {
        for input in VALID_INPUTS {
            let unit = parse_unit(input).expect("valid unit should parse");
            assert_eq!(unit.to_string(), input);
        }
    }

    #[test]
    fn test_returns_paired_unit_for_each_input() {
        let expected = ["L", "gal", "km", "mi", "kg", "lbs"];
        for (input, expected) in VALID_INPUTS.iter().zip(expected) {
            let unit = parse_unit(input).unwrap();
            assert_eq!(paired_unit(unit).to_string(), expected);
        }
    }

    #[test]
    fn test_spells_out_each_input_unit() {
        let expected = ["gallons", "liters", "miles", "kilometers", "pounds", "kilograms"];
        for (input, expected) in VALID_INPUTS.iter().zip(expected) {
            let unit = parse_unit(input).unwrap();
            assert_eq!(unit_name(unit), expected);
            assert!(!unit_name(unit).is_empty());
        }
    }

    #[test]
    fn test_parse_convert_format_pipeline() {
        let input = "5gal";
        let value = parse_number(input).unwrap();
        let unit = parse_unit(input).unwrap();
        let return_unit = paired_unit(unit);
        let return_num = convert(value, unit);

        assert_eq!(return_unit, Unit::L);
        assert!((return_num - 18.9271).abs() < 0.1);
        assert_eq!(
            format_result(value, unit, return_num, return_unit),
            "5 gallons converts to 18.92705 liters"
        );
    }

    #[test]
    fn test_failures_are_values() {
        // Both stages report independently on the same input
        let input = "3/2/3g";
        assert_eq!(parse_number(input), Err(ConvertError::DoubleFraction));
        assert_eq!(parse_unit(input), Err(ConvertError::InvalidUnit));
    }

    #[test]
    fn test_mixed_case_liters() {
        for input in ["4l", "4L"] {
            let unit = parse_unit(input).unwrap();
            assert_eq!(unit, Unit::L);
            assert_eq!(unit.to_string(), "L");
        }
    }
}
