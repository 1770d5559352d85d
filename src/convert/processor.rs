use crate::convert::converter::{convert, paired_unit};
use crate::convert::error::ConvertError;
use crate::convert::formatter::format_result;
use crate::convert::parser::{parse_number, parse_unit};
use crate::convert::types::{Conversion, Quantity};

/// Parse both halves of an expression
/// Number and unit are read independently so a caller learns about both failures at once
pub fn parse_quantity(input: &str) -> Result<Quantity, ConvertError> {
    let number = parse_number(input);
    let unit = parse_unit(input);

    match (number, unit) {
        (Ok(value), Ok(unit)) => Ok(Quantity::new(value, unit)),
        (number, unit) => {
            let error = ConvertError::combine(number.err(), unit.err())
                .unwrap_or(ConvertError::InvalidNumberAndUnit);
            Err(error)
        }
    }
}

/// Convert an already-validated quantity into its paired unit
pub fn convert_quantity(quantity: Quantity) -> Conversion {
    let return_unit = paired_unit(quantity.unit);
    let return_num = convert(quantity.value, quantity.unit);

    Conversion {
        init_num: quantity.value,
        init_unit: quantity.unit,
        return_num,
        return_unit,
        string: format_result(quantity.value, quantity.unit, return_num, return_unit),
    }
}

/// Run the whole pipeline on a raw expression such as "3.1mi" or "1/2km"
pub fn convert_expression(input: &str) -> Result<Conversion, ConvertError> {
    let quantity = parse_quantity(input).map_err(|e| {
        log::debug!("rejected expression '{}': {}", input, e);
        e
    })?;
    let conversion = convert_quantity(quantity);
    log::debug!("converted '{}': {}", input, conversion.string);
    Ok(conversion)
}
