// Quantity-expression parsing and conversion between paired units
// Pipeline: parser (number + unit) -> converter -> formatter, wired together in processor

pub mod converter;
pub mod error;
pub mod formatter;
pub mod parser;
pub mod processor;
pub mod types;

#[cfg(test)]
mod tests;

pub use converter::{convert, paired_unit, unit_name};
pub use error::ConvertError;
pub use formatter::{format_number, format_result};
pub use parser::{parse_number, parse_unit};
pub use processor::{convert_expression, convert_quantity, parse_quantity};
pub use types::{Conversion, Family, Quantity, Unit};
