use std::fmt;

/// Failure kinds for parsing a quantity expression.
/// The `Display` text is the sentinel string callers surface to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertError {
    /// More than one `/` in the number token (e.g. "3/2/3kg")
    DoubleFraction,
    /// The number token (or one side of a fraction) is not a real number
    NotANumber,
    /// Missing or unrecognised unit abbreviation
    InvalidUnit,
    /// Both the number and the unit were rejected
    InvalidNumberAndUnit,
}

impl ConvertError {
    pub fn is_number_error(&self) -> bool {
        matches!(
            self,
            ConvertError::DoubleFraction
                | ConvertError::NotANumber
                | ConvertError::InvalidNumberAndUnit
        )
    }

    pub fn is_unit_error(&self) -> bool {
        matches!(
            self,
            ConvertError::InvalidUnit | ConvertError::InvalidNumberAndUnit
        )
    }

    /// Combine the outcomes of the two independent parsing stages
    pub fn combine(number: Option<ConvertError>, unit: Option<ConvertError>) -> Option<Self> {
        match (number, unit) {
            (Some(_), Some(_)) => Some(ConvertError::InvalidNumberAndUnit),
            (Some(e), None) | (None, Some(e)) => Some(e),
            (None, None) => None,
        }
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::DoubleFraction | ConvertError::NotANumber => write!(f, "invalid number"),
            ConvertError::InvalidUnit => write!(f, "invalid unit"),
            ConvertError::InvalidNumberAndUnit => write!(f, "invalid number and unit"),
        }
    }
}

impl std::error::Error for ConvertError {}
