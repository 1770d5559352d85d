use crate::convert::error::ConvertError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the six supported unit abbreviations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Unit {
    #[serde(rename = "gal")]
    Gal,
    #[serde(rename = "L")]
    L,
    #[serde(rename = "mi")]
    Mi,
    #[serde(rename = "km")]
    Km,
    #[serde(rename = "lbs")]
    Lbs,
    #[serde(rename = "kg")]
    Kg,
}

/// The physical quantity a pair of units measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    Volume,
    Distance,
    Mass,
}

impl Unit {
    pub const ALL: [Unit; 6] = [Unit::Gal, Unit::L, Unit::Mi, Unit::Km, Unit::Lbs, Unit::Kg];

    /// Canonical abbreviation ("L" is the only uppercase one)
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Unit::Gal => "gal",
            Unit::L => "L",
            Unit::Mi => "mi",
            Unit::Km => "km",
            Unit::Lbs => "lbs",
            Unit::Kg => "kg",
        }
    }

    pub fn family(&self) -> Family {
        match self {
            Unit::Gal | Unit::L => Family::Volume,
            Unit::Mi | Unit::Km => Family::Distance,
            Unit::Lbs | Unit::Kg => Family::Mass,
        }
    }

    /// Look up a unit from an already-extracted token, ignoring case
    pub fn from_token(token: &str) -> Option<Unit> {
        match token.to_ascii_lowercase().as_str() {
            "gal" => Some(Unit::Gal),
            "l" => Some(Unit::L),
            "mi" => Some(Unit::Mi),
            "km" => Some(Unit::Km),
            "lbs" => Some(Unit::Lbs),
            "kg" => Some(Unit::Kg),
            _ => None,
        }
    }
}

impl Family {
    /// Forward units first: (from, to) for the tabulated factor
    pub fn units(&self) -> (Unit, Unit) {
        match self {
            Family::Volume => (Unit::Gal, Unit::L),
            Family::Distance => (Unit::Mi, Unit::Km),
            Family::Mass => (Unit::Lbs, Unit::Kg),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

impl FromStr for Unit {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::from_token(s).ok_or(ConvertError::InvalidUnit)
    }
}

/// A parsed magnitude together with its unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quantity {
    pub value: f64,
    pub unit: Unit,
}

impl Quantity {
    pub fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }
}

/// Outcome of a full expression conversion
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversion {
    pub init_num: f64,
    pub init_unit: Unit,
    pub return_num: f64,
    pub return_unit: Unit,
    /// Human-readable sentence, e.g. "5 gallons converts to 18.92705 liters"
    pub string: String,
}
