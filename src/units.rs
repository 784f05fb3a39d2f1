use std::fmt;
use std::str::FromStr;

use crate::errors::{Error, Result};
use crate::types::{split_number, strp};

/// Physical length units understood in SVG documents.
///
/// Modelica coordinates are taken to be millimeters, so one user unit (px)
/// is treated as one millimeter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unit {
    Px,
    Pt,
    Pc,
    Mm,
    Cm,
    In,
}

impl Unit {
    fn mm_factor(self) -> f64 {
        match self {
            Unit::Pt => 25.4 / 72.,
            Unit::Px => 1.,
            Unit::Pc => 304. / 72.,
            Unit::Mm => 1.,
            Unit::Cm => 10.,
            Unit::In => 25.4,
        }
    }
}

impl FromStr for Unit {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        Ok(match value.to_lowercase().as_str() {
            // unitless lengths are user units
            "" | "px" => Unit::Px,
            "pt" => Unit::Pt,
            "pc" => Unit::Pc,
            "mm" => Unit::Mm,
            "cm" => Unit::Cm,
            "in" => Unit::In,
            other => return Err(Error::Unsupported(format!("length unit '{other}'"))),
        })
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Unit::Px => "px",
            Unit::Pt => "pt",
            Unit::Pc => "pc",
            Unit::Mm => "mm",
            Unit::Cm => "cm",
            Unit::In => "in",
        };
        write!(f, "{name}")
    }
}

pub fn convert_units(value: f64, from: Unit, to: Unit) -> f64 {
    value * from.mm_factor() / to.mm_factor()
}

/// Parse a length such as `12px` or `3.5mm` and express it in `to` units.
pub fn parse_length(value: &str, to: Unit) -> Result<f64> {
    let (number, unit) = split_number(value);
    if number.is_empty() {
        return Err(Error::Parse(format!("cannot understand length '{value}'")));
    }
    Ok(convert_units(strp(number)?, unit.parse()?, to))
}
