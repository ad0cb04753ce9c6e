//! Unit conversion utilities.
//!
//! Handles conversion between millimeters and inches and parsing of
//! user-supplied dimension strings ("330", "11.5in").

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::MM_PER_INCH;
use crate::error::{CoreError, CoreResult};

/// Supported length units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    /// Millimeters
    Millimeters,
    /// Inches
    Inches,
}

impl Default for LengthUnit {
    fn default() -> Self {
        Self::Millimeters
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Millimeters => write!(f, "mm"),
            Self::Inches => write!(f, "in"),
        }
    }
}

impl FromStr for LengthUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mm" | "millimeter" | "millimeters" => Ok(Self::Millimeters),
            "in" | "inch" | "inches" => Ok(Self::Inches),
            _ => Err(format!("Unknown length unit: {}", s)),
        }
    }
}

impl LengthUnit {
    /// Convert a value in this unit into another unit.
    ///
    /// Linear scaling with the exact 1in = 25.4mm factor.
    pub fn convert(self, value: f64, to: LengthUnit) -> f64 {
        match (self, to) {
            (Self::Millimeters, Self::Inches) => value / MM_PER_INCH,
            (Self::Inches, Self::Millimeters) => value * MM_PER_INCH,
            _ => value,
        }
    }
}

/// Convert inches to millimeters.
pub fn inches_to_mm(inches: f64) -> f64 {
    inches * MM_PER_INCH
}

/// Convert millimeters to inches.
pub fn mm_to_inches(mm: f64) -> f64 {
    mm / MM_PER_INCH
}

/// Parse a dimension string to millimeters.
///
/// A bare decimal number is interpreted as millimeters; a number with a
/// case-insensitive `in` suffix is interpreted as inches. Surrounding
/// whitespace is trimmed.
///
/// Fails with [`CoreError::InvalidDimension`] when the numeric portion
/// cannot be parsed and with [`CoreError::NonPositive`] when the value is
/// zero or negative, regardless of which unit branch was taken.
pub fn parse_dimension(input: &str) -> CoreResult<f64> {
    let trimmed = input.trim().to_lowercase();

    let (number, unit) = match trimmed.strip_suffix("in") {
        Some(prefix) => (prefix.trim(), LengthUnit::Inches),
        None => (trimmed.as_str(), LengthUnit::Millimeters),
    };

    let value: f64 = number.parse().map_err(|_| CoreError::InvalidDimension {
        input: input.trim().to_string(),
    })?;

    if value <= 0.0 {
        return Err(CoreError::NonPositive {
            field: "dimension".to_string(),
            value,
        });
    }

    Ok(unit.convert(value, LengthUnit::Millimeters))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inches_to_mm() {
        assert_eq!(inches_to_mm(1.0), 25.4);
        assert!((inches_to_mm(11.5) - 292.1).abs() < 1e-9);
    }

    #[test]
    fn test_mm_to_inches() {
        assert_eq!(mm_to_inches(25.4), 1.0);
        assert!((mm_to_inches(292.1) - 11.5).abs() < 1e-9);
    }

    #[test]
    fn test_convert_round_trip() {
        let mm = LengthUnit::Inches.convert(20.5, LengthUnit::Millimeters);
        let back = LengthUnit::Millimeters.convert(mm, LengthUnit::Inches);
        assert!((back - 20.5).abs() < 1e-9);
        assert_eq!(LengthUnit::Millimeters.convert(330.0, LengthUnit::Millimeters), 330.0);
    }

    #[test]
    fn test_parse_plain_millimeters() {
        assert_eq!(parse_dimension("330").unwrap(), 330.0);
        assert_eq!(parse_dimension("  340.5  ").unwrap(), 340.5);
    }

    #[test]
    fn test_parse_inch_suffix() {
        assert!((parse_dimension("11.5in").unwrap() - 292.1).abs() < 1e-9);
        assert_eq!(parse_dimension("1.0in").unwrap(), 25.4);
        // Suffix is case-insensitive
        assert_eq!(parse_dimension("1.0IN").unwrap(), 25.4);
        assert_eq!(parse_dimension("1.0In").unwrap(), 25.4);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            parse_dimension("abc"),
            Err(CoreError::InvalidDimension { .. })
        ));
        assert!(matches!(
            parse_dimension("12.3.4in"),
            Err(CoreError::InvalidDimension { .. })
        ));
        assert!(matches!(
            parse_dimension(""),
            Err(CoreError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_non_positive() {
        assert!(matches!(
            parse_dimension("0"),
            Err(CoreError::NonPositive { .. })
        ));
        assert!(matches!(
            parse_dimension("-5"),
            Err(CoreError::NonPositive { .. })
        ));
        // Positivity applies on the inch branch too
        assert!(matches!(
            parse_dimension("-2in"),
            Err(CoreError::NonPositive { .. })
        ));
    }

    #[test]
    fn test_length_unit_from_str() {
        assert_eq!("mm".parse::<LengthUnit>().unwrap(), LengthUnit::Millimeters);
        assert_eq!("Inch".parse::<LengthUnit>().unwrap(), LengthUnit::Inches);
        assert!("furlong".parse::<LengthUnit>().is_err());
    }
}
