//! Input validation.
//!
//! Every check rejects synchronously with an error naming the offending
//! field and the rejected value.

use crate::error::{CoreError, CoreResult};
use crate::grid::GridSpec;

/// Validate that a value is strictly positive.
pub fn validate_positive(value: f64, field: &str) -> CoreResult<()> {
    if value <= 0.0 {
        return Err(CoreError::NonPositive {
            field: field.to_string(),
            value,
        });
    }
    Ok(())
}

/// Validate drawer dimensions.
///
/// Both dimensions must be positive and large enough to host at least one
/// grid cell.
pub fn validate_drawer_dimensions(width_mm: f64, depth_mm: f64, grid: &GridSpec) -> CoreResult<()> {
    validate_positive(width_mm, "drawer width")?;
    validate_positive(depth_mm, "drawer depth")?;

    if width_mm < grid.unit_mm {
        return Err(CoreError::TooSmall {
            field: "drawer width".to_string(),
            minimum_mm: grid.unit_mm,
            value: width_mm,
        });
    }
    if depth_mm < grid.unit_mm {
        return Err(CoreError::TooSmall {
            field: "drawer depth".to_string(),
            minimum_mm: grid.unit_mm,
            value: depth_mm,
        });
    }
    Ok(())
}

/// Validate baseplate unit counts.
pub fn validate_baseplate_units(units_width: u32, units_depth: u32) -> CoreResult<()> {
    if units_width < 1 {
        return Err(CoreError::TooFewUnits {
            field: "baseplate width".to_string(),
            value: units_width,
        });
    }
    if units_depth < 1 {
        return Err(CoreError::TooFewUnits {
            field: "baseplate depth".to_string(),
            value: units_depth,
        });
    }
    Ok(())
}

/// Validate a spacer tolerance value.
///
/// Values above 5mm are rejected outright; they are almost certainly a
/// unit-confusion mistake rather than a legitimate design choice.
pub fn validate_tolerance(tolerance_mm: f64) -> CoreResult<()> {
    validate_positive(tolerance_mm, "tolerance")?;

    if tolerance_mm > crate::constants::MAX_TOLERANCE_MM {
        return Err(CoreError::OutOfRange {
            field: "tolerance".to_string(),
            maximum_mm: crate::constants::MAX_TOLERANCE_MM,
            value: tolerance_mm,
        });
    }
    Ok(())
}

/// Validate printer build volume dimensions.
///
/// Each axis must be able to produce at least a single grid cell.
pub fn validate_printer_dimensions(
    max_width_mm: f64,
    max_depth_mm: f64,
    grid: &GridSpec,
) -> CoreResult<()> {
    if max_width_mm < grid.unit_mm {
        return Err(CoreError::TooSmall {
            field: "printer max_width".to_string(),
            minimum_mm: grid.unit_mm,
            value: max_width_mm,
        });
    }
    if max_depth_mm < grid.unit_mm {
        return Err(CoreError::TooSmall {
            field: "printer max_depth".to_string(),
            minimum_mm: grid.unit_mm,
            value: max_depth_mm,
        });
    }
    Ok(())
}

/// Validate that a file format string is one of the supported formats.
pub fn validate_file_format(format: &str, valid_formats: &[&str]) -> CoreResult<()> {
    let lowered = format.to_lowercase();
    if !valid_formats.contains(&lowered.as_str()) {
        let mut valid: Vec<&str> = valid_formats.to_vec();
        valid.sort_unstable();
        return Err(CoreError::UnsupportedFormat {
            format: format.to_string(),
            valid: valid.join(", "),
        });
    }
    Ok(())
}
