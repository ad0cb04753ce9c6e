//! Baseplate splitting calculations.

use drawerkit_core::GridSpec;

use crate::error::{PlanError, PlanResult};
use crate::layout::PlateLayout;

/// Number of whole grid units that fit in a drawer dimension.
///
/// Floor division: the leftover margin is later filled by spacers, never by
/// a partial cell.
pub fn units_for_dimension(dimension_mm: f64, grid: &GridSpec) -> u32 {
    grid.units_for(dimension_mm)
}

/// Split a run of grid units into the minimum number of pieces that each
/// fit within a printer's maximum build dimension.
///
/// Units are distributed as evenly as possible; when the count does not
/// divide evenly, earlier pieces receive the extra unit. The order is a
/// load-bearing contract: downstream naming refers to pieces by index, so
/// identical inputs must always produce the identical sequence.
///
/// Returns a list of unit counts per piece, e.g. `[4, 3]` for two pieces
/// of 4 and 3 units.
pub fn plan_axis(total_units: u32, max_dimension_mm: f64, grid: &GridSpec) -> PlanResult<Vec<u32>> {
    if total_units < 1 {
        return Err(PlanError::InvalidUnitCount { value: total_units });
    }
    if max_dimension_mm < grid.unit_mm {
        return Err(PlanError::MaxDimensionTooSmall {
            minimum_mm: grid.unit_mm,
            value: max_dimension_mm,
        });
    }

    let total_mm = grid.physical_size(total_units);

    // Fits in one piece; the boundary is inclusive.
    if total_mm <= max_dimension_mm {
        return Ok(vec![total_units]);
    }

    let num_pieces = (total_mm / max_dimension_mm).ceil() as u32;

    let base_units = total_units / num_pieces;
    let extra_units = total_units % num_pieces;

    let pieces = (0..num_pieces)
        .map(|i| base_units + u32::from(i < extra_units))
        .collect();

    Ok(pieces)
}

/// Plan the full 2-D grid split for a baseplate.
///
/// The two axes are planned independently and composed as a Cartesian
/// product: every (row, column) grid position gets exactly one piece
/// descriptor, even when several positions share the same unit sizes.
/// Deduplicating identical pieces for production is a downstream concern.
pub fn plan_grid(
    width_units: u32,
    depth_units: u32,
    max_width_mm: f64,
    max_depth_mm: f64,
    grid: &GridSpec,
) -> PlanResult<PlateLayout> {
    let width_plan = plan_axis(width_units, max_width_mm, grid)?;
    let depth_plan = plan_axis(depth_units, max_depth_mm, grid)?;
    Ok(PlateLayout::from_plans(width_plan, depth_plan))
}

/// Total number of pieces a baseplate will be split into.
pub fn total_pieces(
    width_units: u32,
    depth_units: u32,
    max_width_mm: f64,
    max_depth_mm: f64,
    grid: &GridSpec,
) -> PlanResult<usize> {
    let layout = plan_grid(width_units, depth_units, max_width_mm, max_depth_mm, grid)?;
    Ok(layout.total_pieces)
}
