//! Error types for the planner crate.

use thiserror::Error;

/// Errors produced while planning a baseplate split.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanError {
    /// The requested unit count cannot form a plan.
    #[error("total_units must be at least 1, got {value}")]
    InvalidUnitCount {
        /// The rejected unit count.
        value: u32,
    },

    /// The build dimension cannot host even a single grid cell.
    #[error("max dimension must be at least {minimum_mm}mm, got {value}mm")]
    MaxDimensionTooSmall {
        /// The smallest acceptable dimension (one grid cell).
        minimum_mm: f64,
        /// The rejected dimension.
        value: f64,
    },
}

/// Result type alias for planner operations.
pub type PlanResult<T> = Result<T, PlanError>;
