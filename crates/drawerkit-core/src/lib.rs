//! # DrawerKit Core
//!
//! Core types and utilities shared by all DrawerKit crates:
//! grid constants, the [`GridSpec`] context, length-unit conversion
//! and parsing, and input validation.

pub mod constants;
pub mod error;
pub mod grid;
pub mod units;
pub mod validation;

pub use error::{CoreError, CoreResult};
pub use grid::GridSpec;
pub use units::{inches_to_mm, mm_to_inches, parse_dimension, LengthUnit};
pub use validation::{
    validate_baseplate_units, validate_drawer_dimensions, validate_file_format,
    validate_positive, validate_printer_dimensions, validate_tolerance,
};
