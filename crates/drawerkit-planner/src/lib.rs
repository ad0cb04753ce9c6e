//! # DrawerKit Planner
//!
//! Decides how a baseplate spanning a whole drawer is cut into printable
//! pieces. Given a unit count per axis and a printer's maximum build
//! dimension per axis, [`plan_axis`] computes the minimal, maximally even
//! 1-D split, and [`plan_grid`] composes two independent axis plans into a
//! 2-D grid of positioned piece descriptors.
//!
//! Everything here is a pure, deterministic, in-memory transformation:
//! identical inputs always produce identical plans, including order.

pub mod error;
pub mod layout;
pub mod split;

pub use error::{PlanError, PlanResult};
pub use layout::{PlateLayout, PlatePiece};
pub use split::{plan_axis, plan_grid, total_pieces, units_for_dimension};
