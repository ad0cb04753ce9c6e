//! # DrawerKit Device Database
//!
//! Printer build-volume profiles: a set of built-in presets for common
//! machines plus user-defined custom profiles with JSON persistence.

pub mod error;
pub mod manager;
pub mod model;

pub use error::{DeviceError, DeviceResult};
pub use manager::PrinterManager;
pub use model::{preset_names, PrinterProfile, DEFAULT_PRINTER, PRINTER_PRESETS};
