//! Printer profile model and built-in presets.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use drawerkit_core::{validate_printer_dimensions, GridSpec};

use crate::error::{DeviceError, DeviceResult};

/// Built-in printer presets: preset key, display name, bed width, bed depth.
pub const PRINTER_PRESETS: &[(&str, &str, f64, f64)] = &[
    ("bambu-x1c", "Bambu Lab X1C", 256.0, 256.0),
    ("bambu-p1p", "Bambu Lab P1P", 256.0, 256.0),
    ("prusa-mk4", "Prusa MK4", 250.0, 210.0),
    ("prusa-mini", "Prusa Mini", 180.0, 180.0),
    ("ender3", "Ender 3", 220.0, 220.0),
];

/// Preset used when the user does not pick one.
pub const DEFAULT_PRINTER: &str = "bambu-x1c";

/// Sorted list of valid preset keys.
pub fn preset_names() -> Vec<&'static str> {
    let mut names: Vec<&str> = PRINTER_PRESETS.iter().map(|(key, ..)| *key).collect();
    names.sort_unstable();
    names
}

/// Printer build volume configuration.
///
/// Immutable once constructed; the maximum producible dimension along each
/// horizontal axis constrains how baseplates are split.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrinterProfile {
    /// Stable identifier: the preset key, or a UUID for custom profiles.
    pub id: String,
    /// Printer model name for display.
    pub name: String,
    /// Maximum print width in millimeters.
    pub max_width_mm: f64,
    /// Maximum print depth in millimeters.
    pub max_depth_mm: f64,
}

impl PrinterProfile {
    /// Create a profile from a built-in preset key.
    pub fn from_preset(preset: &str) -> DeviceResult<Self> {
        PRINTER_PRESETS
            .iter()
            .find(|(key, ..)| *key == preset)
            .map(|&(key, name, width, depth)| Self {
                id: key.to_string(),
                name: name.to_string(),
                max_width_mm: width,
                max_depth_mm: depth,
            })
            .ok_or_else(|| DeviceError::UnknownPreset {
                name: preset.to_string(),
                valid: preset_names().join(", "),
            })
    }

    /// Create a custom profile with an explicit build volume.
    ///
    /// The volume must be able to produce at least a single grid cell on
    /// each axis.
    pub fn custom(
        name: &str,
        max_width_mm: f64,
        max_depth_mm: f64,
        grid: &GridSpec,
    ) -> DeviceResult<Self> {
        validate_printer_dimensions(max_width_mm, max_depth_mm, grid)?;
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            max_width_mm,
            max_depth_mm,
        })
    }
}

impl fmt::Display for PrinterProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}mm × {}mm)",
            self.name, self.max_width_mm, self.max_depth_mm
        )
    }
}
