//! Baseplate parameter record.

use serde::{Deserialize, Serialize};

use drawerkit_core::constants::{
    DEFAULT_BASEPLATE_EXT_DEPTH_MM, DEFAULT_COUNTERSINK_ANGLE_DEG, DEFAULT_COUNTERSINK_DIAM_MM,
    DEFAULT_SCREW_HOLE_DIAM_MM,
};

/// Feature options for baseplate pieces.
///
/// Plain data handed to the rendering collaborator along with each piece's
/// unit dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseplateOptions {
    /// Add corner mounting screw tabs.
    pub corner_screws: bool,
    /// Screw hole diameter in millimeters.
    pub screw_hole_diam_mm: f64,
    /// Countersink diameter in millimeters.
    pub countersink_diam_mm: f64,
    /// Countersink angle in degrees.
    pub countersink_angle_deg: f64,
    /// Extended depth under the baseplate in millimeters.
    pub ext_depth_mm: f64,
    /// Remove the bottom chamfer for a flat underside.
    pub straight_bottom: bool,
}

impl Default for BaseplateOptions {
    fn default() -> Self {
        Self {
            corner_screws: false,
            screw_hole_diam_mm: DEFAULT_SCREW_HOLE_DIAM_MM,
            countersink_diam_mm: DEFAULT_COUNTERSINK_DIAM_MM,
            countersink_angle_deg: DEFAULT_COUNTERSINK_ANGLE_DEG,
            ext_depth_mm: DEFAULT_BASEPLATE_EXT_DEPTH_MM,
            straight_bottom: false,
        }
    }
}

impl BaseplateOptions {
    /// Options with corner mounting screws enabled.
    pub fn with_corner_screws() -> Self {
        Self {
            corner_screws: true,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = BaseplateOptions::default();
        assert!(!options.corner_screws);
        assert_eq!(options.screw_hole_diam_mm, 5.0);
        assert_eq!(options.countersink_diam_mm, 10.0);
        assert_eq!(options.countersink_angle_deg, 82.0);
        assert_eq!(options.ext_depth_mm, 0.0);
        assert!(!options.straight_bottom);
    }

    #[test]
    fn test_with_corner_screws() {
        let options = BaseplateOptions::with_corner_screws();
        assert!(options.corner_screws);
        assert_eq!(options.screw_hole_diam_mm, 5.0);
    }
}
