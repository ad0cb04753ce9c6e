//! Spacer parameter record.

use serde::{Deserialize, Serialize};

use drawerkit_core::constants::{
    DEFAULT_ALIGN_FEATURES, DEFAULT_ALIGN_TOLERANCE_MM, DEFAULT_MIN_MARGIN_MM,
    DEFAULT_SHOW_ARROWS, DEFAULT_SPACER_CHAMFER_MM, DEFAULT_SPACER_THICKNESS_MM,
    DEFAULT_TOLERANCE_MM,
};

/// Parameters for the fitted edge spacer set around a baseplate.
///
/// Spacers fill the margin between the outermost grid cells and the drawer
/// walls. The record is plain data handed to the rendering collaborator;
/// it performs no computation of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpacerConfig {
    /// Drawer width in millimeters.
    pub width_mm: f64,
    /// Drawer depth in millimeters.
    pub depth_mm: f64,
    /// Spacer thickness in millimeters.
    pub thickness_mm: f64,
    /// Overall fit tolerance in millimeters.
    pub tolerance_mm: f64,
    /// Edge chamfer radius in millimeters.
    pub chamfer_mm: f64,
    /// Render orientation arrows on the spacers.
    pub show_arrows: bool,
    /// Render jigsaw interlocking features.
    pub align_features: bool,
    /// Tolerance for the interlocking joints in millimeters.
    pub align_tolerance_mm: f64,
    /// Spacers thinner than this margin are omitted.
    pub min_margin_mm: f64,
}

impl SpacerConfig {
    /// Spacer parameters for a drawer, with all generation defaults.
    pub fn for_drawer(width_mm: f64, depth_mm: f64) -> Self {
        Self {
            width_mm,
            depth_mm,
            thickness_mm: DEFAULT_SPACER_THICKNESS_MM,
            tolerance_mm: DEFAULT_TOLERANCE_MM,
            chamfer_mm: DEFAULT_SPACER_CHAMFER_MM,
            show_arrows: DEFAULT_SHOW_ARROWS,
            align_features: DEFAULT_ALIGN_FEATURES,
            align_tolerance_mm: DEFAULT_ALIGN_TOLERANCE_MM,
            min_margin_mm: DEFAULT_MIN_MARGIN_MM,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_drawer_defaults() {
        let config = SpacerConfig::for_drawer(330.0, 340.0);
        assert_eq!(config.width_mm, 330.0);
        assert_eq!(config.depth_mm, 340.0);
        assert_eq!(config.thickness_mm, 5.0);
        assert_eq!(config.tolerance_mm, 1.0);
        assert_eq!(config.chamfer_mm, 1.0);
        assert!(config.show_arrows);
        assert!(config.align_features);
        assert_eq!(config.align_tolerance_mm, 0.15);
        assert_eq!(config.min_margin_mm, 4.0);
    }
}
