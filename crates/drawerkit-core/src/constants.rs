//! Global constants for DrawerKit.
//!
//! Grid geometry follows the Gridfinity specification; generation defaults
//! match the values baked into the component generators.

/// One Gridfinity unit along either horizontal axis, in millimeters.
pub const GRIDFINITY_UNIT_MM: f64 = 42.0;

/// One Gridfinity height unit, in millimeters.
pub const GRIDFINITY_HEIGHT_UNIT_MM: f64 = 7.0;

/// Exact conversion factor between inches and millimeters.
pub const MM_PER_INCH: f64 = 25.4;

/// Default spacer tolerance in millimeters.
pub const DEFAULT_TOLERANCE_MM: f64 = 1.0;

/// Tolerance values above this are almost certainly a unit-confusion bug.
pub const MAX_TOLERANCE_MM: f64 = 5.0;

/// Default spacer thickness in millimeters.
pub const DEFAULT_SPACER_THICKNESS_MM: f64 = 5.0;

/// Default spacer edge chamfer radius in millimeters.
pub const DEFAULT_SPACER_CHAMFER_MM: f64 = 1.0;

/// Default extended depth under a baseplate in millimeters.
pub const DEFAULT_BASEPLATE_EXT_DEPTH_MM: f64 = 0.0;

/// Default mounting screw hole diameter in millimeters.
pub const DEFAULT_SCREW_HOLE_DIAM_MM: f64 = 5.0;

/// Default countersink diameter in millimeters.
pub const DEFAULT_COUNTERSINK_DIAM_MM: f64 = 10.0;

/// Default countersink angle in degrees.
pub const DEFAULT_COUNTERSINK_ANGLE_DEG: f64 = 82.0;

/// Orientation arrows on spacers are rendered by default.
pub const DEFAULT_SHOW_ARROWS: bool = true;

/// Jigsaw interlocking features on spacers are rendered by default.
pub const DEFAULT_ALIGN_FEATURES: bool = true;

/// Default tolerance for interlocking joints in millimeters.
pub const DEFAULT_ALIGN_TOLERANCE_MM: f64 = 0.15;

/// Spacers thinner than this margin are not generated.
pub const DEFAULT_MIN_MARGIN_MM: f64 = 4.0;

/// Default output directory for generated files.
pub const DEFAULT_OUTPUT_DIR: &str = "output";
