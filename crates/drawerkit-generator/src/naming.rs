//! Output file naming.
//!
//! Filenames are a pure function of the generation parameters: identical
//! inputs always produce byte-identical names, and every parameter that
//! changes the geometry appears in the name so distinct artifacts never
//! collide. The tolerance token appears only when the value differs from
//! the 1.0mm default.

use std::path::{Path, PathBuf};

use drawerkit_core::constants::DEFAULT_TOLERANCE_MM;

use crate::render::{FileFormat, RenderMode};

/// Filename for a spacer set.
///
/// `drawer_330x340_spacer_half_set.stl`, or with a non-default tolerance
/// `drawer_330x340_tol0.5_spacer_half_set.stl`.
pub fn spacer_filename(
    width_mm: f64,
    depth_mm: f64,
    tolerance_mm: f64,
    mode: RenderMode,
    format: FileFormat,
) -> String {
    let mut filename = drawer_stem(width_mm, depth_mm);
    push_tolerance(&mut filename, tolerance_mm);
    filename.push_str(&format!("_spacer_{}.{}", mode, format));
    filename
}

/// Filename for one baseplate piece.
///
/// `drawer_330x340_baseplate_7x8.stl`, or with mounting screws
/// `drawer_330x340_screws_baseplate_7x8.stl`.
pub fn baseplate_filename(
    width_mm: f64,
    depth_mm: f64,
    units_wide: u32,
    units_deep: u32,
    corner_screws: bool,
    format: FileFormat,
) -> String {
    let mut filename = drawer_stem(width_mm, depth_mm);
    if corner_screws {
        filename.push_str("_screws");
    }
    filename.push_str(&format!("_baseplate_{}x{}.{}", units_wide, units_deep, format));
    filename
}

/// Filename for the full spacer assembly.
///
/// `drawer_330x340_full_assembly.step`.
pub fn assembly_filename(
    width_mm: f64,
    depth_mm: f64,
    tolerance_mm: f64,
    format: FileFormat,
) -> String {
    let mut filename = drawer_stem(width_mm, depth_mm);
    push_tolerance(&mut filename, tolerance_mm);
    filename.push_str(&format!("_full_assembly.{}", format));
    filename
}

/// Join a filename onto an output directory.
pub fn output_path(filename: &str, output_dir: &Path) -> PathBuf {
    output_dir.join(filename)
}

// Drawer dimensions are integer-truncated in filenames.
fn drawer_stem(width_mm: f64, depth_mm: f64) -> String {
    format!("drawer_{}x{}", width_mm.trunc() as i64, depth_mm.trunc() as i64)
}

fn push_tolerance(filename: &mut String, tolerance_mm: f64) {
    if tolerance_mm != DEFAULT_TOLERANCE_MM {
        filename.push_str(&format!("_tol{}", tolerance_mm));
    }
}
