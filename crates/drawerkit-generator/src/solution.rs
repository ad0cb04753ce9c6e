//! Drawer solution assembly.
//!
//! [`DrawerGenerator`] validates a request up front, derives unit counts,
//! plans the plate layout, and drives a [`SolidRenderer`] once per piece
//! to materialize the output files.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::Serialize;
use tracing::info;

use drawerkit_core::{
    constants::{
        DEFAULT_SPACER_CHAMFER_MM, DEFAULT_SPACER_THICKNESS_MM, DEFAULT_TOLERANCE_MM,
    },
    validate_drawer_dimensions, validate_printer_dimensions, validate_tolerance, GridSpec,
};
use drawerkit_devicedb::PrinterProfile;
use drawerkit_planner::{plan_grid, PlateLayout};

use crate::baseplate::BaseplateOptions;
use crate::error::GeneratorResult;
use crate::naming::{assembly_filename, baseplate_filename, output_path, spacer_filename};
use crate::render::{ensure_output_dir, FileFormat, RenderMode, SolidRenderer};
use crate::spacer::SpacerConfig;

/// User-tunable generation options for a drawer solution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawerOptions {
    /// Spacer fit tolerance in millimeters.
    pub tolerance_mm: f64,
    /// Add corner mounting screws to baseplate pieces.
    pub corner_screws: bool,
    /// Spacer thickness in millimeters.
    pub spacer_thickness_mm: f64,
    /// Spacer edge chamfer radius in millimeters.
    pub chamfer_mm: f64,
    /// Render orientation arrows on spacers.
    pub show_arrows: bool,
    /// Render jigsaw interlocking features on spacers.
    pub align_features: bool,
}

impl Default for DrawerOptions {
    fn default() -> Self {
        Self {
            tolerance_mm: DEFAULT_TOLERANCE_MM,
            corner_screws: false,
            spacer_thickness_mm: DEFAULT_SPACER_THICKNESS_MM,
            chamfer_mm: DEFAULT_SPACER_CHAMFER_MM,
            show_arrows: true,
            align_features: true,
        }
    }
}

/// The complete, immutable solution for one drawer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawerSolution {
    /// Drawer width in millimeters.
    pub drawer_width_mm: f64,
    /// Drawer depth in millimeters.
    pub drawer_depth_mm: f64,
    /// Baseplate width in grid units.
    pub width_units: u32,
    /// Baseplate depth in grid units.
    pub depth_units: u32,
    /// The (possibly split) plate layout.
    pub layout: PlateLayout,
    /// Spacer parameters.
    pub spacer: SpacerConfig,
    /// Baseplate feature options.
    pub baseplate: BaseplateOptions,
}

/// Paths written by [`DrawerGenerator::save_all`].
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedFiles {
    /// Spacer artifact paths.
    pub spacers: Vec<PathBuf>,
    /// Baseplate piece paths, in grid order.
    pub baseplates: Vec<PathBuf>,
}

/// Generates complete drawer solutions: spacers plus split baseplates.
///
/// All validation happens in the constructor; the layout and solution are
/// computed once on first read and never recomputed or mutated afterward.
#[derive(Debug)]
pub struct DrawerGenerator {
    width_mm: f64,
    depth_mm: f64,
    profile: PrinterProfile,
    options: DrawerOptions,
    grid: GridSpec,
    width_units: u32,
    depth_units: u32,
    layout: OnceLock<PlateLayout>,
    solution: OnceLock<DrawerSolution>,
}

impl DrawerGenerator {
    /// Create a generator for a drawer on the standard Gridfinity grid.
    pub fn new(
        width_mm: f64,
        depth_mm: f64,
        profile: PrinterProfile,
        options: DrawerOptions,
    ) -> GeneratorResult<Self> {
        Self::with_grid(width_mm, depth_mm, profile, options, GridSpec::default())
    }

    /// Create a generator with an explicit grid context.
    ///
    /// Rejects invalid drawer dimensions, tolerances, and build volumes
    /// here, before any planning or rendering work.
    pub fn with_grid(
        width_mm: f64,
        depth_mm: f64,
        profile: PrinterProfile,
        options: DrawerOptions,
        grid: GridSpec,
    ) -> GeneratorResult<Self> {
        validate_drawer_dimensions(width_mm, depth_mm, &grid)?;
        validate_tolerance(options.tolerance_mm)?;
        validate_printer_dimensions(profile.max_width_mm, profile.max_depth_mm, &grid)?;

        let width_units = grid.units_for(width_mm);
        let depth_units = grid.units_for(depth_mm);

        Ok(Self {
            width_mm,
            depth_mm,
            profile,
            options,
            grid,
            width_units,
            depth_units,
            layout: OnceLock::new(),
            solution: OnceLock::new(),
        })
    }

    /// Drawer width in millimeters.
    pub fn width_mm(&self) -> f64 {
        self.width_mm
    }

    /// Drawer depth in millimeters.
    pub fn depth_mm(&self) -> f64 {
        self.depth_mm
    }

    /// Baseplate width in grid units.
    pub fn width_units(&self) -> u32 {
        self.width_units
    }

    /// Baseplate depth in grid units.
    pub fn depth_units(&self) -> u32 {
        self.depth_units
    }

    /// The printer profile this solution targets.
    pub fn profile(&self) -> &PrinterProfile {
        &self.profile
    }

    /// The generation options.
    pub fn options(&self) -> &DrawerOptions {
        &self.options
    }

    /// Spacer parameters derived from the drawer and options.
    pub fn spacer_config(&self) -> SpacerConfig {
        SpacerConfig {
            thickness_mm: self.options.spacer_thickness_mm,
            tolerance_mm: self.options.tolerance_mm,
            chamfer_mm: self.options.chamfer_mm,
            show_arrows: self.options.show_arrows,
            align_features: self.options.align_features,
            ..SpacerConfig::for_drawer(self.width_mm, self.depth_mm)
        }
    }

    /// Baseplate feature options derived from the generation options.
    pub fn baseplate_options(&self) -> BaseplateOptions {
        BaseplateOptions {
            corner_screws: self.options.corner_screws,
            ..BaseplateOptions::default()
        }
    }

    /// The plate layout, computed once on first read.
    pub fn layout(&self) -> GeneratorResult<&PlateLayout> {
        if let Some(layout) = self.layout.get() {
            return Ok(layout);
        }
        let layout = plan_grid(
            self.width_units,
            self.depth_units,
            self.profile.max_width_mm,
            self.profile.max_depth_mm,
            &self.grid,
        )?;
        info!(
            width_units = self.width_units,
            depth_units = self.depth_units,
            total_pieces = layout.total_pieces,
            is_split = layout.is_split,
            "planned baseplate layout"
        );
        Ok(self.layout.get_or_init(|| layout))
    }

    /// The complete solution record, computed once on first read.
    pub fn solution(&self) -> GeneratorResult<&DrawerSolution> {
        if let Some(solution) = self.solution.get() {
            return Ok(solution);
        }
        let layout = self.layout()?.clone();
        let solution = DrawerSolution {
            drawer_width_mm: self.width_mm,
            drawer_depth_mm: self.depth_mm,
            width_units: self.width_units,
            depth_units: self.depth_units,
            layout,
            spacer: self.spacer_config(),
            baseplate: self.baseplate_options(),
        };
        Ok(self.solution.get_or_init(|| solution))
    }

    /// Render the spacer half set as STL.
    ///
    /// The half set is printed twice for a complete set.
    pub fn save_spacer_half_set(
        &self,
        renderer: &mut dyn SolidRenderer,
        output_dir: &Path,
    ) -> GeneratorResult<PathBuf> {
        ensure_output_dir(output_dir)?;
        let filename = spacer_filename(
            self.width_mm,
            self.depth_mm,
            self.options.tolerance_mm,
            RenderMode::HalfSet,
            FileFormat::Stl,
        );
        let path = output_path(&filename, output_dir);
        renderer.render_spacer(&self.spacer_config(), RenderMode::HalfSet, &path, FileFormat::Stl)?;
        info!(path = %path.display(), "generated spacer half set");
        Ok(path)
    }

    /// Render the full spacer assembly as STEP.
    pub fn save_spacer_full_assembly(
        &self,
        renderer: &mut dyn SolidRenderer,
        output_dir: &Path,
    ) -> GeneratorResult<PathBuf> {
        ensure_output_dir(output_dir)?;
        let filename = assembly_filename(
            self.width_mm,
            self.depth_mm,
            self.options.tolerance_mm,
            FileFormat::Step,
        );
        let path = output_path(&filename, output_dir);
        renderer.render_spacer(
            &self.spacer_config(),
            RenderMode::FullAssembly,
            &path,
            FileFormat::Step,
        )?;
        info!(path = %path.display(), "generated spacer full assembly");
        Ok(path)
    }

    /// Render every baseplate piece as STL, one dispatch per grid position.
    ///
    /// Pieces with identical unit sizes share a filename; the layout's
    /// distinct-piece counts tell production how many copies to print.
    pub fn save_baseplate_pieces(
        &self,
        renderer: &mut dyn SolidRenderer,
        output_dir: &Path,
    ) -> GeneratorResult<Vec<PathBuf>> {
        ensure_output_dir(output_dir)?;
        let layout = self.layout()?;
        let options = self.baseplate_options();

        let mut saved = Vec::with_capacity(layout.total_pieces);
        for piece in &layout.pieces {
            let filename = baseplate_filename(
                self.width_mm,
                self.depth_mm,
                piece.units_wide,
                piece.units_deep,
                options.corner_screws,
                FileFormat::Stl,
            );
            let path = output_path(&filename, output_dir);
            renderer.render_baseplate(
                piece.units_wide,
                piece.units_deep,
                &options,
                &path,
                FileFormat::Stl,
            )?;
            saved.push(path);
        }
        info!(count = saved.len(), "generated baseplate pieces");
        Ok(saved)
    }

    /// Render all components into an output directory.
    pub fn save_all(
        &self,
        renderer: &mut dyn SolidRenderer,
        output_dir: &Path,
    ) -> GeneratorResult<GeneratedFiles> {
        Ok(GeneratedFiles {
            spacers: vec![
                self.save_spacer_half_set(renderer, output_dir)?,
                self.save_spacer_full_assembly(renderer, output_dir)?,
            ],
            baseplates: self.save_baseplate_pieces(renderer, output_dir)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::ManifestRenderer;
    use drawerkit_core::CoreError;
    use drawerkit_planner::PlatePiece;

    fn x1c() -> PrinterProfile {
        PrinterProfile::from_preset("bambu-x1c").unwrap()
    }

    #[test]
    fn test_unit_derivation_discards_remainder() {
        let gen = DrawerGenerator::new(330.0, 340.0, x1c(), DrawerOptions::default()).unwrap();
        assert_eq!(gen.width_units(), 7);
        assert_eq!(gen.depth_units(), 8);
    }

    #[test]
    fn test_construction_rejects_small_drawer() {
        let err = DrawerGenerator::new(30.0, 340.0, x1c(), DrawerOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            crate::GeneratorError::Validation(CoreError::TooSmall { .. })
        ));
    }

    #[test]
    fn test_construction_rejects_bad_tolerance() {
        let options = DrawerOptions {
            tolerance_mm: 6.0,
            ..DrawerOptions::default()
        };
        let err = DrawerGenerator::new(330.0, 340.0, x1c(), options).unwrap_err();
        assert!(matches!(
            err,
            crate::GeneratorError::Validation(CoreError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_layout_is_memoized() {
        let gen = DrawerGenerator::new(330.0, 340.0, x1c(), DrawerOptions::default()).unwrap();
        let first = gen.layout().unwrap();
        let second = gen.layout().unwrap();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_solution_is_memoized_and_complete() {
        let gen = DrawerGenerator::new(330.0, 340.0, x1c(), DrawerOptions::default()).unwrap();
        let solution = gen.solution().unwrap();
        assert_eq!(solution.drawer_width_mm, 330.0);
        assert_eq!(solution.width_units, 7);
        assert_eq!(solution.depth_units, 8);
        assert!(!solution.layout.is_split);
        assert_eq!(solution.spacer.tolerance_mm, 1.0);
        assert!(!solution.baseplate.corner_screws);

        let again = gen.solution().unwrap();
        assert!(std::ptr::eq(solution, again));
    }

    #[test]
    fn test_large_drawer_splits() {
        // 13 x 11 units on a 256mm bed: 3 x 2 pieces
        let gen = DrawerGenerator::new(550.0, 470.0, x1c(), DrawerOptions::default()).unwrap();
        assert_eq!(gen.width_units(), 13);
        assert_eq!(gen.depth_units(), 11);
        let layout = gen.layout().unwrap();
        assert!(layout.is_split);
        assert_eq!(layout.total_pieces, 6);
        assert_eq!(
            layout.piece_at(0, 0),
            Some(&PlatePiece {
                units_wide: 5,
                units_deep: 6,
                column: 0,
                row: 0,
                print_count: 1
            })
        );
    }

    #[test]
    fn test_save_all_dispatches_one_render_per_piece() {
        let dir = tempfile::tempdir().unwrap();
        let gen = DrawerGenerator::new(550.0, 470.0, x1c(), DrawerOptions::default()).unwrap();
        let mut renderer = ManifestRenderer::new();

        let files = gen.save_all(&mut renderer, dir.path()).unwrap();
        assert_eq!(files.spacers.len(), 2);
        assert_eq!(files.baseplates.len(), 6);
        // Two spacer dispatches plus one per grid piece
        assert_eq!(renderer.records().len(), 8);
    }

    #[test]
    fn test_save_all_filenames() {
        let dir = tempfile::tempdir().unwrap();
        let gen = DrawerGenerator::new(330.0, 340.0, x1c(), DrawerOptions::default()).unwrap();
        let mut renderer = ManifestRenderer::new();

        let files = gen.save_all(&mut renderer, dir.path()).unwrap();
        let names: Vec<String> = files
            .spacers
            .iter()
            .chain(files.baseplates.iter())
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            vec![
                "drawer_330x340_spacer_half_set.stl",
                "drawer_330x340_full_assembly.step",
                "drawer_330x340_baseplate_7x8.stl",
            ]
        );
    }

    #[test]
    fn test_corner_screws_show_up_in_filenames() {
        let dir = tempfile::tempdir().unwrap();
        let options = DrawerOptions {
            corner_screws: true,
            ..DrawerOptions::default()
        };
        let gen = DrawerGenerator::new(330.0, 340.0, x1c(), options).unwrap();
        let mut renderer = ManifestRenderer::new();

        let files = gen.save_baseplate_pieces(&mut renderer, dir.path()).unwrap();
        assert_eq!(
            files[0].file_name().unwrap().to_string_lossy(),
            "drawer_330x340_screws_baseplate_7x8.stl"
        );
    }

    #[test]
    fn test_spacer_config_reflects_options() {
        let options = DrawerOptions {
            tolerance_mm: 0.5,
            spacer_thickness_mm: 3.0,
            show_arrows: false,
            ..DrawerOptions::default()
        };
        let gen = DrawerGenerator::new(330.0, 340.0, x1c(), options).unwrap();
        let spacer = gen.spacer_config();
        assert_eq!(spacer.tolerance_mm, 0.5);
        assert_eq!(spacer.thickness_mm, 3.0);
        assert!(!spacer.show_arrows);
        // Untouched fields keep their defaults
        assert_eq!(spacer.align_tolerance_mm, 0.15);
        assert_eq!(spacer.min_margin_mm, 4.0);
    }
}
