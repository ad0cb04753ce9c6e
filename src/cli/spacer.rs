//! Spacer command for standalone spacer generation.

use std::path::PathBuf;

use anyhow::anyhow;
use clap::Args;

use drawerkit_core::{parse_dimension, validate_tolerance};
use drawerkit_generator::{
    assembly_filename, ensure_output_dir, output_path, spacer_filename, FileFormat,
    ManifestRenderer, RenderMode, SolidRenderer, SpacerConfig,
};

/// Generate drawer spacer components.
///
/// Spacers divide the margin between the grid and the drawer walls into
/// fitted pieces.
#[derive(Debug, Clone, Args)]
pub struct SpacerArgs {
    /// Drawer width (mm, or inches with an "in" suffix)
    pub width: String,

    /// Drawer depth (mm, or inches with an "in" suffix)
    pub depth: String,

    /// Render mode: half_set, full_set, or full_assembly
    #[arg(short, long, value_name = "MODE", default_value = "half_set")]
    pub mode: String,

    /// Output file format: stl or step
    #[arg(short, long, value_name = "FORMAT", default_value = "stl")]
    pub format: String,

    /// Spacer tolerance in mm (suggested range 0.1-2.0)
    #[arg(short, long, value_name = "MM", default_value_t = 1.0)]
    pub tolerance: f64,

    /// Spacer thickness in mm
    #[arg(long, value_name = "MM", default_value_t = 5.0)]
    pub thickness: f64,

    /// Edge chamfer radius in mm
    #[arg(long, value_name = "MM", default_value_t = 1.0)]
    pub chamfer: f64,

    /// Disable orientation arrows on spacers
    #[arg(long)]
    pub no_arrows: bool,

    /// Disable jigsaw interlocking features
    #[arg(long)]
    pub no_align: bool,

    /// Output directory
    #[arg(short, long, value_name = "DIR", default_value = "output")]
    pub output: PathBuf,
}

impl SpacerArgs {
    /// Execute the spacer command
    pub fn execute(&self) -> anyhow::Result<()> {
        let width_mm = parse_dimension(&self.width)?;
        let depth_mm = parse_dimension(&self.depth)?;
        validate_tolerance(self.tolerance)?;

        let mode: RenderMode = self.mode.parse().map_err(|e: String| anyhow!(e))?;
        let format: FileFormat = self.format.parse().map_err(|e: String| anyhow!(e))?;

        println!("Spacer dimensions: {:.1} x {:.1} mm", width_mm, depth_mm);

        let config = SpacerConfig {
            thickness_mm: self.thickness,
            tolerance_mm: self.tolerance,
            chamfer_mm: self.chamfer,
            show_arrows: !self.no_arrows,
            align_features: !self.no_align,
            ..SpacerConfig::for_drawer(width_mm, depth_mm)
        };

        ensure_output_dir(&self.output)?;

        println!("Generating spacer ({}, {})...", mode, format);
        // STL output names carry the render mode; STEP output is the
        // assembly name.
        let filename = match format {
            FileFormat::Step => assembly_filename(width_mm, depth_mm, self.tolerance, format),
            _ => spacer_filename(width_mm, depth_mm, self.tolerance, mode, format),
        };
        let path = output_path(&filename, &self.output);

        let mut renderer = ManifestRenderer::new();
        renderer.render_spacer(&config, mode, &path, format)?;
        renderer.write_manifest(&self.output.join("manifest.json"))?;

        println!("Generation complete.");
        println!("  {}", filename);
        if mode == RenderMode::HalfSet {
            println!("Print this file twice to create a complete set");
        }
        println!("Output directory: {}", self.output.display());

        Ok(())
    }
}
