//! Baseplate command for standalone baseplate generation.

use std::path::PathBuf;

use anyhow::anyhow;
use clap::Args;

use drawerkit_core::{validate_baseplate_units, GridSpec};
use drawerkit_generator::{
    baseplate_filename, ensure_output_dir, output_path, BaseplateOptions, FileFormat,
    ManifestRenderer, SolidRenderer,
};

/// Generate a Gridfinity baseplate with specified dimensions.
///
/// Units are grid units: 1 unit = 42mm.
#[derive(Debug, Clone, Args)]
pub struct BaseplateArgs {
    /// Baseplate width in grid units
    pub width: u32,

    /// Baseplate depth in grid units
    pub depth: u32,

    /// Output file format: stl, step, or svg
    #[arg(short, long, value_name = "FORMAT", default_value = "stl")]
    pub format: String,

    /// Add corner mounting screws
    #[arg(long)]
    pub corner_screws: bool,

    /// Output directory
    #[arg(short, long, value_name = "DIR", default_value = "output")]
    pub output: PathBuf,
}

impl BaseplateArgs {
    /// Execute the baseplate command
    pub fn execute(&self) -> anyhow::Result<()> {
        validate_baseplate_units(self.width, self.depth)?;
        let format: FileFormat = self.format.parse().map_err(|e: String| anyhow!(e))?;

        let grid = GridSpec::default();
        println!(
            "Baseplate dimensions: {}x{} units ({}x{} mm)",
            self.width,
            self.depth,
            grid.physical_size(self.width),
            grid.physical_size(self.depth),
        );

        ensure_output_dir(&self.output)?;

        let options = if self.corner_screws {
            BaseplateOptions::with_corner_screws()
        } else {
            BaseplateOptions::default()
        };
        let filename = baseplate_filename(
            grid.physical_size(self.width),
            grid.physical_size(self.depth),
            self.width,
            self.depth,
            options.corner_screws,
            format,
        );
        let path = output_path(&filename, &self.output);

        println!("Generating baseplate ({})...", format);
        let mut renderer = ManifestRenderer::new();
        renderer.render_baseplate(self.width, self.depth, &options, &path, format)?;
        renderer.write_manifest(&self.output.join("manifest.json"))?;

        println!("Generation complete.");
        println!("  {}", filename);
        println!("Output directory: {}", self.output.display());

        Ok(())
    }
}
