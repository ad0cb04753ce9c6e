//! Drawer command for complete drawer solutions.

use std::path::PathBuf;

use clap::Args;

use drawerkit_core::parse_dimension;
use drawerkit_devicedb::{PrinterProfile, DEFAULT_PRINTER};
use drawerkit_generator::{DrawerGenerator, DrawerOptions, ManifestRenderer};

/// Generate a complete drawer solution with spacers and baseplate(s).
///
/// Dimensions accept millimeters ("330") or inches ("11.5in").
#[derive(Debug, Clone, Args)]
pub struct DrawerArgs {
    /// Drawer width (mm, or inches with an "in" suffix)
    pub width: String,

    /// Drawer depth (mm, or inches with an "in" suffix)
    pub depth: String,

    /// Printer preset (see `drawerkit printers`)
    #[arg(short, long, value_name = "PRESET", default_value = DEFAULT_PRINTER)]
    pub printer: String,

    /// Spacer tolerance in mm (suggested range 0.1-2.0)
    #[arg(short, long, value_name = "MM", default_value_t = 1.0)]
    pub tolerance: f64,

    /// Spacer thickness in mm
    #[arg(long, value_name = "MM", default_value_t = 5.0)]
    pub thickness: f64,

    /// Edge chamfer radius in mm
    #[arg(long, value_name = "MM", default_value_t = 1.0)]
    pub chamfer: f64,

    /// Add corner mounting screws to the baseplate
    #[arg(long)]
    pub corner_screws: bool,

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

impl DrawerArgs {
    /// Execute the drawer command
    pub fn execute(&self) -> anyhow::Result<()> {
        let width_mm = parse_dimension(&self.width)?;
        let depth_mm = parse_dimension(&self.depth)?;

        println!("Drawer dimensions: {:.1} x {:.1} mm", width_mm, depth_mm);

        let profile = PrinterProfile::from_preset(&self.printer)?;
        println!("Printer: {}", profile);

        let options = DrawerOptions {
            tolerance_mm: self.tolerance,
            corner_screws: self.corner_screws,
            spacer_thickness_mm: self.thickness,
            chamfer_mm: self.chamfer,
            show_arrows: !self.no_arrows,
            align_features: !self.no_align,
        };
        let gen = DrawerGenerator::new(width_mm, depth_mm, profile, options)?;

        let grid = drawerkit_core::GridSpec::default();
        println!(
            "Baseplate dimensions: {}x{} units ({}x{} mm)",
            gen.width_units(),
            gen.depth_units(),
            grid.physical_size(gen.width_units()),
            grid.physical_size(gen.depth_units()),
        );

        let layout = gen.layout()?;
        if layout.is_split {
            println!(
                "Baseplate will be split into {} pieces to fit printer constraints",
                layout.total_pieces
            );
        } else {
            println!("Baseplate fits on the printer in one piece");
        }

        println!("\nGenerating components...");
        let mut renderer = ManifestRenderer::new();
        let files = gen.save_all(&mut renderer, &self.output)?;

        let manifest_path = self.output.join("manifest.json");
        renderer.write_manifest(&manifest_path)?;

        println!("\nGeneration complete.");
        println!("\nGenerated files:");
        for path in files.spacers.iter().chain(files.baseplates.iter()) {
            if let Some(name) = path.file_name() {
                println!("  {}", name.to_string_lossy());
            }
        }

        for ((wide, deep), count) in layout.distinct_pieces() {
            if count > 1 {
                println!("\nPrint the {}x{} baseplate piece {} times", wide, deep, count);
            }
        }

        println!("\nRender manifest: {}", manifest_path.display());
        println!("Output directory: {}", self.output.display());

        Ok(())
    }
}
