//! # DrawerKit
//!
//! Plan and generate Gridfinity storage solutions for custom drawers:
//! fitted edge spacers plus baseplates split to fit a printer's build
//! volume.
//!
//! ## Architecture
//!
//! DrawerKit is organized as a workspace with multiple crates:
//!
//! 1. **drawerkit-core** - Constants, unit conversion, validation
//! 2. **drawerkit-planner** - Baseplate splitting and 2D layout planning
//! 3. **drawerkit-devicedb** - Printer presets and custom profiles
//! 4. **drawerkit-generator** - Solution assembly, naming, render dispatch
//! 5. **drawerkit** - Main binary with the command-line interface

pub mod cli;

pub use drawerkit_core::{
    parse_dimension, validate_drawer_dimensions, validate_tolerance, CoreError, CoreResult,
    GridSpec, LengthUnit,
};

pub use drawerkit_planner::{plan_axis, plan_grid, PlanError, PlateLayout, PlatePiece};

pub use drawerkit_devicedb::{PrinterManager, PrinterProfile, DEFAULT_PRINTER, PRINTER_PRESETS};

pub use drawerkit_generator::{
    BaseplateOptions, DrawerGenerator, DrawerOptions, DrawerSolution, FileFormat,
    GeneratorError, ManifestRenderer, RenderMode, SolidRenderer, SpacerConfig,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with console output and RUST_LOG
/// environment variable support.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
