//! # DrawerKit Generator
//!
//! Turns a drawer's dimensions and a printer profile into a complete,
//! immutable solution record — unit counts, a (possibly split) plate
//! layout, spacer and baseplate parameters — and drives an injected
//! renderer once per piece to materialize output files with
//! deterministic, collision-free names.
//!
//! The solid-modeling kernel itself is an external collaborator behind
//! the [`SolidRenderer`] trait; this crate ships [`ManifestRenderer`],
//! which records every dispatched artifact into a JSON manifest.

pub mod baseplate;
pub mod error;
pub mod naming;
pub mod render;
pub mod solution;
pub mod spacer;

pub use baseplate::BaseplateOptions;
pub use error::{GeneratorError, GeneratorResult};
pub use naming::{assembly_filename, baseplate_filename, output_path, spacer_filename};
pub use render::{
    ensure_output_dir, Artifact, FileFormat, ManifestRenderer, RenderMode, RenderRecord,
    SolidRenderer,
};
pub use solution::{DrawerGenerator, DrawerOptions, DrawerSolution, GeneratedFiles};
pub use spacer::SpacerConfig;
