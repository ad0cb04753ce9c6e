//! Render contract and dispatch.
//!
//! The solid-modeling kernel is an external collaborator: this module
//! defines the trait it must implement and a [`ManifestRenderer`] that
//! records every dispatched artifact into a JSON manifest instead of
//! producing geometry.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::baseplate::BaseplateOptions;
use crate::error::GeneratorResult;
use crate::spacer::SpacerConfig;

/// Supported output file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileFormat {
    /// Solid mesh for slicing.
    Stl,
    /// Exchange assembly for CAD round-trips.
    Step,
    /// Vector outline.
    Svg,
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stl => write!(f, "stl"),
            Self::Step => write!(f, "step"),
            Self::Svg => write!(f, "svg"),
        }
    }
}

impl FromStr for FileFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "stl" => Ok(Self::Stl),
            "step" => Ok(Self::Step),
            "svg" => Ok(Self::Svg),
            _ => Err(format!("Unknown file format: {}", s)),
        }
    }
}

/// Spacer rendering modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// One half of the spacer set; print twice for a complete set.
    HalfSet,
    /// The complete spacer set.
    FullSet,
    /// Full assembly with baseplate reference.
    FullAssembly,
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HalfSet => write!(f, "half_set"),
            Self::FullSet => write!(f, "full_set"),
            Self::FullAssembly => write!(f, "full_assembly"),
        }
    }
}

impl FromStr for RenderMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "half_set" => Ok(Self::HalfSet),
            "full_set" => Ok(Self::FullSet),
            "full_assembly" => Ok(Self::FullAssembly),
            _ => Err(format!("Unknown render mode: {}", s)),
        }
    }
}

/// The rendering collaborator's contract.
///
/// Implementations materialize one artifact per call to the given path.
/// Each call is independent; a caller may dispatch pieces in any order.
/// A call either completes or returns an error synchronously.
pub trait SolidRenderer {
    /// Render one baseplate piece.
    fn render_baseplate(
        &mut self,
        units_wide: u32,
        units_deep: u32,
        options: &BaseplateOptions,
        path: &Path,
        format: FileFormat,
    ) -> GeneratorResult<()>;

    /// Render a spacer set in the given mode.
    fn render_spacer(
        &mut self,
        config: &SpacerConfig,
        mode: RenderMode,
        path: &Path,
        format: FileFormat,
    ) -> GeneratorResult<()>;
}

/// One artifact dispatched to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Artifact {
    /// A baseplate piece.
    Baseplate {
        /// Piece width in grid units.
        units_wide: u32,
        /// Piece depth in grid units.
        units_deep: u32,
        /// Feature options for the piece.
        options: BaseplateOptions,
    },
    /// A spacer set.
    Spacer {
        /// Spacer parameters.
        config: SpacerConfig,
        /// Rendering mode.
        mode: RenderMode,
    },
}

/// A recorded render dispatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderRecord {
    /// What was rendered.
    pub artifact: Artifact,
    /// Where the artifact was written.
    pub path: PathBuf,
    /// Output format.
    pub format: FileFormat,
}

/// A renderer that records dispatches instead of producing geometry.
///
/// Useful on its own to preview what a generation run would produce, and
/// as the default collaborator when no CAD kernel is wired in: the
/// recorded manifest is the input for an external modeling step.
#[derive(Debug, Clone, Default)]
pub struct ManifestRenderer {
    records: Vec<RenderRecord>,
}

impl ManifestRenderer {
    /// Create an empty manifest renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// All dispatches recorded so far, in dispatch order.
    pub fn records(&self) -> &[RenderRecord] {
        &self.records
    }

    /// Write the recorded dispatches to a JSON manifest file.
    pub fn write_manifest(&self, path: &Path) -> GeneratorResult<()> {
        let contents = serde_json::to_string_pretty(&self.records)?;
        fs::write(path, contents)?;
        Ok(())
    }
}

impl SolidRenderer for ManifestRenderer {
    fn render_baseplate(
        &mut self,
        units_wide: u32,
        units_deep: u32,
        options: &BaseplateOptions,
        path: &Path,
        format: FileFormat,
    ) -> GeneratorResult<()> {
        debug!(units_wide, units_deep, path = %path.display(), "recording baseplate render");
        self.records.push(RenderRecord {
            artifact: Artifact::Baseplate {
                units_wide,
                units_deep,
                options: options.clone(),
            },
            path: path.to_path_buf(),
            format,
        });
        Ok(())
    }

    fn render_spacer(
        &mut self,
        config: &SpacerConfig,
        mode: RenderMode,
        path: &Path,
        format: FileFormat,
    ) -> GeneratorResult<()> {
        debug!(%mode, path = %path.display(), "recording spacer render");
        self.records.push(RenderRecord {
            artifact: Artifact::Spacer {
                config: config.clone(),
                mode,
            },
            path: path.to_path_buf(),
            format,
        });
        Ok(())
    }
}

/// Create an output directory if it does not already exist.
///
/// A no-op when the directory is already present.
pub fn ensure_output_dir(path: &Path) -> GeneratorResult<()> {
    fs::create_dir_all(path)?;
    Ok(())
}
