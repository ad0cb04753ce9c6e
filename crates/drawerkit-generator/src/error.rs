//! Error types for the generator crate.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while assembling or materializing a solution.
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// Input validation failed.
    #[error(transparent)]
    Validation(#[from] drawerkit_core::CoreError),

    /// The split planner rejected its inputs.
    #[error(transparent)]
    Plan(#[from] drawerkit_planner::PlanError),

    /// The rendering collaborator failed to produce an artifact.
    #[error("render failed for {}: {reason}", path.display())]
    RenderFailed {
        /// The output path that could not be produced.
        path: PathBuf,
        /// The collaborator's failure description.
        reason: String,
    },

    /// I/O error while creating directories or writing files.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// JSON serialization error while writing the manifest.
    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type alias for generator operations.
pub type GeneratorResult<T> = Result<T, GeneratorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_failed_display() {
        let err = GeneratorError::RenderFailed {
            path: PathBuf::from("output/drawer_330x340_baseplate_7x8.stl"),
            reason: "kernel unavailable".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "render failed for output/drawer_330x340_baseplate_7x8.stl: kernel unavailable"
        );
    }

    #[test]
    fn test_validation_error_passes_through() {
        let core = drawerkit_core::CoreError::NonPositive {
            field: "tolerance".to_string(),
            value: -0.5,
        };
        let err: GeneratorError = core.into();
        assert_eq!(err.to_string(), "tolerance must be positive, got -0.5");
    }
}
