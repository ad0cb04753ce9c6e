//! Error types for the device database crate.

use std::io;

use thiserror::Error;

/// Errors that can occur during printer profile management.
#[derive(Error, Debug)]
pub enum DeviceError {
    /// The requested preset name is not a built-in preset.
    #[error("unknown printer preset '{name}', must be one of: {valid}")]
    UnknownPreset {
        /// The rejected preset name.
        name: String,
        /// Comma-separated list of valid preset names.
        valid: String,
    },

    /// The requested profile was not found.
    #[error("profile not found: {0}")]
    ProfileNotFound(String),

    /// A profile with this name already exists.
    #[error("profile already exists: {0}")]
    ProfileAlreadyExists(String),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// The profile's build volume failed validation.
    #[error(transparent)]
    Validation(#[from] drawerkit_core::CoreError),
}

/// Result type alias for device management operations.
pub type DeviceResult<T> = Result<T, DeviceError>;
