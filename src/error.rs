//! Error types for packlist operations.
//!
//! This module defines [`PacklistError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `PacklistError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `PacklistError::Other`) for unexpected errors
//! - Probe failures during `check` are recovered locally and never surface
//!   here; only fatal conditions (missing input, unreadable YAML) do

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for packlist operations.
#[derive(Debug, Error)]
pub enum PacklistError {
    /// Conda environment file not found at the expected location.
    #[error("Environment file not found: {path}")]
    EnvFileNotFound { path: PathBuf },

    /// Failed to parse the conda environment file.
    #[error("Failed to parse environment file at {path}: {message}")]
    EnvParseError { path: PathBuf, message: String },

    /// The Python interpreter could not be launched for a probe.
    #[error("Failed to launch {interpreter}: {message}")]
    ProbeLaunch {
        interpreter: PathBuf,
        message: String,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for packlist operations.
pub type Result<T> = std::result::Result<T, PacklistError>;
