use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow build systems and CI pipelines to distinguish
/// between different types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the manifest was generated or validated cleanly
    Success = 0,
    /// The external engine reported a generation or validation failure
    EngineFailure = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (malformed request, missing path, I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::EngineFailure => write!(f, "Engine Failure (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for the SBOM build task.
///
/// Every request-construction failure is raised before any destructive
/// filesystem work or engine invocation, so a malformed request never
/// produces a partial manifest.
#[derive(Debug, Error)]
pub enum SbomTaskError {
    #[error("Required argument '{name}' is missing or empty.\n\n💡 Hint: Supply a non-empty value for '{name}'")]
    RequiredArgumentMissing { name: &'static str },

    #[error("Invalid namespace base URI: {value}\nDetails: {details}\n\n💡 Hint: The base URI must be absolute, e.g. \"https://sbom.example.org\"")]
    InvalidBaseUri { value: String, details: String },

    #[error("Invalid namespace unique part: {value}\n\n💡 Hint: The unique part must be a GUID, e.g. \"550e8400-e29b-41d4-a716-446655440000\"")]
    InvalidUniquePart { value: String },

    #[error("Invalid manifest specification: {value}\n\n💡 Hint: Use the form \"Name:Version\", e.g. \"SPDX:2.2\"")]
    InvalidSpecification { value: String },

    #[error("Path for '{name}' must be absolute: {path}")]
    PathNotAbsolute { name: &'static str, path: PathBuf },

    #[error("Build drop path not found or not a directory: {path}\n\n💡 Hint: Point --build-drop-path at the built artifact directory")]
    BuildDropPathNotFound { path: PathBuf },

    #[error("Build component path not found: {path}")]
    BuildComponentPathNotFound { path: PathBuf },

    #[error("External document list file not found: {path}")]
    ExternalDocumentListFileNotFound { path: PathBuf },

    #[error("Manifest directory path not found: {path}\n\n💡 Hint: --manifest-dir-path must point at an existing directory")]
    ManifestDirPathNotFound { path: PathBuf },

    #[error("Failed to remove previous manifest output: {path}\nDetails: {details}")]
    ManifestCleanupFailed { path: PathBuf, details: String },

    #[error("SBOM generation failed:\n{details}")]
    GenerationFailed { details: String },

    #[error("SBOM validation failed:\n{details}")]
    ValidationFailed { details: String },
}

impl SbomTaskError {
    /// Maps this error to the exit code reported by the binary.
    ///
    /// Engine-reported failures are distinguished from request-construction
    /// and I/O failures so CI can tell them apart.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            SbomTaskError::GenerationFailed { .. } | SbomTaskError::ValidationFailed { .. } => {
                ExitCode::EngineFailure
            }
            _ => ExitCode::ApplicationError,
        }
    }
}
