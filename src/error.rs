//! Error types and handling for the installer
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// A single asset that could not be copied into the destination tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyFailure {
    /// Destination path the copy was aimed at
    pub target: String,
    /// Underlying filesystem error
    pub reason: String,
}

impl std::fmt::Display for CopyFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.target, self.reason)
    }
}

/// Main error type for installer operations
#[derive(Error, Diagnostic, Debug)]
pub enum InstallError {
    // Source resolution errors
    #[error("Failed to resolve installer location from '{path}': {reason}")]
    #[diagnostic(
        code(companion::source::resolve_failed),
        help("Run the installer from its checkout, or through an intact chain of symlinks")
    )]
    SourceResolveFailed { path: String, reason: String },

    #[error("Symlink chain starting at '{path}' exceeds {limit} links")]
    #[diagnostic(
        code(companion::source::link_cycle),
        help("Check the symlinks pointing at the installer for a loop")
    )]
    LinkChainTooLong { path: String, limit: usize },

    // Manifest errors
    #[error("Source tree is missing {} required asset(s)", .missing.len())]
    #[diagnostic(
        code(companion::manifest::incomplete),
        help("Re-clone or re-download the companion release; no files were installed")
    )]
    ManifestIncomplete { missing: Vec<String> },

    // Scope selection errors
    #[error("Failed to read scope selection: {reason}")]
    #[diagnostic(code(companion::scope::prompt_failed))]
    PromptFailed { reason: String },

    #[error("Home directory could not be determined")]
    #[diagnostic(
        code(companion::scope::home_unavailable),
        help("Set the HOME environment variable, or install locally instead")
    )]
    HomeDirUnavailable,

    // Destination errors
    #[error("Failed to create directory: {path}")]
    #[diagnostic(code(companion::deploy::dir_create_failed))]
    DirCreateFailed { path: String, reason: String },

    #[error("{} asset(s) could not be copied", .failures.len())]
    #[diagnostic(
        code(companion::deploy::copy_failed),
        help("Fix the listed paths and re-run; files already copied are safe to overwrite")
    )]
    CopyFailed { failures: Vec<CopyFailure> },

    // File system errors
    #[error("IO error: {message}")]
    #[diagnostic(code(companion::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for InstallError {
    fn from(err: std::io::Error) -> Self {
        InstallError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, InstallError>;
