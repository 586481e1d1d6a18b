//! Process environment resolved once at startup
//!
//! The installer never reads the current directory or home directory ad hoc;
//! everything downstream receives this context as a parameter.

use std::env;
use std::path::PathBuf;

use crate::error::{InstallError, Result};

/// Ambient process state captured at startup.
#[derive(Debug, Clone)]
pub struct RunContext {
    /// The path this process was invoked through (argv[0]), possibly a symlink
    pub invoked_as: PathBuf,
    /// Current working directory
    pub current_dir: PathBuf,
    /// Operator home directory, if one can be determined
    pub home_dir: Option<PathBuf>,
}

impl RunContext {
    /// Capture argv[0], the working directory, and the home directory.
    pub fn from_env() -> Result<Self> {
        let invoked_as = env::args_os()
            .next()
            .map(PathBuf::from)
            .ok_or_else(|| InstallError::SourceResolveFailed {
                path: String::new(),
                reason: "process has no argv[0]".to_string(),
            })?;

        let current_dir = env::current_dir().map_err(|e| InstallError::SourceResolveFailed {
            path: invoked_as.display().to_string(),
            reason: format!("cannot determine working directory: {e}"),
        })?;

        Ok(Self {
            invoked_as,
            current_dir,
            home_dir: dirs::home_dir(),
        })
    }
}
