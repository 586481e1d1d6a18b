//! The fixed set of assets every companion release ships
//!
//! Validation is exhaustive on purpose: the operator gets the complete list
//! of gaps in one pass, and the deployer only ever runs against a source
//! tree known to be whole.

use std::path::Path;

use crate::error::{InstallError, Result};

/// Source directory holding the slash command definitions
pub const COMMANDS_DIR: &str = "commands";

/// Command files every release ships; each is individually required
pub const EXPECTED_COMMANDS: &[&str] = &[
    "gemini-analyze.md",
    "gemini-analyze-dirs.md",
    "gemini-analyze-all.md",
    "gemini-verify.md",
    "gemini-audit.md",
    "gemini-architecture.md",
];

/// Agent definition filename as shipped in the source tree
pub const AGENT_SOURCE: &str = "agent.md";

/// Filename Claude Code expects for the installed agent definition
pub const AGENT_TARGET: &str = "gemini-analyst.md";

/// Declarative list of required source assets.
#[derive(Debug, Clone, Copy)]
pub struct Manifest {
    /// Relative directory of command assets; any file under it is deployed
    pub commands_dir: &'static str,
    /// Named command files that must each be present
    pub commands: &'static [&'static str],
    /// Agent definition as named in the source tree
    pub agent_source: &'static str,
    /// Agent definition as named at the destination
    pub agent_target: &'static str,
}

/// The manifest this binary was built with.
pub const SHIPPED: Manifest = Manifest {
    commands_dir: COMMANDS_DIR,
    commands: EXPECTED_COMMANDS,
    agent_source: AGENT_SOURCE,
    agent_target: AGENT_TARGET,
};

impl Manifest {
    /// Collect every manifest entry absent under `source`.
    ///
    /// Does not stop at the first gap; the returned list is the complete
    /// set of missing relative paths.
    pub fn missing_assets(&self, source: &Path) -> Vec<String> {
        let mut missing = Vec::new();

        let commands_dir = source.join(self.commands_dir);
        if !commands_dir.is_dir() {
            missing.push(format!("{}/", self.commands_dir));
        }

        for name in self.commands {
            if !commands_dir.join(name).is_file() {
                missing.push(format!("{}/{}", self.commands_dir, name));
            }
        }

        if !source.join(self.agent_source).is_file() {
            missing.push(self.agent_source.to_string());
        }

        missing
    }

    /// Verify every entry exists, or fail with the full list of gaps.
    pub fn validate(&self, source: &Path) -> Result<()> {
        let missing = self.missing_assets(source);
        if missing.is_empty() {
            Ok(())
        } else {
            Err(InstallError::ManifestIncomplete { missing })
        }
    }
}
