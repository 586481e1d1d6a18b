//! Copying the validated source tree into a destination scope
//!
//! Directory creation is idempotent and copies overwrite, so re-running the
//! installer always converges on the current source content. Failures are
//! collected per asset; files copied before a failure are left in place and
//! a later successful run overwrites them.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{CopyFailure, InstallError, Result};
use crate::manifest::Manifest;

/// Destination subdirectory receiving command assets
pub const COMMANDS_SUBDIR: &str = "commands";

/// Destination subdirectory receiving the agent definition
pub const AGENTS_SUBDIR: &str = "agents";

/// What a successful deployment produced.
#[derive(Debug)]
pub struct DeploySummary {
    /// Root of the populated destination tree
    pub destination: PathBuf,
    /// Every file written, relative to the destination root
    pub installed: Vec<PathBuf>,
}

/// Populate `dest_root` with every manifest asset from `source`.
pub fn deploy(source: &Path, manifest: &Manifest, dest_root: &Path) -> Result<DeploySummary> {
    let dest_commands = dest_root.join(COMMANDS_SUBDIR);
    let dest_agents = dest_root.join(AGENTS_SUBDIR);
    ensure_dir(&dest_commands)?;
    ensure_dir(&dest_agents)?;

    let mut installed = Vec::new();
    let mut failures = Vec::new();

    copy_command_assets(
        &source.join(manifest.commands_dir),
        &dest_commands,
        &mut installed,
        &mut failures,
    );

    let agent_target = dest_agents.join(manifest.agent_target);
    match fs::copy(source.join(manifest.agent_source), &agent_target) {
        Ok(_) => installed.push(
            PathBuf::from(AGENTS_SUBDIR).join(manifest.agent_target),
        ),
        Err(e) => failures.push(CopyFailure {
            target: agent_target.display().to_string(),
            reason: e.to_string(),
        }),
    }

    if failures.is_empty() {
        Ok(DeploySummary {
            destination: dest_root.to_path_buf(),
            installed,
        })
    } else {
        Err(InstallError::CopyFailed { failures })
    }
}

/// Create a destination directory; pre-existing directories are reused.
fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| InstallError::DirCreateFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Copy every file under `src_dir` into `dest_dir`, keeping relative layout.
fn copy_command_assets(
    src_dir: &Path,
    dest_dir: &Path,
    installed: &mut Vec<PathBuf>,
    failures: &mut Vec<CopyFailure>,
) {
    for entry in WalkDir::new(src_dir).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                failures.push(CopyFailure {
                    target: e
                        .path()
                        .unwrap_or(src_dir)
                        .display()
                        .to_string(),
                    reason: e.to_string(),
                });
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        // Walked entries always live under src_dir
        let Ok(relative) = entry.path().strip_prefix(src_dir) else {
            continue;
        };
        let target = dest_dir.join(relative);

        let copied = target
            .parent()
            .map_or(Ok(()), fs::create_dir_all)
            .and_then(|()| fs::copy(entry.path(), &target));

        match copied {
            Ok(_) => installed.push(PathBuf::from(COMMANDS_SUBDIR).join(relative)),
            Err(e) => failures.push(CopyFailure {
                target: target.display().to_string(),
                reason: e.to_string(),
            }),
        }
    }
}
