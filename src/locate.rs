//! Locating the installer's own source tree
//!
//! The companion assets live next to the binary, but the binary is often
//! invoked through a symlink (e.g. one dropped into `~/.local/bin`). The
//! resolver walks the link chain back to the real file and takes its
//! directory as the source of truth.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{InstallError, Result};

/// Upper bound on link hops; a longer chain is treated as a cycle.
const MAX_LINK_HOPS: usize = 40;

/// Resolve the canonical directory containing the installer and its assets.
///
/// A relative invocation path is interpreted against `current_dir`. Each
/// symlink in the chain is dereferenced, with relative link targets resolved
/// against the directory of the link that holds them. The directory of the
/// final non-symlink path is canonicalized so the result is symlink-free.
pub fn resolve_source_dir(invoked_as: &Path, current_dir: &Path) -> Result<PathBuf> {
    let resolve_err = |path: &Path, e: std::io::Error| InstallError::SourceResolveFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    };

    let mut path = if invoked_as.is_absolute() {
        invoked_as.to_path_buf()
    } else {
        current_dir.join(invoked_as)
    };

    let mut hops = 0;
    loop {
        let meta = fs::symlink_metadata(&path).map_err(|e| resolve_err(&path, e))?;
        if !meta.file_type().is_symlink() {
            break;
        }

        hops += 1;
        if hops > MAX_LINK_HOPS {
            return Err(InstallError::LinkChainTooLong {
                path: invoked_as.display().to_string(),
                limit: MAX_LINK_HOPS,
            });
        }

        let target = fs::read_link(&path).map_err(|e| resolve_err(&path, e))?;
        path = if target.is_absolute() {
            target
        } else {
            match path.parent() {
                Some(link_dir) => link_dir.join(target),
                None => target,
            }
        };
    }

    let dir = path.parent().ok_or_else(|| InstallError::SourceResolveFailed {
        path: path.display().to_string(),
        reason: "resolved path has no containing directory".to_string(),
    })?;

    dunce::canonicalize(dir).map_err(|e| resolve_err(dir, e))
}
