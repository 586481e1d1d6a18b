//! Installation scope and the interactive scope prompt
//!
//! The prompt is a plain line-oriented loop over any `BufRead`/`Write` pair,
//! so tests drive it with a scripted input buffer instead of a terminal.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use console::Style;

use crate::context::RunContext;
use crate::error::{InstallError, Result};

/// Destination directory name under the chosen root
pub const CLAUDE_DIR: &str = ".claude";

/// Where the companion assets land.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallScope {
    /// Under the current working directory (`./.claude`)
    Local,
    /// Under the operator's home directory (`~/.claude`)
    Global,
}

impl InstallScope {
    /// Destination root for this scope.
    pub fn root(self, ctx: &RunContext) -> Result<PathBuf> {
        match self {
            InstallScope::Local => Ok(ctx.current_dir.join(CLAUDE_DIR)),
            InstallScope::Global => ctx
                .home_dir
                .as_ref()
                .map(|home| home.join(CLAUDE_DIR))
                .ok_or(InstallError::HomeDirUnavailable),
        }
    }
}

/// Outcome of the scope prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Install(InstallScope),
    Cancelled,
}

/// Prompt until one of the three tokens is entered.
///
/// `1` installs locally, `2` globally, `3` cancels. Anything else warns and
/// re-prompts. End of input counts as cancellation; nothing has been written
/// to the filesystem at this point.
pub fn select_scope(input: &mut impl BufRead, output: &mut impl Write) -> Result<Selection> {
    let read_err = |e: std::io::Error| InstallError::PromptFailed {
        reason: e.to_string(),
    };

    loop {
        write_menu(output).map_err(read_err)?;

        let mut line = String::new();
        let bytes = input.read_line(&mut line).map_err(read_err)?;
        if bytes == 0 {
            return Ok(Selection::Cancelled);
        }

        match line.trim() {
            "1" => return Ok(Selection::Install(InstallScope::Local)),
            "2" => return Ok(Selection::Install(InstallScope::Global)),
            "3" => return Ok(Selection::Cancelled),
            other => {
                writeln!(
                    output,
                    "{}",
                    Style::new()
                        .yellow()
                        .apply_to(format!("Unrecognized choice '{other}', enter 1, 2 or 3."))
                )
                .map_err(read_err)?;
            }
        }
    }
}

fn write_menu(output: &mut impl Write) -> std::io::Result<()> {
    writeln!(output)?;
    writeln!(output, "{}", Style::new().bold().apply_to("Where should the companion be installed?"))?;
    writeln!(output, "  1) This project  ({CLAUDE_DIR}/)")?;
    writeln!(output, "  2) All projects  (~/{CLAUDE_DIR}/)")?;
    writeln!(output, "  3) Cancel")?;
    write!(output, "{} ", Style::new().bold().apply_to("Choice [1-3]:"))?;
    output.flush()
}
