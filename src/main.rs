//! Gemini companion installer
//!
//! Deploys the slash command definitions and the Gemini analyst agent shipped
//! alongside this binary into a Claude Code configuration tree, locally
//! (./.claude) or globally (~/.claude).

use std::io;

use clap::Parser;

mod cli;
mod context;
mod deploy;
mod error;
mod locate;
mod manifest;
mod scope;
mod ui;

use cli::Cli;
use context::RunContext;
use error::{InstallError, Result};
use scope::Selection;

enum Outcome {
    Installed,
    Cancelled,
}

fn main() {
    let _cli = Cli::parse();

    match run() {
        Ok(Outcome::Installed | Outcome::Cancelled) => {}
        Err(e) => {
            report_failure(&e);
            std::process::exit(1);
        }
    }
}

/// Resolve, validate, prompt, deploy. Strictly in that order; each phase
/// only runs once its predecessor has succeeded.
fn run() -> Result<Outcome> {
    let ctx = RunContext::from_env()?;

    ui::heading("Gemini MCP companion installer");

    let source = locate::resolve_source_dir(&ctx.invoked_as, &ctx.current_dir)?;
    ui::step(&format!("Source: {}", source.display()));

    manifest::SHIPPED.validate(&source)?;
    ui::success("All shipped assets present");

    let selection = {
        let stdin = io::stdin();
        scope::select_scope(&mut stdin.lock(), &mut io::stdout())?
    };
    let scope = match selection {
        Selection::Install(scope) => scope,
        Selection::Cancelled => {
            ui::step("Installation cancelled; nothing was written.");
            return Ok(Outcome::Cancelled);
        }
    };

    let dest_root = scope.root(&ctx)?;
    ui::step(&format!("Installing to {}", dest_root.display()));

    let summary = deploy::deploy(&source, &manifest::SHIPPED, &dest_root)?;
    for file in &summary.installed {
        ui::detail(&file.display().to_string());
    }
    ui::success(&format!(
        "Installed {} file(s) under {}",
        summary.installed.len(),
        summary.destination.display()
    ));
    ui::step("Restart Claude Code to pick up the new commands and agent.");

    Ok(Outcome::Installed)
}

/// Render a fatal error, itemizing per-asset lists where the error carries
/// them, so the operator sees the whole gap in one pass.
fn report_failure(error: &InstallError) {
    eprintln!("Error: {error}");
    match error {
        InstallError::ManifestIncomplete { missing } => {
            for path in missing {
                ui::failure(path);
            }
        }
        InstallError::CopyFailed { failures } => {
            for copy in failures {
                ui::failure(&copy.to_string());
            }
        }
        _ => {}
    }
}
