//! CLI definitions using clap derive API
//!
//! The installer takes no flags or subcommands; a single invocation drives
//! an interactive session. clap still provides `--help`, `--version` and
//! rejection of stray arguments.

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};

/// Gemini companion installer for Claude Code
#[derive(Parser, Debug)]
#[command(
    name = "gemini-companion",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Install the Gemini MCP companion commands and agent for Claude Code",
    long_about = "Installs the slash command definitions and the Gemini analyst agent \
                  shipped alongside this binary into a Claude Code configuration tree, \
                  either for the current project (./.claude) or for all projects \
                  (~/.claude). The session is interactive; run it and pick a scope.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  gemini-companion\n    \
                  cd my-project && gemini-companion"
)]
pub struct Cli {}
