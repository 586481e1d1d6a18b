//! Common test utilities for installer integration tests
//!
//! The installer resolves its asset tree from the path it was invoked
//! through, so the harness stages a fake release directory containing a copy
//! of the real binary next to a complete asset tree, plus separate fake
//! project and home directories.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Command files the installer requires; mirrors the shipped manifest.
pub const EXPECTED_COMMANDS: &[&str] = &[
    "gemini-analyze.md",
    "gemini-analyze-dirs.md",
    "gemini-analyze-all.md",
    "gemini-verify.md",
    "gemini-audit.md",
    "gemini-architecture.md",
];

/// Filename the agent definition must have after installation.
pub const AGENT_TARGET: &str = "gemini-analyst.md";

/// A staged installer run: release dir, fake project, fake home.
pub struct InstallFixture {
    #[allow(dead_code)]
    temp: TempDir,
    /// Release directory holding the binary copy and its assets
    pub source: PathBuf,
    /// Fake current working directory (Local scope root parent)
    pub project: PathBuf,
    /// Fake home directory (Global scope root parent)
    pub home: PathBuf,
    /// The binary copy inside `source`
    pub bin: PathBuf,
}

impl InstallFixture {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("failed to create temp directory");
        let source = temp.path().join("dist");
        let project = temp.path().join("project");
        let home = temp.path().join("home");

        let commands = source.join("commands");
        fs::create_dir_all(&commands).expect("failed to create commands dir");
        fs::create_dir_all(&project).expect("failed to create project dir");
        fs::create_dir_all(&home).expect("failed to create home dir");

        for name in EXPECTED_COMMANDS {
            fs::write(commands.join(name), format!("# {name}\n")).expect("failed to write command");
        }
        fs::write(source.join("agent.md"), "# agent definition\n").expect("failed to write agent");

        let bin = source.join("gemini-companion");
        fs::copy(env!("CARGO_BIN_EXE_gemini-companion"), &bin).expect("failed to stage binary");

        Self {
            temp,
            source,
            project,
            home,
            bin,
        }
    }

    /// Command invoking the staged binary directly.
    pub fn cmd(&self) -> Command {
        self.cmd_via(&self.bin)
    }

    /// Command invoking the installer through `program` (e.g. a symlink),
    /// with the fixture's project as cwd and home as $HOME.
    pub fn cmd_via(&self, program: &Path) -> Command {
        let mut cmd = Command::new(program);
        cmd.current_dir(&self.project);
        cmd.env("HOME", &self.home);
        cmd
    }

    /// Build a chain of `hops` symlinks ending at the staged binary and
    /// return the outermost link.
    #[cfg(unix)]
    pub fn link_chain(&self, hops: usize) -> PathBuf {
        use std::os::unix::fs::symlink;

        let links = self.temp.path().join("links");
        fs::create_dir_all(&links).expect("failed to create links dir");

        let mut target = self.bin.clone();
        for hop in 0..hops {
            let link = links.join(format!("hop-{hop}"));
            symlink(&target, &link).expect("failed to create symlink");
            target = link;
        }
        target
    }

    /// Delete an asset from the staged release directory.
    pub fn remove_asset(&self, relative: &str) {
        fs::remove_file(self.source.join(relative)).expect("failed to remove asset");
    }

    /// `.claude` root the Local scope installs into.
    pub fn local_claude(&self) -> PathBuf {
        self.project.join(".claude")
    }

    /// `.claude` root the Global scope installs into.
    pub fn global_claude(&self) -> PathBuf {
        self.home.join(".claude")
    }
}

/// All files under `root` as (relative path, content) pairs, sorted.
pub fn read_tree(root: &Path) -> Vec<(PathBuf, Vec<u8>)> {
    fn walk(root: &Path, dir: &Path, out: &mut Vec<(PathBuf, Vec<u8>)>) {
        for entry in fs::read_dir(dir).expect("failed to read dir") {
            let entry = entry.expect("failed to read dir entry");
            let path = entry.path();
            if path.is_dir() {
                walk(root, &path, out);
            } else {
                out.push((
                    path.strip_prefix(root).expect("entry outside root").to_path_buf(),
                    fs::read(&path).expect("failed to read file"),
                ));
            }
        }
    }

    let mut out = Vec::new();
    walk(root, root, &mut out);
    out.sort();
    out
}
