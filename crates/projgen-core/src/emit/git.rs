//! Repository initialization
//!
//! Runs the system `git` in the generated project. A failing git is not
//! fatal: the project on disk is complete either way, so failures are
//! reported and generation still counts as a success.

use crate::config::prompt::warning;
use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

/// `git init`, and optionally `git add . && git commit`.
pub fn setup(root: &Path, make_commit: bool) -> Result<()> {
    run(root, &["init"])?;

    if make_commit {
        run(root, &["add", "."])?;
        run(root, &["commit", "-m", "Initial commit"])?;
    }

    Ok(())
}

fn run(root: &Path, args: &[&str]) -> Result<()> {
    let status = Command::new("git")
        .args(args)
        .current_dir(root)
        .status()
        .with_context(|| format!("failed to run `git {}`", args.join(" ")))?;

    if !status.success() {
        warning(&format!("`git {}` exited with {status}", args.join(" ")));
    }

    Ok(())
}
