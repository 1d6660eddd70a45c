//! Thin git and svn wrappers over a [`ProcessRunner`].

use std::path::Path;

use anyhow::{Result, bail};

use crate::process::ProcessRunner;

fn path_str(path: &Path) -> Result<&str> {
    match path.to_str() {
        Some(s) => Ok(s),
        None => bail!("path {} is not valid UTF-8", path.display()),
    }
}

/// The head commit's hash and short (YYYY-MM-DD) commit date.
pub fn git_head_commit(runner: &dyn ProcessRunner, repo: &Path) -> Result<(String, String)> {
    let output = runner.check_run(
        "git",
        &["-C", path_str(repo)?, "log", "-1", "--format=%H %cd", "--date=short"],
    )?;
    let line = output.stdout.trim();
    let Some((commit, date)) = line.split_once(' ') else {
        bail!("unexpected git log output {line:?}");
    };
    Ok((commit.to_string(), date.to_string()))
}

/// The checked-out branch name.
pub fn git_get_branch(runner: &dyn ProcessRunner, repo: &Path) -> Result<String> {
    let output =
        runner.check_run("git", &["-C", path_str(repo)?, "symbolic-ref", "--short", "HEAD"])?;
    Ok(output.stdout.trim().to_string())
}

/// Whether the work tree and index have no pending changes.
pub fn git_is_clean(runner: &dyn ProcessRunner, repo: &Path) -> Result<bool> {
    let repo = path_str(repo)?;
    runner.run("git", &["-C", repo, "update-index", "-q", "--refresh"])?;
    let files = runner.run("git", &["-C", repo, "diff-files", "--quiet"])?;
    let index = runner.run("git", &["-C", repo, "diff-index", "--quiet", "--cached", "HEAD"])?;
    Ok(files.success() && index.success())
}

/// Stage every change under the repo root.
pub fn git_add_all(runner: &dyn ProcessRunner, repo: &Path) -> Result<()> {
    runner.check_run("git", &["-C", path_str(repo)?, "add", "--all"])?;
    Ok(())
}

/// The last-changed revision of an svn working copy.
pub fn svn_get_version(runner: &dyn ProcessRunner, repo: &Path) -> Result<String> {
    let output = runner.check_run("svnversion", &["-c", path_str(repo)?])?;
    let version = output.stdout.trim();
    // "123:456" means a mixed revision; the upper bound is what matters
    let version = version.rsplit(':').next().unwrap_or(version);
    Ok(version.to_string())
}

pub fn svn_update(runner: &dyn ProcessRunner, repo: &Path) -> Result<()> {
    runner.check_run("svn", &["update", path_str(repo)?])?;
    Ok(())
}
