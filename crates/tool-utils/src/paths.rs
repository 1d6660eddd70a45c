//! Directory and file existence checks.

use std::{fs, path::Path};

use anyhow::{Context, Result, bail};

/// Create `dir` (and parents) if it does not already exist.
pub fn ensure_dir_exists(dir: &Path) -> Result<()> {
    if !dir.is_dir() {
        fs::create_dir_all(dir)
            .with_context(|| format!("could not create directory {}", dir.display()))?;
    }
    Ok(())
}

pub fn check_dir_exists(dir: &Path) -> Result<()> {
    if !dir.is_dir() {
        bail!("{} does not exist or is not a directory", dir.display());
    }
    Ok(())
}

pub fn check_file_exists(file: &Path) -> Result<()> {
    if !file.is_file() {
        bail!("{} does not exist or is not a file", file.display());
    }
    Ok(())
}
