//! Finding the previously released copy of a font.

use std::path::{Path, PathBuf};

fn has_component(path: &Path, name: &str) -> bool {
    path.components().any(|c| c.as_os_str() == name)
}

/// Locate the released copy of `font_path` under `release_dir`.
///
/// When the input path runs through a `hinted` or `unhinted` directory, only
/// the matching release subdirectory is searched. Otherwise the release root
/// is tried first, then its `unhinted` subdirectory. Returns None when no
/// released copy exists.
pub fn release_font_path(font_path: &Path, release_dir: &Path) -> Option<PathBuf> {
    let name = font_path.file_name()?;

    let candidate = if has_component(font_path, "hinted") {
        release_dir.join("hinted").join(name)
    } else if has_component(font_path, "unhinted") {
        release_dir.join("unhinted").join(name)
    } else {
        let root = release_dir.join(name);
        if root.is_file() {
            return Some(root);
        }
        let fallback = release_dir.join("unhinted").join(name);
        return fallback.is_file().then_some(fallback);
    };

    candidate.is_file().then_some(candidate)
}
