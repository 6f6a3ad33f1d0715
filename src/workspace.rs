//! Workspace root resolution.
//!
//! The first workspace root folder is either given explicitly (`--root`) or
//! auto-detected by walking up from the current directory to the nearest
//! directory containing a `.git` entry.

use std::path::{Path, PathBuf};

/// Resolve the first workspace root folder, if any.
pub fn find_root(root_override: Option<&Path>) -> Option<PathBuf> {
    if let Some(root) = root_override {
        return root.is_dir().then(|| root.to_path_buf());
    }
    let cwd = std::env::current_dir().ok()?;
    find_root_from(&cwd)
}

/// Walk up from `start` looking for a directory that contains `.git`.
pub fn find_root_from(start: &Path) -> Option<PathBuf> {
    let mut dir = start;
    loop {
        if dir.join(".git").exists() {
            return Some(dir.to_path_buf());
        }
        dir = dir.parent()?;
    }
}
