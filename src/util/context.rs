//! Repository root discovery.

use std::path::{Path, PathBuf};

use git2::Repository;

/// Resolve the repository root for an invocation.
///
/// Walks up from `start` to the enclosing git working directory, so the
/// tool can be run from any subdirectory of the checkout. Outside a
/// repository the starting path is returned unchanged and later steps
/// report the missing repository themselves.
pub fn resolve_root(start: &Path) -> PathBuf {
    match Repository::discover(start) {
        Ok(repo) => repo
            .workdir()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| start.to_path_buf()),
        Err(_) => start.to_path_buf(),
    }
}
