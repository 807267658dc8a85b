//! Inherited path resolution for rule documents.

use std::path::{Path, PathBuf};

/// Resolves `relative` against an ordered list of base directories.
///
/// The first directory that already holds the file wins. When none does, the
/// file belongs in the first directory. Absolute paths are returned as-is.
/// Returns `None` only for a relative path with no base directories.
pub fn inherited_path(base_dirs: &[PathBuf], relative: &Path) -> Option<PathBuf> {
    if relative.is_absolute() {
        return Some(relative.to_path_buf());
    }
    base_dirs
        .iter()
        .map(|dir| dir.join(relative))
        .find(|candidate| candidate.is_file())
        .or_else(|| base_dirs.first().map(|dir| dir.join(relative)))
}
