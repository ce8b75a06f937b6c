use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Return `path` if nothing exists there, otherwise the first free
/// `stem-N.ext` sibling counting up from 1.
///
/// Existence is checked against the live filesystem for every candidate.
/// Nothing is reserved, so another process creating the same name between
/// this check and the rename can still win; the tool accepts that race
/// rather than locking the directory.
pub fn resolve_collision(path: &Path) -> PathBuf {
    if !occupied(path) {
        return path.to_path_buf();
    }

    (1u64..)
        .map(|i| path.with_file_name(numbered_name(path, i)))
        .find(|candidate| !occupied(candidate))
        .unwrap_or_else(|| path.to_path_buf())
}

// Built from the raw OS strings so non-UTF-8 stems and extensions survive.
fn numbered_name(path: &Path, counter: u64) -> OsString {
    let mut name = path.file_stem().map(ToOwned::to_owned).unwrap_or_default();
    name.push(format!("-{counter}"));
    if let Some(ext) = path.extension() {
        name.push(".");
        name.push(ext);
    }
    name
}

// Dangling symlinks count as occupied, `Path::exists` would miss them.
fn occupied(path: &Path) -> bool {
    path.symlink_metadata().is_ok()
}
