use crate::error::{Result, SlugmvError};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lazily enumerate the files under `root`.
///
/// Flat mode yields only direct children. Entries come back in the order the
/// filesystem lists them and every call scans again from scratch. Directories
/// are read while iterating, so collect the paths before renaming any of them.
pub fn walk_files(root: &Path, recursive: bool) -> impl Iterator<Item = Result<PathBuf>> {
    let mut walker = WalkDir::new(root).min_depth(1);
    if !recursive {
        walker = walker.max_depth(1);
    }

    walker.into_iter().filter_map(|entry| match entry {
        Ok(entry) => {
            // `Path::is_file` follows symlinks, so links to files are candidates too
            let path = entry.into_path();
            path.is_file().then_some(Ok(path))
        },
        Err(e) => Some(Err(SlugmvError::from(e))),
    })
}
