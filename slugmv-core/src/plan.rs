use crate::entry::FileEntry;
use crate::prefix::PrefixPattern;
use crate::slug::slugify;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where a file would move to, before collisions are resolved.
///
/// `to` always sits in the same directory as `from` and carries the
/// lowercased extension of `from`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenamePlan {
    pub from: PathBuf,
    pub to: PathBuf,
}

/// Compute the slugged name for `entry`, or `None` if it is already in shape.
///
/// The prefix is stripped from the raw stem, then the remainder is slugified.
/// A stem that slugifies to nothing takes `placeholder` instead so the result
/// never degrades into a bare `.ext` dotfile.
pub fn plan_rename(
    entry: &FileEntry,
    prefix: &PrefixPattern,
    placeholder: &str,
) -> Option<RenamePlan> {
    let stripped = prefix.strip(&entry.stem);
    let mut stem = slugify(&stripped);
    if stem.is_empty() {
        stem = slugify(placeholder);
    }
    if stem.is_empty() && entry.extension.is_none() {
        // nothing usable to name the file with
        return None;
    }

    let to = entry.dir().join(entry.file_name_with_stem(&stem));
    if to == entry.path {
        return None;
    }

    Some(RenamePlan {
        from: entry.path.clone(),
        to,
    })
}
