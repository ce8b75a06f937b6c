use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// A file seen during traversal, split into the parts the renamer works on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: PathBuf,
    /// Read lossily; the stem is slugified anyway
    pub stem: String,
    /// Lowercased extension without the dot; `None` when the name has none.
    /// Kept as raw OS bytes so non-UTF-8 extensions survive the rename.
    pub extension: Option<OsString>,
}

impl FileEntry {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let extension = path
            .extension()
            .filter(|e| !e.is_empty())
            .map(lowercase_extension);

        Self {
            path,
            stem,
            extension,
        }
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    pub fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }

    /// File name for `stem` carrying this entry's (lowercased) extension
    pub fn file_name_with_stem(&self, stem: &str) -> OsString {
        let mut name = OsString::from(stem);
        if let Some(ext) = &self.extension {
            name.push(".");
            name.push(ext);
        }
        name
    }
}

// Full Unicode lowercasing when the extension is UTF-8, ASCII-only otherwise.
fn lowercase_extension(ext: &OsStr) -> OsString {
    ext.to_str()
        .map_or_else(|| ext.to_ascii_lowercase(), |s| OsString::from(s.to_lowercase()))
}
