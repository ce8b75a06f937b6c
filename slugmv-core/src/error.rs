use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SlugmvError>;

#[derive(Debug, Error)]
pub enum SlugmvError {
    /// The root is missing or is not a directory
    #[error("invalid path: {} is not an existing directory", path.display())]
    InvalidPath { path: PathBuf },

    #[error("invalid prefix pattern '{pattern}'")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("failed to read directory entry")]
    Traversal(#[from] walkdir::Error),

    #[error("failed to rename {} to {}", from.display(), to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write report")]
    Report(#[source] io::Error),
}

impl SlugmvError {
    /// Errors caused by what the user passed in, raised before anything is renamed
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidPath { .. } | Self::InvalidPattern { .. })
    }
}
