use serde::{Deserialize, Serialize};

/// Project-code style prefix stripped when no pattern is given
pub const DEFAULT_PREFIX_PATTERN: &str = r"^xxx-xx-x\s*";

/// Stem used when a name slugifies to nothing
pub const DEFAULT_PLACEHOLDER: &str = "untitled";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameOptions {
    /// Case-insensitive regex removed from the start of each stem (empty disables)
    #[serde(default = "default_prefix_pattern")]
    pub prefix_pattern: String,

    /// Report renames without touching the filesystem
    #[serde(default)]
    pub dry_run: bool,

    /// Descend into subdirectories
    #[serde(default)]
    pub recursive: bool,

    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

impl Default for RenameOptions {
    fn default() -> Self {
        Self {
            prefix_pattern: default_prefix_pattern(),
            dry_run: false,
            recursive: false,
            placeholder: default_placeholder(),
        }
    }
}

fn default_prefix_pattern() -> String {
    DEFAULT_PREFIX_PATTERN.to_string()
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}
