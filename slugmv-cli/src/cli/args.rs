use clap::Parser;
use slugmv_core::{RenameOptions, DEFAULT_PLACEHOLDER, DEFAULT_PREFIX_PATTERN};
use std::path::PathBuf;

use super::types::OutputFormat;

/// Rename files into URL-friendly slugs, keeping their extensions
#[derive(Parser, Debug)]
#[command(name = "slugmv")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory containing the files to rename
    #[arg(short = 'p', long, value_name = "DIR")]
    pub path: PathBuf,

    /// Regex removed from the start of each name (case-insensitive). Use '' to disable
    #[arg(
        long,
        value_name = "REGEX",
        default_value = DEFAULT_PREFIX_PATTERN,
        allow_hyphen_values = true
    )]
    pub prefix_regex: String,

    /// Show what would be renamed without renaming anything
    #[arg(long)]
    pub dry_run: bool,

    /// Also rename files in subdirectories
    #[arg(short = 'r', long)]
    pub recursive: bool,

    /// Name used when nothing is left of a file name after slugifying
    #[arg(long, value_name = "STEM", default_value = DEFAULT_PLACEHOLDER)]
    pub placeholder: String,

    /// Output format
    #[arg(long, value_enum, default_value = "summary")]
    pub output: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    pub fn rename_options(&self) -> RenameOptions {
        RenameOptions {
            prefix_pattern: self.prefix_regex.clone(),
            dry_run: self.dry_run,
            recursive: self.recursive,
            placeholder: self.placeholder.clone(),
        }
    }
}
