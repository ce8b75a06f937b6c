#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod collision;
pub mod entry;
pub mod error;
pub mod options;
pub mod output;
pub mod plan;
pub mod prefix;
pub mod rename;
pub mod slug;
pub mod walk;

pub use collision::resolve_collision;
pub use entry::FileEntry;
pub use error::{Result, SlugmvError};
pub use options::{RenameOptions, DEFAULT_PLACEHOLDER, DEFAULT_PREFIX_PATTERN};
pub use output::{OutputFormat, OutputFormatter, RenameRecord, RunSummary};
pub use plan::{plan_rename, RenamePlan};
pub use prefix::PrefixPattern;
pub use rename::{run, RenameReporter, WriterReporter};
pub use slug::slugify;
pub use walk::walk_files;
