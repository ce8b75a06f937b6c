use crate::collision::resolve_collision;
use crate::entry::FileEntry;
use crate::error::{Result, SlugmvError};
use crate::options::RenameOptions;
use crate::output::{RenameRecord, RunSummary};
use crate::plan::plan_rename;
use crate::prefix::PrefixPattern;
use crate::walk::walk_files;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Receives each rename as soon as it happens
pub trait RenameReporter {
    fn report(&mut self, record: &RenameRecord) -> io::Result<()>;
}

impl<F> RenameReporter for F
where
    F: FnMut(&RenameRecord) -> io::Result<()>,
{
    fn report(&mut self, record: &RenameRecord) -> io::Result<()> {
        self(record)
    }
}

/// Writes one line per rename
pub struct WriterReporter<W: Write> {
    writer: W,
    use_color: bool,
}

impl<W: Write> WriterReporter<W> {
    pub fn new(writer: W, use_color: bool) -> Self {
        Self { writer, use_color }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RenameReporter for WriterReporter<W> {
    fn report(&mut self, record: &RenameRecord) -> io::Result<()> {
        writeln!(self.writer, "{}", record.format_line(self.use_color))?;
        self.writer.flush()
    }
}

/// Slugify every file name under `root`.
///
/// The whole listing is read before the first rename, so a file renamed
/// during the run is never seen again under its new name. Files are then
/// handled one at a time in traversal order. Each rename lands on disk before
/// the next file's collision check, so two files that slugify to the same
/// name end up as `name.ext` and `name-1.ext` instead of clobbering each
/// other. The first failing rename aborts the run and earlier renames stay in
/// place.
pub fn run<R>(root: &Path, options: &RenameOptions, reporter: &mut R) -> Result<RunSummary>
where
    R: RenameReporter + ?Sized,
{
    if !root.is_dir() {
        return Err(SlugmvError::InvalidPath {
            path: root.to_path_buf(),
        });
    }
    let prefix = PrefixPattern::new(&options.prefix_pattern)?;

    let paths = walk_files(root, options.recursive).collect::<Result<Vec<_>>>()?;

    let mut summary = RunSummary::new(root, options.dry_run);
    rename_paths(paths, &prefix, options, reporter, &mut summary)?;

    Ok(summary)
}

fn rename_paths<R>(
    paths: impl IntoIterator<Item = PathBuf>,
    prefix: &PrefixPattern,
    options: &RenameOptions,
    reporter: &mut R,
    summary: &mut RunSummary,
) -> Result<()>
where
    R: RenameReporter + ?Sized,
{
    for path in paths {
        let entry = FileEntry::new(path);
        let Some(plan) = plan_rename(&entry, prefix, &options.placeholder) else {
            continue;
        };

        let target = if is_case_only_change(&plan.from, &plan.to) {
            plan.to
        } else {
            resolve_collision(&plan.to)
        };

        if !options.dry_run {
            perform_rename(&plan.from, &target)?;
        }

        let record = RenameRecord {
            from: plan.from,
            to: target,
            applied: !options.dry_run,
        };
        reporter.report(&record).map_err(SlugmvError::Report)?;
        summary.records.push(record);
    }

    Ok(())
}

/// Only the case differs and, on a case-insensitive filesystem, the target
/// already resolves to the source itself.
fn is_case_only_change(from: &Path, to: &Path) -> bool {
    from != to
        && from.to_string_lossy().to_lowercase() == to.to_string_lossy().to_lowercase()
        && same_file(from, to)
}

#[cfg(unix)]
fn same_file(a: &Path, b: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;

    match (fs::metadata(a), fs::metadata(b)) {
        (Ok(a), Ok(b)) => a.dev() == b.dev() && a.ino() == b.ino(),
        _ => false,
    }
}

#[cfg(not(unix))]
fn same_file(_a: &Path, _b: &Path) -> bool {
    false
}

fn perform_rename(from: &Path, to: &Path) -> Result<()> {
    let rename_error = |source| SlugmvError::Rename {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    };

    if is_case_only_change(from, to) {
        // Two-step rename for case-only changes
        let temp_name =
            resolve_collision(&from.with_extension(format!("{}.slugmv.tmp", std::process::id())));
        fs::rename(from, &temp_name).map_err(rename_error)?;
        fs::rename(&temp_name, to).map_err(rename_error)?;
        // hard links to one file make the second rename a no-op
        if temp_name.symlink_metadata().is_ok() {
            fs::remove_file(&temp_name).map_err(rename_error)?;
        }
    } else {
        fs::rename(from, to).map_err(rename_error)?;
    }

    Ok(())
}
