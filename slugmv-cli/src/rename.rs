use anyhow::{Context, Result};
use slugmv_core::{run, OutputFormatter, RenameOptions, RenameRecord, WriterReporter};
use std::io;
use std::path::Path;

use crate::OutputFormat;

pub fn handle_rename(
    path: &Path,
    options: &RenameOptions,
    output: OutputFormat,
    use_color: bool,
) -> Result<()> {
    let context = || format!("Failed to rename files in {}", path.display());

    match output {
        OutputFormat::Summary => {
            // lines are written as each file is renamed, not at the end
            let mut reporter = WriterReporter::new(io::stdout().lock(), use_color);
            run(path, options, &mut reporter).with_context(context)?;
        },
        OutputFormat::Json => {
            let mut collect_only = |_: &RenameRecord| -> io::Result<()> { Ok(()) };
            let summary = run(path, options, &mut collect_only).with_context(context)?;
            println!("{}", summary.format(output.into()));
        },
    }

    Ok(())
}
