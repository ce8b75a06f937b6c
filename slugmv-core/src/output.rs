use nu_ansi_term::Color;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt::Write;
use std::path::{Path, PathBuf};

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
}

const DRY_RUN_TAG: &str = "[DRY-RUN]";

/// One file that was renamed, or would be in a dry run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameRecord {
    pub from: PathBuf,
    pub to: PathBuf,
    /// False when the rename was only reported
    pub applied: bool,
}

impl RenameRecord {
    pub fn old_name(&self) -> String {
        file_name(&self.from)
    }

    pub fn new_name(&self) -> String {
        file_name(&self.to)
    }

    /// `<old-name> -> <new-name>`, tagged when nothing was touched
    pub fn format_line(&self, use_color: bool) -> String {
        let mapping = format!("{} -> {}", self.old_name(), self.new_name());
        if self.applied {
            mapping
        } else if use_color {
            format!("{} {}", Color::Yellow.bold().paint(DRY_RUN_TAG), mapping)
        } else {
            format!("{DRY_RUN_TAG} {mapping}")
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Result of one pass over a directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub root: PathBuf,
    pub dry_run: bool,
    pub records: Vec<RenameRecord>,
}

impl RunSummary {
    pub fn new(root: impl Into<PathBuf>, dry_run: bool) -> Self {
        Self {
            root: root.into(),
            dry_run,
            records: Vec::new(),
        }
    }

    pub fn renamed(&self) -> usize {
        self.records.iter().filter(|r| r.applied).count()
    }
}

/// Trait for formatting output in different formats
pub trait OutputFormatter {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }
    fn format_json(&self) -> String;
    fn format_summary(&self) -> String;
}

impl OutputFormatter for RunSummary {
    fn format_json(&self) -> String {
        // Paths go out lossily: serde refuses non-UTF-8 paths, JSON has no bytes
        let renames: Vec<_> = self
            .records
            .iter()
            .map(|r| {
                json!({
                    "from": r.from.to_string_lossy(),
                    "to": r.to.to_string_lossy(),
                    "applied": r.applied,
                })
            })
            .collect();

        serde_json::to_string(&json!({
            "success": true,
            "operation": "rename",
            "root": self.root.to_string_lossy(),
            "dry_run": self.dry_run,
            "summary": {
                "planned": self.records.len(),
                "renamed": self.renamed(),
            },
            "renames": renames,
        }))
        .expect("a JSON value of strings, bools and numbers always serializes")
    }

    fn format_summary(&self) -> String {
        let mut output = String::new();
        for record in &self.records {
            writeln!(output, "{}", record.format_line(false)).unwrap();
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn record(applied: bool) -> RenameRecord {
        RenameRecord {
            from: PathBuf::from("docs/PROJ-01 Café com Leite!!.PDF"),
            to: PathBuf::from("docs/cafe-com-leite.pdf"),
            applied,
        }
    }

    #[test]
    fn test_line_uses_file_names_only() {
        assert_eq!(
            record(true).format_line(false),
            "PROJ-01 Café com Leite!!.PDF -> cafe-com-leite.pdf"
        );
    }

    #[test]
    fn test_dry_run_line_is_tagged() {
        assert_eq!(
            record(false).format_line(false),
            "[DRY-RUN] PROJ-01 Café com Leite!!.PDF -> cafe-com-leite.pdf"
        );
    }

    #[test]
    fn test_colored_dry_run_line_keeps_mapping() {
        let line = record(false).format_line(true);
        assert!(line.contains("\x1b["));
        assert!(line.ends_with("PROJ-01 Café com Leite!!.PDF -> cafe-com-leite.pdf"));
    }

    #[test]
    fn test_summary_one_line_per_record() {
        let mut summary = RunSummary::new("docs", false);
        summary.records.push(record(true));
        summary.records.push(RenameRecord {
            from: PathBuf::from("docs/B.TXT"),
            to: PathBuf::from("docs/b.txt"),
            applied: true,
        });
        assert_eq!(
            summary.format(OutputFormat::Summary),
            "PROJ-01 Café com Leite!!.PDF -> cafe-com-leite.pdf\nB.TXT -> b.txt\n"
        );
    }

    #[test]
    fn test_empty_summary_prints_nothing() {
        assert_eq!(RunSummary::new("docs", true).format_summary(), "");
    }

    #[test]
    fn test_json_output() {
        let mut summary = RunSummary::new("docs", true);
        summary.records.push(record(false));

        let value: Value = serde_json::from_str(&summary.format(OutputFormat::Json)).unwrap();
        assert_eq!(value["operation"], "rename");
        assert_eq!(value["dry_run"], true);
        assert_eq!(value["summary"]["planned"], 1);
        assert_eq!(value["summary"]["renamed"], 0);
        assert_eq!(value["renames"][0]["to"], "docs/cafe-com-leite.pdf");
        assert_eq!(value["renames"][0]["applied"], false);
    }

    #[cfg(unix)]
    #[test]
    fn test_json_output_with_non_utf8_path() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let mut summary = RunSummary::new("docs", false);
        summary.records.push(RenameRecord {
            from: Path::new("docs").join(OsStr::from_bytes(b"My File.D\xffAT")),
            to: Path::new("docs").join(OsStr::from_bytes(b"my-file.d\xffat")),
            applied: true,
        });

        let value: Value = serde_json::from_str(&summary.format_json()).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["summary"]["renamed"], 1);
        assert_eq!(value["renames"][0]["to"], "docs/my-file.d\u{fffd}at");
        assert_eq!(value["renames"][0]["applied"], true);
    }
}
