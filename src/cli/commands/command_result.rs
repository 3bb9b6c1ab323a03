use std::path::{Path, PathBuf};

use crate::report::Report;

/// One finding, as shown in verbose output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub message: String,
    /// File the finding points at, relative to its root.
    pub location: String,
    pub note: Option<String>,
}

#[derive(Debug)]
pub struct ReportSummary {
    pub out: PathBuf,
    /// Name of the count in the summary line, e.g. `broken`.
    pub count_label: &'static str,
    pub count: usize,
    pub findings: Vec<Finding>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: PathBuf,
}

#[derive(Debug)]
pub enum CommandSummary {
    Report(ReportSummary),
    Init(InitSummary),
}

/// Result of running vpcheck commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
}

impl CommandResult {
    pub fn from_report<R: Report>(out: &Path, report: &R, findings: Vec<Finding>) -> Self {
        Self {
            summary: CommandSummary::Report(ReportSummary {
                out: out.to_path_buf(),
                count_label: report.count_label(),
                count: report.count(),
                findings,
            }),
        }
    }
}
