use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// Findings such as broken links are report data, not failures, so a
/// completed check always exits with `Success`.
///
/// - `Success` (0): Command completed and its report was written
/// - `Error` (2): Command failed (missing root, unreadable file, bad config, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed and its report was written.
    Success,
    /// Command failed due to an error.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
