use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// fbinit is a reporting tool, not a gate: a completed run is always
/// `Success`, whatever the table contains.
///
/// - `Success` (0): Command completed
/// - `Error` (2): Command failed (unwritable output, invalid config, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed.
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
