pub mod extract;
pub mod init;

use std::path::PathBuf;

use crate::{
    config::STDOUT_SENTINEL,
    core::{ExtractionStats, ResourceRow, Source},
};

#[derive(Debug)]
pub enum CommandSummary {
    Extract(ExtractSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ExtractSummary {
    pub row_count: usize,
    pub stats: ExtractionStats,
    pub destination: OutputTarget,
    pub source_counts: SourceCounts,
}

/// Rows per provenance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SourceCounts {
    pub doc: usize,
    pub code: usize,
    pub doc_and_code: usize,
}

impl SourceCounts {
    pub fn from_rows(rows: &[ResourceRow]) -> Self {
        rows.iter().fold(Self::default(), |mut counts, row| {
            match row.source {
                Source::Doc => counts.doc += 1,
                Source::Code => counts.code += 1,
                Source::DocAndCode => counts.doc_and_code += 1,
            }
            counts
        })
    }
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
}

/// Where the rendered table goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// `-` means stdout; anything else is a file path.
    pub fn parse(out: &str) -> Self {
        if out == STDOUT_SENTINEL {
            OutputTarget::Stdout
        } else {
            OutputTarget::File(PathBuf::from(out))
        }
    }
}

/// Result of running fbinit commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
}
