//! Human-facing summaries printed after a command finishes.
//!
//! The resource table itself is written by the extract command; everything
//! here goes to stderr (or stdout for `init`) so piping the table stays clean.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{
    CommandResult, CommandSummary, ExtractSummary, InitSummary, OutputTarget,
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

pub fn print(result: &CommandResult, verbose: bool) {
    match &result.summary {
        CommandSummary::Extract(summary) => {
            print_extract_to(summary, verbose, &mut io::stderr().lock())
        }
        CommandSummary::Init(summary) => print_init_to(summary, &mut io::stdout().lock()),
    }
}

pub fn print_extract_to<W: Write>(summary: &ExtractSummary, verbose: bool, writer: &mut W) {
    let stats = &summary.stats;

    // Details were already printed as they happened in verbose mode.
    if !verbose {
        if !stats.doc_found {
            let _ = writeln!(
                writer,
                "{} man page not found, table has no documented resources (use {} for details)",
                "warning:".bold().yellow(),
                "-v".cyan()
            );
        }
        if stats.files_skipped > 0 {
            let _ = writeln!(
                writer,
                "{} {} source path(s) could not be read (use {} for details)",
                "warning:".bold().yellow(),
                stats.files_skipped,
                "-v".cyan()
            );
        }
    }

    let target = match &summary.destination {
        OutputTarget::Stdout if !verbose => return,
        OutputTarget::Stdout => "stdout".to_string(),
        OutputTarget::File(path) => path.display().to_string(),
    };

    let counts = &summary.source_counts;
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Wrote {} {} to {} (doc: {}, code: {}, doc+code: {})",
            summary.row_count,
            if summary.row_count == 1 {
                "resource"
            } else {
                "resources"
            },
            target,
            counts.doc,
            counts.code,
            counts.doc_and_code
        )
        .green()
    );

    if verbose {
        let _ = writeln!(
            writer,
            "  {} documented, {} referenced in {} source {}, {} supplemental",
            stats.doc_keys,
            stats.code_keys,
            stats.files_scanned,
            if stats.files_scanned == 1 {
                "file"
            } else {
                "files"
            },
            stats.supplemental_keys
        );
    }
}

pub fn print_init_to<W: Write>(summary: &InitSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", summary.path.display()).green()
    );
}
