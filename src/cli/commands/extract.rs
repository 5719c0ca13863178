use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use anyhow::{Context, Result};

use super::super::args::ExtractCommand;
use super::{CommandResult, CommandSummary, ExtractSummary, OutputTarget, SourceCounts};
use crate::core::{ExtractContext, TableFormat};

pub fn extract(cmd: ExtractCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let ctx = ExtractContext::new(args)?;
    run_extract(&ctx, args.format)
}

/// Run the pipeline for `ctx` and write the table to its output target.
///
/// The only failure is an unwritable output.
pub fn run_extract(ctx: &ExtractContext, format: TableFormat) -> Result<CommandResult> {
    let outcome = ctx.extract();
    let rendered = format.render(&outcome.rows)?;

    let destination = OutputTarget::parse(&ctx.out);
    write_output(&destination, &rendered)?;

    Ok(CommandResult {
        summary: CommandSummary::Extract(ExtractSummary {
            row_count: outcome.rows.len(),
            stats: outcome.stats,
            destination,
            source_counts: SourceCounts::from_rows(&outcome.rows),
        }),
    })
}

fn write_output(destination: &OutputTarget, content: &str) -> Result<()> {
    match destination {
        OutputTarget::Stdout => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(content.as_bytes())
                .and_then(|()| stdout.flush())
                .context("Failed to write resource table to stdout")
        }
        OutputTarget::File(path) => write_file(path, content),
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, content)
        .with_context(|| format!("Failed to write resource table: {}", path.display()))
}
