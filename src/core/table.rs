//! Serialization of the resource table.

use anyhow::{Context, Result};
use clap::ValueEnum;

use crate::core::data::ResourceRow;

/// Column names, in output order.
pub const HEADER: [&str; 4] = ["key", "type", "scope", "source"];

/// Output format for the resource table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum TableFormat {
    /// Tab-separated values with a header row.
    #[default]
    Tsv,
    /// Pretty-printed JSON array of row objects.
    Json,
}

impl TableFormat {
    pub fn render(&self, rows: &[ResourceRow]) -> Result<String> {
        match self {
            TableFormat::Tsv => Ok(to_tsv(rows)),
            TableFormat::Json => to_json(rows),
        }
    }
}

/// Render rows as TSV with `\n` line endings.
///
/// Fields holding a tab, newline, or double quote are quoted CSV-style.
pub fn to_tsv(rows: &[ResourceRow]) -> String {
    let mut out = String::new();
    push_record(&mut out, &HEADER);
    for row in rows {
        push_record(
            &mut out,
            &[
                row.key.as_str(),
                row.rtype.as_str(),
                row.scope.as_str(),
                row.source.as_str(),
            ],
        );
    }
    out
}

/// Render rows as a JSON array.
pub fn to_json(rows: &[ResourceRow]) -> Result<String> {
    let mut json =
        serde_json::to_string_pretty(rows).context("Failed to serialize resource table.")?;
    json.push('\n');
    Ok(json)
}

fn push_record(out: &mut String, fields: &[&str]) {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push('\t');
        }
        push_field(out, field);
    }
    out.push('\n');
}

fn push_field(out: &mut String, field: &str) {
    if field.contains(['\t', '\n', '\r', '"']) {
        out.push('"');
        out.push_str(&field.replace('"', "\"\""));
        out.push('"');
    } else {
        out.push_str(field);
    }
}
