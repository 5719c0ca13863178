//! Resource declarations from the generated fluxbox(1) man page.
//!
//! The RESOURCES section of the roff source lists one resource per line:
//!
//! ```text
//! \fBsession\&.screen0\&.{focusModel|followModel}\fR: \fIString\fR
//! \fBsession\&.screen0\&.rowPlacementDirection\fR: \fBLeftToRight\fR|\fBRightToLeft\fR
//! ```
//!
//! Parsing is strictly line-based so a malformed entry never swallows the
//! next one.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::{
    data::{DocResources, UNKNOWN_TYPE},
    key::normalize_key,
    utils::expand_braces,
};

/// Marker opening the resources section.
pub const RESOURCES_SECTION_MARKER: &str = "\n.SH \"RESOURCES\"";

/// Marker opening any top-level section.
const SECTION_MARKER: &str = "\n.SH";

/// Type recorded when the description only lists bold choices.
pub const ENUM_TYPE: &str = "enum";

static ENTRY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\\fB(session.*?)\\fR:\s*(.*)$").unwrap());

static ITALIC_SPAN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\fI(.*?)\\fR").unwrap());

/// One `(key, type)` pair declared by the man page, after brace expansion
/// and normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManpageEntry {
    pub key: String,
    pub rtype: String,
}

/// Text of the RESOURCES section, or the whole document when the section
/// marker is missing.
pub fn resources_section(text: &str) -> &str {
    let start = text.find(RESOURCES_SECTION_MARKER).unwrap_or(0);
    // The end marker is searched after the first character of the section.
    let search_from = text[start..]
        .char_indices()
        .nth(1)
        .map_or(text.len(), |(i, _)| start + i);
    match text[search_from..].find(SECTION_MARKER) {
        Some(offset) => &text[start..search_from + offset],
        None => &text[start..],
    }
}

/// Every entry declared in the RESOURCES section, in document order.
///
/// Duplicates are kept; see [`extract_doc_resources`] for the first-seen map.
pub fn extract_manpage_entries(text: &str) -> Vec<ManpageEntry> {
    let mut entries = Vec::new();

    for line in resources_section(text).lines() {
        if !line.starts_with(r"\fBsession") {
            continue;
        }
        let Some(captures) = ENTRY_REGEX.captures(line) else {
            continue;
        };
        let raw_key = captures.get(1).map_or("", |m| m.as_str());
        let rest = captures.get(2).map_or("", |m| m.as_str());

        let rtype = declared_type(rest);
        let key = clean_roff_token(raw_key);
        let key = key.trim_matches('"');

        for expanded in expand_braces(key) {
            entries.push(ManpageEntry {
                key: normalize_key(&expanded),
                rtype: rtype.clone(),
            });
        }
    }

    entries
}

/// Man page resources keyed by canonical key. The first declaration of a
/// key wins.
pub fn extract_doc_resources(text: &str) -> DocResources {
    let mut resources = DocResources::new();
    for entry in extract_manpage_entries(text) {
        resources.entry(entry.key).or_insert(entry.rtype);
    }
    resources
}

fn declared_type(rest: &str) -> String {
    if let Some(captures) = ITALIC_SPAN_REGEX.captures(rest) {
        let span = captures.get(1).map_or("", |m| m.as_str());
        return clean_roff_token(span);
    }
    if rest.contains(r"\fB") {
        return ENUM_TYPE.to_string();
    }
    UNKNOWN_TYPE.to_string()
}

/// Strip the `\&` zero-width escapes roff puts between tokens.
fn clean_roff_token(s: &str) -> String {
    s.replace(r"\&", "").trim().to_string()
}
