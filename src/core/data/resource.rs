use std::{
    collections::{HashMap, HashSet},
    fmt,
};

use serde::Serialize;

/// Type recorded when no source declares one.
pub const UNKNOWN_TYPE: &str = "unknown";

/// Resources declared in the man page, keyed by canonical key.
///
/// Values are the declared type (`"integer"`, `"String"`, `"enum"`, ...).
pub type DocResources = HashMap<String, String>;

/// Canonical keys referenced by the source tree.
pub type CodeKeys = HashSet<String>;

/// Keys known to exist outside the generated documentation, with a
/// manually assigned type.
pub type SupplementalResources = HashMap<String, String>;

/// Whether a resource is per-screen or process-global.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Any key that does not start with the generic screen prefix.
    Global,
    /// `session.screenN.*` keys.
    Screen,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Global => "global",
            Scope::Screen => "screen",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which corpus attested to a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Source {
    /// Only the man page declares it.
    #[serde(rename = "doc")]
    Doc,
    /// Only the source tree (or the supplemental table) knows it.
    #[serde(rename = "code")]
    Code,
    /// Declared in the man page and corroborated by code.
    #[serde(rename = "doc+code")]
    DocAndCode,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Doc => "doc",
            Source::Code => "code",
            Source::DocAndCode => "doc+code",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the reconciled resource table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceRow {
    /// Canonical key, e.g. `session.screenN.focusModel`.
    pub key: String,
    #[serde(rename = "type")]
    pub rtype: String,
    pub scope: Scope,
    pub source: Source,
}
