//! Reconcile man page declarations, code references, and the supplemental
//! table into the final resource table.

use std::collections::BTreeSet;

use crate::core::{
    data::{
        CodeKeys, DocResources, ResourceRow, Source, SupplementalResources, UNKNOWN_TYPE,
    },
    key::{normalize_key, scope_for_key},
};

/// Keys that exist but are missing from fluxbox(1), with their types.
pub const SUPPLEMENTAL_RESOURCES: &[(&str, &str)] = &[
    ("session.configVersion", "integer"),
    ("session.screenN.toolbar.button.<name>.label", "string"),
    ("session.screenN.toolbar.button.<name>.commands", "string"),
];

/// The built-in supplemental table.
pub fn builtin_supplemental() -> SupplementalResources {
    SUPPLEMENTAL_RESOURCES
        .iter()
        .map(|(key, rtype)| (key.to_string(), rtype.to_string()))
        .collect()
}

/// Merge the three sources into rows sorted by key.
///
/// - type: man page type, else supplemental type, else `unknown`
///   (empty declared types count as missing)
/// - source: `doc+code` when the man page and code (or the supplemental
///   table) both know the key, `doc` when only the man page does, `code`
///   otherwise
pub fn merge_resources(
    doc: &DocResources,
    code_keys: &CodeKeys,
    supplemental: &SupplementalResources,
) -> Vec<ResourceRow> {
    let code_keys: BTreeSet<String> = code_keys.iter().map(|k| normalize_key(k)).collect();

    let all_keys: BTreeSet<&str> = doc
        .keys()
        .map(String::as_str)
        .chain(code_keys.iter().map(String::as_str))
        .chain(supplemental.keys().map(String::as_str))
        .collect();

    all_keys
        .into_iter()
        .map(|key| {
            let rtype = non_empty(doc.get(key))
                .or_else(|| non_empty(supplemental.get(key)))
                .unwrap_or(UNKNOWN_TYPE);

            let in_doc = doc.contains_key(key);
            let in_code = code_keys.contains(key) || supplemental.contains_key(key);
            let source = match (in_doc, in_code) {
                (true, true) => Source::DocAndCode,
                (true, false) => Source::Doc,
                (false, _) => Source::Code,
            };

            ResourceRow {
                key: key.to_string(),
                rtype: rtype.to_string(),
                scope: scope_for_key(key),
                source,
            }
        })
        .collect()
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}
