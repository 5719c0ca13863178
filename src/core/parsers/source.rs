//! Resource keys referenced from C/C++ sources.
//!
//! Two independent strategies, both pure functions of the file text:
//!
//! - literal scan: `"session.foo.bar"` string literals
//! - concatenation scan: per-screen keys assembled at runtime, e.g.
//!   `screen.name() + ".tab.placement"` or
//!   `name() + ".struts." + area`
//!
//! Concatenation results are always screen-scoped, so they are emitted
//! under [`SCREEN_ROOT`]. A variable interpolated between two literal
//! fragments becomes a `<var>` placeholder segment.

use std::{collections::HashSet, sync::LazyLock};

use regex::Regex;

use crate::core::{
    data::CodeKeys,
    key::{SCREEN_ROOT, is_variant_namespace},
};

static LITERAL_KEY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""(session\.[A-Za-z0-9_.]+)""#).unwrap());

// scrname + ".opaqueMove"
static SCRNAME_SUFFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\bscrname\s*\+\s*"(\.[A-Za-z0-9_.-]+)""#).unwrap());

// name() + ".tab.placement"
static NAME_SUFFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\bname\(\)\s*\+\s*"(\.[A-Za-z0-9_.-]+)""#).unwrap());

// name() + ".toolbar." + name + ".label"
static NAME_PREFIX_VAR_SUFFIX_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"\bname\(\)\s*\+\s*"(\.[A-Za-z0-9_.-]*\.)"\s*\+\s*([A-Za-z_][A-Za-z0-9_]*)\s*\+\s*"(\.[A-Za-z0-9_.-]+)""#,
    )
    .unwrap()
});

// name() + ".struts." + area
// Callers reject matches followed by another `+ "literal"`.
static NAME_PREFIX_VAR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\bname\(\)\s*\+\s*"(\.[A-Za-z0-9_.-]*\.)"\s*\+\s*([A-Za-z_][A-Za-z0-9_]*)"#)
        .unwrap()
});

/// A concatenation shape that code builds dynamically but the man page
/// documents under a different, fixed key family.
#[derive(Debug, Clone, Copy)]
pub struct DocumentedFamily {
    /// Literal between the screen name and the variable, e.g. `.toolbar.`.
    pub prefix: &'static str,
    /// Name of the interpolated variable.
    pub var: &'static str,
    /// Literal suffixes that belong to the family.
    pub suffixes: &'static [&'static str],
    /// Key the family is documented under; the suffix is appended.
    pub key: &'static str,
}

/// Known exceptions to the generic `<var>` placeholder rule.
///
/// Toolbar buttons are configured as `toolbar.button.<name>.*` even though
/// the code concatenates `".toolbar." + name`.
pub const DOCUMENTED_FAMILIES: &[DocumentedFamily] = &[DocumentedFamily {
    prefix: ".toolbar.",
    var: "name",
    suffixes: &[".label", ".commands"],
    key: "session.screenN.toolbar.button.<name>",
}];

fn documented_family(prefix: &str, var: &str) -> Option<&'static DocumentedFamily> {
    DOCUMENTED_FAMILIES
        .iter()
        .find(|family| family.prefix == prefix && family.var == var)
}

/// Quoted `session.*` literals.
///
/// Skips variant namespaces (`session.Titlebar...`) and the bare
/// `session.screen` prefix used to build screen names.
pub fn extract_literal_keys(text: &str) -> CodeKeys {
    LITERAL_KEY_REGEX
        .captures_iter(text)
        .filter_map(|cap| cap.get(1).map(|m| m.as_str()))
        .filter(|key| !is_variant_namespace(key) && *key != "session.screen")
        .map(str::to_string)
        .collect()
}

/// Screen-scoped keys assembled by string concatenation.
pub fn extract_concat_keys(text: &str) -> CodeKeys {
    let mut keys = HashSet::new();

    for cap in SCRNAME_SUFFIX_REGEX.captures_iter(text) {
        let suffix = &cap[1];
        if suffix.ends_with('.') {
            continue;
        }
        keys.insert(format!("{SCREEN_ROOT}{suffix}"));
    }

    for cap in NAME_SUFFIX_REGEX.captures_iter(text) {
        let suffix = &cap[1];
        // Partial prefixes such as ".struts." only feed further concatenation.
        if suffix.ends_with('.') {
            continue;
        }
        insert_screen_key(&mut keys, format!("{SCREEN_ROOT}{suffix}"));
    }

    for cap in NAME_PREFIX_VAR_SUFFIX_REGEX.captures_iter(text) {
        let (prefix, var, suffix) = (&cap[1], &cap[2], &cap[3]);
        if let Some(family) = documented_family(prefix, var)
            && family.suffixes.contains(&suffix)
        {
            keys.insert(format!("{}{}", family.key, suffix));
            continue;
        }
        insert_screen_key(&mut keys, format!("{SCREEN_ROOT}{prefix}<{var}>{suffix}"));
    }

    for cap in NAME_PREFIX_VAR_REGEX.captures_iter(text) {
        let Some(whole) = cap.get(0) else {
            continue;
        };
        if continues_with_literal(&text[whole.end()..]) {
            continue;
        }
        let (prefix, var) = (&cap[1], &cap[2]);
        if documented_family(prefix, var).is_some() {
            continue;
        }
        insert_screen_key(&mut keys, format!("{SCREEN_ROOT}{prefix}<{var}>"));
    }

    keys
}

/// Union of both strategies for one file.
pub fn extract_source_keys(text: &str) -> CodeKeys {
    let mut keys = extract_literal_keys(text);
    keys.extend(extract_concat_keys(text));
    keys
}

fn insert_screen_key(keys: &mut CodeKeys, key: String) {
    if !is_variant_namespace(&key) {
        keys.insert(key);
    }
}

/// True when `rest` starts with `+ "`, ignoring whitespace.
fn continues_with_literal(rest: &str) -> bool {
    rest.trim_start()
        .strip_prefix('+')
        .is_some_and(|after| after.trim_start().starts_with('"'))
}
