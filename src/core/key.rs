//! Resource key conventions: canonical screen prefix and scope.
//!
//! Fluxbox resources are dot-separated paths rooted at `session`. Per-screen
//! resources carry the screen number (`session.screen0.focusModel`); the
//! canonical form replaces the number with `N` so every screen's copy of a
//! resource collapses into one row.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::data::Scope;

/// Canonical per-screen prefix, including the trailing separator.
pub const SCREEN_PREFIX: &str = "session.screenN.";

/// Canonical bare screen root.
pub const SCREEN_ROOT: &str = "session.screenN";

// session.screen0.foo -> session.screenN.foo, session.screen1 -> session.screenN
static NUMBERED_SCREEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^session\.screen[0-9]+(\.|$)").unwrap());

/// Rewrite a raw key into its canonical form.
///
/// Idempotent: canonical keys come back unchanged.
///
/// ```
/// use fbinit::core::normalize_key;
///
/// assert_eq!(normalize_key("session.screen0.toolbar.visible"), "session.screenN.toolbar.visible");
/// assert_eq!(normalize_key("session.screen0"), "session.screenN");
/// assert_eq!(normalize_key("session.menuFile"), "session.menuFile");
/// ```
pub fn normalize_key(key: &str) -> String {
    NUMBERED_SCREEN_REGEX
        .replace(key.trim(), "session.screenN${1}")
        .into_owned()
}

/// Scope of a canonical key.
pub fn scope_for_key(key: &str) -> Scope {
    if key.starts_with(SCREEN_PREFIX) {
        Scope::Screen
    } else {
        Scope::Global
    }
}

/// True when the first segment below the root (or below the screen prefix)
/// starts uppercase, e.g. `session.Titlebar.Left`.
///
/// Such keys belong to alternate resource-class namespaces, not to the
/// init file schema.
pub fn is_variant_namespace(key: &str) -> bool {
    let rest = key
        .strip_prefix(SCREEN_PREFIX)
        .or_else(|| key.strip_prefix("session."))
        .unwrap_or(key);
    rest.chars().next().is_some_and(|c| c.is_ascii_uppercase())
}
