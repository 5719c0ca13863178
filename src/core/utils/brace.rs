/// Expand brace alternation into every literal string it denotes.
///
/// `{a|b}` groups may nest and may appear more than once; the result is the
/// cross product, enumerated group by group from the left. An unbalanced
/// group is not expanded: the input comes back as a single literal.
///
/// Examples:
/// - `focus{Model|Delay}` → `focusModel`, `focusDelay`
/// - `{a|b}.{x|y}` → `a.x`, `a.y`, `b.x`, `b.y`
/// - `tab{s|{Width|Height}}` → `tabs`, `tabWidth`, `tabHeight`
pub fn expand_braces(pattern: &str) -> Vec<String> {
    let Some(start) = pattern.find('{') else {
        return vec![pattern.to_string()];
    };
    let Some(end) = find_matching_close(pattern, start) else {
        return vec![pattern.to_string()];
    };

    let prefix = &pattern[..start];
    let inner = &pattern[start + 1..end];
    let suffix = &pattern[end + 1..];

    let tails = expand_braces(suffix);
    let mut expanded = Vec::new();
    for option in split_top_level(inner, '|') {
        for tail in &tails {
            expanded.extend(expand_braces(&format!("{prefix}{option}{tail}")));
        }
    }
    expanded
}

/// Byte index of the `}` closing the `{` at `open`, if any.
fn find_matching_close(pattern: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, ch) in pattern[open..].char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Split on `sep` only where no brace group is open.
fn split_top_level(s: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, ch) in s.char_indices() {
        if ch == '{' {
            depth += 1;
        } else if ch == '}' {
            depth = depth.saturating_sub(1);
        } else if ch == sep && depth == 0 {
            parts.push(&s[start..i]);
            start = i + ch.len_utf8();
        }
    }
    parts.push(&s[start..]);
    parts
}
