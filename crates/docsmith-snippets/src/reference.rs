//! Snippet reference line parsing.

use std::sync::LazyLock;

use regex::Regex;

/// Matches a trimmed snippet reference line: `--8<-- "path"`.
///
/// Dash counts are tolerant, so `---8<---` works as well as `--8<--`.
static REFERENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^-+8<-+\s*"([^"]+)"$"#).unwrap());

/// A parsed snippet reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnippetRef {
    /// File path relative to the snippet base directory.
    pub path: String,
    /// Named section to extract, or `None` for the whole file.
    pub section: Option<String>,
}

/// Parse a line as a snippet reference.
///
/// The line is trimmed before matching. Lines that do not match the reference
/// syntax return `None` and must be passed through unchanged; malformed
/// references are ordinary text, not errors.
pub fn parse_reference(line: &str) -> Option<SnippetRef> {
    let caps = REFERENCE_RE.captures(line.trim())?;
    Some(split_reference(&caps[1]))
}

/// Split a captured reference into path and optional section name.
///
/// The split happens at the first colon not immediately preceded by a
/// backslash. The backslash guard protects Windows-style paths; it is a
/// narrow heuristic and intentionally not generalized.
fn split_reference(reference: &str) -> SnippetRef {
    let colon = reference
        .char_indices()
        .find(|&(i, c)| c == ':' && i > 0 && reference.as_bytes()[i - 1] != b'\\')
        .map(|(i, _)| i);

    match colon {
        Some(i) => SnippetRef {
            path: reference[..i].to_owned(),
            section: Some(reference[i + 1..].to_owned()),
        },
        None => SnippetRef {
            path: reference.to_owned(),
            section: None,
        },
    }
}
