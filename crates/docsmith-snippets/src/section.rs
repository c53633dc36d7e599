//! Named section extraction from snippet source files.
//!
//! A source file marks extractable regions with paired comment lines:
//!
//! ```text
//! # --8<-- [start:basic_usage]
//! agent = Agent()
//! # --8<-- [end:basic_usage]
//! ```
//!
//! Marker lines may appear anywhere on the line (typically behind a comment
//! leader), dash counts are tolerant, and whitespace around the name is
//! insignificant. Names are compared by trimmed string equality.

use std::sync::LazyLock;

use regex::Regex;

/// Matches a section start marker anywhere in a line.
static START_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-+8<-+\s*\[start:([^\]]+)\]").unwrap());

/// Matches a section end marker anywhere in a line.
static END_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-+8<-+\s*\[end:([^\]]+)\]").unwrap());

/// An extracted, dedented section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    /// Dedented section text, trimmed of leading and trailing blank lines.
    pub text: String,
    /// Whether a matching end marker was found. When `false`, the section
    /// ran through end-of-file and the caller should warn.
    pub terminated: bool,
}

/// Extract the named section from a source file.
///
/// Collects the lines strictly between the first matching start marker and
/// the first subsequent end marker with the same name, then dedents them.
/// Extraction stops at the first matching end marker even if the name
/// reappears later.
///
/// Returns `None` when no start marker with the name exists, and also when
/// zero lines were collected (start immediately followed by its end) so the
/// caller emits the same not-found placeholder. A start marker with no
/// matching end captures through end-of-file with `terminated: false`.
pub fn extract_section(source: &str, name: &str) -> Option<Section> {
    let wanted = name.trim();
    let mut collected: Vec<&str> = Vec::new();
    let mut in_section = false;
    let mut terminated = false;

    for line in source.lines() {
        if in_section {
            if let Some(caps) = END_RE.captures(line) {
                if caps[1].trim() == wanted {
                    terminated = true;
                    break;
                }
            }
            collected.push(line);
        } else if let Some(caps) = START_RE.captures(line) {
            if caps[1].trim() == wanted {
                in_section = true;
            }
        }
    }

    if !in_section || collected.is_empty() {
        return None;
    }

    Some(Section {
        text: dedent(&collected),
        terminated,
    })
}

/// Remove the common leading-whitespace prefix from a block of lines.
///
/// The prefix length is the minimum leading-whitespace byte count over
/// non-blank lines. Exactly that many bytes are stripped from every line,
/// blank lines included (a blank line shorter than the prefix becomes
/// empty). Leading and trailing blank lines are trimmed from the result.
fn dedent(lines: &[&str]) -> String {
    let indent = lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start().len())
        .min()
        .unwrap_or(0);

    let stripped: Vec<&str> = lines
        .iter()
        .map(|line| line.get(indent..).unwrap_or(""))
        .collect();

    let start = stripped
        .iter()
        .position(|line| !line.trim().is_empty())
        .unwrap_or(stripped.len());
    let end = stripped
        .iter()
        .rposition(|line| !line.trim().is_empty())
        .map_or(start, |i| i + 1);

    stripped[start..end].join("\n")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const SOURCE: &str = "\
import agent

# --8<-- [start:basic_usage]
agent = Agent()
agent.run()
# --8<-- [end:basic_usage]

print('done')
";

    #[test]
    fn test_extract_named_section() {
        let section = extract_section(SOURCE, "basic_usage").unwrap();
        assert_eq!(section.text, "agent = Agent()\nagent.run()");
        assert!(section.terminated);
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let first = extract_section(SOURCE, "basic_usage").unwrap();
        let second = extract_section(SOURCE, "basic_usage").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_section_returns_none() {
        assert!(extract_section(SOURCE, "nope").is_none());
    }

    #[test]
    fn test_stops_at_first_matching_end() {
        let source = "\
// --8<-- [start:a]
one
// --8<-- [end:a]
// --8<-- [start:a]
two
// --8<-- [end:a]
";
        let section = extract_section(source, "a").unwrap();
        assert_eq!(section.text, "one");
    }

    #[test]
    fn test_foreign_end_marker_is_content() {
        let source = "\
// --8<-- [start:outer]
// --8<-- [end:inner]
body
// --8<-- [end:outer]
";
        let section = extract_section(source, "outer").unwrap();
        assert_eq!(section.text, "// --8<-- [end:inner]\nbody");
    }

    #[test]
    fn test_unterminated_start_captures_to_eof() {
        let source = "// --8<-- [start:tail]\nlast line\n";
        let section = extract_section(source, "tail").unwrap();
        assert_eq!(section.text, "last line");
        assert!(!section.terminated);
    }

    #[test]
    fn test_empty_section_treated_as_not_found() {
        let source = "// --8<-- [start:empty]\n// --8<-- [end:empty]\n";
        assert!(extract_section(source, "empty").is_none());
    }

    #[test]
    fn test_name_whitespace_insignificant() {
        let source = "# --8<-- [start: padded ]\nbody\n# --8<-- [end: padded ]\n";
        let section = extract_section(source, "padded").unwrap();
        assert_eq!(section.text, "body");
        assert!(extract_section(source, "  padded  ").is_some());
    }

    #[test]
    fn test_dedent_indented_block() {
        let source = "\
class Example:
    # --8<-- [start:method]
    def run(self):
        return 1
    # --8<-- [end:method]
";
        let section = extract_section(source, "method").unwrap();
        assert_eq!(section.text, "def run(self):\n    return 1");
    }

    #[test]
    fn test_dedent_has_flush_left_line() {
        // At least one dedented line has no leading whitespace, and relative
        // indentation between lines is preserved.
        let section = extract_section(
            "  // --8<-- [start:x]\n  a\n    b\n  // --8<-- [end:x]\n",
            "x",
        )
        .unwrap();
        assert_eq!(section.text, "a\n  b");
    }

    #[test]
    fn test_dedent_short_blank_line() {
        let result = dedent(&["    a", " ", "    b"]);
        assert_eq!(result, "a\n\nb");
    }

    #[test]
    fn test_blank_boundary_lines_trimmed() {
        let source = "\
# --8<-- [start:x]

body

# --8<-- [end:x]
";
        let section = extract_section(source, "x").unwrap();
        assert_eq!(section.text, "body");
    }
}
