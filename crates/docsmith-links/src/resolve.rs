//! Relative link resolution.

use crate::slug::{SlugSet, normalize_slug};

/// A resolved hyperlink.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedLink {
    /// Site path the link should point to. For resolved relative links this
    /// starts and ends with `/` and may carry a trailing `#fragment`.
    pub href: String,
    /// Whether the target matched a known document. Callers surface
    /// `found: false` as a broken-link warning; resolution never fails.
    pub found: bool,
}

/// Whether a href needs resolution against the current document.
///
/// Absolute URLs, protocol-relative URLs, absolute site paths, and
/// fragment-only links are returned unchanged by [`resolve_href`].
#[must_use]
pub fn is_relative_link(href: &str) -> bool {
    !(href.starts_with("http://")
        || href.starts_with("https://")
        || href.starts_with("//")
        || href.starts_with('/')
        || href.starts_with('#'))
}

/// Resolve `.` and `..` segments against an accumulator.
///
/// Mirrors filesystem path resolution without touching the filesystem:
/// `..` pops the last segment (a no-op at the root, preventing traversal
/// above it), `.` and empty segments are dropped.
pub fn normalize_segments<'a, I>(segments: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut resolved = Vec::new();
    for segment in segments {
        match segment {
            "" | "." => {}
            ".." => {
                resolved.pop();
            }
            _ => resolved.push(segment),
        }
    }
    resolved
}

/// Split a href into its path part and optional `#fragment` (hash included).
fn split_fragment(href: &str) -> (&str, Option<&str>) {
    match href.find('#') {
        Some(pos) => (&href[..pos], Some(&href[pos..])),
        None => (href, None),
    }
}

/// Resolve a relative href against the current document's site path.
///
/// The current document is interpreted either as a directory index
/// (`as_index_page`, its own segments form the base directory) or as a leaf
/// page (the last segment is the document itself and is dropped). The href's
/// path part is slug-normalized before joining so `../tools/index.md`
/// resolves like `../tools`.
#[must_use]
pub fn resolve_relative_link(href: &str, current_path: &str, as_index_page: bool) -> String {
    let (path_part, fragment) = split_fragment(href);
    let slug = normalize_slug(path_part);

    let current: Vec<&str> = current_path
        .trim_matches('/')
        .split('/')
        .filter(|s| !s.is_empty())
        .collect();
    let dir = if as_index_page {
        &current[..]
    } else {
        &current[..current.len().saturating_sub(1)]
    };

    let joined = normalize_segments(dir.iter().copied().chain(slug.split('/'))).join("/");
    match fragment {
        Some(fragment) => format!("{joined}{fragment}"),
        None => joined,
    }
}

/// Look up a resolved path in the known slug set.
///
/// Tries the bare path and a trailing-slash-stripped variant. A match is
/// returned slash-wrapped with the original fragment re-attached.
#[must_use]
pub fn find_doc_slug(resolved: &str, slugs: &SlugSet) -> Option<String> {
    let (path, fragment) = split_fragment(resolved);
    let stripped = path.strip_suffix('/').unwrap_or(path);

    let matched = [path, stripped]
        .into_iter()
        .find(|&candidate| slugs.contains(candidate))?;

    Some(match fragment {
        Some(fragment) => format!("{}{fragment}", slash_wrap(matched)),
        None => slash_wrap(matched),
    })
}

/// Wrap a slug in leading and trailing slashes. The root slug maps to `/`.
fn slash_wrap(slug: &str) -> String {
    if slug.is_empty() {
        "/".to_owned()
    } else {
        format!("/{slug}/")
    }
}

/// Resolve a href found in a document to the site path it should point to.
///
/// Non-relative hrefs pass through unchanged and are marked found. Relative
/// hrefs are resolved twice if necessary: first assuming the current document
/// is a leaf page, then assuming it is a directory index. When neither
/// interpretation matches a known document, the leaf interpretation is
/// returned as a deterministic fallback with `found: false`.
#[must_use]
pub fn resolve_href(href: &str, current_path: &str, slugs: &SlugSet) -> ResolvedLink {
    if !is_relative_link(href) {
        return ResolvedLink {
            href: href.to_owned(),
            found: true,
        };
    }

    let as_leaf = resolve_relative_link(href, current_path, false);
    if let Some(matched) = find_doc_slug(&as_leaf, slugs) {
        return ResolvedLink {
            href: matched,
            found: true,
        };
    }

    let as_index = resolve_relative_link(href, current_path, true);
    if let Some(matched) = find_doc_slug(&as_index, slugs) {
        return ResolvedLink {
            href: matched,
            found: true,
        };
    }

    let (path, fragment) = split_fragment(&as_leaf);
    ResolvedLink {
        href: match fragment {
            Some(fragment) => format!("{}{fragment}", slash_wrap(path)),
            None => slash_wrap(path),
        },
        found: false,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn slugs(entries: &[&str]) -> SlugSet {
        entries.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn test_is_relative_link() {
        assert!(!is_relative_link("https://example.com"));
        assert!(!is_relative_link("http://example.com/page"));
        assert!(!is_relative_link("//cdn.example.com/lib.js"));
        assert!(!is_relative_link("/user-guide/tools/"));
        assert!(!is_relative_link("#section"));
        assert!(is_relative_link("../tools/custom-tools.md#section"));
        assert!(is_relative_link("sibling.md"));
        assert!(is_relative_link("./sibling.md"));
    }

    #[test]
    fn test_normalize_segments() {
        assert_eq!(normalize_segments(["a", "b", "..", "c"]), vec!["a", "c"]);
        assert_eq!(normalize_segments(["a", ".", "b"]), vec!["a", "b"]);
        assert_eq!(normalize_segments(["a", "", "b"]), vec!["a", "b"]);
    }

    #[test]
    fn test_normalize_segments_pops_past_root_quietly() {
        assert_eq!(normalize_segments(["..", "..", "a"]), vec!["a"]);
        assert!(normalize_segments([".."]).is_empty());
    }

    #[test]
    fn test_resolve_relative_link_leaf_page() {
        assert_eq!(
            resolve_relative_link(
                "../tools/index.md",
                "/user-guide/concepts/agents/state/",
                false
            ),
            "user-guide/concepts/tools"
        );
    }

    #[test]
    fn test_resolve_relative_link_index_page() {
        assert_eq!(
            resolve_relative_link("../tools/index.md", "/user-guide/concepts/agents/", true),
            "user-guide/concepts/tools"
        );
    }

    #[test]
    fn test_resolve_relative_link_keeps_fragment() {
        assert_eq!(
            resolve_relative_link("sibling.md#usage", "/guide/page/", false),
            "guide/sibling#usage"
        );
    }

    #[test]
    fn test_resolve_relative_link_sibling() {
        assert_eq!(
            resolve_relative_link("./tools.md", "/guide/agents/", false),
            "guide/tools"
        );
    }

    #[test]
    fn test_find_doc_slug() {
        let set = slugs(&["guide/tools"]);
        assert_eq!(
            find_doc_slug("guide/tools", &set),
            Some("/guide/tools/".to_owned())
        );
        assert_eq!(
            find_doc_slug("guide/tools/", &set),
            Some("/guide/tools/".to_owned())
        );
        assert_eq!(find_doc_slug("guide/nope", &set), None);
    }

    #[test]
    fn test_find_doc_slug_reattaches_fragment() {
        let set = slugs(&["guide/tools"]);
        assert_eq!(
            find_doc_slug("guide/tools#usage", &set),
            Some("/guide/tools/#usage".to_owned())
        );
    }

    #[test]
    fn test_find_doc_slug_root() {
        let set = slugs(&[""]);
        assert_eq!(find_doc_slug("", &set), Some("/".to_owned()));
    }

    #[test]
    fn test_resolve_href_absolute_passthrough() {
        let set = slugs(&[]);
        let link = resolve_href("https://example.com", "/guide/", &set);
        assert_eq!(link.href, "https://example.com");
        assert!(link.found);
    }

    #[test]
    fn test_resolve_href_fragment_only_passthrough() {
        let set = slugs(&[]);
        let link = resolve_href("#section", "/guide/", &set);
        assert_eq!(link.href, "#section");
        assert!(link.found);
    }

    #[test]
    fn test_resolve_href_leaf_interpretation() {
        let set = slugs(&["user-guide/concepts/tools"]);
        let link = resolve_href(
            "../tools/index.md",
            "/user-guide/concepts/agents/state/",
            &set,
        );
        assert_eq!(link.href, "/user-guide/concepts/tools/");
        assert!(link.found);
    }

    #[test]
    fn test_resolve_href_index_retry() {
        // Leaf interpretation resolves to guide/tools which is unknown;
        // the index interpretation keeps the current document's last
        // segment and matches.
        let set = slugs(&["guide/agents/tools"]);
        let link = resolve_href("tools.md", "/guide/agents/", &set);
        assert_eq!(link.href, "/guide/agents/tools/");
        assert!(link.found);
    }

    #[test]
    fn test_resolve_href_unmatched_falls_back_to_leaf() {
        let set = slugs(&["a/other"]);
        let link = resolve_href("../nope.md", "/a/b/", &set);
        assert_eq!(link.href, "/nope/");
        assert!(!link.found);
    }

    #[test]
    fn test_resolve_href_unmatched_keeps_fragment() {
        let set = slugs(&[]);
        let link = resolve_href("missing.md#top", "/a/b/", &set);
        assert_eq!(link.href, "/a/missing/#top");
        assert!(!link.found);
    }

    #[test]
    fn test_resolve_href_never_panics_on_root() {
        let set = slugs(&[]);
        let link = resolve_href("../../../up.md", "/", &set);
        assert_eq!(link.href, "/up/");
        assert!(!link.found);
    }
}
