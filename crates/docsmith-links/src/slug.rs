//! Slug normalization and the known-document slug set.

use std::collections::HashSet;

/// Normalize a document path to its routing slug.
///
/// Strips a trailing slash, then a `.md`/`.mdx` extension, then collapses a
/// trailing `index` or `readme`/`README` component to its parent (or the
/// empty root slug). Extension stripping runs first because source filenames
/// carry extensions; `index.md` must collapse the same way `index` does.
#[allow(clippy::case_sensitive_file_extension_comparisons)]
pub fn normalize_slug(path: &str) -> String {
    let path = path.strip_suffix('/').unwrap_or(path);
    let path = path
        .strip_suffix(".mdx")
        .or_else(|| path.strip_suffix(".md"))
        .unwrap_or(path);
    let path = collapse_tail(path, "index");
    let path = collapse_tail(path, "readme");
    let path = collapse_tail(path, "README");
    path.to_owned()
}

/// Collapse a trailing `name` path component to its parent.
///
/// `a/b/name` becomes `a/b`, a bare `name` becomes the empty root slug, and
/// names that merely end with `name` (like `appindex`) are left alone.
fn collapse_tail<'a>(path: &'a str, name: &str) -> &'a str {
    if path == name {
        return "";
    }
    if let Some(parent) = path.strip_suffix(name) {
        if let Some(parent) = parent.strip_suffix('/') {
            return parent;
        }
    }
    path
}

/// Immutable set of all valid document slugs for one site build.
///
/// Built once from the content collection before any link resolution, then
/// shared read-only across every call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SlugSet(HashSet<String>);

impl SlugSet {
    /// Build a slug set from raw document paths, normalizing each one.
    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            paths
                .into_iter()
                .map(|p| normalize_slug(p.as_ref()))
                .collect(),
        )
    }

    /// Whether the set contains an already-normalized slug.
    #[must_use]
    pub fn contains(&self, slug: &str) -> bool {
        self.0.contains(slug)
    }

    /// Number of known documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<String> for SlugSet {
    /// Collect already-normalized slugs into a set.
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_extension() {
        assert_eq!(
            normalize_slug("user-guide/concepts/agents/state.mdx"),
            "user-guide/concepts/agents/state"
        );
        assert_eq!(normalize_slug("guide/page.md"), "guide/page");
    }

    #[test]
    fn test_collapses_index() {
        assert_eq!(
            normalize_slug("user-guide/concepts/tools/index.md"),
            "user-guide/concepts/tools"
        );
        assert_eq!(normalize_slug("guide/index"), "guide");
        assert_eq!(normalize_slug("index.md"), "");
        assert_eq!(normalize_slug("index"), "");
    }

    #[test]
    fn test_collapses_readme() {
        assert_eq!(normalize_slug("guide/readme.md"), "guide");
        assert_eq!(normalize_slug("guide/README.md"), "guide");
        assert_eq!(normalize_slug("readme"), "");
        assert_eq!(normalize_slug("README"), "");
    }

    #[test]
    fn test_strips_trailing_slash() {
        assert_eq!(normalize_slug("guide/page/"), "guide/page");
    }

    #[test]
    fn test_names_ending_in_index_untouched() {
        assert_eq!(normalize_slug("guide/appindex.md"), "guide/appindex");
        assert_eq!(normalize_slug("guide/search-index"), "guide/search-index");
    }

    #[test]
    fn test_already_normalized_unchanged() {
        assert_eq!(normalize_slug("guide/page"), "guide/page");
        assert_eq!(normalize_slug(""), "");
    }

    #[test]
    fn test_slug_set_from_paths_normalizes() {
        let slugs = SlugSet::from_paths(["guide/index.md", "guide/tools/state.mdx"]);
        assert_eq!(slugs.len(), 2);
        assert!(slugs.contains("guide"));
        assert!(slugs.contains("guide/tools/state"));
        assert!(!slugs.contains("guide/index"));
    }
}
