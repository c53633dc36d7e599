//! Docs-tree scanning and slug-set construction.

use std::path::{Path, PathBuf};

use docsmith_links::{SlugSet, normalize_slug};
use ignore::WalkBuilder;

use crate::AuditError;

/// One markdown document found in the content root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocFile {
    /// Absolute (or walk-relative) path on disk.
    pub path: PathBuf,
    /// Normalized routing slug, derived from the path relative to the root.
    pub slug: String,
}

impl DocFile {
    /// Site URL path of this document, slash-wrapped for link resolution.
    #[must_use]
    pub fn site_path(&self) -> String {
        if self.slug.is_empty() {
            "/".to_owned()
        } else {
            format!("/{}/", self.slug)
        }
    }
}

/// Whether a path looks like a markdown document.
fn is_markdown(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("md" | "mdx")
    )
}

/// Walk the content root and collect every markdown document.
///
/// Respects ignore files the way the rest of the tooling does. Results are
/// sorted by path so output ordering is stable across runs.
pub fn scan_docs(source_dir: &Path) -> Result<Vec<DocFile>, AuditError> {
    if !source_dir.is_dir() {
        return Err(AuditError::SourceDirNotFound(source_dir.to_path_buf()));
    }

    let mut docs = Vec::new();
    for entry in WalkBuilder::new(source_dir).build() {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type().is_some_and(|ft| ft.is_file()) || !is_markdown(path) {
            continue;
        }

        let relative = path.strip_prefix(source_dir).unwrap_or(path);
        let slug = normalize_slug(&relative.to_string_lossy().replace('\\', "/"));
        docs.push(DocFile {
            path: path.to_path_buf(),
            slug,
        });
    }

    docs.sort_by(|a, b| a.path.cmp(&b.path));
    tracing::debug!(document_count = docs.len(), "Docs scan completed");
    Ok(docs)
}

/// Build the per-build slug set from scanned documents.
#[must_use]
pub fn slug_set(docs: &[DocFile]) -> SlugSet {
    docs.iter().map(|doc| doc.slug.clone()).collect()
}
