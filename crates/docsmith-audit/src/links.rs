//! Markdown link extraction and checking.

use std::fs;
use std::path::PathBuf;

use docsmith_links::{SlugSet, is_relative_link, resolve_href};
use pulldown_cmark::{Event, Parser, Tag};

use crate::AuditError;
use crate::scan::DocFile;

/// A relative link that resolved to no known document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrokenLink {
    /// Document containing the link.
    pub file: PathBuf,
    /// The href as written in the source.
    pub href: String,
    /// The deterministic fallback path the resolver computed.
    pub resolved: String,
}

/// Extract every link destination from a markdown document.
#[must_use]
pub fn extract_links(markdown: &str) -> Vec<String> {
    Parser::new(markdown)
        .filter_map(|event| match event {
            Event::Start(Tag::Link { dest_url, .. }) => Some(dest_url.into_string()),
            _ => None,
        })
        .collect()
}

/// Check every relative link in the scanned documents against the slug set.
///
/// Unresolvable links are collected, never fatal: one broken link degrades
/// one report line, not the build.
pub fn check_links(docs: &[DocFile], slugs: &SlugSet) -> Result<Vec<BrokenLink>, AuditError> {
    let mut broken = Vec::new();

    for doc in docs {
        let markdown = fs::read_to_string(&doc.path)?;
        let site_path = doc.site_path();

        for href in extract_links(&markdown) {
            if !is_relative_link(&href) {
                continue;
            }
            let link = resolve_href(&href, &site_path, slugs);
            if !link.found {
                tracing::warn!(file = %doc.path.display(), href = %href, "Broken link");
                broken.push(BrokenLink {
                    file: doc.path.clone(),
                    href,
                    resolved: link.href,
                });
            }
        }
    }

    Ok(broken)
}
