//! Docs-tree scanning, snippet expansion, and link checking.
//!
//! Drives the two resolvers over a real documentation source tree:
//!
//! - [`scan_docs`] walks the content root and derives the slug for every
//!   markdown document, from which [`slug_set`] builds the per-build
//!   [`SlugSet`](docsmith_links::SlugSet).
//! - [`check_links`] extracts links from each document and reports relative
//!   links that resolve to no known document.
//! - [`expand_markdown`] rewrites snippet references inside the fenced code
//!   blocks of a whole markdown document.

mod expand;
mod fence;
mod links;
mod scan;

use std::path::PathBuf;

pub use expand::expand_markdown;
pub use links::{BrokenLink, check_links, extract_links};
pub use scan::{DocFile, scan_docs, slug_set};

/// Error from audit operations.
#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    /// I/O error reading a document.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Directory walk error.
    #[error("walk error: {0}")]
    Walk(#[from] ignore::Error),
    /// Source directory missing or not a directory.
    #[error("source directory not found: {}", .0.display())]
    SourceDirNotFound(PathBuf),
}
