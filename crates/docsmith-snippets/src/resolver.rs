//! Snippet reference expansion over code blocks.

use std::fs;
use std::path::PathBuf;

use crate::ast::Node;
use crate::reference::{SnippetRef, parse_reference};
use crate::section::extract_section;

/// Expands snippet references inside fenced code blocks.
///
/// Reference paths are resolved against a configured base directory and read
/// synchronously. A missing file or section degrades to a placeholder comment
/// plus a warning; it never aborts the document.
///
/// Warnings are collected on the resolver and also emitted through
/// `tracing::warn!` so the build surfaces them without extra plumbing.
pub struct SnippetResolver {
    base_dir: PathBuf,
    warnings: Vec<String>,
}

impl SnippetResolver {
    /// Create a resolver that loads snippets relative to `base_dir`.
    #[must_use]
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            warnings: Vec::new(),
        }
    }

    /// Warnings generated while expanding references.
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Expand every snippet reference in a code block's content.
    ///
    /// The block's trimmed content is processed line by line: reference lines
    /// are replaced with resolved file or section content, all other lines
    /// pass through unchanged. Returns `None` when the block contains no
    /// references, so untouched blocks are never rewritten.
    pub fn expand_block(&mut self, content: &str) -> Option<String> {
        let mut expanded = false;
        let mut output: Vec<String> = Vec::new();

        for line in content.trim().lines() {
            match parse_reference(line) {
                Some(reference) => {
                    output.push(self.resolve(&reference));
                    expanded = true;
                }
                None => output.push(line.to_owned()),
            }
        }

        expanded.then(|| output.join("\n"))
    }

    /// Walk a document tree and expand references in every code block.
    pub fn process_tree(&mut self, tree: &mut Node) {
        tree.visit_code_blocks(&mut |block| {
            if let Some(expanded) = self.expand_block(&block.value) {
                block.value = expanded;
            }
        });
    }

    /// Resolve a single reference to its replacement text.
    fn resolve(&mut self, reference: &SnippetRef) -> String {
        let full_path = self.base_dir.join(&reference.path);
        let source = match fs::read_to_string(&full_path) {
            Ok(source) => source,
            Err(e) => {
                tracing::warn!(path = %reference.path, error = %e, "Failed to load snippet");
                self.warnings
                    .push(format!("failed to load snippet from {}", reference.path));
                return format!("// Failed to load snippet from {}", reference.path);
            }
        };

        let Some(name) = &reference.section else {
            return source.trim().to_owned();
        };

        match extract_section(&source, name) {
            Some(section) => {
                if !section.terminated {
                    tracing::warn!(
                        path = %reference.path,
                        section = %name,
                        "Section has no end marker, captured through end of file"
                    );
                    self.warnings.push(format!(
                        "section \"{name}\" in {} has no end marker",
                        reference.path
                    ));
                }
                section.text
            }
            None => {
                tracing::warn!(path = %reference.path, section = %name, "Section not found");
                self.warnings.push(format!(
                    "section \"{name}\" not found in {}",
                    reference.path
                ));
                format!("// Section \"{name}\" not found in {}", reference.path)
            }
        }
    }
}
