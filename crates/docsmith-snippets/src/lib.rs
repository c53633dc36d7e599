//! Snippet reference expansion for fenced code blocks.
//!
//! Documentation pages embed real source files through mkdocs-style snippet
//! references. A line inside a fenced code block of the form
//!
//! ```text
//! --8<-- "examples/python/agent.py"
//! --8<-- "examples/python/agent.py:basic_usage"
//! ```
//!
//! is replaced with the referenced file's content, or with one named section
//! of it delimited by `--8<-- [start:name]` / `--8<-- [end:name]` marker
//! lines. Sections are dedented so the embedded code starts at column zero.
//!
//! Missing files and missing sections degrade to a single placeholder comment
//! plus a warning; they never fail a build.
//!
//! # Example
//!
//! ```
//! use docsmith_snippets::SnippetResolver;
//!
//! let mut resolver = SnippetResolver::new(".");
//! // Blocks without references are left untouched.
//! assert_eq!(resolver.expand_block("fn main() {}"), None);
//! ```

mod ast;
mod reference;
mod resolver;
mod section;

pub use ast::{CodeBlock, Node};
pub use reference::{SnippetRef, parse_reference};
pub use resolver::SnippetResolver;
pub use section::{Section, extract_section};
