//! Relative link resolution against the site routing scheme.
//!
//! Documentation pages link to each other with source-relative hrefs like
//! `../tools/custom-tools.md#section`. The site router serves clean URLs
//! (no extensions, `index` collapsed, trailing slashes), so every relative
//! link must be rewritten at build time. Resolution is ambiguous because a
//! document may be rendered as a leaf page or a directory index; the
//! resolver tries both interpretations against the set of known document
//! slugs.
//!
//! Both entry points are pure: the slug set is built once per build and
//! passed by reference, and nothing here touches the file system.
//!
//! # Example
//!
//! ```
//! use docsmith_links::{SlugSet, resolve_href};
//!
//! let slugs: SlugSet = ["user-guide/concepts/tools".to_owned()].into_iter().collect();
//! let link = resolve_href(
//!     "../tools/index.md",
//!     "/user-guide/concepts/agents/state/",
//!     &slugs,
//! );
//! assert_eq!(link.href, "/user-guide/concepts/tools/");
//! assert!(link.found);
//! ```

mod resolve;
mod slug;

pub use resolve::{
    ResolvedLink, find_doc_slug, is_relative_link, normalize_segments, resolve_href,
    resolve_relative_link,
};
pub use slug::{SlugSet, normalize_slug};
