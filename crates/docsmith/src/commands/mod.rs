//! CLI command implementations.

pub(crate) mod check_links;
pub(crate) mod expand;

pub(crate) use check_links::CheckLinksArgs;
pub(crate) use expand::ExpandArgs;
