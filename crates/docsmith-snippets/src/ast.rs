//! Minimal block-tree shape supplied by the host content pipeline.
//!
//! The site generator parses each document into a tree of block nodes. The
//! snippet resolver only cares about fenced code blocks; everything else is
//! opaque. The tree is owned by the host; the resolver mutates code-block
//! values in place and retains no references.

/// A fenced code block node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeBlock {
    /// Language tag from the fence info string. Preserved, never interpreted.
    pub lang: Option<String>,
    /// Raw text content. Rewritten in place when references expand.
    pub value: String,
}

/// One node of a parsed document tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// A fenced code block.
    Code(CodeBlock),
    /// A container block with children (root, list items, quotes).
    Container(Vec<Node>),
    /// Any other leaf block. Never touched.
    Other,
}

impl Node {
    /// Visit every code block in the tree depth-first.
    pub fn visit_code_blocks<F: FnMut(&mut CodeBlock)>(&mut self, visit: &mut F) {
        match self {
            Node::Code(block) => visit(block),
            Node::Container(children) => {
                for child in children {
                    child.visit_code_blocks(visit);
                }
            }
            Node::Other => {}
        }
    }
}
