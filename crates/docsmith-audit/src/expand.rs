//! Snippet expansion over whole markdown documents.

use docsmith_snippets::SnippetResolver;

use crate::fence::FenceScanner;

/// Expand snippet references inside every fenced code block of a document.
///
/// Prose and fence delimiter lines pass through untouched; only code-block
/// bodies containing references are rewritten. Returns `None` when no
/// reference was expanded, so unchanged documents are never rewritten.
///
/// An unclosed fence at end of input is still expanded; references inside
/// it are references all the same.
pub fn expand_markdown(resolver: &mut SnippetResolver, input: &str) -> Option<String> {
    let mut scanner = FenceScanner::new();
    let mut output: Vec<String> = Vec::new();
    let mut block: Vec<&str> = Vec::new();
    let mut changed = false;

    for line in input.lines() {
        let was_in_code = scanner.in_code();
        let is_delimiter = scanner.scan(line);

        if was_in_code && !is_delimiter {
            block.push(line);
            continue;
        }
        if was_in_code {
            // Closing fence: expand the collected body, then the delimiter.
            changed |= flush_block(resolver, &mut block, &mut output);
        }
        output.push(line.to_owned());
    }
    changed |= flush_block(resolver, &mut block, &mut output);

    if !changed {
        return None;
    }

    let mut result = output.join("\n");
    if input.ends_with('\n') {
        result.push('\n');
    }
    Some(result)
}

/// Expand one collected block body into the output. Returns whether any
/// reference was expanded.
fn flush_block(
    resolver: &mut SnippetResolver,
    block: &mut Vec<&str>,
    output: &mut Vec<String>,
) -> bool {
    if block.is_empty() {
        return false;
    }
    let body = block.join("\n");
    let expanded = resolver.expand_block(&body);
    match &expanded {
        Some(text) => output.extend(text.lines().map(ToOwned::to_owned)),
        None => output.extend(block.iter().map(|line| (*line).to_owned())),
    }
    block.clear();
    expanded.is_some()
}
