//! Fence tracking for line-oriented markdown scanning.

/// Tracks fenced-code-block state while scanning a document line by line.
///
/// CommonMark fences open with three or more backticks or tildes; the
/// closing fence must use the same character and be at least as long.
#[derive(Debug, Default)]
pub(crate) struct FenceScanner {
    open: Option<(char, usize)>,
}

impl FenceScanner {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Whether the scanner is currently inside a fenced code block.
    pub(crate) fn in_code(&self) -> bool {
        self.open.is_some()
    }

    /// Advance past one line. Returns `true` when the line is a fence
    /// delimiter (opening or closing).
    pub(crate) fn scan(&mut self, line: &str) -> bool {
        let trimmed = line.trim_start();

        if let Some((marker, min_len)) = self.open {
            if closes_fence(trimmed, marker, min_len) {
                self.open = None;
                return true;
            }
            return false;
        }

        if let Some(opening) = opens_fence(trimmed) {
            self.open = Some(opening);
            return true;
        }
        false
    }
}

/// Detect an opening fence, returning its marker character and length.
fn opens_fence(trimmed: &str) -> Option<(char, usize)> {
    let marker = trimmed.chars().next().filter(|c| *c == '`' || *c == '~')?;
    let len = trimmed.chars().take_while(|c| *c == marker).count();
    (len >= 3).then_some((marker, len))
}

/// A closing fence repeats the opening marker at least `min_len` times and
/// carries nothing but trailing whitespace.
fn closes_fence(trimmed: &str, marker: char, min_len: usize) -> bool {
    let len = trimmed.chars().take_while(|c| *c == marker).count();
    len >= min_len && trimmed[len..].trim().is_empty()
}
