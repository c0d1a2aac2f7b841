use std::ops::Range;

/// A byte range `[start, end)` into the markdown source.
///
/// Blocks keep spans rather than copied text, so the body renderer can
/// reproduce a block exactly as it was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// The source text covered by this span, or `""` if it does not fit.
    pub fn slice(self, source: &str) -> &str {
        source.get(self.start..self.end).unwrap_or("")
    }

    /// This span with trailing whitespace (including line endings) removed.
    pub fn trimmed_end(self, source: &str) -> Span {
        let trimmed = self.slice(source).trim_end();
        Span {
            start: self.start,
            end: self.start + trimmed.len(),
        }
    }

    /// The source text between the end of `self` and the start of `next`.
    pub fn gap_to(self, next: Span, source: &str) -> &str {
        source.get(self.end..next.start).unwrap_or("")
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }
}
