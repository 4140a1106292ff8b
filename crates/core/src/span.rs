//! Byte-offset spans into the input text
//!
//! Tokens and diff operations carry spans so that a caller can locate every
//! segment in the string it originally passed in. The tokenizers are lossless,
//! so spans always index the untouched input directly.

/// Represents a span of bytes in text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharSpan {
    /// Start position (inclusive)
    pub start: usize,
    /// End position (exclusive)
    pub end: usize,
}

impl CharSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.start && pos < self.end
    }

    /// Join two spans into the smallest span covering both
    pub fn cover(&self, other: CharSpan) -> CharSpan {
        CharSpan::new(self.start.min(other.start), self.end.max(other.end))
    }
}
