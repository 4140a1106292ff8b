//! # redraft-core
//!
//! A word-level text diffing engine for reviewing AI-suggested rewrites.
//! Given an original text and a suggested rewrite, it computes a
//! minimal-edit alignment and emits two parallel annotated sequences: the
//! original with deletions marked, the suggestion with insertions marked,
//! and unchanged spans identified in both. A side-by-side review UI renders
//! the segments directly.
//!
//! ## Core Concepts
//!
//! - **Tokenizers**: Split text into lossless comparison units (whitespace
//!   and word runs, or single characters)
//! - **Alignment**: LCS dynamic programming as the canonical tier, with a
//!   greedy positional walk as the documented degradation tier for inputs
//!   past the token ceiling
//! - **Segments**: Render-facing `{kind, text}` records; joining one side's
//!   texts reproduces that side's input exactly
//!
//! ## Example
//!
//! ```rust
//! use redraft_core::{DiffEngine, DiffConfig, SegmentKind};
//!
//! let engine = DiffEngine::new(DiffConfig::default());
//! let result = engine.diff("the cat sat", "the dog sat");
//!
//! assert_eq!(result.original_segments[1].kind, SegmentKind::Removed);
//! assert_eq!(result.original_segments[1].text, "cat");
//! assert_eq!(result.suggested_segments[1].text, "dog");
//! ```

pub mod algorithm;
pub mod cleanup;
pub mod config;
pub mod diff;
pub mod engine;
pub mod error;
pub mod segment;
pub mod span;
pub mod tokenizers;

// Re-export main types
pub use algorithm::{Alignment, GreedyAlignment, LcsAlignment};
pub use config::{AlignmentKind, DiffConfig, OverflowPolicy, DEFAULT_TOKEN_CEILING};
pub use diff::{DiffOp, DiffResult, DiffStatistics, EditType};
pub use engine::DiffEngine;
pub use error::DiffError;
pub use segment::{Segment, SegmentKind};
pub use span::CharSpan;
pub use tokenizers::{CharacterTokenizer, Token, TokenKind, Tokenizer, WordTokenizer};

/// Main entry point for computing a diff between two strings
///
/// # Arguments
///
/// * `original` - The text before rewriting
/// * `suggested` - The rewritten text
/// * `config` - Optional configuration (uses default if None)
///
/// # Example
///
/// ```rust
/// use redraft_core::compute_diff;
///
/// let result = compute_diff("hello world", "hello rust", None);
/// println!("{}", result.summary());
/// ```
pub fn compute_diff(original: &str, suggested: &str, config: Option<DiffConfig>) -> DiffResult {
    let config = config.unwrap_or_default();
    let engine = DiffEngine::new(config);
    engine.diff(original, suggested)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_diff() {
        let result = compute_diff("hello world", "hello rust", None);
        assert!(!result.operations.is_empty());
        assert!(!result.is_empty());
    }

    #[test]
    fn test_with_config() {
        let config = DiffConfig::default().with_algorithm(AlignmentKind::Greedy);
        let result = compute_diff("a b", "a b", Some(config));
        assert!(result.is_empty());
    }
}
