//! Alignment algorithms
//!
//! Provides the `Alignment` trait and the implementations for aligning two
//! token sequences into an ordered list of diff operations. The canonical
//! path is [`lcs::LcsAlignment`]; [`greedy::GreedyAlignment`] exists only as
//! the documented degradation tier for oversized inputs.

pub mod greedy;
pub mod lcs;

pub use greedy::GreedyAlignment;
pub use lcs::LcsAlignment;

use crate::diff::{DiffOp, EditType};
use crate::tokenizers::Token;

/// Trait for alignment algorithms
///
/// An implementation must consume every token of both sequences exactly once,
/// in order: concatenating the original-side texts of the returned operations
/// reproduces the original sequence, and likewise for the suggested side.
pub trait Alignment {
    /// Align two token sequences into diff operations
    fn align(&self, original: &[Token], suggested: &[Token]) -> Vec<DiffOp>;

    /// Get the name of this algorithm
    fn name(&self) -> &str;
}

// ============================================================================
// Shared Helpers
// ============================================================================

pub(crate) fn equal_op(original: &Token, suggested: &Token) -> DiffOp {
    DiffOp::new(EditType::Equal)
        .with_original(original.text.clone(), original.span)
        .with_suggested(suggested.text.clone(), suggested.span)
}

pub(crate) fn delete_op(token: &Token) -> DiffOp {
    DiffOp::new(EditType::Delete).with_original(token.text.clone(), token.span)
}

pub(crate) fn insert_op(token: &Token) -> DiffOp {
    DiffOp::new(EditType::Insert).with_suggested(token.text.clone(), token.span)
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::tokenizers::{Token, Tokenizer, WordTokenizer};

    pub fn tokens(text: &str) -> Vec<Token> {
        WordTokenizer::new().tokenize(text)
    }

    /// Rebuild each side's text from the operations, for round-trip checks
    pub fn rebuild_sides(ops: &[crate::diff::DiffOp]) -> (String, String) {
        let mut original = String::new();
        let mut suggested = String::new();

        for op in ops {
            if let Some(text) = &op.original_text {
                original.push_str(text);
            }
            if let Some(text) = &op.suggested_text {
                suggested.push_str(text);
            }
        }

        (original, suggested)
    }
}
