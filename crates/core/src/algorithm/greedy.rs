//! Greedy positional alignment
//!
//! The documented lower bound on alignment quality, never the primary path.
//! Both sequences are walked with independent cursors: equal tokens at the
//! cursors become Equal, and any mismatch consumes one token from each side as
//! a Delete plus an Insert. O(n) time, but a single early insertion or
//! deletion shifts everything downstream into mismatches. The engine uses it
//! only when the token ceiling rules out the quadratic LCS tier.

use super::{delete_op, equal_op, insert_op, Alignment};
use crate::diff::DiffOp;
use crate::tokenizers::Token;

/// Greedy positional walk
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyAlignment;

impl GreedyAlignment {
    pub fn new() -> Self {
        Self
    }
}

impl Alignment for GreedyAlignment {
    fn align(&self, original: &[Token], suggested: &[Token]) -> Vec<DiffOp> {
        let mut ops = Vec::new();
        let mut orig_idx = 0;
        let mut sugg_idx = 0;

        while orig_idx < original.len() || sugg_idx < suggested.len() {
            match (original.get(orig_idx), suggested.get(sugg_idx)) {
                (Some(orig), Some(sugg)) if orig.text == sugg.text => {
                    ops.push(equal_op(orig, sugg));
                    orig_idx += 1;
                    sugg_idx += 1;
                }
                (orig, sugg) => {
                    if let Some(orig) = orig {
                        ops.push(delete_op(orig));
                        orig_idx += 1;
                    }
                    if let Some(sugg) = sugg {
                        ops.push(insert_op(sugg));
                        sugg_idx += 1;
                    }
                }
            }
        }

        ops
    }

    fn name(&self) -> &str {
        "greedy"
    }
}
