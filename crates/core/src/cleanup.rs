//! Presentation cleanup over raw diff operations
//!
//! The alignment tiers emit one operation per token. For display that is
//! noisy: a substituted word shows up as a Delete immediately followed by an
//! Insert, and a run of consecutive deletions shows up as many tiny removed
//! spans. This pass merges consecutive operations of the same type and
//! coalesces an adjacent delete/insert pair into a single Replace. It is
//! purely presentational: the underlying token partition is untouched and the
//! per-side joined text is identical before and after.

use crate::diff::{DiffOp, EditType};
use crate::span::CharSpan;

/// Merge runs of consecutive same-type operations into one operation each
///
/// Texts concatenate in order; spans widen to cover the run.
pub fn merge_runs(ops: Vec<DiffOp>) -> Vec<DiffOp> {
    let mut merged: Vec<DiffOp> = Vec::with_capacity(ops.len());

    for op in ops {
        match merged.last_mut() {
            Some(last) if last.edit_type == op.edit_type => {
                append_side(
                    &mut last.original_text,
                    &mut last.original_span,
                    op.original_text,
                    op.original_span,
                );
                append_side(
                    &mut last.suggested_text,
                    &mut last.suggested_span,
                    op.suggested_text,
                    op.suggested_span,
                );
            }
            _ => merged.push(op),
        }
    }

    merged
}

/// Coalesce adjacent Delete + Insert pairs into Replace operations
///
/// Runs are merged first, so after this pass every mismatch region is exactly
/// one Replace (or a lone Delete / Insert when only one side changed).
pub fn coalesce_replacements(ops: Vec<DiffOp>) -> Vec<DiffOp> {
    let merged = merge_runs(ops);
    let mut out: Vec<DiffOp> = Vec::with_capacity(merged.len());

    for op in merged {
        if op.edit_type == EditType::Insert {
            if let Some(last) = out.last_mut() {
                if last.edit_type == EditType::Delete {
                    last.edit_type = EditType::Replace;
                    last.suggested_text = op.suggested_text;
                    last.suggested_span = op.suggested_span;
                    continue;
                }
            }
        }
        out.push(op);
    }

    out
}

fn append_side(
    text: &mut Option<String>,
    span: &mut Option<CharSpan>,
    more_text: Option<String>,
    more_span: Option<CharSpan>,
) {
    if let Some(more) = more_text {
        match text {
            Some(existing) => existing.push_str(&more),
            None => *text = Some(more),
        }
    }
    if let Some(more) = more_span {
        *span = Some(match span {
            Some(existing) => existing.cover(more),
            None => more,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::{Alignment, LcsAlignment};
    use crate::tokenizers::{Tokenizer, WordTokenizer};

    fn raw_ops(original: &str, suggested: &str) -> Vec<DiffOp> {
        let tokenizer = WordTokenizer::new();
        LcsAlignment::new().align(&tokenizer.tokenize(original), &tokenizer.tokenize(suggested))
    }

    fn join_original(ops: &[DiffOp]) -> String {
        ops.iter()
            .filter_map(|op| op.original_text.as_deref())
            .collect()
    }

    fn join_suggested(ops: &[DiffOp]) -> String {
        ops.iter()
            .filter_map(|op| op.suggested_text.as_deref())
            .collect()
    }

    #[test]
    fn test_merge_runs_concatenates() {
        let ops = merge_runs(raw_ops("a b c", ""));

        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].edit_type, EditType::Delete);
        assert_eq!(ops[0].original_text.as_deref(), Some("a b c"));
        assert_eq!(ops[0].original_span, Some(CharSpan::new(0, 5)));
    }

    #[test]
    fn test_substitution_becomes_replace() {
        let ops = coalesce_replacements(raw_ops("the cat sat", "the dog sat"));

        let replace = ops
            .iter()
            .find(|op| op.edit_type == EditType::Replace)
            .expect("expected a replace op");
        assert_eq!(replace.original_text.as_deref(), Some("cat"));
        assert_eq!(replace.suggested_text.as_deref(), Some("dog"));
    }

    #[test]
    fn test_lone_delete_stays_delete() {
        let ops = coalesce_replacements(raw_ops("a b c", "a c"));

        assert!(ops.iter().any(|op| op.edit_type == EditType::Delete));
        assert!(!ops.iter().any(|op| op.edit_type == EditType::Replace));
    }

    #[test]
    fn test_cleanup_preserves_joined_text() {
        let original = "one two three four";
        let suggested = "one 2 three five four six";
        let raw = raw_ops(original, suggested);
        let cleaned = coalesce_replacements(raw);

        assert_eq!(join_original(&cleaned), original);
        assert_eq!(join_suggested(&cleaned), suggested);
    }

    #[test]
    fn test_equal_runs_also_merge() {
        let ops = merge_runs(raw_ops("same text here", "same text here"));

        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].edit_type, EditType::Equal);
        assert_eq!(ops[0].original_text.as_deref(), Some("same text here"));
    }
}
