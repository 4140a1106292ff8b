//! Longest-common-subsequence alignment
//!
//! The canonical alignment tier. Builds the classic dynamic-programming table
//! of size `(n+1) x (m+1)` over the two token sequences and backtracks from
//! the far corner to recover the alignment. O(n*m) time and space, which is
//! fine for interactive document sizes; inputs past a couple thousand tokens
//! per side should be guarded by the engine's token ceiling (a linear-space
//! variant such as Hirschberg's would lift that limit, but is not implemented).

use super::{delete_op, equal_op, insert_op, Alignment};
use crate::diff::DiffOp;
use crate::tokenizers::Token;

/// LCS-based alignment
///
/// Token equality is exact string equality: case-sensitive and
/// whitespace-sensitive, so a one-space token never matches a two-space token.
///
/// Tie-break: when the backtrack sees equal table values in both neighbors it
/// consumes the original side first. The observable consequence is that within
/// any mismatch region, deletions are emitted before insertions.
#[derive(Debug, Clone, Copy, Default)]
pub struct LcsAlignment;

impl LcsAlignment {
    pub fn new() -> Self {
        Self
    }
}

impl Alignment for LcsAlignment {
    fn align(&self, original: &[Token], suggested: &[Token]) -> Vec<DiffOp> {
        let n = original.len();
        let m = suggested.len();

        if n == 0 {
            return suggested.iter().map(insert_op).collect();
        }
        if m == 0 {
            return original.iter().map(delete_op).collect();
        }

        let matches = lcs_matches(original, suggested);
        build_ops_from_matches(original, suggested, &matches)
    }

    fn name(&self) -> &str {
        "lcs"
    }
}

/// Compute the LCS as a list of matching index pairs, in order
///
/// `table[i][j]` holds the LCS length of the first `i` original tokens and
/// first `j` suggested tokens.
fn lcs_matches(original: &[Token], suggested: &[Token]) -> Vec<(usize, usize)> {
    let n = original.len();
    let m = suggested.len();

    let mut table = vec![vec![0usize; m + 1]; n + 1];

    for i in 1..=n {
        for j in 1..=m {
            if original[i - 1].text == suggested[j - 1].text {
                table[i][j] = table[i - 1][j - 1] + 1;
            } else {
                table[i][j] = table[i - 1][j].max(table[i][j - 1]);
            }
        }
    }

    let mut matches = Vec::with_capacity(table[n][m]);
    let mut i = n;
    let mut j = m;

    while i > 0 && j > 0 {
        if original[i - 1].text == suggested[j - 1].text {
            matches.push((i - 1, j - 1));
            i -= 1;
            j -= 1;
        } else if table[i - 1][j] >= table[i][j - 1] {
            // Tie-break toward the original side (delete first)
            i -= 1;
        } else {
            j -= 1;
        }
    }

    matches.reverse();
    matches
}

/// Emit operations around the matched pairs
///
/// For each match: first the deletions for unmatched original tokens before
/// it, then the insertions for unmatched suggested tokens, then the match
/// itself as Equal. Trailing unmatched tokens follow the same order.
fn build_ops_from_matches(
    original: &[Token],
    suggested: &[Token],
    matches: &[(usize, usize)],
) -> Vec<DiffOp> {
    let mut ops = Vec::new();
    let mut orig_idx = 0;
    let mut sugg_idx = 0;

    for &(match_orig, match_sugg) in matches {
        while orig_idx < match_orig {
            ops.push(delete_op(&original[orig_idx]));
            orig_idx += 1;
        }

        while sugg_idx < match_sugg {
            ops.push(insert_op(&suggested[sugg_idx]));
            sugg_idx += 1;
        }

        ops.push(equal_op(&original[match_orig], &suggested[match_sugg]));
        orig_idx += 1;
        sugg_idx += 1;
    }

    while orig_idx < original.len() {
        ops.push(delete_op(&original[orig_idx]));
        orig_idx += 1;
    }

    while sugg_idx < suggested.len() {
        ops.push(insert_op(&suggested[sugg_idx]));
        sugg_idx += 1;
    }

    ops
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::test_support::{rebuild_sides, tokens};
    use crate::diff::EditType;

    #[test]
    fn test_single_word_substitution() {
        let ops = LcsAlignment::new().align(&tokens("the cat sat"), &tokens("the dog sat"));

        let types: Vec<EditType> = ops.iter().map(|op| op.edit_type).collect();
        assert_eq!(
            types,
            vec![
                EditType::Equal,  // "the"
                EditType::Equal,  // " "
                EditType::Delete, // "cat"
                EditType::Insert, // "dog"
                EditType::Equal,  // " "
                EditType::Equal,  // "sat"
            ]
        );
    }

    #[test]
    fn test_shifted_tail_still_matches() {
        // A single early insertion must not cascade mismatches downstream,
        // which is exactly where the greedy tier falls over.
        let ops = LcsAlignment::new().align(
            &tokens("one two three four"),
            &tokens("zero one two three four"),
        );

        let equal_words: Vec<&str> = ops
            .iter()
            .filter(|op| op.edit_type == EditType::Equal)
            .filter_map(|op| op.original_text.as_deref())
            .filter(|t| !t.trim().is_empty())
            .collect();

        assert_eq!(equal_words, vec!["one", "two", "three", "four"]);
    }

    #[test]
    fn test_empty_original_is_all_insertions() {
        let ops = LcsAlignment::new().align(&tokens(""), &tokens("hello"));

        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].edit_type, EditType::Insert);
        assert_eq!(ops[0].suggested_text.as_deref(), Some("hello"));
    }

    #[test]
    fn test_empty_suggested_is_all_deletions() {
        let ops = LcsAlignment::new().align(&tokens("hello world"), &tokens(""));

        assert_eq!(ops.len(), 3);
        assert!(ops.iter().all(|op| op.edit_type == EditType::Delete));
    }

    #[test]
    fn test_deletions_precede_insertions_in_mismatch_region() {
        let ops = LcsAlignment::new().align(&tokens("a x b"), &tokens("a y b"));

        let first_change = ops
            .iter()
            .position(|op| op.edit_type != EditType::Equal)
            .unwrap();
        assert_eq!(ops[first_change].edit_type, EditType::Delete);
        assert_eq!(ops[first_change + 1].edit_type, EditType::Insert);
    }

    #[test]
    fn test_round_trip() {
        let original = "a b c";
        let suggested = "a c";
        let ops = LcsAlignment::new().align(&tokens(original), &tokens(suggested));

        let (orig, sugg) = rebuild_sides(&ops);
        assert_eq!(orig, original);
        assert_eq!(sugg, suggested);
    }

    #[test]
    fn test_case_sensitive_equality() {
        let ops = LcsAlignment::new().align(&tokens("Hello"), &tokens("hello"));

        assert!(ops.iter().all(|op| op.edit_type != EditType::Equal));
    }

    #[test]
    fn test_whitespace_sensitive_equality() {
        // "a b" vs "a  b": words match, the whitespace run does not.
        let ops = LcsAlignment::new().align(&tokens("a b"), &tokens("a  b"));

        let changed: Vec<EditType> = ops
            .iter()
            .filter(|op| op.edit_type != EditType::Equal)
            .map(|op| op.edit_type)
            .collect();
        assert_eq!(changed, vec![EditType::Delete, EditType::Insert]);
    }

    #[test]
    fn test_no_crossing_matches() {
        let ops = LcsAlignment::new().align(&tokens("b a"), &tokens("a b"));

        // Only one of the two words can survive as a match; order must be
        // monotonic in both sequences.
        let equals = ops
            .iter()
            .filter(|op| op.edit_type == EditType::Equal)
            .filter(|op| {
                op.original_text
                    .as_deref()
                    .is_some_and(|t| !t.trim().is_empty())
            })
            .count();
        assert_eq!(equals, 1);
    }
}
