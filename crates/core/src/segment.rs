//! Render-facing annotated segments
//!
//! A diff is projected onto two parallel segment sequences: the original text
//! with deletions marked `Removed`, the suggestion with insertions marked
//! `Added`, and unchanged spans marked in both. Joining the `text` of one
//! side's segments, in order, reproduces that side's input string exactly.
//! Segments are display-only; they are never fed back into the algorithm.

use crate::diff::{DiffOp, EditType};

/// How a segment should be styled by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SegmentKind {
    /// Present in both texts
    Unchanged,
    /// Present only in the suggestion
    Added,
    /// Present only in the original
    Removed,
}

/// One annotated run of text on one side of the comparison
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    /// Rendering kind
    pub kind: SegmentKind,
    /// Exact substring of that side's input
    pub text: String,
}

impl Segment {
    pub fn new(kind: SegmentKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn unchanged(text: impl Into<String>) -> Self {
        Self::new(SegmentKind::Unchanged, text)
    }

    pub fn added(text: impl Into<String>) -> Self {
        Self::new(SegmentKind::Added, text)
    }

    pub fn removed(text: impl Into<String>) -> Self {
        Self::new(SegmentKind::Removed, text)
    }
}

/// Project diff operations onto the two annotated sides
///
/// Equal emits an `Unchanged` segment on both sides, Delete a `Removed`
/// segment on the original side only, Insert an `Added` segment on the
/// suggested side only. Replace contributes one segment to each side. When
/// `merge` is set, adjacent segments of the same kind on the same side are
/// folded into one; this changes nothing about the joined text.
pub fn project(ops: &[DiffOp], merge: bool) -> (Vec<Segment>, Vec<Segment>) {
    let mut original = Vec::new();
    let mut suggested = Vec::new();

    for op in ops {
        match op.edit_type {
            EditType::Equal => {
                let text = op.original_text.clone().unwrap_or_default();
                push_segment(&mut original, Segment::unchanged(text.clone()), merge);
                push_segment(&mut suggested, Segment::unchanged(text), merge);
            }
            EditType::Delete => {
                let text = op.original_text.clone().unwrap_or_default();
                push_segment(&mut original, Segment::removed(text), merge);
            }
            EditType::Insert => {
                let text = op.suggested_text.clone().unwrap_or_default();
                push_segment(&mut suggested, Segment::added(text), merge);
            }
            EditType::Replace => {
                let removed = op.original_text.clone().unwrap_or_default();
                let added = op.suggested_text.clone().unwrap_or_default();
                push_segment(&mut original, Segment::removed(removed), merge);
                push_segment(&mut suggested, Segment::added(added), merge);
            }
        }
    }

    (original, suggested)
}

fn push_segment(side: &mut Vec<Segment>, segment: Segment, merge: bool) {
    if segment.text.is_empty() {
        return;
    }

    if merge {
        if let Some(last) = side.last_mut() {
            if last.kind == segment.kind {
                last.text.push_str(&segment.text);
                return;
            }
        }
    }

    side.push(segment);
}

/// Join one side's segment texts back into a single string
pub fn join_side(segments: &[Segment]) -> String {
    segments.iter().map(|s| s.text.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::CharSpan;

    fn equal(text: &str) -> DiffOp {
        DiffOp::new(EditType::Equal)
            .with_original(text.to_string(), CharSpan::new(0, text.len()))
            .with_suggested(text.to_string(), CharSpan::new(0, text.len()))
    }

    fn delete(text: &str) -> DiffOp {
        DiffOp::new(EditType::Delete).with_original(text.to_string(), CharSpan::new(0, text.len()))
    }

    fn insert(text: &str) -> DiffOp {
        DiffOp::new(EditType::Insert).with_suggested(text.to_string(), CharSpan::new(0, text.len()))
    }

    #[test]
    fn test_project_sides() {
        let ops = vec![equal("the "), delete("cat"), insert("dog"), equal(" sat")];
        let (original, suggested) = project(&ops, false);

        assert_eq!(
            original,
            vec![
                Segment::unchanged("the "),
                Segment::removed("cat"),
                Segment::unchanged(" sat"),
            ]
        );
        assert_eq!(
            suggested,
            vec![
                Segment::unchanged("the "),
                Segment::added("dog"),
                Segment::unchanged(" sat"),
            ]
        );
    }

    #[test]
    fn test_merge_adjacent_same_kind() {
        let ops = vec![delete("a"), delete(" "), delete("b"), equal("c")];

        let (merged, _) = project(&ops, true);
        assert_eq!(
            merged,
            vec![Segment::removed("a b"), Segment::unchanged("c")]
        );

        let (unmerged, _) = project(&ops, false);
        assert_eq!(unmerged.len(), 4);
    }

    #[test]
    fn test_merge_preserves_join() {
        let ops = vec![delete("a"), delete("b"), insert("x"), equal("y")];

        let (orig_merged, sugg_merged) = project(&ops, true);
        let (orig_plain, sugg_plain) = project(&ops, false);

        assert_eq!(join_side(&orig_merged), join_side(&orig_plain));
        assert_eq!(join_side(&sugg_merged), join_side(&sugg_plain));
    }

    #[test]
    fn test_replace_contributes_both_sides() {
        let op = DiffOp::new(EditType::Replace)
            .with_original("cat".to_string(), CharSpan::new(4, 7))
            .with_suggested("dog".to_string(), CharSpan::new(4, 7));

        let (original, suggested) = project(&[op], true);
        assert_eq!(original, vec![Segment::removed("cat")]);
        assert_eq!(suggested, vec![Segment::added("dog")]);
    }

    #[test]
    fn test_empty_text_emits_nothing() {
        let (original, suggested) = project(&[], true);
        assert!(original.is_empty());
        assert!(suggested.is_empty());
    }
}
