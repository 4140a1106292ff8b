//! Render a diff the way the review UI does: two annotated columns
//!
//! The engine's segments are render-agnostic; here `removed` and `added`
//! spans are wrapped in ANSI colors instead of CSS classes.

use redraft_core::{compute_diff, Segment, SegmentKind};

fn paint(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|segment| match segment.kind {
            SegmentKind::Unchanged => segment.text.clone(),
            SegmentKind::Removed => format!("\x1b[31;9m{}\x1b[0m", segment.text),
            SegmentKind::Added => format!("\x1b[32m{}\x1b[0m", segment.text),
        })
        .collect()
}

fn main() {
    let original = "The cat sat quietly on the old mat.";
    let suggested = "The dog sat on the brand new mat.";

    let result = compute_diff(original, suggested, None);

    println!("Original:  {}", paint(&result.original_segments));
    println!("Suggested: {}", paint(&result.suggested_segments));
    println!();
    println!("{}", result.summary());
}
