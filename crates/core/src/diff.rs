//! Diff operation and result types

use crate::segment::Segment;
use crate::span::CharSpan;
use std::fmt;

/// Type of edit operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EditType {
    /// Content is present in both texts
    Equal,
    /// Content is present only in the original
    Delete,
    /// Content is present only in the suggestion
    Insert,
    /// Adjacent delete + insert coalesced for presentation
    Replace,
}

/// A single diff operation over a run of tokens
///
/// Equal operations carry identical text on both sides. Delete carries only
/// original text, Insert only suggested text, Replace both (differing).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffOp {
    /// Type of operation
    pub edit_type: EditType,

    /// Text on the original side (Equal, Delete, Replace)
    pub original_text: Option<String>,

    /// Text on the suggested side (Equal, Insert, Replace)
    pub suggested_text: Option<String>,

    /// Byte span in the original text
    pub original_span: Option<CharSpan>,

    /// Byte span in the suggested text
    pub suggested_span: Option<CharSpan>,
}

impl DiffOp {
    pub fn new(edit_type: EditType) -> Self {
        Self {
            edit_type,
            original_text: None,
            suggested_text: None,
            original_span: None,
            suggested_span: None,
        }
    }

    pub fn with_original(mut self, text: String, span: CharSpan) -> Self {
        self.original_text = Some(text);
        self.original_span = Some(span);
        self
    }

    pub fn with_suggested(mut self, text: String, span: CharSpan) -> Self {
        self.suggested_text = Some(text);
        self.suggested_span = Some(span);
        self
    }

    /// Get a human-readable description of this operation
    pub fn description(&self) -> String {
        match self.edit_type {
            EditType::Equal => "Equal".to_string(),
            EditType::Delete => format!(
                "Delete: {:?}",
                self.original_text.as_deref().unwrap_or("")
            ),
            EditType::Insert => format!(
                "Insert: {:?}",
                self.suggested_text.as_deref().unwrap_or("")
            ),
            EditType::Replace => format!(
                "Replace: {:?} -> {:?}",
                self.original_text.as_deref().unwrap_or(""),
                self.suggested_text.as_deref().unwrap_or("")
            ),
        }
    }
}

/// Statistics about the diff
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiffStatistics {
    /// Total bytes in the original text
    pub original_length: usize,

    /// Total bytes in the suggested text
    pub suggested_length: usize,

    /// Number of insert operations
    pub insertions: usize,

    /// Number of delete operations
    pub deletions: usize,

    /// Number of replace operations
    pub replacements: usize,

    /// Number of equal operations
    pub unchanged: usize,

    /// Tokens in the original sequence
    pub original_tokens: usize,

    /// Tokens in the suggested sequence
    pub suggested_tokens: usize,

    /// Fraction of operations that changed something (0.0 to 1.0)
    pub change_ratio: f64,
}

impl DiffStatistics {
    pub fn new(original_length: usize, suggested_length: usize) -> Self {
        Self {
            original_length,
            suggested_length,
            ..Default::default()
        }
    }

    /// Recompute the change ratio from the operation counts
    pub fn calculate_change_ratio(&mut self) {
        let changed = self.insertions + self.deletions + self.replacements;
        let total = changed + self.unchanged;

        self.change_ratio = if total > 0 {
            changed as f64 / total as f64
        } else {
            0.0
        };
    }
}

/// Complete diff result
///
/// Carries the raw operation list, derived statistics, and the two parallel
/// annotated segment sequences a renderer consumes.
#[derive(Debug, Clone)]
pub struct DiffResult {
    /// List of all diff operations
    pub operations: Vec<DiffOp>,

    /// Statistics about the diff
    pub statistics: DiffStatistics,

    /// Original text annotated with removed spans
    pub original_segments: Vec<Segment>,

    /// Suggested text annotated with added spans
    pub suggested_segments: Vec<Segment>,

    /// Original input text
    pub original_text: String,

    /// Suggested input text
    pub suggested_text: String,
}

impl DiffResult {
    pub fn new(original_text: String, suggested_text: String) -> Self {
        let statistics = DiffStatistics::new(original_text.len(), suggested_text.len());

        Self {
            operations: Vec::new(),
            statistics,
            original_segments: Vec::new(),
            suggested_segments: Vec::new(),
            original_text,
            suggested_text,
        }
    }

    /// Add an operation to the diff, updating counts
    pub fn add_operation(&mut self, op: DiffOp) {
        match op.edit_type {
            EditType::Insert => self.statistics.insertions += 1,
            EditType::Delete => self.statistics.deletions += 1,
            EditType::Replace => self.statistics.replacements += 1,
            EditType::Equal => self.statistics.unchanged += 1,
        }

        self.operations.push(op);
    }

    /// Finalize the result (calculate derived values)
    pub fn finalize(&mut self) {
        self.statistics.calculate_change_ratio();
    }

    /// Check if the diff is empty (no changes)
    pub fn is_empty(&self) -> bool {
        self.operations
            .iter()
            .all(|op| op.edit_type == EditType::Equal)
    }

    /// Get only the changed operations (exclude Equal)
    pub fn changed_operations(&self) -> Vec<&DiffOp> {
        self.operations
            .iter()
            .filter(|op| op.edit_type != EditType::Equal)
            .collect()
    }

    /// Get a summary of the diff
    pub fn summary(&self) -> String {
        format!(
            "Diff Summary: {} insertions, {} deletions, {} replacements. Changed: {:.1}%",
            self.statistics.insertions,
            self.statistics.deletions,
            self.statistics.replacements,
            self.statistics.change_ratio * 100.0
        )
    }
}

impl fmt::Display for DiffResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Diff Result ===")?;
        writeln!(f, "{}", self.summary())?;
        writeln!(f, "\nOperations:")?;

        for (i, op) in self.operations.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, op.description())?;
        }

        Ok(())
    }
}
