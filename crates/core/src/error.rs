//! Error types
//!
//! The engine itself has no failure modes: any pair of strings is a valid
//! diff input. The only error a caller can observe is the size guard, and
//! only through [`DiffEngine::try_diff`](crate::DiffEngine::try_diff) with
//! [`OverflowPolicy::Reject`](crate::OverflowPolicy::Reject).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiffError {
    /// An input exceeded the configured per-side token ceiling
    #[error("input of {tokens} tokens exceeds the ceiling of {ceiling}")]
    InputTooLarge { tokens: usize, ceiling: usize },
}
