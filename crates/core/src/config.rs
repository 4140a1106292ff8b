//! Configuration for the diff engine

use crate::tokenizers::Tokenizer;

/// Alignment algorithm selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignmentKind {
    /// LCS dynamic-programming alignment (default, canonical)
    Lcs,
    /// Greedy positional walk (low quality; degradation tier only)
    Greedy,
}

impl Default for AlignmentKind {
    fn default() -> Self {
        Self::Lcs
    }
}

/// What to do when an input exceeds the token ceiling
///
/// The LCS tier is quadratic in time and space, so unbounded inputs must not
/// reach it. Degrading keeps `diff` total; rejecting surfaces the condition to
/// callers that would rather show a size-limit error than a poor alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverflowPolicy {
    /// Fall back to the greedy tier for this call (default)
    DegradeToGreedy,
    /// Refuse the input; only `try_diff` can observe this as an error
    Reject,
}

impl Default for OverflowPolicy {
    fn default() -> Self {
        Self::DegradeToGreedy
    }
}

/// Configuration for diff computation
pub struct DiffConfig {
    /// Algorithm to use for alignment
    pub algorithm: AlignmentKind,

    /// Tokenizer to use (word tokenizer when unset)
    pub tokenizer: Option<Box<dyn Tokenizer>>,

    /// Maximum tokens per side before the overflow policy applies
    pub token_ceiling: Option<usize>,

    /// Policy when the ceiling is exceeded
    pub overflow_policy: OverflowPolicy,

    /// Coalesce adjacent delete/insert pairs into replacements
    pub coalesce_replacements: bool,

    /// Merge adjacent same-kind segments in the output
    pub merge_segments: bool,
}

/// Default per-side token ceiling
///
/// Past this point the quadratic table stops being interactive-friendly and a
/// linear-space algorithm would be the right tool.
pub const DEFAULT_TOKEN_CEILING: usize = 2000;

impl Default for DiffConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl DiffConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self {
            algorithm: AlignmentKind::default(),
            tokenizer: None,
            token_ceiling: Some(DEFAULT_TOKEN_CEILING),
            overflow_policy: OverflowPolicy::default(),
            coalesce_replacements: true,
            merge_segments: true,
        }
    }

    /// Create a minimal configuration: raw per-token operations, no cleanup
    pub fn minimal() -> Self {
        Self {
            algorithm: AlignmentKind::Lcs,
            tokenizer: None,
            token_ceiling: Some(DEFAULT_TOKEN_CEILING),
            overflow_policy: OverflowPolicy::DegradeToGreedy,
            coalesce_replacements: false,
            merge_segments: false,
        }
    }

    /// Set the alignment algorithm
    pub fn with_algorithm(mut self, algorithm: AlignmentKind) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Set the tokenizer
    pub fn with_tokenizer(mut self, tokenizer: Box<dyn Tokenizer>) -> Self {
        self.tokenizer = Some(tokenizer);
        self
    }

    /// Set the per-side token ceiling (`None` disables the guard)
    pub fn with_token_ceiling(mut self, ceiling: Option<usize>) -> Self {
        self.token_ceiling = ceiling;
        self
    }

    /// Set the overflow policy
    pub fn with_overflow_policy(mut self, policy: OverflowPolicy) -> Self {
        self.overflow_policy = policy;
        self
    }

    /// Enable or disable replacement coalescing
    pub fn with_coalesce_replacements(mut self, enable: bool) -> Self {
        self.coalesce_replacements = enable;
        self
    }

    /// Enable or disable segment merging
    pub fn with_merge_segments(mut self, enable: bool) -> Self {
        self.merge_segments = enable;
        self
    }
}

impl Clone for DiffConfig {
    fn clone(&self) -> Self {
        Self {
            algorithm: self.algorithm,
            tokenizer: self.tokenizer.as_ref().map(|t| t.clone_box()),
            token_ceiling: self.token_ceiling,
            overflow_policy: self.overflow_policy,
            coalesce_replacements: self.coalesce_replacements,
            merge_segments: self.merge_segments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizers::CharacterTokenizer;

    #[test]
    fn test_default_config() {
        let config = DiffConfig::default();
        assert_eq!(config.algorithm, AlignmentKind::Lcs);
        assert_eq!(config.token_ceiling, Some(DEFAULT_TOKEN_CEILING));
        assert_eq!(config.overflow_policy, OverflowPolicy::DegradeToGreedy);
        assert!(config.coalesce_replacements);
        assert!(config.merge_segments);
    }

    #[test]
    fn test_minimal_config() {
        let config = DiffConfig::minimal();
        assert!(!config.coalesce_replacements);
        assert!(!config.merge_segments);
    }

    #[test]
    fn test_builder_pattern() {
        let config = DiffConfig::new()
            .with_algorithm(AlignmentKind::Greedy)
            .with_tokenizer(Box::new(CharacterTokenizer::new()))
            .with_token_ceiling(None)
            .with_overflow_policy(OverflowPolicy::Reject);

        assert_eq!(config.algorithm, AlignmentKind::Greedy);
        assert!(config.tokenizer.is_some());
        assert_eq!(config.token_ceiling, None);
        assert_eq!(config.overflow_policy, OverflowPolicy::Reject);
    }
}
