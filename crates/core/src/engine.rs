//! Main diff engine that orchestrates the diff process

use tracing::{debug, warn};

use crate::algorithm::{Alignment, GreedyAlignment, LcsAlignment};
use crate::cleanup;
use crate::config::{AlignmentKind, DiffConfig, OverflowPolicy};
use crate::diff::DiffResult;
use crate::error::DiffError;
use crate::segment::project;
use crate::tokenizers::{Token, Tokenizer, WordTokenizer};

/// The main diff engine
///
/// A pure function of its two string inputs: synchronous, no I/O, no caching
/// across calls, and deterministic (the same inputs always produce identical
/// output). Callers integrating this into an interactive surface are
/// responsible for debouncing repeated invocations; every call reruns the
/// full computation.
pub struct DiffEngine {
    config: DiffConfig,
}

impl DiffEngine {
    /// Create a new diff engine with the given configuration
    pub fn new(config: DiffConfig) -> Self {
        Self { config }
    }

    /// Create a diff engine with the default configuration
    pub fn default_config() -> Self {
        Self::new(DiffConfig::default())
    }

    /// Compute the diff between the original and the suggested text
    ///
    /// Total: no input is malformed, including empty strings, all-whitespace
    /// strings, and inputs sharing no tokens at all. Markup is not
    /// interpreted; callers diffing raw HTML get its tags compared as
    /// ordinary word tokens.
    ///
    /// When an input exceeds the token ceiling this degrades to the greedy
    /// tier regardless of [`OverflowPolicy`]; use [`try_diff`](Self::try_diff)
    /// to surface the size-limit condition instead.
    pub fn diff(&self, original: &str, suggested: &str) -> DiffResult {
        let original_tokens = self.tokenize(original);
        let suggested_tokens = self.tokenize(suggested);

        let algorithm = self.select_algorithm(original_tokens.len(), suggested_tokens.len());

        self.run(original, suggested, &original_tokens, &suggested_tokens, algorithm)
    }

    /// Compute the diff, honoring [`OverflowPolicy::Reject`]
    pub fn try_diff(&self, original: &str, suggested: &str) -> Result<DiffResult, DiffError> {
        let original_tokens = self.tokenize(original);
        let suggested_tokens = self.tokenize(suggested);

        if self.config.overflow_policy == OverflowPolicy::Reject {
            if let Some(ceiling) = self.config.token_ceiling {
                let tokens = original_tokens.len().max(suggested_tokens.len());
                if tokens > ceiling {
                    return Err(DiffError::InputTooLarge { tokens, ceiling });
                }
            }
        }

        let algorithm = self.select_algorithm(original_tokens.len(), suggested_tokens.len());

        Ok(self.run(original, suggested, &original_tokens, &suggested_tokens, algorithm))
    }

    fn run(
        &self,
        original: &str,
        suggested: &str,
        original_tokens: &[Token],
        suggested_tokens: &[Token],
        algorithm: Box<dyn Alignment>,
    ) -> DiffResult {
        debug!(
            algorithm = algorithm.name(),
            original_tokens = original_tokens.len(),
            suggested_tokens = suggested_tokens.len(),
            "computing diff"
        );

        let mut ops = algorithm.align(original_tokens, suggested_tokens);

        if self.config.coalesce_replacements {
            ops = cleanup::coalesce_replacements(ops);
        }

        let (original_segments, suggested_segments) = project(&ops, self.config.merge_segments);

        let mut result = DiffResult::new(original.to_string(), suggested.to_string());
        result.statistics.original_tokens = original_tokens.len();
        result.statistics.suggested_tokens = suggested_tokens.len();

        for op in ops {
            result.add_operation(op);
        }

        result.original_segments = original_segments;
        result.suggested_segments = suggested_segments;
        result.finalize();

        result
    }

    /// Pick the alignment tier, degrading over the ceiling
    fn select_algorithm(&self, original_tokens: usize, suggested_tokens: usize) -> Box<dyn Alignment> {
        if let Some(ceiling) = self.config.token_ceiling {
            let tokens = original_tokens.max(suggested_tokens);
            if tokens > ceiling {
                warn!(
                    tokens,
                    ceiling, "token ceiling exceeded, degrading to greedy alignment"
                );
                return Box::new(GreedyAlignment::new());
            }
        }

        match self.config.algorithm {
            AlignmentKind::Lcs => Box::new(LcsAlignment::new()),
            AlignmentKind::Greedy => Box::new(GreedyAlignment::new()),
        }
    }

    fn tokenize(&self, text: &str) -> Vec<Token> {
        match &self.config.tokenizer {
            Some(tokenizer) => tokenizer.tokenize(text),
            None => WordTokenizer::new().tokenize(text),
        }
    }
}

impl Default for DiffEngine {
    fn default() -> Self {
        Self::default_config()
    }
}
