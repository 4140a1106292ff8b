//! Text tokenizers
//!
//! Provides the `Tokenizer` trait and the built-in implementations for
//! splitting input text into comparison units. Tokenization here is lossless:
//! concatenating the `text` of every token, in order, reproduces the input
//! string exactly. Nothing is normalized, trimmed, or dropped, which is what
//! lets the diff output round-trip back to both inputs.

use crate::span::CharSpan;

/// Kind of comparison unit a token represents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A maximal run of non-whitespace characters
    Word,
    /// A maximal run of whitespace characters
    Whitespace,
    /// A single character (character-granularity tokenization)
    Character,
}

/// Represents a single token with its position in the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token text, an exact substring of the input
    pub text: String,

    /// Byte span in the input text
    pub span: CharSpan,

    /// Token index in the sequence
    pub index: usize,

    /// What kind of run this token is
    pub kind: TokenKind,
}

impl Token {
    pub fn new(text: String, span: CharSpan, index: usize, kind: TokenKind) -> Self {
        Self {
            text,
            span,
            index,
            kind,
        }
    }

    pub fn is_whitespace(&self) -> bool {
        self.kind == TokenKind::Whitespace
    }
}

/// Trait for tokenizers that split text into tokens
///
/// Implementations must be total (any string tokenizes without error) and
/// lossless (joining all token texts in order yields the input unchanged).
pub trait Tokenizer: Send + Sync {
    /// Tokenize the input text
    fn tokenize(&self, text: &str) -> Vec<Token>;

    /// Get the name of this tokenizer
    fn name(&self) -> &str;

    /// Clone this tokenizer into a Box
    fn clone_box(&self) -> Box<dyn Tokenizer>;
}

impl Clone for Box<dyn Tokenizer> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

// ============================================================================
// Built-in Tokenizers
// ============================================================================

/// Word tokenizer: alternating maximal runs of whitespace and non-whitespace
///
/// `"the cat"` becomes `["the", " ", "cat"]`. Whitespace runs are real tokens
/// and compare by exact equality, so one space is never equal to two spaces.
#[derive(Debug, Clone, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut current_start = 0;
        let mut current_kind: Option<TokenKind> = None;

        for (pos, ch) in text.char_indices() {
            let kind = if ch.is_whitespace() {
                TokenKind::Whitespace
            } else {
                TokenKind::Word
            };

            match current_kind {
                None => {
                    current_start = pos;
                    current_kind = Some(kind);
                }
                Some(prev) if prev == kind => {
                    // Continue current run
                }
                Some(prev) => {
                    let index = tokens.len();
                    tokens.push(Token::new(
                        text[current_start..pos].to_string(),
                        CharSpan::new(current_start, pos),
                        index,
                        prev,
                    ));
                    current_start = pos;
                    current_kind = Some(kind);
                }
            }
        }

        // Emit final run
        if let Some(kind) = current_kind {
            let index = tokens.len();
            tokens.push(Token::new(
                text[current_start..].to_string(),
                CharSpan::new(current_start, text.len()),
                index,
                kind,
            ));
        }

        tokens
    }

    fn name(&self) -> &str {
        "word"
    }

    fn clone_box(&self) -> Box<dyn Tokenizer> {
        Box::new(self.clone())
    }
}

/// Character-level tokenizer (every character is its own token)
///
/// Finer-grained than `WordTokenizer` and proportionally more expensive to
/// align; intended for short inputs where intra-word edits matter.
#[derive(Debug, Clone, Default)]
pub struct CharacterTokenizer;

impl CharacterTokenizer {
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for CharacterTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        text.char_indices()
            .enumerate()
            .map(|(index, (pos, ch))| {
                Token::new(
                    ch.to_string(),
                    CharSpan::new(pos, pos + ch.len_utf8()),
                    index,
                    TokenKind::Character,
                )
            })
            .collect()
    }

    fn name(&self) -> &str {
        "character"
    }

    fn clone_box(&self) -> Box<dyn Tokenizer> {
        Box::new(self.clone())
    }
}
