//! Whitespace tokenization
//!
//! Corpus text is split into lines, each line into whitespace-separated
//! tokens, and every token is case-folded. Punctuation stays attached to its
//! word ("example!" is one token). Poem input is split the same way but keeps
//! its original casing.

/// A whitespace tokenizer with case folding
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    /// Keep blank lines as empty token lists instead of dropping them
    keep_blank_lines: bool,
}

impl Tokenizer {
    /// Create a new tokenizer with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep blank lines in the output of [`tokenize_lines`](Self::tokenize_lines)
    pub fn with_blank_lines(mut self, keep: bool) -> Self {
        self.keep_blank_lines = keep;
        self
    }

    /// Split corpus text into lines of lowercase tokens
    pub fn tokenize_lines(&self, text: &str) -> Vec<Vec<String>> {
        text.lines()
            .map(|line| line.split_whitespace().map(Self::fold).collect::<Vec<_>>())
            .filter(|tokens| self.keep_blank_lines || !tokens.is_empty())
            .collect()
    }

    /// Split poem input into words, preserving original casing
    pub fn split_words<'a>(&self, input: &'a str) -> Vec<&'a str> {
        input.split_whitespace().collect()
    }

    /// Case-fold a word for graph lookups
    pub fn fold(word: &str) -> String {
        word.to_lowercase()
    }
}
