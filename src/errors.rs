//! Error types for indexing and querying.
//!
//! # Error Codes
//!
//! - E001: `InvalidSymbol` (character outside `a-z` / `END`)
//! - E002: `DuplicateEntry` (permuterm already indexed)
//! - E003: `NotFound` (no trie node for a key or prefix)
//! - E004: `UnsupportedPattern` (wildcard layout the resolver cannot rewrite)
//! - E005: `WordTooLong` (word longer than the configured limit)
//! - E006: `Io` (reading a word list failed)
//!
//! Only `Io` is meant to reach a user as a failure. The others are recovered
//! locally: bad or repeated words are skipped while loading, and a lookup that
//! finds nothing returns an empty result.

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("invalid symbol {symbol:?} in \"{input}\"")]
    InvalidSymbol { symbol: char, input: String },

    #[error("duplicate entry \"{entry}\"")]
    DuplicateEntry { entry: String },

    #[error("\"{query}\" not found")]
    NotFound { query: String },

    #[error("unsupported wildcard pattern \"{pattern}\"")]
    UnsupportedPattern { pattern: String },

    #[error("word \"{word}\" is longer than {max} letters")]
    WordTooLong { word: String, max: usize },

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

impl IndexError {
    pub fn code(&self) -> &'static str {
        match self {
            IndexError::InvalidSymbol { .. } => "E001",
            IndexError::DuplicateEntry { .. } => "E002",
            IndexError::NotFound { .. } => "E003",
            IndexError::UnsupportedPattern { .. } => "E004",
            IndexError::WordTooLong { .. } => "E005",
            IndexError::Io(_) => "E006",
        }
    }

    pub fn help(&self) -> Option<&'static str> {
        match self {
            IndexError::InvalidSymbol { .. } => Some("only the letters a-z (any case) and '*' are allowed"),
            IndexError::UnsupportedPattern { .. } =>
                Some("use one '*' anywhere (ab*, *ab, a*b) or two '*' at both ends (*ab*)"),
            IndexError::WordTooLong { .. } => Some("raise max_word_len in the search config"),
            _ => None,
        }
    }

    /// True for the kinds the loader recovers from by skipping the word.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, IndexError::Io(_))
    }
}
