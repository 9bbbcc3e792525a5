use std::fmt;

use thiserror::Error;

/// Classifies trie decoding failures for programmatic matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrieErrorKind {
    /// A node label ran to the end of the text without a delimiter
    UnexpectedEnd,
    /// The text ended after a child node before the end-of-siblings marker
    UnterminatedChildren,
    /// The same suffix was emitted twice
    DuplicateEntry,
    /// Nodes nested deeper than the decoder allows
    DepthExceeded,
    /// A trie bundle carries data after its last table
    TrailingData,
}

impl fmt::Display for TrieErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TrieErrorKind::UnexpectedEnd => "unexpected end of text",
            TrieErrorKind::UnterminatedChildren => "child list not terminated",
            TrieErrorKind::DuplicateEntry => "duplicate entry",
            TrieErrorKind::DepthExceeded => "nesting too deep",
            TrieErrorKind::TrailingData => "data after the last table",
        };
        f.write_str(text)
    }
}

/// Classifies loader errors for programmatic matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadErrorKind {
    /// Required path or format not configured
    NotConfigured,
    /// Format could not be detected from the path
    UnknownFormat,
    /// File open/read failure
    FileError,
    /// A process-wide list is already installed
    AlreadyInstalled,
}

/// Public suffix error types
#[derive(Error, Debug)]
pub enum SuffixError {
    #[error("Malformed trie data at offset {offset}: {kind}")]
    MalformedTrieData { offset: usize, kind: TrieErrorKind },

    #[error("Invalid rule at line {line}: {message}")]
    InvalidRuleAtLine { line: usize, message: String },

    #[error("Invalid rule: {0}")]
    InvalidRule(String),

    #[error("Invalid domain: {0}")]
    InvalidDomain(String),

    #[error("Load error: {message}")]
    LoadError {
        kind: LoadErrorKind,
        message: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl SuffixError {
    pub(crate) fn malformed(offset: usize, kind: TrieErrorKind) -> Self {
        SuffixError::MalformedTrieData { offset, kind }
    }

    pub(crate) fn load(kind: LoadErrorKind, message: impl Into<String>) -> Self {
        SuffixError::LoadError {
            kind,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SuffixError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trie_error_kind_is_matchable() {
        let err = SuffixError::malformed(7, TrieErrorKind::UnterminatedChildren);
        match &err {
            SuffixError::MalformedTrieData { offset, kind } => {
                assert_eq!(*offset, 7);
                assert!(matches!(kind, TrieErrorKind::UnterminatedChildren));
            }
            _ => panic!("expected MalformedTrieData"),
        }
    }

    #[test]
    fn test_malformed_display_includes_offset() {
        let err = SuffixError::malformed(12, TrieErrorKind::UnexpectedEnd);
        let display = format!("{}", err);
        assert!(display.contains("offset 12"), "got: {}", display);
        assert!(display.contains("unexpected end of text"), "got: {}", display);
    }

    #[test]
    fn test_load_error_kind_is_matchable() {
        let err = SuffixError::load(LoadErrorKind::NotConfigured, "path not configured");
        match &err {
            SuffixError::LoadError { kind, message } => {
                assert!(matches!(kind, LoadErrorKind::NotConfigured));
                assert_eq!(message, "path not configured");
            }
            _ => panic!("expected LoadError"),
        }
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: SuffixError = io.into();
        assert!(matches!(err, SuffixError::IoError(_)));
    }
}
