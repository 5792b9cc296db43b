//! Extraction errors.

use std::fmt;

use thiserror::Error;

/// The doc comment an error was found in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentBlock {
    /// The file-level block carrying the config tag.
    Config,
    /// The block preceding a style object's declaration.
    Object(String),
}

impl fmt::Display for CommentBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommentBlock::Config => f.write_str("the config block"),
            CommentBlock::Object(name) => write!(f, "the comment block of '{}'", name),
        }
    }
}

/// Error returned when settings cannot be read from a source file.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// A `/**` with no closing `*/`.
    #[error("unterminated doc comment in {block} (line {line})")]
    UnterminatedComment { block: CommentBlock, line: usize },

    /// A value-taking tag such as `@class` written without a value.
    #[error("tag {tag} needs a value in {block}")]
    MissingTagValue { block: CommentBlock, tag: String },

    /// The style pattern does not compile once the object name is filled in.
    #[error("invalid style pattern for {block}: {source}")]
    InvalidPattern {
        block: CommentBlock,
        pattern: String,
        source: regex::Error,
    },

    /// The style pattern has no slot for the object name.
    #[error("style pattern '{pattern}' has no {placeholder} placeholder")]
    MissingPlaceholder {
        pattern: String,
        placeholder: &'static str,
    },

    /// A tag override names a tag kind that does not exist.
    #[error("unknown tag kind '{kind}' (expected one of: {})", crate::Tags::KINDS.join(", "))]
    UnknownTagKind { kind: String },
}

pub type Result<T> = std::result::Result<T, ExtractError>;

/// One-based line number of a byte offset.
pub(crate) fn line_of(source: &str, offset: usize) -> usize {
    source[..offset].matches('\n').count() + 1
}
