use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while producing generated Swift sources
#[derive(Error, Debug)]
pub enum CodeGenError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown visibility boilerplate part: '{0}' (expected internal, public or end)")]
    UnknownVisibilityPart(String),

    #[error("Unexpected '{directive}' at line {line}: no open #if region")]
    UnexpectedDirective { line: usize, directive: String },

    #[error("Duplicate #else branch at line {line}")]
    DuplicateElse { line: usize },

    #[error("Unclosed #if region opened at line {line}")]
    UnclosedConditional { line: usize },

    #[error("Failed to write generated file: {path}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type for code generation operations
pub type Result<T> = std::result::Result<T, CodeGenError>;
