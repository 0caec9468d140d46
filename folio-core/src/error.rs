//! Error types for Folio Core

use thiserror::Error;

/// Result type alias using FolioError
pub type Result<T> = std::result::Result<T, FolioError>;

/// Top-level error type for all Folio operations
#[derive(Debug, Error)]
pub enum FolioError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Conversion error: {0}")]
    Conversion(#[from] ConversionError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that occur while reading one of the input representations
#[derive(Debug, Error)]
pub enum ParseError {
    /// The buffer ends before a structure it declares
    #[error("Truncated input: {context} (needed {needed} bytes, buffer has {actual})")]
    TruncatedInput {
        context: String,
        needed: usize,
        actual: usize,
    },

    /// Markup source without the title and author lines
    #[error("Malformed markup: {0}")]
    MalformedMarkup(String),

    /// A `%` code that is unknown or ends the line
    #[error("Malformed format code at line {line}, column {column}: {}", describe_code(.found))]
    MalformedFormatCode {
        line: usize,
        column: usize,
        found: Option<char>,
    },

    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

fn describe_code(found: &Option<char>) -> String {
    match found {
        Some(c) => format!("unknown code '%{}'", c),
        None => "'%' at end of line".to_string(),
    }
}

/// Errors that occur when a book cannot be written to the target format
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("Field {field} is {len} bytes long, at most {max} fit")]
    FieldTooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },

    #[error("Character {ch:?} (U+{:04X}) in {context} has no text byte in the book encoding", u32::from(*.ch))]
    EncodingRange { ch: char, context: String },

    #[error("Encoding failed: {0}")]
    EncodingFailed(String),
}
