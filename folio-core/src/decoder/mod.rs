//! Decoders for reading the input representations into a Book

mod binary;
mod json;
mod markup;

pub use binary::{decode_binary, BinaryDecoder};
pub use json::JsonDecoder;
pub use markup::{compile_markup, MarkupCompiler, DEFAULT_PAGE_HEIGHT, DEFAULT_WRAP_WIDTH};

pub(crate) use binary::layout;

use crate::error::ParseError;
use crate::types::Book;
use std::fmt;
use std::io::Read;
use std::str::FromStr;

/// Trait for decoding an input representation into a Book
pub trait Decoder {
    /// Decode a book from a reader
    fn decode(&self, reader: &mut dyn Read) -> Result<Book, ParseError>;

    /// File extensions this decoder supports
    fn supported_extensions(&self) -> &[&str];
}

/// Representations a book can be read from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Binary,
    Json,
    Markup,
}

impl InputFormat {
    /// Pick the format for a file extension
    ///
    /// The game ships its books as `.TXT` binaries, so anything that is not
    /// JSON or markup is read as a binary record.
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "json" => InputFormat::Json,
            "md" | "markup" => InputFormat::Markup,
            _ => InputFormat::Binary,
        }
    }

    /// Decode a book in this format from a reader
    pub fn decode(self, reader: &mut dyn Read) -> Result<Book, ParseError> {
        match self {
            InputFormat::Binary => BinaryDecoder::new().decode(reader),
            InputFormat::Json => JsonDecoder::new().decode(reader),
            InputFormat::Markup => MarkupCompiler::new().decode(reader),
        }
    }
}

impl FromStr for InputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "binary" | "bin" => Ok(InputFormat::Binary),
            "json" => Ok(InputFormat::Json),
            "markup" | "md" => Ok(InputFormat::Markup),
            other => Err(format!(
                "unknown input format '{}' (expected binary, json or markup)",
                other
            )),
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InputFormat::Binary => "binary",
            InputFormat::Json => "json",
            InputFormat::Markup => "markup",
        };
        f.write_str(name)
    }
}
