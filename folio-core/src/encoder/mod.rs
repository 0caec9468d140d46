//! Encoders for writing a Book to the output representations

mod binary;
mod json;
mod markup;
mod text;

pub use binary::{encode_binary, BinaryEncoder};
pub use json::JsonEncoder;
pub use markup::{render_markup, MarkupEncoder};
pub use text::{render_text, TextEncoder};

use crate::error::ConversionError;
use crate::types::Book;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

/// Trait for encoding books to output formats
pub trait Encoder {
    /// Encode a book to a writer
    fn encode(&self, book: &Book, writer: &mut dyn Write) -> Result<(), ConversionError>;

    /// Format name (e.g., "Binary", "JSON")
    fn format_name(&self) -> &str;

    /// File extension for this format
    fn file_extension(&self) -> &str;
}

/// Representations a book can be written to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Binary,
    Json,
    Markup,
    Text,
}

impl OutputFormat {
    /// Pick the format for a file extension, defaulting to a binary record
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            "md" | "markup" => OutputFormat::Markup,
            "lst" => OutputFormat::Text,
            _ => OutputFormat::Binary,
        }
    }

    /// Encode a book in this format to a writer
    pub fn encode(self, book: &Book, writer: &mut dyn Write) -> Result<(), ConversionError> {
        self.encoder().encode(book, writer)
    }

    /// Human-readable format name
    pub fn format_name(self) -> &'static str {
        match self {
            OutputFormat::Binary => "Binary",
            OutputFormat::Json => "JSON",
            OutputFormat::Markup => "Markup",
            OutputFormat::Text => "Text",
        }
    }

    fn encoder(self) -> &'static dyn Encoder {
        match self {
            OutputFormat::Binary => &BinaryEncoder,
            OutputFormat::Json => &JsonEncoder,
            OutputFormat::Markup => &MarkupEncoder,
            OutputFormat::Text => &TextEncoder,
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "binary" | "bin" => Ok(OutputFormat::Binary),
            "json" => Ok(OutputFormat::Json),
            "markup" | "md" => Ok(OutputFormat::Markup),
            "text" | "print" => Ok(OutputFormat::Text),
            other => Err(format!(
                "unknown output format '{}' (expected binary, json, markup or text)",
                other
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_name().to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Line, Page};

    #[test]
    fn test_format_from_extension() {
        assert_eq!(OutputFormat::from_extension("TXT"), OutputFormat::Binary);
        assert_eq!(OutputFormat::from_extension("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::from_extension("md"), OutputFormat::Markup);
        assert_eq!(OutputFormat::from_extension("lst"), OutputFormat::Text);
    }

    #[test]
    fn test_format_from_name() {
        assert_eq!("print".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert_eq!(OutputFormat::Json.to_string(), "json");
        assert!("pdf".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_encode_dispatch() {
        let mut book = Book::new("T", "A");
        let mut page = Page::new();
        page.add_line(Line::new("hello"));
        book.add_page(page);

        let mut out = Vec::new();
        OutputFormat::Binary.encode(&book, &mut out).unwrap();
        assert_eq!(out, encode_binary(&book).unwrap());

        let mut out = Vec::new();
        OutputFormat::Text.encode(&book, &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("|hello"));
    }
}
