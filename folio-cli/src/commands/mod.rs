//! CLI command implementations

mod convert;
mod info;
mod validate;

pub use convert::convert;
pub use info::info;
pub use validate::validate;

use anyhow::{Context, Result};
use folio_core::{Book, InputFormat};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Path that stands for stdin or stdout
pub(crate) const STDIO: &str = "-";

/// Lowercased extension of a path, if it has one
pub(crate) fn extension(path: &str) -> Option<String> {
    Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
}

/// Read and decode a book, guessing the format from the extension when not given
pub(crate) fn read_book(input: &str, from: Option<InputFormat>) -> Result<(Book, InputFormat)> {
    let format = from.unwrap_or_else(|| {
        extension(input)
            .map(|ext| InputFormat::from_extension(&ext))
            .unwrap_or(InputFormat::Binary)
    });

    let mut reader: Box<dyn Read> = if input == STDIO {
        Box::new(io::stdin().lock())
    } else {
        let file =
            File::open(input).with_context(|| format!("Failed to open input file: {}", input))?;
        Box::new(BufReader::new(file))
    };

    let book = format
        .decode(&mut reader)
        .with_context(|| format!("Failed to decode {} as {}", input, format))?;

    tracing::debug!(
        "Decoded '{}' ({}) with {} pages",
        book.title,
        format,
        book.pages.len()
    );
    Ok((book, format))
}
