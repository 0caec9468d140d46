//! Validate command implementation

use super::read_book;
use anyhow::{bail, Result};
use folio_core::{decode_binary, encode_binary, InputFormat};

/// Validate a book file
///
/// Binary records are also re-encoded and decoded again; the result must
/// match the first decode apart from position overrides, which the record
/// format cannot restate on a page's first line.
pub fn validate(input: &str, from: Option<InputFormat>) -> Result<()> {
    let (book, format) = read_book(input, from)?;

    let encoded = match encode_binary(&book) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Invalid {} book: {}", format, e);
            bail!("Validation failed for {}", input);
        }
    };

    if format == InputFormat::Binary {
        let again = decode_binary(&encoded)?;
        let same_text = again.lines().count() == book.lines().count()
            && again.lines().zip(book.lines()).all(|(a, b)| {
                a.text == b.text && a.alignment == b.alignment && a.font == b.font
            });
        if again.pages.len() != book.pages.len() || !same_text {
            eprintln!("Binary round-trip changed the book content");
            bail!("Validation failed for {}", input);
        }
    }

    println!("Valid {} book", format);
    println!("  Title: {}", book.title);
    println!("  Pages: {}", book.pages.len());
    println!("  Encoded size: {} bytes", encoded.len());

    Ok(())
}
