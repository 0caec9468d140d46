//! Convert command implementation

use super::{extension, read_book, STDIO};
use anyhow::{Context, Result};
use folio_core::{InputFormat, OutputFormat};
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Convert a book from one representation to another
pub fn convert(
    input: &str,
    output: &str,
    from: Option<InputFormat>,
    to: Option<OutputFormat>,
) -> Result<()> {
    let format = to.unwrap_or_else(|| match extension(output) {
        Some(ext) => OutputFormat::from_extension(&ext),
        None if output == STDIO => OutputFormat::Text,
        None => OutputFormat::Binary,
    });

    let (book, input_format) = read_book(input, from)?;

    // Encode fully before touching the output so a failure leaves no partial file.
    let mut data = Vec::new();
    format
        .encode(&book, &mut data)
        .with_context(|| format!("Failed to encode to {}", format))?;

    if output == STDIO {
        let mut stdout = io::stdout().lock();
        stdout.write_all(&data)?;
        stdout.flush()?;
    } else {
        let file = File::create(output)
            .with_context(|| format!("Failed to create output file: {}", output))?;
        let mut writer = BufWriter::new(file);
        writer.write_all(&data)?;
        writer.flush()?;
    }

    tracing::info!(
        "Converted '{}' from {} to {} -> {}",
        book.title,
        input_format,
        format.format_name(),
        output
    );

    Ok(())
}
