//! Binary book record encoder

use crate::decoder::layout;
use crate::error::ConversionError;
use crate::types::Book;
use byteorder::{ByteOrder, LittleEndian};
use std::io::Write;

/// Encoder producing the game's binary book records
pub struct BinaryEncoder;

impl BinaryEncoder {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BinaryEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl super::Encoder for BinaryEncoder {
    fn encode(&self, book: &Book, writer: &mut dyn Write) -> Result<(), ConversionError> {
        let data = encode_binary(book)?;
        writer
            .write_all(&data)
            .map_err(|e| ConversionError::EncodingFailed(e.to_string()))
    }

    fn format_name(&self) -> &str {
        "Binary"
    }

    fn file_extension(&self) -> &str {
        "txt"
    }
}

/// Encode a book as a complete binary record
pub fn encode_binary(book: &Book) -> Result<Vec<u8>, ConversionError> {
    let page_count = u16::try_from(book.pages.len()).map_err(|_| {
        ConversionError::EncodingFailed(format!(
            "{} pages exceed the page table limit of {}",
            book.pages.len(),
            u16::MAX
        ))
    })?;

    let mut header = [0u8; layout::HEADER_LEN];
    write_text_field(&mut header[layout::TITLE..], "title", &book.title)?;
    write_text_field(&mut header[layout::AUTHOR..], "author", &book.author)?;
    if book.naughty {
        header[layout::NAUGHTY..layout::RESERVED].copy_from_slice(layout::NAUGHTY_MARKER);
    }
    LittleEndian::write_u32(&mut header[layout::PRICE..], book.price);
    for (i, unknown) in book.unknowns.iter().enumerate() {
        LittleEndian::write_u16(&mut header[layout::UNKNOWNS + i * 2..], *unknown);
    }
    LittleEndian::write_u16(&mut header[layout::PAGE_COUNT..], page_count);

    let mut records = Vec::new();
    let mut offsets = vec![0u8; book.pages.len() * layout::OFFSET_LEN];
    let base = layout::HEADER_LEN + offsets.len();

    for (index, page) in book.pages.iter().enumerate() {
        let offset = u32::try_from(base + records.len()).map_err(|_| {
            ConversionError::EncodingFailed(format!("page {} offset exceeds 32 bits", index + 1))
        })?;
        LittleEndian::write_u32(&mut offsets[index * layout::OFFSET_LEN..], offset);

        page.encode_record(&mut records).map_err(|e| match e {
            ConversionError::EncodingRange { ch, context } => ConversionError::EncodingRange {
                ch,
                context: format!("page {}, {}", index + 1, context),
            },
            other => other,
        })?;
    }

    let mut data = Vec::with_capacity(base + records.len());
    data.extend_from_slice(&header);
    data.extend_from_slice(&offsets);
    data.extend_from_slice(&records);

    tracing::debug!(pages = book.pages.len(), bytes = data.len(), "encoded book");
    Ok(data)
}

/// Write an ISO-8859-1 string into a NUL-padded header field
///
/// NUL itself is rejected since the padding would swallow it.
fn write_text_field(
    field: &mut [u8],
    name: &'static str,
    value: &str,
) -> Result<(), ConversionError> {
    let bytes = value
        .chars()
        .map(|ch| {
            u8::try_from(u32::from(ch))
                .ok()
                .filter(|&b| b != 0)
                .ok_or_else(|| ConversionError::EncodingRange {
                    ch,
                    context: name.to_string(),
                })
        })
        .collect::<Result<Vec<u8>, _>>()?;

    if bytes.len() > layout::TEXT_FIELD_LEN {
        return Err(ConversionError::FieldTooLong {
            field: name,
            len: bytes.len(),
            max: layout::TEXT_FIELD_LEN,
        });
    }

    field[..bytes.len()].copy_from_slice(&bytes);
    Ok(())
}
