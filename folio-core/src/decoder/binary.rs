//! Binary book record decoder

use crate::error::ParseError;
use crate::types::{Book, Page};
use byteorder::{ByteOrder, LittleEndian};
use std::io::Read;

/// Byte layout of the fixed book header
pub(crate) mod layout {
    pub const TITLE: usize = 0;
    pub const AUTHOR: usize = 64;
    pub const TEXT_FIELD_LEN: usize = 64;
    pub const NAUGHTY: usize = 128;
    pub const NAUGHTY_MARKER: &[u8; 8] = b"naughty ";
    pub const RESERVED: usize = 136;
    pub const PRICE: usize = 224;
    pub const UNKNOWNS: usize = 228;
    pub const PAGE_COUNT: usize = 234;
    pub const HEADER_LEN: usize = 236;
    pub const OFFSET_LEN: usize = 4;
    /// Smallest buffer accepted by the decoder
    pub const MIN_RECORD_LEN: usize = 238;
}

/// Decoder for the game's binary book records
pub struct BinaryDecoder;

impl BinaryDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BinaryDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl super::Decoder for BinaryDecoder {
    fn decode(&self, reader: &mut dyn Read) -> Result<Book, ParseError> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        decode_binary(&data)
    }

    fn supported_extensions(&self) -> &[&str] {
        &["txt", "bin", "book"]
    }
}

/// Decode a complete binary book record
pub fn decode_binary(data: &[u8]) -> Result<Book, ParseError> {
    if data.len() < layout::MIN_RECORD_LEN {
        return Err(ParseError::TruncatedInput {
            context: "book header".to_string(),
            needed: layout::MIN_RECORD_LEN,
            actual: data.len(),
        });
    }

    let mut book = Book::new(
        text_field(&data[layout::TITLE..layout::TITLE + layout::TEXT_FIELD_LEN]),
        text_field(&data[layout::AUTHOR..layout::AUTHOR + layout::TEXT_FIELD_LEN]),
    );
    book.naughty = &data[layout::NAUGHTY..layout::RESERVED] == layout::NAUGHTY_MARKER;
    book.price = LittleEndian::read_u32(&data[layout::PRICE..]);
    for (i, unknown) in book.unknowns.iter_mut().enumerate() {
        *unknown = LittleEndian::read_u16(&data[layout::UNKNOWNS + i * 2..]);
    }

    let page_count = usize::from(LittleEndian::read_u16(&data[layout::PAGE_COUNT..]));
    let table_end = layout::HEADER_LEN + page_count * layout::OFFSET_LEN;
    if data.len() < table_end {
        return Err(ParseError::TruncatedInput {
            context: format!("offset table for {} pages", page_count),
            needed: table_end,
            actual: data.len(),
        });
    }

    tracing::debug!(
        title = %book.title,
        author = %book.author,
        naughty = book.naughty,
        price = book.price,
        pages = page_count,
        "decoded book header"
    );

    for index in 0..page_count {
        let entry = layout::HEADER_LEN + index * layout::OFFSET_LEN;
        let offset = LittleEndian::read_u32(&data[entry..]) as usize;
        if offset >= data.len() {
            return Err(ParseError::TruncatedInput {
                context: format!("page {} starts at offset {}", index + 1, offset),
                needed: offset + 1,
                actual: data.len(),
            });
        }
        let page = Page::decode_record(data, offset)?;
        tracing::debug!(page = index + 1, offset, lines = page.lines.len(), "decoded page");
        book.add_page(page);
    }

    Ok(book)
}

/// Read a NUL-padded ISO-8859-1 header string
fn text_field(bytes: &[u8]) -> String {
    let end = bytes.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    bytes[..end].iter().copied().map(char::from).collect()
}
