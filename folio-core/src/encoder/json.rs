//! JSON interchange encoder

use crate::error::ConversionError;
use crate::interchange;
use crate::types::Book;
use std::io::Write;

/// Encoder for the structured JSON interchange form
pub struct JsonEncoder;

impl JsonEncoder {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl super::Encoder for JsonEncoder {
    fn encode(&self, book: &Book, writer: &mut dyn Write) -> Result<(), ConversionError> {
        let json = interchange::dump(book)?;
        writeln!(writer, "{}", json).map_err(|e| ConversionError::EncodingFailed(e.to_string()))
    }

    fn format_name(&self) -> &str {
        "JSON"
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}
