//! JSON interchange decoder

use crate::error::ParseError;
use crate::interchange;
use crate::types::Book;
use std::io::Read;

/// Decoder for the structured JSON interchange form
pub struct JsonDecoder;

impl JsonDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl super::Decoder for JsonDecoder {
    fn decode(&self, reader: &mut dyn Read) -> Result<Book, ParseError> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        interchange::load(&content)
    }

    fn supported_extensions(&self) -> &[&str] {
        &["json"]
    }
}
