//! Folio Core Library
//!
//! Reads and writes the fixed-layout binary book records of a 1990s
//! role-playing game, and compiles a plain-text markup dialect into the same
//! document model. Every representation is converted to a [`Book`] before
//! being written to another.

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod interchange;
pub mod types;
pub mod wrap;

pub use decoder::{compile_markup, decode_binary, InputFormat, MarkupCompiler};
pub use encoder::{encode_binary, render_markup, render_text, OutputFormat};
pub use error::{ConversionError, FolioError, ParseError, Result};
pub use types::{Alignment, Book, Font, Line, Page};
