//! Core types for the Folio document model

mod book;
mod line;
mod page;

pub use book::{Book, DEFAULT_UNKNOWNS};
pub use line::{Alignment, Font, Line};
pub use page::{opcode, Page};
