//! The main Book type - the root of the document model

use super::{Line, Page};

/// Reserved header words written for freshly authored books
pub const DEFAULT_UNKNOWNS: [u16; 3] = [1, 1234, 2345];

/// The complete book representation
///
/// Every input format (binary record, interchange JSON, markup) is read into
/// this type, and every output format is written from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub title: String,

    pub author: String,

    /// Content-maturity flag
    pub naughty: bool,

    pub price: u32,

    /// Opaque header words, carried through untouched
    pub unknowns: [u16; 3],

    /// Ordered list of pages
    pub pages: Vec<Page>,
}

impl Default for Book {
    fn default() -> Self {
        Self {
            title: String::new(),
            author: String::new(),
            naughty: false,
            price: 0,
            unknowns: DEFAULT_UNKNOWNS,
            pages: Vec::new(),
        }
    }
}

impl Book {
    /// Create an empty book with the given title and author
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            ..Self::default()
        }
    }

    /// Add a page to the end of the book
    pub fn add_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// Iterate over every line of every page in reading order
    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.pages.iter().flat_map(|p| p.lines.iter())
    }

    pub fn line_count(&self) -> usize {
        self.pages.iter().map(|p| p.lines.len()).sum()
    }
}
