//! Markup exporter
//!
//! Writes every line with `%l` so recompiling reproduces the lines instead
//! of re-wrapping them, and ends every page with `%p`. Position overrides
//! have no markup form and are dropped. The compiler strips trailing ASCII
//! whitespace from source lines, so a line ending in spaces or tabs comes
//! back without them, and a line containing a newline comes back as two.

use crate::error::ConversionError;
use crate::types::{Book, Font, Line};
use std::io::Write;

/// Encoder producing markup source
pub struct MarkupEncoder;

impl MarkupEncoder {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MarkupEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl super::Encoder for MarkupEncoder {
    fn encode(&self, book: &Book, writer: &mut dyn Write) -> Result<(), ConversionError> {
        writer
            .write_all(render_markup(book).as_bytes())
            .map_err(|e| ConversionError::EncodingFailed(e.to_string()))
    }

    fn format_name(&self) -> &str {
        "Markup"
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}

/// Render a book as markup source
pub fn render_markup(book: &Book) -> String {
    let mut out = String::new();
    out.push_str(&book.title);
    out.push('\n');
    out.push_str(&book.author);
    out.push('\n');

    for page in &book.pages {
        for line in &page.lines {
            out.push_str(&markup_line(line));
            out.push('\n');
        }
        out.push_str("%p\n");
    }

    out
}

fn markup_line(line: &Line) -> String {
    let mut out = String::from("%l");
    if line.is_centered() {
        out.push_str("%c");
    }
    if line.font == Font::Script {
        out.push_str("%s");
    }
    if line.text.starts_with('%') {
        out.push('%');
    }
    out.push_str(&line.text);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::compile_markup;
    use crate::types::{Alignment, Page};

    #[test]
    fn test_markup_line() {
        assert_eq!(markup_line(&Line::new("text")), "%ltext");
        assert_eq!(markup_line(&Line::new("%done")), "%l%%done");
        assert_eq!(
            markup_line(&Line::new("x").with_alignment(Alignment::Center).with_font(Font::Script)),
            "%l%c%sx"
        );
    }

    #[test]
    fn test_recompiles_to_same_book() {
        let mut book = Book::new("Title", "Author");
        let mut page = Page::new();
        page.add_line(Line::new("A line that is much longer than the sixty column wrap width used for paragraphs"));
        page.add_line(Line::new(""));
        page.add_line(Line::new(""));
        page.add_line(Line::new("50% off").with_font(Font::Script));
        page.add_line(Line::new("%").with_alignment(Alignment::Center));
        book.add_page(Page::new());
        book.add_page(page);
        book.add_page(Page::new());

        let source = render_markup(&book);
        let recompiled = compile_markup(source.lines()).unwrap();
        assert_eq!(recompiled, book);
    }

    #[test]
    fn test_trailing_whitespace_is_not_kept() {
        let mut book = Book::new("Title", "Author");
        let mut page = Page::new();
        page.add_line(Line::new("padded  \t"));
        page.add_line(Line::new("kept\u{a0}"));
        book.add_page(page);

        let recompiled = compile_markup(render_markup(&book).lines()).unwrap();
        let texts: Vec<&str> = recompiled.lines().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["padded", "kept\u{a0}"]);
    }
}
