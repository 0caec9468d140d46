//! Human-readable listing of a book

use crate::error::ConversionError;
use crate::types::{Book, Font, Line};
use std::fmt::Write as _;
use std::io::Write;

/// Encoder printing a plain-text listing of the header and every line
pub struct TextEncoder;

impl TextEncoder {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl super::Encoder for TextEncoder {
    fn encode(&self, book: &Book, writer: &mut dyn Write) -> Result<(), ConversionError> {
        writer
            .write_all(render_text(book).as_bytes())
            .map_err(|e| ConversionError::EncodingFailed(e.to_string()))
    }

    fn format_name(&self) -> &str {
        "Text"
    }

    fn file_extension(&self) -> &str {
        "lst"
    }
}

/// Render the header fields followed by each page's lines
///
/// Every line is prefixed with `C` when centered, `S` when in script and
/// its position when it has one.
pub fn render_text(book: &Book) -> String {
    let mut out = String::new();
    let [u1, u2, u3] = book.unknowns;

    // Writing to a String cannot fail.
    let _ = writeln!(out, "Title:    {}", book.title);
    let _ = writeln!(out, "Author:   {}", book.author);
    let _ = writeln!(out, "Naughty:  {}", if book.naughty { "yes" } else { "no" });
    let _ = writeln!(out, "Price:    {}", book.price);
    let _ = writeln!(out, "Unknowns: {} {} {}", u1, u2, u3);
    let _ = writeln!(out, "Pages:    {}", book.pages.len());

    for (index, page) in book.pages.iter().enumerate() {
        let _ = writeln!(out);
        let _ = writeln!(out, "=== Page {} ===", index + 1);
        for line in &page.lines {
            let _ = writeln!(out, "{}", render_line(line));
        }
    }

    out
}

fn render_line(line: &Line) -> String {
    let align = if line.is_centered() { 'C' } else { '.' };
    let font = if line.font == Font::Script { 'S' } else { '.' };
    let position = if line.has_position() {
        format!("@{},{}", line.xpos, line.ypos)
    } else {
        String::new()
    };
    format!("{}{} {:<7} |{}", align, font, position, line.text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Alignment, Page};

    #[test]
    fn test_render_line_markers() {
        assert_eq!(render_line(&Line::new("plain")), "..         |plain");
        assert_eq!(
            render_line(
                &Line::new("both")
                    .with_alignment(Alignment::Center)
                    .with_font(Font::Script)
            ),
            "CS         |both"
        );
        assert_eq!(
            render_line(&Line::new("at").with_position(5, 120)),
            ".. @5,120  |at"
        );
    }

    #[test]
    fn test_render_header() {
        let mut book = Book::new("Title", "Author");
        book.add_page(Page::new());
        let text = render_text(&book);

        assert!(text.starts_with("Title:    Title\nAuthor:   Author\n"));
        assert!(text.contains("Naughty:  no\n"));
        assert!(text.contains("Unknowns: 1 1234 2345\n"));
        assert!(text.ends_with("=== Page 1 ===\n"));
    }
}
