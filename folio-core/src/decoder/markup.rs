//! Markup compiler
//!
//! The first source line is the title, the second the author. Every other
//! line may open with `%` codes:
//!
//! | code | meaning |
//! |------|---------|
//! | `%c` | center the line |
//! | `%s` | script font |
//! | `%l` | keep the line verbatim instead of wrapping it into a paragraph |
//! | `%p` | page break; the rest of the line is ignored |
//! | `%%` | a literal `%` starting the content |
//!
//! Plain lines are collected into paragraphs and word-wrapped; the result is
//! split into pages by row height.

use crate::error::ParseError;
use crate::types::{Alignment, Book, Font, Line, Page};
use crate::wrap::{is_separator, wrap};
use std::io::Read;

/// Column at which paragraph text is wrapped
pub const DEFAULT_WRAP_WIDTH: usize = 60;

/// Rows available on one page
pub const DEFAULT_PAGE_HEIGHT: usize = 23;

/// Compiler from markup source to a paginated book
#[derive(Debug, Clone)]
pub struct MarkupCompiler {
    wrap_width: usize,
    page_height: usize,
}

impl MarkupCompiler {
    pub fn new() -> Self {
        Self {
            wrap_width: DEFAULT_WRAP_WIDTH,
            page_height: DEFAULT_PAGE_HEIGHT,
        }
    }

    /// Set the paragraph wrap width (at least one column)
    pub fn with_wrap_width(mut self, width: usize) -> Self {
        self.wrap_width = width.max(1);
        self
    }

    /// Set the number of rows per page
    pub fn with_page_height(mut self, rows: usize) -> Self {
        self.page_height = rows;
        self
    }

    /// Compile markup source lines into a book
    pub fn compile<I, S>(&self, lines: I) -> Result<Book, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut source = lines.into_iter();
        let (Some(title), Some(author)) = (source.next(), source.next()) else {
            return Err(ParseError::MalformedMarkup(
                "expected a title line and an author line".to_string(),
            ));
        };

        let mut book = Book::new(trim_source(title.as_ref()), trim_source(author.as_ref()));
        let mut state = CompilerState::new(self.wrap_width);

        // Source line numbers are 1-based and count the title and author.
        for (index, raw) in source.enumerate() {
            state.process_line(trim_source(raw.as_ref()), index + 3)?;
        }

        for page in paginate(state.finish(), self.page_height) {
            book.add_page(page);
        }

        tracing::debug!(
            title = %book.title,
            pages = book.pages.len(),
            lines = book.line_count(),
            "compiled markup"
        );
        Ok(book)
    }
}

impl Default for MarkupCompiler {
    fn default() -> Self {
        Self::new()
    }
}

impl super::Decoder for MarkupCompiler {
    fn decode(&self, reader: &mut dyn Read) -> Result<Book, ParseError> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        self.compile(content.lines())
    }

    fn supported_extensions(&self) -> &[&str] {
        &["md", "markup"]
    }
}

/// Compile markup with the default wrap width and page height
pub fn compile_markup<I, S>(lines: I) -> Result<Book, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    MarkupCompiler::new().compile(lines)
}

/// Drop trailing ASCII whitespace from a source or wrapped line
fn trim_source(line: &str) -> &str {
    line.trim_end_matches(is_separator)
}

/// Entry in the compiled line list
#[derive(Debug, Clone, PartialEq)]
enum Entry {
    Line(Line),
    PageBreak,
}

/// Formatting codes found at the start of a source line
#[derive(Debug, Default)]
struct LineCodes {
    center: bool,
    script: bool,
    preserve: bool,
    page_break: bool,
    /// Byte offset where the content begins
    content_start: usize,
}

impl LineCodes {
    fn any(&self) -> bool {
        self.center || self.script || self.preserve
    }
}

/// Scan the `%` codes that open a line
fn scan_codes(line: &str, line_number: usize) -> Result<LineCodes, ParseError> {
    let mut codes = LineCodes::default();
    let mut rest = line;

    while let Some(after) = rest.strip_prefix('%') {
        let column = line.len() - rest.len() + 1;
        let code = after.chars().next();
        match code {
            Some('c') => codes.center = true,
            Some('s') => codes.script = true,
            Some('l') => codes.preserve = true,
            Some('p') => {
                codes.page_break = true;
                return Ok(codes);
            }
            Some('%') => {
                // The escaped `%` is the first content character.
                codes.content_start = column;
                return Ok(codes);
            }
            _ => {
                return Err(ParseError::MalformedFormatCode {
                    line: line_number,
                    column,
                    found: code,
                })
            }
        }
        rest = &after[1..];
    }

    codes.content_start = line.len() - rest.len();
    Ok(codes)
}

/// Running state of one pass over the source lines
struct CompilerState {
    wrap_width: usize,
    paragraph: Vec<String>,
    output: Vec<Entry>,
    previous_blank: bool,
}

impl CompilerState {
    fn new(wrap_width: usize) -> Self {
        Self {
            wrap_width,
            paragraph: Vec::new(),
            output: Vec::new(),
            previous_blank: true,
        }
    }

    fn process_line(&mut self, line: &str, line_number: usize) -> Result<(), ParseError> {
        let codes = scan_codes(line, line_number)?;

        if codes.page_break {
            self.flush();
            self.output.push(Entry::PageBreak);
            self.previous_blank = true;
            return Ok(());
        }

        let content = &line[codes.content_start..];
        if !codes.any() && !content.is_empty() {
            self.paragraph.push(content.to_string());
            self.previous_blank = false;
            return Ok(());
        }

        self.flush();
        let blank = content.is_empty() && !codes.preserve;
        if !(blank && self.previous_blank) {
            let mut out = Line::new(content);
            if codes.center {
                out.alignment = Alignment::Center;
            }
            if codes.script {
                out.font = Font::Script;
            }
            self.output.push(Entry::Line(out));
        }
        self.previous_blank = blank;
        Ok(())
    }

    /// Wrap the pending paragraph into finished lines
    fn flush(&mut self) {
        if self.paragraph.is_empty() {
            return;
        }

        let joined = self.paragraph.join("\n");
        for wrapped in wrap(&joined, self.wrap_width) {
            self.output.push(Entry::Line(Line::new(trim_source(&wrapped))));
        }
        self.paragraph.clear();
    }

    fn finish(mut self) -> Vec<Entry> {
        self.flush();
        if self.output.last().is_some_and(|e| *e != Entry::PageBreak) {
            self.output.push(Entry::PageBreak);
        }
        self.output
    }
}

/// Split compiled entries into pages of at most `page_height` rows
fn paginate(entries: Vec<Entry>, page_height: usize) -> Vec<Page> {
    let mut pages = Vec::new();
    let mut page = Page::new();
    let mut height = 0;

    for entry in entries {
        match entry {
            Entry::PageBreak => {
                pages.push(std::mem::take(&mut page));
                height = 0;
            }
            Entry::Line(line) => {
                let cost = line.font.row_height();
                if height + cost > page_height {
                    pages.push(std::mem::take(&mut page));
                    height = 0;
                }
                height += cost;
                page.add_line(line);
            }
        }
    }

    pages
}
