//! Structured JSON interchange for books
//!
//! Consecutive lines sharing alignment, font and position are grouped, with
//! `text` holding a list of strings; a group of one line holds a plain
//! string. Loading expands every group back into individual lines.

use crate::error::{ConversionError, ParseError};
use crate::types::{Alignment, Book, Font, Line, Page, DEFAULT_UNKNOWNS};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct BookDocument {
    title: String,
    author: String,
    #[serde(default)]
    naughty: bool,
    #[serde(default)]
    price: u32,
    #[serde(default = "default_unknowns")]
    unknowns: [u16; 3],
    #[serde(default)]
    pages: Vec<Vec<LineGroup>>,
}

#[derive(Debug, Serialize, Deserialize)]
struct LineGroup {
    #[serde(default)]
    align: Alignment,
    #[serde(default)]
    font: Font,
    #[serde(default)]
    xpos: u8,
    #[serde(default)]
    ypos: u8,
    text: GroupText,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum GroupText {
    Single(String),
    Many(Vec<String>),
}

fn default_unknowns() -> [u16; 3] {
    DEFAULT_UNKNOWNS
}

impl LineGroup {
    fn starting_with(line: &Line) -> Self {
        Self {
            align: line.alignment,
            font: line.font,
            xpos: line.xpos,
            ypos: line.ypos,
            text: GroupText::Single(line.text.clone()),
        }
    }

    fn push(&mut self, text: &str) {
        let texts = match std::mem::replace(&mut self.text, GroupText::Many(Vec::new())) {
            GroupText::Single(first) => vec![first, text.to_string()],
            GroupText::Many(mut texts) => {
                texts.push(text.to_string());
                texts
            }
        };
        self.text = GroupText::Many(texts);
    }

    fn into_lines(self) -> impl Iterator<Item = Line> {
        let template = Line::default()
            .with_alignment(self.align)
            .with_font(self.font)
            .with_position(self.xpos, self.ypos);
        let texts = match self.text {
            GroupText::Single(text) => vec![text],
            GroupText::Many(texts) => texts,
        };
        texts.into_iter().map(move |text| Line {
            text,
            ..template.clone()
        })
    }
}

fn group_page(page: &Page) -> Vec<LineGroup> {
    let mut groups: Vec<LineGroup> = Vec::new();
    let mut prev: Option<&Line> = None;
    for line in &page.lines {
        let continues = prev.is_some_and(|p| p.same_format(line));
        match groups.last_mut() {
            Some(group) if continues => group.push(&line.text),
            _ => groups.push(LineGroup::starting_with(line)),
        }
        prev = Some(line);
    }
    groups
}

impl From<&Book> for BookDocument {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            naughty: book.naughty,
            price: book.price,
            unknowns: book.unknowns,
            pages: book.pages.iter().map(group_page).collect(),
        }
    }
}

impl From<BookDocument> for Book {
    fn from(doc: BookDocument) -> Self {
        let mut book = Book::new(doc.title, doc.author);
        book.naughty = doc.naughty;
        book.price = doc.price;
        book.unknowns = doc.unknowns;
        for groups in doc.pages {
            book.add_page(Page {
                lines: groups.into_iter().flat_map(LineGroup::into_lines).collect(),
            });
        }
        book
    }
}

/// Load a book from its JSON interchange form
pub fn load(json: &str) -> Result<Book, ParseError> {
    let doc: BookDocument = serde_json::from_str(json)?;
    Ok(doc.into())
}

/// Dump a book to pretty-printed JSON interchange
pub fn dump(book: &Book) -> Result<String, ConversionError> {
    serde_json::to_string_pretty(&BookDocument::from(book))
        .map_err(|e| ConversionError::EncodingFailed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn sample_book() -> Book {
        let mut book = Book::new("The Wolf Queen", "Waughin Jarth");
        book.price = 42;
        let mut page = Page::new();
        page.add_line(Line::new("Book One").with_alignment(Alignment::Center));
        page.add_line(Line::new("first"));
        page.add_line(Line::new("second"));
        page.add_line(Line::new("placed").with_position(12, 40));
        book.add_page(page);
        book.add_page(Page::new());
        book
    }

    #[test]
    fn test_dump_groups_lines() {
        let value: Value = serde_json::from_str(&dump(&sample_book()).unwrap()).unwrap();

        assert_eq!(value["unknowns"], json!([1, 1234, 2345]));
        let page = &value["pages"][0];
        assert_eq!(page.as_array().map(Vec::len), Some(3));
        assert_eq!(page[0]["align"], "center");
        assert_eq!(page[0]["text"], "Book One");
        assert_eq!(page[1]["font"], "normal");
        assert_eq!(page[1]["text"], json!(["first", "second"]));
        assert_eq!(page[2]["xpos"], 12);
        assert_eq!(value["pages"][1], json!([]));
    }

    #[test]
    fn test_round_trip() {
        let book = sample_book();
        assert_eq!(load(&dump(&book).unwrap()).unwrap(), book);
    }

    #[test]
    fn test_load_expands_groups_and_applies_defaults() {
        let json = r#"{
            "title": "T",
            "author": "A",
            "pages": [[
                {"font": "script", "text": ["a", "b", "c"]},
                {"align": "center", "text": "d"}
            ]]
        }"#;
        let book = load(json).unwrap();

        assert_eq!(book.unknowns, DEFAULT_UNKNOWNS);
        assert!(!book.naughty);
        let lines = &book.pages[0].lines;
        assert_eq!(lines.len(), 4);
        assert!(lines[..3].iter().all(|l| l.font == Font::Script));
        assert_eq!(lines[2].text, "c");
        assert_eq!(lines[3].alignment, Alignment::Center);
        assert_eq!(lines[3].font, Font::Normal);
    }

    #[test]
    fn test_grouped_and_ungrouped_are_equivalent() {
        let grouped = r#"{"title":"T","author":"A","pages":[[{"text":["x","y"]}]]}"#;
        let split = r#"{"title":"T","author":"A","pages":[[{"text":"x"},{"text":"y"}]]}"#;
        assert_eq!(load(grouped).unwrap(), load(split).unwrap());
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(load("{"), Err(ParseError::InvalidJson(_))));
        assert!(matches!(
            load(r#"{"title":"T","author":"A","pages":[[{"align":"right","text":"x"}]]}"#),
            Err(ParseError::InvalidJson(_))
        ));
    }
}
