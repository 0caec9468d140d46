//! Page type and its binary page record

use super::{Alignment, Font, Line};
use crate::error::{ConversionError, ParseError};

/// Control bytes found inside a page record
pub mod opcode {
    /// Ends the current line and starts the next one
    pub const NEW_LINE: u8 = 0x00;
    /// Restates a position without starting a new line
    pub const SAME_LINE: u8 = 0x01;
    /// Follows `NEW_LINE`/`SAME_LINE` and precedes an x and y byte
    pub const POSITION: u8 = 0xFB;
    /// Precedes a font code
    pub const FONT: u8 = 0xF9;
    /// Centers the current line
    pub const CENTER: u8 = 0xFD;
    /// Terminates a page record
    pub const END_OF_PAGE: u8 = 0xF6;

    /// Whether `byte` is read as a control byte when it appears in line text
    pub fn is_reserved(byte: u8) -> bool {
        matches!(byte, NEW_LINE | POSITION | FONT | CENTER | END_OF_PAGE)
    }
}

/// An ordered run of lines shown together on one page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub lines: Vec<Line>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line below the existing ones
    pub fn add_line(&mut self, line: Line) {
        self.lines.push(line);
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total row height of the page's lines
    pub fn row_height(&self) -> usize {
        self.lines.iter().map(|l| l.font.row_height()).sum()
    }

    /// Decode the page record starting at `offset`
    ///
    /// Bytes are scanned until the end-of-page sentinel. Text bytes map
    /// one-to-one onto ISO-8859-1 characters.
    pub fn decode_record(data: &[u8], offset: usize) -> Result<Self, ParseError> {
        let mut page = Page::new();
        let mut current = Line::default();
        let mut pos = offset;

        loop {
            let byte = *data.get(pos).ok_or_else(|| ParseError::TruncatedInput {
                context: format!(
                    "page record at offset {} has no end-of-page marker",
                    offset
                ),
                needed: pos + 1,
                actual: data.len(),
            })?;

            if byte == opcode::END_OF_PAGE {
                break;
            }

            if data.get(pos + 1) == Some(&opcode::POSITION) {
                let coords = data.get(pos + 2..pos + 4).ok_or_else(|| {
                    ParseError::TruncatedInput {
                        context: format!("position marker at offset {}", pos),
                        needed: pos + 4,
                        actual: data.len(),
                    }
                })?;
                // Same-line restatements carry coordinates that are dropped here.
                if byte == opcode::NEW_LINE {
                    let next = Line::continuing(&current).with_position(coords[0], coords[1]);
                    page.add_line(std::mem::replace(&mut current, next));
                }
                pos += 4;
                continue;
            }

            match byte {
                opcode::FONT => {
                    if let Some(font) = data.get(pos + 1).copied().and_then(Font::from_code) {
                        current.font = font;
                    }
                    pos += 2;
                }
                opcode::NEW_LINE => {
                    let next = Line::continuing(&current);
                    page.add_line(std::mem::replace(&mut current, next));
                    pos += 1;
                }
                opcode::CENTER => {
                    current.alignment = Alignment::Center;
                    pos += 1;
                }
                _ => {
                    current.text.push(char::from(byte));
                    pos += 1;
                }
            }
        }

        if !current.text.is_empty() {
            page.add_line(current);
        }

        Ok(page)
    }

    /// Append this page's record, including the end-of-page sentinel
    pub fn encode_record(&self, out: &mut Vec<u8>) -> Result<(), ConversionError> {
        let mut prev: Option<&Line> = None;

        for (index, line) in self.lines.iter().enumerate() {
            if line.has_position() {
                if prev.is_none() {
                    out.push(opcode::SAME_LINE);
                }
                out.extend_from_slice(&[opcode::POSITION, line.xpos, line.ypos]);
            }

            match prev {
                Some(p) if p.font != line.font => {
                    out.extend_from_slice(&[opcode::FONT, line.font.code()]);
                }
                None if line.font == Font::Script => {
                    out.extend_from_slice(&[opcode::FONT, Font::Script.code()]);
                }
                _ => {}
            }

            if line.is_centered() {
                out.push(opcode::CENTER);
            }

            for ch in line.text.chars() {
                let byte = u8::try_from(u32::from(ch))
                    .ok()
                    .filter(|&b| !opcode::is_reserved(b))
                    .ok_or_else(|| ConversionError::EncodingRange {
                        ch,
                        context: format!("line {}", index + 1),
                    })?;
                out.push(byte);
            }
            out.push(opcode::NEW_LINE);

            prev = Some(line);
        }

        out.push(opcode::END_OF_PAGE);
        Ok(())
    }
}
