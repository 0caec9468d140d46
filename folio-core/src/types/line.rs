//! A single rendered row of book text

use serde::{Deserialize, Serialize};

/// Horizontal placement of a line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
}

/// Typeface of a line
///
/// Script lines are drawn twice as tall as normal ones, which is why the
/// markup paginator charges them two rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Font {
    #[default]
    Normal,
    Script,
}

impl Font {
    /// Byte that follows the font prefix in a page record
    pub fn code(self) -> u8 {
        match self {
            Font::Script => 0x02,
            Font::Normal => 0x04,
        }
    }

    /// Font selected by a byte following the font prefix, if any
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0x02 => Some(Font::Script),
            0x04 => Some(Font::Normal),
            _ => None,
        }
    }

    /// Number of page rows a line in this font occupies
    pub fn row_height(self) -> usize {
        match self {
            Font::Normal => 1,
            Font::Script => 2,
        }
    }
}

/// One line of text with its formatting
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub alignment: Alignment,
    pub font: Font,
    /// Absolute x position; `0` together with `ypos == 0` means unpositioned
    pub xpos: u8,
    pub ypos: u8,
}

impl Line {
    /// Create a left-aligned, normal-font line
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Start the line that follows `prev`, keeping its font
    pub fn continuing(prev: &Line) -> Self {
        Self {
            font: prev.font,
            ..Self::default()
        }
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    pub fn with_position(mut self, xpos: u8, ypos: u8) -> Self {
        self.xpos = xpos;
        self.ypos = ypos;
        self
    }

    /// Whether the line carries an explicit position override
    pub fn has_position(&self) -> bool {
        self.xpos != 0 || self.ypos != 0
    }

    pub fn is_centered(&self) -> bool {
        self.alignment == Alignment::Center
    }

    /// Whether two lines share alignment, font and position
    pub fn same_format(&self, other: &Line) -> bool {
        self.alignment == other.alignment
            && self.font == other.font
            && self.xpos == other.xpos
            && self.ypos == other.ypos
    }
}
