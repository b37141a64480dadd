//! Style attributes applied to a label's text.
//!
//! A [`StyleAttributes`] value is immutable once snapshotted into a
//! [`crate::text::StyledText`]; the host keeps one mutable copy and rebuilds the styled text
//! after every change.

mod color;
mod font;

pub use color::Color;
pub use font::FontDescriptor;

use serde::{Deserialize, Serialize};

use crate::core::geom::{non_negative, EdgeInsets};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlignment {
    #[default]
    Left,
    Center,
    Right,
    Justified,
    /// Writing-direction default; left for the left-to-right text this engine lays out.
    Natural,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineBreakMode {
    WordWrap,
    CharWrap,
    TruncateHead,
    #[default]
    TruncateTail,
    TruncateMiddle,
}

impl LineBreakMode {
    pub fn is_truncating(self) -> bool {
        matches!(
            self,
            LineBreakMode::TruncateHead | LineBreakMode::TruncateTail | LineBreakMode::TruncateMiddle
        )
    }

    /// Whether lines break between any two graphemes rather than at word boundaries.
    pub fn breaks_anywhere(self) -> bool {
        self == LineBreakMode::CharWrap
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadowOffset {
    pub dx: f32,
    pub dy: f32,
}

impl Default for ShadowOffset {
    fn default() -> Self {
        Self { dx: 0.0, dy: -1.0 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    pub color: Color,
    #[serde(default)]
    pub offset: ShadowOffset,
}

impl Shadow {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            offset: ShadowOffset::default(),
        }
    }

    pub fn with_offset(mut self, dx: f32, dy: f32) -> Self {
        self.offset = ShadowOffset { dx, dy };
        self
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleAttributes {
    pub font: FontDescriptor,
    pub text_color: Color,
    pub alignment: TextAlignment,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<Shadow>,
    /// 0 means unlimited.
    pub max_lines: usize,
    pub line_break_mode: LineBreakMode,
    pub line_fragment_padding: f32,
    pub container_inset: EdgeInsets,
}

impl Default for StyleAttributes {
    fn default() -> Self {
        Self {
            font: FontDescriptor::default(),
            text_color: Color::DARK_TEXT,
            alignment: TextAlignment::Left,
            shadow: None,
            max_lines: 1,
            line_break_mode: LineBreakMode::TruncateTail,
            line_fragment_padding: 0.0,
            container_inset: EdgeInsets::ZERO,
        }
    }
}

impl StyleAttributes {
    pub fn with_font(mut self, font: FontDescriptor) -> Self {
        self.font = font;
        self
    }

    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    pub fn with_alignment(mut self, alignment: TextAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_shadow(mut self, shadow: Option<Shadow>) -> Self {
        self.shadow = shadow;
        self
    }

    pub fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = max_lines;
        self
    }

    pub fn with_line_break_mode(mut self, mode: LineBreakMode) -> Self {
        self.line_break_mode = mode;
        self
    }

    pub fn with_line_fragment_padding(mut self, padding: f32) -> Self {
        self.line_fragment_padding = padding;
        self
    }

    pub fn with_container_inset(mut self, inset: EdgeInsets) -> Self {
        self.container_inset = inset;
        self
    }

    /// Copy with negative insets and padding clamped to zero.
    pub fn normalized(&self) -> Self {
        let mut style = self.clone();
        style.container_inset = style.container_inset.clamped();
        style.line_fragment_padding = non_negative(style.line_fragment_padding);
        style
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/mod.rs"]
mod tests;
