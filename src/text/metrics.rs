use unicode_width::UnicodeWidthStr;

use crate::style::FontDescriptor;

/// Spaces per tab stop.
pub const TAB_STOP_SPACES: f32 = 4.0;

/// Glyph measurement for a font.
///
/// The layout engine only ever asks for per-grapheme advances and the line height, so a
/// platform shaper can stand in for [`MonospaceMetrics`] without touching layout code.
pub trait FontMetrics {
    /// Horizontal advance of one grapheme cluster.
    fn advance(&self, font: &FontDescriptor, grapheme: &str) -> f32;

    fn line_height(&self, font: &FontDescriptor) -> f32;

    /// Distance between tab stops.
    fn tab_interval(&self, font: &FontDescriptor) -> f32 {
        self.advance(font, " ") * TAB_STOP_SPACES
    }
}

/// Cell-grid metrics: a grapheme advances by its Unicode display width in cells.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonospaceMetrics {
    /// Cell width as a fraction of the point size.
    pub cell_width_em: f32,
    /// Line height as a multiple of the point size.
    pub line_height_em: f32,
}

impl MonospaceMetrics {
    pub const fn new(cell_width_em: f32, line_height_em: f32) -> Self {
        Self {
            cell_width_em,
            line_height_em,
        }
    }

    pub fn cell_width(&self, font: &FontDescriptor) -> f32 {
        font.point_size() * self.cell_width_em
    }
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self::new(0.5, 1.25)
    }
}

impl FontMetrics for MonospaceMetrics {
    fn advance(&self, font: &FontDescriptor, grapheme: &str) -> f32 {
        if is_line_separator(grapheme) {
            return 0.0;
        }
        // A cluster occupies at most two cells: "e\u{301}" is 1, "中" is 2, ZWJ emoji 2.
        let cells = grapheme.width().min(2) as f32;
        cells * self.cell_width(font)
    }

    fn line_height(&self, font: &FontDescriptor) -> f32 {
        font.point_size() * self.line_height_em
    }
}

pub(crate) fn is_line_separator(grapheme: &str) -> bool {
    matches!(grapheme, "\n" | "\r\n" | "\r" | "\u{2028}" | "\u{2029}")
}

#[cfg(test)]
#[path = "../../tests/unit/text/metrics.rs"]
mod tests;
