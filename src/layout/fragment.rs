use std::ops::Range;

use compact_str::CompactString;

use crate::core::geom::{Point, Rect, Size};

/// A positioned glyph. All coordinates are content-box relative.
#[derive(Clone, Debug, PartialEq)]
pub struct Glyph {
    /// Source cluster, or the ellipsis for a truncation marker.
    pub text: CompactString,
    /// Leading edge.
    pub x: f32,
    pub advance: f32,
    /// 所在行片段的索引
    pub line: usize,
    /// Character (Unicode scalar) offset this glyph maps to. For an ellipsis, the first elided
    /// character.
    pub char_index: usize,
    /// Characters covered; zero for an ellipsis.
    pub char_len: usize,
}

impl Glyph {
    pub fn is_ellipsis(&self) -> bool {
        self.char_len == 0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LineFragment {
    /// Line box including fragment padding on both sides.
    pub rect: Rect,
    pub char_range: Range<usize>,
    pub glyph_range: Range<usize>,
    /// Text was elided from this line.
    pub truncated: bool,
}

/// Geometry of a styled text laid out in a container.
///
/// Built fresh by [`super::LayoutEngine::layout`] for every query.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Layout {
    pub(crate) fragments: Vec<LineFragment>,
    pub(crate) glyphs: Vec<Glyph>,
    pub(crate) container: Size,
    pub(crate) line_height: f32,
    pub(crate) used_size: Size,
}

impl Layout {
    pub(crate) fn empty(container: Size, line_height: f32) -> Self {
        Self {
            fragments: Vec::new(),
            glyphs: Vec::new(),
            container,
            line_height,
            used_size: Size::ZERO,
        }
    }

    pub fn fragments(&self) -> &[LineFragment] {
        &self.fragments
    }

    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    pub fn glyphs_in(&self, fragment: &LineFragment) -> &[Glyph] {
        &self.glyphs[fragment.glyph_range.clone()]
    }

    /// Content-box size the text was laid out in.
    pub fn container_size(&self) -> Size {
        self.container
    }

    pub fn line_height(&self) -> f32 {
        self.line_height
    }

    /// Integral bounding box of all fragments.
    pub fn used_size(&self) -> Size {
        self.used_size
    }

    pub fn line_count(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn is_truncated(&self) -> bool {
        self.fragments.last().is_some_and(|f| f.truncated)
    }

    pub fn char_index_for_glyph(&self, glyph_index: usize) -> Option<usize> {
        self.glyphs.get(glyph_index).map(|g| g.char_index)
    }

    /// Bounding rect of one glyph: its advance across, the full line box tall.
    pub fn glyph_rect(&self, glyph_index: usize) -> Option<Rect> {
        let glyph = self.glyphs.get(glyph_index)?;
        let line = self.fragments.get(glyph.line)?;
        Some(Rect::new(glyph.x, line.rect.y, glyph.advance, line.rect.h))
    }

    /// Glyph closest to `p`.
    ///
    /// Always answers when the layout has glyphs, including for points between glyphs, past
    /// the end of a line, on an empty line, or outside every line.
    pub fn nearest_glyph(&self, p: Point) -> Option<usize> {
        if self.glyphs.is_empty() || self.fragments.is_empty() {
            return None;
        }

        let line = self
            .fragments
            .partition_point(|f| f.rect.bottom() <= p.y)
            .min(self.fragments.len() - 1);
        let range = self.fragments[line].glyph_range.clone();
        if range.is_empty() {
            return Some(range.start.min(self.glyphs.len() - 1));
        }

        let glyphs = &self.glyphs[range.clone()];
        // 行内字形起点单调递增，可以二分
        let after = glyphs.partition_point(|g| g.x <= p.x);
        Some(range.start + after.saturating_sub(1))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/fragment.rs"]
mod tests;
