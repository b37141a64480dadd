use compact_str::CompactString;

use crate::core::geom::{non_negative, Rect, Size};
use crate::style::TextAlignment;
use crate::text::{FontMetrics, MonospaceMetrics, StyledText};

use super::fragment::{Glyph, Layout, LineFragment};
use super::line_break::{
    advance_at, collect_clusters, paragraphs, BrokenLine, Cluster, ClusterKind, LineBreaker,
    WIDTH_EPSILON,
};
use super::truncate::{truncate, Piece, ELLIPSIS};

/// Lays out styled text into line fragments and glyphs.
///
/// Holds no per-text state: each call to [`LayoutEngine::layout`] builds and returns a new
/// [`Layout`].
#[derive(Clone, Debug, Default)]
pub struct LayoutEngine<M = MonospaceMetrics> {
    metrics: M,
}

/// A broken line ready for placement.
struct PendingLine {
    line: BrokenLine,
    /// Last line of its paragraph.
    ends_paragraph: bool,
    pieces: Option<Vec<Piece>>,
}

impl<M: FontMetrics> LayoutEngine<M> {
    pub fn new(metrics: M) -> Self {
        Self { metrics }
    }

    pub fn metrics(&self) -> &M {
        &self.metrics
    }

    pub fn layout(&self, styled: &StyledText, available: Size) -> Layout {
        let style = styled.style();
        let layout = self.lay_out(styled, available, style.max_lines);
        tracing::debug!(
            lines = layout.fragments.len(),
            glyphs = layout.glyphs.len(),
            truncated = layout.is_truncated(),
            mode = ?style.line_break_mode,
            "text laid out"
        );
        layout
    }

    fn lay_out(&self, styled: &StyledText, available: Size, max_lines: usize) -> Layout {
        let style = styled.style();
        let font = &style.font;
        let container = available.inset_by(style.container_inset);
        let line_height = self.metrics.line_height(font);
        if styled.is_empty() {
            return Layout::empty(container, line_height);
        }

        let padding = non_negative(style.line_fragment_padding);
        let line_width = non_negative(container.width - 2.0 * padding);
        let clusters = collect_clusters(styled.text(), &self.metrics, font);
        let breaker = LineBreaker::new(&clusters, line_width, style.line_break_mode);

        let mut pending: Vec<PendingLine> = Vec::new();
        let mut placed_end = 0usize;
        'paragraphs: for paragraph in paragraphs(&clusters) {
            let lines = breaker.break_paragraph(paragraph);
            let count = lines.len();
            for (i, line) in lines.into_iter().enumerate() {
                if !self.has_room(pending.len(), max_lines, line_height, container.height) {
                    break 'paragraphs;
                }
                placed_end = line.range.end;
                pending.push(PendingLine {
                    line,
                    ends_paragraph: i + 1 == count,
                    pieces: None,
                });
            }
        }

        let ellipsis_width = self.metrics.advance(font, ELLIPSIS);
        let overflow = clusters[placed_end..]
            .iter()
            .any(|c| c.kind != ClusterKind::Separator);
        if overflow && style.line_break_mode.is_truncating() {
            let mut truncate_width = line_width;
            if max_lines > 0 && pending.len() >= max_lines {
                // 截断行不能比不限行数时最宽的一行更宽
                let unlimited = self.lay_out(styled, available, 0);
                truncate_width = truncate_width.min(widest_line(&unlimited, padding));
            }
            if let Some(last) = pending.last_mut() {
                let source = last.line.range.start..last.line.content_end;
                last.pieces = Some(truncate(
                    style.line_break_mode,
                    &clusters,
                    source,
                    ellipsis_width,
                    truncate_width,
                ));
            }
        }

        let mut layout = Layout::empty(container, line_height);
        let last_index = pending.len().saturating_sub(1);
        for (index, line) in pending.iter().enumerate() {
            let justify = style.alignment == TextAlignment::Justified
                && line.line.wrapped
                && !line.ends_paragraph
                && index != last_index
                && line.pieces.is_none();
            self.place_line(
                &mut layout,
                &clusters,
                line,
                LinePlacement {
                    top: index as f32 * line_height,
                    padding,
                    line_width,
                    alignment: style.alignment,
                    justify,
                    ellipsis_width,
                },
            );
        }

        layout.used_size = layout
            .fragments
            .iter()
            .map(|f| f.rect)
            .reduce(|a, b| a.union(&b))
            .map(|r| r.integral().size())
            .unwrap_or(Size::ZERO);
        layout
    }

    fn has_room(&self, placed: usize, max_lines: usize, line_height: f32, height: f32) -> bool {
        if max_lines > 0 && placed >= max_lines {
            return false;
        }
        let bottom = (placed + 1) as f32 * line_height;
        bottom <= height + WIDTH_EPSILON
    }

    fn place_line(
        &self,
        layout: &mut Layout,
        clusters: &[Cluster<'_>],
        pending: &PendingLine,
        placement: LinePlacement,
    ) {
        let line_index = layout.fragments.len();
        let glyph_start = layout.glyphs.len();
        let truncated = pending.pieces.is_some();

        let pieces: Vec<Piece> = match &pending.pieces {
            Some(pieces) => pieces.clone(),
            None => pending.line.range.clone().map(Piece::Cluster).collect(),
        };

        // Whitespace at the end of a wrapped line hangs with no advance.
        let hang_from = if pending.line.wrapped {
            let mut end = pieces.len();
            while end > 0 {
                match pieces[end - 1] {
                    Piece::Cluster(i) if clusters[i].is_whitespace() => end -= 1,
                    _ => break,
                }
            }
            end
        } else {
            pieces.len()
        };

        let mut pen = 0.0f32;
        let mut glyphs = Vec::with_capacity(pieces.len());
        for (k, piece) in pieces.iter().enumerate() {
            let glyph = match *piece {
                Piece::Cluster(i) => {
                    let cluster = &clusters[i];
                    let advance = if k >= hang_from {
                        0.0
                    } else {
                        advance_at(cluster, pen)
                    };
                    Glyph {
                        text: CompactString::new(cluster.text),
                        x: pen,
                        advance,
                        line: line_index,
                        char_index: cluster.char_index,
                        char_len: cluster.char_len,
                    }
                }
                Piece::Ellipsis { char_index } => Glyph {
                    text: CompactString::new(ELLIPSIS),
                    x: pen,
                    advance: placement.ellipsis_width,
                    line: line_index,
                    char_index,
                    char_len: 0,
                },
            };
            pen += glyph.advance;
            glyphs.push(glyph);
        }
        let text_width = pen;

        let visible = glyphs.iter().filter(|g| g.advance > 0.0).count();
        let mut extra_per_gap = 0.0;
        if placement.justify && placement.line_width.is_finite() && visible > 1 {
            extra_per_gap = non_negative(placement.line_width - text_width) / (visible - 1) as f32;
        }

        let offset = if placement.justify {
            0.0
        } else {
            alignment_offset(placement.alignment, placement.line_width, text_width)
        };

        let mut shift = 0.0f32;
        let mut seen = 0usize;
        for glyph in &mut glyphs {
            glyph.x += placement.padding + offset + shift;
            if glyph.advance > 0.0 {
                seen += 1;
                if seen < visible {
                    glyph.advance += extra_per_gap;
                    shift += extra_per_gap;
                }
            }
        }
        let mut width = text_width + shift + 2.0 * placement.padding;
        let container_width = layout.container.width;
        if container_width.is_finite() {
            width = width.min(non_negative(container_width - offset));
        }

        let cluster_end = if truncated {
            pending.line.content_end.max(pending.line.range.end)
        } else {
            pending.line.range.end
        };
        let char_range =
            char_offset(clusters, pending.line.range.start)..char_offset(clusters, cluster_end);

        layout.glyphs.extend(glyphs);
        layout.fragments.push(LineFragment {
            rect: Rect::new(offset, placement.top, width, layout.line_height),
            char_range,
            glyph_range: glyph_start..layout.glyphs.len(),
            truncated,
        });
    }
}

struct LinePlacement {
    top: f32,
    padding: f32,
    line_width: f32,
    alignment: TextAlignment,
    justify: bool,
    ellipsis_width: f32,
}

/// 最宽一行的文本宽度（不含两侧 padding）
fn widest_line(layout: &Layout, padding: f32) -> f32 {
    layout
        .fragments
        .iter()
        .map(|f| non_negative(f.rect.w - 2.0 * padding))
        .fold(0.0, f32::max)
}

/// Character offset where cluster `index` starts; past the end maps to the text's end.
fn char_offset(clusters: &[Cluster<'_>], index: usize) -> usize {
    clusters
        .get(index)
        .map(|c| c.char_index)
        .unwrap_or_else(|| clusters.last().map(Cluster::char_end).unwrap_or(0))
}

fn alignment_offset(alignment: TextAlignment, line_width: f32, text_width: f32) -> f32 {
    if !line_width.is_finite() {
        return 0.0;
    }
    let free = non_negative(line_width - text_width);
    match alignment {
        TextAlignment::Left | TextAlignment::Natural | TextAlignment::Justified => 0.0,
        TextAlignment::Right => free,
        TextAlignment::Center => free / 2.0,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/engine.rs"]
mod tests;
