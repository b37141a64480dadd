use std::ops::Range;

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::style::{FontDescriptor, LineBreakMode};
use crate::text::metrics::is_line_separator;
use crate::text::FontMetrics;

/// 浮点累加误差容限：比较行宽时使用
pub(crate) const WIDTH_EPSILON: f32 = 1e-3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ClusterKind {
    Separator,
    Tab,
    Whitespace,
    Narrow,
    Wide,
}

/// 源文本中的一个字形簇（grapheme cluster）及其度量
#[derive(Clone, Debug)]
pub(crate) struct Cluster<'a> {
    pub text: &'a str,
    pub char_index: usize,
    pub char_len: usize,
    pub kind: ClusterKind,
    /// Advance outside tab handling; tabs resolve against the pen position.
    pub advance: f32,
}

impl Cluster<'_> {
    pub fn char_end(&self) -> usize {
        self.char_index + self.char_len
    }

    pub fn is_whitespace(&self) -> bool {
        matches!(self.kind, ClusterKind::Whitespace | ClusterKind::Tab)
    }
}

pub(crate) fn collect_clusters<'a, M: FontMetrics>(
    text: &'a str,
    metrics: &M,
    font: &FontDescriptor,
) -> Vec<Cluster<'a>> {
    let mut clusters = Vec::new();
    let mut acc_char = 0usize;

    for grapheme in text.graphemes(true) {
        let kind = if is_line_separator(grapheme) {
            ClusterKind::Separator
        } else if grapheme == "\t" {
            ClusterKind::Tab
        } else if grapheme.chars().all(char::is_whitespace) {
            ClusterKind::Whitespace
        } else if grapheme.width() >= 2 {
            ClusterKind::Wide
        } else {
            ClusterKind::Narrow
        };

        let advance = match kind {
            ClusterKind::Separator => 0.0,
            ClusterKind::Tab => metrics.tab_interval(font),
            _ => metrics.advance(font, grapheme),
        };

        let char_len = grapheme.chars().count();
        clusters.push(Cluster {
            text: grapheme,
            char_index: acc_char,
            char_len,
            kind,
            advance,
        });
        acc_char += char_len;
    }

    clusters
}

/// Cluster index ranges of paragraphs. Each range includes its trailing separator; text that
/// ends in a separator gets a final empty paragraph.
pub(crate) fn paragraphs(clusters: &[Cluster<'_>]) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    let mut start = 0;
    for (i, cluster) in clusters.iter().enumerate() {
        if cluster.kind == ClusterKind::Separator {
            ranges.push(start..i + 1);
            start = i + 1;
        }
    }
    if start < clusters.len() || clusters.last().is_some_and(|c| c.kind == ClusterKind::Separator)
    {
        ranges.push(start..clusters.len());
    }
    ranges
}

/// 笔位于行内 `x` 处时该字形簇的前进宽度（Tab 对齐到下一个制表位）
pub(crate) fn advance_at(cluster: &Cluster<'_>, x: f32) -> f32 {
    if cluster.kind != ClusterKind::Tab {
        return cluster.advance;
    }
    let interval = cluster.advance;
    if interval <= 0.0 || !x.is_finite() {
        return interval.max(0.0);
    }
    interval - (x % interval)
}

/// A line produced by breaking a paragraph.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct BrokenLine {
    pub range: Range<usize>,
    /// End of the paragraph's content (its separator excluded).
    pub content_end: usize,
    /// Line ended because the next cluster did not fit, not at a paragraph end.
    pub wrapped: bool,
}

pub(crate) struct LineBreaker<'c, 'a> {
    clusters: &'c [Cluster<'a>],
    width: f32,
    mode: LineBreakMode,
}

impl<'c, 'a> LineBreaker<'c, 'a> {
    pub fn new(clusters: &'c [Cluster<'a>], width: f32, mode: LineBreakMode) -> Self {
        Self {
            clusters,
            width,
            mode,
        }
    }

    /// Breaks one paragraph greedily into lines.
    pub fn break_paragraph(&self, paragraph: Range<usize>) -> Vec<BrokenLine> {
        let content_end = if paragraph
            .clone()
            .last()
            .is_some_and(|i| self.clusters[i].kind == ClusterKind::Separator)
        {
            paragraph.end - 1
        } else {
            paragraph.end
        };

        let mut lines = Vec::new();
        let mut start = paragraph.start;
        loop {
            match self.next_break(start, content_end) {
                Some(brk) => {
                    lines.push(BrokenLine {
                        range: start..brk,
                        content_end,
                        wrapped: true,
                    });
                    start = brk;
                }
                None => {
                    lines.push(BrokenLine {
                        range: start..paragraph.end,
                        content_end,
                        wrapped: false,
                    });
                    return lines;
                }
            }
        }
    }

    /// Index the line starting at `start` must break before, or `None` when the rest of the
    /// paragraph fits.
    fn next_break(&self, start: usize, content_end: usize) -> Option<usize> {
        if !self.width.is_finite() {
            return None;
        }

        let mut x = 0.0f32;
        let mut opportunity = None;
        for i in start..content_end {
            let cluster = &self.clusters[i];
            let advance = advance_at(cluster, x);
            if cluster.is_whitespace() {
                // 行尾空白悬挂在边界外，不触发换行
                x += advance;
                continue;
            }

            if i > start && self.can_break_before(i) {
                opportunity = Some(i);
            }

            if i > start && x + advance > self.width + WIDTH_EPSILON {
                return Some(opportunity.unwrap_or(i));
            }
            x += advance;
        }
        None
    }

    fn can_break_before(&self, i: usize) -> bool {
        if self.mode.breaks_anywhere() {
            return true;
        }
        let prev = &self.clusters[i - 1];
        let cur = &self.clusters[i];
        prev.is_whitespace() || prev.kind == ClusterKind::Wide || cur.kind == ClusterKind::Wide
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/line_break.rs"]
mod tests;
