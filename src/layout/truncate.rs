use std::ops::Range;

use crate::style::LineBreakMode;

use super::line_break::{Cluster, WIDTH_EPSILON};

pub(crate) const ELLIPSIS: &str = "\u{2026}";

/// One visible item of a truncated line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Piece {
    Cluster(usize),
    /// Stands in for elided text starting at `char_index`.
    Ellipsis { char_index: usize },
}

/// Fits `range` of `clusters` into `width`, eliding text per `mode` and marking the cut with an
/// ellipsis. Called only for the last visible line when more text follows it.
pub(crate) fn truncate(
    mode: LineBreakMode,
    clusters: &[Cluster<'_>],
    range: Range<usize>,
    ellipsis_width: f32,
    width: f32,
) -> Vec<Piece> {
    let end_char = range
        .clone()
        .last()
        .map(|i| clusters[i].char_end())
        .or_else(|| clusters.get(range.start).map(|c| c.char_index))
        .unwrap_or_else(|| clusters.last().map(Cluster::char_end).unwrap_or(0));

    let total: f32 = range.clone().map(|i| clusters[i].advance).sum();
    if total + ellipsis_width <= width + WIDTH_EPSILON {
        let mut pieces: Vec<Piece> = range.map(Piece::Cluster).collect();
        pieces.push(Piece::Ellipsis {
            char_index: end_char,
        });
        return pieces;
    }

    if ellipsis_width > width + WIDTH_EPSILON {
        // No room for the marker; clip.
        let keep = fit_prefix(clusters, range.clone(), width);
        return (range.start..keep).map(Piece::Cluster).collect();
    }

    let budget = width - ellipsis_width;
    match mode {
        LineBreakMode::TruncateHead => {
            let keep_from = fit_suffix(clusters, range.clone(), budget);
            let keep_from = trim_leading_whitespace(clusters, keep_from, range.end);
            let mut pieces = vec![Piece::Ellipsis {
                char_index: clusters[range.start].char_index,
            }];
            pieces.extend((keep_from..range.end).map(Piece::Cluster));
            pieces
        }
        LineBreakMode::TruncateMiddle => {
            let prefix_end = fit_prefix(clusters, range.clone(), budget / 2.0);
            let prefix_width: f32 = (range.start..prefix_end)
                .map(|i| clusters[i].advance)
                .sum();
            let suffix_start = fit_suffix(clusters, prefix_end..range.end, budget - prefix_width);
            let suffix_start = trim_leading_whitespace(clusters, suffix_start, range.end);
            let prefix_end = trim_trailing_whitespace(clusters, range.start, prefix_end);

            let mut pieces: Vec<Piece> = (range.start..prefix_end).map(Piece::Cluster).collect();
            pieces.push(Piece::Ellipsis {
                char_index: clusters[prefix_end].char_index,
            });
            pieces.extend((suffix_start..range.end).map(Piece::Cluster));
            pieces
        }
        // Wrap modes never reach here; clip them like a tail truncation.
        _ => {
            let prefix_end = fit_prefix(clusters, range.clone(), budget);
            let prefix_end = trim_trailing_whitespace(clusters, range.start, prefix_end);
            let mut pieces: Vec<Piece> = (range.start..prefix_end).map(Piece::Cluster).collect();
            pieces.push(Piece::Ellipsis {
                char_index: clusters[prefix_end].char_index,
            });
            pieces
        }
    }
}

/// End of the longest prefix of `range` whose advances fit in `width`.
fn fit_prefix(clusters: &[Cluster<'_>], range: Range<usize>, width: f32) -> usize {
    let mut used = 0.0f32;
    for i in range.clone() {
        used += clusters[i].advance;
        if used > width + WIDTH_EPSILON {
            return i;
        }
    }
    range.end
}

/// Start of the longest suffix of `range` whose advances fit in `width`.
fn fit_suffix(clusters: &[Cluster<'_>], range: Range<usize>, width: f32) -> usize {
    let mut used = 0.0f32;
    for i in range.clone().rev() {
        used += clusters[i].advance;
        if used > width + WIDTH_EPSILON {
            return i + 1;
        }
    }
    range.start
}

fn trim_trailing_whitespace(clusters: &[Cluster<'_>], start: usize, mut end: usize) -> usize {
    while end > start && clusters[end - 1].is_whitespace() {
        end -= 1;
    }
    end
}

fn trim_leading_whitespace(clusters: &[Cluster<'_>], mut start: usize, end: usize) -> usize {
    while start < end && clusters[start].is_whitespace() {
        start += 1;
    }
    start
}

#[cfg(test)]
#[path = "../../tests/unit/layout/truncate.rs"]
mod tests;
