//! Text layout: styled text in, line fragments and glyph geometry out.
//!
//! - grapheme clusters are the glyph unit, measured through [`crate::text::FontMetrics`]
//! - greedy line breaking at word or grapheme boundaries
//! - tail/head/middle truncation of the last visible line
//! - alignment, including justification of wrapped lines

mod engine;
mod fragment;
mod line_break;
mod truncate;

pub use engine::LayoutEngine;
pub use fragment::{Glyph, Layout, LineFragment};
