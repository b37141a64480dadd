use super::*;
use crate::layout::LayoutEngine;
use crate::style::{FontDescriptor, StyleAttributes};
use crate::text::build;

fn two_lines(text: &str) -> Layout {
    let style = StyleAttributes::default()
        .with_font(FontDescriptor::system(16.0))
        .with_max_lines(0);
    let engine: LayoutEngine = LayoutEngine::default();
    engine.layout(&build(Some(text), &style), Size::with_width(200.0))
}

#[test]
fn nearest_glyph_inside_and_between() {
    let layout = two_lines("ab\ncd");
    assert_eq!(layout.nearest_glyph(Point::new(3.0, 5.0)), Some(0));
    assert_eq!(layout.nearest_glyph(Point::new(12.0, 5.0)), Some(1));
    assert_eq!(layout.nearest_glyph(Point::new(3.0, 25.0)), Some(3));
    assert_eq!(layout.nearest_glyph(Point::new(9.0, 39.0)), Some(4));
}

#[test]
fn nearest_glyph_clamps_outside_points() {
    let layout = two_lines("ab\ncd");
    // Past the end of the first line lands on its separator.
    assert_eq!(layout.nearest_glyph(Point::new(100.0, 5.0)), Some(2));
    assert_eq!(layout.nearest_glyph(Point::new(-5.0, 5.0)), Some(0));
    assert_eq!(layout.nearest_glyph(Point::new(3.0, -10.0)), Some(0));
    assert_eq!(layout.nearest_glyph(Point::new(3.0, 500.0)), Some(3));
}

#[test]
fn nearest_glyph_on_empty_trailing_line() {
    let layout = two_lines("ab\n");
    assert_eq!(layout.line_count(), 2);
    assert_eq!(layout.nearest_glyph(Point::new(0.0, 25.0)), Some(2));
}

#[test]
fn empty_layout_has_no_nearest_glyph() {
    let layout = two_lines("");
    assert_eq!(layout.nearest_glyph(Point::new(0.0, 0.0)), None);
    assert_eq!(layout.glyph_rect(0), None);
    assert_eq!(layout.char_index_for_glyph(0), None);
}

#[test]
fn glyph_rect_spans_the_line_box() {
    let layout = two_lines("ab\ncd");
    assert_eq!(layout.glyph_rect(0), Some(Rect::new(0.0, 0.0, 8.0, 20.0)));
    assert_eq!(layout.glyph_rect(4), Some(Rect::new(8.0, 20.0, 8.0, 20.0)));
    // Separators have no footprint.
    assert_eq!(layout.glyph_rect(2), Some(Rect::new(16.0, 0.0, 0.0, 20.0)));
}

#[test]
fn glyph_maps_to_its_character() {
    let layout = two_lines("ab\ncd");
    assert_eq!(layout.char_index_for_glyph(3), Some(3));
    assert_eq!(layout.glyphs_in(&layout.fragments()[1]).len(), 2);
    assert!(!layout.is_truncated());
}
