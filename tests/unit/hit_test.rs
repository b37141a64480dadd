use super::*;
use crate::core::geom::{Size, UNBOUNDED};
use crate::layout::LayoutEngine;
use crate::style::{FontDescriptor, LineBreakMode, StyleAttributes};
use crate::text::build;

fn style() -> StyleAttributes {
    StyleAttributes::default().with_font(FontDescriptor::system(16.0))
}

fn lay(text: Option<&str>, style: &StyleAttributes, available: Size) -> Layout {
    let engine: LayoutEngine = LayoutEngine::default();
    engine.layout(&build(text, style), available)
}

#[test]
fn point_inside_first_glyph_hits_index_zero() {
    let layout = lay(Some("A"), &style(), Size::new(200.0, 100.0));
    assert_eq!(
        hit_test(Point::new(4.0, 10.0), &layout, EdgeInsets::ZERO),
        HitResult::CharacterIndex(0)
    );
}

#[test]
fn far_away_points_are_blank() {
    let layout = lay(Some("A"), &style(), Size::new(200.0, 100.0));
    for p in [
        Point::new(4.0, 1_000.0),
        Point::new(-50.0, 10.0),
        Point::new(4.0, -3.0),
        Point::new(10_000.0, 10_000.0),
    ] {
        assert_eq!(hit_test(p, &layout, EdgeInsets::ZERO), HitResult::Blank);
    }
}

#[test]
fn empty_layout_is_always_blank() {
    let layout = lay(None, &style(), Size::new(200.0, 100.0));
    for p in [Point::new(0.0, 0.0), Point::new(5.0, 5.0), Point::new(-1.0, 300.0)] {
        assert_eq!(hit_test(p, &layout, EdgeInsets::ZERO), HitResult::Blank);
    }
}

#[test]
fn hello_world_taps() {
    let s = style().with_max_lines(1);
    let layout = lay(Some("Hello, world"), &s, Size::with_width(200.0));

    assert_eq!(
        hit_test(Point::new(4.0, 10.0), &layout, EdgeInsets::ZERO),
        HitResult::CharacterIndex(0)
    );
    // 'w' is the eighth cluster.
    assert_eq!(
        hit_test(Point::new(7.5 * 8.0, 10.0), &layout, EdgeInsets::ZERO),
        HitResult::CharacterIndex(7)
    );
    assert_eq!(
        hit_test(Point::new(4.0, 5.0 * 20.0), &layout, EdgeInsets::ZERO),
        HitResult::Blank
    );
    // Inside the content box but past the end of the line.
    assert_eq!(
        hit_test(Point::new(150.0, 10.0), &layout, EdgeInsets::ZERO),
        HitResult::Blank
    );
}

#[test]
fn insets_shift_the_content_box() {
    let s = style().with_container_inset(EdgeInsets::new(10.0, 20.0, 0.0, 0.0));
    let layout = lay(Some("AB"), &s, Size::new(200.0, 100.0));

    assert_eq!(
        hit_test(Point::new(14.0, 30.0), &layout, EdgeInsets::new(10.0, 20.0, 0.0, 0.0)),
        HitResult::CharacterIndex(0)
    );
    assert_eq!(
        hit_test(Point::new(22.0, 30.0), &layout, EdgeInsets::new(10.0, 20.0, 0.0, 0.0)),
        HitResult::CharacterIndex(1)
    );
    // Inside the inset itself.
    assert_eq!(
        hit_test(Point::new(4.0, 10.0), &layout, EdgeInsets::new(10.0, 20.0, 0.0, 0.0)),
        HitResult::Blank
    );
}

#[test]
fn hanging_space_on_wrapped_line_is_blank() {
    let s = style()
        .with_max_lines(0)
        .with_line_break_mode(LineBreakMode::WordWrap);
    let layout = lay(Some("ab cd"), &s, Size::new(24.0, UNBOUNDED));
    assert_eq!(layout.line_count(), 2);

    // The space sits right after "ab" with no advance.
    assert_eq!(
        hit_test(Point::new(20.0, 10.0), &layout, EdgeInsets::ZERO),
        HitResult::Blank
    );
    assert_eq!(
        hit_test(Point::new(4.0, 30.0), &layout, EdgeInsets::ZERO),
        HitResult::CharacterIndex(3)
    );
}

#[test]
fn ellipsis_maps_to_first_elided_character() {
    let s = style().with_line_break_mode(LineBreakMode::TruncateTail);
    let layout = lay(Some("abcdefgh"), &s, Size::new(40.0, 20.0));
    assert!(layout.is_truncated());

    // "abcd" then the ellipsis in the fifth cell.
    assert_eq!(
        hit_test(Point::new(36.0, 10.0), &layout, EdgeInsets::ZERO),
        HitResult::CharacterIndex(4)
    );
}

#[test]
fn hit_test_is_total_over_a_grid() {
    let s = style()
        .with_max_lines(0)
        .with_line_break_mode(LineBreakMode::CharWrap);
    let layout = lay(Some("ab\n\ncdé中 f"), &s, Size::new(40.0, 200.0));
    let len = build(Some("ab\n\ncdé中 f"), &s).char_len();

    let mut y = -30.0;
    while y < 230.0 {
        let mut x = -30.0;
        while x < 70.0 {
            match hit_test(Point::new(x, y), &layout, EdgeInsets::ZERO) {
                HitResult::CharacterIndex(i) => assert!(i <= len),
                HitResult::Blank => {}
            }
            x += 3.0;
        }
        y += 3.0;
    }
}

#[test]
fn glyph_rect_at_reports_local_rect() {
    let insets = EdgeInsets::new(5.0, 5.0, 0.0, 0.0);
    let s = style().with_container_inset(insets);
    let layout = lay(Some("xy"), &s, Size::new(100.0, 100.0));

    assert_eq!(
        glyph_rect_at(Point::new(15.0, 10.0), &layout, insets),
        Some(Rect::new(13.0, 5.0, 8.0, 20.0))
    );
    assert_eq!(glyph_rect_at(Point::new(90.0, 10.0), &layout, insets), None);
}
