use super::*;

fn font() -> FontDescriptor {
    FontDescriptor::system(16.0)
}

#[test]
fn narrow_and_wide_graphemes() {
    let m = MonospaceMetrics::default();
    assert_eq!(m.advance(&font(), "a"), 8.0);
    assert_eq!(m.advance(&font(), "中"), 16.0);
    assert_eq!(m.advance(&font(), "e\u{301}"), 8.0);
}

#[test]
fn separators_have_no_advance() {
    let m = MonospaceMetrics::default();
    assert_eq!(m.advance(&font(), "\n"), 0.0);
    assert_eq!(m.advance(&font(), "\r\n"), 0.0);
}

#[test]
fn line_height_scales_with_size() {
    let m = MonospaceMetrics::default();
    assert_eq!(m.line_height(&font()), 20.0);
    assert_eq!(m.line_height(&FontDescriptor::system(8.0)), 10.0);
}

#[test]
fn tab_interval_is_four_spaces() {
    let m = MonospaceMetrics::default();
    assert_eq!(m.tab_interval(&font()), 32.0);
}

#[test]
fn invalid_point_size_falls_back() {
    let m = MonospaceMetrics::default();
    let bad = FontDescriptor::system(-3.0);
    assert_eq!(m.line_height(&bad), m.line_height(&FontDescriptor::default()));
}
