use super::*;
use crate::core::geom::EdgeInsets;
use crate::style::{Color, LineBreakMode, TextAlignment};

#[test]
fn empty_object_is_the_default_style() {
    assert_eq!(parse_style("{}").unwrap(), StyleAttributes::default());
}

#[test]
fn partial_style_fills_in_defaults() {
    let style = parse_style(
        r##"{
            "font": { "size": 20 },
            "alignment": "center",
            "max_lines": 0,
            "line_break_mode": "word_wrap",
            "text_color": "#ff0000",
            "shadow": { "color": "black" },
            "container_inset": { "left": 4, "top": 2 }
        }"##,
    )
    .unwrap();

    assert_eq!(style.font.family.as_str(), "system");
    assert_eq!(style.font.size, 20.0);
    assert_eq!(style.alignment, TextAlignment::Center);
    assert_eq!(style.max_lines, 0);
    assert_eq!(style.line_break_mode, LineBreakMode::WordWrap);
    assert_eq!(style.text_color, Color::rgb(255, 0, 0));
    assert_eq!(style.shadow.map(|s| s.offset.dy), Some(-1.0));
    assert_eq!(style.container_inset, EdgeInsets::new(4.0, 2.0, 0.0, 0.0));
}

#[test]
fn bad_json_is_a_parse_error() {
    assert!(matches!(parse_style("{"), Err(StyleError::Parse(_))));
    assert!(matches!(
        parse_style(r#"{ "text_color": "mauve-ish" }"#),
        Err(StyleError::Parse(_))
    ));
    assert!(matches!(
        parse_style(r#"{ "alignment": "sideways" }"#),
        Err(StyleError::Parse(_))
    ));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_style(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, StyleError::Io(_)));
    assert!(err.to_string().starts_with("Failed to read style file"));
}

#[test]
fn save_then_load_keeps_style() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("style.json");
    let style = StyleAttributes::default()
        .with_alignment(TextAlignment::Right)
        .with_max_lines(3)
        .with_container_inset(EdgeInsets::uniform(1.5));

    save_style(&path, &style).unwrap();
    assert_eq!(load_style(&path).unwrap(), style);
}
