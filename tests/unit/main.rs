use tempfile::tempdir;

use super::*;

fn args(list: &[&str]) -> std::result::Result<Args, String> {
    parse_args(list.iter().map(|s| s.to_string()))
}

#[test]
fn parse_args_reads_sizes_style_and_repeated_taps() {
    let parsed = args(&[
        "Hello, world",
        "--width=200",
        "--height=40.5",
        "--style=label.json",
        "--tap=4,10",
        "--tap= 90 , 10 ",
    ])
    .unwrap();

    assert_eq!(parsed.text, "Hello, world");
    assert_eq!(parsed.width, 200.0);
    assert_eq!(parsed.height, 40.5);
    assert_eq!(parsed.style, Some(PathBuf::from("label.json")));
    assert_eq!(parsed.taps, vec![Point::new(4.0, 10.0), Point::new(90.0, 10.0)]);
}

#[test]
fn parse_args_defaults_to_unbounded_size() {
    let parsed = args(&["x"]).unwrap();
    assert_eq!(parsed.width, UNBOUNDED);
    assert_eq!(parsed.height, UNBOUNDED);
    assert!(parsed.style.is_none());
    assert!(parsed.taps.is_empty());
}

#[test]
fn parse_args_rejects_negative_lengths() {
    assert_eq!(args(&["x", "--width=-1"]).unwrap_err(), "invalid length: -1");
    assert_eq!(args(&["x", "--height=tall"]).unwrap_err(), "invalid length: tall");
}

#[test]
fn parse_args_rejects_points_without_both_coordinates() {
    assert_eq!(args(&["x", "--tap=1"]).unwrap_err(), "invalid point: 1");
    assert_eq!(args(&["x", "--tap=1,y"]).unwrap_err(), "invalid point: 1,y");
}

#[test]
fn parse_args_rejects_unknown_options() {
    assert_eq!(args(&["x", "--bogus"]).unwrap_err(), "unknown option: --bogus");
}

#[test]
fn parse_args_requires_exactly_one_text() {
    assert_eq!(args(&[]).unwrap_err(), "missing text");
    assert_eq!(args(&["--width=10"]).unwrap_err(), "missing text");
    assert_eq!(args(&["one", "two"]).unwrap_err(), "unexpected argument: two");
}

#[test]
fn usage_errors_exit_with_status_two() {
    assert_eq!(USAGE_STATUS, 2);
    assert!(USAGE.starts_with("usage: hitlabel <text>"));
}

#[test]
fn build_label_applies_style_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("style.json");
    std::fs::write(&path, r#"{ "font": { "size": 16 }, "max_lines": 0 }"#).unwrap();

    let parsed = args(&["ab", &format!("--style={}", path.display())]).unwrap();
    let mut label = build_label(&parsed).unwrap();
    assert_eq!(label.text(), Some("ab"));
    assert_eq!(label.style().max_lines, 0);
    assert_eq!(label.size_that_fits(Size::new(100.0, 100.0)), Size::new(16.0, 20.0));
}

#[test]
fn build_label_reports_missing_style_file() {
    let dir = tempdir().unwrap();
    let parsed = args(&[
        "ab",
        &format!("--style={}", dir.path().join("missing.json").display()),
    ])
    .unwrap();
    assert!(matches!(build_label(&parsed), Err(StyleError::Io(_))));
}
