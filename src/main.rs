use std::path::PathBuf;
use std::process::ExitCode;

use hitlabel::core::{Point, Size, UNBOUNDED};
use hitlabel::hit_test::HitResult;
use hitlabel::label::{InteractiveLabel, LabelDelegate};
use hitlabel::logging;
use hitlabel::settings::{load_style, StyleError};

const USAGE: &str = "usage: hitlabel <text> [--width=W] [--height=H] [--style=path.json] [--tap=X,Y]";
/// 参数错误时的退出码
const USAGE_STATUS: u8 = 2;

#[derive(Debug)]
struct Args {
    text: String,
    width: f32,
    height: f32,
    style: Option<PathBuf>,
    taps: Vec<Point>,
}

fn parse_args(mut raw: impl Iterator<Item = String>) -> Result<Args, String> {
    let mut text = None;
    let mut width = UNBOUNDED;
    let mut height = UNBOUNDED;
    let mut style = None;
    let mut taps = Vec::new();

    while let Some(arg) = raw.next() {
        if let Some(value) = arg.strip_prefix("--width=") {
            width = parse_length(value)?;
        } else if let Some(value) = arg.strip_prefix("--height=") {
            height = parse_length(value)?;
        } else if let Some(value) = arg.strip_prefix("--style=") {
            style = Some(PathBuf::from(value));
        } else if let Some(value) = arg.strip_prefix("--tap=") {
            taps.push(parse_point(value)?);
        } else if arg.starts_with("--") {
            return Err(format!("unknown option: {}", arg));
        } else if text.is_none() {
            text = Some(arg);
        } else {
            return Err(format!("unexpected argument: {}", arg));
        }
    }

    Ok(Args {
        text: text.ok_or_else(|| "missing text".to_string())?,
        width,
        height,
        style,
        taps,
    })
}

fn parse_length(value: &str) -> Result<f32, String> {
    match value.trim().parse::<f32>() {
        Ok(v) if v >= 0.0 => Ok(v),
        _ => Err(format!("invalid length: {}", value)),
    }
}

fn parse_point(value: &str) -> Result<Point, String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("invalid point: {}", value))?;
    let x = x.trim().parse::<f32>().map_err(|_| format!("invalid point: {}", value))?;
    let y = y.trim().parse::<f32>().map_err(|_| format!("invalid point: {}", value))?;
    Ok(Point::new(x, y))
}

struct PrintTaps;

impl LabelDelegate for PrintTaps {
    fn did_tap_character(&mut self, index: usize) {
        println!("  -> character {}", index);
    }

    fn did_tap_blank(&mut self) {
        println!("  -> blank");
    }
}

fn build_label(args: &Args) -> Result<InteractiveLabel, StyleError> {
    let mut label = InteractiveLabel::new();
    if let Some(path) = &args.style {
        label.set_style(load_style(path)?);
    }
    label.set_text(Some(args.text.as_str()));
    Ok(label)
}

fn main() -> ExitCode {
    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{}\n{}", msg, USAGE);
            return ExitCode::from(USAGE_STATUS);
        }
    };

    let _logging = logging::init(&logging::default_log_dir());

    let mut label = match build_label(&args) {
        Ok(label) => label,
        Err(err) => {
            tracing::error!(error = %err, "style not loaded");
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let proposed = Size::new(args.width, args.height);
    let fitting = label.size_that_fits(proposed);
    label.set_bounds(proposed);
    let layout = label.layout();

    println!("used size: {} x {}", layout.used_size().width, layout.used_size().height);
    println!("fitting size: {} x {}", fitting.width, fitting.height);
    for (i, fragment) in layout.fragments().iter().enumerate() {
        let text: String = layout
            .glyphs_in(fragment)
            .iter()
            .map(|g| g.text.as_str())
            .filter(|t| !t.chars().all(char::is_control))
            .collect();
        let r = fragment.rect;
        println!(
            "line {}: [{}, {}, {}, {}] chars {:?}{} {:?}",
            i,
            r.x,
            r.y,
            r.w,
            r.h,
            fragment.char_range,
            if fragment.truncated { " (truncated)" } else { "" },
            text
        );
    }

    let mut delegate = PrintTaps;
    for tap in args.taps {
        println!("tap ({}, {})", tap.x, tap.y);
        if let HitResult::CharacterIndex(index) = label.touch_ended(tap, &mut delegate) {
            tracing::info!(index, "character tapped");
        }
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
#[path = "../tests/unit/main.rs"]
mod tests;
