//! Red to green score coloring and small hex/RGB helpers.
//!
//! Every function here is pure. Hex colors are `#rrggbb` strings; parsing
//! accepts an optional `#` and either case, output is always lowercase.
//! The interpolation follows <https://gist.github.com/mlocati/7210513>.

mod palette;

pub use palette::{FlagPalette, flag_colors, flag_colors_by_name};

use lazy_static::lazy_static;
use log::warn;
use regex::Regex;

pub const BLACK_TEXT: &str = "#000000";
pub const WHITE_TEXT: &str = "#FFFFFF";
pub const DEFAULT_GRADIENT_DIRECTION: &str = "to right";

lazy_static! {
    static ref HEX_COLOR: Regex =
        Regex::new(r"(?i)^#?([a-f\d]{2})([a-f\d]{2})([a-f\d]{2})$").expect("hex color pattern is valid");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn to_hex(self) -> String {
        rgb_to_hex(self.r, self.g, self.b)
    }
}

fn channel(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

/// Maps a percentage to a color: red at 0, yellow at 50, green at 100.
/// Out-of-range input is clamped; NaN is treated as 0.
pub fn perc2color(percentage: f64) -> String {
    let percentage = if percentage.is_nan() { 0.0 } else { percentage.clamp(0.0, 100.0) };

    let (r, g) = if percentage < 50.0 {
        (255, channel(5.1 * percentage))
    } else {
        (channel(510.0 - 5.10 * percentage), 255)
    };

    rgb_to_hex(r, g, 0)
}

/// Color for `score` out of `max_score`. A zero `max_score` is the caller's
/// problem: a positive score saturates to green, a zero score maps to red.
pub fn color_for_score(score: f64, max_score: f64) -> String {
    perc2color(score / max_score * 100.0)
}

pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let caps = HEX_COLOR.captures(hex)?;
    let part = |i: usize| u8::from_str_radix(&caps[i], 16).ok();
    Some(Rgb { r: part(1)?, g: part(2)?, b: part(3)? })
}

pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// `rgba(r, g, b, alpha)`, or the input unchanged if it is not a hex color.
pub fn color_with_alpha(hex: &str, alpha: f64) -> String {
    match hex_to_rgb(hex) {
        Some(Rgb { r, g, b }) => format!("rgba({}, {}, {}, {})", r, g, b, alpha),
        None => {
            warn!("Cannot apply alpha to unparseable color {:?}", hex);
            hex.to_string()
        }
    }
}

/// Blends each channel toward white by `amount` (0..1).
pub fn lighten_color(hex: &str, amount: f64) -> String {
    let Some(rgb) = hex_to_rgb(hex) else {
        return hex.to_string();
    };
    let lift = |c: u8| channel(c as f64 + (255.0 - c as f64) * amount);
    rgb_to_hex(lift(rgb.r), lift(rgb.g), lift(rgb.b))
}

/// Blends each channel toward black by `amount` (0..1).
pub fn darken_color(hex: &str, amount: f64) -> String {
    let Some(rgb) = hex_to_rgb(hex) else {
        return hex.to_string();
    };
    let drop = |c: u8| channel(c as f64 * (1.0 - amount));
    rgb_to_hex(drop(rgb.r), drop(rgb.g), drop(rgb.b))
}

pub fn create_gradient(from: &str, to: &str, direction: Option<&str>) -> String {
    format!(
        "linear-gradient({}, {}, {})",
        direction.unwrap_or(DEFAULT_GRADIENT_DIRECTION),
        from,
        to
    )
}

/// Black or white text, whichever reads better on `background`.
pub fn text_color_for_background(background: &str) -> &'static str {
    let Some(Rgb { r, g, b }) = hex_to_rgb(background) else {
        return BLACK_TEXT;
    };

    let luminance = (0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64) / 255.0;
    if luminance > 0.5 { BLACK_TEXT } else { WHITE_TEXT }
}
