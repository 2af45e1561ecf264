use super::{color_with_alpha, darken_color, lighten_color};
use crate::models::Flag;
use serde::Serialize;

const GREEN_BASE: &str = "#22C55E";
const YELLOW_BASE: &str = "#EAB308";
const RED_BASE: &str = "#EF4444";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlagPalette {
    pub primary: String,
    pub light: String,
    pub lighter: String,
    pub dark: String,
    pub darker: String,
}

impl FlagPalette {
    fn from_base(base: &str) -> Self {
        Self {
            primary: base.to_string(),
            light: lighten_color(base, 0.3),
            lighter: lighten_color(base, 0.6),
            dark: darken_color(base, 0.2),
            darker: darken_color(base, 0.4),
        }
    }

    /// Primary color as `rgba(...)` with the given opacity.
    pub fn alpha(&self, alpha: f64) -> String {
        color_with_alpha(&self.primary, alpha)
    }
}

pub fn flag_colors(flag: Flag) -> FlagPalette {
    let base = match flag {
        Flag::Green => GREEN_BASE,
        Flag::Yellow => YELLOW_BASE,
        Flag::Red => RED_BASE,
    };
    FlagPalette::from_base(base)
}

/// Palette for a wire flag name; unknown names get the red palette.
pub fn flag_colors_by_name(name: &str) -> FlagPalette {
    flag_colors(Flag::from_name(name).unwrap_or(Flag::Red))
}
