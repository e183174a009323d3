//! Arrow color parsing.

use std::str::FromStr;

use ratatui::style::Color;

use crate::error::{FieldError, Result};

/// Parse a color name.
///
/// Accepts the single-letter plot codes (`k`, `r`, `g`, `b`, `c`, `m`, `y`,
/// `w`) plus anything ratatui understands: names such as `lightblue`, hex
/// `#rrggbb` and palette indices.
pub fn parse_color(name: &str) -> Result<Color> {
    let name = name.trim();
    let color = match name {
        "k" => Color::Black,
        "r" => Color::Red,
        "g" => Color::Green,
        "b" => Color::Blue,
        "c" => Color::Cyan,
        "m" => Color::Magenta,
        "y" => Color::Yellow,
        "w" => Color::White,
        other => Color::from_str(other).map_err(|_| FieldError::invalid_color(other))?,
    };
    Ok(color)
}
