//! Color parsing for input boundaries.
//!
//! The document model stores color strings verbatim. These helpers are for
//! front ends: turning a stored value into something a native color picker
//! accepts, and flagging values that will not render.
//!
//! Supports `#RGB`, `#RRGGBB`, `#RRGGBBAA`, `rgb(r,g,b)` and `rgba(r,g,b,a)`.
//! In `rgba()` the alpha is either 0.0-1.0 (float) or 0-255 (integer).

mod parse;


use tinter_common::{Color, ThemeError};

use parse::{parse_hex, parse_rgba, HEX_RE, RGBA_RE};

/// Fallback shown by the picker for values it cannot represent.
pub const PICKER_FALLBACK: &str = "#000000";

/// Parse a color string into a [`Color`].
pub fn parse_color(s: &str) -> Result<Color, ThemeError> {
    let s = s.trim();

    if s.starts_with('#') {
        return parse_hex(s)
            .ok_or_else(|| ThemeError::ParseError(format!("invalid hex color: {s}")));
    }

    if s.starts_with("rgba(") || s.starts_with("rgb(") {
        return parse_rgba(s)
            .ok_or_else(|| ThemeError::ParseError(format!("invalid rgba color: {s}")));
    }

    Err(ThemeError::ParseError(format!(
        "unrecognized color format: {s}"
    )))
}

/// Whether a string is one of the recognized color formats.
pub fn validate_color(s: &str) -> bool {
    let s = s.trim();
    if s.starts_with('#') {
        return HEX_RE.is_match(s);
    }
    if s.starts_with("rgba(") || s.starts_with("rgb(") {
        return RGBA_RE.is_match(s);
    }
    false
}

/// `#rrggbb` for the color picker. Alpha is dropped; anything unparseable
/// (named colors, CSS shadows, numbers) becomes [`PICKER_FALLBACK`].
pub fn picker_hex(value: &str) -> String {
    match parse_color(value) {
        Ok(color) => color.to_rgb_hex(),
        Err(_) => PICKER_FALLBACK.to_string(),
    }
}
