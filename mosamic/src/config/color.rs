//! Background color representation and parsing.

use image::Rgba;

use super::ConfigError;

/// An RGBA color used for canvas fills.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Fully transparent black.
    pub const TRANSPARENT: Color = Color {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    /// Opaque color from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }

    /// Color from RGBA components.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }
}

impl From<Color> for Rgba<u8> {
    fn from(c: Color) -> Self {
        Rgba([c.r, c.g, c.b, c.a])
    }
}

/// Parses a background color value.
///
/// Accepts `transparent`, and hex colors in `#rgb`, `#rrggbb` or
/// `#rrggbbaa` form. The leading `#` is optional so that the value can
/// travel unescaped in a query string.
pub fn parse_background(value: &str) -> Result<Color, ConfigError> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("transparent") {
        return Ok(Color::TRANSPARENT);
    }

    let hex = value.strip_prefix('#').unwrap_or(value);
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ConfigError::invalid_value(
            "background",
            value,
            "expected 'transparent' or a hex color",
        ));
    }

    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    let nibble = |s: &str| channel(s).map(|v| v * 16 + v);

    let color = match hex.len() {
        3 => Some(Color::rgb(
            nibble(&hex[0..1]).unwrap_or(0),
            nibble(&hex[1..2]).unwrap_or(0),
            nibble(&hex[2..3]).unwrap_or(0),
        )),
        6 => match (channel(&hex[0..2]), channel(&hex[2..4]), channel(&hex[4..6])) {
            (Some(r), Some(g), Some(b)) => Some(Color::rgb(r, g, b)),
            _ => None,
        },
        8 => match (
            channel(&hex[0..2]),
            channel(&hex[2..4]),
            channel(&hex[4..6]),
            channel(&hex[6..8]),
        ) {
            (Some(r), Some(g), Some(b), Some(a)) => Some(Color::rgba(r, g, b, a)),
            _ => None,
        },
        _ => None,
    };

    color.ok_or_else(|| {
        ConfigError::invalid_value(
            "background",
            value,
            "expected 'transparent' or a 3/6/8 digit hex color",
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_transparent() {
        assert_eq!(parse_background("transparent").unwrap(), Color::TRANSPARENT);
        assert_eq!(parse_background("Transparent").unwrap(), Color::TRANSPARENT);
    }

    #[test]
    fn test_parse_six_digit_hex() {
        assert_eq!(
            parse_background("#102030").unwrap(),
            Color::rgb(0x10, 0x20, 0x30)
        );
        // Leading '#' is optional.
        assert_eq!(
            parse_background("ffffff").unwrap(),
            Color::rgb(255, 255, 255)
        );
    }

    #[test]
    fn test_parse_eight_digit_hex_carries_alpha() {
        assert_eq!(
            parse_background("#10203040").unwrap(),
            Color::rgba(0x10, 0x20, 0x30, 0x40)
        );
    }

    #[test]
    fn test_parse_three_digit_hex_expands() {
        assert_eq!(parse_background("#fff").unwrap(), Color::rgb(255, 255, 255));
        assert_eq!(parse_background("#a0c").unwrap(), Color::rgb(0xAA, 0x00, 0xCC));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_background("mauve").is_err());
        assert!(parse_background("#12").is_err());
        assert!(parse_background("#12345").is_err());
        let err = parse_background("xyz").unwrap_err();
        assert!(err.to_string().contains("background"));
    }

    #[test]
    fn test_color_into_rgba() {
        let rgba: Rgba<u8> = Color::rgba(1, 2, 3, 4).into();
        assert_eq!(rgba, Rgba([1, 2, 3, 4]));
    }
}
