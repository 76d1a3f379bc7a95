//! RGB color values and `#rrggbb` parsing
//!
//! Colors travel through the pipeline as plain 8-bit RGB. Parsing
//! accepts `#rgb`, `#rrggbb`, and a handful of CSS keyword names so the
//! CLI and style files can use either form.

use std::fmt;
use std::str::FromStr;

/// An opaque 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn black() -> Self {
        Self::new(0, 0, 0)
    }

    pub const fn white() -> Self {
        Self::new(255, 255, 255)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Error returned when a color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized color: {0:?}")]
pub struct ColorParseError(pub String);

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ColorParseError(s.to_owned()));
        }
        match s.to_ascii_lowercase().as_str() {
            "black" => Ok(Self::black()),
            "white" => Ok(Self::white()),
            "red" => Ok(Self::new(255, 0, 0)),
            "green" => Ok(Self::new(0, 128, 0)),
            "blue" => Ok(Self::new(0, 0, 255)),
            "gray" | "grey" => Ok(Self::new(128, 128, 128)),
            _ => parse_hex(s).ok_or_else(|| ColorParseError(s.to_owned())),
        }
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    match hex.len() {
        3 => {
            let channel = |i: usize| {
                u8::from_str_radix(&hex[i..i + 1], 16)
                    .ok()
                    .map(|v| v << 4 | v)
            };
            Some(Color::new(channel(0)?, channel(1)?, channel(2)?))
        }
        6 => {
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            Some(Color::new(channel(0)?, channel(2)?, channel(4)?))
        }
        _ => None,
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_long_hex() {
        assert_eq!("#ff8000".parse::<Color>().unwrap(), Color::new(255, 128, 0));
    }

    #[test]
    fn parse_short_hex() {
        assert_eq!("#f00".parse::<Color>().unwrap(), Color::new(255, 0, 0));
    }

    #[test]
    fn parse_named() {
        assert_eq!("white".parse::<Color>().unwrap(), Color::white());
        assert_eq!("Black".parse::<Color>().unwrap(), Color::black());
    }

    #[test]
    fn parse_bare_hex_without_hash() {
        assert_eq!("336699".parse::<Color>().unwrap(), Color::new(0x33, 0x66, 0x99));
    }

    #[test]
    fn reject_garbage() {
        assert!("#12345".parse::<Color>().is_err());
        assert!("chartreuse-ish".parse::<Color>().is_err());
    }

    #[test]
    fn display_round_trip() {
        let c = Color::new(18, 52, 86);
        assert_eq!(c.to_string(), "#123456");
        assert_eq!(c.to_string().parse::<Color>().unwrap(), c);
    }
}
