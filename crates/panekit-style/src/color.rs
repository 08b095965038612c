#![forbid(unsafe_code)]

//! Packed RGBA colors and CSS-style color parsing.

use std::fmt;
use std::str::FromStr;

/// 8-bit-per-channel color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color with explicit alpha.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Whether the alpha channel is fully opaque.
    #[must_use]
    pub const fn is_opaque(self) -> bool {
        self.a == 255
    }

    /// CSS text: `#rrggbb` when opaque, `rgba(r, g, b, a)` otherwise.
    #[must_use]
    pub fn to_css(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            let alpha = f64::from(self.a) / 255.0;
            write!(f, "rgba({}, {}, {}, {alpha:.3})", self.r, self.g, self.b)
        }
    }
}

/// Failure to parse a color literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    Empty,
    InvalidHexLength { len: usize },
    InvalidHexDigit { text: String },
    InvalidFunction { text: String },
    ChannelOutOfRange { channel: String },
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("color literal is empty"),
            Self::InvalidHexLength { len } => {
                write!(f, "hex color must have 3, 4, 6 or 8 digits (got {len})")
            }
            Self::InvalidHexDigit { text } => write!(f, "invalid hex digit in {text:?}"),
            Self::InvalidFunction { text } => {
                write!(f, "expected rgb()/rgba() color function, got {text:?}")
            }
            Self::ChannelOutOfRange { channel } => {
                write!(f, "color channel {channel:?} is out of range")
            }
        }
    }
}

impl std::error::Error for ColorParseError {}

impl FromStr for Rgba {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.is_empty() {
            return Err(ColorParseError::Empty);
        }
        if let Some(hex) = text.strip_prefix('#') {
            return parse_hex(hex);
        }
        parse_function(text)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Rgba {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Rgba {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

fn parse_hex(hex: &str) -> Result<Rgba, ColorParseError> {
    let digit_error = || ColorParseError::InvalidHexDigit {
        text: hex.to_string(),
    };
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(digit_error());
    }
    let nibble = |i: usize| u8::from_str_radix(&hex[i..=i], 16).map_err(|_| digit_error());
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| digit_error());
    match hex.len() {
        3 | 4 => {
            let expand = |v: u8| v * 17;
            let a = if hex.len() == 4 { expand(nibble(3)?) } else { 255 };
            Ok(Rgba::rgba(
                expand(nibble(0)?),
                expand(nibble(1)?),
                expand(nibble(2)?),
                a,
            ))
        }
        6 | 8 => {
            let a = if hex.len() == 8 { byte(6)? } else { 255 };
            Ok(Rgba::rgba(byte(0)?, byte(2)?, byte(4)?, a))
        }
        len => Err(ColorParseError::InvalidHexLength { len }),
    }
}

fn parse_function(text: &str) -> Result<Rgba, ColorParseError> {
    let invalid = || ColorParseError::InvalidFunction {
        text: text.to_string(),
    };
    let (name, rest) = text.split_once('(').ok_or_else(invalid)?;
    let args = rest.strip_suffix(')').ok_or_else(invalid)?;
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    let channel = |raw: &str| -> Result<u8, ColorParseError> {
        raw.parse::<u8>()
            .map_err(|_| ColorParseError::ChannelOutOfRange {
                channel: raw.to_string(),
            })
    };
    match (name.trim(), parts.as_slice()) {
        ("rgb", [r, g, b]) => Ok(Rgba::rgb(channel(*r)?, channel(*g)?, channel(*b)?)),
        ("rgba", [r, g, b, a]) => {
            let alpha: f64 = a.parse().map_err(|_| ColorParseError::ChannelOutOfRange {
                channel: (*a).to_string(),
            })?;
            if !(0.0..=1.0).contains(&alpha) {
                return Err(ColorParseError::ChannelOutOfRange {
                    channel: (*a).to_string(),
                });
            }
            Ok(Rgba::rgba(
                channel(*r)?,
                channel(*g)?,
                channel(*b)?,
                (alpha * 255.0).round() as u8,
            ))
        }
        _ => Err(invalid()),
    }
}
