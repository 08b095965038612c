#![forbid(unsafe_code)]

//! Split size values: a fraction of the usable length or an absolute pixel
//! length.

use std::fmt;
use std::str::FromStr;

/// Unit family of a [`SizeValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeUnit {
    Fraction,
    Pixels,
}

/// Size of the first pane, or a min/max bound on it.
///
/// The constructors normalize their input: fractions are clamped into
/// `[0, 1]`, pixel lengths to `>= 0`, and NaN becomes `0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SizeValue {
    /// Fraction of the container's usable length.
    Fraction(f64),
    /// Absolute length in pixels.
    Pixels(f64),
}

impl SizeValue {
    /// Fraction of the usable length, clamped into `[0, 1]`.
    #[must_use]
    pub fn fraction(f: f64) -> Self {
        Self::Fraction(if f.is_nan() { 0.0 } else { f.clamp(0.0, 1.0) })
    }

    /// Pixel length, clamped to `>= 0`.
    #[must_use]
    pub fn pixels(px: f64) -> Self {
        Self::Pixels(if px.is_nan() { 0.0 } else { px.max(0.0) })
    }

    /// Unit family of this value.
    #[must_use]
    pub const fn unit(self) -> SizeUnit {
        match self {
            Self::Fraction(_) => SizeUnit::Fraction,
            Self::Pixels(_) => SizeUnit::Pixels,
        }
    }

    /// Raw number regardless of unit.
    #[must_use]
    pub const fn raw(self) -> f64 {
        match self {
            Self::Fraction(f) => f,
            Self::Pixels(px) => px,
        }
    }

    /// Resolve to pixels against a usable length.
    #[must_use]
    pub fn to_pixels(self, usable: f64) -> f64 {
        match self {
            Self::Fraction(f) => f * usable,
            Self::Pixels(px) => px,
        }
    }

    /// Express a pixel length in `unit`. Fractions divide by `usable`.
    #[must_use]
    pub fn from_pixels(px: f64, usable: f64, unit: SizeUnit) -> Self {
        match unit {
            SizeUnit::Fraction => Self::Fraction(px / usable),
            SizeUnit::Pixels => Self::Pixels(px),
        }
    }
}

impl Default for SizeValue {
    fn default() -> Self {
        Self::Fraction(0.5)
    }
}

impl From<f64> for SizeValue {
    fn from(f: f64) -> Self {
        Self::fraction(f)
    }
}

impl fmt::Display for SizeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fraction(v) => write!(f, "{v}"),
            Self::Pixels(px) => write!(f, "{px}px"),
        }
    }
}

/// Failure to parse a size literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SizeParseError {
    Empty,
    InvalidNumber { text: String },
    UnsupportedUnit { unit: String },
}

impl fmt::Display for SizeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("size literal is empty"),
            Self::InvalidNumber { text } => write!(f, "invalid size number {text:?}"),
            Self::UnsupportedUnit { unit } => {
                write!(f, "unsupported size unit {unit:?} (expected px or none)")
            }
        }
    }
}

impl std::error::Error for SizeParseError {}

impl FromStr for SizeValue {
    type Err = SizeParseError;

    /// Parse `"0.25"` as a fraction or `"120px"` as pixels.
    ///
    /// A unitless number is always a fraction, so `"200"` clamps to
    /// `Fraction(1.0)`. Pixel lengths need the explicit `px` suffix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.is_empty() {
            return Err(SizeParseError::Empty);
        }
        let split = text
            .find(|c: char| c.is_ascii_alphabetic() || c == '%')
            .unwrap_or(text.len());
        let (number, unit) = text.split_at(split);
        let value: f64 = number
            .trim()
            .parse()
            .map_err(|_| SizeParseError::InvalidNumber {
                text: number.to_string(),
            })?;
        match unit.trim() {
            "" => Ok(Self::fraction(value)),
            "px" => Ok(Self::pixels(value)),
            other => Err(SizeParseError::UnsupportedUnit {
                unit: other.to_string(),
            }),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SizeValue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Fraction(f) => serializer.serialize_f64(*f),
            Self::Pixels(_) => serializer.collect_str(self),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SizeValue {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SizeVisitor;

        impl serde::de::Visitor<'_> for SizeVisitor {
            type Value = SizeValue;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a fraction number or a pixel length such as \"120px\"")
            }

            fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<SizeValue, E> {
                Ok(SizeValue::fraction(v))
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<SizeValue, E> {
                Ok(SizeValue::fraction(v as f64))
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<SizeValue, E> {
                Ok(SizeValue::fraction(v as f64))
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<SizeValue, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_any(SizeVisitor)
    }
}
