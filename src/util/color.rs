//! Packed 24-bit RGB color.
//!
//! Colors are always written to JSON as a single integer (`0xRRGGBB`),
//! never as an object.

use super::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// RGB color packed as `(r << 16) | (g << 8) | b`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(u32);

impl Color {
    pub const WHITE: Self = Self(0xFF_FF_FF);
    pub const BLACK: Self = Self(0x00_00_00);
    pub const SILVER: Self = Self(0xC0_C0_C0);
    /// Default colour of standard materials and of the cube builder.
    pub const FIREBRICK: Self = Self(0xB2_22_22);

    /// Largest packed 24-bit value.
    pub const MAX: u32 = 0xFF_FF_FF;

    /// Wrap an already packed value without validation.
    #[inline]
    pub const fn from_packed(value: u32) -> Self {
        Self(value)
    }

    /// Parse a hex string: `"#RRGGBB"`, `"0xRRGGBB"` or `"RRGGBB"`.
    ///
    /// Values above `0xFFFFFF` are rejected.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let trimmed = hex.trim();
        if trimmed.is_empty() {
            return Err(invalid_hex(hex));
        }

        let digits = trimmed.trim_matches('#');
        let digits = match digits.get(..2) {
            Some(prefix) if prefix.eq_ignore_ascii_case("0x") => &digits[2..],
            _ => digits,
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid_hex(hex));
        }

        match u32::from_str_radix(digits, 16) {
            Ok(value) if value <= Self::MAX => Ok(Self(value)),
            _ => Err(invalid_hex(hex)),
        }
    }

    /// Build from channels, each in `0..=255`.
    pub fn from_rgb(red: i32, green: i32, blue: i32) -> Result<Self> {
        let red = channel(red, "Red")?;
        let green = channel(green, "Green")?;
        let blue = channel(blue, "Blue")?;
        Ok(Self((red << 16) | (green << 8) | blue))
    }

    /// Packed integer value.
    #[inline]
    pub const fn to_u32(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn red(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    #[inline]
    pub const fn green(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    #[inline]
    pub const fn blue(self) -> u8 {
        (self.0 & 0xFF) as u8
    }
}

fn invalid_hex(hex: &str) -> Error {
    Error::invalid_argument(format!(
        "'{}' is not a valid hex color, expected e.g. '0xFF00FF', '#FF00FF' or 'FF00FF'",
        hex
    ))
}

fn channel(value: i32, name: &str) -> Result<u32> {
    if (0..=255).contains(&value) {
        Ok(value as u32)
    } else {
        Err(Error::invalid_argument(format!(
            "{} must be a number between 0 and 255, got {}",
            name, value
        )))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::SILVER
    }
}

impl From<u32> for Color {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color(#{:06X})", self.0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}
