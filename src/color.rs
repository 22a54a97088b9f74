//! ARGB colour values.
//!
//! Colours are stored packed as `0xAARRGGBB`, the same layout the attribute
//! files use. Terminal output only understands `#RRGGBB`, so [`Color::to_hex`]
//! drops the alpha channel.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A packed `0xAARRGGBB` colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(u32);

impl Color {
    /// Teal, the default filled-track colour.
    pub const TEAL: Color = Color(0xFF00_9688);
    /// Light gray, the default unfilled-track colour.
    pub const LIGHT_GRAY: Color = Color(0xFFDA_DADA);
    /// Opaque white, the default label colour.
    pub const WHITE: Color = Color(0xFFFF_FFFF);

    /// Wraps a packed ARGB value.
    pub const fn from_argb(argb: u32) -> Self {
        Self(argb)
    }

    /// Returns the packed ARGB value.
    pub const fn argb(self) -> u32 {
        self.0
    }

    /// Alpha channel.
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Red channel.
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel.
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel.
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Parses `#RRGGBB` (opaque) or `#AARRGGBB`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubble_progress::Color;
    ///
    /// assert_eq!(Color::parse("#009688").unwrap(), Color::TEAL);
    /// assert_eq!(Color::parse("#80ffffff").unwrap().alpha(), 0x80);
    /// assert!(Color::parse("teal").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidColor(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let value = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
        match hex.len() {
            6 => Ok(Self(0xFF00_0000 | value)),
            8 => Ok(Self(value)),
            _ => Err(invalid()),
        }
    }

    /// `#RRGGBB` form for terminal styling; alpha is dropped.
    pub fn to_hex(self) -> String {
        format!("#{:06X}", self.0 & 0x00FF_FFFF)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl From<u32> for Color {
    fn from(argb: u32) -> Self {
        Self(argb)
    }
}
