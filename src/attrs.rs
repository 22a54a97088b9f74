//! Construction-time attributes.
//!
//! Attributes are the styled configuration a host reads once when it creates
//! the widget. They can be built in code or read from a TOML document:
//!
//! ```rust
//! use bubble_progress::attrs::Attributes;
//! use bubble_progress::canvas::CapStyle;
//!
//! let attrs = Attributes::from_toml(r##"
//!     max = 100
//!     progress = 30
//!     primary_color = "#3F51B5"
//!     cap = "square"
//! "##).unwrap();
//!
//! assert_eq!(attrs.max, 100);
//! assert_eq!(attrs.cap, CapStyle::Square);
//! assert_eq!(attrs.stroke_width, 8.0);
//! ```

use crate::canvas::CapStyle;
use crate::color::Color;
use crate::error::Result;
use serde::Deserialize;

/// Default stroke width in density units.
pub const DEFAULT_STROKE_WIDTH: f32 = 8.0;

/// Styled configuration for a new widget.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Attributes {
    /// Upper bound of the progress range.
    pub max: i32,
    /// Initial progress, clamped to `0..=max`.
    pub progress: i32,
    /// Filled track colour; falls back to the theme, then teal.
    pub primary_color: Option<Color>,
    /// Unfilled track colour; falls back to the theme, then light gray.
    pub secondary_color: Option<Color>,
    /// Track thickness in density units.
    pub stroke_width: f32,
    /// Track end caps.
    pub cap: CapStyle,
    /// Whether the bubble pointer is drawn.
    pub pointer: bool,
    /// Density units to pixels.
    pub density: f32,
    /// Text units to pixels.
    pub text_density: f32,
}

impl Default for Attributes {
    fn default() -> Self {
        Self {
            max: 0,
            progress: 0,
            primary_color: None,
            secondary_color: None,
            stroke_width: DEFAULT_STROKE_WIDTH,
            cap: CapStyle::Round,
            pointer: false,
            density: 1.0,
            text_density: 1.0,
        }
    }
}

impl Attributes {
    /// Reads attributes from a TOML document. Missing keys keep their defaults.
    pub fn from_toml(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Filled track colour after applying the theme fallback.
    pub fn resolved_primary(&self, theme: Option<&ThemeColors>) -> Color {
        self.primary_color
            .or_else(|| theme.map(|t| t.control_activated))
            .unwrap_or(Color::TEAL)
    }

    /// Unfilled track colour after applying the theme fallback.
    pub fn resolved_secondary(&self, theme: Option<&ThemeColors>) -> Color {
        self.secondary_color
            .or_else(|| theme.map(|t| t.control_highlight))
            .unwrap_or(Color::LIGHT_GRAY)
    }
}

/// Accent colours a host theme may provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ThemeColors {
    /// Colour of an activated control; preferred for the filled track.
    pub control_activated: Color,
    /// Highlight colour; preferred for the unfilled track.
    pub control_highlight: Color,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_defaults() {
        let attrs = Attributes::default();
        assert_eq!(attrs.max, 0);
        assert_eq!(attrs.progress, 0);
        assert_eq!(attrs.stroke_width, DEFAULT_STROKE_WIDTH);
        assert_eq!(attrs.resolved_primary(None), Color::TEAL);
        assert_eq!(attrs.resolved_secondary(None), Color::LIGHT_GRAY);
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(Attributes::from_toml("").unwrap(), Attributes::default());
    }

    #[test]
    fn test_theme_beats_default_but_not_explicit() {
        let theme = ThemeColors {
            control_activated: Color::from_argb(0xFF3F_51B5),
            control_highlight: Color::from_argb(0x3300_0000),
        };
        let mut attrs = Attributes::default();
        assert_eq!(attrs.resolved_primary(Some(&theme)), theme.control_activated);
        assert_eq!(attrs.resolved_secondary(Some(&theme)), theme.control_highlight);

        attrs.primary_color = Some(Color::WHITE);
        assert_eq!(attrs.resolved_primary(Some(&theme)), Color::WHITE);
    }

    #[test]
    fn test_bad_color_is_reported() {
        let err = Attributes::from_toml("primary_color = \"teal\"").unwrap_err();
        assert!(matches!(err, Error::Attributes(_)));
        assert!(err.to_string().contains("teal"));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert!(Attributes::from_toml("colour = \"#ffffff\"").is_err());
    }
}
