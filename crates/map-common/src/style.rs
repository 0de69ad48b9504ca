//! Color and palette configuration for marker rendering.
//!
//! Palettes are defined over the normalized domain [0, 1]. A palette is
//! either one of the built-in perceptual ramps or a custom list of
//! ascending color stops loaded from configuration.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{MapError, MapResult};

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse "#RRGGBB" (leading '#' optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self { r, g, b })
    }

    /// Lowercase "#rrggbb".
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Relative luminance (Rec. 709 weights) on the 0-255 scale.
    pub fn luminance(&self) -> f64 {
        0.2126 * self.r as f64 + 0.7152 * self.g as f64 + 0.0722 * self.b as f64
    }

    /// Linear interpolation between two colors, `t` clamped to [0, 1].
    pub fn lerp(&self, other: &Color, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        let lerp_u8 =
            |a: u8, b: u8| -> u8 { ((a as f64) * (1.0 - t) + (b as f64) * t).round() as u8 };

        Color {
            r: lerp_u8(self.r, other.r),
            g: lerp_u8(self.g, other.g),
            b: lerp_u8(self.b, other.b),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// A color stop in a custom palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    /// Position in the normalized domain [0, 1]
    pub value: f64,

    /// Hex color at this stop
    pub color: String,

    /// Optional label for legend
    #[serde(default)]
    pub label: Option<String>,
}

/// Built-in perceptual palettes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaletteName {
    #[default]
    Viridis,
    Magma,
    Plasma,
    Cividis,
}

impl PaletteName {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaletteName::Viridis => "viridis",
            PaletteName::Magma => "magma",
            PaletteName::Plasma => "plasma",
            PaletteName::Cividis => "cividis",
        }
    }
}

impl std::str::FromStr for PaletteName {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "viridis" => Ok(PaletteName::Viridis),
            "magma" => Ok(PaletteName::Magma),
            "plasma" => Ok(PaletteName::Plasma),
            "cividis" => Ok(PaletteName::Cividis),
            other => Err(MapError::InvalidPalette(format!("unknown palette '{}'", other))),
        }
    }
}

/// Palette selection as it appears in configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PaletteConfig {
    /// One of the built-in ramps
    Named { name: PaletteName },

    /// Ascending stops over [0, 1]
    Custom { stops: Vec<ColorStop> },
}

impl Default for PaletteConfig {
    fn default() -> Self {
        PaletteConfig::Named {
            name: PaletteName::default(),
        }
    }
}

impl PaletteConfig {
    /// Validate a custom palette: at least two stops, strictly ascending,
    /// inside [0, 1], all colors parseable.
    pub fn validate(&self) -> MapResult<()> {
        let stops = match self {
            PaletteConfig::Named { .. } => return Ok(()),
            PaletteConfig::Custom { stops } => stops,
        };

        if stops.len() < 2 {
            return Err(MapError::InvalidPalette(
                "palette must have at least 2 color stops".to_string(),
            ));
        }

        for stop in stops {
            if !(0.0..=1.0).contains(&stop.value) {
                return Err(MapError::InvalidPalette(format!(
                    "stop value {} outside [0, 1]",
                    stop.value
                )));
            }
            if Color::from_hex(&stop.color).is_none() {
                return Err(MapError::InvalidPalette(format!(
                    "invalid color '{}'",
                    stop.color
                )));
            }
        }

        if stops.windows(2).any(|w| w[1].value <= w[0].value) {
            return Err(MapError::InvalidPalette(
                "color stops must be in ascending value order".to_string(),
            ));
        }

        Ok(())
    }
}
