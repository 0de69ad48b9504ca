//! Continuous colormaps over the normalized domain [0, 1].
//!
//! Any `Fn(f64) -> Color` is a [`ColorMap`], so a one-off palette can be
//! passed as a closure. Built-in ramps are stop tables evaluated by
//! [`GradientColorMap`].

use map_common::{Color, MapError, MapResult, PaletteConfig, PaletteName};

/// Maps a normalized value to a color.
///
/// Implementations must clamp inputs to [0, 1] and be monotonic in
/// lightness so visual ordering follows numeric ordering.
pub trait ColorMap {
    fn color_for(&self, normalized: f64) -> Color;

    fn name(&self) -> &str {
        "custom"
    }
}

impl<F> ColorMap for F
where
    F: Fn(f64) -> Color,
{
    fn color_for(&self, normalized: f64) -> Color {
        self(normalized.clamp(0.0, 1.0))
    }
}

const VIRIDIS: [Color; 9] = [
    Color::new(68, 1, 84),
    Color::new(71, 44, 122),
    Color::new(59, 81, 139),
    Color::new(44, 113, 142),
    Color::new(33, 144, 141),
    Color::new(39, 173, 129),
    Color::new(92, 200, 99),
    Color::new(170, 220, 50),
    Color::new(253, 231, 37),
];

const MAGMA: [Color; 9] = [
    Color::new(0, 0, 4),
    Color::new(28, 16, 68),
    Color::new(79, 18, 123),
    Color::new(129, 37, 129),
    Color::new(181, 54, 122),
    Color::new(229, 80, 100),
    Color::new(251, 135, 97),
    Color::new(254, 194, 135),
    Color::new(252, 253, 191),
];

const PLASMA: [Color; 8] = [
    Color::new(13, 8, 135),
    Color::new(84, 2, 163),
    Color::new(139, 10, 165),
    Color::new(185, 50, 137),
    Color::new(219, 92, 104),
    Color::new(244, 136, 73),
    Color::new(254, 188, 43),
    Color::new(240, 249, 33),
];

const CIVIDIS: [Color; 10] = [
    Color::new(0, 34, 78),
    Color::new(18, 53, 112),
    Color::new(59, 73, 108),
    Color::new(87, 92, 109),
    Color::new(112, 113, 115),
    Color::new(138, 134, 120),
    Color::new(165, 156, 116),
    Color::new(195, 179, 105),
    Color::new(225, 204, 85),
    Color::new(254, 232, 56),
];

fn spread(colors: &[Color]) -> Vec<(f64, Color)> {
    let last = (colors.len() - 1) as f64;
    colors
        .iter()
        .enumerate()
        .map(|(i, c)| (i as f64 / last, *c))
        .collect()
}

/// Piecewise-linear colormap through ascending stops.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientColorMap {
    name: String,
    stops: Vec<(f64, Color)>,
}

impl GradientColorMap {
    pub fn named(palette: PaletteName) -> Self {
        let colors: &[Color] = match palette {
            PaletteName::Viridis => &VIRIDIS,
            PaletteName::Magma => &MAGMA,
            PaletteName::Plasma => &PLASMA,
            PaletteName::Cividis => &CIVIDIS,
        };
        Self {
            name: palette.as_str().to_string(),
            stops: spread(colors),
        }
    }

    pub fn viridis() -> Self {
        Self::named(PaletteName::Viridis)
    }

    /// Build from configuration, validating custom stops.
    pub fn from_config(config: &PaletteConfig) -> MapResult<Self> {
        config.validate()?;
        match config {
            PaletteConfig::Named { name } => Ok(Self::named(*name)),
            PaletteConfig::Custom { stops } => {
                let stops = stops
                    .iter()
                    .map(|s| {
                        Color::from_hex(&s.color)
                            .map(|c| (s.value, c))
                            .ok_or_else(|| {
                                MapError::InvalidPalette(format!("invalid color '{}'", s.color))
                            })
                    })
                    .collect::<MapResult<Vec<_>>>()?;
                Ok(Self {
                    name: "custom".to_string(),
                    stops,
                })
            }
        }
    }

    pub fn stops(&self) -> &[(f64, Color)] {
        &self.stops
    }
}

impl Default for GradientColorMap {
    fn default() -> Self {
        Self::viridis()
    }
}

impl ColorMap for GradientColorMap {
    fn color_for(&self, normalized: f64) -> Color {
        let t = normalized.clamp(0.0, 1.0);

        // Below the first stop and above the last stop clamp to the end colors.
        let (first_value, first_color) = self.stops[0];
        if t <= first_value {
            return first_color;
        }

        for pair in self.stops.windows(2) {
            let (low_value, low_color) = pair[0];
            let (high_value, high_color) = pair[1];
            if t <= high_value {
                let f = (t - low_value) / (high_value - low_value);
                return low_color.lerp(&high_color, f);
            }
        }

        self.stops[self.stops.len() - 1].1
    }

    fn name(&self) -> &str {
        &self.name
    }
}
