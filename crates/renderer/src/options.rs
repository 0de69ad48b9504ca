//! Display options for the composed map.
//!
//! These are presentation settings owned by the display shell. None of them
//! affect sampling or normalization.

use serde::{Deserialize, Serialize};

use map_common::PaletteConfig;

/// Base map settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapOptions {
    /// Tile provider name understood by the display shell
    pub tiles: String,

    /// Initial zoom level
    pub zoom_start: u8,

    /// Palette for marker mode
    pub palette: PaletteConfig,

    pub markers: MarkerStyle,

    pub heatmap: HeatmapStyle,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            tiles: "CartoDB positron".to_string(),
            zoom_start: 6,
            palette: PaletteConfig::default(),
            markers: MarkerStyle::default(),
            heatmap: HeatmapStyle::default(),
        }
    }
}

/// Marker appearance and labelling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerStyle {
    /// Circle radius in pixels
    pub radius: f64,

    pub fill_opacity: f64,

    /// Attribute name shown in labels and captions
    pub attribute: String,

    /// Unit suffix shown after values
    pub units: Option<String>,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            radius: 3.0,
            fill_opacity: 0.85,
            attribute: "value".to_string(),
            units: None,
        }
    }
}

impl MarkerStyle {
    /// Human-readable label for a raw value, e.g. "MedHouseVal: 2.50 (x100k USD)".
    pub fn label_for(&self, value: f64) -> String {
        match &self.units {
            Some(units) => format!("{}: {:.2} {}", self.attribute, value, units),
            None => format!("{}: {:.2}", self.attribute, value),
        }
    }
}

/// Heatmap settings that are not part of the per-request parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatmapStyle {
    pub min_opacity: f64,

    /// Weight mapped to full intensity
    pub max_val: f64,
}

impl Default for HeatmapStyle {
    fn default() -> Self {
        Self {
            min_opacity: 0.2,
            max_val: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_without_units() {
        let style = MarkerStyle::default();
        assert_eq!(style.label_for(2.0), "value: 2.00");
    }

    #[test]
    fn test_label_with_units() {
        let style = MarkerStyle {
            attribute: "MedHouseVal".to_string(),
            units: Some("(x100k USD)".to_string()),
            ..Default::default()
        };
        assert_eq!(style.label_for(2.456), "MedHouseVal: 2.46 (x100k USD)");
    }

    #[test]
    fn test_partial_options_fill_defaults() {
        let opts: MapOptions = serde_json::from_str(r#"{"zoom_start": 8}"#).unwrap();
        assert_eq!(opts.zoom_start, 8);
        assert_eq!(opts.tiles, "CartoDB positron");
        assert_eq!(opts.markers.radius, 3.0);
        assert_eq!(opts.heatmap.min_opacity, 0.2);
    }
}
