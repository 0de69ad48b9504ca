//! Marker mode: one colored point per sampled record.

use serde::{Deserialize, Serialize};
use tracing::debug;

use map_common::{Color, ValueRange};

use crate::colormap::ColorMap;
use crate::normalize::normalize;
use crate::options::MarkerStyle;
use crate::sampler::Sample;

/// A single colored marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointPrimitive {
    pub lat: f64,
    pub lon: f64,
    pub color: Color,

    /// Carries the original, non-normalized value
    pub label: String,
}

/// Marker layer ready to attach to a map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerLayer {
    pub points: Vec<PointPrimitive>,
    pub style: MarkerStyle,

    /// Name of the colormap used, for legends
    pub palette: String,
}

/// Color every sampled record against the dataset-wide range.
///
/// Output order matches the sample's iteration order, one primitive per record.
pub fn render<C>(
    sample: &Sample,
    range: &ValueRange,
    colormap: &C,
    style: &MarkerStyle,
) -> Vec<PointPrimitive>
where
    C: ColorMap + ?Sized,
{
    let points: Vec<PointPrimitive> = sample
        .iter()
        .map(|r| PointPrimitive {
            lat: r.latitude,
            lon: r.longitude,
            color: colormap.color_for(normalize(r.value, range)),
            label: style.label_for(r.value),
        })
        .collect();

    debug!(points = points.len(), palette = colormap.name(), "Rendered markers");
    points
}

/// Render markers and wrap them with their style into a layer.
pub fn render_layer<C>(
    sample: &Sample,
    range: &ValueRange,
    colormap: &C,
    style: &MarkerStyle,
) -> MarkerLayer
where
    C: ColorMap + ?Sized,
{
    MarkerLayer {
        points: render(sample, range, colormap, style),
        style: style.clone(),
        palette: colormap.name().to_string(),
    }
}
