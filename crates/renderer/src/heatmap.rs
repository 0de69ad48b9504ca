//! Heatmap mode: weighted points for a density surface.
//!
//! Kernel accumulation is left to the display engine; this module only
//! produces one weight per sampled record.

use serde::{Deserialize, Serialize};
use tracing::debug;

use map_common::{MapError, MapResult, ValueRange};

use crate::normalize::normalize;
use crate::options::HeatmapStyle;
use crate::sampler::Sample;

/// Per-request heatmap engine parameters. Passed through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatmapParams {
    pub radius: i64,
    pub blur: i64,
    pub max_zoom: i64,
}

impl Default for HeatmapParams {
    fn default() -> Self {
        Self {
            radius: 12,
            blur: 18,
            max_zoom: 13,
        }
    }
}

impl HeatmapParams {
    pub fn new(radius: i64, blur: i64, max_zoom: i64) -> Self {
        Self {
            radius,
            blur,
            max_zoom,
        }
    }

    /// Every parameter must be positive. Reports the first offender.
    pub fn validate(&self) -> MapResult<()> {
        for (param, value) in [
            ("radius", self.radius),
            ("blur", self.blur),
            ("max_zoom", self.max_zoom),
        ] {
            if value <= 0 {
                return Err(MapError::InvalidParameter {
                    param: param.to_string(),
                    value,
                });
            }
        }
        Ok(())
    }
}

/// One contribution to the density surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightedPoint {
    pub lat: f64,
    pub lon: f64,
    pub weight: f64,
}

/// Heatmap layer ready to attach to a map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapLayer {
    pub points: Vec<WeightedPoint>,
    pub params: HeatmapParams,
    pub style: HeatmapStyle,
}

/// Weight each sampled record by its normalized value.
pub fn render(
    sample: &Sample,
    range: &ValueRange,
    params: &HeatmapParams,
) -> MapResult<Vec<WeightedPoint>> {
    params.validate()?;

    let points: Vec<WeightedPoint> = sample
        .iter()
        .map(|r| WeightedPoint {
            lat: r.latitude,
            lon: r.longitude,
            weight: normalize(r.value, range),
        })
        .collect();

    debug!(
        points = points.len(),
        radius = params.radius,
        blur = params.blur,
        max_zoom = params.max_zoom,
        "Rendered heatmap points"
    );
    Ok(points)
}

/// Render weighted points and wrap them with their parameters into a layer.
pub fn render_layer(
    sample: &Sample,
    range: &ValueRange,
    params: &HeatmapParams,
    style: &HeatmapStyle,
) -> MapResult<HeatmapLayer> {
    Ok(HeatmapLayer {
        points: render(sample, range, params)?,
        params: *params,
        style: style.clone(),
    })
}
