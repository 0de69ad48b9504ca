//! Map layer rendering for geocoded scalar data.
//!
//! The pipeline runs in four steps:
//! - Seeded sampling of the dataset
//! - Normalization against the dataset-wide value range
//! - Encoding as colored markers or heatmap weights
//! - Composition onto a base map centered on the dataset

pub mod colormap;
pub mod compose;
pub mod geojson;
pub mod heatmap;
pub mod markers;
pub mod normalize;
pub mod options;
pub mod sampler;
pub mod stats;

use serde::{Deserialize, Serialize};
use tracing::info;

use map_common::{Dataset, MapResult, ValueRange};

pub use colormap::{ColorMap, GradientColorMap};
pub use compose::{compose, map_center, LatLon, Layer, MapArtifact};
pub use heatmap::{HeatmapLayer, HeatmapParams, WeightedPoint};
pub use markers::{MarkerLayer, PointPrimitive};
pub use normalize::{normalize, value_range};
pub use options::{HeatmapStyle, MapOptions, MarkerStyle};
pub use sampler::{clamp_sample_size, sample, Sample};
pub use stats::ValueSummary;

/// How sampled records are encoded. Chosen once per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum RenderMode {
    Markers,
    Heatmap(HeatmapParams),
}

impl RenderMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderMode::Markers => "markers",
            RenderMode::Heatmap(_) => "heatmap",
        }
    }
}

/// One render request from the control surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderRequest {
    pub sample_size: usize,
    pub seed: u64,
    pub mode: RenderMode,
}

/// Result of a render: the map plus the range used for its scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderOutput {
    pub artifact: MapArtifact,
    pub value_range: ValueRange,
}

/// Run the full sample → normalize → encode → compose pipeline.
pub fn render(
    dataset: &Dataset,
    request: &RenderRequest,
    options: &MapOptions,
) -> MapResult<RenderOutput> {
    info!(
        records = dataset.len(),
        sample_size = request.sample_size,
        seed = request.seed,
        mode = request.mode.as_str(),
        "Rendering map"
    );

    let value_range = value_range(dataset);
    let sample = sample(dataset, request.sample_size, request.seed)?;

    let mut caption = vec![format!(
        "{} of {} records sampled for display",
        sample.len(),
        dataset.len()
    )];

    let layer = match &request.mode {
        RenderMode::Markers => {
            let colormap = GradientColorMap::from_config(&options.palette)?;
            let layer = markers::render_layer(&sample, &value_range, &colormap, &options.markers);
            caption.push(scale_caption(&value_range, &options.markers));
            Layer::Markers(layer)
        }
        RenderMode::Heatmap(params) => {
            let layer = heatmap::render_layer(&sample, &value_range, params, &options.heatmap)?;
            caption.push(format!(
                "heatmap weight: {} normalized to 0-1 (higher values are more intense)",
                options.markers.attribute
            ));
            Layer::Heatmap(layer)
        }
    };

    let artifact = compose(dataset, value_range, layer, options, caption)?;
    Ok(RenderOutput {
        artifact,
        value_range,
    })
}

fn scale_caption(range: &ValueRange, style: &MarkerStyle) -> String {
    match &style.units {
        Some(units) => format!(
            "color scale: {:.2} - {:.2} {}",
            range.min, range.max, units
        ),
        None => format!("color scale: {:.2} - {:.2}", range.min, range.max),
    }
}
