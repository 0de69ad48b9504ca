//! Map composition: base map, center and exactly one layer.

use serde::{Deserialize, Serialize};
use tracing::info;

use map_common::{BoundingBox, Dataset, MapError, MapResult, Record, ValueRange};

use crate::heatmap::HeatmapLayer;
use crate::markers::MarkerLayer;
use crate::options::MapOptions;

/// The single layer attached to a map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Layer {
    Markers(MarkerLayer),
    Heatmap(HeatmapLayer),
}

impl Layer {
    pub fn kind(&self) -> &'static str {
        match self {
            Layer::Markers(_) => "markers",
            Layer::Heatmap(_) => "heatmap",
        }
    }

    /// Number of primitives in the layer.
    pub fn len(&self) -> usize {
        match self {
            Layer::Markers(m) => m.points.len(),
            Layer::Heatmap(h) => h.points.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Geographic center as latitude/longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

/// A composed map handed to the display shell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapArtifact {
    pub center: LatLon,
    pub zoom_start: u8,
    pub tiles: String,

    /// Extent of the whole dataset
    pub bounds: BoundingBox,

    pub value_range: ValueRange,
    pub layer: Layer,

    /// Scale and sampling notes for display under the map
    pub caption: Vec<String>,
}

/// Arithmetic mean of all latitudes and longitudes.
pub fn map_center(records: &[Record]) -> MapResult<LatLon> {
    if records.is_empty() {
        return Err(MapError::EmptyDataset);
    }
    let n = records.len() as f64;
    let (lat_sum, lon_sum) = records
        .iter()
        .fold((0.0, 0.0), |(lat, lon), r| (lat + r.latitude, lon + r.longitude));
    Ok(LatLon {
        lat: lat_sum / n,
        lon: lon_sum / n,
    })
}

/// Build a fresh base map over `dataset` and attach `layer`.
///
/// Center and bounds always come from the full dataset so the view does not
/// move between re-samples.
pub fn compose(
    dataset: &Dataset,
    value_range: ValueRange,
    layer: Layer,
    options: &MapOptions,
    caption: Vec<String>,
) -> MapResult<MapArtifact> {
    let center = map_center(dataset.records())?;
    let bounds = BoundingBox::from_records(dataset).ok_or(MapError::EmptyDataset)?;

    info!(
        layer = layer.kind(),
        primitives = layer.len(),
        center_lat = center.lat,
        center_lon = center.lon,
        "Composed map"
    );

    Ok(MapArtifact {
        center,
        zoom_start: options.zoom_start,
        tiles: options.tiles.clone(),
        bounds,
        value_range,
        layer,
        caption,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_of_empty() {
        assert_eq!(map_center(&[]), Err(MapError::EmptyDataset));
    }

    #[test]
    fn test_center_single_record() {
        let c = map_center(&[Record::new(37.5, -122.25, 1.0)]).unwrap();
        assert_eq!(c, LatLon { lat: 37.5, lon: -122.25 });
    }
}
