//! GeoJSON view of a composed map.
//!
//! Each primitive becomes a Point feature with `[longitude, latitude]`
//! coordinates. Marker features carry `color` and `label` properties,
//! heatmap features carry `weight`.

use serde::{Deserialize, Serialize};

use crate::compose::{Layer, MapArtifact};
use crate::heatmap::WeightedPoint;
use crate::markers::PointPrimitive;

/// A GeoJSON FeatureCollection of map primitives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureCollection {
    /// Type identifier (always "FeatureCollection").
    #[serde(rename = "type")]
    pub type_: String,

    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new() -> Self {
        Self {
            type_: "FeatureCollection".to_string(),
            features: Vec::new(),
        }
    }

    pub fn with_features(mut self, features: Vec<Feature>) -> Self {
        self.features.extend(features);
        self
    }
}

impl Default for FeatureCollection {
    fn default() -> Self {
        Self::new()
    }
}

/// A GeoJSON Point feature.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Feature {
    /// Type identifier (always "Feature").
    #[serde(rename = "type")]
    pub type_: String,

    pub geometry: Geometry,
    pub properties: Properties,
}

impl Feature {
    pub fn point(lon: f64, lat: f64) -> Self {
        Self {
            type_: "Feature".to_string(),
            geometry: Geometry::Point {
                coordinates: [lon, lat],
            },
            properties: Properties::default(),
        }
    }

    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = properties;
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum Geometry {
    Point {
        /// Coordinates as [longitude, latitude].
        coordinates: [f64; 2],
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Properties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl From<&PointPrimitive> for Feature {
    fn from(p: &PointPrimitive) -> Self {
        Feature::point(p.lon, p.lat).with_properties(Properties {
            color: Some(p.color.to_hex()),
            label: Some(p.label.clone()),
            weight: None,
        })
    }
}

impl From<&WeightedPoint> for Feature {
    fn from(p: &WeightedPoint) -> Self {
        Feature::point(p.lon, p.lat).with_properties(Properties {
            weight: Some(p.weight),
            ..Default::default()
        })
    }
}

impl From<&Layer> for FeatureCollection {
    fn from(layer: &Layer) -> Self {
        let features = match layer {
            Layer::Markers(m) => m.points.iter().map(Feature::from).collect(),
            Layer::Heatmap(h) => h.points.iter().map(Feature::from).collect(),
        };
        FeatureCollection::new().with_features(features)
    }
}

impl MapArtifact {
    pub fn to_geojson(&self) -> FeatureCollection {
        FeatureCollection::from(&self.layer)
    }

    pub fn to_geojson_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.to_geojson())
    }
}
