//! Fixture datasets for rendering tests.

use map_common::Dataset;

/// Three records with values 1, 2, 3 along a diagonal. Mean position (11, 21).
pub const THREE_POINT: [(f64, f64, f64); 3] = [(10.0, 20.0, 1.0), (11.0, 21.0, 2.0), (12.0, 22.0, 3.0)];

/// Records that all carry the value 5.0.
pub const CONSTANT_VALUE: [(f64, f64, f64); 4] = [
    (34.0, -118.0, 5.0),
    (37.7, -122.4, 5.0),
    (38.5, -121.5, 5.0),
    (32.7, -117.1, 5.0),
];

/// A handful of Californian locations with house-value-like attributes.
pub const CALIFORNIA_SAMPLE: [(f64, f64, f64); 8] = [
    (37.88, -122.23, 4.526),
    (37.86, -122.22, 3.585),
    (37.85, -122.24, 3.521),
    (34.05, -118.24, 2.413),
    (32.72, -117.16, 1.987),
    (38.58, -121.49, 1.125),
    (36.74, -119.79, 0.675),
    (40.80, -124.16, 0.899),
];

pub fn three_point_dataset() -> Dataset {
    Dataset::from_triples(&THREE_POINT).expect("fixture is valid")
}

pub fn constant_value_dataset() -> Dataset {
    Dataset::from_triples(&CONSTANT_VALUE).expect("fixture is valid")
}

pub fn california_sample_dataset() -> Dataset {
    Dataset::from_triples(&CALIFORNIA_SAMPLE).expect("fixture is valid")
}
