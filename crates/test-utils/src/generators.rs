//! Synthetic dataset generators.
//!
//! These generators create predictable, verifiable datasets without a random
//! number generator, so expected values can be computed in tests.

use map_common::{Dataset, Record};

/// Creates `n` records on a regular lat/lon lattice with `value = index`.
///
/// Points fill rows of `columns` records, spaced `step` degrees apart,
/// starting at (`origin_lat`, `origin_lon`).
///
/// # Example
///
/// ```
/// use test_utils::create_lattice_dataset;
///
/// let ds = create_lattice_dataset(6, 3, 0.5, 30.0, -120.0);
/// assert_eq!(ds.len(), 6);
/// assert_eq!(ds.records()[4].latitude, 30.5); // row 1
/// assert_eq!(ds.records()[4].longitude, -119.5); // column 1
/// assert_eq!(ds.records()[4].value, 4.0);
/// ```
pub fn create_lattice_dataset(
    n: usize,
    columns: usize,
    step: f64,
    origin_lat: f64,
    origin_lon: f64,
) -> Dataset {
    let columns = columns.max(1);
    let records = (0..n)
        .map(|i| {
            let row = (i / columns) as f64;
            let col = (i % columns) as f64;
            Record::new(origin_lat + row * step, origin_lon + col * step, i as f64)
        })
        .collect();
    Dataset::new(records).expect("lattice dataset must be non-empty and in range")
}

/// Creates `n` records spread over California with house-value-like
/// attributes between roughly 0.15 and 5.0.
///
/// Values rise toward the coast and vary smoothly with position, giving a
/// realistic but fully deterministic pattern.
pub fn create_housing_dataset(n: usize) -> Dataset {
    let records = (0..n)
        .map(|i| {
            let t = i as f64 / n.max(1) as f64;
            let lat = 32.5 + 9.5 * t;
            let wave = (t * std::f64::consts::PI * 14.0).sin();
            let lon = -124.0 + 9.5 * (1.0 - t) * 0.5 + 2.0 * wave;
            let coast = ((lon + 124.5) / 10.0).clamp(0.0, 1.0);
            let value = 0.15 + 4.85 * (1.0 - coast) * (0.6 + 0.4 * wave.abs());
            Record::new(lat, lon, value)
        })
        .collect();
    Dataset::new(records).expect("housing dataset must be non-empty and in range")
}
