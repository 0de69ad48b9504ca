//! Shared test utilities for the scalar-map workspace.
//!
//! This crate provides common testing infrastructure including:
//! - Fixture datasets for the documented rendering scenarios
//! - Synthetic dataset generators
//! - Approximate float, position and heat weight assertions
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```

pub mod fixtures;
pub mod generators;

pub use fixtures::*;
pub use generators::*;

/// Approximate float equality. NaN never matches.
///
/// ```ignore
/// use test_utils::assert_approx_eq;
///
/// assert_approx_eq!(normalize(2.0, &range), 0.5, 1e-12);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($actual:expr, $expected:expr, $tolerance:expr) => {{
        let actual: f64 = $actual;
        let expected: f64 = $expected;
        let tolerance: f64 = $tolerance;
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {} (within {}), got {}",
            expected,
            tolerance,
            actual
        );
    }};
}

/// Position check for anything with `lat` and `lon` fields: map centers,
/// marker primitives and heat points.
///
/// ```ignore
/// use test_utils::assert_position_approx_eq;
///
/// assert_position_approx_eq!(artifact.center, (11.0, 21.0), 1e-12);
/// ```
#[macro_export]
macro_rules! assert_position_approx_eq {
    ($point:expr, ($lat:expr, $lon:expr), $tolerance:expr) => {{
        let point = &$point;
        $crate::assert_approx_eq!(point.lat, $lat, $tolerance);
        $crate::assert_approx_eq!(point.lon, $lon, $tolerance);
    }};
}

/// Heat point weights compared in latitude order, since sample order is
/// unspecified.
///
/// ```ignore
/// use test_utils::assert_weights_by_latitude;
///
/// assert_weights_by_latitude!(layer.points, vec![0.0, 0.5, 1.0]);
/// ```
#[macro_export]
macro_rules! assert_weights_by_latitude {
    ($points:expr, $expected:expr) => {{
        let mut pairs: Vec<(f64, f64)> = $points.iter().map(|p| (p.lat, p.weight)).collect();
        pairs.sort_by(|a, b| a.0.total_cmp(&b.0));
        let weights: Vec<f64> = pairs.into_iter().map(|(_, w)| w).collect();
        let expected: Vec<f64> = $expected;
        assert_eq!(weights, expected, "heat weights in latitude order");
    }};
}

#[cfg(test)]
mod tests {
    struct HeatPoint {
        lat: f64,
        lon: f64,
        weight: f64,
    }

    fn points() -> Vec<HeatPoint> {
        vec![
            HeatPoint { lat: 12.0, lon: 22.0, weight: 1.0 },
            HeatPoint { lat: 10.0, lon: 20.0, weight: 0.0 },
            HeatPoint { lat: 11.0, lon: 21.0, weight: 0.5 },
        ]
    }

    #[test]
    fn test_assert_approx_eq_passes() {
        assert_approx_eq!(0.1 + 0.2, 0.3, 1e-12);
        assert_approx_eq!(-5.5, -5.500001, 0.0001);
    }

    #[test]
    #[should_panic(expected = "got NaN")]
    fn test_assert_approx_eq_rejects_nan() {
        assert_approx_eq!(f64::NAN, 1.0, 1.0);
    }

    #[test]
    fn test_assert_position_approx_eq() {
        let points = points();
        assert_position_approx_eq!(points[2], (11.0, 21.0), 0.0);
    }

    #[test]
    #[should_panic(expected = "expected 20")]
    fn test_assert_position_wrong_longitude() {
        let points = points();
        assert_position_approx_eq!(points[0], (12.0, 20.0), 0.5);
    }

    #[test]
    fn test_assert_weights_by_latitude() {
        assert_weights_by_latitude!(points(), vec![0.0, 0.5, 1.0]);
    }

    #[test]
    #[should_panic(expected = "latitude order")]
    fn test_assert_weights_out_of_order() {
        assert_weights_by_latitude!(points(), vec![1.0, 0.5, 0.0]);
    }
}
