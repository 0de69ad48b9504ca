//! Value range computation and normalization into [0, 1].

use map_common::{Dataset, ValueRange};

/// Scan a whole dataset for the min and max of its value field.
pub fn value_range(dataset: &Dataset) -> ValueRange {
    let (min, max) = dataset.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY),
        |(min, max), r| (min.min(r.value), max.max(r.value)),
    );
    ValueRange::new(min, max)
}

/// Rescale `value` into [0, 1] relative to `range`.
///
/// A degenerate range (max == min) maps every value to 0.0. Values that fall
/// outside the range are clamped.
pub fn normalize(value: f64, range: &ValueRange) -> f64 {
    if range.is_degenerate() {
        return 0.0;
    }
    let span = range.span();
    let scaled = if span.is_finite() {
        (value - range.min) / span
    } else {
        // max - min overflowed; halving first keeps every term finite
        (value / 2.0 - range.min / 2.0) / (range.max / 2.0 - range.min / 2.0)
    };
    if scaled.is_nan() {
        return 0.0;
    }
    scaled.clamp(0.0, 1.0)
}
