//! Descriptive statistics for the value attribute.

use serde::{Deserialize, Serialize};

use map_common::Dataset;

/// Count, moments and quantiles of a dataset's values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueSummary {
    pub count: usize,
    pub mean: f64,

    /// Sample standard deviation (n - 1), 0 for a single record
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

impl ValueSummary {
    pub fn describe(dataset: &Dataset) -> Self {
        let mut values: Vec<f64> = dataset.iter().map(|r| r.value).collect();
        values.sort_by(|a, b| a.total_cmp(b));

        let count = values.len();
        let n = count as f64;
        let mean = values.iter().sum::<f64>() / n;
        let std = if count > 1 {
            let ss: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
            (ss / (n - 1.0)).sqrt()
        } else {
            0.0
        };

        Self {
            count,
            mean,
            std,
            min: values[0],
            q25: quantile(&values, 0.25),
            median: quantile(&values, 0.5),
            q75: quantile(&values, 0.75),
            max: values[count - 1],
        }
    }
}

/// Linearly interpolated quantile of sorted, non-empty values.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    let frac = pos - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * frac
}
