//! Seeded sampling of a dataset without replacement.

use rand::rngs::StdRng;
use rand::seq::index;
use rand::SeedableRng;
use tracing::debug;

use map_common::{Dataset, MapError, MapResult, Record};

/// A fixed-size subset of a dataset, reproducible from its seed.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    indices: Vec<usize>,
    records: Vec<Record>,
    population: usize,
}

impl Sample {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Positions of the sampled records in the source dataset.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Size of the dataset the sample was drawn from.
    pub fn population(&self) -> usize {
        self.population
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a Sample {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Draw `k` distinct records from `dataset` using a generator seeded with `seed`.
///
/// The same `(dataset, k, seed)` always yields the same records. `k` must be
/// in `1..=dataset.len()`; callers that accept arbitrary user input should
/// go through [`clamp_sample_size`] first.
pub fn sample(dataset: &Dataset, k: usize, seed: u64) -> MapResult<Sample> {
    let available = dataset.len();
    if k == 0 || k > available {
        return Err(MapError::OutOfRange {
            requested: k,
            available,
        });
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let indices = index::sample(&mut rng, available, k).into_vec();
    let records = indices
        .iter()
        .filter_map(|&i| dataset.get(i).copied())
        .collect();

    debug!(k, seed, population = available, "Sampled dataset");

    Ok(Sample {
        indices,
        records,
        population: available,
    })
}

/// Clamp a user-requested sample size into `1..=len`.
pub fn clamp_sample_size(requested: usize, len: usize) -> usize {
    requested.clamp(1, len.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(n: usize) -> Dataset {
        let records = (0..n)
            .map(|i| Record::new(30.0 + i as f64 * 0.01, -120.0, i as f64))
            .collect();
        Dataset::new(records).unwrap()
    }

    #[test]
    fn test_full_sample_is_permutation() {
        let ds = dataset(5);
        let s = sample(&ds, 5, 7).unwrap();
        let mut idx = s.indices().to_vec();
        idx.sort_unstable();
        assert_eq!(idx, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_zero_rejected() {
        let ds = dataset(3);
        assert_eq!(
            sample(&ds, 0, 1),
            Err(MapError::OutOfRange {
                requested: 0,
                available: 3
            })
        );
    }

    #[test]
    fn test_clamp_sample_size() {
        assert_eq!(clamp_sample_size(5000, 3), 3);
        assert_eq!(clamp_sample_size(0, 3), 1);
        assert_eq!(clamp_sample_size(2, 3), 2);
        assert_eq!(clamp_sample_size(10, 0), 1);
    }
}
