//! Geocoded records and the validated dataset that holds them.

use serde::{Deserialize, Serialize};

use crate::error::{MapError, MapResult};

/// One geocoded observation carrying a single scalar attribute.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub latitude: f64,
    pub longitude: f64,
    pub value: f64,
}

impl Record {
    pub fn new(latitude: f64, longitude: f64, value: f64) -> Self {
        Self {
            latitude,
            longitude,
            value,
        }
    }

    /// Check coordinates and value, returning a description of the first problem.
    fn validate(&self) -> Result<(), String> {
        if !self.value.is_finite() {
            return Err(format!("value {} is not finite", self.value));
        }
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(format!("latitude {} outside [-90, 90]", self.latitude));
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(format!("longitude {} outside [-180, 180]", self.longitude));
        }
        Ok(())
    }
}

impl From<(f64, f64, f64)> for Record {
    fn from((latitude, longitude, value): (f64, f64, f64)) -> Self {
        Self::new(latitude, longitude, value)
    }
}

/// A non-empty collection of valid records.
///
/// Record order carries no meaning; it is kept only so previews and samples
/// are reproducible.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Build a dataset, rejecting empty input and invalid records.
    pub fn new(records: Vec<Record>) -> MapResult<Self> {
        if records.is_empty() {
            return Err(MapError::EmptyDataset);
        }

        for (index, record) in records.iter().enumerate() {
            record
                .validate()
                .map_err(|message| MapError::InvalidRecord { index, message })?;
        }

        Ok(Self { records })
    }

    /// Build a dataset from `(latitude, longitude, value)` triples.
    pub fn from_triples(triples: &[(f64, f64, f64)]) -> MapResult<Self> {
        Self::new(triples.iter().copied().map(Record::from).collect())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false for a constructed dataset.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// The first `n` records, for previews.
    pub fn head(&self, n: usize) -> &[Record] {
        &self.records[..n.min(self.records.len())]
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_from_triples() {
        let ds = Dataset::from_triples(&[(10.0, 20.0, 1.0), (11.0, 21.0, 2.0)]).unwrap();
        assert_eq!(ds.len(), 2);
        assert!(!ds.is_empty());
        assert_eq!(ds.get(1), Some(&Record::new(11.0, 21.0, 2.0)));
    }

    #[test]
    fn test_empty_dataset_rejected() {
        assert_eq!(Dataset::new(vec![]), Err(MapError::EmptyDataset));
    }

    #[test]
    fn test_non_finite_value_rejected() {
        let err = Dataset::from_triples(&[(10.0, 20.0, 1.0), (10.0, 20.0, f64::NAN)]).unwrap_err();
        match err {
            MapError::InvalidRecord { index, .. } => assert_eq!(index, 1),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_coordinates_rejected() {
        assert!(Dataset::from_triples(&[(91.0, 0.0, 1.0)]).is_err());
        assert!(Dataset::from_triples(&[(0.0, -181.0, 1.0)]).is_err());
        assert!(Dataset::from_triples(&[(-90.0, 180.0, 1.0)]).is_ok());
    }

    #[test]
    fn test_head_clamps_to_len() {
        let ds = Dataset::from_triples(&[(1.0, 1.0, 1.0), (2.0, 2.0, 2.0)]).unwrap();
        assert_eq!(ds.head(1).len(), 1);
        assert_eq!(ds.head(10).len(), 2);
    }
}
