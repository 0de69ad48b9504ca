//! Geographic bounding box types and operations.

use serde::{Deserialize, Serialize};

use crate::record::Record;

/// A geographic bounding box in degrees (x = longitude, y = latitude).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Create a new bounding box from corner coordinates.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Smallest box containing every record, or None for no records.
    pub fn from_records<'a, I>(records: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Record>,
    {
        records.into_iter().fold(None, |acc, r| {
            Some(match acc {
                None => BoundingBox::new(r.longitude, r.latitude, r.longitude, r.latitude),
                Some(b) => b.expand(r.longitude, r.latitude),
            })
        })
    }

    /// Grow the box to include a point.
    pub fn expand(&self, x: f64, y: f64) -> Self {
        Self {
            min_x: self.min_x.min(x),
            min_y: self.min_y.min(y),
            max_x: self.max_x.max(x),
            max_y: self.max_y.max(y),
        }
    }

    /// Check if a point is contained within this bbox.
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_records() {
        let records = vec![
            Record::new(10.0, 20.0, 1.0),
            Record::new(12.0, 22.0, 3.0),
            Record::new(11.0, 19.0, 2.0),
        ];
        let bbox = BoundingBox::from_records(&records).unwrap();
        assert_eq!(bbox, BoundingBox::new(19.0, 10.0, 22.0, 12.0));
    }

    #[test]
    fn test_from_no_records() {
        let records: Vec<Record> = vec![];
        assert!(BoundingBox::from_records(&records).is_none());
    }

    #[test]
    fn test_contains_point() {
        let bbox = BoundingBox::new(-125.0, 32.0, -114.0, 42.0);
        assert!(bbox.contains_point(-120.0, 37.0));
        assert!(bbox.contains_point(-125.0, 42.0));
        assert!(!bbox.contains_point(-100.0, 37.0));
    }
}
