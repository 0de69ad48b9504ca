//! JSON dataset provider.
//!
//! Two layouts are accepted:
//! - row-oriented: `[{"latitude": .., "longitude": .., "value": ..}, ...]`
//! - column-oriented: `{"latitude": [..], "longitude": [..], "value": [..]}`
//!
//! Field names are configurable so exported tables with their own column
//! names (e.g. `Latitude`, `MedHouseVal`) load without conversion.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use map_common::{Dataset, MapError, MapResult, Record, RecordSource};

/// Column names used to pull records out of a JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldNames {
    pub latitude: String,
    pub longitude: String,
    pub value: String,
}

impl Default for FieldNames {
    fn default() -> Self {
        Self {
            latitude: "latitude".to_string(),
            longitude: "longitude".to_string(),
            value: "value".to_string(),
        }
    }
}

/// Reads a dataset from a JSON file on every `load`.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
    fields: FieldNames,
}

impl JsonFileSource {
    pub fn new(path: impl AsRef<Path>, fields: FieldNames) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            fields,
        }
    }
}

impl RecordSource for JsonFileSource {
    fn describe(&self) -> String {
        format!("JSON file {}", self.path.display())
    }

    fn load(&self) -> MapResult<Dataset> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            MapError::ParseError(format!("cannot read {}: {}", self.path.display(), e))
        })?;
        parse_records(&content, &self.fields)
    }
}

/// Parse a JSON document in either supported layout into a dataset.
pub fn parse_records(json: &str, fields: &FieldNames) -> MapResult<Dataset> {
    let doc: Value = serde_json::from_str(json)?;
    let records = match doc {
        Value::Array(rows) => parse_rows(&rows, fields)?,
        Value::Object(columns) => parse_columns(&columns, fields)?,
        _ => {
            return Err(MapError::ParseError(
                "expected an array of records or an object of columns".to_string(),
            ))
        }
    };
    Dataset::new(records)
}

fn parse_rows(rows: &[Value], fields: &FieldNames) -> MapResult<Vec<Record>> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| -> MapResult<Record> {
            let number = |name: &str| {
                row.get(name).and_then(Value::as_f64).ok_or_else(|| {
                    MapError::ParseError(format!("row {}: missing numeric field '{}'", i, name))
                })
            };
            Ok(Record::new(
                number(&fields.latitude)?,
                number(&fields.longitude)?,
                number(&fields.value)?,
            ))
        })
        .collect()
}

fn parse_columns(columns: &Map<String, Value>, fields: &FieldNames) -> MapResult<Vec<Record>> {
    let column = |name: &str| -> MapResult<Vec<f64>> {
        let values = columns
            .get(name)
            .and_then(Value::as_array)
            .ok_or_else(|| MapError::ParseError(format!("missing column '{}'", name)))?;
        values
            .iter()
            .enumerate()
            .map(|(i, v)| {
                v.as_f64().ok_or_else(|| {
                    MapError::ParseError(format!("column '{}' row {}: not a number", name, i))
                })
            })
            .collect()
    };

    let lat = column(&fields.latitude)?;
    let lon = column(&fields.longitude)?;
    let value = column(&fields.value)?;

    if lat.len() != lon.len() || lat.len() != value.len() {
        return Err(MapError::ParseError(format!(
            "column lengths differ: {} latitudes, {} longitudes, {} values",
            lat.len(),
            lon.len(),
            value.len()
        )));
    }

    Ok(lat
        .into_iter()
        .zip(lon)
        .zip(value)
        .map(|((lat, lon), value)| Record::new(lat, lon, value))
        .collect())
}
