//! Column-oriented JSON rendering.
//!
//! The document maps each column name to an object keyed by original row
//! position: `{"id": {"0": 1, "3": 4}, "name": {"0": "htimS", "3": "eeL"}}`.
//! Column names become object keys, so they must be unique; ingestion rejects
//! headers that repeat a name.

use order_model::{Field, parse_integer};
use order_validate::Partition;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::Result;

/// Renders a partition as a compact column-oriented JSON document.
pub fn render_json(partition: &Partition) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(&ColumnOriented(partition))?)
}

struct ColumnOriented<'a>(&'a Partition);

impl Serialize for ColumnOriented<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let columns = self.0.columns();
        let mut map = serializer.serialize_map(Some(columns.len()))?;
        for (index, column) in columns.iter().enumerate() {
            map.serialize_entry(
                column,
                &ColumnValues {
                    partition: self.0,
                    index,
                },
            )?;
        }
        map.end()
    }
}

struct ColumnValues<'a> {
    partition: &'a Partition,
    index: usize,
}

impl Serialize for ColumnValues<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let records = self.partition.records();
        let mut map = serializer.serialize_map(Some(records.len()))?;
        for record in records {
            let cell = record.field(self.index).unwrap_or(&Field::Null);
            map.serialize_entry(&record.row.to_string(), &JsonCell(cell))?;
        }
        map.end()
    }
}

struct JsonCell<'a>(&'a Field);

impl Serialize for JsonCell<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self.0 {
            Field::Null => serializer.serialize_none(),
            Field::Text(text) => match json_integer(text) {
                Some(value) => serializer.serialize_i64(value),
                None => serializer.serialize_str(text),
            },
            Field::Date(date) => serializer.collect_str(&date.format("%Y-%m-%d")),
        }
    }
}

/// Integer value for text that reads as a number; zero-padded codes stay text.
fn json_integer(text: &str) -> Option<i64> {
    let trimmed = text.trim();
    let unsigned = trimmed.strip_prefix('-').unwrap_or(trimmed);
    if unsigned.len() > 1 && unsigned.starts_with('0') && !unsigned.starts_with("0.") {
        return None;
    }
    parse_integer(text)
}
