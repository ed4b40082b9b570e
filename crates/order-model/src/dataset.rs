//! The original, unmodified table of ingested records.

use std::collections::BTreeSet;
use std::fmt;

use crate::field::Field;

/// Zero-based position of a record in the original dataset.
///
/// Row positions, not the `id` column, identify records across the pipeline,
/// so rows whose `id` is null or repeated still partition correctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowIndex(pub usize);

impl RowIndex {
    pub fn get(self) -> usize {
        self.0
    }
}

impl From<usize> for RowIndex {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

impl fmt::Display for RowIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered set of row positions.
pub type RowSet = BTreeSet<RowIndex>;

/// One ingested row with its original position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub row: RowIndex,
    pub fields: Vec<Field>,
}

impl Record {
    pub fn new(row: impl Into<RowIndex>, fields: Vec<Field>) -> Self {
        Self {
            row: row.into(),
            fields,
        }
    }

    pub fn field(&self, index: usize) -> Option<&Field> {
        self.fields.get(index)
    }

    /// Returns true if any cell of the record is null.
    pub fn has_null(&self) -> bool {
        self.fields.iter().any(Field::is_null)
    }
}

/// Header plus records in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    columns: Vec<String>,
    records: Vec<Record>,
}

impl Dataset {
    /// Builds a dataset, padding short records with nulls to the header width.
    pub fn new(columns: Vec<String>, records: Vec<Record>) -> Self {
        let width = columns.len();
        let records = records
            .into_iter()
            .map(|mut record| {
                if record.fields.len() < width {
                    record.fields.resize(width, Field::Null);
                }
                record
            })
            .collect();
        Self { columns, records }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Position of a column by exact header name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Looks up a record by its original row position.
    pub fn record(&self, row: RowIndex) -> Option<&Record> {
        // Records keep their load order, so the position is usually the slot.
        match self.records.get(row.get()) {
            Some(record) if record.row == row => Some(record),
            _ => self.records.iter().find(|record| record.row == row),
        }
    }

    /// Row positions of every record.
    pub fn row_indices(&self) -> RowSet {
        self.records.iter().map(|record| record.row).collect()
    }

    /// Returns a copy without the records that contain any null cell.
    ///
    /// Row positions are preserved, so the result can still be reunified
    /// with the original.
    pub fn without_nulls(&self) -> Self {
        Self {
            columns: self.columns.clone(),
            records: self
                .records
                .iter()
                .filter(|record| !record.has_null())
                .cloned()
                .collect(),
        }
    }
}
