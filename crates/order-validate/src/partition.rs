//! Valid/invalid reconstruction from the original dataset.

use order_model::{Dataset, Field, Record, RowIndex, RowSet, columns};

/// Which columns the partitions keep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Projection {
    /// Only `id` and `name`.
    #[default]
    Summary,
    /// Every original column.
    Detailed,
}

/// One output group: projected columns and original rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    columns: Vec<String>,
    records: Vec<Record>,
}

impl Partition {
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

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    pub fn rows(&self) -> RowSet {
        self.records.iter().map(|record| record.row).collect()
    }
}

/// The two output partitions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partitions {
    pub valid: Partition,
    pub invalid: Partition,
    /// Invalid rows left out of both partitions because their name is null.
    pub unnamed_invalid: usize,
}

/// Reverses a name character by character.
pub fn reverse_name(name: &str) -> String {
    name.chars().rev().collect()
}

/// Splits the original dataset into valid and invalid partitions.
///
/// A row is valid when it survived the rule chain or was rescued. Invalid rows
/// need a non-null `name` to be emitted and have that name reversed. Both
/// partitions keep original row order.
pub fn partition(
    original: &Dataset,
    working: &RowSet,
    rescued: &RowSet,
    projection: Projection,
) -> Partitions {
    let selected = projected_columns(original, projection);
    let column_names: Vec<String> = selected
        .iter()
        .map(|&index| original.columns()[index].clone())
        .collect();
    let name_index = original.column_index(columns::NAME);
    let projected_name = column_names
        .iter()
        .position(|column| column == columns::NAME);

    let mut valid = Vec::new();
    let mut invalid = Vec::new();
    let mut unnamed_invalid = 0usize;
    for record in original.records() {
        if is_valid(record.row, working, rescued) {
            valid.push(project(record, &selected));
            continue;
        }
        let has_name = name_index
            .and_then(|index| record.field(index))
            .is_some_and(|field| !field.is_null());
        if !has_name {
            unnamed_invalid += 1;
            continue;
        }
        let mut projected = project(record, &selected);
        if let Some(Field::Text(name)) = projected_name.and_then(|i| projected.fields.get_mut(i)) {
            *name = reverse_name(name);
        }
        invalid.push(projected);
    }

    Partitions {
        valid: Partition {
            columns: column_names.clone(),
            records: valid,
        },
        invalid: Partition {
            columns: column_names,
            records: invalid,
        },
        unnamed_invalid,
    }
}

fn is_valid(row: RowIndex, working: &RowSet, rescued: &RowSet) -> bool {
    working.contains(&row) || rescued.contains(&row)
}

fn projected_columns(original: &Dataset, projection: Projection) -> Vec<usize> {
    match projection {
        Projection::Detailed => (0..original.columns().len()).collect(),
        Projection::Summary => columns::SUMMARY
            .iter()
            .filter_map(|name| original.column_index(name))
            .collect(),
    }
}

fn project(record: &Record, selected: &[usize]) -> Record {
    let fields = selected
        .iter()
        .map(|&index| record.field(index).cloned().unwrap_or_default())
        .collect();
    Record {
        row: record.row,
        fields,
    }
}
