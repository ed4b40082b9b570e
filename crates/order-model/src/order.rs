//! Typed orders produced by cleaning the original dataset.

use chrono::NaiveDate;

use crate::columns;
use crate::dataset::{Dataset, Record, RowIndex};
use crate::error::{ModelError, Result};
use crate::field::{Field, parse_integer};

/// A postal code kept as its decimal digits together with its integer value.
///
/// The digit string is preserved as written, so `02000` has five digits and a
/// digit sum of 2 even though its value is 2000.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Zipcode {
    digits: String,
    value: u64,
}

impl Zipcode {
    /// Parses a non-negative integer zipcode.
    ///
    /// Integral fixed-point text (`10001.0`) is accepted and normalized to its
    /// integer digits.
    pub fn parse(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
            let value = trimmed.parse::<u64>().ok()?;
            return Some(Self {
                digits: trimmed.to_string(),
                value,
            });
        }
        let value = u64::try_from(parse_integer(trimmed)?).ok()?;
        Some(Self {
            digits: value.to_string(),
            value,
        })
    }

    pub fn digits(&self) -> &str {
        &self.digits
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    /// Number of decimal digits.
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn digit_sum(&self) -> u32 {
        self.digits.chars().filter_map(|ch| ch.to_digit(10)).sum()
    }
}

/// A cleaned order: every rule-relevant column is present and typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    /// Position of the source record in the original dataset.
    pub row: RowIndex,
    pub id: i64,
    pub name: String,
    pub state: String,
    pub zipcode: Zipcode,
    pub birthday: NaiveDate,
    pub email: String,
}

/// Header positions of the rule-relevant columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderColumns {
    pub id: usize,
    pub name: usize,
    pub state: usize,
    pub zipcode: usize,
    pub birthday: usize,
    pub email: usize,
}

impl OrderColumns {
    /// Resolves every required column by exact header name.
    pub fn resolve(dataset: &Dataset) -> Result<Self> {
        let find = |column: &str| {
            dataset
                .column_index(column)
                .ok_or_else(|| ModelError::MissingColumn {
                    column: column.to_string(),
                })
        };
        Ok(Self {
            id: find(columns::ID)?,
            name: find(columns::NAME)?,
            state: find(columns::STATE)?,
            zipcode: find(columns::ZIPCODE)?,
            birthday: find(columns::BIRTHDAY)?,
            email: find(columns::EMAIL)?,
        })
    }

    /// Builds an order from a record that has no null cells.
    pub fn order(&self, record: &Record) -> Result<Order> {
        let id_text = cell(record, self.id);
        let id = parse_integer(&id_text).ok_or_else(|| ModelError::TypeConversion {
            column: columns::ID.to_string(),
            row: record.row,
            value: id_text.clone(),
            target: "integer",
        })?;

        let zipcode_text = cell(record, self.zipcode);
        let zipcode = Zipcode::parse(&zipcode_text).ok_or_else(|| ModelError::TypeConversion {
            column: columns::ZIPCODE.to_string(),
            row: record.row,
            value: zipcode_text.clone(),
            target: "integer",
        })?;

        let birthday = match record.field(self.birthday) {
            Some(Field::Date(date)) => *date,
            other => {
                return Err(ModelError::TypeConversion {
                    column: columns::BIRTHDAY.to_string(),
                    row: record.row,
                    value: other.map(ToString::to_string).unwrap_or_default(),
                    target: "date",
                });
            }
        };

        Ok(Order {
            row: record.row,
            id,
            name: cell(record, self.name),
            state: cell(record, self.state),
            zipcode,
            birthday,
            email: cell(record, self.email),
        })
    }
}

fn cell(record: &Record, index: usize) -> String {
    record
        .field(index)
        .map(ToString::to_string)
        .unwrap_or_default()
}

impl Dataset {
    /// Drops every record with a null cell and coerces the survivors to orders.
    ///
    /// An empty dataset cleans to an empty working set without any column
    /// checks. Any surviving value that cannot be coerced fails the whole batch.
    pub fn clean(&self) -> Result<Vec<Order>> {
        if self.is_empty() {
            return Ok(Vec::new());
        }
        let columns = OrderColumns::resolve(self)?;
        self.records()
            .iter()
            .filter(|record| !record.has_null())
            .map(|record| columns.order(record))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header() -> Vec<String> {
        ["id", "name", "state", "zipcode", "birthday", "email", "note"]
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    fn record(row: usize, id: &str, name: &str, zipcode: &str, note: &str) -> Record {
        let birthday = NaiveDate::from_ymd_opt(1980, 1, 1).unwrap();
        Record::new(
            row,
            vec![
                Field::from_raw(id),
                Field::from_raw(name),
                Field::from_raw("NY"),
                Field::from_raw(zipcode),
                Field::Date(birthday),
                Field::from_raw("a@b.com"),
                Field::from_raw(note),
            ],
        )
    }

    #[test]
    fn test_zipcode_keeps_leading_zeros() {
        let zipcode = Zipcode::parse("02000").unwrap();
        assert_eq!(zipcode.len(), 5);
        assert_eq!(zipcode.value(), 2000);
        assert_eq!(zipcode.digit_sum(), 2);
    }

    #[test]
    fn test_zipcode_fixed_point() {
        let zipcode = Zipcode::parse("10001.0").unwrap();
        assert_eq!(zipcode.digits(), "10001");
        assert_eq!(zipcode.value(), 10001);
    }

    #[test]
    fn test_zipcode_rejects_non_integers() {
        assert!(Zipcode::parse("ABCDE").is_none());
        assert!(Zipcode::parse("-10001").is_none());
        assert!(Zipcode::parse("100.5").is_none());
        assert!(Zipcode::parse("").is_none());
    }

    #[test]
    fn test_clean_drops_rows_with_any_null() {
        let dataset = Dataset::new(
            header(),
            vec![
                record(0, "1", "Ann", "10001", "x"),
                record(1, "2", "Bob", "10001", ""),
                record(2, "3", "", "10001", "x"),
            ],
        );
        let orders = dataset.clean().unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].row, RowIndex(0));
        assert_eq!(orders[0].id, 1);
    }

    #[test]
    fn test_clean_type_conversion_error() {
        let dataset = Dataset::new(header(), vec![record(0, "abc", "Ann", "10001", "x")]);
        let err = dataset.clean().unwrap_err();
        assert!(matches!(
            err,
            ModelError::TypeConversion { ref column, .. } if column == "id"
        ));
    }

    #[test]
    fn test_clean_ignores_bad_values_on_dropped_rows() {
        let dataset = Dataset::new(
            header(),
            vec![
                record(0, "abc", "Ann", "10001", ""),
                record(1, "2", "Bob", "10001", "x"),
            ],
        );
        let orders = dataset.clean().unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].id, 2);
    }

    #[test]
    fn test_clean_missing_column() {
        let dataset = Dataset::new(
            vec!["id".to_string(), "name".to_string()],
            vec![Record::new(0, vec![Field::from_raw("1"), Field::from_raw("A")])],
        );
        let err = dataset.clean().unwrap_err();
        assert!(matches!(err, ModelError::MissingColumn { ref column } if column == "state"));
    }

    #[test]
    fn test_clean_empty_dataset() {
        let dataset = Dataset::new(Vec::new(), Vec::new());
        assert!(dataset.clean().unwrap().is_empty());
    }

    #[test]
    fn test_clean_text_birthday_is_type_error() {
        let mut bad = record(0, "1", "Ann", "10001", "x");
        bad.fields[4] = Field::from_raw("1980-01-01");
        let dataset = Dataset::new(header(), vec![bad]);
        let err = dataset.clean().unwrap_err();
        assert!(matches!(
            err,
            ModelError::TypeConversion { target: "date", .. }
        ));
    }
}
