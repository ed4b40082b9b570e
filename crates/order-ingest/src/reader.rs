//! Pipe-delimited order file reading.

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Instant;

use csv::ReaderBuilder;
use order_model::{Dataset, Field, Record};
use tracing::{debug, info, warn};

use crate::birthday::{BirthdayColumn, parse_date};
use crate::error::{IngestError, Result};

/// Field delimiter of order files.
pub const DELIMITER: u8 = b'|';

/// Maximum input size (500 MB). The whole batch is held in memory.
pub const MAX_INPUT_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// Check file size before loading.
pub fn check_file_size(path: &Path) -> Result<()> {
    check_file_size_with_limit(path, MAX_INPUT_FILE_SIZE)
}

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| file_error(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

fn file_error(path: &Path, error: std::io::Error) -> IngestError {
    if error.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: error,
        }
    }
}

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').trim().to_string()
}

/// Rejects headers that repeat a column name; rows are addressed by name.
fn check_unique_headers(headers: &[String]) -> Result<()> {
    let mut seen = HashSet::with_capacity(headers.len());
    for header in headers {
        if !seen.insert(header.as_str()) {
            return Err(IngestError::DuplicateColumn {
                column: header.clone(),
            });
        }
    }
    Ok(())
}

/// Loads an order file from disk.
pub fn load_orders(path: &Path) -> Result<Dataset> {
    check_file_size(path)?;
    let file = File::open(path).map_err(|e| file_error(path, e))?;
    let start = Instant::now();
    let dataset = read_orders(file)?;
    info!(
        path = %path.display(),
        row_count = dataset.len(),
        column_count = dataset.columns().len(),
        duration_ms = start.elapsed().as_millis(),
        "orders loaded"
    );
    Ok(dataset)
}

/// Reads pipe-delimited orders from any reader.
///
/// The first non-blank line is the header. Short rows are padded with nulls;
/// rows wider than the header are rejected. Non-null birthday cells must
/// parse as dates.
pub fn read_orders<R: Read>(input: R) -> Result<Dataset> {
    let mut reader = ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(false)
        .flexible(true)
        .from_reader(input);

    let mut records = reader.records();
    let headers: Vec<String> = match records.next() {
        Some(record) => record?.iter().map(normalize_header).collect(),
        None => return Ok(Dataset::default()),
    };

    check_unique_headers(&headers)?;

    let birthday = BirthdayColumn::detect(&headers);
    if !birthday.detected {
        warn!(
            index = birthday.index,
            "no birthday header found, using the default column position"
        );
    }
    let birthday_name = headers
        .get(birthday.index)
        .cloned()
        .unwrap_or_else(|| order_model::columns::BIRTHDAY.to_string());

    let mut rows = Vec::new();
    for (row, record) in records.enumerate() {
        let record = record?;
        let line = record.position().map_or(0, csv::Position::line);
        if record.len() > headers.len() {
            return Err(IngestError::MalformedRow {
                line,
                expected: headers.len(),
                found: record.len(),
            });
        }
        let mut fields: Vec<Field> = record.iter().map(Field::from_raw).collect();
        if let Some(Field::Text(value)) = fields.get(birthday.index) {
            let date = parse_date(value).ok_or_else(|| IngestError::InvalidDate {
                line,
                column: birthday_name.clone(),
                value: value.clone(),
            })?;
            fields[birthday.index] = Field::Date(date);
        }
        rows.push(Record::new(row, fields));
    }

    debug!(
        row_count = rows.len(),
        birthday_index = birthday.index,
        "parsed delimited rows"
    );
    Ok(Dataset::new(headers, rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use order_model::RowIndex;

    const HEADER: &str = "id|name|email|state|zipcode|birthday|glasses";

    fn read(content: &str) -> Result<Dataset> {
        read_orders(content.as_bytes())
    }

    #[test]
    fn test_read_orders_basic() {
        let content = format!(
            "{HEADER}\n1|Ann|ann@example.com|NY|10001|1980-02-07|2\n2|Bo|bo@example.com|NJ|08540|Mar 3, 1990|1\n"
        );
        let dataset = read(&content).unwrap();

        assert_eq!(dataset.columns().len(), 7);
        assert_eq!(dataset.len(), 2);
        let first = dataset.record(RowIndex(0)).unwrap();
        assert_eq!(
            first.fields[5],
            Field::Date(NaiveDate::from_ymd_opt(1980, 2, 7).unwrap())
        );
        let second = dataset.record(RowIndex(1)).unwrap();
        assert_eq!(second.fields[4], Field::Text("08540".to_string()));
    }

    #[test]
    fn test_read_orders_nulls_and_padding() {
        let content = format!("{HEADER}\n1|Ann||NY|10001||2\n2|Bo\n");
        let dataset = read(&content).unwrap();

        let first = dataset.record(RowIndex(0)).unwrap();
        assert!(first.fields[2].is_null());
        assert!(first.fields[5].is_null());
        let second = dataset.record(RowIndex(1)).unwrap();
        assert_eq!(second.fields.len(), 7);
        assert!(second.has_null());
    }

    #[test]
    fn test_read_orders_keeps_cell_whitespace() {
        let content = format!("{HEADER}\n1| Ann |a@b.c| NY |10001| 1980-02-07 |2\n");
        let dataset = read(&content).unwrap();

        let record = dataset.record(RowIndex(0)).unwrap();
        assert_eq!(record.fields[1], Field::Text(" Ann ".to_string()));
        assert_eq!(record.fields[3], Field::Text(" NY ".to_string()));
        assert_eq!(
            record.fields[5],
            Field::Date(NaiveDate::from_ymd_opt(1980, 2, 7).unwrap())
        );
    }

    #[test]
    fn test_read_orders_header_only() {
        let dataset = read(&format!("{HEADER}\n")).unwrap();
        assert!(dataset.is_empty());
        assert_eq!(dataset.columns().len(), 7);
    }

    #[test]
    fn test_read_orders_empty_input() {
        let dataset = read("").unwrap();
        assert!(dataset.is_empty());
        assert!(dataset.columns().is_empty());
    }

    #[test]
    fn test_read_orders_strips_bom() {
        let content = format!("\u{feff}{HEADER}\n");
        let dataset = read(&content).unwrap();
        assert_eq!(dataset.columns()[0], "id");
    }

    #[test]
    fn test_read_orders_rejects_wide_rows() {
        let content = format!("{HEADER}\n1|Ann|a@b.c|NY|10001|1980-01-01|2|extra\n");
        let err = read(&content).unwrap_err();
        assert!(matches!(
            err,
            IngestError::MalformedRow {
                expected: 7,
                found: 8,
                ..
            }
        ));
    }

    #[test]
    fn test_read_orders_rejects_duplicate_headers() {
        let content = "id|name|state|name\n1|Ann|NY|Lee\n";
        let err = read(content).unwrap_err();
        assert!(matches!(
            err,
            IngestError::DuplicateColumn { ref column } if column == "name"
        ));
    }

    #[test]
    fn test_read_orders_rejects_bad_birthday() {
        let content = format!("{HEADER}\n1|Ann|a@b.c|NY|10001|not a date|2\n");
        let err = read(&content).unwrap_err();
        assert!(matches!(
            err,
            IngestError::InvalidDate { ref value, .. } if value == "not a date"
        ));
    }

    #[test]
    fn test_read_orders_birthday_fallback_position() {
        let content = "a|b|c|d|e|dob\nx|y|z|w|v|1975-06-01\n";
        let dataset = read(content).unwrap();
        let record = dataset.record(RowIndex(0)).unwrap();
        assert_eq!(
            record.fields[5],
            Field::Date(NaiveDate::from_ymd_opt(1975, 6, 1).unwrap())
        );
    }

    #[test]
    fn test_read_orders_birthday_fallback_out_of_range() {
        let content = "id|name\n1|Ann\n";
        let dataset = read(content).unwrap();
        assert_eq!(dataset.len(), 1);
    }
}
