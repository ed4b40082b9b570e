//! CSV rendering.

use csv::Writer;
use order_model::{Field, format_integral};
use order_validate::Partition;

use crate::error::{OutputError, Result};

/// Text written for one cell: nulls are empty, integral fixed-point values
/// lose their fractional digits.
pub fn cell_text(field: &Field) -> String {
    match field {
        Field::Text(value) => format_integral(value).unwrap_or_else(|| value.clone()),
        other => other.to_string(),
    }
}

/// Renders a partition as CSV with a header row.
pub fn render_csv(partition: &Partition) -> Result<Vec<u8>> {
    let mut writer = Writer::from_writer(Vec::new());
    if !partition.columns().is_empty() {
        writer.write_record(partition.columns())?;
    }
    for record in partition.records() {
        writer.write_record(record.fields.iter().map(cell_text))?;
    }
    writer
        .into_inner()
        .map_err(|error| OutputError::Flush(error.into_error()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_text() {
        assert_eq!(cell_text(&Field::Null), "");
        assert_eq!(cell_text(&Field::Text("10001.0".to_string())), "10001");
        assert_eq!(cell_text(&Field::Text("02000".to_string())), "02000");
        assert_eq!(cell_text(&Field::Text("2.5".to_string())), "2.5");
    }
}
