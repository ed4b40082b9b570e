//! File-based ingestion tests.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use order_ingest::{IngestError, check_file_size_with_limit, load_orders};
use order_model::RowIndex;

fn create_temp_orders(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

#[test]
fn load_orders_then_clean() {
    let file = create_temp_orders(
        "id|name|email|state|zipcode|birthday\n\
         1|Ann|ann@example.com|NY|10001|1980-02-07\n\
         2|Bo||NY|10001|1980-02-07\n\
         3|Cy|cy@example.com|CA|94105.0|1975-12-31\n",
    );

    let dataset = load_orders(file.path()).unwrap();
    assert_eq!(dataset.len(), 3);

    let orders = dataset.clean().unwrap();
    let rows: Vec<RowIndex> = orders.iter().map(|order| order.row).collect();
    assert_eq!(rows, vec![RowIndex(0), RowIndex(2)]);
    assert_eq!(orders[1].zipcode.value(), 94105);
}

#[test]
fn load_orders_missing_file() {
    let err = load_orders(Path::new("/definitely/not/here/orders.csv")).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}

#[test]
fn file_size_limit_is_enforced() {
    let file = create_temp_orders("id|name\n1|Ann\n");
    let err = check_file_size_with_limit(file.path(), 4).unwrap_err();
    assert!(matches!(err, IngestError::FileTooLarge { max_size: 4, .. }));
    assert!(check_file_size_with_limit(file.path(), 1024).is_ok());
}
