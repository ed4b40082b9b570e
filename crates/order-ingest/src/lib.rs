//! Order data ingestion.
//!
//! Reads a pipe-delimited order table with a header row into an
//! [`order_model::Dataset`]. The birthday column is located by header name
//! and parsed into dates; every other column is kept as text and typed later
//! by [`order_model::Dataset::clean`].
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use order_ingest::load_orders;
//!
//! let dataset = load_orders(Path::new("orders.csv"))?;
//! let orders = dataset.clean()?;
//! ```

mod birthday;
mod error;
mod reader;

// === Error Types ===
pub use error::{IngestError, Result};

// === Birthday Column ===
pub use birthday::{BirthdayColumn, DEFAULT_BIRTHDAY_INDEX, parse_date};

// === Reading ===
pub use reader::{
    DELIMITER, MAX_INPUT_FILE_SIZE, check_file_size, check_file_size_with_limit, load_orders,
    read_orders,
};
