//! Partition output generation.
//!
//! Each partition becomes one artifact:
//!
//! - **CSV**: comma-separated with a header row, integral numbers written
//!   without fractional digits.
//! - **JSON**: a column-oriented document keyed by original row position.
//!
//! Both partitions are rendered in memory before anything touches the disk.

mod csv_output;
mod error;
mod json_output;
mod writer;

pub use csv_output::{cell_text, render_csv};
pub use error::{OutputError, Result};
pub use json_output::render_json;
pub use writer::{OutputFormat, OutputOptions, OutputPaths, render_partition, write_partitions};
