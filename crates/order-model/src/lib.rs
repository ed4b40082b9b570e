//! Order data model.
//!
//! This crate holds the record store of the order validator:
//!
//! - **[`Dataset`]**: the original table, exactly as ingested. It is never
//!   mutated after loading; output partitions index back into it.
//! - **[`Order`]**: a typed, fully populated row produced by
//!   [`Dataset::clean`]. The rule chain narrows a `Vec<Order>`.
//! - **[`RowSet`]**: ordered sets of [`RowIndex`] used to reunify rule
//!   survivors and rescued rows with the original table.
//!
//! # Memory
//!
//! A batch is processed entirely in memory. The original dataset and one
//! working copy of the cleaned orders are alive at the same time, so the
//! input must fit in memory roughly twice over.

pub mod columns;
mod dataset;
mod error;
mod field;
mod order;

pub use dataset::{Dataset, Record, RowIndex, RowSet};
pub use error::{ModelError, Result};
pub use field::{Field, NULL_TOKENS, format_integral, is_null_token, parse_integer};
pub use order::{Order, OrderColumns, Zipcode};
