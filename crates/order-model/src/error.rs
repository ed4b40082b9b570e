use thiserror::Error;

use crate::dataset::RowIndex;

/// Errors raised while cleaning the original dataset into orders.
#[derive(Debug, Error)]
pub enum ModelError {
    /// A column the rules depend on is absent from the header.
    #[error("required column '{column}' not found")]
    MissingColumn { column: String },

    /// A surviving value could not be coerced to its typed form.
    #[error("cannot convert {column} value '{value}' in row {row} to {target}")]
    TypeConversion {
        column: String,
        row: RowIndex,
        value: String,
        target: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, ModelError>;
