use std::path::PathBuf;

use chrono::NaiveDate;
use order_output::{OutputOptions, OutputPaths};
use order_validate::{Projection, ValidationReport};

/// Everything one validation run needs.
#[derive(Debug, Clone)]
pub struct ValidateConfig {
    pub input: PathBuf,
    pub output: OutputOptions,
    pub projection: Projection,
    /// Processing date for the age rule; today when unset.
    pub as_of: Option<NaiveDate>,
    pub dry_run: bool,
}

#[derive(Debug)]
pub struct ValidateResult {
    pub input: PathBuf,
    pub as_of: NaiveDate,
    pub output_paths: OutputPaths,
    /// False for dry runs.
    pub written: bool,
    pub report: ValidationReport,
}
