//! End-to-end validation of one batch.

use std::time::Instant;

use order_model::Dataset;
use tracing::{info, info_span};

use crate::chain::{RuleChain, RuleOutcome};
use crate::options::ValidationOptions;
use crate::partition::{Partitions, Projection, partition};

/// Row counts of one validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub input_rows: usize,
    /// Rows dropped by cleaning because a cell was null.
    pub dropped_null_rows: usize,
    pub outcomes: Vec<RuleOutcome>,
    pub rescued_rows: usize,
    /// Rescued rows that a rule would otherwise have rejected.
    pub rescued_rejections: usize,
    pub valid_rows: usize,
    pub invalid_rows: usize,
    pub unnamed_invalid_rows: usize,
}

/// Partitions plus the counts that produced them.
#[derive(Debug, Clone, Default)]
pub struct ValidationRun {
    pub partitions: Partitions,
    pub report: ValidationReport,
}

/// Cleans the dataset, runs the rule chain and partitions the original rows.
///
/// Fails only when cleaning fails; an empty dataset yields empty partitions.
pub fn validate_dataset(
    dataset: &Dataset,
    options: &ValidationOptions,
    projection: Projection,
) -> order_model::Result<ValidationRun> {
    let span = info_span!("validate", row_count = dataset.len());
    let _guard = span.enter();
    let start = Instant::now();

    let orders = dataset.clean()?;
    let dropped_null_rows = dataset.len() - orders.len();
    info!(
        order_count = orders.len(),
        dropped_null_rows,
        "clean complete"
    );

    let chain = RuleChain::new(options).run(orders);
    let working = chain.surviving_rows();
    let partitions = partition(dataset, &working, &chain.rescued, projection);

    let report = ValidationReport {
        input_rows: dataset.len(),
        dropped_null_rows,
        outcomes: chain.outcomes.clone(),
        rescued_rows: chain.rescued.len(),
        rescued_rejections: chain.rescued_rejections(),
        valid_rows: partitions.valid.len(),
        invalid_rows: partitions.invalid.len(),
        unnamed_invalid_rows: partitions.unnamed_invalid,
    };
    info!(
        valid_rows = report.valid_rows,
        invalid_rows = report.invalid_rows,
        rescued_rows = report.rescued_rows,
        unnamed_invalid_rows = report.unnamed_invalid_rows,
        duration_ms = start.elapsed().as_millis(),
        "validation complete"
    );

    Ok(ValidationRun { partitions, report })
}
