use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span, trace};

use order_ingest::load_orders;
use order_model::columns;
use order_output::write_partitions;
use order_validate::{Partition, ValidationOptions, validate_dataset};

use crate::logging::redact_value;
use crate::types::{ValidateConfig, ValidateResult};

pub fn run_validate(config: &ValidateConfig) -> Result<ValidateResult> {
    let span = info_span!("run", input = %config.input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let dataset = load_orders(&config.input)
        .with_context(|| format!("load orders from {}", config.input.display()))?;

    let mut options = ValidationOptions::default();
    if let Some(as_of) = config.as_of {
        options = options.with_as_of(as_of);
    }
    let run = validate_dataset(&dataset, &options, config.projection)
        .context("validate orders")?;
    trace_invalid_names(&run.partitions.invalid);

    let output_paths = if config.dry_run {
        info!("dry run, skipping output");
        config.output.paths()
    } else {
        write_partitions(&run.partitions, &config.output).with_context(|| {
            format!("write partitions to {}", config.output.output_dir.display())
        })?
    };

    info!(duration_ms = start.elapsed().as_millis(), "run complete");
    Ok(ValidateResult {
        input: config.input.clone(),
        as_of: options.as_of,
        output_paths,
        written: !config.dry_run,
        report: run.report,
    })
}

fn trace_invalid_names(invalid: &Partition) {
    let Some(name_index) = invalid.column_index(columns::NAME) else {
        return;
    };
    for record in invalid.records() {
        let name = record
            .field(name_index)
            .map(ToString::to_string)
            .unwrap_or_default();
        trace!(row = %record.row, name = redact_value(&name), "invalid order");
    }
}
