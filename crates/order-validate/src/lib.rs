//! Order validation pipeline.
//!
//! Cleaned orders run through a fixed rule chain:
//!
//! 1. **Duplicate rescue**: rows that share `state` and `zipcode` with the row
//!    right after them are rescued. Removes nothing.
//! 2. **State exclusion**
//! 3. **Zip-code length**
//! 4. **Minimum age**
//! 5. **Email syntax**
//! 6. **Zip-code digit sum**
//!
//! Survivors and rescued rows form the valid set; every other original row is
//! invalid. Both partitions are rebuilt from the original dataset.
//!
//! # Example
//!
//! ```ignore
//! use order_validate::{Projection, ValidationOptions, validate_dataset};
//!
//! let run = validate_dataset(&dataset, &ValidationOptions::default(), Projection::Summary)?;
//! println!("{} valid, {} invalid", run.partitions.valid.len(), run.partitions.invalid.len());
//! ```

mod chain;
mod duplicate;
mod options;
mod partition;
pub mod rules;
mod validator;

pub use chain::{ChainResult, RuleChain, RuleOutcome};
pub use duplicate::detect_rescued;
pub use options::{
    BANNED_STATES, MAX_ZIPCODE_DIGIT_SUM, MINIMUM_AGE_YEARS, VALID_ZIPCODE_LENGTHS,
    ValidationOptions,
};
pub use partition::{Partition, Partitions, Projection, partition, reverse_name};
pub use rules::Rule;
pub use validator::{ValidationReport, ValidationRun, validate_dataset};
