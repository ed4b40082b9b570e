//! Adjacency duplicate rescue.
//!
//! A row is rescued when the row right after it, in the working set's current
//! order, has the same `state` and the same zipcode value. The row that
//! matches its predecessor is not rescued by that match, so a run of N equal
//! rows rescues the first N-1. Rescued rows stay valid even when a later rule
//! rejects them.
//!
//! The scan depends on which rows are adjacent, so it must see the working
//! set before any rule removes rows. [`crate::RuleChain`] always runs it first.

use order_model::{Order, RowSet};

/// Collects the row positions rescued by the adjacency duplicate rule.
pub fn detect_rescued(orders: &[Order]) -> RowSet {
    orders
        .windows(2)
        .filter(|pair| {
            let (previous, current) = (&pair[0], &pair[1]);
            previous.state == current.state && previous.zipcode.value() == current.zipcode.value()
        })
        .map(|pair| pair[0].row)
        .collect()
}
