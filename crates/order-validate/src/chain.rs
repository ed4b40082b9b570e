//! The fixed rule chain.

use std::time::Instant;

use order_model::{Order, RowSet};
use tracing::debug;

use crate::duplicate::detect_rescued;
use crate::options::ValidationOptions;
use crate::rules::Rule;

/// How many orders one rule removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleOutcome {
    pub rule: Rule,
    pub rejected: usize,
}

/// Output of a chain run.
#[derive(Debug, Clone, Default)]
pub struct ChainResult {
    /// Orders that passed every rule, in working-set order.
    pub survivors: Vec<Order>,
    /// Rows rescued by the adjacency duplicate rule.
    pub rescued: RowSet,
    pub outcomes: Vec<RuleOutcome>,
}

impl ChainResult {
    pub fn surviving_rows(&self) -> RowSet {
        self.survivors.iter().map(|order| order.row).collect()
    }

    /// Survivors together with rescued rows.
    pub fn valid_rows(&self) -> RowSet {
        let mut rows = self.surviving_rows();
        rows.extend(self.rescued.iter().copied());
        rows
    }

    /// Rescued rows that some rule rejected.
    pub fn rescued_rejections(&self) -> usize {
        let surviving = self.surviving_rows();
        self.rescued
            .iter()
            .filter(|row| !surviving.contains(row))
            .count()
    }
}

/// Runs duplicate rescue, then each row-removing rule on the previous survivors.
#[derive(Debug, Clone)]
pub struct RuleChain<'a> {
    options: &'a ValidationOptions,
    rules: Vec<Rule>,
}

impl<'a> RuleChain<'a> {
    /// The chain with the fixed rule order.
    pub fn new(options: &'a ValidationOptions) -> Self {
        Self::with_rules(options, Rule::ALL.to_vec())
    }

    /// A chain with an explicit order of row-removing rules.
    ///
    /// Duplicate rescue still runs first on the unfiltered working set.
    pub fn with_rules(options: &'a ValidationOptions, rules: Vec<Rule>) -> Self {
        Self { options, rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn run(&self, orders: Vec<Order>) -> ChainResult {
        // Adjacency must be observed before any rule removes rows.
        let rescued = detect_rescued(&orders);
        debug!(
            order_count = orders.len(),
            rescued_count = rescued.len(),
            "duplicate rescue complete"
        );

        let mut survivors = orders;
        let mut outcomes = Vec::with_capacity(self.rules.len());
        for &rule in &self.rules {
            let start = Instant::now();
            let before = survivors.len();
            survivors.retain(|order| rule.passes(order, self.options));
            let rejected = before - survivors.len();
            debug!(
                rule = %rule,
                rejected,
                remaining = survivors.len(),
                duration_ms = start.elapsed().as_millis(),
                "rule applied"
            );
            outcomes.push(RuleOutcome { rule, rejected });
        }

        ChainResult {
            survivors,
            rescued,
            outcomes,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::rules::test_support::order;
    use order_model::RowIndex;

    fn options() -> ValidationOptions {
        ValidationOptions::default().with_as_of(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
    }

    #[test]
    fn test_rescue_sees_rows_before_filtering() {
        // Row 1 is banned; had it been removed first, rows 0 and 2 would be
        // adjacent and row 0 would be rescued.
        let orders = vec![
            order(0, "NY", "10001"),
            order(1, "NJ", "10001"),
            order(2, "NY", "10001"),
        ];
        let options = options();
        let result = RuleChain::new(&options).run(orders);
        assert!(result.rescued.is_empty());
        assert_eq!(
            result.surviving_rows().into_iter().collect::<Vec<_>>(),
            vec![RowIndex(0), RowIndex(2)]
        );
    }

    #[test]
    fn test_rescued_row_stays_valid() {
        let orders = vec![order(0, "NJ", "08540"), order(1, "NJ", "08540")];
        let options = options();
        let result = RuleChain::new(&options).run(orders);
        assert!(result.survivors.is_empty());
        assert_eq!(
            result.valid_rows().into_iter().collect::<Vec<_>>(),
            vec![RowIndex(0)]
        );
        assert_eq!(result.rescued_rejections(), 1);
    }

    #[test]
    fn test_outcomes_follow_rule_order() {
        let mut young = order(2, "CA", "94105");
        young.birthday = NaiveDate::from_ymd_opt(2010, 1, 1).unwrap();
        let mut bad_email = order(3, "CA", "94107");
        bad_email.email = "nobody".to_string();
        let orders = vec![
            order(0, "PA", "19103"),
            order(1, "CA", "9410"),
            young,
            bad_email,
            order(4, "CA", "99999"),
            order(5, "CA", "94110"),
        ];
        let options = options();
        let result = RuleChain::new(&options).run(orders);

        let rejected: Vec<(Rule, usize)> = result
            .outcomes
            .iter()
            .map(|outcome| (outcome.rule, outcome.rejected))
            .collect();
        assert_eq!(
            rejected,
            vec![
                (Rule::StateExclusion, 1),
                (Rule::ZipcodeLength, 1),
                (Rule::MinimumAge, 1),
                (Rule::EmailSyntax, 1),
                (Rule::ZipcodeDigitSum, 1),
            ]
        );
        assert_eq!(
            result.surviving_rows().into_iter().collect::<Vec<_>>(),
            vec![RowIndex(5)]
        );
    }

    #[test]
    fn test_empty_working_set() {
        let options = options();
        let result = RuleChain::new(&options).run(Vec::new());
        assert!(result.survivors.is_empty());
        assert!(result.rescued.is_empty());
        assert_eq!(result.outcomes.len(), Rule::ALL.len());
    }
}
