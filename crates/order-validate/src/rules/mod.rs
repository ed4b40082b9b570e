//! Per-order eligibility rules.
//!
//! Each rule is a pure predicate over one cleaned [`Order`]. The adjacency
//! duplicate rescue is not a [`Rule`]: it needs the neighbouring row and lives
//! in [`crate::detect_rescued`].

mod age;
mod email;
mod state;
mod zipcode;

pub use age::meets_minimum_age;
pub use email::mailbox;
pub use state::is_allowed_state;
pub use zipcode::{has_valid_digit_sum, has_valid_length};

use std::fmt;

use order_model::Order;

use crate::options::ValidationOptions;

/// Row-removing rules, in chain order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    StateExclusion,
    ZipcodeLength,
    MinimumAge,
    EmailSyntax,
    ZipcodeDigitSum,
}

impl Rule {
    /// The fixed chain order.
    pub const ALL: [Rule; 5] = [
        Rule::StateExclusion,
        Rule::ZipcodeLength,
        Rule::MinimumAge,
        Rule::EmailSyntax,
        Rule::ZipcodeDigitSum,
    ];

    /// Returns true if the order satisfies this rule.
    pub fn passes(self, order: &Order, options: &ValidationOptions) -> bool {
        match self {
            Rule::StateExclusion => is_allowed_state(order, options),
            Rule::ZipcodeLength => has_valid_length(order, options),
            Rule::MinimumAge => meets_minimum_age(order, options),
            Rule::EmailSyntax => mailbox(&order.email).is_some(),
            Rule::ZipcodeDigitSum => has_valid_digit_sum(order, options),
        }
    }

    /// Stable identifier used in logs.
    pub fn name(self) -> &'static str {
        match self {
            Rule::StateExclusion => "state_exclusion",
            Rule::ZipcodeLength => "zipcode_length",
            Rule::MinimumAge => "minimum_age",
            Rule::EmailSyntax => "email_syntax",
            Rule::ZipcodeDigitSum => "zipcode_digit_sum",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Rule::StateExclusion => "Banned state",
            Rule::ZipcodeLength => "Zipcode length",
            Rule::MinimumAge => "Under minimum age",
            Rule::EmailSyntax => "Invalid email",
            Rule::ZipcodeDigitSum => "Zipcode digit sum",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
