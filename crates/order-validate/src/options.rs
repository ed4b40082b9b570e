//! Eligibility policy constants.

use chrono::{Local, Months, NaiveDate};

/// States orders cannot ship to.
pub const BANNED_STATES: &[&str] = &["NJ", "CT", "PA", "MA", "IL", "ID", "OR"];

/// Customers must have had this birthday on or before the processing date.
pub const MINIMUM_AGE_YEARS: u32 = 21;

/// Accepted zipcode digit counts (ZIP and ZIP+4).
pub const VALID_ZIPCODE_LENGTHS: &[usize] = &[5, 9];

/// Largest allowed sum of zipcode digits.
pub const MAX_ZIPCODE_DIGIT_SUM: u32 = 20;

/// Thresholds used by the rule chain.
///
/// [`Default`] is the fixed policy. Only the processing date is meant to
/// vary, so tests can pin "today".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOptions {
    pub banned_states: Vec<String>,
    pub minimum_age_years: u32,
    pub zipcode_lengths: Vec<usize>,
    pub max_zipcode_digit_sum: u32,
    /// Processing date for the age rule.
    pub as_of: NaiveDate,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            banned_states: BANNED_STATES.iter().map(ToString::to_string).collect(),
            minimum_age_years: MINIMUM_AGE_YEARS,
            zipcode_lengths: VALID_ZIPCODE_LENGTHS.to_vec(),
            max_zipcode_digit_sum: MAX_ZIPCODE_DIGIT_SUM,
            as_of: Local::now().date_naive(),
        }
    }
}

impl ValidationOptions {
    /// Override the processing date.
    #[must_use]
    pub fn with_as_of(mut self, as_of: NaiveDate) -> Self {
        self.as_of = as_of;
        self
    }

    /// Latest birthday that still meets the minimum age.
    ///
    /// Uses calendar months, so Feb 29 maps to Feb 28 in non-leap years.
    pub fn age_cutoff(&self) -> Option<NaiveDate> {
        self.as_of
            .checked_sub_months(Months::new(self.minimum_age_years * 12))
    }

    pub fn is_banned_state(&self, state: &str) -> bool {
        self.banned_states.iter().any(|banned| banned == state)
    }
}
