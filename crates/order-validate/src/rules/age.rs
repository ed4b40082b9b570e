use order_model::Order;

use crate::options::ValidationOptions;

/// Passes when the customer's minimum-age birthday falls on or before the
/// processing date.
pub fn meets_minimum_age(order: &Order, options: &ValidationOptions) -> bool {
    options
        .age_cutoff()
        .is_some_and(|cutoff| order.birthday <= cutoff)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::rules::test_support::order;

    fn options() -> ValidationOptions {
        ValidationOptions::default().with_as_of(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
    }

    fn born(year: i32, month: u32, day: u32) -> Order {
        let mut order = order(0, "NY", "10001");
        order.birthday = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        order
    }

    #[test]
    fn test_exactly_minimum_age_passes() {
        assert!(meets_minimum_age(&born(2003, 6, 15), &options()));
    }

    #[test]
    fn test_one_day_short_fails() {
        assert!(!meets_minimum_age(&born(2003, 6, 16), &options()));
    }

    #[test]
    fn test_older_customer_passes() {
        assert!(meets_minimum_age(&born(1950, 12, 31), &options()));
    }

    #[test]
    fn test_leap_day_birthday() {
        let options =
            ValidationOptions::default().with_as_of(NaiveDate::from_ymd_opt(2025, 2, 28).unwrap());
        // Cutoff is 2004-02-28; a leap-day birthday qualifies on March 1st.
        assert!(!meets_minimum_age(&born(2004, 2, 29), &options));
        assert!(meets_minimum_age(&born(2004, 2, 28), &options));
    }
}
