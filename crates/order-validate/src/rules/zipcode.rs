//! Zipcode shape rules.
//!
//! Both rules read the decimal digits as written, so leading zeros count
//! towards the length and contribute nothing to the digit sum.

use order_model::Order;

use crate::options::ValidationOptions;

/// Rejects zipcodes that are zero or whose digit count is not allowed.
pub fn has_valid_length(order: &Order, options: &ValidationOptions) -> bool {
    order.zipcode.value() != 0 && options.zipcode_lengths.contains(&order.zipcode.len())
}

/// Rejects zipcodes whose digits add up to more than the allowed maximum.
pub fn has_valid_digit_sum(order: &Order, options: &ValidationOptions) -> bool {
    order.zipcode.digit_sum() <= options.max_zipcode_digit_sum
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_support::order;

    #[test]
    fn test_length_five_or_nine() {
        let options = ValidationOptions::default();
        assert!(has_valid_length(&order(0, "NY", "10001"), &options));
        assert!(has_valid_length(&order(0, "NY", "100011234"), &options));
        assert!(!has_valid_length(&order(0, "NY", "1000"), &options));
        assert!(!has_valid_length(&order(0, "NY", "100012"), &options));
        assert!(!has_valid_length(&order(0, "NY", "1000112345"), &options));
    }

    #[test]
    fn test_length_counts_leading_zeros() {
        let options = ValidationOptions::default();
        assert!(has_valid_length(&order(0, "NY", "02000"), &options));
    }

    #[test]
    fn test_zero_zipcode_rejected() {
        let options = ValidationOptions::default();
        assert!(!has_valid_length(&order(0, "NY", "00000"), &options));
    }

    #[test]
    fn test_digit_sum_boundary() {
        let options = ValidationOptions::default();
        assert!(!has_valid_digit_sum(&order(0, "NY", "99999"), &options));
        assert!(has_valid_digit_sum(&order(0, "NY", "02000"), &options));
        assert!(has_valid_digit_sum(&order(0, "NY", "99200"), &options));
        assert!(!has_valid_digit_sum(&order(0, "NY", "99300"), &options));
    }
}
