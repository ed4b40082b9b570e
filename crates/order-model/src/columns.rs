//! Column names the rule chain reads.

pub const ID: &str = "id";
pub const NAME: &str = "name";
pub const STATE: &str = "state";
pub const ZIPCODE: &str = "zipcode";
pub const BIRTHDAY: &str = "birthday";
pub const EMAIL: &str = "email";

/// Columns that must exist for a non-empty batch to be cleaned.
pub const REQUIRED: &[&str] = &[ID, NAME, STATE, ZIPCODE, BIRTHDAY, EMAIL];

/// Columns kept by the summary projection, in output order.
pub const SUMMARY: &[&str] = &[ID, NAME];
