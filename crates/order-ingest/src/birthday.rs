//! Birthday column detection and date parsing.

use chrono::{NaiveDate, NaiveDateTime};
use order_model::columns;

/// Column position assumed for birthdays when no header is named `birthday`.
pub const DEFAULT_BIRTHDAY_INDEX: usize = 5;

/// Date-only formats, tried in order.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%m-%d-%Y", "%b %d, %Y", "%B %d, %Y", "%d %b %Y", "%Y%m%d",
];

/// Date-time formats whose time part is discarded.
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Where the birthday column sits in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthdayColumn {
    pub index: usize,
    /// False when the position is the fixed default rather than a header match.
    pub detected: bool,
}

impl BirthdayColumn {
    /// Finds the `birthday` header, falling back to [`DEFAULT_BIRTHDAY_INDEX`].
    pub fn detect(headers: &[String]) -> Self {
        match headers.iter().position(|header| header == columns::BIRTHDAY) {
            Some(index) => Self {
                index,
                detected: true,
            },
            None => Self {
                index: DEFAULT_BIRTHDAY_INDEX,
                detected: false,
            },
        }
    }
}

/// Parses a calendar date in any of the accepted layouts.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .or_else(|| {
            DATETIME_FORMATS.iter().find_map(|format| {
                NaiveDateTime::parse_from_str(trimmed, format)
                    .ok()
                    .map(|datetime| datetime.date())
            })
        })
}
