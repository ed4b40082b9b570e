//! Cell values of the original dataset.

use std::fmt;

use chrono::NaiveDate;

/// Tokens read as missing values, in addition to blank cells.
pub const NULL_TOKENS: &[&str] = &[
    "NA", "N/A", "n/a", "NULL", "null", "NaN", "nan", "-NaN", "-nan", "None", "#N/A", "#N/A N/A",
    "#NA", "<NA>", "1.#IND", "-1.#IND", "1.#QNAN", "-1.#QNAN",
];

/// Returns true when a raw cell should be treated as null.
pub fn is_null_token(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.is_empty() || NULL_TOKENS.contains(&trimmed)
}

/// One cell of an ingested record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Field {
    #[default]
    Null,
    Text(String),
    /// Only the birthday column is parsed into dates at load time.
    Date(NaiveDate),
}

impl Field {
    /// Builds a text field from a raw cell, mapping missing-value tokens to `Null`.
    ///
    /// Text is stored as written; surrounding whitespace only matters for
    /// null detection and numeric coercion, which trim on their own.
    pub fn from_raw(raw: &str) -> Self {
        if is_null_token(raw) {
            Self::Null
        } else {
            Self::Text(raw.to_string())
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(date) => Some(*date),
            _ => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Text(value) => f.write_str(value),
            Self::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
        }
    }
}

/// Parses an integer, accepting fixed-point text whose fraction is all zeros.
///
/// `"10001"`, `" -7 "` and `"10001.0"` parse; `"10001.5"` and `"1e3"` do not.
pub fn parse_integer(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(parsed) = trimmed.parse::<i64>() {
        return Some(parsed);
    }
    let (whole, fraction) = trimmed.split_once('.')?;
    if !fraction.chars().all(|ch| ch == '0') {
        return None;
    }
    whole.parse::<i64>().ok()
}

/// Formats integral fixed-point text without fractional digits.
///
/// Returns `None` when the value is not fixed-point text with a zero fraction,
/// so callers can fall back to the original text.
pub fn format_integral(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if !trimmed.contains('.') {
        return None;
    }
    parse_integer(trimmed).map(|parsed| parsed.to_string())
}
