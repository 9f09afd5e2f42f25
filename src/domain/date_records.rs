//! Usage: Naive `workouts.date` values -> ISO-8601 UTC with millisecond precision.

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

const NAIVE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

const MIN_YEAR: i32 = 1;

// `subsecond digits:3` drops everything past the millisecond (no rounding).
const UTC_MILLIS_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
);

/// One row's date value, before and after conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRecord {
    pub original: String,
    pub converted: String,
}

impl DateRecord {
    pub fn from_original(original: String) -> Result<Self, String> {
        let converted = convert_naive_to_utc_iso(&original)?;
        Ok(Self {
            original,
            converted,
        })
    }
}

/// `2023-06-15 14:30:05` -> `2023-06-15T14:30:05.000Z`.
///
/// The wall-clock digits are labeled UTC as-is; no offset shift is applied.
pub fn convert_naive_to_utc_iso(value: &str) -> Result<String, String> {
    // `[year]` would accept a leading sign; the column only ever holds four bare digits.
    if !value.as_bytes().first().is_some_and(u8::is_ascii_digit) {
        return Err(format!(
            "PARSE_ERROR: invalid date {value:?} (expected YYYY-MM-DD HH:MM:SS): year must start with a digit"
        ));
    }

    let naive = PrimitiveDateTime::parse(value, NAIVE_FORMAT).map_err(|e| {
        format!("PARSE_ERROR: invalid date {value:?} (expected YYYY-MM-DD HH:MM:SS): {e}")
    })?;

    if naive.year() < MIN_YEAR {
        return Err(format!(
            "PARSE_ERROR: invalid date {value:?}: year {} is out of range",
            naive.year()
        ));
    }

    format_utc_millis(naive.assume_utc())
}

pub fn format_utc_millis(value: OffsetDateTime) -> Result<String, String> {
    value
        .format(UTC_MILLIS_FORMAT)
        .map_err(|e| format!("failed to format date {value}: {e}"))
}
