//! Calendar-date handling for due dates.
//!
//! Due dates are plain `YYYY-MM-DD` values with no time or offset attached.
//! Input may leave month and day unpadded (`2024-1-5`); output is always
//! zero-padded.

use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::error::DueDateError;

/// Format used when rendering due dates in listings and the task file.
pub const DUE_DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Accepted input shape: four-digit year, one- or two-digit month and day.
const DUE_DATE_INPUT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month padding:none]-[day padding:none]");

/// Parse a due date, ignoring surrounding whitespace.
///
/// # Errors
/// Returns [`DueDateError`] when the text is not a real calendar date of the
/// form `YYYY-M-D`, carries a sign, or names year zero.
pub fn parse_due_date(input: &str) -> Result<Date, DueDateError> {
    let trimmed = input.trim();
    let invalid = || DueDateError(trimmed.to_owned());

    // `[year]` tolerates a leading sign; dates here are unsigned.
    if !trimmed.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(invalid());
    }
    let date = Date::parse(trimmed, DUE_DATE_INPUT).map_err(|_| invalid())?;
    if date.year() < 1 {
        return Err(invalid());
    }
    Ok(date)
}

/// Render a due date as `YYYY-MM-DD`.
#[must_use]
pub fn format_due_date(date: Date) -> String {
    // The format only contains date components, so formatting a Date cannot fail.
    date.format(DUE_DATE_FORMAT)
        .unwrap_or_else(|_| date.to_string())
}
