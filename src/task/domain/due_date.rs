//! Calendar due date in canonical `YYYY-MM-DD` form.

use super::TaskDomainError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Accepted and rendered due date format.
const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// `%Y` alone accepts signed and short years.
const YEAR_DIGITS: usize = 4;

/// Validated task due date.
///
/// Ordering is chronological, which matches lexicographic ordering of the
/// canonical ISO-8601 rendering for four-digit years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DueDate(NaiveDate);

impl DueDate {
    /// Parses a due date from `YYYY-MM-DD` text, ignoring surrounding
    /// whitespace. The year must be exactly four digits; single-digit months
    /// and days are accepted and rendered zero-padded.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidDueDate`] when the value is not a
    /// real calendar date in that format.
    pub fn parse(value: &str) -> Result<Self, TaskDomainError> {
        let invalid = || TaskDomainError::InvalidDueDate(value.to_owned());
        let trimmed = value.trim();
        let Some((year, _)) = trimmed.split_once('-') else {
            return Err(invalid());
        };
        if year.len() != YEAR_DIGITS || !year.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        NaiveDate::parse_from_str(trimmed, DUE_DATE_FORMAT)
            .map(Self)
            .map_err(|_| invalid())
    }
}

impl fmt::Display for DueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DUE_DATE_FORMAT))
    }
}
