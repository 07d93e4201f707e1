use crate::error::{ReleaseError, Result};
use chrono::Datelike;
use std::fmt;
use std::str::FromStr;

/// A calendar month, identified by a two-digit year and a month.
///
/// Displays as `YY.MM`, the prefix every release tag starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: u8,
    pub month: u8,
}

impl YearMonth {
    /// Create a new year/month; `year` is the two-digit year (0-99)
    pub fn new(year: u8, month: u8) -> Self {
        YearMonth { year, month }
    }

    /// Year and month of any chrono date
    pub fn from_date<D: Datelike>(date: &D) -> Self {
        YearMonth {
            year: date.year().rem_euclid(100) as u8,
            month: date.month() as u8,
        }
    }

    /// The current month according to the local clock
    pub fn now() -> Self {
        Self::from_date(&chrono::Local::now())
    }

    /// Parse the `YY` and `MM` components of a tag
    pub(crate) fn from_parts(year: &str, month: &str) -> Result<Self> {
        Ok(YearMonth {
            year: parse_two_digits(year, "year")?,
            month: parse_two_digits(month, "month")?,
        })
    }
}

fn parse_two_digits(part: &str, what: &str) -> Result<u8> {
    if part.len() != 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ReleaseError::malformed(format!(
            "{} '{}' is not a two-digit number",
            what, part
        )));
    }
    part.parse::<u8>()
        .map_err(|_| ReleaseError::malformed(format!("Invalid {}: {}", what, part)))
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}.{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self> {
        match s.split('.').collect::<Vec<_>>().as_slice() {
            [year, month] => YearMonth::from_parts(year, month),
            _ => Err(ReleaseError::malformed(format!(
                "'{}' - expected YY.MM",
                s
            ))),
        }
    }
}
