use core::fmt::{self, Display};
use once_cell::sync::Lazy;
use regex::Regex;

static DAY_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());
static MONTH_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}$").unwrap());
static YEAR_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}$").unwrap());

/// The granularity of a partial date string: a whole day, a whole month, or a
/// whole year.
///
/// # Examples
///
/// ```
/// use datewise::prelude::*;
///
/// assert_eq!(Some(Granularity::Day), Granularity::of("2023-12-25"));
/// assert_eq!(Some(Granularity::Month), Granularity::of("2023-12"));
/// assert_eq!(Some(Granularity::Year), Granularity::of("2023"));
/// assert_eq!(None, Granularity::of(""));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    /// A `YYYY-MM-DD` string.
    Day,
    /// A `YYYY-MM` string.
    Month,
    /// A `YYYY` string.
    Year,
}

impl Granularity {
    /// Classifies a date string by shape, trying the day pattern first, then
    /// year-month, then year-only. Returns `None` for anything else,
    /// including the empty string.
    ///
    /// Only the shape is checked: `9999-99-99` classifies as [`Day`]
    /// even though it is not a parseable calendar date.
    ///
    /// [`Day`]: Granularity::Day
    pub fn of(input: &str) -> Option<Self> {
        if DAY_PATTERN.is_match(input) {
            Some(Self::Day)
        } else if MONTH_PATTERN.is_match(input) {
            Some(Self::Month)
        } else if YEAR_PATTERN.is_match(input) {
            Some(Self::Year)
        } else {
            None
        }
    }
}

impl Display for Granularity {
    /// Renders the classification tag: `DAY`, `MONTH`, or `YEAR`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Day => "DAY",
            Self::Month => "MONTH",
            Self::Year => "YEAR",
        })
    }
}
