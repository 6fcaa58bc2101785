use crate::{error::DateError, instant::Instant};
use chrono::{Duration, Months, NaiveDate, NaiveTime, Utc};
use core::{
    fmt::{self, Display},
    ops::Deref,
    str::FromStr,
};

/// The canonical calendar-date format: `YYYY-MM-DD`.
pub(crate) const DAY_FORMAT: &str = "%Y-%m-%d";

/// A calendar date, externally represented as a `YYYY-MM-DD` string (the
/// `DAY` shape).
///
/// `Day` carries no time or timezone. Day boundaries are interpreted in UTC:
/// [`Day::start_of_day`] and [`Day::end_of_day`] produce the [`Instant`]s
/// `...T00:00:00.000Z` and `...T23:59:59.999Z` respectively, which bracket
/// every instant whose UTC date equals this day.
///
/// # Examples
///
/// ```
/// use datewise::prelude::*;
///
/// let day: Day = "2023-12-25".parse().unwrap();
/// assert_eq!("2023-12-25T00:00:00.000Z", day.start_of_day().to_string());
/// assert_eq!("2023-12-25T23:59:59.999Z", day.end_of_day().to_string());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Day(pub(crate) NaiveDate);

impl Day {
    /// Returns the current date in UTC at the time of this call.
    pub fn today() -> Self {
        Self(Utc::now().date_naive())
    }

    /// Returns today's date with one calendar month subtracted.
    ///
    /// Month-length overflow follows chrono's clamping policy: subtracting a
    /// month from a day that does not exist in the prior month clamps to that
    /// month's last day (Mar 31 becomes Feb 28, or Feb 29 in a leap year).
    pub fn one_month_ago() -> Self {
        Self::today().month_before()
    }

    /// Returns this date with one calendar month subtracted. See
    /// [`Day::one_month_ago`] for the month-length overflow policy.
    pub fn month_before(&self) -> Self {
        // chrono only returns None here when the result would leave NaiveDate's
        // representable range, which no wall-clock date is anywhere near.
        Self(self.0.checked_sub_months(Months::new(1)).unwrap_or(self.0))
    }

    /// Returns the first representable [`Instant`] of this day:
    /// `00:00:00.000` UTC.
    pub fn start_of_day(&self) -> Instant {
        Instant(self.0.and_time(NaiveTime::MIN).and_utc())
    }

    /// Returns the last representable [`Instant`] of this day:
    /// `23:59:59.999` UTC.
    pub fn end_of_day(&self) -> Instant {
        Instant(self.0.and_time(NaiveTime::MIN).and_utc() + Duration::milliseconds(86_399_999))
    }
}

impl FromStr for Day {
    type Err = DateError;

    /// Parses a `YYYY-MM-DD` string into a [`Day`]. The date must be a valid
    /// calendar date.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(NaiveDate::parse_from_str(s, DAY_FORMAT)?))
    }
}

impl Deref for Day {
    type Target = NaiveDate;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for Day {
    /// Renders the canonical `YYYY-MM-DD` form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DAY_FORMAT))
    }
}
