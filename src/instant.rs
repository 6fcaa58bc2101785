use crate::{day::Day, error::DateError};
use chrono::{DateTime, Utc};
use core::{
    fmt::{self, Display},
    ops::Deref,
    str::FromStr,
};

/// The canonical instant format: UTC, millisecond precision, `Z` suffix.
pub(crate) const INSTANT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// An absolute timestamp, externally represented as a full ISO-8601 datetime
/// string with millisecond precision (the `INSTANT` shape).
///
/// Parsing accepts any RFC 3339 offset (`Z` or `±HH:MM`) and normalizes to
/// UTC; a bare `YYYY-MM-DD` string is accepted as midnight UTC of that day.
/// Display always renders the canonical zero-padded UTC form, so canonical
/// instant strings sort lexically in chronological order, and the value
/// ordering of `Instant` agrees with that string ordering.
///
/// # Examples
///
/// ```
/// use datewise::prelude::*;
///
/// let instant: Instant = "2023-12-25T17:08:19.021+01:00".parse().unwrap();
/// assert_eq!("2023-12-25T16:08:19.021Z", instant.to_string());
/// assert_eq!("2023-12-25", instant.date().to_string());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Instant(pub(crate) DateTime<Utc>);

impl Instant {
    /// Returns the current instant at the time of this call.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Truncates this instant to its UTC calendar date.
    ///
    /// The resulting day's canonical string equals the first 10 characters of
    /// this instant's canonical string.
    pub fn date(&self) -> Day {
        Day(self.0.date_naive())
    }
}

impl FromStr for Instant {
    type Err = DateError;

    /// Parses an RFC 3339 datetime string, normalizing any offset to UTC. A
    /// date-only `YYYY-MM-DD` string parses as midnight UTC of that day.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self(dt.with_timezone(&Utc)));
        }
        let day: Day = s.parse()?;
        Ok(day.start_of_day())
    }
}

impl Deref for Instant {
    type Target = DateTime<Utc>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for Instant {
    /// Renders the canonical `YYYY-MM-DDTHH:MM:SS.sssZ` form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(INSTANT_FORMAT))
    }
}
