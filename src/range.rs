use crate::{day::Day, error::DateError, instant::Instant};

/// Returns true iff `instant` falls within the inclusive day range
/// `[start_day, end_day]`, i.e. between `start_day`'s first and `end_day`'s
/// last representable instants.
///
/// The comparison is lexical over canonical instant strings, which is
/// chronological because canonical UTC ISO-8601 strings are zero-padded and
/// sort in time order. `instant` is compared as given, so it must be a
/// canonical UTC (`Z`-suffixed, millisecond-precision) string for the result
/// to be meaningful; [`Instant`]'s `Display` produces exactly that form.
///
/// # Examples
///
/// ```
/// use datewise::is_between_two_dates;
///
/// let within = is_between_two_dates("2023-12-25", "2023-12-31", "2023-12-28T10:00:00.000Z");
/// assert_eq!(Ok(true), within);
///
/// let after = is_between_two_dates("2023-12-25", "2023-12-31", "2024-01-01T00:00:00.000Z");
/// assert_eq!(Ok(false), after);
/// ```
///
/// # Errors
///
/// Returns [`DateError::UnparseableDate`] if either day string is not a valid
/// `YYYY-MM-DD` date.
pub fn is_between_two_dates(
    start_day: &str,
    end_day: &str,
    instant: &str,
) -> Result<bool, DateError> {
    let start = start_day.parse::<Day>()?.start_of_day().to_string();
    let end = end_day.parse::<Day>()?.end_of_day().to_string();
    Ok(start.as_str() <= instant && instant <= end.as_str())
}

/// [`is_between_two_dates`] with the current instant as the probe.
pub fn is_today_between(start_day: &str, end_day: &str) -> Result<bool, DateError> {
    is_between_two_dates(start_day, end_day, &Instant::now().to_string())
}
