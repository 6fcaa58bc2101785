//! Locale-aware display formatting.
//!
//! These functions turn canonical date/datetime strings into strings meant
//! for human eyes, in the language of an explicit [`Locale`]. Instants are
//! rendered in the offset they carry rather than being converted to some
//! ambient local zone, so output depends only on the arguments.
//!
//! chrono's locale data is POSIX rather than CLDR, so "short" and "long"
//! styles are approximated: the short date is the locale's `%x`
//! representation, times are fixed 24-hour forms, and the timezone renders
//! as a numeric offset.

use crate::{day::Day, error::DateError};
use chrono::{DateTime, Locale};

/// Formats a `YYYY-MM-DD` string as the locale's short date.
///
/// # Examples
///
/// ```
/// use datewise::{locale, pretty};
///
/// let en = locale::from_tag("en-US").unwrap();
/// let fr = locale::from_tag("fr-FR").unwrap();
/// assert_eq!("12/25/2023", pretty::date("2023-12-25", en).unwrap());
/// assert_eq!("25/12/2023", pretty::date("2023-12-25", fr).unwrap());
/// ```
///
/// # Errors
///
/// Returns [`DateError::UnparseableDate`] if the input is not a valid
/// `YYYY-MM-DD` date.
pub fn date(day_str: &str, locale: Locale) -> Result<String, DateError> {
    let day: Day = day_str.parse()?;
    Ok(day.0.format_localized("%x", locale).to_string())
}

/// Formats an RFC 3339 datetime string as the locale's short date plus a
/// minutes-precision time, e.g. `12/25/2023, 17:08`.
///
/// # Errors
///
/// Returns [`DateError::UnparseableDate`] if the input is not a valid
/// RFC 3339 datetime.
pub fn date_time(instant_str: &str, locale: Locale) -> Result<String, DateError> {
    let dt = DateTime::parse_from_rfc3339(instant_str)?;
    Ok(dt.format_localized("%x, %R", locale).to_string())
}

/// Formats an RFC 3339 datetime string as a long date with a
/// seconds-precision time and the timezone designation, e.g.
/// `December 25, 2023, 17:08:19 +01:00`.
///
/// # Errors
///
/// Returns [`DateError::UnparseableDate`] if the input is not a valid
/// RFC 3339 datetime.
pub fn long_date_time(instant_str: &str, locale: Locale) -> Result<String, DateError> {
    let dt = DateTime::parse_from_rfc3339(instant_str)?;
    Ok(dt.format_localized("%B %-d, %Y, %T %Z", locale).to_string())
}
