//! # datewise
//!
//! Date string parsing, locale-aware formatting, and relative-time helpers.
//!
//! datewise works on the small vocabulary of string shapes a client
//! application passes around:
//!
//! | shape | example | modeled by |
//! |---|---|---|
//! | `DAY` | `2023-12-25` | [`Day`] |
//! | `MONTH` | `2023-12` | [`Granularity::Month`] (classification only) |
//! | `YEAR` | `2023` | [`Granularity::Year`] (classification only) |
//! | `INSTANT` | `2023-12-25T17:08:19.021Z` | [`Instant`] |
//!
//! Canonical `INSTANT` strings are always UTC with millisecond precision, so
//! they sort lexically in chronological order.
//!
//! ## Examples
//!
//! Day boundaries and range containment:
//!
//! ```
//! use datewise::prelude::*;
//!
//! let day: Day = "2023-12-25".parse().unwrap();
//! assert_eq!("2023-12-25T00:00:00.000Z", day.start_of_day().to_string());
//! assert_eq!("2023-12-25T23:59:59.999Z", day.end_of_day().to_string());
//!
//! let within = is_between_two_dates("2023-12-25", "2023-12-31", "2023-12-28T10:00:00.000Z");
//! assert_eq!(Ok(true), within);
//! ```
//!
//! Classification and relative time:
//!
//! ```
//! use datewise::prelude::*;
//!
//! assert_eq!(Some(Granularity::Month), Granularity::of("2023-12"));
//!
//! assert_eq!("just now", pretty_relative_date_time("", Verbosity::Full));
//! ```
//!
//! Locale-aware display, with the locale as an explicit argument (callers
//! decide where the tag comes from — a browser, `LANG`, configuration):
//!
//! ```
//! use datewise::{locale, pretty};
//!
//! let en = locale::from_tag("en-US").unwrap();
//! assert_eq!("12/25/2023", pretty::date("2023-12-25", en).unwrap());
//! ```
//!
//! ## Clock reads
//!
//! The only ambient input is the wall clock, read by [`Day::today`],
//! [`Day::one_month_ago`], [`Instant::now`], [`is_today_between`], and
//! [`pretty_relative_date_time`]. Everything else is a pure function of its
//! arguments.
#![warn(missing_docs)]

mod day;
mod error;
mod granularity;
mod instant;
pub mod locale;
pub mod pretty;
mod range;
mod relative;

pub use crate::day::Day;
pub use crate::error::DateError;
pub use crate::granularity::Granularity;
pub use crate::instant::Instant;
pub use crate::locale::Locale;
pub use crate::range::{is_between_two_dates, is_today_between};
pub use crate::relative::{pretty_relative_date_time, Verbosity};

/// A convenience module appropriate for glob imports (`use datewise::prelude::*;`).
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::is_between_two_dates;
    #[doc(no_inline)]
    pub use crate::is_today_between;
    #[doc(no_inline)]
    pub use crate::pretty_relative_date_time;
    #[doc(no_inline)]
    pub use crate::DateError;
    #[doc(no_inline)]
    pub use crate::Day;
    #[doc(no_inline)]
    pub use crate::Granularity;
    #[doc(no_inline)]
    pub use crate::Instant;
    #[doc(no_inline)]
    pub use crate::Locale;
    #[doc(no_inline)]
    pub use crate::Verbosity;
}
