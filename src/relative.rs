use crate::instant::Instant;
use chrono::{DateTime, Datelike, Utc};

const JUST_NOW: &str = "just now";

/// How verbose a relative-time phrase should be.
///
/// All three levels share one threshold classification (see
/// [`pretty_relative_date_time`]); they differ only in rendering:
///
/// | level | example |
/// |---|---|
/// | `Full` | `5 hours ago`, `Yesterday`, `2 weeks ago` |
/// | `Short` | `5h ago`, `1d ago`, `2w ago` |
/// | `Shortest` | `5h`, `1d`, `2w` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Spelled-out units with an `ago` suffix, and `Yesterday` for a
    /// one-day difference.
    #[default]
    Full,
    /// Abbreviated units with an `ago` suffix.
    Short,
    /// Abbreviated units, no suffix.
    Shortest,
}

/// Phrases how long ago `instant_str` was, relative to the current instant.
///
/// The thresholds, with `s` the elapsed seconds, `d` = `floor(s / 86400)`,
/// `m` the calendar-month difference, and `y` the calendar-year difference
/// (both over UTC calendar fields):
///
/// | condition | `Full` | `Short` | `Shortest` |
/// |---|---|---|---|
/// | unparseable, or input in the future | `just now` | `just now` | `just now` |
/// | `d == 0`, `s < 60` | `just now` | `just now` | `just now` |
/// | `d == 0`, `s < 120` | `1 minute ago` | `1m ago` | `1m` |
/// | `d == 0`, `s < 3600` | `N minutes ago` | `Nm ago` | `Nm` |
/// | `d == 0`, `s < 7200` | `1 hour ago` | `1h ago` | `1h` |
/// | `d == 0`, `s >= 7200` | `N hours ago` | `Nh ago` | `Nh` |
/// | `d == 1` | `Yesterday` | `1d ago` | `1d` |
/// | `1 < d < 10` | `N days ago` | `Nd ago` | `Nd` |
/// | `10 <= d < 30` | `floor(d/7) weeks ago` | `Nw ago` | `Nw` |
/// | `m < 12` | `N month(s) ago` | `Nmo ago` | `Nmo` |
/// | `m >= 12` | `N year(s) ago` | `Ny ago` | `Ny` |
///
/// The day-based and second-based boundaries are intentionally not perfectly
/// aligned (e.g. the two-hour cutoff is second-based while day transitions
/// are `floor`-of-day-based); they are part of the contract and covered by
/// tests, so resist the urge to tidy them.
///
/// # Examples
///
/// ```
/// use datewise::prelude::*;
/// use chrono::{Duration, Utc};
///
/// let five_minutes_ago = (Utc::now() - Duration::minutes(5)).to_rfc3339();
/// assert_eq!("5 minutes ago", pretty_relative_date_time(&five_minutes_ago, Verbosity::Full));
/// assert_eq!("5m ago", pretty_relative_date_time(&five_minutes_ago, Verbosity::Short));
/// assert_eq!("5m", pretty_relative_date_time(&five_minutes_ago, Verbosity::Shortest));
///
/// assert_eq!("just now", pretty_relative_date_time("", Verbosity::Full));
/// ```
pub fn pretty_relative_date_time(instant_str: &str, verbosity: Verbosity) -> String {
    phrase_at(Utc::now(), instant_str, verbosity)
}

/// [`pretty_relative_date_time`] against an explicit reference instant, so
/// the thresholds can be exercised without touching the wall clock.
pub(crate) fn phrase_at(now: DateTime<Utc>, instant_str: &str, verbosity: Verbosity) -> String {
    let then = match instant_str.parse::<Instant>() {
        Ok(instant) => instant.0,
        Err(_) => return JUST_NOW.to_owned(),
    };
    Bucket::classify(now, then).render(verbosity)
}

/// The single threshold table shared by all three verbosity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bucket {
    JustNow,
    Minutes(i64),
    Hours(i64),
    Days(i64),
    Weeks(i64),
    Months(i64),
    Years(i64),
}

impl Bucket {
    fn classify(now: DateTime<Utc>, then: DateTime<Utc>) -> Self {
        let secs = (now - then).num_seconds();
        // floor, so anything in the future lands at a negative day difference
        let day_diff = secs.div_euclid(86_400);

        if day_diff < 0 {
            return Self::JustNow;
        }
        if day_diff == 0 {
            return match secs {
                s if s < 60 => Self::JustNow,
                s if s < 120 => Self::Minutes(1),
                s if s < 3_600 => Self::Minutes(s / 60),
                s if s < 7_200 => Self::Hours(1),
                s => Self::Hours(s / 3_600),
            };
        }
        if day_diff < 10 {
            return Self::Days(day_diff);
        }
        if day_diff < 30 {
            return Self::Weeks(day_diff / 7);
        }

        let months = i64::from(now.year() - then.year()) * 12
            + i64::from(now.month() as i32 - then.month() as i32);
        if months < 12 {
            Self::Months(months)
        } else {
            Self::Years(i64::from(now.year() - then.year()))
        }
    }

    fn render(self, verbosity: Verbosity) -> String {
        match verbosity {
            Verbosity::Full => self.render_full(),
            Verbosity::Short => match self.count_and_unit() {
                Some((count, unit)) => format!("{count}{unit} ago"),
                None => JUST_NOW.to_owned(),
            },
            Verbosity::Shortest => match self.count_and_unit() {
                Some((count, unit)) => format!("{count}{unit}"),
                None => JUST_NOW.to_owned(),
            },
        }
    }

    fn count_and_unit(self) -> Option<(i64, &'static str)> {
        match self {
            Self::JustNow => None,
            Self::Minutes(n) => Some((n, "m")),
            Self::Hours(n) => Some((n, "h")),
            Self::Days(n) => Some((n, "d")),
            Self::Weeks(n) => Some((n, "w")),
            Self::Months(n) => Some((n, "mo")),
            Self::Years(n) => Some((n, "y")),
        }
    }

    fn render_full(self) -> String {
        match self {
            Self::JustNow => JUST_NOW.to_owned(),
            Self::Minutes(1) => "1 minute ago".to_owned(),
            Self::Minutes(n) => format!("{n} minutes ago"),
            Self::Hours(1) => "1 hour ago".to_owned(),
            Self::Hours(n) => format!("{n} hours ago"),
            Self::Days(1) => "Yesterday".to_owned(),
            Self::Days(n) => format!("{n} days ago"),
            // no singular form: 10-13 days render as "1 weeks ago"
            Self::Weeks(n) => format!("{n} weeks ago"),
            Self::Months(1) => "1 month ago".to_owned(),
            Self::Months(n) => format!("{n} months ago"),
            Self::Years(1) => "1 year ago".to_owned(),
            Self::Years(n) => format!("{n} years ago"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use rstest::*;

    /// A fixed reference instant: 2024-06-15T12:00:00Z.
    #[fixture]
    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn phrase_seconds_ago(
        now: DateTime<Utc>,
        seconds: i64,
        verbosity: Verbosity,
    ) -> String {
        let then = (now - Duration::seconds(seconds))
            .format("%Y-%m-%dT%H:%M:%S%.3fZ")
            .to_string();
        phrase_at(now, &then, verbosity)
    }

    #[rstest]
    fn test_second_based_thresholds(now: DateTime<Utc>) {
        // (seconds ago, full, short, shortest)
        let args = [
            (0, "just now", "just now", "just now"),
            (30, "just now", "just now", "just now"),
            (59, "just now", "just now", "just now"),
            (60, "1 minute ago", "1m ago", "1m"),
            (119, "1 minute ago", "1m ago", "1m"),
            (120, "2 minutes ago", "2m ago", "2m"),
            (3_599, "59 minutes ago", "59m ago", "59m"),
            (3_600, "1 hour ago", "1h ago", "1h"),
            (7_199, "1 hour ago", "1h ago", "1h"),
            (7_200, "2 hours ago", "2h ago", "2h"),
            (86_399, "23 hours ago", "23h ago", "23h"),
        ];

        for (seconds, full, short, shortest) in args {
            assert_eq!(full, phrase_seconds_ago(now, seconds, Verbosity::Full), "{seconds}s");
            assert_eq!(short, phrase_seconds_ago(now, seconds, Verbosity::Short), "{seconds}s");
            assert_eq!(shortest, phrase_seconds_ago(now, seconds, Verbosity::Shortest), "{seconds}s");
        }
    }

    #[rstest]
    fn test_day_based_thresholds(now: DateTime<Utc>) {
        // (days ago, full, short, shortest)
        let args = [
            (1, "Yesterday", "1d ago", "1d"),
            (2, "2 days ago", "2d ago", "2d"),
            (9, "9 days ago", "9d ago", "9d"),
            (10, "1 weeks ago", "1w ago", "1w"), // no singular form, see render_full
            (13, "1 weeks ago", "1w ago", "1w"),
            (14, "2 weeks ago", "2w ago", "2w"),
            (29, "4 weeks ago", "4w ago", "4w"),
        ];

        for (days, full, short, shortest) in args {
            let seconds = days * 86_400;
            assert_eq!(full, phrase_seconds_ago(now, seconds, Verbosity::Full), "{days}d");
            assert_eq!(short, phrase_seconds_ago(now, seconds, Verbosity::Short), "{days}d");
            assert_eq!(shortest, phrase_seconds_ago(now, seconds, Verbosity::Shortest), "{days}d");
        }
    }

    /// 25 hours lands at a day difference of exactly 1.
    #[rstest]
    fn test_twenty_five_hours_is_yesterday(now: DateTime<Utc>) {
        assert_eq!("Yesterday", phrase_seconds_ago(now, 25 * 3_600, Verbosity::Full));
        assert_eq!("1d ago", phrase_seconds_ago(now, 25 * 3_600, Verbosity::Short));
        assert_eq!("1d", phrase_seconds_ago(now, 25 * 3_600, Verbosity::Shortest));
    }

    #[rstest]
    fn test_calendar_thresholds(now: DateTime<Utc>) {
        // (then, full, short, shortest) — month/year buckets compare calendar
        // fields, so these use explicit instants rather than second offsets
        let args = [
            ("2024-05-16T12:00:00.000Z", "1 month ago", "1mo ago", "1mo"),
            ("2024-01-15T12:00:00.000Z", "5 months ago", "5mo ago", "5mo"),
            ("2023-07-20T12:00:00.000Z", "11 months ago", "11mo ago", "11mo"),
            ("2023-06-15T12:00:00.000Z", "1 year ago", "1y ago", "1y"),
            ("2021-03-01T00:00:00.000Z", "3 years ago", "3y ago", "3y"),
        ];

        for (then, full, short, shortest) in args {
            assert_eq!(full, phrase_at(now, then, Verbosity::Full), "{then}");
            assert_eq!(short, phrase_at(now, then, Verbosity::Short), "{then}");
            assert_eq!(shortest, phrase_at(now, then, Verbosity::Shortest), "{then}");
        }
    }

    /// 400 days back crosses one calendar year: "1 year ago" in all sizes.
    #[rstest]
    fn test_four_hundred_days_is_one_year(now: DateTime<Utc>) {
        let then = "2023-05-12T12:00:00.000Z"; // 400 days before the fixture
        assert_eq!("1 year ago", phrase_at(now, then, Verbosity::Full));
        assert_eq!("1y ago", phrase_at(now, then, Verbosity::Short));
        assert_eq!("1y", phrase_at(now, then, Verbosity::Shortest));
    }

    /// A 30-day gap inside one long month yields a zero month count. Quirky,
    /// but contractual.
    #[test]
    fn test_zero_months_artifact() {
        let now = Utc.with_ymd_and_hms(2024, 1, 31, 12, 0, 0).unwrap();
        let then = "2024-01-01T00:00:00.000Z";
        assert_eq!("0 months ago", phrase_at(now, then, Verbosity::Full));
        assert_eq!("0mo ago", phrase_at(now, then, Verbosity::Short));
        assert_eq!("0mo", phrase_at(now, then, Verbosity::Shortest));
    }

    #[rstest]
    fn test_future_and_unparseable_inputs(now: DateTime<Utc>) {
        let future = (now + Duration::seconds(10))
            .format("%Y-%m-%dT%H:%M:%S%.3fZ")
            .to_string();
        let args = [future.as_str(), "", "not a datetime", "2023-13-99T00:00:00.000Z"];

        for input in args {
            for verbosity in [Verbosity::Full, Verbosity::Short, Verbosity::Shortest] {
                assert_eq!("just now", phrase_at(now, input, verbosity), "{input:?}");
            }
        }
    }

    /// The clocked entry point agrees with the seam for a recent instant.
    #[test]
    fn test_clocked_entry_point() {
        let thirty_seconds_ago = (Utc::now() - Duration::seconds(30)).to_rfc3339();
        for verbosity in [Verbosity::Full, Verbosity::Short, Verbosity::Shortest] {
            assert_eq!("just now", pretty_relative_date_time(&thirty_seconds_ago, verbosity));
        }
    }

    #[test]
    fn test_default_verbosity_is_full() {
        assert_eq!(Verbosity::Full, Verbosity::default());
    }
}
