use clap::{Parser, Subcommand, ValueEnum};
use datewise::{locale, pretty, Day, Granularity, Instant, Locale, Verbosity};
use datewise::{is_between_two_dates, is_today_between, pretty_relative_date_time, DateError};

#[derive(Clone, PartialEq, Eq, ValueEnum, Debug)]
enum SizeArg {
    Full,
    Short,
    Shortest,
}

impl SizeArg {
    fn to_verbosity(&self) -> Verbosity {
        match self {
            SizeArg::Full => Verbosity::Full,
            SizeArg::Short => Verbosity::Short,
            SizeArg::Shortest => Verbosity::Shortest,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
#[command(arg_required_else_help(true))]
enum Commands {
    /// Prints the current UTC date as YYYY-MM-DD
    Today,

    /// Prints the current instant as a canonical UTC datetime string
    Now,

    /// Prints today's date with one calendar month subtracted
    MonthAgo,

    /// Prints the first instant (00:00:00.000 UTC) of a date
    StartOfDay {
        /// The date, as YYYY-MM-DD. Omit for today.
        date: Option<String>,
    },

    /// Prints the last instant (23:59:59.999 UTC) of a date
    EndOfDay {
        /// The date, as YYYY-MM-DD
        date: String,
    },

    /// Classifies a string as DAY, MONTH, or YEAR
    ///
    /// Prints the classification and exits 0, or prints `none` and exits 1
    /// for an unrecognized shape.
    DateType {
        /// The string to classify
        input: String,
    },

    /// Checks whether an instant falls within an inclusive day range
    ///
    /// Prints `true` (exit 0) or `false` (exit 1).
    Between {
        /// The first day of the range, as YYYY-MM-DD
        start: String,

        /// The last day of the range, as YYYY-MM-DD
        end: String,

        /// The instant to test, as a canonical UTC datetime string. Omit to
        /// test the current instant.
        #[arg(short, long)]
        instant: Option<String>,
    },

    /// Formats a date as the locale's short date
    Pretty {
        /// The date, as YYYY-MM-DD
        date: String,

        /// BCP-47 locale tag. Omit to use LC_ALL/LC_TIME/LANG.
        #[arg(short, long)]
        locale: Option<String>,
    },

    /// Formats a datetime as the locale's short date plus time
    PrettyDatetime {
        /// The datetime, as an RFC 3339 string
        instant: String,

        /// BCP-47 locale tag. Omit to use LC_ALL/LC_TIME/LANG.
        #[arg(short, long)]
        locale: Option<String>,
    },

    /// Formats a datetime as a long date with time and timezone
    LongDatetime {
        /// The datetime, as an RFC 3339 string
        instant: String,

        /// BCP-47 locale tag. Omit to use LC_ALL/LC_TIME/LANG.
        #[arg(short, long)]
        locale: Option<String>,
    },

    /// Phrases how long ago a datetime was
    Relative {
        /// The datetime, as an RFC 3339 string
        instant: String,

        /// How verbose the phrase should be
        #[arg(short, long, value_enum, default_value = "full")]
        size: SizeArg,
    },
}

type Output = (String, i32);

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok((output, exit_code)) => {
            println!("{output}");
            std::process::exit(exit_code);
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    }
}

fn run(cli: Cli) -> Result<Output, DateError> {
    match cli.command {
        Commands::Today => Ok((Day::today().to_string(), 0)),
        Commands::Now => Ok((Instant::now().to_string(), 0)),
        Commands::MonthAgo => Ok((Day::one_month_ago().to_string(), 0)),
        Commands::StartOfDay { date } => {
            let day = match date {
                Some(date) => date.parse::<Day>()?,
                None => Day::today(),
            };
            Ok((day.start_of_day().to_string(), 0))
        }
        Commands::EndOfDay { date } => {
            Ok((date.parse::<Day>()?.end_of_day().to_string(), 0))
        }
        Commands::DateType { input } => Ok(match Granularity::of(&input) {
            Some(granularity) => (granularity.to_string(), 0),
            None => ("none".to_string(), 1),
        }),
        Commands::Between {
            start,
            end,
            instant,
        } => {
            let within = match instant {
                Some(instant) => is_between_two_dates(&start, &end, &instant)?,
                None => is_today_between(&start, &end)?,
            };
            Ok(if within {
                ("true".to_string(), 0)
            } else {
                ("false".to_string(), 1)
            })
        }
        Commands::Pretty { date, locale } => {
            Ok((pretty::date(&date, resolve_locale(locale)?)?, 0))
        }
        Commands::PrettyDatetime { instant, locale } => {
            Ok((pretty::date_time(&instant, resolve_locale(locale)?)?, 0))
        }
        Commands::LongDatetime { instant, locale } => {
            Ok((pretty::long_date_time(&instant, resolve_locale(locale)?)?, 0))
        }
        Commands::Relative { instant, size } => {
            Ok((pretty_relative_date_time(&instant, size.to_verbosity()), 0))
        }
    }
}

/// An explicit `--locale` tag must resolve; otherwise fall back through the
/// usual environment variables, and finally to POSIX.
fn resolve_locale(tag: Option<String>) -> Result<Locale, DateError> {
    match tag {
        Some(tag) => locale::from_tag(&tag),
        None => Ok(env_locale_tag()
            .and_then(|tag| locale::from_tag(&tag).ok())
            .unwrap_or(Locale::POSIX)),
    }
}

/// The locale tag from the environment, checked in precedence order, with
/// any codeset suffix (`en_US.UTF-8`) stripped.
fn env_locale_tag() -> Option<String> {
    for key in ["LC_ALL", "LC_TIME", "LANG"] {
        if let Ok(value) = std::env::var(key) {
            let tag = value.split('.').next().unwrap_or_default().to_string();
            if !tag.is_empty() && tag != "C" && tag != "POSIX" {
                return Some(tag);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_between_subcommand() {
        let cli = Cli::try_parse_from([
            "datewise",
            "between",
            "2023-12-25",
            "2023-12-31",
            "--instant",
            "2023-12-28T10:00:00.000Z",
        ])
        .unwrap();

        assert_eq!(Ok(("true".to_string(), 0)), run(cli));
    }

    #[test]
    fn test_date_type_subcommand() {
        let cli = Cli::try_parse_from(["datewise", "date-type", "2023-12"]).unwrap();
        assert_eq!(Ok(("MONTH".to_string(), 0)), run(cli));

        let cli = Cli::try_parse_from(["datewise", "date-type", "tuesday"]).unwrap();
        assert_eq!(Ok(("none".to_string(), 1)), run(cli));
    }

    #[test]
    fn test_boundary_subcommands() {
        let cli = Cli::try_parse_from(["datewise", "start-of-day", "2023-12-25"]).unwrap();
        assert_eq!(Ok(("2023-12-25T00:00:00.000Z".to_string(), 0)), run(cli));

        let cli = Cli::try_parse_from(["datewise", "end-of-day", "2023-12-25"]).unwrap();
        assert_eq!(Ok(("2023-12-25T23:59:59.999Z".to_string(), 0)), run(cli));
    }

    #[test]
    fn test_pretty_with_explicit_locale() {
        let cli = Cli::try_parse_from([
            "datewise",
            "pretty",
            "2023-12-25",
            "--locale",
            "en-US",
        ])
        .unwrap();

        assert_eq!(Ok(("12/25/2023".to_string(), 0)), run(cli));
    }

    #[test]
    fn test_relative_subcommand_sizes() {
        let cli = Cli::try_parse_from([
            "datewise",
            "relative",
            "2000-01-01T00:00:00.000Z",
            "--size",
            "shortest",
        ])
        .unwrap();

        let (output, exit_code) = run(cli).unwrap();
        assert!(output.ends_with('y'), "{output}");
        assert_eq!(0, exit_code);
    }

    #[test]
    fn test_bad_date_errors() {
        let cli = Cli::try_parse_from(["datewise", "end-of-day", "2023-13-40"]).unwrap();
        assert!(run(cli).is_err());
    }
}
