/// All errors this crate can produce.
///
/// The graceful-degradation surfaces never return these:
/// [`Granularity::of`](crate::Granularity::of) yields `None` and
/// [`pretty_relative_date_time`](crate::pretty_relative_date_time) yields
/// `"just now"` for input they cannot make sense of.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DateError {
    /// A date or datetime string could not be parsed.
    #[error("{0}")]
    UnparseableDate(#[from] chrono::ParseError),

    /// A locale tag could not be resolved to known locale data.
    #[error("Locale tag `{tag}` does not resolve to a known locale")]
    UnknownLocale {
        /// The tag as given by the caller.
        tag: String,
    },
}
