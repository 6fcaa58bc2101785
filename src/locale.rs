//! BCP-47 locale tag resolution.
//!
//! The locale-dependent formatters in [`pretty`](crate::pretty) take an
//! explicit [`Locale`] argument rather than reading an ambient global;
//! callers source a tag from wherever their environment keeps it (browser
//! language, `LANG`, configuration) and resolve it here.

use crate::error::DateError;

pub use chrono::Locale;

/// Resolves a BCP-47 language tag (`en-US`) to a [`Locale`].
///
/// Tags are matched against chrono's POSIX locale identifiers, so `en-US`
/// and `en_US` both resolve. A tag with an unknown region falls back to the
/// bare language subtag when that is itself a known locale.
///
/// # Examples
///
/// ```
/// use datewise::locale;
///
/// assert!(locale::from_tag("en-US").is_ok());
/// assert!(locale::from_tag("fr_FR").is_ok());
/// assert!(locale::from_tag("xx-XX").is_err());
/// ```
///
/// # Errors
///
/// Returns [`DateError::UnknownLocale`] when neither the full tag nor its
/// language subtag names known locale data.
pub fn from_tag(tag: &str) -> Result<Locale, DateError> {
    let posix = tag.replace('-', "_");
    if let Ok(locale) = Locale::try_from(posix.as_str()) {
        return Ok(locale);
    }

    let language = posix.split('_').next().unwrap_or_default();
    Locale::try_from(language).map_err(|_| DateError::UnknownLocale {
        tag: tag.to_owned(),
    })
}
