use crate::domain::{CalverTag, YearMonth};
use crate::error::{ReleaseError, Result};

/// Computes the tag that follows `latest_tag` in the month `now`.
///
/// - Same month as the latest tag: the minor suffix is incremented, starting
///   at 1 when the latest tag had none.
/// - Any other month: the result is `now` itself, without a minor suffix,
///   i.e. the first release of that month.
///
/// The result is greater than `latest_tag` whenever `now` is not earlier than
/// the month encoded in it.
///
/// # Arguments
/// * `latest_tag` - Most recent release tag, `YY.MM` or `YY.MM.N`
/// * `now` - The current year and month
///
/// # Returns
/// * `Ok(CalverTag)` - The next release tag
/// * `Err(ReleaseError::MalformedTag)` - If `latest_tag` is not `YY.MM[.N]`
///
/// # Example
/// ```ignore
/// let june = YearMonth::new(24, 6);
/// assert_eq!(next_tag("23.02.5", june)?.to_string(), "24.06");
/// assert_eq!(next_tag("24.06", june)?.to_string(), "24.06.1");
/// assert_eq!(next_tag("24.06.1", june)?.to_string(), "24.06.2");
/// ```
pub fn next_tag(latest_tag: &str, now: YearMonth) -> Result<CalverTag> {
    let latest = CalverTag::parse(latest_tag)?;
    next_after(&latest, now)
}

/// Same as [`next_tag`] for an already parsed tag.
pub fn next_after(latest: &CalverTag, now: YearMonth) -> Result<CalverTag> {
    if latest.year_month != now {
        return Ok(CalverTag::first_of(now));
    }

    let new_minor = match latest.minor {
        Some(minor) => minor.checked_add(1).ok_or_else(|| {
            ReleaseError::malformed(format!("'{}': minor version overflows", latest))
        })?,
        None => 1,
    };

    Ok(CalverTag::with_minor(now, new_minor))
}

/// Tag for the very first release, when no prior release exists.
pub fn seed_tag(now: YearMonth) -> CalverTag {
    CalverTag::first_of(now)
}
