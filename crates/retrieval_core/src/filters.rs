//! Item filters shared by the sources. Each returns `true` when the item may pass.

use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate};

/// Language code reported for English by the detector.
pub const ENGLISH: &str = "eng";

/// Media types starting with `image/` are accepted.
pub fn is_image_mime(mime: &str) -> bool {
    mime.trim().to_ascii_lowercase().starts_with("image/")
}

/// A failed detection (`None`) counts as not English.
pub fn is_english(detected: Option<&str>) -> bool {
    detected == Some(ENGLISH)
}

/// `today` minus `years` × 365 days.
pub fn cutoff_date(today: NaiveDate, years: u32) -> NaiveDate {
    today - Duration::days(365 * i64::from(years))
}

/// Items published strictly before the cutoff are rejected.
pub fn passes_cutoff(published: NaiveDate, cutoff: NaiveDate) -> bool {
    published >= cutoff
}

/// Lower-cased tags that appear in `allowed`; an empty result means the item is off topic.
pub fn matching_topics<'a, I>(tags: I, allowed: &[String]) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'a str>,
{
    tags.into_iter()
        .map(|tag| tag.trim().to_lowercase())
        .filter(|tag| allowed.iter().any(|a| a.eq_ignore_ascii_case(tag)))
        .collect()
}
