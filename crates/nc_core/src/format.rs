use chrono::{DateTime, Utc};
use crate::{Error, Result};

/// Placeholder for any field that could not be determined.
pub const FALLBACK_TEXT: &str = "Could not find - open the article directly to check this value";

/// Placeholder for the day difference when there is no publish date.
pub const UNKNOWN: &str = "unknown";

const SECONDS_PER_DAY: i64 = 86_400;

/// `15 January, 2023`
pub fn format_publish_date(date: Option<&DateTime<Utc>>) -> Result<String> {
    let date = date.ok_or_else(|| Error::DateFormatting("no publish date".to_string()))?;
    Ok(date.format("%d %B, %Y").to_string())
}

/// Whole days between `date` and `now`, rounded down. Negative for dates in the future.
pub fn days_since(date: Option<&DateTime<Utc>>, now: &DateTime<Utc>) -> Result<i64> {
    let date = date.ok_or_else(|| Error::DateFormatting("no publish date".to_string()))?;
    Ok((*now - *date).num_seconds().div_euclid(SECONDS_PER_DAY))
}

/// Keywords for display, or `None` when there are none.
pub fn display_keywords(keywords: &[String]) -> Option<String> {
    if keywords.is_empty() {
        None
    } else {
        Some(keywords.join(", "))
    }
}

/// Search term built from the keywords, falling back to the title.
pub fn query_term(keywords: &[String], title: &str) -> String {
    if keywords.is_empty() {
        title.replace(' ', "+")
    } else {
        keywords.join("+")
    }
}

pub fn display_authors(authors: &[String]) -> Option<String> {
    if authors.is_empty() {
        None
    } else {
        Some(authors.join(", "))
    }
}
