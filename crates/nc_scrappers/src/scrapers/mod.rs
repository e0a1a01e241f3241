pub mod article;
pub mod jsonld;
pub mod page_summary;

pub use article::NewsScraper;

/// Common utilities for scrapers
pub(crate) mod utils {
    use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
    use nc_core::{Error, Result};
    use scraper::{Html, Selector};
    use url::Url;

    pub fn parse_url(url: &str) -> Result<Url> {
        Url::parse(url).map_err(|e| Error::Fetch(format!("Failed to parse URL: {}", e)))
    }

    /// First non-empty `content` attribute among elements matching any of the selectors,
    /// tried in order.
    pub fn meta_content(document: &Html, selectors: &[&str]) -> Option<String> {
        selectors.iter().find_map(|selector| {
            let selector = Selector::parse(selector).ok()?;
            document
                .select(&selector)
                .filter_map(|el| el.value().attr("content"))
                .map(|content| content.trim())
                .find(|content| !content.is_empty())
                .map(str::to_string)
        })
    }

    /// Trimmed text of the first element matching `selector` that has any.
    pub fn extract_text(document: &Html, selector: &str) -> Option<String> {
        let selector = Selector::parse(selector).ok()?;
        document
            .select(&selector)
            .map(|el| el.text().collect::<String>().trim().to_string())
            .find(|text| !text.is_empty())
    }

    pub fn extract_texts(document: &Html, selector: &str) -> Vec<String> {
        let Ok(selector) = Selector::parse(selector) else {
            return Vec::new();
        };
        document
            .select(&selector)
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|text| !text.is_empty())
            .collect()
    }

    /// Resolve a possibly relative link against the page it was found on.
    pub fn resolve(base: &Url, href: &str) -> String {
        base.join(href)
            .map(|u| u.to_string())
            .unwrap_or_else(|_| href.to_string())
    }

    /// Dates as they show up in meta tags and JSON-LD.
    pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
        let raw = raw.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%z") {
            return Some(dt.with_timezone(&Utc));
        }
        if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
            if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
                return Some(Utc.from_utc_datetime(&naive));
            }
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|naive| Utc.from_utc_datetime(&naive))
    }
}
