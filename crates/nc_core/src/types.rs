use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything the extractor pulled out of a single article page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub url: String,
    pub title: String,
    #[serde(skip_serializing, default)]
    pub html: String,
    pub text: String,
    pub authors: Vec<String>,
    pub publish_date: Option<DateTime<Utc>>,
    pub keywords: Vec<String>,
    pub summary: String,
    pub top_image: String,
}

/// Brand metadata for the publication hosting an article.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceProfile {
    pub brand: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    pub href: String,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryLinks {
    pub google: String,
    pub duckduckgo: String,
    pub yahoo: String,
    pub bing: String,
}

/// Fully formatted outcome of one pipeline run. Every field is populated,
/// either with the extracted value or with a fallback placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub url: String,
    pub title: String,
    pub publish_date: String,
    pub days_since_publish: String,
    pub authors: String,
    pub keywords: String,
    pub query: String,
    pub summary: String,
    pub top_image: String,
    pub source_url: String,
    pub source_name: String,
    pub source_description: String,
    pub citations: Vec<Citation>,
    pub citation_count: usize,
    pub search_links: QueryLinks,
    pub source_links: QueryLinks,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewImage {
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub url: String,
    #[serde(rename = "secureURL", skip_serializing_if = "String::is_empty", default)]
    pub secure_url: String,
    #[serde(rename = "type", skip_serializing_if = "String::is_empty", default)]
    pub mime_type: String,
    #[serde(skip_serializing_if = "is_zero", default)]
    pub width: u32,
    #[serde(skip_serializing_if = "is_zero", default)]
    pub height: u32,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub alt: String,
}

/// Open Graph / meta-tag summary of a web page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSummary {
    #[serde(rename = "type", skip_serializing_if = "String::is_empty", default)]
    pub page_type: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub url: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub site_name: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub description: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub author: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub keywords: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub icon: Option<PreviewImage>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub images: Vec<PreviewImage>,
}

fn is_zero(n: &u32) -> bool {
    *n == 0
}
