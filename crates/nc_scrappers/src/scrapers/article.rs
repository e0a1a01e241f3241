use async_trait::async_trait;
use dom_smoothie::{Config, Readability};
use scraper::{Html, Selector};
use nc_core::source::brand_from_host;
use nc_core::{ArticleExtractor, ArticleRecord, Error, PageSummarizer, PageSummary, Result, SiteProfiler, SourceProfile};
use crate::fetcher::Fetcher;
use crate::logging::Logger;
use crate::nlp;
use super::{jsonld, page_summary, utils};

/// Generic article scraper built on Readability, with meta tags and JSON-LD
/// as fallbacks, so it handles any publication rather than a fixed list of sites.
#[derive(Debug, Clone)]
pub struct NewsScraper {
    fetcher: Fetcher,
}

impl NewsScraper {
    pub fn new(fetcher: Fetcher) -> Self {
        Self { fetcher }
    }
}

#[async_trait]
impl ArticleExtractor for NewsScraper {
    async fn extract_article(&self, url: &str) -> Result<ArticleRecord> {
        let html = self.fetcher.fetch_page(url).await?;
        parse_article(url, html)
    }
}

#[async_trait]
impl SiteProfiler for NewsScraper {
    async fn profile_site(&self, root: &str) -> Result<SourceProfile> {
        let html = self
            .fetcher
            .fetch_page(root)
            .await
            .map_err(|e| Error::SourceResolution(e.to_string()))?;
        parse_site_profile(root, &html)
    }
}

#[async_trait]
impl PageSummarizer for NewsScraper {
    async fn summarize_page(&self, url: &str) -> Result<PageSummary> {
        let html = self.fetcher.fetch_html(url).await?;
        page_summary::extract_summary(url, &html)
    }
}

/// Main content of a page as found by Readability, with boilerplate such as
/// navigation, banners and footers stripped.
struct Readable {
    title: String,
    text: String,
    byline: Option<String>,
    published_time: Option<String>,
}

fn readable(url: &str, html: &str) -> Option<Readable> {
    let cfg = Config {
        max_elements_to_parse: 9000,
        ..Default::default()
    };
    let mut readability = match Readability::new(html, Some(url), Some(cfg)) {
        Ok(readability) => readability,
        Err(e) => {
            Logger::new().debug(&format!("Readability rejected {}: {}", url, e));
            return None;
        }
    };
    let article = match readability.parse() {
        Ok(article) => article,
        Err(e) => {
            Logger::new().debug(&format!("No readable content at {}: {}", url, e));
            return None;
        }
    };

    let content = Html::parse_fragment(&article.content);
    let mut paragraphs: Vec<String> = utils::extract_texts(&content, "p")
        .iter()
        .map(|p| p.split_whitespace().collect::<Vec<_>>().join(" "))
        .collect();
    if paragraphs.is_empty() {
        paragraphs = article
            .text_content
            .split('\n')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
    }

    Some(Readable {
        title: article.title.trim().to_string(),
        text: paragraphs.join("\n\n"),
        byline: article.byline,
        published_time: article.published_time,
    })
}

/// Turn a downloaded page into an article record.
///
/// Title, body text and byline come from Readability. Meta tags, JSON-LD
/// and plain selectors only fill in what it could not find.
pub fn parse_article(url: &str, html: String) -> Result<ArticleRecord> {
    let base = utils::parse_url(url)?;
    let document = Html::parse_document(&html);
    let readable = readable(url, &html);

    let title = readable
        .as_ref()
        .map(|r| r.title.clone())
        .filter(|title| !title.is_empty())
        .or_else(|| utils::meta_content(&document, &["meta[property='og:title']", "meta[name='twitter:title']"]))
        .or_else(|| utils::extract_text(&document, "title"))
        .or_else(|| utils::extract_text(&document, "h1"))
        .unwrap_or_default();

    let text = readable
        .as_ref()
        .map(|r| r.text.clone())
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| article_text(&document));
    if title.is_empty() && text.is_empty() {
        return Err(Error::Fetch(format!("No article content found at {}", url)));
    }

    let authors = extract_authors(&document, readable.as_ref().and_then(|r| r.byline.as_deref()));
    let publish_date = readable
        .as_ref()
        .and_then(|r| r.published_time.as_deref())
        .and_then(utils::parse_date)
        .or_else(|| {
            utils::meta_content(
                &document,
                &[
                    "meta[property='article:published_time']",
                    "meta[property='og:published_time']",
                    "meta[name='pubdate']",
                    "meta[name='publishdate']",
                    "meta[name='date']",
                    "meta[itemprop='datePublished']",
                ],
            )
            .or_else(|| jsonld::extract_date_published(&document))
            .or_else(|| first_attr(&document, "time[datetime]", "datetime"))
            .and_then(|raw| utils::parse_date(&raw))
        });

    let top_image = utils::meta_content(
        &document,
        &["meta[property='og:image']", "meta[name='twitter:image']", "meta[name='twitter:image:src']"],
    )
    .or_else(|| first_attr(&document, "body img[src]", "src"))
    .map(|src| utils::resolve(&base, &src))
    .unwrap_or_default();

    let keywords = nlp::keywords(&title, &text);
    let summary = nlp::summarize(&title, &text);

    Ok(ArticleRecord {
        url: url.to_string(),
        title,
        html,
        text,
        authors,
        publish_date,
        keywords,
        summary,
        top_image,
    })
}

/// Brand and description of a publication's home page.
pub fn parse_site_profile(root: &str, html: &str) -> Result<SourceProfile> {
    let root_url = utils::parse_url(root).map_err(|e| Error::SourceResolution(e.to_string()))?;
    let host = root_url
        .host_str()
        .ok_or_else(|| Error::SourceResolution(format!("URL has no host: {}", root)))?;

    let document = Html::parse_document(html);
    let description = utils::meta_content(
        &document,
        &["meta[name='description']", "meta[property='og:description']"],
    )
    .unwrap_or_default();

    Ok(SourceProfile {
        brand: brand_from_host(host),
        description,
    })
}

fn article_text(document: &Html) -> String {
    let mut paragraphs = utils::extract_texts(document, "article p");
    if paragraphs.is_empty() {
        paragraphs = utils::extract_texts(document, "body p");
    }
    paragraphs.join("\n\n")
}

fn first_attr(document: &Html, selector: &str, attr: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    document
        .select(&selector)
        .filter_map(|el| el.value().attr(attr))
        .map(|v| v.trim().to_string())
        .find(|v| !v.is_empty())
}

fn extract_authors(document: &Html, byline: Option<&str>) -> Vec<String> {
    let mut candidates: Vec<String> = byline
        .into_iter()
        .flat_map(|b| b.split(',').flat_map(|part| part.split(" and ")))
        .map(str::to_string)
        .collect();

    if let Ok(selector) = Selector::parse("meta[name='author'], meta[property='article:author']") {
        candidates.extend(
            document
                .select(&selector)
                .filter_map(|el| el.value().attr("content"))
                .filter(|content| !content.starts_with("http"))
                .map(|content| content.trim().to_string()),
        );
    }
    candidates.extend(jsonld::extract_authors(document));
    candidates.extend(utils::extract_texts(document, "[rel='author']"));
    candidates.extend(utils::extract_texts(document, ".byline"));

    let mut authors: Vec<String> = Vec::new();
    for candidate in candidates {
        let name = candidate.trim_start_matches("By ").trim_start_matches("by ").trim().to_string();
        if !name.is_empty() && !authors.contains(&name) {
            authors.push(name);
        }
    }
    authors
}
