use std::sync::Arc;
use chrono::{DateTime, Utc};
use nc_core::format::{self, FALLBACK_TEXT, UNKNOWN};
use nc_core::source::source_root;
use nc_core::validate::validate_url;
use nc_core::{ArticleExtractor, QueryLinks, Result, ResultRecord, SiteProfiler, SourceProfile};
use crate::citations::harvest_citations;
use crate::logging::Logger;

/// Turns a user-supplied URL into a fully populated [`ResultRecord`].
///
/// Only validation and the article download are fatal. Source resolution,
/// date formatting and citation harvesting each fail on their own and are
/// replaced with fallback values.
#[derive(Clone)]
pub struct Pipeline {
    extractor: Arc<dyn ArticleExtractor>,
    profiler: Arc<dyn SiteProfiler>,
}

impl Pipeline {
    pub fn new(extractor: Arc<dyn ArticleExtractor>, profiler: Arc<dyn SiteProfiler>) -> Self {
        Self { extractor, profiler }
    }

    pub async fn run(&self, raw_url: &str) -> Result<ResultRecord> {
        self.run_at(raw_url, Utc::now()).await
    }

    /// Same as [`Pipeline::run`] with an explicit "now" for the days-since-publish field.
    pub async fn run_at(&self, raw_url: &str, now: DateTime<Utc>) -> Result<ResultRecord> {
        let url = validate_url(raw_url)?;
        let log = Logger::new().with_prefix(format!("[{}]", url));

        log.info("📰 Fetching article");
        let article = match self.extractor.extract_article(url).await {
            Ok(article) => article,
            Err(e) => {
                log.warn(&format!("❌ Could not parse article: {}", e));
                return Err(e);
            }
        };
        log.info(&format!("✨ Parsed \"{}\"", article.title));

        let source_url = source_root(url).unwrap_or_else(|_| FALLBACK_TEXT.to_string());
        let (source_name, source_description) = match self.resolve_source(url).await {
            Ok(profile) => {
                log.info(&format!("🏛️ Source identified as {}", profile.brand));
                (profile.brand.to_uppercase(), profile.description)
            }
            Err(e) => {
                log.warn(&format!("⚠️ Source resolution failed: {}", e));
                (FALLBACK_TEXT.to_string(), FALLBACK_TEXT.to_string())
            }
        };

        let publish_date = format::format_publish_date(article.publish_date.as_ref())
            .unwrap_or_else(|_| FALLBACK_TEXT.to_string());
        let days_since_publish = format::days_since(article.publish_date.as_ref(), &now)
            .map(|days| days.to_string())
            .unwrap_or_else(|_| UNKNOWN.to_string());

        let citations = match harvest_citations(&article.html) {
            Ok(citations) => citations,
            Err(e) => {
                log.warn(&format!("⚠️ No citations: {}", e));
                Vec::new()
            }
        };
        log.info(&format!("🔗 Found {} citations", citations.len()));

        let query = format::query_term(&article.keywords, &article.title);

        Ok(ResultRecord {
            url: url.to_string(),
            title: article.title,
            publish_date,
            days_since_publish,
            authors: format::display_authors(&article.authors).unwrap_or_else(|| FALLBACK_TEXT.to_string()),
            keywords: format::display_keywords(&article.keywords).unwrap_or_else(|| FALLBACK_TEXT.to_string()),
            search_links: QueryLinks::for_term(&query),
            query,
            summary: article.summary,
            top_image: article.top_image,
            source_url,
            source_links: QueryLinks::for_source(&source_name),
            source_name,
            source_description,
            citation_count: citations.len(),
            citations,
        })
    }

    /// Profile the publication root. Never cached: every request fetches it again.
    async fn resolve_source(&self, url: &str) -> Result<SourceProfile> {
        let root = source_root(url)?;
        self.profiler.profile_site(&root).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::TimeZone;
    use nc_core::{ArticleRecord, Error};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StaticArticle(ArticleRecord);

    #[async_trait]
    impl ArticleExtractor for StaticArticle {
        async fn extract_article(&self, url: &str) -> Result<ArticleRecord> {
            Ok(ArticleRecord {
                url: url.to_string(),
                ..self.0.clone()
            })
        }
    }

    struct BrokenExtractor;

    #[async_trait]
    impl ArticleExtractor for BrokenExtractor {
        async fn extract_article(&self, url: &str) -> Result<ArticleRecord> {
            Err(Error::Fetch(format!("connection refused: {}", url)))
        }
    }

    #[derive(Default)]
    struct CountingProfiler {
        calls: AtomicUsize,
        roots: std::sync::Mutex<Vec<String>>,
    }

    #[async_trait]
    impl SiteProfiler for CountingProfiler {
        async fn profile_site(&self, root: &str) -> Result<SourceProfile> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.roots.lock().unwrap().push(root.to_string());
            Ok(SourceProfile {
                brand: "example".to_string(),
                description: "An example publication".to_string(),
            })
        }
    }

    struct BrokenProfiler;

    #[async_trait]
    impl SiteProfiler for BrokenProfiler {
        async fn profile_site(&self, root: &str) -> Result<SourceProfile> {
            Err(Error::SourceResolution(format!("{} unreachable", root)))
        }
    }

    fn article() -> ArticleRecord {
        ArticleRecord {
            url: String::new(),
            title: "Hello World".to_string(),
            html: r#"<body><a href="https://x.com">X</a><a class="nav" href="https://y.com">Y</a></body>"#.to_string(),
            text: "Hello world.".to_string(),
            authors: vec!["Ana".to_string(), "Juan".to_string()],
            publish_date: Some(Utc.with_ymd_and_hms(2023, 1, 15, 0, 0, 0).unwrap()),
            keywords: vec!["cat".to_string(), "dog".to_string()],
            summary: "Hello world.".to_string(),
            top_image: "https://example.com/a.jpg".to_string(),
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 1, 20, 0, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn test_full_record() {
        let profiler = Arc::new(CountingProfiler::default());
        let pipeline = Pipeline::new(Arc::new(StaticArticle(article())), profiler.clone());

        let record = pipeline.run_at("https://www.example.com/news/1", now()).await.unwrap();

        assert_eq!(record.url, "https://www.example.com/news/1");
        assert_eq!(record.title, "Hello World");
        assert_eq!(record.publish_date, "15 January, 2023");
        assert_eq!(record.days_since_publish, "5");
        assert_eq!(record.authors, "Ana, Juan");
        assert_eq!(record.keywords, "cat, dog");
        assert_eq!(record.query, "cat+dog");
        assert_eq!(record.search_links.google, "https://www.google.com/search?q=cat+dog");
        assert_eq!(record.source_url, "https://www.example.com");
        assert_eq!(record.source_name, "EXAMPLE");
        assert_eq!(record.source_description, "An example publication");
        assert_eq!(record.source_links.bing, "https://www.bing.com/search?q=EXAMPLE+wikipedia");
        assert_eq!(record.citation_count, 1);
        assert_eq!(record.citations[0].href, "https://x.com");
        assert_eq!(*profiler.roots.lock().unwrap(), vec!["https://www.example.com"]);
    }

    #[tokio::test]
    async fn test_invalid_input_never_fetches() {
        let profiler = Arc::new(CountingProfiler::default());
        let pipeline = Pipeline::new(Arc::new(BrokenExtractor), profiler.clone());

        for raw in ["", "www.example.com", "ftp://example.com"] {
            let err = pipeline.run(raw).await.unwrap_err();
            assert!(matches!(err, Error::InvalidInput(_)));
        }
        assert_eq!(profiler.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_fetch_failure_is_fatal() {
        let profiler = Arc::new(CountingProfiler::default());
        let pipeline = Pipeline::new(Arc::new(BrokenExtractor), profiler.clone());

        let err = pipeline.run("https://example.com/a").await.unwrap_err();
        assert!(matches!(err, Error::Fetch(_)));
        assert_eq!(err.user_message(), "Could not parse this article");
        assert_eq!(profiler.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_source_failure_uses_fallback() {
        let pipeline = Pipeline::new(Arc::new(StaticArticle(article())), Arc::new(BrokenProfiler));

        let record = pipeline.run_at("http://example.com/a", now()).await.unwrap();

        assert_eq!(record.source_name, FALLBACK_TEXT);
        assert_eq!(record.source_description, FALLBACK_TEXT);
        assert_eq!(record.source_links, QueryLinks::for_source(FALLBACK_TEXT));
        assert_eq!(record.source_url, "http://example.com");
        assert_eq!(record.title, "Hello World");
    }

    #[tokio::test]
    async fn test_missing_fields_use_fallbacks() {
        let bare = ArticleRecord {
            title: "Hello World".to_string(),
            ..ArticleRecord::default()
        };
        let pipeline = Pipeline::new(Arc::new(StaticArticle(bare)), Arc::new(CountingProfiler::default()));

        let record = pipeline.run_at("https://example.com/a", now()).await.unwrap();

        assert_eq!(record.publish_date, FALLBACK_TEXT);
        assert_eq!(record.days_since_publish, UNKNOWN);
        assert_eq!(record.authors, FALLBACK_TEXT);
        assert_eq!(record.keywords, FALLBACK_TEXT);
        assert_eq!(record.query, "Hello+World");
        assert_eq!(record.search_links.yahoo, "https://search.yahoo.com/search?p=Hello+World");
        assert_eq!(record.citation_count, 0);
        assert!(record.citations.is_empty());
    }

    #[tokio::test]
    async fn test_repeat_runs_are_identical_and_refetch_source() {
        let profiler = Arc::new(CountingProfiler::default());
        let pipeline = Pipeline::new(Arc::new(StaticArticle(article())), profiler.clone());

        let first = pipeline.run_at("https://example.com/a", now()).await.unwrap();
        let second = pipeline.run_at("https://example.com/a", now()).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(profiler.calls.load(Ordering::SeqCst), 2);
    }
}
