use async_trait::async_trait;
use crate::types::{ArticleRecord, PageSummary, SourceProfile};
use crate::Result;

#[async_trait]
pub trait ArticleExtractor: Send + Sync {
    /// Download and parse the article at `url`
    async fn extract_article(&self, url: &str) -> Result<ArticleRecord>;
}

#[async_trait]
pub trait SiteProfiler: Send + Sync {
    /// Build a brand/description profile for a publication root such as `https://example.com`
    async fn profile_site(&self, root: &str) -> Result<SourceProfile>;
}

#[async_trait]
pub trait PageSummarizer: Send + Sync {
    /// Collect the Open Graph and meta-tag summary of a page
    async fn summarize_page(&self, url: &str) -> Result<PageSummary>;
}
