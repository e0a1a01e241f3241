pub mod error;
pub mod extractor;
pub mod format;
pub mod query;
pub mod source;
pub mod types;
pub mod validate;

pub use error::{Error, Result};
pub use extractor::{ArticleExtractor, PageSummarizer, SiteProfiler};
pub use types::{ArticleRecord, Citation, PageSummary, PreviewImage, QueryLinks, ResultRecord, SourceProfile};
