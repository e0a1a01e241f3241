pub mod citations;
pub mod cli;
pub mod fetcher;
pub mod logging;
pub mod nlp;
pub mod pipeline;
pub mod scrapers;

pub use cli::{handle_command, ScraperArgs, ScraperCommands};
pub use fetcher::Fetcher;
pub use logging::init_logging;
pub use pipeline::Pipeline;
pub use scrapers::NewsScraper;

pub mod prelude {
    pub use super::pipeline::Pipeline;
    pub use super::scrapers::NewsScraper;
    pub use nc_core::{ArticleRecord, Error, ResultRecord, Result};
}
