use clap::{Args, Subcommand};
use nc_core::{PageSummarizer, Result};
use crate::pipeline::Pipeline;

#[derive(Args, Debug, Clone)]
pub struct ScraperArgs {
    #[command(subcommand)]
    pub command: ScraperCommands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ScraperCommands {
    /// Run the full article check and print the result as JSON
    Check {
        /// Article URL, e.g. https://www.example.com/2023/01/15/story.html
        url: String,
    },
    /// Print the Open Graph summary of a page as JSON
    Summary {
        url: String,
    },
}

pub async fn handle_command(
    args: ScraperArgs,
    pipeline: &Pipeline,
    summarizer: &dyn PageSummarizer,
) -> Result<String> {
    match args.command {
        ScraperCommands::Check { url } => {
            let record = pipeline.run(&url).await?;
            Ok(serde_json::to_string_pretty(&record)?)
        }
        ScraperCommands::Summary { url } => {
            let summary = summarizer.summarize_page(&url).await?;
            Ok(serde_json::to_string_pretty(&summary)?)
        }
    }
}
