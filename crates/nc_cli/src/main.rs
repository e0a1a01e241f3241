use std::sync::Arc;
use anyhow::Context;
use clap::Parser;
use tracing::{info, Level};
use nc_scrappers::cli::{handle_command, ScraperArgs, ScraperCommands as NcScraperCommands};
use nc_scrappers::fetcher::DEFAULT_USER_AGENT;
use nc_scrappers::{Fetcher, NewsScraper, Pipeline};
use nc_web::{AppState, ServerConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "Check where a news article comes from and what it cites", long_about = None)]
pub struct Cli {
    /// Maximum log level (error, warn, info, debug, trace)
    #[arg(long, env = "NEWSCHECK_LOG", default_value = "info")]
    log_level: Level,
    /// User agent sent with every page download
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Run the web front end
    Serve {
        #[arg(long, env = "NEWSCHECK_HOST", default_value = "127.0.0.1")]
        host: String,
        #[arg(long, env = "NEWSCHECK_PORT", default_value_t = 5000)]
        port: u16,
        /// Key used to sign flash-message cookies
        #[arg(long, env = "NEWSCHECK_SECRET_KEY", hide_env_values = true)]
        secret_key: String,
    },
    /// Check a single article and print the result as JSON
    Check {
        url: String,
    },
    /// Print the Open Graph summary of a page as JSON
    Summary {
        url: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    nc_scrappers::init_logging(cli.log_level);

    let scraper = Arc::new(NewsScraper::new(Fetcher::new(&cli.user_agent)?));
    let pipeline = Pipeline::new(scraper.clone(), scraper.clone());
    info!("🦗 Article scraper ready (user agent {})", cli.user_agent);

    let command = match cli.command {
        Commands::Serve { host, port, secret_key } => {
            let state = AppState {
                pipeline,
                summarizer: scraper,
                config: ServerConfig { host, port, secret_key },
            };
            return nc_web::serve(state).await.context("web server stopped");
        }
        Commands::Check { url } => NcScraperCommands::Check { url },
        Commands::Summary { url } => NcScraperCommands::Summary { url },
    };

    let output = handle_command(ScraperArgs { command }, &pipeline, scraper.as_ref()).await?;
    println!("{}", output);
    Ok(())
}
