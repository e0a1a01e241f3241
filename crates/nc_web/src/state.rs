use std::sync::Arc;
use nc_core::PageSummarizer;
use nc_scrappers::Pipeline;

/// Startup configuration handed to the web layer.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Key used to sign flash-message cookies.
    pub secret_key: String,
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

pub struct AppState {
    pub pipeline: Pipeline,
    pub summarizer: Arc<dyn PageSummarizer>,
    pub config: ServerConfig,
}
