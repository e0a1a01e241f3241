use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use nc_core::{Error, Result};

pub const DEFAULT_USER_AGENT: &str = concat!("newscheck/", env!("CARGO_PKG_VERSION"));

/// Thin wrapper around a shared `reqwest` client. No timeout is configured,
/// so a hanging server blocks the request that asked for it.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new(user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self { client })
    }

    /// Download a page, accepting any successful status.
    pub async fn fetch_page(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Fetch(format!("Failed to download {}: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Fetch(format!("Request for {} failed with status {}", url, status)));
        }

        response
            .text()
            .await
            .map_err(|e| Error::Fetch(format!("Failed to read body of {}: {}", url, e)))
    }

    /// Download a page that must answer `200 OK` with an HTML content type.
    pub async fn fetch_html(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Fetch(format!("Failed to download {}: {}", url, e)))?;

        if response.status() != StatusCode::OK {
            return Err(Error::Fetch(format!(
                "Request for {} failed with status {}",
                url,
                response.status()
            )));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        if !is_html(content_type) {
            return Err(Error::Fetch("response content type was not text/html".to_string()));
        }

        response
            .text()
            .await
            .map_err(|e| Error::Fetch(format!("Failed to read body of {}: {}", url, e)))
    }
}

fn is_html(content_type: &str) -> bool {
    content_type.trim_start().to_ascii_lowercase().starts_with("text/html")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_html() {
        assert!(is_html("text/html"));
        assert!(is_html("text/html; charset=utf-8"));
        assert!(is_html("Text/HTML"));
        assert!(!is_html("application/json"));
        assert!(!is_html(""));
    }

    #[test]
    fn test_user_agent() {
        assert!(DEFAULT_USER_AGENT.starts_with("newscheck/"));
        assert!(Fetcher::new(DEFAULT_USER_AGENT).is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_host_is_fetch_error() {
        let fetcher = Fetcher::new(DEFAULT_USER_AGENT).unwrap();
        let result = fetcher.fetch_page("http://127.0.0.1:1/article").await;
        assert!(matches!(result, Err(Error::Fetch(_))));
    }
}
