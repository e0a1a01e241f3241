use url::Url;
use crate::{Error, Result};

/// `scheme://host[:port]` of the publication hosting `url`.
pub fn source_root(url: &str) -> Result<String> {
    let parsed = Url::parse(url)
        .map_err(|e| Error::SourceResolution(format!("Failed to parse URL: {}", e)))?;
    let host = parsed
        .host_str()
        .ok_or_else(|| Error::SourceResolution(format!("URL has no host: {}", url)))?;

    Ok(match parsed.port() {
        Some(port) => format!("{}://{}:{}", parsed.scheme(), host, port),
        None => format!("{}://{}", parsed.scheme(), host),
    })
}

/// Registrable domain label of a host, e.g. `nytimes` for `www.nytimes.com`
/// and `bbc` for `news.bbc.co.uk`.
pub fn brand_from_host(host: &str) -> String {
    let labels: Vec<&str> = host
        .trim_end_matches('.')
        .split('.')
        .filter(|l| !l.is_empty())
        .collect();

    match labels.len() {
        0 => String::new(),
        1 => labels[0].to_string(),
        n => {
            let tld = labels[n - 1];
            let second = labels[n - 2];
            // co.uk, com.au, org.br and friends
            let compound_suffix = tld.len() == 2
                && n >= 3
                && (second.len() <= 2 || matches!(second, "com" | "net" | "org" | "gov" | "edu" | "gob"));
            if compound_suffix {
                labels[n - 3].to_string()
            } else {
                second.to_string()
            }
        }
    }
}
