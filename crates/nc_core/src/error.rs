use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Source resolution error: {0}")]
    SourceResolution(String),

    #[error("Date formatting error: {0}")]
    DateFormatting(String),

    #[error("Citation extraction error: {0}")]
    CitationExtraction(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("External error: {0}")]
    External(#[from] anyhow::Error),
}

impl Error {
    /// Fatal errors abort the whole request; everything else is replaced
    /// with a fallback value where it is consumed.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            Error::SourceResolution(_) | Error::DateFormatting(_) | Error::CitationExtraction(_)
        )
    }

    /// One-line advisory shown to the user when a request is aborted.
    pub fn user_message(&self) -> &'static str {
        match self {
            Error::InvalidInput(_) => "Please enter a URL!",
            _ => "Could not parse this article",
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatality() {
        assert!(Error::InvalidInput(String::new()).is_fatal());
        assert!(Error::Fetch("timeout".into()).is_fatal());
        assert!(!Error::SourceResolution("dns".into()).is_fatal());
        assert!(!Error::DateFormatting("missing".into()).is_fatal());
        assert!(!Error::CitationExtraction("no body".into()).is_fatal());
    }

    #[test]
    fn test_user_message() {
        assert_eq!(Error::InvalidInput(String::new()).user_message(), "Please enter a URL!");
        assert_eq!(Error::Fetch("404".into()).user_message(), "Could not parse this article");
    }
}
