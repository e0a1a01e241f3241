use tracing::Level;
use std::sync::Once;
use std::collections::VecDeque;

static INIT: Once = Once::new();

/// Prefixes every line with the context it was created for, e.g. the URL
/// being processed.
#[derive(Debug, Clone, Default)]
pub struct Logger {
    prefixes: VecDeque<String>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            prefixes: VecDeque::new(),
        }
    }

    pub fn with_prefix(mut self, prefix: String) -> Self {
        self.prefixes.push_back(prefix);
        self
    }

    fn prefix(&self) -> String {
        self.prefixes.iter().map(|p| format!("{} ", p)).collect::<String>()
    }

    pub fn info(&self, message: &str) {
        tracing::info!("{}{}", self.prefix(), message);
    }

    pub fn warn(&self, message: &str) {
        tracing::warn!("{}{}", self.prefix(), message);
    }

    pub fn debug(&self, message: &str) {
        tracing::debug!("{}{}", self.prefix(), message);
    }
}

/// Install the global fmt subscriber once. Later calls, or calls after
/// another subscriber was set, only hand back a logger.
pub fn init_logging(level: Level) -> Logger {
    if !tracing::dispatcher::has_been_set() {
        INIT.call_once(|| {
            tracing_subscriber::fmt()
                .with_max_level(level)
                .init();
        });
    }
    Logger::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixes_accumulate() {
        let logger = Logger::new()
            .with_prefix("[check]".to_string())
            .with_prefix("https://example.com".to_string());
        assert_eq!(logger.prefix(), "[check] https://example.com ");
    }

    #[test]
    fn test_init_logging_is_idempotent() {
        init_logging(Level::DEBUG).info("first");
        init_logging(Level::INFO).info("second");
        assert!(tracing::dispatcher::has_been_set());
    }
}
