use crate::types::QueryLinks;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchEngine {
    Google,
    DuckDuckGo,
    Yahoo,
    Bing,
}

impl SearchEngine {
    pub const ALL: [SearchEngine; 4] = [
        SearchEngine::Google,
        SearchEngine::DuckDuckGo,
        SearchEngine::Yahoo,
        SearchEngine::Bing,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SearchEngine::Google => "Google",
            SearchEngine::DuckDuckGo => "DuckDuckGo",
            SearchEngine::Yahoo => "Yahoo",
            SearchEngine::Bing => "Bing",
        }
    }

    /// The term is inserted verbatim; callers are expected to have `+`-joined it already.
    pub fn search_url(&self, term: &str) -> String {
        match self {
            SearchEngine::Google => format!("https://www.google.com/search?q={}", term),
            SearchEngine::DuckDuckGo => format!("https://duckduckgo.com/?q={}", term),
            SearchEngine::Yahoo => format!("https://search.yahoo.com/search?p={}", term),
            SearchEngine::Bing => format!("https://www.bing.com/search?q={}", term),
        }
    }
}

impl QueryLinks {
    pub fn for_term(term: &str) -> Self {
        Self {
            google: SearchEngine::Google.search_url(term),
            duckduckgo: SearchEngine::DuckDuckGo.search_url(term),
            yahoo: SearchEngine::Yahoo.search_url(term),
            bing: SearchEngine::Bing.search_url(term),
        }
    }

    /// "Find out more about this source" links.
    pub fn for_source(brand: &str) -> Self {
        Self::for_term(&format!("{}+wikipedia", brand))
    }

    pub fn get(&self, engine: SearchEngine) -> &str {
        match engine {
            SearchEngine::Google => &self.google,
            SearchEngine::DuckDuckGo => &self.duckduckgo,
            SearchEngine::Yahoo => &self.yahoo,
            SearchEngine::Bing => &self.bing,
        }
    }
}
