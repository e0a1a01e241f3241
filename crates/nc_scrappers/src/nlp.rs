//! Frequency-based keyword extraction and extractive summarisation.

use std::collections::{HashMap, HashSet};
use lazy_static::lazy_static;

const MAX_KEYWORDS: usize = 10;
const SUMMARY_SENTENCES: usize = 5;
const IDEAL_SENTENCE_WORDS: f64 = 20.0;

lazy_static! {
    static ref STOPWORDS: HashSet<&'static str> = [
        "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and",
        "any", "are", "as", "at", "be", "because", "been", "before", "being", "below",
        "between", "both", "but", "by", "can", "could", "did", "do", "does", "doing", "down",
        "during", "each", "even", "few", "for", "from", "further", "had", "has", "have",
        "having", "he", "her", "here", "hers", "herself", "him", "himself", "his", "how", "i",
        "if", "in", "into", "is", "it", "its", "itself", "just", "like", "many", "may", "me",
        "might", "more", "most", "much", "must", "my", "myself", "new", "no", "nor", "not",
        "now", "of", "off", "on", "once", "one", "only", "or", "other", "our", "ours",
        "ourselves", "out", "over", "own", "said", "same", "says", "she", "should", "since",
        "so", "some", "still", "such", "than", "that", "the", "their", "theirs", "them",
        "themselves", "then", "there", "these", "they", "this", "those", "through", "to",
        "too", "two", "under", "until", "up", "us", "very", "was", "way", "we", "were",
        "what", "when", "where", "which", "while", "who", "whom", "why", "will", "with",
        "would", "year", "years", "yet", "you", "your", "yours", "yourself", "yourselves",
    ]
    .into_iter()
    .collect();
}

/// Lower-cased words of `text`, punctuation stripped.
fn split_words(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .map(|w| w.trim_matches('\'').to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}

fn is_candidate(word: &str) -> bool {
    word.chars().count() > 1
        && !word.chars().all(|c| c.is_numeric())
        && !STOPWORDS.contains(word)
}

/// Candidate words of `text` with their counts, most frequent first. Ties
/// keep the order in which the words first appear.
fn ranked_words(text: &str) -> Vec<(String, usize)> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut order: Vec<String> = Vec::new();

    for word in split_words(text).into_iter().filter(|w| is_candidate(w)) {
        let count = counts.entry(word.clone()).or_insert(0);
        if *count == 0 {
            order.push(word);
        }
        *count += 1;
    }

    let mut ranked: Vec<(String, usize)> = order
        .into_iter()
        .map(|w| {
            let c = counts[&w];
            (w, c)
        })
        .collect();
    // sort_by is stable, so first-occurrence order survives among equal counts
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

/// Up to ten keywords from the body, followed by title keywords the body did not surface.
pub fn keywords(title: &str, text: &str) -> Vec<String> {
    let mut keywords: Vec<String> = ranked_words(text)
        .into_iter()
        .take(MAX_KEYWORDS)
        .map(|(w, _)| w)
        .collect();

    for (word, _) in ranked_words(title).into_iter().take(MAX_KEYWORDS) {
        if !keywords.contains(&word) {
            keywords.push(word);
        }
    }

    keywords
}

/// Sentences split on terminal punctuation followed by whitespace.
fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        current.push(c);
        let at_boundary = matches!(c, '.' | '!' | '?')
            && chars.peek().map_or(true, |next| next.is_whitespace());
        if at_boundary || c == '\n' {
            let sentence = current.trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
            current.clear();
        }
    }
    let tail = current.trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }

    sentences
}

fn position_score(index: usize, total: usize) -> f64 {
    let normalized = (index + 1) as f64 / total as f64;
    match normalized {
        n if n <= 0.1 => 0.17,
        n if n <= 0.2 => 0.23,
        n if n <= 0.3 => 0.14,
        n if n <= 0.4 => 0.08,
        n if n <= 0.5 => 0.05,
        n if n <= 0.6 => 0.04,
        n if n <= 0.7 => 0.06,
        n if n <= 0.8 => 0.04,
        n if n <= 0.9 => 0.04,
        _ => 0.15,
    }
}

fn length_score(words: usize) -> f64 {
    (1.0 - (IDEAL_SENTENCE_WORDS - words as f64).abs() / IDEAL_SENTENCE_WORDS).max(0.0)
}

/// The five highest scoring sentences of `text`, in their original order.
pub fn summarize(title: &str, text: &str) -> String {
    let sentences = split_sentences(text);
    if sentences.is_empty() {
        return String::new();
    }

    let title_words: HashSet<String> = split_words(title).into_iter().filter(|w| is_candidate(w)).collect();
    let top: HashMap<String, usize> = ranked_words(text).into_iter().take(MAX_KEYWORDS).collect();
    let top_total: usize = top.values().sum::<usize>().max(1);

    let mut scored: Vec<(usize, f64)> = sentences
        .iter()
        .enumerate()
        .map(|(i, sentence)| {
            let words = split_words(sentence);
            if words.is_empty() {
                return (i, 0.0);
            }

            let title_score = if title_words.is_empty() {
                0.0
            } else {
                let hits = words.iter().filter(|w| title_words.contains(*w)).count();
                hits as f64 / title_words.len() as f64
            };
            let keyword_score = words
                .iter()
                .filter_map(|w| top.get(w))
                .map(|&c| c as f64 / top_total as f64)
                .sum::<f64>()
                * 10.0
                / words.len() as f64;

            let score = (title_score * 1.5
                + keyword_score * 2.0
                + length_score(words.len()) * 0.5
                + position_score(i, sentences.len()))
                / 4.0;
            (i, score)
        })
        .collect();

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    let mut chosen: Vec<usize> = scored.into_iter().take(SUMMARY_SENTENCES).map(|(i, _)| i).collect();
    chosen.sort_unstable();

    chosen
        .into_iter()
        .map(|i| sentences[i].as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "The river flooded the valley on Monday. \
        Farmers in the valley lost crops to the river. \
        Officials said the flood was the worst in decades. \
        Rain is expected to continue. \
        The valley river authority opened emergency shelters for farmers. \
        Schools were closed. \
        A spokesperson thanked volunteers.";

    #[test]
    fn test_split_words() {
        assert_eq!(split_words("Hello, World! It's 2023."), vec!["hello", "world", "it's", "2023"]);
    }

    #[test]
    fn test_keywords_rank_by_frequency() {
        let keywords = keywords("Flood hits valley", TEXT);
        assert_eq!(&keywords[..3], &["river", "valley", "farmers"]);
        assert!(keywords.contains(&"flood".to_string()));
        assert!(keywords.contains(&"hits".to_string()));
        assert!(!keywords.iter().any(|k| STOPWORDS.contains(k.as_str())));
    }

    #[test]
    fn test_keywords_are_capped_before_title_words() {
        let text = "alpha beta gamma delta epsilon zeta eta theta iota kappa lambda mu";
        let keywords = keywords("omega", text);
        assert_eq!(keywords.len(), MAX_KEYWORDS + 1);
        assert_eq!(keywords.last().map(String::as_str), Some("omega"));
        assert!(!keywords.contains(&"lambda".to_string()));
    }

    #[test]
    fn test_keywords_empty_input() {
        assert!(keywords("", "").is_empty());
        assert!(keywords("The", "a of 12 x").is_empty());
    }

    #[test]
    fn test_split_sentences() {
        let sentences = split_sentences("First one. Second? Third!\nFourth without stop");
        assert_eq!(sentences, vec!["First one.", "Second?", "Third!", "Fourth without stop"]);
        assert_eq!(split_sentences("Version 2.5 is out."), vec!["Version 2.5 is out."]);
    }

    #[test]
    fn test_summarize_keeps_original_order() {
        let summary = summarize("Flood hits valley", TEXT);
        let sentences = split_sentences(&summary);
        assert_eq!(sentences.len(), SUMMARY_SENTENCES);

        let positions: Vec<usize> = sentences
            .iter()
            .map(|s| TEXT.find(s.as_str()).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
        assert!(summary.starts_with("The river flooded the valley on Monday."));
    }

    #[test]
    fn test_summarize_short_text() {
        assert_eq!(summarize("t", ""), "");
        assert_eq!(summarize("t", "Only one sentence here."), "Only one sentence here.");
    }
}
