//! Place-name extraction from free text

use std::sync::LazyLock;

use tracing::debug;

use super::matcher::{Matcher, PatternMatcher};

/// Words never kept as part of a place name: filler, time words, modals and question words.
pub const STOP_WORDS: &[&str] = &[
    "the", "there", "here", "this", "that", "these", "those", "outside", "inside", "general",
    "currently", "presently", "such", "going", "like", "have", "has", "today", "tomorrow",
    "yesterday", "morning", "afternoon", "evening", "night", "now", "later", "current",
    "present", "soon", "moment", "future", "past", "should", "would", "could", "can", "may",
    "might", "must", "shall", "will", "who", "what", "when", "where", "why", "how",
];

/// Most specific first. The bare preposition pattern must stay last.
const LOCATION_PATTERNS: &[&str] = &[
    r"weather\s+in\s+([A-Za-z]+(?:\s+[A-Za-z]+)*)",
    r"what(?:'s|\s+is)\s+(?:the\s+)?weather\s+in\s+([A-Za-z]+(?:\s+[A-Za-z]+)*)",
    r"how\s+is\s+(?:the\s+)?weather\s+in\s+([A-Za-z]+(?:\s+[A-Za-z]+)*)",
    r"([A-Za-z]+(?:\s+[A-Za-z]+)*)\s+weather",
    r"(?:travel|drive|driving|commute)\s+(?:to|in|through|around|near)\s+([A-Za-z]+(?:\s+[A-Za-z]+)*)",
    r"(?:safe|safety|conditions)\s+(?:to|in|for)\s+(?:travel|drive|commute|go)\s+(?:to|in|through|around|near)\s+([A-Za-z]+(?:\s+[A-Za-z]+)*)",
    r"(?:safe|safety|conditions)\s+(?:in|for|of|at)\s+([A-Za-z]+(?:\s+[A-Za-z]+)*)",
    r"(?:road|route|traffic|highway)\s+(?:condition|status)\s+(?:in|to|near|around)\s+([A-Za-z]+(?:\s+[A-Za-z]+)*)",
    r"(?:in|at|to|from|near)\s+([A-Za-z]+(?:\s+[A-Za-z]+)*)",
];

static LOCATION_MATCHERS: LazyLock<Vec<PatternMatcher>> = LazyLock::new(|| {
    LOCATION_PATTERNS
        .iter()
        .map(|pattern| PatternMatcher::new(pattern).expect("location patterns are valid"))
        .collect()
});

fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word.to_lowercase().as_str())
}

/// Best-guess place name mentioned in `text`, in its original casing.
#[must_use]
pub fn extract(text: &str) -> Option<String> {
    extract_with(&LOCATION_MATCHERS, text)
}

/// Runs `matchers` in order; the first one whose capture survives stop-word
/// filtering wins.
pub fn extract_with<M: Matcher>(matchers: &[M], text: &str) -> Option<String> {
    for matcher in matchers {
        let Some(raw) = matcher.try_match(text) else {
            continue;
        };
        let raw = raw.trim();
        if is_stop_word(raw) {
            continue;
        }

        let words: Vec<&str> = raw
            .split_whitespace()
            .filter(|word| !is_stop_word(word))
            .collect();
        if words.is_empty() {
            continue;
        }

        let location = words.join(" ");
        debug!("Extracted location '{}' from '{}'", location, text);
        return Some(location);
    }
    None
}
