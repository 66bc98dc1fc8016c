//! Ordered text matchers
//!
//! Both the location extractor and the intent router walk a list of matchers
//! in priority order and stop at the first hit, so the order of a list is
//! part of its meaning.

use regex::{Regex, RegexBuilder};

/// Something that can recognise a piece of text and optionally capture part of it.
pub trait Matcher: Send + Sync {
    /// Returns the captured slice of `text` on a match.
    fn try_match<'t>(&self, text: &'t str) -> Option<&'t str>;

    fn is_match(&self, text: &str) -> bool {
        self.try_match(text).is_some()
    }
}

/// Matches when any keyword occurs as a substring.
///
/// Keywords are lower-case; callers pass lower-cased text.
#[derive(Debug, Clone, Copy)]
pub struct KeywordMatcher {
    keywords: &'static [&'static str],
}

impl KeywordMatcher {
    #[must_use]
    pub const fn new(keywords: &'static [&'static str]) -> Self {
        Self { keywords }
    }
}

impl Matcher for KeywordMatcher {
    fn try_match<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.keywords.iter().find_map(|keyword| {
            text.find(keyword)
                .map(|start| &text[start..start + keyword.len()])
        })
    }
}

/// Case-insensitive regular expression; captures group 1 when the pattern has one.
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    regex: Regex,
}

impl PatternMatcher {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        let regex = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        Ok(Self { regex })
    }
}

impl Matcher for PatternMatcher {
    fn try_match<'t>(&self, text: &'t str) -> Option<&'t str> {
        let captures = self.regex.captures(text)?;
        captures
            .get(1)
            .or_else(|| captures.get(0))
            .map(|m| m.as_str())
    }
}
