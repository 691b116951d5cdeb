use grep_matcher::Matcher;
use grep_regex::{RegexMatcher, RegexMatcherBuilder};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Invalid filter pattern: {0}")]
    InvalidPattern(String),
}

/// Regex inclusion filter over container display names.
///
/// Matching is case-sensitive and unanchored: the pattern may hit
/// anywhere in the name.
#[derive(Debug)]
pub struct NameFilter {
    matcher: RegexMatcher,
}

impl NameFilter {
    pub fn new(pattern: &str) -> Result<Self, FilterError> {
        let matcher = RegexMatcherBuilder::new()
            .case_insensitive(false)
            .multi_line(false)
            .build(pattern)
            .map_err(|e| FilterError::InvalidPattern(e.to_string()))?;

        Ok(Self { matcher })
    }

    #[inline]
    pub fn matches(&self, name: &str) -> bool {
        self.matcher.is_match(name.as_bytes()).unwrap_or(false)
    }
}
