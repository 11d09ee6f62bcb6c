use regex::{Regex, RegexBuilder};
use serde::{Serialize, Serializer};

use crate::domain::MatchHit;
use crate::utils::{char_offset, context_window, CONTEXT_RADIUS};

/// A case-insensitive search pattern, either a plain phrase or a regex.
#[derive(Debug, Clone)]
pub struct TermPattern {
    source: String,
    regex: Regex,
}

impl TermPattern {
    /// Compile a regex pattern (alternation, classes, repetition) with
    /// case-insensitive matching.
    pub fn regex(source: &str) -> Result<Self, regex::Error> {
        let regex = RegexBuilder::new(source).case_insensitive(true).build()?;
        Ok(Self {
            source: source.to_string(),
            regex,
        })
    }

    /// Match `term` literally, ignoring case.
    pub fn literal(term: &str) -> Result<Self, regex::Error> {
        let regex = RegexBuilder::new(&regex::escape(term))
            .case_insensitive(true)
            .build()?;
        Ok(Self {
            source: term.to_string(),
            regex,
        })
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn is_match(&self, haystack: &str) -> bool {
        self.regex.is_match(haystack)
    }

    pub(crate) fn as_regex(&self) -> &Regex {
        &self.regex
    }
}

impl Serialize for TermPattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.source)
    }
}

/// Term and pattern lookups over a single document.
///
/// The lowercase copy of the text is built once so repeated term checks
/// across a whole catalog do not re-lowercase the document.
#[derive(Debug, Clone)]
pub struct TermMatcher<'t> {
    text: &'t str,
    lowered: String,
}

impl<'t> TermMatcher<'t> {
    #[must_use]
    pub fn new(text: &'t str) -> Self {
        Self {
            text,
            lowered: text.to_lowercase(),
        }
    }

    #[must_use]
    pub fn text(&self) -> &'t str {
        self.text
    }

    pub(crate) fn lowered(&self) -> &str {
        &self.lowered
    }

    #[must_use]
    pub fn contains_term(&self, term: &str) -> bool {
        self.lowered.contains(&term.to_lowercase())
    }

    /// Every non-overlapping occurrence of `pattern`, left to right.
    #[must_use]
    pub fn find_all(&self, pattern: &TermPattern) -> Vec<MatchHit> {
        pattern
            .as_regex()
            .find_iter(self.text)
            .map(|m| self.hit(m.start(), m.end()))
            .collect()
    }

    /// Number of occurrences `find_all` would return, without building hits.
    #[must_use]
    pub fn count_matches(&self, pattern: &TermPattern) -> usize {
        pattern.as_regex().find_iter(self.text).count()
    }

    /// Terms present in the text, in the order given (not first-seen order).
    #[must_use]
    pub fn matching_terms<S: AsRef<str>>(&self, terms: &[S]) -> Vec<String> {
        terms
            .iter()
            .map(AsRef::as_ref)
            .filter(|term| self.contains_term(term))
            .map(str::to_string)
            .collect()
    }

    #[must_use]
    pub fn count_matching_terms<S: AsRef<str>>(&self, terms: &[S]) -> usize {
        terms
            .iter()
            .filter(|term| self.contains_term(term.as_ref()))
            .count()
    }

    pub(crate) fn hit(&self, start: usize, end: usize) -> MatchHit {
        MatchHit {
            matched: self.text[start..end].to_string(),
            context: context_window(self.text, start, end, CONTEXT_RADIUS).to_string(),
            position: char_offset(self.text, start),
        }
    }
}

#[must_use]
pub fn contains_term(text: &str, term: &str) -> bool {
    TermMatcher::new(text).contains_term(term)
}

#[must_use]
pub fn find_all(text: &str, pattern: &TermPattern) -> Vec<MatchHit> {
    TermMatcher::new(text).find_all(pattern)
}

#[must_use]
pub fn matching_terms<S: AsRef<str>>(text: &str, terms: &[S]) -> Vec<String> {
    TermMatcher::new(text).matching_terms(terms)
}

#[must_use]
pub fn count_matching_terms<S: AsRef<str>>(text: &str, terms: &[S]) -> usize {
    TermMatcher::new(text).count_matching_terms(terms)
}
