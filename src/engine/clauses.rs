use std::collections::BTreeMap;

use rayon::prelude::*;

use crate::domain::{ClauseDetectionResult, ClauseExtraction};
use crate::engine::catalog::{ClausePattern, RuleCatalog};
use crate::engine::matcher::TermMatcher;
use crate::utils::sentence_segments;

/// Sample matches / text segments kept per clause type.
pub const MAX_SAMPLES: usize = 3;

const MATCH_WEIGHT: f64 = 0.4;
const MATCH_CAP: f64 = 1.0;
const KEYWORD_WEIGHT: f64 = 0.2;
const KEYWORD_CAP: f64 = 0.6;

/// `min(1, min(matches*0.4, 1) + min(keywords*0.2, 0.6))`
#[must_use]
pub fn clause_confidence(match_count: usize, keyword_count: usize) -> f64 {
    let pattern_score = (match_count as f64 * MATCH_WEIGHT).min(MATCH_CAP);
    let keyword_score = (keyword_count as f64 * KEYWORD_WEIGHT).min(KEYWORD_CAP);
    (pattern_score + keyword_score).min(1.0)
}

#[derive(Debug, Clone, Copy)]
pub struct ClauseDetector<'c> {
    catalog: &'c RuleCatalog,
}

impl<'c> ClauseDetector<'c> {
    #[must_use]
    pub fn new(catalog: &'c RuleCatalog) -> Self {
        Self { catalog }
    }

    /// Detect every catalog clause type. Clause types are scanned in
    /// parallel and collected by name, so the result does not depend on
    /// scheduling.
    #[must_use]
    pub fn detect(&self, text: &str) -> BTreeMap<String, ClauseDetectionResult> {
        self.detect_with(&TermMatcher::new(text))
    }

    pub(crate) fn detect_with(
        &self,
        matcher: &TermMatcher<'_>,
    ) -> BTreeMap<String, ClauseDetectionResult> {
        self.catalog
            .clause_patterns()
            .par_iter()
            .map(|clause| (clause.clause_type().to_string(), detect_clause(matcher, clause)))
            .collect()
    }

    /// Sentence-level extraction for the requested clause types. Unknown
    /// types come back as not found.
    #[must_use]
    pub fn extract<S: AsRef<str>>(
        &self,
        text: &str,
        clause_types: &[S],
    ) -> BTreeMap<String, ClauseExtraction> {
        let segments: Vec<&str> = sentence_segments(text).collect();
        clause_types
            .iter()
            .map(|name| {
                let name = name.as_ref();
                let extraction = match self.catalog.clause_pattern(name) {
                    Some(clause) => extract_clause(&segments, clause),
                    None => {
                        tracing::warn!(
                            clause_type = name,
                            "unknown clause type requested, skipping"
                        );
                        ClauseExtraction::not_found()
                    }
                };
                (name.to_string(), extraction)
            })
            .collect()
    }
}

/// Samples are capped at [`MAX_SAMPLES`]; confidence uses the uncapped
/// match total.
#[must_use]
pub fn detect_clause(matcher: &TermMatcher<'_>, clause: &ClausePattern) -> ClauseDetectionResult {
    let mut matches = Vec::with_capacity(MAX_SAMPLES);
    let mut match_count = 0usize;

    for pattern in clause.patterns() {
        for m in pattern.as_regex().find_iter(matcher.text()) {
            match_count += 1;
            if matches.len() < MAX_SAMPLES {
                matches.push(matcher.hit(m.start(), m.end()));
            }
        }
    }

    let keywords_found = matcher.matching_terms(clause.keywords());

    tracing::debug!(
        clause_type = clause.clause_type(),
        match_count,
        keywords = keywords_found.len(),
        "clause scanned"
    );

    if match_count == 0 && keywords_found.is_empty() {
        return ClauseDetectionResult::not_found();
    }

    ClauseDetectionResult {
        found: true,
        confidence: clause_confidence(match_count, keywords_found.len()),
        matches,
        keywords_found,
    }
}

fn extract_clause(segments: &[&str], clause: &ClausePattern) -> ClauseExtraction {
    let qualifying: Vec<&str> = segments
        .iter()
        .copied()
        .filter(|segment| clause.patterns().iter().any(|p| p.is_match(segment)))
        .collect();

    ClauseExtraction {
        found: !qualifying.is_empty(),
        count: qualifying.len(),
        text_segments: qualifying
            .into_iter()
            .take(MAX_SAMPLES)
            .map(str::to_string)
            .collect(),
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    fn detector() -> ClauseDetector<'static> {
        ClauseDetector::new(RuleCatalog::builtin())
    }

    #[test]
    fn test_confidence_formula() {
        assert_eq!(clause_confidence(0, 0), 0.0);
        assert!((clause_confidence(1, 0) - 0.4).abs() < 1e-9);
        assert!((clause_confidence(0, 5) - 0.6).abs() < 1e-9);
        assert_eq!(clause_confidence(3, 0), 1.0);
        assert_eq!(clause_confidence(2, 2), 1.0);
    }

    #[test]
    fn test_empty_text_nothing_found() {
        let detected = detector().detect("");
        assert_eq!(detected.len(), 7);
        assert!(detected.values().all(|r| !r.found && r.confidence == 0.0));
    }

    #[test]
    fn test_samples_capped_but_confidence_uncapped() {
        let text = "Damages. Damages. Damages. Damages. Damages.";
        let liability = &detector().detect(text)["liability"];
        assert!(liability.found);
        assert_eq!(liability.matches.len(), MAX_SAMPLES);
        assert_eq!(liability.keywords_found, vec!["damages"]);
        // five matches saturate the pattern score; one keyword adds 0.2
        assert_eq!(liability.confidence, 1.0);
    }

    #[test]
    fn test_keyword_only_detection() {
        // "cost" is a payment keyword but matches no payment pattern
        let payment = &detector().detect("The cost is shared.")["payment"];
        assert!(payment.found);
        assert!(payment.matches.is_empty());
        assert_eq!(payment.keywords_found, vec!["cost"]);
        assert!((payment.confidence - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_match_carries_context_and_position() {
        let text = "Fees are due within 30 days. Total $1,250.00 per invoice.";
        let payment = &detector().detect(text)["payment"];
        let first = &payment.matches[0];
        // invoice pattern is listed before the amount pattern
        assert_eq!(first.matched, "invoice");
        assert_eq!(first.context, text);
        assert_eq!(payment.matches[1].matched, "$1,250.00");
    }

    #[test]
    fn test_extract_sentences() {
        let text = "Either party may terminate this Agreement. Payment terms are net 30. \
                    The Agreement expires in 2030. Termination requires notice. Notices go by mail.";
        let extracted = detector().extract(text, &["termination"]);
        let termination = &extracted["termination"];
        assert!(termination.found);
        assert_eq!(termination.count, 3);
        assert_eq!(
            termination.text_segments,
            vec![
                "Either party may terminate this Agreement",
                "The Agreement expires in 2030",
                "Termination requires notice"
            ]
        );
    }

    #[test]
    fn test_extract_caps_segments_keeps_count() {
        let text = "Arbitration. Mediation. Jurisdiction. Governing law.";
        let extracted = detector().extract(text, &["dispute_resolution"]);
        assert_eq!(extracted["dispute_resolution"].count, 4);
        assert_eq!(extracted["dispute_resolution"].text_segments.len(), 3);
    }

    #[test]
    fn test_extract_unknown_type() {
        let extracted = detector().extract("Anything at all.", &["unknown_type"]);
        assert_eq!(extracted["unknown_type"], ClauseExtraction::not_found());
    }
}
