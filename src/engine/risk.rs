use crate::domain::{RiskAssessment, RiskFactors, RiskLevel};
use crate::engine::catalog::RuleCatalog;
use crate::engine::matcher::TermMatcher;
use crate::output::risk_recommendations;

/// Each weighted point is worth this many score points, capped at 100.
const SCORE_SCALE: u32 = 5;
const MAX_SCORE: u32 = 100;

/// Weighted risk-vocabulary scoring.
#[derive(Debug, Clone, Copy)]
pub struct RiskScorer<'c> {
    catalog: &'c RuleCatalog,
}

impl<'c> RiskScorer<'c> {
    #[must_use]
    pub fn new(catalog: &'c RuleCatalog) -> Self {
        Self { catalog }
    }

    #[must_use]
    pub fn score(&self, text: &str) -> RiskAssessment {
        self.score_with(&TermMatcher::new(text))
    }

    pub(crate) fn score_with(&self, matcher: &TermMatcher<'_>) -> RiskAssessment {
        let mut factors_found = RiskFactors::default();
        let mut weighted_total = 0u32;

        for bucket in self.catalog.risk_buckets() {
            let found = matcher.matching_terms(bucket.terms());
            weighted_total += bucket.weight() * found.len() as u32;
            factors_found.get_mut(bucket.tier()).extend(found);
        }

        let risk_level = RiskLevel::from_weighted_total(weighted_total);
        let overall_score = (weighted_total * SCORE_SCALE).min(MAX_SCORE);
        let recommendations = risk_recommendations(risk_level, !factors_found.high_risk.is_empty());

        tracing::debug!(
            weighted_total,
            overall_score,
            level = %risk_level,
            "risk scored"
        );

        RiskAssessment {
            overall_score,
            risk_level,
            weighted_total,
            factors_found,
            recommendations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(text: &str) -> RiskAssessment {
        RiskScorer::new(RuleCatalog::builtin()).score(text)
    }

    #[test]
    fn test_two_high_risk_terms_is_low() {
        let risk = score("Supplier accepts unlimited liability and gives a personal guarantee.");
        assert_eq!(
            risk.factors_found.high_risk,
            vec!["unlimited liability", "personal guarantee"]
        );
        assert_eq!(risk.weighted_total, 6);
        assert_eq!(risk.risk_level, RiskLevel::Low);
        assert_eq!(risk.overall_score, 30);
    }

    #[test]
    fn test_medium_threshold() {
        // 3 + 3 + 2 = 8
        let risk = score("Automatic renewal, a non-compete and mandatory indemnification.");
        assert_eq!(risk.weighted_total, 8);
        assert_eq!(risk.risk_level, RiskLevel::Medium);
        assert_eq!(risk.overall_score, 40);
    }

    #[test]
    fn test_high_level_and_score_cap() {
        let text = "unlimited liability, personal guarantee, liquidated damages, \
                    automatic renewal, non-compete, exclusive dealing, penalty clause, forfeiture";
        let risk = score(text);
        assert_eq!(risk.weighted_total, 24);
        assert_eq!(risk.risk_level, RiskLevel::High);
        assert_eq!(risk.overall_score, 100);
    }

    #[test]
    fn test_empty_text_is_low() {
        let risk = score("");
        assert_eq!(risk.weighted_total, 0);
        assert_eq!(risk.overall_score, 0);
        assert_eq!(risk.risk_level, RiskLevel::Low);
        assert_eq!(risk.factors_found.total(), 0);
        assert_eq!(risk.recommendations.len(), 2);
    }

    #[test]
    fn test_high_risk_term_adds_attention_line() {
        let risk = score("Any forfeiture of deposit is final.");
        assert_eq!(risk.recommendations.len(), 3);
    }

    #[test]
    fn test_terms_match_case_insensitively() {
        let risk = score("GOOD FAITH and Best Efforts apply.");
        assert_eq!(risk.factors_found.low_risk, vec!["good faith", "best efforts"]);
        assert_eq!(risk.weighted_total, 2);
    }
}
