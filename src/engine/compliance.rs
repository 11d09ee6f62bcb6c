use std::collections::BTreeMap;

use crate::domain::{ComplianceReport, RegulationResult};
use crate::engine::catalog::{RegulationRule, RuleCatalog};
use crate::engine::matcher::TermMatcher;
use crate::output::compliance_recommendations;

const PROHIBITED_PENALTY: f64 = 0.2;
const RISK_PENALTY: f64 = 0.1;

/// Scores a document against the regulations of a catalog.
#[derive(Debug, Clone, Copy)]
pub struct ComplianceScorer<'c> {
    catalog: &'c RuleCatalog,
}

impl<'c> ComplianceScorer<'c> {
    #[must_use]
    pub fn new(catalog: &'c RuleCatalog) -> Self {
        Self { catalog }
    }

    /// Evaluate every catalog regulation, in catalog order.
    #[must_use]
    pub fn evaluate(&self, text: &str) -> ComplianceReport {
        self.evaluate_with::<&str>(&TermMatcher::new(text), None)
    }

    /// Evaluate only the named regulations. Unknown names are skipped.
    #[must_use]
    pub fn evaluate_only<S: AsRef<str>>(
        &self,
        text: &str,
        regulations: &[S],
    ) -> ComplianceReport {
        self.evaluate_with(&TermMatcher::new(text), Some(regulations))
    }

    pub(crate) fn evaluate_with<S: AsRef<str>>(
        &self,
        matcher: &TermMatcher<'_>,
        regulations: Option<&[S]>,
    ) -> ComplianceReport {
        let selected: Vec<&RegulationRule> = match regulations {
            None => self.catalog.regulation_rules().iter().collect(),
            Some(names) => names
                .iter()
                .filter_map(|name| {
                    let name = name.as_ref();
                    let rule = self.catalog.regulation(name);
                    if rule.is_none() {
                        tracing::warn!(
                            regulation = name,
                            "unknown regulation requested, skipping"
                        );
                    }
                    rule
                })
                .collect(),
        };

        let mut by_name = BTreeMap::new();
        let mut missing_requirements = Vec::new();
        let mut risk_factors = Vec::new();
        let mut total_score = 0.0;
        let mut evaluated = 0usize;

        for rule in selected {
            let result = evaluate_regulation(matcher, rule);
            total_score += result.score;
            evaluated += 1;
            missing_requirements.extend(result.missing_requirements.iter().cloned());
            risk_factors.extend(result.risk_factors.iter().cloned());
            by_name.insert(result.regulation.clone(), result);
        }

        let overall_score = if evaluated > 0 {
            total_score / evaluated as f64
        } else {
            0.0
        };

        let recommendations =
            compliance_recommendations(overall_score, &missing_requirements, &risk_factors);

        ComplianceReport {
            overall_score,
            regulations: by_name,
            missing_requirements,
            risk_factors,
            recommendations,
        }
    }
}

/// Score one regulation:
/// `max(0, (found/required - prohibited*0.2 - risk*0.1) * 100)`, or 100 when
/// the regulation has no required terms.
#[must_use]
pub fn evaluate_regulation(matcher: &TermMatcher<'_>, rule: &RegulationRule) -> RegulationResult {
    let (found_requirements, missing_requirements): (Vec<String>, Vec<String>) = rule
        .required()
        .iter()
        .cloned()
        .partition(|term| matcher.contains_term(term));
    let prohibited_found = matcher.matching_terms(rule.prohibited());
    let risk_factors = matcher.matching_terms(rule.risk_indicators());

    let score = if rule.required().is_empty() {
        100.0
    } else {
        let ratio = found_requirements.len() as f64 / rule.required().len() as f64;
        let penalty = prohibited_found.len() as f64 * PROHIBITED_PENALTY;
        let risk_penalty = risk_factors.len() as f64 * RISK_PENALTY;
        ((ratio - penalty - risk_penalty) * 100.0).max(0.0)
    };

    tracing::debug!(
        regulation = rule.name(),
        score,
        found = found_requirements.len(),
        prohibited = prohibited_found.len(),
        risk = risk_factors.len(),
        "regulation evaluated"
    );

    RegulationResult {
        regulation: rule.name().to_string(),
        score,
        found_requirements,
        missing_requirements,
        prohibited_found,
        risk_factors,
    }
}
