use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{
    ClauseDetectionResult, ClauseExtraction, ComplianceReport, DocumentInsights, RiskAssessment,
    RiskLevel,
};

/// Everything the rule engine says about one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentReport {
    pub compliance: ComplianceReport,
    pub risk: RiskAssessment,
    pub clauses: BTreeMap<String, ClauseDetectionResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extracted_clauses: Option<BTreeMap<String, ClauseExtraction>>,
    pub insights: DocumentInsights,
    /// Carried through for downstream NLP collaborators; never interpreted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
}

impl DocumentReport {
    pub fn found_clause_types(&self) -> impl Iterator<Item = &str> {
        self.clauses
            .iter()
            .filter(|(_, result)| result.found)
            .map(|(name, _)| name.as_str())
    }

    /// Compliance and risk recommendations, in that order.
    pub fn recommendations(&self) -> impl Iterator<Item = &str> {
        self.compliance
            .recommendations
            .iter()
            .chain(&self.risk.recommendations)
            .map(String::as_str)
    }

    /// HIGH risk, or a compliance score under `fail_below` when one is set.
    #[must_use]
    pub fn needs_attention(&self, fail_below: Option<f64>) -> bool {
        self.risk.risk_level == RiskLevel::High
            || fail_below.is_some_and(|threshold| self.compliance.overall_score < threshold)
    }
}
