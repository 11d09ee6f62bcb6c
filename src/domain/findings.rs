use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::level::{RiskLevel, RiskTier};

/// One pattern occurrence inside the analysed text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchHit {
    #[serde(rename = "match")]
    pub matched: String,
    pub context: String,
    /// Character (not byte) offset of the match start.
    pub position: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegulationResult {
    pub regulation: String,
    pub score: f64,
    pub found_requirements: Vec<String>,
    pub missing_requirements: Vec<String>,
    pub prohibited_found: Vec<String>,
    pub risk_factors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceReport {
    pub overall_score: f64,
    pub regulations: BTreeMap<String, RegulationResult>,
    pub missing_requirements: Vec<String>,
    pub risk_factors: Vec<String>,
    pub recommendations: Vec<String>,
}

impl ComplianceReport {
    #[must_use]
    pub fn regulation(&self, name: &str) -> Option<&RegulationResult> {
        self.regulations.get(name)
    }
}

/// Matched risk terms per weighted bucket, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFactors {
    pub high_risk: Vec<String>,
    pub medium_risk: Vec<String>,
    pub low_risk: Vec<String>,
}

impl RiskFactors {
    #[must_use]
    pub fn get(&self, tier: RiskTier) -> &[String] {
        match tier {
            RiskTier::HighRisk => &self.high_risk,
            RiskTier::MediumRisk => &self.medium_risk,
            RiskTier::LowRisk => &self.low_risk,
        }
    }

    pub(crate) fn get_mut(&mut self, tier: RiskTier) -> &mut Vec<String> {
        match tier {
            RiskTier::HighRisk => &mut self.high_risk,
            RiskTier::MediumRisk => &mut self.medium_risk,
            RiskTier::LowRisk => &mut self.low_risk,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.high_risk.len() + self.medium_risk.len() + self.low_risk.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub overall_score: u32,
    pub risk_level: RiskLevel,
    pub weighted_total: u32,
    pub factors_found: RiskFactors,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClauseDetectionResult {
    pub found: bool,
    pub matches: Vec<MatchHit>,
    pub keywords_found: Vec<String>,
    pub confidence: f64,
}

impl ClauseDetectionResult {
    #[must_use]
    pub fn not_found() -> Self {
        Self {
            found: false,
            matches: Vec::new(),
            keywords_found: Vec::new(),
            confidence: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClauseExtraction {
    pub found: bool,
    pub text_segments: Vec<String>,
    pub count: usize,
}

impl ClauseExtraction {
    #[must_use]
    pub fn not_found() -> Self {
        Self {
            found: false,
            text_segments: Vec::new(),
            count: 0,
        }
    }
}

/// A compliance area and the keywords of it that the text mentions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryHits {
    pub category: String,
    pub keywords: Vec<String>,
}

impl fmt::Display for CategoryHits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "**{}:** Found references to {}",
            self.category,
            self.keywords.join(", ")
        )
    }
}

/// Coarse level from the count of distinct generic risk keywords.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRisk {
    pub level: RiskLevel,
    pub keywords: Vec<String>,
}

impl KeywordRisk {
    #[must_use]
    pub fn summary(&self) -> String {
        let detail = match self.level {
            RiskLevel::High => "Multiple risk-related terms detected",
            RiskLevel::Medium => "Some risk-related terms found",
            RiskLevel::Low => "Few risk indicators detected",
        };
        format!("{} - {detail}", self.level)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentInsights {
    pub word_count: usize,
    pub document_type: String,
    pub entities: Vec<String>,
    pub risk_indicators: Vec<String>,
    /// Only categories with at least one hit, in fixed category order.
    pub compliance_categories: Vec<CategoryHits>,
    pub keyword_risk: KeywordRisk,
}
