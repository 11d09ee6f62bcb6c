mod findings;
mod level;

pub use findings::{
    CategoryHits, ClauseDetectionResult, ClauseExtraction, ComplianceReport, DocumentInsights,
    KeywordRisk, MatchHit, RegulationResult, RiskAssessment, RiskFactors,
};
pub use level::{RiskLevel, RiskTier};
