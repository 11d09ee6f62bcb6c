mod catalog;
mod clauses;
mod compliance;
mod insights;
mod matcher;
mod risk;
mod rules;

pub use catalog::{ClausePattern, RegulationRule, RiskBucket, RuleCatalog};
pub use clauses::{clause_confidence, detect_clause, ClauseDetector, MAX_SAMPLES};
pub use compliance::{evaluate_regulation, ComplianceScorer};
pub use insights::{
    compliance_categories, compliance_notes, detect_document_type, document_insights,
    extract_entities, find_risk_indicators, keyword_risk_level, NO_COMPLIANCE_KEYWORDS,
};
pub use matcher::{
    contains_term, count_matching_terms, find_all, matching_terms, TermMatcher, TermPattern,
};
pub use risk::RiskScorer;

pub(crate) use insights::insights_with;
