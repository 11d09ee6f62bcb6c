use crate::domain::RiskLevel;

/// Overall compliance scores below this ask for significant improvements.
pub const COMPLIANCE_THRESHOLD: f64 = 70.0;

const MISSING_LISTED: usize = 3;

pub const NEEDS_IMPROVEMENT: &str = "Document requires significant compliance improvements";
pub const REVIEW_RISK_FACTORS: &str = "Review and address identified risk factors";
pub const GOOD_COMPLIANCE: &str = "Document shows good compliance. Consider periodic review.";
pub const HIGH_RISK_ATTENTION: &str = "Pay special attention to high-risk clauses identified";

fn level_guidance(level: RiskLevel) -> [&'static str; 2] {
    match level {
        RiskLevel::High => [
            "High-risk document requires legal review before execution",
            "Consider negotiating terms to reduce liability exposure",
        ],
        RiskLevel::Medium => [
            "Medium-risk document should be reviewed by legal counsel",
            "Ensure adequate insurance coverage for identified risks",
        ],
        RiskLevel::Low => [
            "Low-risk document with standard terms",
            "Periodic review recommended for ongoing compliance",
        ],
    }
}

/// Guidance for a compliance report. `missing` is the concatenation of
/// every evaluated regulation's missing terms; the first three are named.
#[must_use]
pub fn compliance_recommendations(
    overall_score: f64,
    missing: &[String],
    risk_factors: &[String],
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if overall_score < COMPLIANCE_THRESHOLD {
        recommendations.push(NEEDS_IMPROVEMENT.to_string());
    }

    if !missing.is_empty() {
        let listed: Vec<&str> = missing
            .iter()
            .take(MISSING_LISTED)
            .map(String::as_str)
            .collect();
        recommendations.push(format!(
            "Add missing compliance requirements: {}",
            listed.join(", ")
        ));
    }

    if !risk_factors.is_empty() {
        recommendations.push(REVIEW_RISK_FACTORS.to_string());
    }

    if recommendations.is_empty() {
        recommendations.push(GOOD_COMPLIANCE.to_string());
    }

    recommendations
}

#[must_use]
pub fn risk_recommendations(level: RiskLevel, has_high_risk_terms: bool) -> Vec<String> {
    let mut recommendations: Vec<String> = level_guidance(level)
        .iter()
        .map(|s| (*s).to_string())
        .collect();

    if has_high_risk_terms {
        recommendations.push(HIGH_RISK_ATTENTION.to_string());
    }

    recommendations
}
