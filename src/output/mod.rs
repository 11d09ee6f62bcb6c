mod formatter;
mod recommendations;
mod report;

pub use formatter::{format_catalog, format_extraction, format_report, OutputFormat};
pub use recommendations::{
    compliance_recommendations, risk_recommendations, COMPLIANCE_THRESHOLD, GOOD_COMPLIANCE,
    HIGH_RISK_ATTENTION, NEEDS_IMPROVEMENT, REVIEW_RISK_FACTORS,
};
pub use report::DocumentReport;
