pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod output;
pub mod utils;

use serde::{Deserialize, Serialize};

pub use config::ClausewiseConfig;
pub use domain::{
    CategoryHits, ClauseDetectionResult, ClauseExtraction, ComplianceReport, DocumentInsights,
    KeywordRisk, MatchHit, RegulationResult, RiskAssessment, RiskFactors, RiskLevel, RiskTier,
};
pub use engine::{ClauseDetector, ComplianceScorer, RiskScorer, RuleCatalog, TermMatcher};
pub use error::{ClausewiseError, Result as ClausewiseResult};
pub use output::{DocumentReport, OutputFormat};

/// What to evaluate beyond the always-on risk, clause and insight passes.
#[derive(Debug, Clone, Default)]
pub struct AnalysisOptions {
    /// Regulations to score. `None` means every catalog regulation; an
    /// empty list scores none.
    pub regulations: Option<Vec<String>>,
    /// Clause types to extract sentence by sentence. Empty skips extraction.
    pub clause_types: Vec<String>,
    pub question: Option<String>,
}

/// Analysis input as it arrives over a serialization boundary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisRequest {
    pub text: Option<String>,
    pub regulations: Option<Vec<String>>,
    pub clause_types: Option<Vec<String>>,
    pub question: Option<String>,
}

impl AnalysisRequest {
    /// Parse a JSON request body.
    ///
    /// # Errors
    /// [`ClausewiseError::Validation`] when a field has the wrong shape
    /// (e.g. a numeric `text`), [`ClausewiseError::Json`] when the body is not
    /// JSON at all.
    pub fn from_json(body: &str) -> ClausewiseResult<Self> {
        serde_json::from_str(body).map_err(|e| match e.classify() {
            serde_json::error::Category::Data => ClausewiseError::Validation(e.to_string()),
            _ => ClausewiseError::Json(e),
        })
    }

    fn options(&self) -> AnalysisOptions {
        AnalysisOptions {
            regulations: self.regulations.clone(),
            clause_types: self.clause_types.clone().unwrap_or_default(),
            question: self.question.clone(),
        }
    }
}

/// Runs every scorer against one document over a shared catalog.
#[derive(Debug, Clone, Copy)]
pub struct Analyzer<'c> {
    catalog: &'c RuleCatalog,
}

impl<'c> Analyzer<'c> {
    #[must_use]
    pub fn new(catalog: &'c RuleCatalog) -> Self {
        Self { catalog }
    }

    #[must_use]
    pub fn catalog(&self) -> &'c RuleCatalog {
        self.catalog
    }

    /// The text is lowercased once and shared by every pass.
    #[must_use]
    pub fn analyze(&self, text: &str, options: &AnalysisOptions) -> DocumentReport {
        let matcher = TermMatcher::new(text);

        let compliance = ComplianceScorer::new(self.catalog)
            .evaluate_with(&matcher, options.regulations.as_deref());
        let risk = RiskScorer::new(self.catalog).score_with(&matcher);

        let detector = ClauseDetector::new(self.catalog);
        let clauses = detector.detect_with(&matcher);
        let extracted_clauses = (!options.clause_types.is_empty())
            .then(|| detector.extract(text, &options.clause_types));

        let insights = engine::insights_with(&matcher);

        tracing::debug!(
            overall_score = compliance.overall_score,
            risk_level = %risk.risk_level,
            words = insights.word_count,
            "document analysed"
        );

        DocumentReport {
            compliance,
            risk,
            clauses,
            extracted_clauses,
            insights,
            question: options.question.clone(),
        }
    }

    /// Validate and analyse a deserialized request.
    ///
    /// # Errors
    /// [`ClausewiseError::Validation`] when the request carries no text.
    pub fn analyze_request(&self, request: &AnalysisRequest) -> ClausewiseResult<DocumentReport> {
        let text = request
            .text
            .as_deref()
            .ok_or_else(|| ClausewiseError::Validation("request has no text".to_string()))?;
        Ok(self.analyze(text, &request.options()))
    }
}

/// Analyse text against the built-in catalog with default options.
///
/// # Example
/// ```
/// use clausewise::{analyze, RiskLevel};
///
/// let report = analyze("The processor handles personal data with consent.");
/// assert_eq!(report.risk.risk_level, RiskLevel::Low);
/// assert!(report.compliance.regulation("GDPR").is_some());
/// ```
#[must_use]
pub fn analyze(text: &str) -> DocumentReport {
    Analyzer::new(RuleCatalog::builtin()).analyze(text, &AnalysisOptions::default())
}

/// Analyse text with a loaded configuration: its catalog extensions and its
/// `[analysis]` defaults. An empty configured regulation list means all.
///
/// # Example
/// ```
/// use clausewise::{analyze_with_config, ClausewiseConfig};
/// # fn main() -> clausewise::ClausewiseResult<()> {
/// let config = ClausewiseConfig::from_toml("[analysis]\nregulations = [\"HIPAA\"]\n")?;
/// let report = analyze_with_config("Protected health information (PHI).", &config)?;
/// assert_eq!(report.compliance.regulations.len(), 1);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
/// Fails when the configured catalog does not compile.
pub fn analyze_with_config(
    text: &str,
    config: &ClausewiseConfig,
) -> ClausewiseResult<DocumentReport> {
    let catalog = config.build_catalog()?;
    let options = AnalysisOptions {
        regulations: (!config.analysis.regulations.is_empty())
            .then(|| config.analysis.regulations.clone()),
        clause_types: config.analysis.clause_types.clone(),
        question: None,
    };
    Ok(Analyzer::new(&catalog).analyze(text, &options))
}
