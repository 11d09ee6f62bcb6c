//! The rule catalog: regulations, clause patterns and weighted risk terms.
//!
//! A catalog is validated once when it is built and never changes
//! afterwards. Scorers borrow it, so one catalog can serve any number of
//! concurrent analyses.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::config::CatalogConfig;
use crate::domain::RiskTier;
use crate::engine::matcher::TermPattern;
use crate::engine::rules::{
    ClauseDef, RegulationDef, RiskBucketDef, CLAUSES, REGULATIONS, RISK_BUCKETS,
};
use crate::error::{ClausewiseError, Result};

static BUILTIN: Lazy<RuleCatalog> = Lazy::new(|| {
    RuleCatalog::from_config(&CatalogConfig::default()).expect("built-in rule catalog must compile")
});

#[derive(Debug, Clone, Serialize)]
pub struct RegulationRule {
    name: String,
    required: Vec<String>,
    prohibited: Vec<String>,
    risk_indicators: Vec<String>,
}

impl RegulationRule {
    /// Terms are stored lowercase; matching is case-insensitive anyway.
    pub fn new<S: AsRef<str>>(
        name: impl Into<String>,
        required: &[S],
        prohibited: &[S],
        risk_indicators: &[S],
    ) -> Self {
        Self {
            name: name.into(),
            required: lowercase_terms(required),
            prohibited: lowercase_terms(prohibited),
            risk_indicators: lowercase_terms(risk_indicators),
        }
    }

    fn from_def(def: &RegulationDef) -> Self {
        Self::new(def.name, def.required, def.prohibited, def.risk_indicators)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn required(&self) -> &[String] {
        &self.required
    }

    #[must_use]
    pub fn prohibited(&self) -> &[String] {
        &self.prohibited
    }

    #[must_use]
    pub fn risk_indicators(&self) -> &[String] {
        &self.risk_indicators
    }

    fn all_terms(&self) -> impl Iterator<Item = &String> {
        self.required
            .iter()
            .chain(&self.prohibited)
            .chain(&self.risk_indicators)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ClausePattern {
    clause_type: String,
    patterns: Vec<TermPattern>,
    keywords: Vec<String>,
}

impl ClausePattern {
    /// Compile every pattern case-insensitively.
    pub fn compile<S: AsRef<str>>(
        clause_type: impl Into<String>,
        patterns: &[S],
        keywords: &[S],
    ) -> Result<Self> {
        let clause_type = clause_type.into();
        let patterns = patterns
            .iter()
            .map(|p| {
                TermPattern::regex(p.as_ref()).map_err(|e| ClausewiseError::InvalidPattern {
                    clause_type: clause_type.clone(),
                    message: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            clause_type,
            patterns,
            keywords: lowercase_terms(keywords),
        })
    }

    fn from_def(def: &ClauseDef) -> Result<Self> {
        Self::compile(def.clause_type, def.patterns, def.keywords)
    }

    #[must_use]
    pub fn clause_type(&self) -> &str {
        &self.clause_type
    }

    #[must_use]
    pub fn patterns(&self) -> &[TermPattern] {
        &self.patterns
    }

    #[must_use]
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RiskBucket {
    tier: RiskTier,
    weight: u32,
    terms: Vec<String>,
}

impl RiskBucket {
    pub fn new<S: AsRef<str>>(tier: RiskTier, terms: &[S]) -> Self {
        Self {
            tier,
            weight: tier.weight(),
            terms: lowercase_terms(terms),
        }
    }

    fn from_def(def: &RiskBucketDef) -> Self {
        Self::new(def.tier, def.terms)
    }

    #[must_use]
    pub fn tier(&self) -> RiskTier {
        self.tier
    }

    #[must_use]
    pub fn weight(&self) -> u32 {
        self.weight
    }

    #[must_use]
    pub fn terms(&self) -> &[String] {
        &self.terms
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RuleCatalog {
    regulations: Vec<RegulationRule>,
    clauses: Vec<ClausePattern>,
    risk_buckets: Vec<RiskBucket>,
}

impl RuleCatalog {
    /// Validate and assemble a catalog. Names must be non-empty and unique,
    /// terms and keywords non-empty.
    pub fn new(
        regulations: Vec<RegulationRule>,
        clauses: Vec<ClausePattern>,
        risk_buckets: Vec<RiskBucket>,
    ) -> Result<Self> {
        let mut seen = HashSet::new();
        for rule in &regulations {
            check_name("regulation", &rule.name, &mut seen)?;
            if let Some(term) = rule.all_terms().find(|t| t.trim().is_empty()) {
                return Err(ClausewiseError::Catalog(format!(
                    "regulation '{}' has an empty term '{term}'",
                    rule.name
                )));
            }
        }

        let mut seen = HashSet::new();
        for clause in &clauses {
            check_name("clause type", &clause.clause_type, &mut seen)?;
            if clause.keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(ClausewiseError::Catalog(format!(
                    "clause type '{}' has an empty keyword",
                    clause.clause_type
                )));
            }
        }

        let mut tiers = HashSet::new();
        for bucket in &risk_buckets {
            if !tiers.insert(bucket.tier) {
                return Err(ClausewiseError::Catalog(format!(
                    "risk tier '{}' defined twice",
                    bucket.tier
                )));
            }
        }

        Ok(Self {
            regulations,
            clauses,
            risk_buckets,
        })
    }

    /// The compiled-in catalog, built on first use and shared process-wide.
    #[must_use]
    pub fn builtin() -> &'static RuleCatalog {
        &BUILTIN
    }

    /// Built-in definitions minus `config.disable`, plus custom entries.
    pub fn from_config(config: &CatalogConfig) -> Result<Self> {
        let disabled: HashSet<&str> = config.disable.iter().map(String::as_str).collect();

        let mut regulations: Vec<RegulationRule> = REGULATIONS
            .iter()
            .filter(|def| !disabled.contains(def.name))
            .map(RegulationRule::from_def)
            .collect();
        regulations.extend(
            config
                .regulations
                .iter()
                .filter(|custom| !disabled.contains(custom.name.as_str()))
                .map(|custom| {
                    RegulationRule::new(
                        custom.name.clone(),
                        custom.required.as_slice(),
                        custom.prohibited.as_slice(),
                        custom.risk_indicators.as_slice(),
                    )
                }),
        );

        let mut clauses = CLAUSES
            .iter()
            .filter(|def| !disabled.contains(def.clause_type))
            .map(ClausePattern::from_def)
            .collect::<Result<Vec<_>>>()?;
        for custom in &config.clauses {
            if disabled.contains(custom.clause_type.as_str()) {
                continue;
            }
            clauses.push(ClausePattern::compile(
                custom.clause_type.clone(),
                custom.patterns.as_slice(),
                custom.keywords.as_slice(),
            )?);
        }

        let risk_buckets = RISK_BUCKETS.iter().map(RiskBucket::from_def).collect();

        let catalog = Self::new(regulations, clauses, risk_buckets)?;
        tracing::debug!(
            regulations = catalog.regulations.len(),
            clause_types = catalog.clauses.len(),
            disabled = disabled.len(),
            "rule catalog ready"
        );
        Ok(catalog)
    }

    #[must_use]
    pub fn regulation_rules(&self) -> &[RegulationRule] {
        &self.regulations
    }

    #[must_use]
    pub fn regulation(&self, name: &str) -> Option<&RegulationRule> {
        self.regulations.iter().find(|r| r.name == name)
    }

    #[must_use]
    pub fn clause_patterns(&self) -> &[ClausePattern] {
        &self.clauses
    }

    #[must_use]
    pub fn clause_pattern(&self, clause_type: &str) -> Option<&ClausePattern> {
        self.clauses.iter().find(|c| c.clause_type == clause_type)
    }

    #[must_use]
    pub fn risk_buckets(&self) -> &[RiskBucket] {
        &self.risk_buckets
    }
}

fn check_name<'a>(kind: &str, name: &'a str, seen: &mut HashSet<&'a str>) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ClausewiseError::Catalog(format!("{kind} name is empty")));
    }
    if !seen.insert(name) {
        return Err(ClausewiseError::Catalog(format!(
            "{kind} '{name}' is defined twice"
        )));
    }
    Ok(())
}

fn lowercase_terms<S: AsRef<str>>(terms: &[S]) -> Vec<String> {
    terms.iter().map(|t| t.as_ref().to_lowercase()).collect()
}
