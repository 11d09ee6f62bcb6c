use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::{CategoryHits, DocumentInsights, KeywordRisk, RiskLevel};
use crate::engine::matcher::TermMatcher;
use crate::utils::word_count;

const MAX_COMPANIES: usize = 3;
const MAX_DATES: usize = 2;
const MAX_AMOUNTS: usize = 2;

/// Document type and the lowercase cues that select it, checked in order.
static DOCUMENT_TYPES: &[(&str, &[&str])] = &[
    ("Employment Agreement", &["employment", "employee", "employer", "job"]),
    ("Non-Disclosure Agreement", &["non-disclosure", "nda", "confidential"]),
    ("Service Agreement", &["service", "services", "provider"]),
    ("Partnership Agreement", &["partnership", "partner", "joint venture"]),
    ("Sales Agreement", &["sale", "purchase", "buy", "sell"]),
];

const FALLBACK_DOCUMENT_TYPE: &str = "Legal Document";

/// Compliance areas and their lowercase keywords, reported in this order.
static COMPLIANCE_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Data Protection",
        &["personal data", "privacy", "gdpr", "data protection", "consent"],
    ),
    (
        "Financial Compliance",
        &["sox", "sarbanes", "financial disclosure", "audit", "accounting"],
    ),
    (
        "Employment Law",
        &["equal opportunity", "discrimination", "harassment", "workplace safety"],
    ),
    (
        "Contract Law",
        &["force majeure", "indemnification", "limitation of liability", "termination"],
    ),
];

/// Shown in place of category hits when no category matched.
pub const NO_COMPLIANCE_KEYWORDS: &str =
    "No specific compliance keywords detected. Manual review recommended.";

static RISK_KEYWORDS: &[&str] = &[
    "penalty",
    "damages",
    "liability",
    "breach",
    "default",
    "termination",
    "indemnify",
    "sue",
    "court",
    "arbitration",
];

/// Distinct keyword counts strictly above these select HIGH and MEDIUM.
/// There are only ten keywords, so HIGH is never reached with this table.
const KEYWORD_RISK_HIGH: usize = 10;
const KEYWORD_RISK_MEDIUM: usize = 5;

static COMPANY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Z][a-z]+ (?:Inc|LLC|Corp|Corporation|Company|Ltd)\b").expect("company regex")
});

static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d{1,2}[/-]\d{1,2}[/-]\d{2,4}\b").expect("date regex"));

static MONEY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$[\d,]+(?:\.\d{2})?").expect("money regex"));

/// Named indicators matched against the lowercased text.
static RISK_INDICATORS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    [
        ("Unlimited Liability", r"unlimited.*liability"),
        ("Personal Guarantee", r"personal.*guarantee"),
        ("Automatic Renewal", r"automatic.*renew"),
        ("Liquidated Damages", r"liquidated.*damages"),
        ("Non-Compete", r"non.?compete"),
        ("Exclusive Dealing", r"exclusive.*dealing"),
    ]
    .into_iter()
    .map(|(name, pattern)| (name, Regex::new(pattern).expect("risk indicator regex")))
    .collect()
});

#[must_use]
pub fn document_insights(text: &str) -> DocumentInsights {
    insights_with(&TermMatcher::new(text))
}

pub(crate) fn insights_with(matcher: &TermMatcher<'_>) -> DocumentInsights {
    DocumentInsights {
        word_count: word_count(matcher.text()),
        document_type: detect_document_type_with(matcher).to_string(),
        entities: extract_entities(matcher.text()),
        risk_indicators: risk_indicators_with(matcher),
        compliance_categories: compliance_categories_with(matcher),
        keyword_risk: keyword_risk_with(matcher),
    }
}

/// First matching type wins; cues are plain substrings.
#[must_use]
pub fn detect_document_type(text: &str) -> &'static str {
    detect_document_type_with(&TermMatcher::new(text))
}

fn detect_document_type_with(matcher: &TermMatcher<'_>) -> &'static str {
    DOCUMENT_TYPES
        .iter()
        .find(|(_, cues)| cues.iter().any(|cue| matcher.contains_term(cue)))
        .map_or(FALLBACK_DOCUMENT_TYPE, |(name, _)| name)
}

/// Companies, then dates, then monetary amounts, each capped.
#[must_use]
pub fn extract_entities(text: &str) -> Vec<String> {
    let companies = COMPANY_RE.find_iter(text).take(MAX_COMPANIES);
    let dates = DATE_RE.find_iter(text).take(MAX_DATES);
    let amounts = MONEY_RE.find_iter(text).take(MAX_AMOUNTS);
    companies
        .chain(dates)
        .chain(amounts)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[must_use]
pub fn find_risk_indicators(text: &str) -> Vec<String> {
    risk_indicators_with(&TermMatcher::new(text))
}

fn risk_indicators_with(matcher: &TermMatcher<'_>) -> Vec<String> {
    let lowered = matcher.lowered();
    RISK_INDICATORS
        .iter()
        .filter(|(_, re)| re.is_match(lowered))
        .map(|(name, _)| (*name).to_string())
        .collect()
}

/// Keyword hits per compliance area. Areas with no hit are left out.
#[must_use]
pub fn compliance_categories(text: &str) -> Vec<CategoryHits> {
    compliance_categories_with(&TermMatcher::new(text))
}

fn compliance_categories_with(matcher: &TermMatcher<'_>) -> Vec<CategoryHits> {
    COMPLIANCE_CATEGORIES
        .iter()
        .filter_map(|(category, keywords)| {
            let keywords: Vec<String> = keywords
                .iter()
                .filter(|keyword| matcher.contains_term(keyword))
                .map(|keyword| (*keyword).to_string())
                .collect();
            (!keywords.is_empty()).then(|| CategoryHits {
                category: (*category).to_string(),
                keywords,
            })
        })
        .collect()
}

/// Category lines ready for display, or the manual-review fallback.
#[must_use]
pub fn compliance_notes(categories: &[CategoryHits]) -> Vec<String> {
    if categories.is_empty() {
        vec![NO_COMPLIANCE_KEYWORDS.to_string()]
    } else {
        categories.iter().map(ToString::to_string).collect()
    }
}

#[must_use]
pub fn keyword_risk_level(text: &str) -> KeywordRisk {
    keyword_risk_with(&TermMatcher::new(text))
}

fn keyword_risk_with(matcher: &TermMatcher<'_>) -> KeywordRisk {
    let keywords: Vec<String> = RISK_KEYWORDS
        .iter()
        .filter(|keyword| matcher.contains_term(keyword))
        .map(|keyword| (*keyword).to_string())
        .collect();
    let level = match keywords.len() {
        n if n > KEYWORD_RISK_HIGH => RiskLevel::High,
        n if n > KEYWORD_RISK_MEDIUM => RiskLevel::Medium,
        _ => RiskLevel::Low,
    };
    KeywordRisk { level, keywords }
}
