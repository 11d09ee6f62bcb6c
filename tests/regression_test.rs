//! Reference scenarios and known edge cases, run through the public API.

use clausewise::{
    analyze, AnalysisOptions, AnalysisRequest, Analyzer, ClauseDetector, ClauseExtraction, ComplianceScorer,
    RiskLevel, RiskScorer, RuleCatalog,
};

fn catalog() -> &'static RuleCatalog {
    RuleCatalog::builtin()
}

// ---------- Reference scenarios ----------

#[test]
fn gdpr_all_required_terms_scores_100() {
    let text = "We apply data protection to personal data, respect data subject rights, \
                collect consent, and sign terms with each data processor and data controller.";
    let report = ComplianceScorer::new(catalog()).evaluate_only(text, &["GDPR"]);
    let gdpr = report.regulation("GDPR").unwrap();
    assert!((gdpr.score - 100.0).abs() < f64::EPSILON);
    assert!(gdpr.missing_requirements.is_empty());
    assert!(gdpr.prohibited_found.is_empty());
    assert!(gdpr.risk_factors.is_empty());
    assert_eq!(gdpr.found_requirements.len(), 6);
}

#[test]
fn two_high_risk_terms_stay_low() {
    let risk =
        RiskScorer::new(catalog()).score("We accept unlimited liability and a personal guarantee.");
    assert_eq!(
        risk.factors_found.high_risk,
        vec!["unlimited liability", "personal guarantee"]
    );
    assert!(risk.factors_found.medium_risk.is_empty());
    assert!(risk.factors_found.low_risk.is_empty());
    assert_eq!(risk.weighted_total, 6);
    assert_eq!(risk.risk_level, RiskLevel::Low);
    assert_eq!(risk.overall_score, 30);
}

#[test]
fn empty_text_scores_zero_and_finds_nothing() {
    let report = ComplianceScorer::new(catalog()).evaluate_only("", &["GDPR"]);
    assert!(report.overall_score.abs() < f64::EPSILON);

    let clauses = ClauseDetector::new(catalog()).detect("");
    assert_eq!(clauses.len(), 7);
    assert!(clauses.values().all(|c| !c.found && c.confidence == 0.0));
}

#[test]
fn unknown_clause_type_extracts_nothing() {
    let extracted =
        ClauseDetector::new(catalog()).extract("Either party may terminate.", &["unknown_type"]);
    assert_eq!(extracted.len(), 1);
    assert_eq!(extracted["unknown_type"], ClauseExtraction::not_found());
}

#[test]
fn eleven_distinct_risk_terms_are_high() {
    let text = "standard warranty, mutual agreement, reasonable notice, good faith, \
                best efforts, industry standard, indemnification, force majeure, \
                intellectual property, confidentiality breach, governing law";
    let risk = RiskScorer::new(catalog()).score(text);
    assert_eq!(risk.factors_found.total(), 11);
    assert_eq!(risk.weighted_total, 16);
    assert_eq!(risk.risk_level, RiskLevel::High);
    assert_eq!(risk.overall_score, 80);
}

// ---------- Edge cases ----------

#[test]
fn unknown_regulation_is_skipped_not_fatal() {
    let report =
        ComplianceScorer::new(catalog()).evaluate_only("consent", &["GDPR", "NOT_A_LAW"]);
    assert_eq!(report.regulations.len(), 1);
    assert!(report.regulation("NOT_A_LAW").is_none());
}

#[test]
fn only_unknown_regulations_score_zero() {
    let report = ComplianceScorer::new(catalog()).evaluate_only("consent", &["NOT_A_LAW"]);
    assert!(report.regulations.is_empty());
    assert!(report.overall_score.abs() < f64::EPSILON);
    assert_eq!(
        report.recommendations,
        vec!["Document requires significant compliance improvements"]
    );
}

#[test]
fn penalties_floor_at_zero() {
    let text = "unrestricted phi access, no security measures, phi disclosure, \
                unsecured transmission";
    let report = ComplianceScorer::new(catalog()).evaluate_only(text, &["HIPAA"]);
    let hipaa = report.regulation("HIPAA").unwrap();
    // "phi" is found inside the prohibited phrases themselves.
    assert_eq!(hipaa.found_requirements, vec!["phi"]);
    assert_eq!(hipaa.prohibited_found.len(), 2);
    assert_eq!(hipaa.risk_factors.len(), 2);
    assert!(hipaa.score.abs() < f64::EPSILON);
}

#[test]
fn missing_terms_listed_in_evaluation_order() {
    let report = ComplianceScorer::new(catalog()).evaluate_only("", &["SOX", "GDPR"]);
    assert_eq!(
        report.missing_requirements[..3],
        ["financial disclosure", "internal controls", "audit"]
    );
    assert_eq!(report.missing_requirements.len(), 11);
    assert!(report.recommendations.contains(
        &"Add missing compliance requirements: financial disclosure, internal controls, audit"
            .to_string()
    ));
}

#[test]
fn match_context_uses_character_offsets() {
    let text = "Überprüfung: die Kündigung ist möglich. Either party may terminate.";
    let clauses = ClauseDetector::new(catalog()).detect(text);
    let termination = &clauses["termination"];
    assert!(termination.found);
    let hit = &termination.matches[0];
    assert_eq!(hit.matched, "terminate");
    assert_eq!(hit.position, text.chars().count() - "terminate.".len());
    assert_ne!(hit.position, text.find("terminate").unwrap());
    assert!(hit.context.ends_with("terminate."));
}

#[test]
fn confidence_uses_uncapped_match_count() {
    let text = "terminated. termination. terminates. terminating.";
    let clauses = ClauseDetector::new(catalog()).detect(text);
    let termination = &clauses["termination"];
    assert_eq!(termination.matches.len(), 3);
    // 4 matches -> 1.0 pattern score before keywords are added.
    assert!((termination.confidence - 1.0).abs() < f64::EPSILON);
}

#[test]
fn empty_regulation_list_evaluates_nothing() {
    let request = AnalysisRequest::from_json(
        r#"{"text": "personal data and consent", "regulations": []}"#,
    )
    .unwrap();
    let report = Analyzer::new(catalog()).analyze_request(&request).unwrap();
    assert!(report.compliance.regulations.is_empty());
    assert!(report.compliance.overall_score.abs() < f64::EPSILON);

    let options = AnalysisOptions {
        regulations: Some(Vec::new()),
        ..AnalysisOptions::default()
    };
    let direct = Analyzer::new(catalog()).analyze("personal data and consent", &options);
    assert_eq!(direct, report);
}

#[test]
fn document_type_cue_is_substring() {
    // "nda" inside "standard" selects the non-disclosure type.
    let report = analyze("Standard terms apply.");
    assert_eq!(report.insights.document_type, "Non-Disclosure Agreement");
}

#[test]
fn full_report_is_serializable() {
    let options = AnalysisOptions {
        regulations: Some(vec!["CCPA".to_string()]),
        clause_types: vec!["liability".to_string()],
        question: None,
    };
    let report = Analyzer::new(catalog()).analyze(
        "California Consumer Privacy Act notice. Liability is limited to fees paid.",
        &options,
    );
    let json = serde_json::to_value(&report).unwrap();
    assert!(json["compliance"]["regulations"]["CCPA"]["score"].is_number());
    assert_eq!(json["extracted_clauses"]["liability"]["count"], 1);
    assert!(json.get("question").is_none());
}
