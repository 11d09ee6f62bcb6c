use std::collections::BTreeMap;
use std::fmt::Write;

use colored::{ColoredString, Colorize};
use serde::{Deserialize, Serialize};

use crate::domain::{ClauseExtraction, RiskLevel, RiskTier};
use crate::engine::{compliance_notes, RuleCatalog, NO_COMPLIANCE_KEYWORDS};
use crate::output::recommendations::COMPLIANCE_THRESHOLD;
use crate::output::DocumentReport;

const RULE: &str = "═══════════════════════════════════════════════════════════";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "terminal" | "term" | "tty" => Ok(Self::Terminal),
            "json" => Ok(Self::Json),
            "markdown" | "md" => Ok(Self::Markdown),
            _ => Err(format!(
                "Unknown format: {s}. Valid options: terminal, json, markdown"
            )),
        }
    }
}

#[must_use]
pub fn format_report(report: &DocumentReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Terminal => report_terminal(report),
        OutputFormat::Json => to_json(report),
        OutputFormat::Markdown => report_markdown(report),
    }
}

#[must_use]
pub fn format_extraction(
    extractions: &BTreeMap<String, ClauseExtraction>,
    format: OutputFormat,
) -> String {
    match format {
        OutputFormat::Terminal => extraction_terminal(extractions),
        OutputFormat::Json => to_json(extractions),
        OutputFormat::Markdown => extraction_markdown(extractions),
    }
}

#[must_use]
pub fn format_catalog(catalog: &RuleCatalog, format: OutputFormat) -> String {
    match format {
        OutputFormat::Terminal => catalog_terminal(catalog),
        OutputFormat::Json => to_json(catalog),
        OutputFormat::Markdown => catalog_markdown(catalog),
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

fn score_label(score: f64) -> ColoredString {
    let label = format!("{score:.1}");
    if score >= COMPLIANCE_THRESHOLD {
        label.green().bold()
    } else if score >= COMPLIANCE_THRESHOLD / 2.0 {
        label.yellow().bold()
    } else {
        label.red().bold()
    }
}

fn level_label(level: RiskLevel) -> ColoredString {
    match level {
        RiskLevel::High => level.as_str().red().bold(),
        RiskLevel::Medium => level.as_str().yellow().bold(),
        RiskLevel::Low => level.as_str().green().bold(),
    }
}

fn or_none(items: &[String]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}

fn section(output: &mut String, title: &str) {
    let _ = writeln!(output, "\n{}", title.bright_cyan().bold());
}

fn report_terminal(report: &DocumentReport) -> String {
    let mut output = String::new();
    let _ = writeln!(
        output,
        "{}",
        "┌─────────────────────────────────────────────────────────".bright_blue()
    );
    let _ = writeln!(output, "{}", "│ CLAUSEWISE DOCUMENT REVIEW".bright_blue().bold());
    let _ = writeln!(
        output,
        "{}",
        "└─────────────────────────────────────────────────────────".bright_blue()
    );

    let insights = &report.insights;
    let _ = writeln!(
        output,
        "{} ({} words)",
        insights.document_type.bright_white().bold(),
        insights.word_count
    );

    section(&mut output, "▸ Compliance");
    let _ = writeln!(
        output,
        "  Overall score: {} / 100",
        score_label(report.compliance.overall_score)
    );
    for (name, result) in &report.compliance.regulations {
        let _ = writeln!(output, "  {} {}", name.bright_white().bold(), score_label(result.score));
        let _ = writeln!(
            output,
            "    {} {}",
            "found:".dimmed(),
            or_none(&result.found_requirements)
        );
        if !result.missing_requirements.is_empty() {
            let _ = writeln!(
                output,
                "    {} {}",
                "missing:".yellow(),
                result.missing_requirements.join(", ")
            );
        }
        if !result.prohibited_found.is_empty() {
            let _ = writeln!(
                output,
                "    {} {}",
                "prohibited:".red().bold(),
                result.prohibited_found.join(", ")
            );
        }
        if !result.risk_factors.is_empty() {
            let _ = writeln!(
                output,
                "    {} {}",
                "risk factors:".yellow(),
                result.risk_factors.join(", ")
            );
        }
    }

    section(&mut output, "▸ Risk");
    let risk = &report.risk;
    let _ = writeln!(
        output,
        "  Level: {}  score {} / 100  weighted {}",
        level_label(risk.risk_level),
        risk.overall_score,
        risk.weighted_total
    );
    for tier in RiskTier::ALL {
        let terms = risk.factors_found.get(tier);
        if !terms.is_empty() {
            let _ = writeln!(output, "    {} {}", format!("{tier}:").dimmed(), terms.join(", "));
        }
    }

    section(&mut output, "▸ Clauses");
    for (clause_type, result) in &report.clauses {
        let mark = if result.found {
            "✔".green().bold()
        } else {
            "✘".bright_black()
        };
        let _ = writeln!(
            output,
            "  {mark} {} (confidence {:.2})",
            clause_type,
            result.confidence
        );
        for hit in result.matches.iter().filter(|hit| !hit.matched.is_empty()) {
            let _ = writeln!(
                output,
                "      {} │ {}",
                hit.position.to_string().dimmed(),
                hit.context.replace(&hit.matched, &hit.matched.bold().to_string())
            );
        }
    }

    if let Some(extracted) = &report.extracted_clauses {
        section(&mut output, "▸ Extracted clauses");
        output.push_str(&extraction_lines(extracted));
    }

    section(&mut output, "▸ Insights");
    let _ = writeln!(output, "  Entities: {}", or_none(&insights.entities));
    let _ = writeln!(
        output,
        "  Risk indicators: {}",
        or_none(&insights.risk_indicators)
    );
    let _ = writeln!(output, "  Keyword risk: {}", insights.keyword_risk.summary());
    if insights.compliance_categories.is_empty() {
        let _ = writeln!(output, "  {}", NO_COMPLIANCE_KEYWORDS.dimmed());
    }
    for hits in &insights.compliance_categories {
        let _ = writeln!(output, "  {}: {}", hits.category, hits.keywords.join(", "));
    }

    if let Some(question) = &report.question {
        section(&mut output, "▸ Question");
        let _ = writeln!(output, "  {}", question.italic());
    }

    section(&mut output, "▸ Recommendations");
    for recommendation in report.recommendations() {
        let _ = writeln!(output, "  • {recommendation}");
    }

    let _ = writeln!(output, "\n{}", RULE.bright_black());
    let verdict = format!(
        "VERDICT: {} risk, {:.1}% compliant, {} of {} clause types found.",
        risk.risk_level,
        report.compliance.overall_score,
        report.found_clause_types().count(),
        report.clauses.len()
    );
    let verdict = match risk.risk_level {
        RiskLevel::High => verdict.red().bold(),
        RiskLevel::Medium => verdict.yellow().bold(),
        RiskLevel::Low => verdict.green().bold(),
    };
    let _ = writeln!(output, "{verdict}");

    output
}

fn extraction_lines(extractions: &BTreeMap<String, ClauseExtraction>) -> String {
    let mut output = String::new();
    for (clause_type, extraction) in extractions {
        let _ = writeln!(
            output,
            "  {} ({} segment{})",
            clause_type.bright_white().bold(),
            extraction.count,
            if extraction.count == 1 { "" } else { "s" }
        );
        for segment in &extraction.text_segments {
            let _ = writeln!(output, "    {} {segment}", "›".dimmed());
        }
    }
    output
}

fn extraction_terminal(extractions: &BTreeMap<String, ClauseExtraction>) -> String {
    if extractions.is_empty() {
        return format!("{}\n", "No clause types requested.".yellow());
    }
    extraction_lines(extractions)
}

fn catalog_terminal(catalog: &RuleCatalog) -> String {
    let mut output = String::new();
    section(&mut output, "▸ Regulations");
    for rule in catalog.regulation_rules() {
        let _ = writeln!(
            output,
            "  {:<8} {} required, {} prohibited, {} risk indicators",
            rule.name().bright_white().bold(),
            rule.required().len(),
            rule.prohibited().len(),
            rule.risk_indicators().len()
        );
    }

    section(&mut output, "▸ Clause types");
    for clause in catalog.clause_patterns() {
        let _ = writeln!(
            output,
            "  {:<20} {} patterns, keywords: {}",
            clause.clause_type().bright_white().bold(),
            clause.patterns().len(),
            clause.keywords().join(", ")
        );
    }

    section(&mut output, "▸ Risk terms");
    for bucket in catalog.risk_buckets() {
        let _ = writeln!(
            output,
            "  {} (weight {}): {}",
            bucket.tier().as_str().bright_white().bold(),
            bucket.weight(),
            bucket.terms().join(", ")
        );
    }
    output
}

fn report_markdown(report: &DocumentReport) -> String {
    let mut md = String::from("# Clausewise Document Review\n\n");
    let _ = writeln!(
        md,
        "**{}**, {} words. **Risk:** {} ({} / 100). **Compliance:** {:.1} / 100\n",
        report.insights.document_type,
        report.insights.word_count,
        report.risk.risk_level,
        report.risk.overall_score,
        report.compliance.overall_score
    );

    md.push_str("## Compliance\n\n");
    md.push_str("| Regulation | Score | Found | Missing | Prohibited |\n");
    md.push_str("|------------|-------|-------|---------|------------|\n");
    for (name, result) in &report.compliance.regulations {
        let _ = writeln!(
            md,
            "| {name} | {:.1} | {} | {} | {} |",
            result.score,
            result.found_requirements.join(", "),
            result.missing_requirements.join(", "),
            result.prohibited_found.join(", ")
        );
    }

    md.push_str("\n## Risk factors\n\n");
    md.push_str("| Tier | Weight | Terms |\n");
    md.push_str("|------|--------|-------|\n");
    for tier in RiskTier::ALL {
        let _ = writeln!(
            md,
            "| {tier} | {} | {} |",
            tier.weight(),
            report.risk.factors_found.get(tier).join(", ")
        );
    }

    md.push_str("\n## Clauses\n\n");
    md.push_str("| Clause | Found | Confidence | Keywords |\n");
    md.push_str("|--------|-------|------------|----------|\n");
    for (clause_type, result) in &report.clauses {
        let _ = writeln!(
            md,
            "| {clause_type} | {} | {:.2} | {} |",
            if result.found { "yes" } else { "no" },
            result.confidence,
            result.keywords_found.join(", ")
        );
    }

    if let Some(extracted) = &report.extracted_clauses {
        md.push_str("\n## Extracted clauses\n\n");
        md.push_str(&extraction_markdown(extracted));
    }

    if !report.insights.risk_indicators.is_empty() {
        md.push_str("\n## Risk indicators\n\n");
        for indicator in &report.insights.risk_indicators {
            let _ = writeln!(md, "- {indicator}");
        }
    }

    md.push_str("\n## Compliance keywords\n\n");
    for note in compliance_notes(&report.insights.compliance_categories) {
        let _ = writeln!(md, "- {note}");
    }
    let _ = writeln!(
        md,
        "\n**Keyword risk:** {}",
        report.insights.keyword_risk.summary()
    );

    md.push_str("\n## Recommendations\n\n");
    for recommendation in report.recommendations() {
        let _ = writeln!(md, "- {recommendation}");
    }
    md
}

fn extraction_markdown(extractions: &BTreeMap<String, ClauseExtraction>) -> String {
    let mut md = String::new();
    for (clause_type, extraction) in extractions {
        let _ = writeln!(md, "### {clause_type} ({})\n", extraction.count);
        for segment in &extraction.text_segments {
            let _ = writeln!(md, "> {segment}\n");
        }
    }
    md
}

fn catalog_markdown(catalog: &RuleCatalog) -> String {
    let mut md = String::from("# Clausewise Rules\n\n");
    md.push_str("| Regulation | Required | Prohibited | Risk indicators |\n");
    md.push_str("|------------|----------|------------|-----------------|\n");
    for rule in catalog.regulation_rules() {
        let _ = writeln!(
            md,
            "| {} | {} | {} | {} |",
            rule.name(),
            rule.required().join(", "),
            rule.prohibited().join(", "),
            rule.risk_indicators().join(", ")
        );
    }

    md.push_str("\n| Clause type | Patterns | Keywords |\n");
    md.push_str("|-------------|----------|----------|\n");
    for clause in catalog.clause_patterns() {
        let patterns: Vec<String> = clause
            .patterns()
            .iter()
            .map(|p| format!("`{}`", p.source()))
            .collect();
        let _ = writeln!(
            md,
            "| {} | {} | {} |",
            clause.clause_type(),
            patterns.join(" "),
            clause.keywords().join(", ")
        );
    }
    md
}
