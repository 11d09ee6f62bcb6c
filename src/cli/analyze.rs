use std::io::Write;

use anyhow::{Context, Result};

use clausewise::output::{format_extraction, format_report, OutputFormat};
use clausewise::{AnalysisOptions, AnalysisRequest, Analyzer, ClauseDetector};

use super::{load_config, read_input};
use crate::{AnalyzeArgs, ExtractArgs, RequestArgs};

pub fn run_analyze(args: &AnalyzeArgs) -> Result<()> {
    let config = load_config(&args.common)?;
    let catalog = config.build_catalog()?;
    let text = read_input(&args.input)?;

    let options = AnalysisOptions {
        regulations: if !args.regulations.is_empty() {
            Some(args.regulations.clone())
        } else if !config.analysis.regulations.is_empty() {
            Some(config.analysis.regulations.clone())
        } else {
            None
        },
        clause_types: if args.clause_types.is_empty() {
            config.analysis.clause_types.clone()
        } else {
            args.clause_types.clone()
        },
        question: args.question.clone(),
    };

    let report = Analyzer::new(&catalog).analyze(&text, &options);
    let format = args.format.unwrap_or(config.output.format);
    print!("{}", format_report(&report, format));

    if report.needs_attention(config.analysis.fail_below) {
        std::io::stdout().flush()?;
        tracing::debug!(
            risk_level = %report.risk.risk_level,
            overall_score = report.compliance.overall_score,
            "report needs attention"
        );
        std::process::exit(1);
    }
    Ok(())
}

pub fn run_extract(args: &ExtractArgs) -> Result<()> {
    let config = load_config(&args.common)?;
    let catalog = config.build_catalog()?;
    let text = read_input(&args.input)?;

    let extractions = ClauseDetector::new(&catalog).extract(&text, &args.clause_types);
    let format = args.format.unwrap_or(config.output.format);
    print!("{}", format_extraction(&extractions, format));
    Ok(())
}

/// JSON in, JSON out. Config defaults fill the lists the request leaves out.
pub fn run_request(args: &RequestArgs) -> Result<()> {
    let config = load_config(&args.common)?;
    let catalog = config.build_catalog()?;
    let body = read_input(&args.input)?;

    let mut request =
        AnalysisRequest::from_json(&body).context("Request is not a valid analysis request")?;
    if request.regulations.is_none() && !config.analysis.regulations.is_empty() {
        request.regulations = Some(config.analysis.regulations.clone());
    }
    if request.clause_types.is_none() && !config.analysis.clause_types.is_empty() {
        request.clause_types = Some(config.analysis.clause_types.clone());
    }

    let report = Analyzer::new(&catalog).analyze_request(&request)?;
    println!("{}", format_report(&report, OutputFormat::Json));
    Ok(())
}
