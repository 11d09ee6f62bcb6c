mod cli;
mod presets;

use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use tracing_subscriber::EnvFilter;

use clausewise::output::OutputFormat;

const LOG_ENV: &str = "CLAUSEWISE_LOG";

#[derive(Parser)]
#[command(
    name = "clausewise",
    about = "Rule-based compliance, risk and clause review for contract text",
    version
)]
enum Cli {
    /// Full review: compliance, risk, clauses and insights
    Analyze(AnalyzeArgs),
    /// Pull the sentences that carry the given clause types
    Extract(ExtractArgs),
    /// Answer a JSON analysis request with a JSON report
    Request(RequestArgs),
    /// List the regulations, clause types and risk terms in use
    Rules(RulesArgs),
    /// Write a starter clausewise.toml
    Init(InitArgs),
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Parser)]
struct CommonArgs {
    #[arg(long, help = "Path to a clausewise.toml (default: ./clausewise.toml)")]
    config: Option<PathBuf>,

    #[arg(long, help = "Configuration profile to use")]
    profile: Option<String>,

    #[arg(long, help = "Disable colored output")]
    no_color: bool,

    #[arg(long, short, help = "Log rule evaluation to stderr")]
    verbose: bool,
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    #[arg(help = "Text file to analyse, or - for stdin", default_value = "-")]
    input: PathBuf,

    #[arg(
        long = "regulation",
        short,
        help = "Regulation to score (repeatable, default: all)"
    )]
    regulations: Vec<String>,

    #[arg(
        long = "clause",
        short,
        help = "Clause type to extract sentence by sentence (repeatable)"
    )]
    clause_types: Vec<String>,

    #[arg(
        long,
        short,
        help = "Output format: terminal, json, markdown (default: from config)"
    )]
    format: Option<OutputFormat>,

    #[arg(long, short, help = "Question carried along with the report")]
    question: Option<String>,

    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Parser)]
pub struct ExtractArgs {
    #[arg(help = "Text file to read, or - for stdin", default_value = "-")]
    input: PathBuf,

    #[arg(
        long = "clause",
        short,
        default_values = ["liability", "termination", "payment", "confidentiality"],
        help = "Clause type (repeatable)"
    )]
    clause_types: Vec<String>,

    #[arg(long, short, help = "Output format: terminal, json, markdown")]
    format: Option<OutputFormat>,

    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Parser)]
pub struct RequestArgs {
    #[arg(help = "JSON request file, or - for stdin", default_value = "-")]
    input: PathBuf,

    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Parser)]
pub struct RulesArgs {
    #[arg(long, short, help = "Output format: terminal, json, markdown")]
    format: Option<OutputFormat>,

    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Parser)]
struct InitArgs {
    #[arg(
        long,
        default_value = "balanced",
        value_parser = ["balanced", "privacy", "financial", "healthcare"],
        help = "Configuration preset: balanced, privacy, financial, healthcare"
    )]
    preset: String,

    #[arg(long, help = "Overwrite existing clausewise.toml if it already exists")]
    force: bool,
}

#[derive(Parser)]
struct CompletionsArgs {
    #[arg(help = "Target shell: bash, zsh, fish, elvish, powershell")]
    shell: Shell,
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "clausewise=debug" } else { "warn" })
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let verbose = match &cli {
        Cli::Analyze(args) => args.common.verbose,
        Cli::Extract(args) => args.common.verbose,
        Cli::Request(args) => args.common.verbose,
        Cli::Rules(args) => args.common.verbose,
        Cli::Init(_) | Cli::Completions(_) => false,
    };
    init_tracing(verbose);

    match cli {
        Cli::Analyze(args) => cli::analyze::run_analyze(&args),
        Cli::Extract(args) => cli::analyze::run_extract(&args),
        Cli::Request(args) => cli::analyze::run_request(&args),
        Cli::Rules(args) => cli::rules::run_rules(&args),
        Cli::Init(args) => cli::init::run_init(&args.preset, args.force),
        Cli::Completions(args) => {
            generate(
                args.shell,
                &mut Cli::command(),
                "clausewise",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    }
}
