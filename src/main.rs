use clap::{Parser, Subcommand};
use stepcheck::{lint_files, DocumentKind, LintOptions, OutputFormat};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const LOG_ENV: &str = "STEPCHECK_LOG";

#[derive(Parser)]
#[command(name = "stepcheck")]
#[command(about = "Validates browser test and page documents without running them")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Patterns to match documents (default subcommand)
    #[arg(value_name = "PATTERNS")]
    patterns: Vec<String>,

    /// Enable verbose output
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Output format
    #[arg(long = "output-format", value_enum, default_value = "text", global = true)]
    output_format: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate test documents
    Test {
        /// Patterns to match test documents
        #[arg(required = true)]
        patterns: Vec<String>,
    },
    /// Validate page documents
    Page {
        /// Patterns to match page documents
        #[arg(required = true)]
        patterns: Vec<String>,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let (patterns, kind) = match cli.command {
        Some(Commands::Test { patterns }) => (patterns, Some(DocumentKind::Test)),
        Some(Commands::Page { patterns }) => (patterns, Some(DocumentKind::Page)),
        None if cli.patterns.is_empty() => (vec![".".to_string()], None),
        None => (cli.patterns, None),
    };

    let options = LintOptions {
        kind,
        output_format: cli.output_format,
    };

    let output = lint_files(patterns, options)?;
    std::process::exit(if output.has_failures() { 1 } else { 0 });
}
