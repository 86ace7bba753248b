use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_appender::non_blocking;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use casefinder::analysis::analyze_test_file;
use casefinder::cli::{OutputFormat, OutputWriter, ParallelAnalyzer, ScanConfig};
use casefinder::config::AnalyzerConfig;

#[derive(Parser)]
#[command(name = "casefinder")]
#[command(about = "Pair Go table-driven test cases with the functions they exercise", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the Go test file (or a directory of them)
    #[arg(long)]
    path: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "prompt")]
    format: OutputFormatArg,

    /// TOML file overriding the naming conventions
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of parallel threads for directory scans (defaults to CPU count)
    #[arg(short, long)]
    threads: Option<usize>,

    /// Log extraction details to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, ValueEnum)]
enum OutputFormatArg {
    /// Prompt blocks for each resolved test case
    Prompt,
    /// Standard JSON array (pretty-printed)
    Json,
    /// Newline-delimited JSON (one file report per line)
    Ndjson,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Prompt => OutputFormat::Prompt,
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::Ndjson => OutputFormat::Ndjson,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries nothing but results
    let default_filter = if cli.verbose { "casefinder=debug" } else { "casefinder=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let (non_blocking_stderr, _stderr_guard) = non_blocking(std::io::stderr());
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking_stderr)
                .with_target(false)
                .with_ansi(false),
        )
        .init();

    let config = match &cli.config {
        Some(path) => AnalyzerConfig::load(path)?,
        None => AnalyzerConfig::default(),
    };
    debug!("Using configuration: {:?}", config);

    let format = OutputFormat::from(cli.format);
    if cli.path.is_dir() {
        analyze_directory(&cli.path, cli.threads, config, format)
    } else {
        analyze_file(&cli.path, &config, format)
    }
}

/// Analyze one test file; a parse failure here is fatal
fn analyze_file(path: &Path, config: &AnalyzerConfig, format: OutputFormat) -> Result<()> {
    let report = analyze_test_file(path, config)
        .with_context(|| format!("Error finding test cases in {}", path.display()))?;

    let mut writer = OutputWriter::stdout(format);
    writer.write_report(&report)?;
    writer.flush()?;
    Ok(())
}

/// Analyze every test file under a directory in parallel
fn analyze_directory(
    directory: &Path,
    threads: Option<usize>,
    config: AnalyzerConfig,
    format: OutputFormat,
) -> Result<()> {
    let mut scan = ScanConfig {
        analyzer: config,
        ..ScanConfig::default()
    };
    if let Some(threads) = threads {
        scan.num_threads = threads;
    }
    info!("Scanning {} with {} threads", directory.display(), scan.num_threads);

    let reports = ParallelAnalyzer::new(scan).analyze_directory(directory)?;

    let mut writer = OutputWriter::stdout(format).label_reports(true);
    writer.write_batch(&reports)?;
    writer.flush()?;
    Ok(())
}
