use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use bando_invoice_to_csv::{
    BatchReport, InputDocument, LogReporter, PdfTableSource, VendorLayout, process_batch,
    write_csv, write_json_to_string,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "inv2csv",
    version,
    about = "Extract Bando invoice line items from PDFs into one dataset"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Extract line items from invoice PDFs and write the merged dataset.
    Extract(ExtractArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Csv,
    Json,
}

#[derive(Debug, Args)]
struct ExtractArgs {
    /// Input invoice PDF path. Repeatable.
    #[arg(short, long = "input", required = true)]
    inputs: Vec<PathBuf>,

    /// Output dataset path.
    #[arg(short, long)]
    output: PathBuf,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Enable verbose warning output.
    #[arg(short, long)]
    verbose: bool,
}

fn load_documents(inputs: &[PathBuf]) -> Result<Vec<InputDocument>> {
    inputs
        .iter()
        .map(|path| {
            let bytes = fs::read(path)
                .with_context(|| format!("failed to read input '{}'", path.display()))?;
            let name = path
                .file_name()
                .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned());
            Ok(InputDocument::new(name, bytes))
        })
        .collect()
}

fn run_extract(args: &ExtractArgs) -> Result<BatchReport> {
    let documents = load_documents(&args.inputs)?;
    let layout = VendorLayout::default();
    let mut reporter = LogReporter;
    let report = process_batch(&PdfTableSource, &documents, &layout, &mut reporter);

    match args.format {
        OutputFormat::Csv => write_csv(&args.output, &report.records)
            .with_context(|| format!("failed to write '{}'", args.output.display()))?,
        OutputFormat::Json => {
            let json = write_json_to_string(&report.records)?;
            fs::write(&args.output, json)
                .with_context(|| format!("failed to write '{}'", args.output.display()))?;
        }
    }

    Ok(report)
}

fn log_report(report: &BatchReport, verbose: bool) {
    if report.warnings.is_empty() {
        return;
    }

    eprintln!("warning: {} issue(s) detected", report.warnings.len());
    if verbose {
        for warning in &report.warnings {
            eprintln!(
                "  - {:?} source={:?} detail={:?}: {}",
                warning.code, warning.source_file, warning.detail, warning.message
            );
        }
    }
}

fn print_summary(report: &BatchReport) {
    let total_qty: u64 = report
        .records
        .iter()
        .filter_map(|record| record.ship_qty.parse::<u64>().ok())
        .sum();
    println!(
        "processed {} file(s): {} line item(s), total qty {}",
        report.file_count,
        report.records.len(),
        total_qty
    );
}

fn main() -> ExitCode {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("bando_invoice_to_csv=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Extract(args) => match run_extract(&args) {
            Ok(report) => {
                log_report(&report, args.verbose);
                print_summary(&report);
                if report.records.is_empty() {
                    ExitCode::from(2)
                } else {
                    ExitCode::SUCCESS
                }
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                ExitCode::from(1)
            }
        },
    }
}
