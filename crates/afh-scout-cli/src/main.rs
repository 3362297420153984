mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::analyze::{AnalyzeArgs, BatchArgs};
use commands::filter::FilterArgs;
use commands::financials::{FinancialsArgs, PricingArgs};

/// Adult family home acquisition analysis
#[derive(Parser)]
#[command(
    name = "afh",
    version,
    about = "Adult family home acquisition analysis",
    long_about = "A CLI for evaluating residential listings as adult family home \
                  acquisitions with decimal precision. Supports eligibility filtering, \
                  financial projections, pricing optimization, and full viability scoring."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Path to a settings file (YAML or JSON) overriding analysis defaults
    #[arg(long, global = true)]
    config: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full viability analysis on a single listing
    Analyze(AnalyzeArgs),
    /// Filter and analyze a batch of listings
    Batch(BatchArgs),
    /// Apply the eligibility filter without scoring
    Filter(FilterArgs),
    /// Project monthly operating financials for a listing
    Financials(FinancialsArgs),
    /// Compute the optimal price and negotiation plan for a listing
    Pricing(PricingArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let config = match input::settings::load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    };

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Analyze(args) => commands::analyze::run_analyze(args, config),
        Commands::Batch(args) => commands::analyze::run_batch(args, config),
        Commands::Filter(args) => commands::filter::run_filter(args),
        Commands::Financials(args) => commands::financials::run_financials(args, config),
        Commands::Pricing(args) => commands::financials::run_pricing(args, config),
        Commands::Version => {
            println!("afh {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
