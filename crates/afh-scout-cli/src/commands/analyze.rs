use clap::Args;
use serde_json::{json, Value};

use afh_scout_core::filter::{filter_listings, FilterCriteria};
use afh_scout_core::{AnalysisConfig, AnalysisEngine, Listing};

use crate::input;

/// Arguments for single-listing analysis
#[derive(Args)]
pub struct AnalyzeArgs {
    /// Path to a JSON listing file
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for batch analysis
#[derive(Args)]
pub struct BatchArgs {
    /// Path to a JSON file holding a listings array
    #[arg(long)]
    pub input: Option<String>,

    /// Skip the eligibility filter and score every listing
    #[arg(long)]
    pub no_filter: bool,

    /// Only include viable listings in the output
    #[arg(long)]
    pub viable_only: bool,
}

pub fn run_analyze(
    args: AnalyzeArgs,
    config: AnalysisConfig,
) -> Result<Value, Box<dyn std::error::Error>> {
    let listing: Listing = input::typed_input(
        args.input.as_deref(),
        "--input <file.json> or stdin required for analysis",
    )?;
    let engine = AnalysisEngine::new(config)?;
    let result = engine.analyze(&listing);
    Ok(serde_json::to_value(result)?)
}

pub fn run_batch(args: BatchArgs, config: AnalysisConfig) -> Result<Value, Box<dyn std::error::Error>> {
    let listings = input::listings_input(args.input.as_deref())?;
    let engine = AnalysisEngine::new(config)?;

    let (candidates, filter_summary) = if args.no_filter {
        (listings, None)
    } else {
        let (passed, summary) = filter_listings(&listings, &FilterCriteria::default());
        (passed, Some(summary))
    };

    let mut results = engine.analyze_batch(&candidates);
    // Best candidates first
    results.sort_by(|a, b| b.score.cmp(&a.score));
    if args.viable_only {
        results.retain(|r| r.viable);
    }

    let viable = results.iter().filter(|r| r.viable).count();
    Ok(json!({
        "analyzed": results.len(),
        "viable": viable,
        "filter_summary": filter_summary,
        "results": results,
    }))
}
