use clap::Args;
use serde_json::{json, Value};

use afh_scout_core::filter::{filter_listings, FilterCriteria};

use crate::input;

/// Arguments for the eligibility filter
#[derive(Args)]
pub struct FilterArgs {
    /// Path to a JSON file holding a listings array
    #[arg(long)]
    pub input: Option<String>,

    /// Path to a JSON criteria file overriding the filter defaults
    #[arg(long)]
    pub criteria: Option<String>,
}

pub fn run_filter(args: FilterArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let listings = input::listings_input(args.input.as_deref())?;
    let criteria: FilterCriteria = match args.criteria.as_deref() {
        Some(path) => input::file::read_json(path)?,
        None => FilterCriteria::default(),
    };

    let (passed, summary) = filter_listings(&listings, &criteria);
    Ok(json!({
        "summary": summary,
        "listings": passed,
    }))
}
