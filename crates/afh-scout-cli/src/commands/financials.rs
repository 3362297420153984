use clap::Args;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::Value;

use afh_scout_core::financial::project_financials;
use afh_scout_core::pricing::optimize_pricing;
use afh_scout_core::{AnalysisConfig, Listing};

use crate::input;

/// Arguments for the financial projection
#[derive(Args)]
pub struct FinancialsArgs {
    /// Path to a JSON listing file
    #[arg(long)]
    pub input: Option<String>,

    #[command(flatten)]
    pub quick: QuickListing,
}

/// Arguments for the pricing optimizer
#[derive(Args)]
pub struct PricingArgs {
    /// Path to a JSON listing file
    #[arg(long)]
    pub input: Option<String>,

    #[command(flatten)]
    pub quick: QuickListing,
}

/// Quick-entry listing fields for running a projection without a file.
#[derive(Args)]
pub struct QuickListing {
    /// Listing price (quick entry, used when no input file is given)
    #[arg(long)]
    pub price: Option<Decimal>,

    /// Bedroom count (quick entry)
    #[arg(long, default_value_t = 4)]
    pub bedrooms: u32,

    /// Bathroom count (quick entry)
    #[arg(long)]
    pub bathrooms: Option<Decimal>,

    /// Square footage (quick entry)
    #[arg(long)]
    pub sqft: Option<Decimal>,
}

impl QuickListing {
    fn into_listing(self) -> Option<Listing> {
        let price = self.price?;
        Some(Listing {
            address: "quick entry".into(),
            price,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms.unwrap_or(dec!(2)),
            sqft: self.sqft.unwrap_or(dec!(2200)),
            ..Listing::default()
        })
    }
}

pub fn run_financials(
    args: FinancialsArgs,
    config: AnalysisConfig,
) -> Result<Value, Box<dyn std::error::Error>> {
    let listing = resolve_listing(args.input.as_deref(), args.quick)?;
    let financial = project_financials(&listing, &config);
    Ok(serde_json::to_value(financial)?)
}

pub fn run_pricing(
    args: PricingArgs,
    config: AnalysisConfig,
) -> Result<Value, Box<dyn std::error::Error>> {
    let listing = resolve_listing(args.input.as_deref(), args.quick)?;
    let financial = project_financials(&listing, &config);
    let pricing = optimize_pricing(&listing, &financial, &config);

    // Pricing fields at the top level, projection alongside for context
    let mut value = serde_json::to_value(pricing)?;
    if let Value::Object(ref mut map) = value {
        map.insert("financial".into(), serde_json::to_value(financial)?);
    }
    Ok(value)
}

fn resolve_listing(
    input: Option<&str>,
    quick: QuickListing,
) -> Result<Listing, Box<dyn std::error::Error>> {
    if let Some(path) = input {
        return input::file::read_json(path);
    }
    if let Some(data) = input::stdin::read_stdin()? {
        return Ok(serde_json::from_value(data)?);
    }
    quick
        .into_listing()
        .ok_or_else(|| "--input <file.json>, stdin, or --price required".into())
}
