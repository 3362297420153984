//! Structural and basic-suitability scorer: an additive 100-point scale
//! over bed/bath/area breakpoints, structure type, county, and price band.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::{contains_any, MULTI_STORY_KEYWORDS, SINGLE_STORY_KEYWORDS, TARGET_COUNTIES};
use crate::types::{Listing, Money, Score};

// Breakpoint tables, highest tier first. The first row whose threshold the
// listing meets supplies the points.
const BEDROOM_TIERS: &[(u32, u32)] = &[(4, 25), (3, 15)];
const BATHROOM_TIERS: &[(Decimal, u32)] = &[(dec!(3), 20), (dec!(2), 15)];
const SQFT_TIERS: &[(Decimal, u32)] = &[(dec!(2500), 20), (dec!(2000), 15)];

const TARGET_PRICE_MIN: Money = dec!(300000);
const TARGET_PRICE_MAX: Money = dec!(1500000);

/// Basic suitability assessment with human-readable findings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BasicAnalysis {
    /// Additive points out of 100.
    pub score: Score,
    pub strengths: Vec<String>,
    pub issues: Vec<String>,
}

/// Score the listing's physical and locational fit for AFH use.
pub fn assess_basic(listing: &Listing) -> BasicAnalysis {
    let mut score: u32 = 0;
    let mut strengths = Vec::new();
    let mut issues = Vec::new();

    // Bedrooms: need at least 3, prefer 4+
    match BEDROOM_TIERS.iter().find(|(min, _)| listing.bedrooms >= *min) {
        Some((min, points)) => {
            score += points;
            let grade = if *min >= 4 { "Excellent" } else { "Good" };
            strengths.push(format!("{grade}: {} bedrooms", listing.bedrooms));
        }
        None => issues.push(format!("Insufficient bedrooms: {}", listing.bedrooms)),
    }

    // Bathrooms: need at least 2, prefer 3+
    match BATHROOM_TIERS
        .iter()
        .find(|(min, _)| listing.bathrooms >= *min)
    {
        Some((min, points)) => {
            score += points;
            let grade = if *min >= dec!(3) { "Excellent" } else { "Good" };
            strengths.push(format!("{grade}: {} bathrooms", listing.bathrooms));
        }
        None => issues.push(format!("Insufficient bathrooms: {}", listing.bathrooms)),
    }

    // Area: need 2000+, prefer 2500+
    match SQFT_TIERS.iter().find(|(min, _)| listing.sqft >= *min) {
        Some((min, points)) => {
            score += points;
            let grade = if *min >= dec!(2500) { "Excellent" } else { "Good" };
            strengths.push(format!("{grade}: {} sqft", listing.sqft));
        }
        None => issues.push(format!("Insufficient square footage: {} sqft", listing.sqft)),
    }

    // Structure type: single-story ideal, multi-story penalized, else neutral
    let property_type = listing.property_type.to_lowercase();
    if contains_any(&property_type, SINGLE_STORY_KEYWORDS) {
        score += 15;
        strengths.push("Single story - ideal for AFH".into());
    } else if contains_any(&property_type, MULTI_STORY_KEYWORDS) {
        score += 5;
        issues.push("Multi-story may require modifications".into());
    } else {
        score += 10;
    }

    // Target-county bonus
    let county = listing.county.to_lowercase();
    if TARGET_COUNTIES.iter().any(|t| county.contains(t)) {
        score += 10;
        strengths.push(format!("Target county: {county}"));
    } else {
        score += 5;
    }

    // Price band
    if listing.price >= TARGET_PRICE_MIN && listing.price <= TARGET_PRICE_MAX {
        score += 10;
        strengths.push(format!("Price in target range: ${}", listing.price));
    } else if listing.price > TARGET_PRICE_MAX {
        issues.push(format!("Price may be too high: ${}", listing.price));
    } else {
        score += 5;
        issues.push(format!("Price may be too low: ${}", listing.price));
    }

    BasicAnalysis {
        score: Score::from(score.min(100)),
        strengths,
        issues,
    }
}
