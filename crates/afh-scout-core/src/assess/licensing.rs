//! Licensing-readiness scorer: base score from the licensing status plus
//! keyword signals in the listing text, with a timeline/cost estimate.

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::{LicenseStatus, Listing, Money, Score};

/// Bonus points for readiness signals in the listing description.
const KEYWORD_BONUSES: &[(&str, u32)] = &[
    ("dshs", 20),
    ("licensed", 25),
    ("inspection", 15),
    ("ready", 20),
    ("turnkey", 15),
    ("renovated", 10),
];

const MAX_SCORE: u32 = 100;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LicensingAnalysis {
    pub status: LicenseStatus,
    /// Status base score plus keyword bonus, capped at 100.
    pub score: Score,
    pub keyword_bonus: u32,
    /// Expected path to licensed operation given the current status.
    pub licensing_timeline: String,
    pub estimated_licensing_cost: Money,
}

/// Score how close the listing is to licensed AFH operation.
pub fn assess_licensing(listing: &Listing) -> LicensingAnalysis {
    let base = status_base_score(listing.license_status);

    let description = listing.description.to_lowercase();
    let keyword_bonus: u32 = KEYWORD_BONUSES
        .iter()
        .filter(|(keyword, _)| description.contains(keyword))
        .map(|(_, bonus)| bonus)
        .sum();

    let (licensing_timeline, estimated_licensing_cost) = timeline_estimate(listing.license_status);

    LicensingAnalysis {
        status: listing.license_status,
        score: Score::from((base + keyword_bonus).min(MAX_SCORE)),
        keyword_bonus,
        licensing_timeline,
        estimated_licensing_cost,
    }
}

fn status_base_score(status: LicenseStatus) -> u32 {
    match status {
        LicenseStatus::Approved => 100,
        LicenseStatus::Inspected => 80,
        LicenseStatus::Mentioned => 60,
        LicenseStatus::None => 20,
        LicenseStatus::Unknown => 30,
    }
}

fn timeline_estimate(status: LicenseStatus) -> (String, Money) {
    match status {
        LicenseStatus::Approved => ("1-3 months".into(), dec!(5000)),
        LicenseStatus::Inspected => ("3-6 months".into(), dec!(10000)),
        _ => ("6-12 months".into(), dec!(20000)),
    }
}
