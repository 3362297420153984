//! Risk assessor: accumulates a bounded score from independent risk
//! signals and classifies it into a tier.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::{LicenseStatus, Listing, Money, Score};

const PRICE_UPPER_EXTREME: Money = dec!(1200000);
const PRICE_LOWER_EXTREME: Money = dec!(400000);
const SQFT_FLOOR: Decimal = dec!(2200);

const CONDITION_RISK_KEYWORDS: &[&str] = &["needs work", "fixer"];
const CONDITION_POSITIVE_KEYWORDS: &[&str] = &["turnkey", "renovated"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "low"),
            RiskLevel::Medium => write!(f, "medium"),
            RiskLevel::High => write!(f, "high"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskAnalysis {
    /// Accumulated risk, clamped to [0, 100].
    pub score: Score,
    pub level: RiskLevel,
    /// One note per triggered risk rule.
    pub risks: Vec<String>,
}

/// Accumulate risk signals for the listing. Positive condition keywords
/// subtract risk; the final score is clamped to [0, 100].
pub fn assess_risk(listing: &Listing) -> RiskAnalysis {
    let mut score: i32 = 0;
    let mut risks = Vec::new();

    // Price extremes
    if listing.price > PRICE_UPPER_EXTREME {
        risks.push("High purchase price may limit financing options".into());
        score += 20;
    } else if listing.price < PRICE_LOWER_EXTREME {
        risks.push("Low price may indicate property issues".into());
        score += 15;
    }

    // Low-demand target area
    if listing.county.to_lowercase().contains("lewis") {
        risks.push("Lewis County has lower demand and longer licensing times".into());
        score += 10;
    }

    // Condition signals in the listing text
    let description = listing.description.to_lowercase();
    if CONDITION_RISK_KEYWORDS.iter().any(|k| description.contains(k)) {
        risks.push("Property may require significant renovations".into());
        score += 25;
    } else if CONDITION_POSITIVE_KEYWORDS
        .iter()
        .any(|k| description.contains(k))
    {
        score -= 10;
    }

    // Licensing gaps
    match listing.license_status {
        LicenseStatus::None => {
            risks.push("No licensing approval - significant licensing risk".into());
            score += 30;
        }
        LicenseStatus::Unknown => {
            risks.push("Unknown licensing status - verification needed".into());
            score += 15;
        }
        _ => {}
    }

    // Undersized area
    if listing.sqft < SQFT_FLOOR {
        risks.push("Smaller property may limit resident capacity".into());
        score += 10;
    }

    let clamped = score.clamp(0, 100);
    RiskAnalysis {
        score: Score::from(clamped),
        level: classify_risk(clamped),
        risks,
    }
}

fn classify_risk(score: i32) -> RiskLevel {
    if score < 30 {
        RiskLevel::Low
    } else if score < 60 {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn clean_listing() -> Listing {
        Listing {
            address: "100 Cedar Ln".into(),
            county: "King".into(),
            price: dec!(750000),
            bedrooms: 4,
            bathrooms: dec!(3),
            sqft: dec!(2500),
            license_status: LicenseStatus::Approved,
            ..Listing::default()
        }
    }

    #[test]
    fn test_clean_listing_zero_risk() {
        let risk = assess_risk(&clean_listing());
        assert_eq!(risk.score, Decimal::ZERO);
        assert_eq!(risk.level, RiskLevel::Low);
        assert!(risk.risks.is_empty());
    }

    #[test]
    fn test_condition_and_licensing_risk_stack() {
        let mut listing = clean_listing();
        listing.license_status = LicenseStatus::None;
        listing.description = "needs work, fixer".into();
        let risk = assess_risk(&listing);
        // 25 condition + 30 no licensing
        assert_eq!(risk.score, dec!(55));
        assert_eq!(risk.level, RiskLevel::Medium);
        assert_eq!(risk.risks.len(), 2);
    }

    #[test]
    fn test_positive_condition_subtracts() {
        let mut listing = clean_listing();
        listing.license_status = LicenseStatus::Unknown; // +15
        listing.description = "fully renovated turnkey".into(); // -10
        let risk = assess_risk(&listing);
        assert_eq!(risk.score, dec!(5));
    }

    #[test]
    fn test_score_clamped_at_zero() {
        let mut listing = clean_listing();
        listing.description = "turnkey".into(); // -10 with nothing else
        let risk = assess_risk(&listing);
        assert_eq!(risk.score, Decimal::ZERO);
        assert_eq!(risk.level, RiskLevel::Low);
    }

    #[test]
    fn test_high_risk_accumulation() {
        let listing = Listing {
            county: "Lewis".into(),
            price: dec!(350000),
            sqft: dec!(1800),
            license_status: LicenseStatus::None,
            description: "fixer with potential".into(),
            ..Listing::default()
        };
        // 15 price + 10 lewis + 25 condition + 30 licensing + 10 sqft = 90
        let risk = assess_risk(&listing);
        assert_eq!(risk.score, dec!(90));
        assert_eq!(risk.level, RiskLevel::High);
        assert_eq!(risk.risks.len(), 5);
    }

    #[test]
    fn test_price_extremes() {
        let mut listing = clean_listing();
        listing.price = dec!(1300000);
        let risk = assess_risk(&listing);
        assert!(risk.risks.iter().any(|r| r.contains("High purchase price")));

        listing.price = dec!(350000);
        let risk = assess_risk(&listing);
        assert!(risk.risks.iter().any(|r| r.contains("Low price")));
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(classify_risk(29), RiskLevel::Low);
        assert_eq!(classify_risk(30), RiskLevel::Medium);
        assert_eq!(classify_risk(59), RiskLevel::Medium);
        assert_eq!(classify_risk(60), RiskLevel::High);
    }
}
