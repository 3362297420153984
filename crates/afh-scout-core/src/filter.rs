//! Coarse eligibility gate run before the analysis engine: independent
//! boolean predicates over the raw listing, plus a reporting summary.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::assess::TARGET_COUNTIES;
use crate::types::{Listing, Money};

/// Fallback city lists for target-area membership when the county field is
/// missing or unrecognized.
const COUNTY_CITIES: &[(&str, &[&str])] = &[
    ("lewis", &["centralia", "chehalis", "morton", "packwood"]),
    ("thurston", &["olympia", "lacey", "tumwater", "yelm"]),
    (
        "pierce",
        &[
            "tacoma",
            "puyallup",
            "lakewood",
            "university place",
            "federal way",
            "auburn",
            "kent",
            "renton",
        ],
    ),
    (
        "king",
        &[
            "seattle",
            "bellevue",
            "kirkland",
            "redmond",
            "renton",
            "kent",
            "auburn",
            "federal way",
            "bothell",
            "lynnwood",
            "mountlake terrace",
        ],
    ),
];

// ---------------------------------------------------------------------------
// Criteria
// ---------------------------------------------------------------------------

/// Filter thresholds. Serde-defaulted so a partial criteria file works.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    /// Lowercased before matching.
    pub target_counties: Vec<String>,
    pub min_bedrooms: u32,
    pub min_bathrooms: Decimal,
    pub min_sqft: Decimal,
    pub min_price: Money,
    pub max_price: Money,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        FilterCriteria {
            target_counties: TARGET_COUNTIES.iter().map(|c| c.to_string()).collect(),
            min_bedrooms: 3,
            min_bathrooms: dec!(2),
            min_sqft: dec!(2000),
            min_price: dec!(300000),
            max_price: dec!(1500000),
        }
    }
}

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

/// Price-bucket counts over the listings that passed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceBuckets {
    pub under_500k: u32,
    #[serde(rename = "500k_750k")]
    pub from_500k: u32,
    #[serde(rename = "750k_1m")]
    pub from_750k: u32,
    #[serde(rename = "1m_1.5m")]
    pub from_1m: u32,
    #[serde(rename = "over_1.5m")]
    pub over_1_5m: u32,
}

/// Reporting side effect of a filter run. Has no influence on scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSummary {
    pub total: usize,
    pub passed: usize,
    pub by_county: BTreeMap<String, u32>,
    pub by_price: PriceBuckets,
    pub by_license_status: BTreeMap<String, u32>,
    /// One entry per skipped malformed record.
    pub warnings: Vec<String>,
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Apply all criteria predicates (logical AND) to each listing.
///
/// Structure type is deliberately not a predicate: multi-story listings
/// pass through and take the basic scorer's penalty instead.
///
/// Malformed records (no address and no price) are skipped with a warning in
/// the summary rather than failing the run.
pub fn filter_listings(
    listings: &[Listing],
    criteria: &FilterCriteria,
) -> (Vec<Listing>, FilterSummary) {
    let mut summary = FilterSummary {
        total: listings.len(),
        ..FilterSummary::default()
    };
    let mut passed = Vec::new();

    for listing in listings {
        if listing.address.is_empty() && listing.price.is_zero() {
            summary
                .warnings
                .push("Skipped malformed record with no address or price".into());
            continue;
        }

        if meets_criteria(listing, criteria) {
            record_in_summary(&mut summary, listing);
            passed.push(listing.clone());
        }
    }

    summary.passed = passed.len();
    (passed, summary)
}

fn meets_criteria(listing: &Listing, criteria: &FilterCriteria) -> bool {
    in_target_area(listing, criteria)
        && listing.bedrooms >= criteria.min_bedrooms
        && listing.bathrooms >= criteria.min_bathrooms
        && listing.sqft >= criteria.min_sqft
        && listing.price >= criteria.min_price
        && listing.price <= criteria.max_price
}

/// County substring match against the target list, with a city-based
/// fallback for records whose county field is unusable. The fallback only
/// consults the city lists of counties actually in the target list, so
/// narrowing `target_counties` narrows the fallback too.
fn in_target_area(listing: &Listing, criteria: &FilterCriteria) -> bool {
    let county = listing.county.to_lowercase();
    if criteria
        .target_counties
        .iter()
        .any(|t| county.contains(&t.to_lowercase()))
    {
        return true;
    }

    let city = listing.city.to_lowercase();
    if city.is_empty() {
        return false;
    }
    COUNTY_CITIES
        .iter()
        .filter(|(key, _)| {
            criteria
                .target_counties
                .iter()
                .any(|t| t.eq_ignore_ascii_case(key))
        })
        .any(|(_, cities)| cities.iter().any(|c| city.contains(c)))
}

fn record_in_summary(summary: &mut FilterSummary, listing: &Listing) {
    let county_key = if listing.county.is_empty() {
        "Unknown".to_string()
    } else {
        listing.county.clone()
    };
    *summary.by_county.entry(county_key).or_insert(0) += 1;

    let buckets = &mut summary.by_price;
    if listing.price < dec!(500000) {
        buckets.under_500k += 1;
    } else if listing.price < dec!(750000) {
        buckets.from_500k += 1;
    } else if listing.price < dec!(1000000) {
        buckets.from_750k += 1;
    } else if listing.price < dec!(1500000) {
        buckets.from_1m += 1;
    } else {
        buckets.over_1_5m += 1;
    }

    *summary
        .by_license_status
        .entry(listing.license_status.as_str().to_string())
        .or_insert(0) += 1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LicenseStatus;

    fn eligible_listing() -> Listing {
        Listing {
            address: "100 Cedar Ln".into(),
            city: "Olympia".into(),
            county: "Thurston".into(),
            price: dec!(600000),
            bedrooms: 4,
            bathrooms: dec!(2.5),
            sqft: dec!(2300),
            property_type: "rambler".into(),
            license_status: LicenseStatus::Inspected,
            ..Listing::default()
        }
    }

    #[test]
    fn test_eligible_listing_passes() {
        let (passed, summary) = filter_listings(&[eligible_listing()], &FilterCriteria::default());
        assert_eq!(passed.len(), 1);
        assert_eq!(summary.total, 1);
        assert_eq!(summary.passed, 1);
        assert_eq!(summary.by_county.get("Thurston"), Some(&1));
        assert_eq!(summary.by_price.from_500k, 1);
        assert_eq!(summary.by_license_status.get("inspected"), Some(&1));
    }

    #[test]
    fn test_each_threshold_filters() {
        let criteria = FilterCriteria::default();
        let cases: Vec<Box<dyn Fn(&mut Listing)>> = vec![
            Box::new(|l| l.bedrooms = 2),
            Box::new(|l| l.bathrooms = dec!(1.5)),
            Box::new(|l| l.sqft = dec!(1800)),
            Box::new(|l| l.price = dec!(250000)),
            Box::new(|l| l.price = dec!(1600000)),
            Box::new(|l| l.county = "Spokane".into()),
        ];
        for (i, mutate) in cases.iter().enumerate() {
            let mut listing = eligible_listing();
            listing.city = String::new(); // no city fallback
            mutate(&mut listing);
            let (passed, _) = filter_listings(&[listing], &criteria);
            assert!(passed.is_empty(), "case {i} should have been filtered");
        }
    }

    #[test]
    fn test_city_fallback_for_unrecognized_county() {
        let mut listing = eligible_listing();
        listing.county = String::new();
        listing.city = "Tacoma".into();
        let (passed, _) = filter_listings(&[listing], &FilterCriteria::default());
        assert_eq!(passed.len(), 1);
    }

    #[test]
    fn test_city_fallback_respects_target_list() {
        let mut criteria = FilterCriteria::default();
        criteria.target_counties = vec!["lewis".into()];
        let mut listing = eligible_listing();
        listing.county = String::new();
        listing.city = "Seattle".into(); // King city, not Lewis
        let (passed, _) = filter_listings(&[listing], &criteria);
        assert!(passed.is_empty());
    }

    #[test]
    fn test_no_structure_keywords_passes() {
        let mut listing = eligible_listing();
        listing.property_type = "residential".into();
        let (passed, _) = filter_listings(&[listing], &FilterCriteria::default());
        assert_eq!(passed.len(), 1);
    }

    #[test]
    fn test_multi_story_type_passes_through_to_scoring() {
        let mut listing = Listing {
            address: "410 Hilltop Dr".into(),
            county: "King".into(),
            price: dec!(600000),
            bedrooms: 4,
            bathrooms: dec!(2.5),
            sqft: dec!(2300),
            property_type: "two story".into(),
            ..Listing::default()
        };
        let (passed, _) = filter_listings(&[listing.clone()], &FilterCriteria::default());
        assert_eq!(passed.len(), 1);

        listing.property_type = "multi-level".into();
        let (passed, _) = filter_listings(&[listing], &FilterCriteria::default());
        assert_eq!(passed.len(), 1);
    }

    #[test]
    fn test_malformed_record_skipped_with_warning() {
        let malformed = Listing::default();
        let (passed, summary) =
            filter_listings(&[malformed, eligible_listing()], &FilterCriteria::default());
        assert_eq!(passed.len(), 1);
        assert_eq!(summary.warnings.len(), 1);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.passed, 1);
    }

    #[test]
    fn test_price_buckets() {
        let prices = [
            dec!(450000),
            dec!(600000),
            dec!(800000),
            dec!(1200000),
            dec!(1500000),
        ];
        let listings: Vec<Listing> = prices
            .iter()
            .map(|p| {
                let mut l = eligible_listing();
                l.price = *p;
                l
            })
            .collect();
        let (_, summary) = filter_listings(&listings, &FilterCriteria::default());
        assert_eq!(summary.by_price.under_500k, 1);
        assert_eq!(summary.by_price.from_500k, 1);
        assert_eq!(summary.by_price.from_750k, 1);
        assert_eq!(summary.by_price.from_1m, 1);
        assert_eq!(summary.by_price.over_1_5m, 1);
    }
}
