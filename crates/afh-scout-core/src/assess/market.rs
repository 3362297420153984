//! Market-position scorer: price per square foot against a per-county
//! reference table of average price, demand, and competition.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::{Listing, Money, Score};

// ---------------------------------------------------------------------------
// Reference data
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DemandLevel {
    High,
    #[default]
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompetitionLevel {
    High,
    #[default]
    Medium,
    Low,
}

/// Reference market tuple for one county.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountyMarket {
    pub avg_price_per_sqft: Money,
    pub demand: DemandLevel,
    pub competition: CompetitionLevel,
}

const COUNTY_MARKETS: &[(&str, CountyMarket)] = &[
    (
        "king",
        CountyMarket {
            avg_price_per_sqft: dec!(400),
            demand: DemandLevel::High,
            competition: CompetitionLevel::High,
        },
    ),
    (
        "pierce",
        CountyMarket {
            avg_price_per_sqft: dec!(250),
            demand: DemandLevel::Medium,
            competition: CompetitionLevel::Medium,
        },
    ),
    (
        "thurston",
        CountyMarket {
            avg_price_per_sqft: dec!(200),
            demand: DemandLevel::Medium,
            competition: CompetitionLevel::Low,
        },
    ),
    (
        "lewis",
        CountyMarket {
            avg_price_per_sqft: dec!(150),
            demand: DemandLevel::Low,
            competition: CompetitionLevel::Low,
        },
    ),
];

/// Fallback tuple for counties outside the reference table.
const DEFAULT_MARKET: CountyMarket = CountyMarket {
    avg_price_per_sqft: dec!(250),
    demand: DemandLevel::Medium,
    competition: CompetitionLevel::Medium,
};

/// Band around the reference average treated as "at market".
const AT_MARKET_BAND: Decimal = dec!(0.1);

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketComparison {
    BelowMarket,
    #[default]
    AtMarket,
    AboveMarket,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketAnalysis {
    /// Zero when the listing has no recorded area.
    pub price_per_sqft: Money,
    pub market_avg_price_per_sqft: Money,
    pub market_comparison: MarketComparison,
    pub market_demand: DemandLevel,
    pub competition_level: CompetitionLevel,
    pub county: String,
    pub score: Score,
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// Score the listing's price position against its county reference market.
pub fn assess_market(listing: &Listing) -> MarketAnalysis {
    let county = listing.county.to_lowercase();

    let price_per_sqft = if listing.sqft.is_zero() {
        Decimal::ZERO
    } else {
        listing.price / listing.sqft
    };

    let market = COUNTY_MARKETS
        .iter()
        .find(|(key, _)| county.contains(key))
        .map(|(_, market)| *market)
        .unwrap_or(DEFAULT_MARKET);

    let below_bound = market.avg_price_per_sqft * (Decimal::ONE - AT_MARKET_BAND);
    let above_bound = market.avg_price_per_sqft * (Decimal::ONE + AT_MARKET_BAND);
    let market_comparison = if price_per_sqft < below_bound {
        MarketComparison::BelowMarket
    } else if price_per_sqft > above_bound {
        MarketComparison::AboveMarket
    } else {
        MarketComparison::AtMarket
    };

    let comparison_points: u32 = match market_comparison {
        MarketComparison::BelowMarket => 30,
        MarketComparison::AtMarket => 20,
        MarketComparison::AboveMarket => 0,
    };
    let demand_points: u32 = match market.demand {
        DemandLevel::High => 20,
        DemandLevel::Medium => 10,
        DemandLevel::Low => 0,
    };

    MarketAnalysis {
        price_per_sqft,
        market_avg_price_per_sqft: market.avg_price_per_sqft,
        market_comparison,
        market_demand: market.demand,
        competition_level: market.competition,
        county,
        score: Score::from((50 + comparison_points + demand_points).min(100)),
    }
}
