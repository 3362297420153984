//! Scoring aggregator: the financial composite sub-score, the weighted
//! overall viability score, and the recommendations list.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::assess::{BasicAnalysis, LicensingAnalysis};
use crate::config::{AnalysisConfig, ScoreWeights};
use crate::financial::FinancialAnalysis;
use crate::pricing::PricingAnalysis;
use crate::risk::{RiskAnalysis, RiskLevel};
use crate::types::{LicenseStatus, Score};

// Tier tables, highest tier first: (multiple of the configured minimum,
// points). The first row the metric clears supplies the points.
const CASH_FLOW_TIERS: &[(Decimal, Decimal)] =
    &[(dec!(1.5), dec!(40)), (dec!(1.0), dec!(30)), (dec!(0.5), dec!(20))];
const CAP_RATE_TIERS: &[(Decimal, Decimal)] =
    &[(dec!(1.2), dec!(30)), (dec!(1.0), dec!(25)), (dec!(0.8), dec!(15))];
// DSCR tiers are absolute, not relative to configuration.
const DSCR_TIERS: &[(Decimal, Decimal)] =
    &[(dec!(1.5), dec!(30)), (dec!(1.25), dec!(25)), (dec!(1.0), dec!(20))];

/// Threshold below which the basic sub-score triggers a modification note.
const BASIC_RECOMMENDATION_FLOOR: Decimal = dec!(70);

/// The five weighted sub-scores feeding the overall score, post-inversion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub basic: Score,
    pub financial: Score,
    pub market: Score,
    pub licensing: Score,
    /// Inverted risk: 100 minus the accumulated risk score.
    pub risk: Score,
}

// ---------------------------------------------------------------------------
// Financial composite
// ---------------------------------------------------------------------------

/// 100-point composite over cash-flow, cap-rate, and DSCR tiers.
pub fn financial_score(financial: &FinancialAnalysis, config: &AnalysisConfig) -> Score {
    let cash_flow_points = tier_points(
        financial.monthly_cash_flow,
        config.min_cash_flow,
        CASH_FLOW_TIERS,
    );
    let cap_rate_points = tier_points(financial.cap_rate, config.min_cap_rate, CAP_RATE_TIERS);
    let dscr_points = tier_points(financial.dscr, Decimal::ONE, DSCR_TIERS);

    (cash_flow_points + cap_rate_points + dscr_points).min(dec!(100))
}

fn tier_points(value: Decimal, reference: Decimal, tiers: &[(Decimal, Decimal)]) -> Decimal {
    tiers
        .iter()
        .find(|(multiple, _)| value >= multiple * reference)
        .map(|(_, points)| *points)
        .unwrap_or(Decimal::ZERO)
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Weighted overall viability score, rounded to one decimal place.
pub fn aggregate_score(breakdown: &ScoreBreakdown, weights: &ScoreWeights) -> Score {
    let total = breakdown.basic * weights.basic
        + breakdown.financial * weights.financial
        + breakdown.market * weights.market
        + breakdown.licensing * weights.licensing
        + breakdown.risk * weights.risk;
    total.round_dp(1)
}

/// Invert the risk sub-score so that lower risk raises viability.
pub fn invert_risk(risk: &RiskAnalysis) -> Score {
    dec!(100) - risk.score
}

// ---------------------------------------------------------------------------
// Recommendations
// ---------------------------------------------------------------------------

/// Compose the recommendations list. Condition order is fixed: basic fit,
/// cash flow, licensing status, risk tier, then pricing.
pub fn recommendations(
    basic: &BasicAnalysis,
    financial: &FinancialAnalysis,
    licensing: &LicensingAnalysis,
    risk: &RiskAnalysis,
    pricing: &PricingAnalysis,
    config: &AnalysisConfig,
) -> Vec<String> {
    let mut recs = Vec::new();

    if basic.score < BASIC_RECOMMENDATION_FLOOR {
        recs.push("Property may need modifications to meet AFH requirements".into());
    }

    if financial.monthly_cash_flow < config.min_cash_flow {
        recs.push("Consider negotiating price down to improve cash flow".into());
        recs.push("Evaluate financing options for better terms".into());
    }

    match licensing.status {
        LicenseStatus::None => {
            recs.push("Budget for licensing inspection and modifications".into());
            recs.push(
                "Request an inspection contingency and confirm the licensing timeline \
                 with the state agency"
                    .into(),
            );
        }
        LicenseStatus::Unknown => {
            recs.push("Verify licensing status before making an offer".into());
        }
        _ => {}
    }

    if risk.level == RiskLevel::High {
        recs.push("Conduct thorough property inspection".into());
        recs.push("Consider professional property evaluation".into());
    }

    if pricing.current_price > pricing.optimal_price {
        recs.push(format!(
            "Target negotiation price: ${}",
            pricing.negotiation_target.round_dp(0)
        ));
        recs.push("Use AFH-specific factors in negotiation".into());
    }

    recs
}
