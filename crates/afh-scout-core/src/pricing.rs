//! Pricing optimizer: inverts the debt-service math to find the maximum
//! justified purchase price, reconciles it with a cap-rate-implied price,
//! and derives a negotiation strategy.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::config::AnalysisConfig;
use crate::financial::{
    max_loan_for_payment, FinancialAnalysis, ANNUAL_INTEREST_RATE, LOAN_TERM_MONTHS, LOAN_TO_VALUE,
};
use crate::types::{LicenseStatus, Listing, Money, Rate};

/// Discount applied to the optimal price to set the opening target.
const NEGOTIATION_DISCOUNT: Decimal = dec!(0.95);

/// Overpricing bands (fraction over optimal) driving the strategy text.
const WALK_AWAY_BAND: Decimal = dec!(20);
const STRONG_POSITION_BAND: Decimal = dec!(10);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PricingAnalysis {
    pub current_price: Money,
    /// Reconciled recommendation: the binding constraint of the two bounds.
    pub optimal_price: Money,
    /// Cash-flow bound: highest price that still clears `min_cash_flow`.
    pub max_price: Money,
    /// Cap-rate bound: price implied by the minimum acceptable cap rate.
    pub cap_rate_price: Money,
    pub negotiation_target: Money,
    pub negotiation_strategy: Vec<String>,
    pub price_difference: Money,
    /// Percent over (positive) or under (negative) the optimal price.
    pub price_difference_pct: Rate,
}

/// Compute the optimal acquisition price and a negotiation plan.
///
/// Reconciliation takes the lower of the two bounds when both are positive,
/// otherwise whichever is positive, otherwise zero. Raising `min_cash_flow`
/// can only shrink the cash-flow bound, so the optimal price is monotone
/// non-increasing in the cash-flow target.
pub fn optimize_pricing(
    listing: &Listing,
    financial: &FinancialAnalysis,
    config: &AnalysisConfig,
) -> PricingAnalysis {
    let revenue = financial.monthly_revenue.total;
    let expenses = financial.monthly_expenses;

    // Largest debt payment that still leaves the configured cash flow
    let max_monthly_payment = revenue - expenses - config.min_cash_flow;
    let max_price = if max_monthly_payment > Decimal::ZERO {
        let max_loan = max_loan_for_payment(
            max_monthly_payment,
            ANNUAL_INTEREST_RATE / dec!(12),
            LOAN_TERM_MONTHS,
        );
        max_loan / LOAN_TO_VALUE
    } else {
        Decimal::ZERO
    };

    // Price at which annualized NOI meets the minimum cap rate. A zero-price
    // listing has no defined price-based ratio, so this bound is pinned to
    // zero rather than projected from income alone.
    let annual_noi = (revenue - expenses) * dec!(12);
    let cap_rate_price = if listing.price.is_zero() || config.min_cap_rate.is_zero() {
        Decimal::ZERO
    } else {
        annual_noi / config.min_cap_rate
    };

    let optimal_price = if max_price > Decimal::ZERO && cap_rate_price > Decimal::ZERO {
        max_price.min(cap_rate_price)
    } else {
        max_price.max(cap_rate_price).max(Decimal::ZERO)
    };

    let price_difference = listing.price - optimal_price;
    let price_difference_pct = if listing.price.is_zero() {
        Decimal::ZERO
    } else {
        price_difference / listing.price * dec!(100)
    };

    PricingAnalysis {
        current_price: listing.price,
        optimal_price,
        max_price,
        cap_rate_price,
        negotiation_target: optimal_price * NEGOTIATION_DISCOUNT,
        negotiation_strategy: negotiation_strategy(listing, optimal_price, price_difference_pct),
        price_difference,
        price_difference_pct,
    }
}

// ---------------------------------------------------------------------------
// Strategy text
// ---------------------------------------------------------------------------

fn negotiation_strategy(
    listing: &Listing,
    optimal_price: Money,
    over_pct: Rate,
) -> Vec<String> {
    let mut strategies = Vec::new();

    if listing.price > optimal_price {
        if over_pct > WALK_AWAY_BAND {
            strategies.push("Property significantly overpriced - consider walking away".into());
        } else if over_pct > STRONG_POSITION_BAND {
            strategies.push("Strong negotiation position - target 15-20% reduction".into());
        } else {
            strategies.push("Moderate negotiation needed - target 5-10% reduction".into());
        }

        if listing.license_status == LicenseStatus::None {
            strategies.push("Use lack of licensing approval as major negotiation point".into());
            strategies.push("Request 20-30% reduction for licensing uncertainty".into());
        }

        if listing.description.to_lowercase().contains("needs work") {
            strategies.push("Use renovation needs as negotiation leverage".into());
            strategies.push("Request inspection contingency".into());
        }

        strategies.push("Emphasize cash offer and quick closing".into());
        strategies.push("Highlight specialized use case (AFH) limiting buyer pool".into());
    } else {
        strategies.push("Property priced reasonably - consider full price offer".into());
        strategies.push("Emphasize quick closing and cash offer".into());
        strategies.push("Highlight serious buyer status".into());
    }

    strategies
}
