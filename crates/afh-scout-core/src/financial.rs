//! Monthly operating pro-forma for a listing run as an adult family home:
//! payer-mix revenue, fixed expenses, acquisition debt service, cash flow,
//! cap rate, and DSCR.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::config::AnalysisConfig;
use crate::types::{Listing, Money, Rate};

/// Loan-to-value assumed on acquisition financing.
pub const LOAN_TO_VALUE: Rate = dec!(0.8);
/// Fixed annual note rate on acquisition debt.
pub const ANNUAL_INTEREST_RATE: Rate = dec!(0.06);
/// 30-year fully amortizing term.
pub const LOAN_TERM_MONTHS: u32 = 360;

/// Share of resident capacity assumed on the subsidized (Medicaid) rate,
/// floored to whole residents. The remainder pays the private rate.
const MEDICAID_MIX_NUMERATOR: u32 = 6;
const MEDICAID_MIX_DENOMINATOR: u32 = 10;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RevenueBreakdown {
    pub medicaid: Money,
    pub private_pay: Money,
    pub total: Money,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResidentMix {
    pub medicaid: u32,
    pub private_pay: u32,
    pub total: u32,
}

/// Projected monthly economics for one listing under one configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialAnalysis {
    pub purchase_price: Money,
    pub loan_amount: Money,
    pub monthly_payment: Money,
    pub monthly_revenue: RevenueBreakdown,
    pub monthly_expenses: Money,
    pub monthly_cash_flow: Money,
    pub annual_cash_flow: Money,
    /// Annualized NOI over purchase price. Zero for a zero-price listing.
    pub cap_rate: Rate,
    /// NOI over debt service. Zero when there is no debt service.
    pub dscr: Decimal,
    pub occupancy_assumption: Rate,
    pub resident_mix: ResidentMix,
}

// ---------------------------------------------------------------------------
// Projection
// ---------------------------------------------------------------------------

/// Project the monthly economics of operating `listing` as an AFH.
///
/// Degenerate inputs resolve to defined zeros: a zero price carries zero
/// loan, payment, and cap rate; a zero payment carries zero DSCR. The
/// projection never fails.
pub fn project_financials(listing: &Listing, config: &AnalysisConfig) -> FinancialAnalysis {
    let capacity = listing.bedrooms;
    // floor(capacity * 0.6) in integer arithmetic
    let medicaid_residents = capacity * MEDICAID_MIX_NUMERATOR / MEDICAID_MIX_DENOMINATOR;
    let private_residents = capacity - medicaid_residents;

    let days = dec!(30);
    let medicaid_revenue = Decimal::from(medicaid_residents)
        * config.medicaid_rate_per_day
        * days
        * config.occupancy_rate;
    let private_revenue = Decimal::from(private_residents)
        * config.private_pay_rate_per_day
        * days
        * config.occupancy_rate;
    let total_revenue = medicaid_revenue + private_revenue;

    let monthly_expenses = config.monthly_expenses();

    let loan_amount = listing.price * LOAN_TO_VALUE;
    let payment = monthly_payment(
        loan_amount,
        ANNUAL_INTEREST_RATE / dec!(12),
        LOAN_TERM_MONTHS,
    );

    let monthly_cash_flow = total_revenue - monthly_expenses - payment;
    let noi = total_revenue - monthly_expenses;

    let cap_rate = if listing.price.is_zero() {
        Decimal::ZERO
    } else {
        noi * dec!(12) / listing.price
    };

    let dscr = if payment.is_zero() {
        Decimal::ZERO
    } else {
        noi / payment
    };

    FinancialAnalysis {
        purchase_price: listing.price,
        loan_amount,
        monthly_payment: payment,
        monthly_revenue: RevenueBreakdown {
            medicaid: medicaid_revenue,
            private_pay: private_revenue,
            total: total_revenue,
        },
        monthly_expenses,
        monthly_cash_flow,
        annual_cash_flow: monthly_cash_flow * dec!(12),
        cap_rate,
        dscr,
        occupancy_assumption: config.occupancy_rate,
        resident_mix: ResidentMix {
            medicaid: medicaid_residents,
            private_pay: private_residents,
            total: capacity,
        },
    }
}

// ---------------------------------------------------------------------------
// Amortization helpers
// ---------------------------------------------------------------------------

/// (1 + r)^n via iterative multiplication.
pub(crate) fn compound_factor(monthly_rate: Rate, months: u32) -> Decimal {
    let mut factor = Decimal::ONE;
    for _ in 0..months {
        factor *= Decimal::ONE + monthly_rate;
    }
    factor
}

/// Standard fixed-rate payment: L * r(1+r)^n / ((1+r)^n - 1).
///
/// A zero principal or zero term means no debt and a zero payment. A zero
/// rate degrades to straight-line amortization.
pub fn monthly_payment(principal: Money, monthly_rate: Rate, months: u32) -> Money {
    if principal.is_zero() || months == 0 {
        return Decimal::ZERO;
    }
    if monthly_rate.is_zero() {
        return principal / Decimal::from(months);
    }
    let compound = compound_factor(monthly_rate, months);
    principal * monthly_rate * compound / (compound - Decimal::ONE)
}

/// Invert the payment formula: the largest loan a given monthly payment
/// services over `months` at `monthly_rate`.
pub fn max_loan_for_payment(payment: Money, monthly_rate: Rate, months: u32) -> Money {
    if payment <= Decimal::ZERO || months == 0 {
        return Decimal::ZERO;
    }
    if monthly_rate.is_zero() {
        return payment * Decimal::from(months);
    }
    let compound = compound_factor(monthly_rate, months);
    payment * (compound - Decimal::ONE) / (monthly_rate * compound)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
