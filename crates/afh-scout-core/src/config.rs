use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::ScoutError;
use crate::types::{Money, Rate, Score};
use crate::ScoutResult;

// ---------------------------------------------------------------------------
// Weights
// ---------------------------------------------------------------------------

/// Aggregation weights for the five sub-scores. Must sum to exactly 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    #[serde(default = "defaults::basic_weight")]
    pub basic: Rate,
    #[serde(default = "defaults::financial_weight")]
    pub financial: Rate,
    #[serde(default = "defaults::market_weight")]
    pub market: Rate,
    #[serde(default = "defaults::licensing_weight")]
    pub licensing: Rate,
    #[serde(default = "defaults::risk_weight")]
    pub risk: Rate,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        ScoreWeights {
            basic: defaults::basic_weight(),
            financial: defaults::financial_weight(),
            market: defaults::market_weight(),
            licensing: defaults::licensing_weight(),
            risk: defaults::risk_weight(),
        }
    }
}

impl ScoreWeights {
    pub fn sum(&self) -> Rate {
        self.basic + self.financial + self.market + self.licensing + self.risk
    }
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Immutable per-run analysis configuration.
///
/// Field names match the recognized settings-file options. Every field is
/// serde-defaulted so a partial settings file deserializes cleanly; call
/// [`AnalysisConfig::validate`] before analysis to reject inconsistent
/// values (the only fatal error path in the engine).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Daily reimbursement for subsidized (Medicaid) residents.
    pub medicaid_rate_per_day: Money,
    /// Daily rate for private-pay residents.
    pub private_pay_rate_per_day: Money,
    /// Assumed occupancy fraction across all beds.
    pub occupancy_rate: Rate,

    // Fixed monthly operating expenses.
    pub utilities: Money,
    pub insurance: Money,
    pub maintenance: Money,
    pub supplies: Money,
    pub licensing_fees: Money,

    /// Minimum acceptable monthly cash flow after debt service.
    pub min_cash_flow: Money,
    /// Minimum acceptable capitalization rate.
    pub min_cap_rate: Rate,
    /// Maximum acceptable loan-to-value on acquisition debt.
    pub max_debt_ratio: Rate,

    pub weights: ScoreWeights,
    /// Overall score at or above which a listing is considered viable.
    pub viability_threshold: Score,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            medicaid_rate_per_day: dec!(120),
            private_pay_rate_per_day: dec!(200),
            occupancy_rate: dec!(0.85),
            utilities: dec!(800),
            insurance: dec!(400),
            maintenance: dec!(600),
            supplies: dec!(500),
            licensing_fees: dec!(200),
            min_cash_flow: dec!(3000),
            min_cap_rate: dec!(0.08),
            max_debt_ratio: dec!(0.75),
            weights: ScoreWeights::default(),
            viability_threshold: dec!(70),
        }
    }
}

impl AnalysisConfig {
    /// Sum of the five fixed monthly operating-expense components.
    pub fn monthly_expenses(&self) -> Money {
        self.utilities + self.insurance + self.maintenance + self.supplies + self.licensing_fees
    }

    /// Reject configurations that would poison every downstream analysis.
    pub fn validate(&self) -> ScoutResult<()> {
        let weight_fields = [
            ("weights.basic", self.weights.basic),
            ("weights.financial", self.weights.financial),
            ("weights.market", self.weights.market),
            ("weights.licensing", self.weights.licensing),
            ("weights.risk", self.weights.risk),
        ];
        for (field, value) in weight_fields {
            if value < Decimal::ZERO {
                return Err(ScoutError::InvalidConfig {
                    field: field.into(),
                    reason: "Aggregation weights must be non-negative".into(),
                });
            }
        }

        let sum = self.weights.sum();
        if sum != Decimal::ONE {
            return Err(ScoutError::InvalidConfig {
                field: "weights".into(),
                reason: format!("Aggregation weights must sum to 1.0, got {sum}"),
            });
        }

        let non_negative = [
            ("medicaid_rate_per_day", self.medicaid_rate_per_day),
            ("private_pay_rate_per_day", self.private_pay_rate_per_day),
            ("utilities", self.utilities),
            ("insurance", self.insurance),
            ("maintenance", self.maintenance),
            ("supplies", self.supplies),
            ("licensing_fees", self.licensing_fees),
            ("min_cash_flow", self.min_cash_flow),
            ("min_cap_rate", self.min_cap_rate),
            ("max_debt_ratio", self.max_debt_ratio),
        ];
        for (field, value) in non_negative {
            if value < Decimal::ZERO {
                return Err(ScoutError::InvalidConfig {
                    field: field.into(),
                    reason: "Value must be non-negative".into(),
                });
            }
        }

        if self.occupancy_rate < Decimal::ZERO || self.occupancy_rate > Decimal::ONE {
            return Err(ScoutError::InvalidConfig {
                field: "occupancy_rate".into(),
                reason: "Occupancy must be between 0 and 1".into(),
            });
        }

        if self.viability_threshold < Decimal::ZERO || self.viability_threshold > dec!(100) {
            return Err(ScoutError::InvalidConfig {
                field: "viability_threshold".into(),
                reason: "Threshold must be between 0 and 100".into(),
            });
        }

        Ok(())
    }
}

mod defaults {
    use super::Rate;
    use rust_decimal_macros::dec;

    pub fn basic_weight() -> Rate {
        dec!(0.25)
    }
    pub fn financial_weight() -> Rate {
        dec!(0.30)
    }
    pub fn market_weight() -> Rate {
        dec!(0.15)
    }
    pub fn licensing_weight() -> Rate {
        dec!(0.20)
    }
    pub fn risk_weight() -> Rate {
        dec!(0.10)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
