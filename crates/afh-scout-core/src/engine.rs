//! Top-level analysis engine: validated construction, composition of the
//! sub-assessments into one `AnalysisResult`, and batch isolation.

use std::panic::{self, AssertUnwindSafe};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::assess::{
    assess_basic, assess_licensing, assess_market, BasicAnalysis, LicensingAnalysis,
    MarketAnalysis,
};
use crate::config::AnalysisConfig;
use crate::financial::{project_financials, FinancialAnalysis};
use crate::pricing::{optimize_pricing, PricingAnalysis};
use crate::risk::{assess_risk, RiskAnalysis};
use crate::scoring::{
    aggregate_score, financial_score, invert_risk, recommendations, ScoreBreakdown,
};
use crate::types::{Listing, Score};
use crate::ScoutResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Whether a result carries a real assessment or a degraded placeholder.
///
/// A zero score from a genuinely poor listing is `Scored`; a result the
/// engine could not produce is `Failed` with the reason attached.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnalysisStatus {
    #[default]
    Scored,
    Failed {
        reason: String,
    },
}

/// Complete viability assessment for one listing under one configuration.
/// Immutable once returned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// The listing as analyzed, echoed for identification in batch output.
    pub listing: Listing,
    /// Weighted overall score in [0, 100], one decimal place.
    pub score: Score,
    pub viable: bool,
    pub status: AnalysisStatus,
    pub breakdown: ScoreBreakdown,
    pub basic: BasicAnalysis,
    pub financial: FinancialAnalysis,
    pub market: MarketAnalysis,
    pub licensing: LicensingAnalysis,
    pub risk: RiskAnalysis,
    pub pricing: PricingAnalysis,
    pub recommendations: Vec<String>,
    pub analyzed_at: DateTime<Utc>,
}

impl AnalysisResult {
    /// Degraded placeholder for a listing the engine failed to score.
    fn failed(listing: Listing, reason: String, analyzed_at: DateTime<Utc>) -> Self {
        AnalysisResult {
            listing,
            score: Decimal::ZERO,
            viable: false,
            status: AnalysisStatus::Failed { reason },
            analyzed_at,
            ..AnalysisResult::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// The viability analysis engine. Holds the validated, read-only
/// configuration; all scoring is a pure function of (listing, config).
#[derive(Debug, Clone)]
pub struct AnalysisEngine {
    config: AnalysisConfig,
}

impl AnalysisEngine {
    /// Validate the configuration and build an engine. Configuration
    /// problems are the only errors surfaced before analysis.
    pub fn new(config: AnalysisConfig) -> ScoutResult<Self> {
        config.validate()?;
        Ok(AnalysisEngine { config })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyze one listing. Never returns an error: an unexpected failure
    /// inside the scoring path is absorbed into a degraded `Failed` result
    /// so that batch callers stay isolated from each other.
    pub fn analyze(&self, listing: &Listing) -> AnalysisResult {
        let analyzed_at = Utc::now();
        match panic::catch_unwind(AssertUnwindSafe(|| self.score_listing(listing))) {
            Ok(mut result) => {
                result.analyzed_at = analyzed_at;
                result
            }
            Err(payload) => {
                AnalysisResult::failed(listing.clone(), panic_reason(payload), analyzed_at)
            }
        }
    }

    /// Analyze a batch. Results are positionally aligned with the input;
    /// a failure on one listing never aborts the rest.
    pub fn analyze_batch(&self, listings: &[Listing]) -> Vec<AnalysisResult> {
        listings.iter().map(|l| self.analyze(l)).collect()
    }

    /// Pure scoring path; the caller stamps the timestamp.
    fn score_listing(&self, listing: &Listing) -> AnalysisResult {
        let basic = assess_basic(listing);
        let financial = project_financials(listing, &self.config);
        let market = assess_market(listing);
        let licensing = assess_licensing(listing);
        let risk = assess_risk(listing);

        let pricing = optimize_pricing(listing, &financial, &self.config);

        let breakdown = ScoreBreakdown {
            basic: basic.score,
            financial: financial_score(&financial, &self.config),
            market: market.score,
            licensing: licensing.score,
            risk: invert_risk(&risk),
        };
        let score = aggregate_score(&breakdown, &self.config.weights);
        let viable = score >= self.config.viability_threshold;

        let recommendations =
            recommendations(&basic, &financial, &licensing, &risk, &pricing, &self.config);

        AnalysisResult {
            listing: listing.clone(),
            score,
            viable,
            status: AnalysisStatus::Scored,
            breakdown,
            basic,
            financial,
            market,
            licensing,
            risk,
            pricing,
            recommendations,
            analyzed_at: DateTime::<Utc>::MIN_UTC,
        }
    }
}

fn panic_reason(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "analysis panicked".to_string()
    }
}
