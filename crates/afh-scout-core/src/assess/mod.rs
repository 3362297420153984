//! Qualitative assessors: structural suitability, licensing readiness, and
//! market position. Each is a pure function of the listing with its rule
//! thresholds expressed as lookup tables.

pub mod basic;
pub mod licensing;
pub mod market;

pub use basic::{assess_basic, BasicAnalysis};
pub use licensing::{assess_licensing, LicensingAnalysis};
pub use market::{assess_market, MarketAnalysis};

/// Preferred counties for the AFH business model, lowercase.
pub const TARGET_COUNTIES: &[&str] = &["lewis", "thurston", "pierce", "king"];

/// Terms indicating a single-story layout, the ideal AFH structure.
pub const SINGLE_STORY_KEYWORDS: &[&str] = &[
    "rambler",
    "single story",
    "one story",
    "1 story",
    "ranch",
    "single level",
    "one level",
    "1 level",
];

/// Terms indicating a multi-story layout that would need modification.
pub const MULTI_STORY_KEYWORDS: &[&str] = &["two story", "multi"];

/// Case-insensitive "any keyword appears in text" scan.
pub(crate) fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}
