pub mod assess;
pub mod config;
pub mod engine;
pub mod error;
pub mod filter;
pub mod financial;
pub mod pricing;
pub mod risk;
pub mod scoring;
pub mod types;

pub use config::{AnalysisConfig, ScoreWeights};
pub use engine::{AnalysisEngine, AnalysisResult, AnalysisStatus};
pub use error::ScoutError;
pub use types::*;

/// Standard result type for all afh-scout operations
pub type ScoutResult<T> = Result<T, ScoutError>;
