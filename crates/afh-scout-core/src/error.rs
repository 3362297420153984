use thiserror::Error;

/// The only fatal path in the engine: everything downstream of a valid
/// configuration resolves degenerate inputs to defined values instead of
/// erroring.
#[derive(Debug, Error)]
pub enum ScoutError {
    #[error("Invalid configuration for {field}: {reason}")]
    InvalidConfig { field: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_message() {
        let err = ScoutError::InvalidConfig {
            field: "weights".into(),
            reason: "Aggregation weights must sum to 1.0, got 0.9".into(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid configuration for weights: Aggregation weights must sum to 1.0, got 0.9"
        );
    }
}
