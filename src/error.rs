//! Error Types
//!
//! Failure taxonomy for the advisor core. Scoring inputs are rejected before
//! any points are computed, classifier output is validated before reduction,
//! and catalog lookups surface unknown crop names to the caller.

/// Errors produced by the advisor core
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AdvisorError {
    /// Classifier probability vector is absent or malformed.
    /// Recoverable: callers fall back to rule-based scoring.
    #[error("invalid probability distribution: {reason}")]
    InvalidDistribution { reason: String },

    /// A crop name was queried that the catalog does not contain
    #[error("unknown crop: {name}")]
    UnknownCrop { name: String },

    /// Non-finite or out-of-domain numeric input, rejected before scoring
    #[error("invalid input: {field} = {value}")]
    InvalidInput { field: &'static str, value: f64 },

    /// A soil or season label outside the recognized class lists
    #[error("unrecognized {kind} label: {label}")]
    InvalidLabel { kind: &'static str, label: String },
}

/// Result alias for core advisor operations
pub type Result<T> = std::result::Result<T, AdvisorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = AdvisorError::InvalidDistribution {
            reason: "length 2, expected 3".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid probability distribution: length 2, expected 3"
        );

        let err = AdvisorError::UnknownCrop {
            name: "Dragonfruit".to_string(),
        };
        assert_eq!(err.to_string(), "unknown crop: Dragonfruit");

        let err = AdvisorError::InvalidInput {
            field: "humidity",
            value: 140.0,
        };
        assert_eq!(err.to_string(), "invalid input: humidity = 140");
    }
}
