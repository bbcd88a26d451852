//! Error types for pipeline-cost
//!
//! Every failure aborts the whole analysis call. Totals are never returned
//! with a term silently dropped.

use crate::config::ConfigError;
use thiserror::Error;

/// Main error type for cost analysis operations
#[derive(Debug, Error)]
pub enum CostError {
    /// Multiplier name handled neither by the algorithm hook nor the generic table
    #[error("Unknown multiplier '{name}' (algorithm '{algorithm}')")]
    UnknownMultiplier { name: String, algorithm: String },

    /// Trained statistics lack a value needed by a multiplier
    #[error("Missing statistic '{statistic}' required by multiplier '{multiplier}'. Was the pipeline trained?")]
    MissingStatistic {
        statistic: &'static str,
        multiplier: String,
    },

    /// A product or sum left the i64 range
    #[error("Arithmetic overflow while computing {context}")]
    ArithmeticOverflow { context: String },

    /// Pipeline built without any classification algorithm
    #[error("Classification stage must contain at least one algorithm")]
    EmptyClassificationStage,

    /// Algorithm instance was trained on different data than the statistics describe
    #[error("Algorithm '{algorithm}' was trained with {statistic}={expected}, but the pipeline statistics give {actual}")]
    InconsistentStatistic {
        algorithm: String,
        statistic: &'static str,
        expected: u64,
        actual: u64,
    },

    /// Algorithm instance refers to a catalog entry that does not exist
    #[error("Unknown algorithm '{name}'. {suggestion}")]
    UnknownAlgorithm { name: String, suggestion: String },

    /// Catalog loading or validation error
    #[error("Catalog error: {0}")]
    Catalog(#[from] ConfigError),
}

impl CostError {
    /// Create an unknown multiplier error
    pub fn unknown_multiplier(name: impl Into<String>, algorithm: impl Into<String>) -> Self {
        CostError::UnknownMultiplier {
            name: name.into(),
            algorithm: algorithm.into(),
        }
    }

    /// Create an overflow error
    pub fn overflow(context: impl Into<String>) -> Self {
        CostError::ArithmeticOverflow {
            context: context.into(),
        }
    }
}

/// Result type alias for cost analysis operations
pub type CostResult<T> = std::result::Result<T, CostError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_multiplier_message_names_offender() {
        let err = CostError::unknown_multiplier("ATRIBUTES", "mean");
        let msg = err.to_string();
        assert!(msg.contains("ATRIBUTES"));
        assert!(msg.contains("mean"));
    }

    #[test]
    fn test_missing_statistic_message_names_statistic() {
        let err = CostError::MissingStatistic {
            statistic: "classes",
            multiplier: "CLASSES".to_string(),
        };
        assert!(err.to_string().contains("classes"));
    }
}
