//! Generic multiplier table
//!
//! Single source of truth for what a well-known multiplier name means in
//! terms of trained statistics.

use crate::errors::{CostError, CostResult};
use crate::features::cost_model::domain::{Factor, MultiplierKind, Statistic, TrainedStatistics};

/// Resolves well-known multipliers against trained statistics
#[derive(Debug, Clone, Copy, Default)]
pub struct MultiplierResolver;

impl MultiplierResolver {
    pub fn new() -> Self {
        Self
    }

    /// Resolve `kind` to a concrete factor
    ///
    /// Fails with `UnknownMultiplier` for algorithm-specific names (those
    /// must be handled by the owning algorithm's hook) and with
    /// `MissingStatistic` when the statistic is absent.
    pub fn resolve(
        &self,
        kind: &MultiplierKind,
        stats: &TrainedStatistics,
        algorithm: &str,
    ) -> CostResult<Factor> {
        let stat = |statistic: Statistic| require(stats, statistic, kind);

        match kind {
            MultiplierKind::Attributes => stat(Statistic::Attributes),
            MultiplierKind::AttributesMinusOne => minus_one(stat(Statistic::Attributes)?, kind),
            MultiplierKind::Classes => stat(Statistic::Classes),
            MultiplierKind::ClassesMinusOne => minus_one(stat(Statistic::Classes)?, kind),
            MultiplierKind::UserSelectedAttributes => stat(Statistic::UserSelectedAttributes),
            MultiplierKind::Instances => stat(Statistic::Instances),
            MultiplierKind::LinesPerFeature => stat(Statistic::LinesPerFeature),
            MultiplierKind::LinesPerFeatureMinusOne => {
                minus_one(stat(Statistic::LinesPerFeature)?, kind)
            }
            MultiplierKind::GaussSumOfLinesPerFeatureMinusOne => {
                let n = minus_one(stat(Statistic::LinesPerFeature)?, kind)?;
                gauss_sum(n).ok_or_else(|| CostError::overflow(kind.as_str()))
            }
            MultiplierKind::Constant => Ok(1),
            MultiplierKind::Custom(name) => Err(CostError::unknown_multiplier(name, algorithm)),
        }
    }
}

fn require(
    stats: &TrainedStatistics,
    statistic: Statistic,
    kind: &MultiplierKind,
) -> CostResult<Factor> {
    let value = stats
        .get(statistic)
        .ok_or_else(|| CostError::MissingStatistic {
            statistic: statistic.as_str(),
            multiplier: kind.to_string(),
        })?;
    Factor::try_from(value).map_err(|_| CostError::overflow(statistic.as_str()))
}

fn minus_one(value: Factor, kind: &MultiplierKind) -> CostResult<Factor> {
    value
        .checked_sub(1)
        .ok_or_else(|| CostError::overflow(kind.as_str()))
}

/// Triangular number n(n+1)/2
fn gauss_sum(n: Factor) -> Option<Factor> {
    // One of n, n+1 is even, so divide that one first.
    let next = n.checked_add(1)?;
    if n % 2 == 0 {
        (n / 2).checked_mul(next)
    } else {
        n.checked_mul(next / 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> TrainedStatistics {
        TrainedStatistics::new()
            .with_attributes(6)
            .with_classes(3)
            .with_user_selected_attributes(4)
            .with_instances(120)
            .with_lines_per_feature(5)
    }

    fn resolve(name: &str) -> CostResult<Factor> {
        MultiplierResolver::new().resolve(&MultiplierKind::parse(name), &stats(), "test")
    }

    #[test]
    fn test_vocabulary_table() {
        assert_eq!(resolve("ATTRIBUTES").unwrap(), 6);
        assert_eq!(resolve("ATTRIBUTES_MINUS_ONE").unwrap(), 5);
        assert_eq!(resolve("CLASSES").unwrap(), 3);
        assert_eq!(resolve("CLASSES_MINUS_ONE").unwrap(), 2);
        assert_eq!(resolve("USER_SELECTED_ATTRIBUTES").unwrap(), 4);
        assert_eq!(resolve("INSTANCES").unwrap(), 120);
        assert_eq!(resolve("LINES_PER_FEATURE").unwrap(), 5);
        assert_eq!(resolve("LINES_PER_FEATURE_MINUS_ONE").unwrap(), 4);
        assert_eq!(resolve("GAUSS_SUM_OF_LINES_PER_FEATURE_MINUS_ONE").unwrap(), 10);
        assert_eq!(resolve("CONSTANT").unwrap(), 1);
    }

    #[test]
    fn test_unknown_name_fails() {
        match resolve("ATRIBUTES") {
            Err(CostError::UnknownMultiplier { name, algorithm }) => {
                assert_eq!(name, "ATRIBUTES");
                assert_eq!(algorithm, "test");
            }
            other => panic!("expected UnknownMultiplier, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_statistic() {
        let result = MultiplierResolver::new().resolve(
            &MultiplierKind::ClassesMinusOne,
            &TrainedStatistics::new(),
            "svm",
        );
        assert!(matches!(
            result,
            Err(CostError::MissingStatistic {
                statistic: "classes",
                ..
            })
        ));
    }

    #[test]
    fn test_constant_needs_no_statistics() {
        let result = MultiplierResolver::new().resolve(
            &MultiplierKind::Constant,
            &TrainedStatistics::new(),
            "any",
        );
        assert_eq!(result.unwrap(), 1);
    }

    #[test]
    fn test_minus_one_of_zero_is_negative() {
        let stats = TrainedStatistics::new().with_classes(0);
        let result =
            MultiplierResolver::new().resolve(&MultiplierKind::ClassesMinusOne, &stats, "x");
        assert_eq!(result.unwrap(), -1);
    }

    #[test]
    fn test_gauss_sum() {
        assert_eq!(gauss_sum(-1), Some(0));
        assert_eq!(gauss_sum(0), Some(0));
        assert_eq!(gauss_sum(1), Some(1));
        assert_eq!(gauss_sum(4), Some(10));
        assert_eq!(gauss_sum(7), Some(28));
        assert_eq!(gauss_sum(i64::MAX), None);
    }

    #[test]
    fn test_statistic_too_large_for_factor() {
        let stats = TrainedStatistics::new().with_instances(u64::MAX);
        let result = MultiplierResolver::new().resolve(&MultiplierKind::Instances, &stats, "x");
        assert!(matches!(result, Err(CostError::ArithmeticOverflow { .. })));
    }
}
