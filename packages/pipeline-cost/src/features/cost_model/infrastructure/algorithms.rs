//! Bundled algorithm instances
//!
//! Each variant carries the trained state its override hook needs.

use super::builtin::{hook_names, names};
use crate::errors::{CostError, CostResult};
use crate::features::cost_model::domain::{Factor, Statistic, TrainedStatistics};
use crate::features::cost_model::ports::{AlgorithmInstance, MultiplierOverride};

/// Algorithm without algorithm-specific multipliers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogAlgorithm {
    name: String,
}

impl CatalogAlgorithm {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl MultiplierOverride for CatalogAlgorithm {
    fn try_resolve_multiplier(&self, _name: &str) -> Option<Factor> {
        None
    }
}

impl AlgorithmInstance for CatalogAlgorithm {
    fn algorithm_name(&self) -> &str {
        &self.name
    }
}

/// Radix-2 FFT feature extractor
///
/// The transform size is the next power of two at or above the window
/// length. All derived values use integer arithmetic, so window lengths
/// that are already powers of two map to themselves exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FftFeatureExtractor {
    lines_per_feature: u64,
    fft_size: u64,
    unit_square_roots: Factor,
    recursions: Factor,
}

impl FftFeatureExtractor {
    pub fn new(lines_per_feature: u64) -> CostResult<Self> {
        let overflow = || CostError::overflow(format!("FFT size for window {}", lines_per_feature));

        let fft_size = lines_per_feature
            .max(1)
            .checked_next_power_of_two()
            .ok_or_else(overflow)?;
        let size = Factor::try_from(fft_size).map_err(|_| overflow())?;
        let log2 = Factor::from(fft_size.trailing_zeros());

        // Partial geometric sum 1 + 2 + ... + n/2 = -(1 - n)
        let unit_square_roots = -(1 - size);
        // T(n) = 2T(n/2) + n/2, T(1) = 0  =>  T(n) = n/2 * log2(n)
        let recursions = (size / 2).checked_mul(log2).ok_or_else(overflow)?;

        Ok(Self {
            lines_per_feature,
            fft_size,
            unit_square_roots,
            recursions,
        })
    }

    pub fn lines_per_feature(&self) -> u64 {
        self.lines_per_feature
    }

    pub fn fft_size(&self) -> u64 {
        self.fft_size
    }
}

impl MultiplierOverride for FftFeatureExtractor {
    fn try_resolve_multiplier(&self, name: &str) -> Option<Factor> {
        match name {
            hook_names::UNIT_SQUARE_ROOTS => Some(self.unit_square_roots),
            hook_names::RECURSIONS => Some(self.recursions),
            _ => None,
        }
    }
}

impl AlgorithmInstance for FftFeatureExtractor {
    fn algorithm_name(&self) -> &str {
        names::FFT
    }

    /// The hook factors and `LINES_PER_FEATURE` must describe the same window
    fn check_statistics(&self, stats: &TrainedStatistics) -> CostResult<()> {
        match stats.lines_per_feature {
            Some(actual) if actual != self.lines_per_feature => {
                Err(CostError::InconsistentStatistic {
                    algorithm: names::FFT.to_string(),
                    statistic: Statistic::LinesPerFeature.as_str(),
                    expected: self.lines_per_feature,
                    actual,
                })
            }
            _ => Ok(()),
        }
    }
}

/// Trained support vector classifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportVectorClassifier {
    support_vectors: Factor,
}

impl SupportVectorClassifier {
    pub fn new(support_vectors: u32) -> Self {
        Self {
            support_vectors: Factor::from(support_vectors),
        }
    }
}

impl MultiplierOverride for SupportVectorClassifier {
    fn try_resolve_multiplier(&self, name: &str) -> Option<Factor> {
        (name == hook_names::SUPPORT_VECTORS).then_some(self.support_vectors)
    }
}

impl AlgorithmInstance for SupportVectorClassifier {
    fn algorithm_name(&self) -> &str {
        names::SVM
    }
}

/// Trained decision tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionTreeClassifier {
    depth: Factor,
    nodes: Factor,
}

impl DecisionTreeClassifier {
    pub fn new(depth: u32, nodes: u32) -> Self {
        Self {
            depth: Factor::from(depth),
            nodes: Factor::from(nodes),
        }
    }
}

impl MultiplierOverride for DecisionTreeClassifier {
    fn try_resolve_multiplier(&self, name: &str) -> Option<Factor> {
        match name {
            hook_names::TREE_DEPTH => Some(self.depth),
            hook_names::TREE_NODES => Some(self.nodes),
            _ => None,
        }
    }
}

impl AlgorithmInstance for DecisionTreeClassifier {
    fn algorithm_name(&self) -> &str {
        names::DECISION_TREE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fft_window_five() {
        let fft = FftFeatureExtractor::new(5).unwrap();
        assert_eq!(fft.fft_size(), 8);
        assert_eq!(fft.try_resolve_multiplier("numberOfUnitSquareRoots"), Some(7));
        assert_eq!(fft.try_resolve_multiplier("numberOfRecursions"), Some(12));
    }

    #[test]
    fn test_fft_power_of_two_boundaries() {
        let cases = [(1, 1, 0, 0), (2, 2, 1, 1), (4, 4, 3, 4), (8, 8, 7, 12), (9, 16, 15, 32)];
        for (window, size, roots, recursions) in cases {
            let fft = FftFeatureExtractor::new(window).unwrap();
            assert_eq!(fft.fft_size(), size, "window {}", window);
            assert_eq!(
                fft.try_resolve_multiplier(hook_names::UNIT_SQUARE_ROOTS),
                Some(roots)
            );
            assert_eq!(
                fft.try_resolve_multiplier(hook_names::RECURSIONS),
                Some(recursions)
            );
        }
    }

    #[test]
    fn test_fft_zero_window_uses_size_one() {
        let fft = FftFeatureExtractor::new(0).unwrap();
        assert_eq!(fft.fft_size(), 1);
        assert_eq!(fft.try_resolve_multiplier(hook_names::RECURSIONS), Some(0));
    }

    #[test]
    fn test_fft_oversized_window_fails() {
        assert!(matches!(
            FftFeatureExtractor::new(u64::MAX),
            Err(CostError::ArithmeticOverflow { .. })
        ));
    }

    #[test]
    fn test_fft_leaves_other_names_untouched() {
        let fft = FftFeatureExtractor::new(5).unwrap();
        assert_eq!(fft.try_resolve_multiplier("ATTRIBUTES"), None);
        assert_eq!(fft.algorithm_name(), "fft");
    }

    #[test]
    fn test_fft_window_must_match_statistics() {
        let fft = FftFeatureExtractor::new(5).unwrap();
        assert!(fft
            .check_statistics(&TrainedStatistics::new().with_lines_per_feature(5))
            .is_ok());
        assert!(fft.check_statistics(&TrainedStatistics::new()).is_ok());

        let err = fft
            .check_statistics(&TrainedStatistics::new().with_lines_per_feature(64))
            .unwrap_err();
        assert!(matches!(
            err,
            CostError::InconsistentStatistic {
                statistic: "lines_per_feature",
                expected: 5,
                actual: 64,
                ..
            }
        ));
    }

    #[test]
    fn test_classifier_hooks() {
        let svm = SupportVectorClassifier::new(42);
        assert_eq!(svm.try_resolve_multiplier("numberOfSupportVectors"), Some(42));
        assert_eq!(svm.try_resolve_multiplier("treeDepth"), None);

        let tree = DecisionTreeClassifier::new(4, 15);
        assert_eq!(tree.try_resolve_multiplier("treeDepth"), Some(4));
        assert_eq!(tree.try_resolve_multiplier("numberOfNodes"), Some(15));
        assert_eq!(tree.try_resolve_multiplier("numberOfSupportVectors"), None);
    }

    #[test]
    fn test_catalog_algorithm_has_no_hook() {
        let mean = CatalogAlgorithm::new("mean");
        assert_eq!(mean.algorithm_name(), "mean");
        assert_eq!(mean.try_resolve_multiplier("ATTRIBUTES"), None);
    }
}
