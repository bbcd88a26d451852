//! Analysis results

use super::operation::OperationCategory;
use crate::errors::{CostError, CostResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Pipeline stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageKind {
    FeatureExtraction,
    Preprocessing,
    Classification,
}

impl StageKind {
    pub const ALL: [StageKind; 3] = [
        Self::FeatureExtraction,
        Self::Preprocessing,
        Self::Classification,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FeatureExtraction => "feature_extraction",
            Self::Preprocessing => "preprocessing",
            Self::Classification => "classification",
        }
    }
}

/// Per-stage sums (feature extraction, preprocessing, classification)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageBreakdown {
    pub feature_extraction: i64,
    pub preprocessing: i64,
    pub classification: i64,
}

impl StageBreakdown {
    pub fn get(&self, stage: StageKind) -> i64 {
        match stage {
            StageKind::FeatureExtraction => self.feature_extraction,
            StageKind::Preprocessing => self.preprocessing,
            StageKind::Classification => self.classification,
        }
    }

    pub fn set(&mut self, stage: StageKind, value: i64) {
        match stage {
            StageKind::FeatureExtraction => self.feature_extraction = value,
            StageKind::Preprocessing => self.preprocessing = value,
            StageKind::Classification => self.classification = value,
        }
    }

    pub fn as_tuple(&self) -> (i64, i64, i64) {
        (self.feature_extraction, self.preprocessing, self.classification)
    }

    /// Sum over all stages
    pub fn total(&self) -> CostResult<i64> {
        self.feature_extraction
            .checked_add(self.preprocessing)
            .and_then(|sum| sum.checked_add(self.classification))
            .ok_or_else(|| CostError::overflow("stage total"))
    }

    pub fn is_zero(&self) -> bool {
        self.as_tuple() == (0, 0, 0)
    }
}

/// Serializable summary of one pipeline's estimate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostReport {
    /// Categories with a non-zero contribution
    pub operations: BTreeMap<OperationCategory, StageBreakdown>,
    pub total_operations: i64,
    pub integer_space: StageBreakdown,
    pub float_space: StageBreakdown,
    pub total_space: i64,
}

impl CostReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Operations for `category` (zero when absent from the report)
    pub fn operations_for(&self, category: OperationCategory) -> StageBreakdown {
        self.operations.get(&category).copied().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakdown_total() {
        let breakdown = StageBreakdown {
            feature_extraction: 4,
            preprocessing: 0,
            classification: 20,
        };
        assert_eq!(breakdown.total().unwrap(), 24);
        assert_eq!(breakdown.as_tuple(), (4, 0, 20));
        assert!(!breakdown.is_zero());
    }

    #[test]
    fn test_breakdown_total_overflow() {
        let breakdown = StageBreakdown {
            feature_extraction: i64::MAX,
            preprocessing: 1,
            classification: 0,
        };
        assert!(matches!(
            breakdown.total(),
            Err(CostError::ArithmeticOverflow { .. })
        ));
    }

    #[test]
    fn test_set_and_get() {
        let mut breakdown = StageBreakdown::default();
        for (i, stage) in StageKind::ALL.into_iter().enumerate() {
            breakdown.set(stage, i as i64 + 1);
        }
        assert_eq!(breakdown.as_tuple(), (1, 2, 3));
        assert_eq!(breakdown.get(StageKind::Preprocessing), 2);
    }

    #[test]
    fn test_report_json_uses_category_names() {
        let mut operations = BTreeMap::new();
        operations.insert(
            OperationCategory::Multiply,
            StageBreakdown {
                classification: 24,
                ..Default::default()
            },
        );
        let report = CostReport {
            operations,
            total_operations: 24,
            integer_space: StageBreakdown::default(),
            float_space: StageBreakdown::default(),
            total_space: 0,
        };
        let json = report.to_json().unwrap();
        assert!(json.contains("\"MULTIPLY\""));
        assert_eq!(
            report.operations_for(OperationCategory::Add),
            StageBreakdown::default()
        );
    }
}
