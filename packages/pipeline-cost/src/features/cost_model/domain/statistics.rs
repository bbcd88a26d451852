//! Trained pipeline statistics
//!
//! Read-only snapshot produced by training. Every count is optional so an
//! untrained (or partially trained) model reports which value is missing
//! instead of resolving against a silent zero.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Primary statistics a multiplier can depend on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Statistic {
    Attributes,
    Classes,
    UserSelectedAttributes,
    Instances,
    LinesPerFeature,
}

impl Statistic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Attributes => "attributes",
            Self::Classes => "classes",
            Self::UserSelectedAttributes => "user_selected_attributes",
            Self::Instances => "instances",
            Self::LinesPerFeature => "lines_per_feature",
        }
    }
}

/// Dataset facts of a fitted pipeline
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrainedStatistics {
    /// Attribute count after training
    pub attributes: Option<u64>,
    /// Class count after training
    pub classes: Option<u64>,
    /// Attribute count chosen by the user before training
    pub user_selected_attributes: Option<u64>,
    /// Training instance count
    pub instances: Option<u64>,
    /// Input lines per feature window
    pub lines_per_feature: Option<u64>,
    /// Attribute/feature names retained after training
    pub features: BTreeSet<String>,
}

impl TrainedStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attributes(mut self, attributes: u64) -> Self {
        self.attributes = Some(attributes);
        self
    }

    pub fn with_classes(mut self, classes: u64) -> Self {
        self.classes = Some(classes);
        self
    }

    pub fn with_user_selected_attributes(mut self, count: u64) -> Self {
        self.user_selected_attributes = Some(count);
        self
    }

    pub fn with_instances(mut self, instances: u64) -> Self {
        self.instances = Some(instances);
        self
    }

    pub fn with_lines_per_feature(mut self, lines: u64) -> Self {
        self.lines_per_feature = Some(lines);
        self
    }

    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features.extend(features.into_iter().map(Into::into));
        self
    }

    /// Value of a primary statistic
    pub fn get(&self, statistic: Statistic) -> Option<u64> {
        match statistic {
            Statistic::Attributes => self.attributes,
            Statistic::Classes => self.classes,
            Statistic::UserSelectedAttributes => self.user_selected_attributes,
            Statistic::Instances => self.instances,
            Statistic::LinesPerFeature => self.lines_per_feature,
        }
    }
}
