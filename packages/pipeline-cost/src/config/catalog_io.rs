//! Catalog I/O (YAML)
//!
//! Defines the versioned YAML schema for cost catalogs. Loading and
//! validation live in `features::cost_model::infrastructure::catalog`.

use super::error::{ConfigError, ConfigResult};
use crate::features::cost_model::domain::{
    AlgorithmCostProfile, CatalogEntry, CostDeclaration, FeatureGate, MultiplierKind,
    OperationCategory, OperationDeclaration, QuantityKind, SpaceDeclaration,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Versions this crate can read
pub const SUPPORTED_VERSIONS: [u32; 1] = [1];

/// YAML Schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogExportV1 {
    /// Schema version (always 1 for v1)
    pub version: Option<u32>,

    #[serde(default)]
    pub algorithms: Vec<AlgorithmSpecV1>,
}

/// Cost declarations of one algorithm type
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AlgorithmSpecV1 {
    pub name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub operations: Vec<OperationSpecV1>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub spaces: Vec<SpaceSpecV1>,
}

/// Operation declaration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OperationSpecV1 {
    pub counts: BTreeMap<OperationCategory, u64>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub multipliers: Vec<MultiplierKind>,

    /// Feature gate: active iff any of these features survived training
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depends_on: Option<BTreeSet<String>>,
}

/// Space declaration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpaceSpecV1 {
    pub kind: QuantityKind,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub multipliers: Vec<MultiplierKind>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depends_on: Option<BTreeSet<String>>,
}

impl CatalogExportV1 {
    /// Parse and version-check a YAML document
    pub fn parse(content: &str) -> ConfigResult<Self> {
        let export: CatalogExportV1 = serde_yaml::from_str(content)?;

        match export.version {
            None => Err(ConfigError::MissingVersion),
            Some(found) if !SUPPORTED_VERSIONS.contains(&found) => {
                Err(ConfigError::UnsupportedVersion {
                    found,
                    supported: SUPPORTED_VERSIONS.to_vec(),
                })
            }
            Some(_) => Ok(export),
        }
    }

    pub fn into_profiles(self) -> Vec<AlgorithmCostProfile> {
        self.algorithms
            .into_iter()
            .map(AlgorithmSpecV1::into_profile)
            .collect()
    }

    pub fn from_profiles<'a, I>(profiles: I) -> Self
    where
        I: IntoIterator<Item = &'a AlgorithmCostProfile>,
    {
        Self {
            version: Some(1),
            algorithms: profiles.into_iter().map(AlgorithmSpecV1::from_profile).collect(),
        }
    }
}

impl AlgorithmSpecV1 {
    fn into_profile(self) -> AlgorithmCostProfile {
        AlgorithmCostProfile {
            name: self.name,
            operations: self
                .operations
                .into_iter()
                .map(|op| {
                    CatalogEntry::gated(
                        OperationDeclaration::new(op.counts, op.multipliers),
                        gate_from(op.depends_on),
                    )
                })
                .collect(),
            spaces: self
                .spaces
                .into_iter()
                .map(|space| {
                    CatalogEntry::gated(
                        SpaceDeclaration::new(space.kind, space.multipliers),
                        gate_from(space.depends_on),
                    )
                })
                .collect(),
        }
    }

    fn from_profile(profile: &AlgorithmCostProfile) -> Self {
        Self {
            name: profile.name.clone(),
            operations: profile
                .operations
                .iter()
                .map(|entry| OperationSpecV1 {
                    counts: entry.declaration.counts().clone(),
                    multipliers: entry.declaration.multiplier_kinds().to_vec(),
                    depends_on: entry.gate.features().cloned(),
                })
                .collect(),
            spaces: profile
                .spaces
                .iter()
                .map(|entry| SpaceSpecV1 {
                    kind: entry.declaration.kind(),
                    multipliers: entry.declaration.multiplier_kinds().to_vec(),
                    depends_on: entry.gate.features().cloned(),
                })
                .collect(),
        }
    }
}

fn gate_from(depends_on: Option<BTreeSet<String>>) -> FeatureGate {
    match depends_on {
        Some(features) => FeatureGate::AnyOf(features),
        None => FeatureGate::Always,
    }
}
