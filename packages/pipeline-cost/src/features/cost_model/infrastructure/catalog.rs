//! Cost catalog
//!
//! Immutable collection of static cost declarations, keyed by algorithm
//! name. Built once and shared read-only (behind `Arc`) by every pipeline.

use crate::config::catalog_io::CatalogExportV1;
use crate::config::error::{find_closest_match, ConfigError, ConfigResult};
use crate::config::validation::Validatable;
use crate::config::CATALOG_ENV_VAR;
use crate::errors::{CostError, CostResult};
use crate::features::cost_model::domain::AlgorithmCostProfile;
use crate::features::cost_model::infrastructure::builtin::builtin_profiles;
use std::collections::BTreeMap;
use std::path::Path;

/// Operation and space catalog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CostCatalog {
    profiles: BTreeMap<String, AlgorithmCostProfile>,
}

impl CostCatalog {
    /// Empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from profiles, rejecting duplicates and invalid entries
    pub fn from_profiles<I>(profiles: I) -> ConfigResult<Self>
    where
        I: IntoIterator<Item = AlgorithmCostProfile>,
    {
        let mut catalog = Self::new();
        for profile in profiles {
            catalog.insert(profile)?;
        }
        catalog.validate()?;
        Ok(catalog)
    }

    fn insert(&mut self, profile: AlgorithmCostProfile) -> ConfigResult<()> {
        if self.profiles.contains_key(&profile.name) {
            return Err(ConfigError::DuplicateAlgorithm(profile.name));
        }
        self.profiles.insert(profile.name.clone(), profile);
        Ok(())
    }

    /// Load a catalog from a YAML file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_yaml_str(&content)?;
        tracing::info!(
            "cost_catalog_loaded (path={}, algorithms={})",
            path.display(),
            catalog.len()
        );
        Ok(catalog)
    }

    /// Parse a catalog from YAML text
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let export = CatalogExportV1::parse(content)?;
        Self::from_profiles(export.into_profiles())
    }

    /// Load from the file named by `PIPELINE_COST_CATALOG`, or fall back to
    /// the built-in catalog when the variable is unset.
    pub fn from_env() -> ConfigResult<Self> {
        match std::env::var_os(CATALOG_ENV_VAR) {
            Some(path) => Self::from_yaml(path),
            None => {
                tracing::debug!("{} unset, using built-in catalog", CATALOG_ENV_VAR);
                Ok(Self::builtin())
            }
        }
    }

    /// Declarations for the bundled algorithms
    pub fn builtin() -> Self {
        Self {
            profiles: builtin_profiles()
                .into_iter()
                .map(|profile| (profile.name.clone(), profile))
                .collect(),
        }
    }

    /// Serialize to YAML (schema v1)
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let export = CatalogExportV1::from_profiles(self.profiles.values());
        serde_yaml::to_string(&export).map_err(ConfigError::Yaml)
    }

    pub fn get(&self, algorithm: &str) -> Option<&AlgorithmCostProfile> {
        self.profiles.get(algorithm)
    }

    /// Like `get`, but fails with a spelling suggestion
    pub fn profile(&self, algorithm: &str) -> CostResult<&AlgorithmCostProfile> {
        self.profiles
            .get(algorithm)
            .ok_or_else(|| CostError::UnknownAlgorithm {
                name: algorithm.to_string(),
                suggestion: find_closest_match(algorithm, self.names()),
            })
    }

    pub fn contains(&self, algorithm: &str) -> bool {
        self.profiles.contains_key(algorithm)
    }

    /// Algorithm names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl Validatable for CostCatalog {
    /// Structural checks only. Multiplier names are not checked here:
    /// algorithm-specific names are resolved by hooks at analysis time.
    fn validate(&self) -> ConfigResult<()> {
        for profile in self.profiles.values() {
            if profile.name.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "algorithm name must not be empty".to_string(),
                ));
            }
            for (index, entry) in profile.operations.iter().enumerate() {
                if !entry.declaration.has_any_count() {
                    return Err(ConfigError::invalid_entry(
                        &profile.name,
                        format!("operation #{} declares no non-zero count", index),
                    ));
                }
            }
            for (index, gate) in profile
                .operations
                .iter()
                .map(|e| &e.gate)
                .chain(profile.spaces.iter().map(|e| &e.gate))
                .enumerate()
            {
                if gate.features().map_or(false, |f| f.is_empty()) {
                    return Err(ConfigError::invalid_entry(
                        &profile.name,
                        format!("entry #{} has an empty depends_on list", index),
                    ));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::cost_model::domain::{
        FeatureGate, MultiplierKind, OperationCategory, OperationDeclaration, OperationEntry,
    };

    fn profile(name: &str) -> AlgorithmCostProfile {
        AlgorithmCostProfile::new(name).with_operation(OperationEntry::new(
            OperationDeclaration::new([(OperationCategory::Add, 1)], [MultiplierKind::Constant]),
        ))
    }

    #[test]
    fn test_duplicate_algorithm_rejected() {
        let result = CostCatalog::from_profiles([profile("mean"), profile("mean")]);
        assert!(matches!(result, Err(ConfigError::DuplicateAlgorithm(name)) if name == "mean"));
    }

    #[test]
    fn test_empty_name_rejected() {
        let result = CostCatalog::from_profiles([profile("  ")]);
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_all_zero_operation_rejected() {
        let bad = AlgorithmCostProfile::new("noop").with_operation(OperationEntry::new(
            OperationDeclaration::new([(OperationCategory::Add, 0)], []),
        ));
        let result = CostCatalog::from_profiles([bad]);
        assert!(matches!(result, Err(ConfigError::InvalidEntry { .. })));
    }

    #[test]
    fn test_empty_gate_rejected() {
        let bad = AlgorithmCostProfile::new("gated").with_operation(OperationEntry::gated(
            OperationDeclaration::new([(OperationCategory::Add, 1)], []),
            FeatureGate::AnyOf(Default::default()),
        ));
        assert!(CostCatalog::from_profiles([bad]).is_err());
    }

    #[test]
    fn test_unknown_algorithm_suggests_closest() {
        let catalog = CostCatalog::from_profiles([profile("mean"), profile("variance")]).unwrap();
        match catalog.profile("meen") {
            Err(CostError::UnknownAlgorithm { name, suggestion }) => {
                assert_eq!(name, "meen");
                assert!(suggestion.contains("mean"));
            }
            other => panic!("expected UnknownAlgorithm, got {:?}", other),
        }
    }

    #[test]
    fn test_names_sorted() {
        let catalog = CostCatalog::from_profiles([profile("b"), profile("a")]).unwrap();
        assert_eq!(catalog.names().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains("a"));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let catalog = CostCatalog::builtin();
        let yaml = catalog.to_yaml().unwrap();
        let reparsed = CostCatalog::from_yaml_str(&yaml).unwrap();
        assert_eq!(reparsed, catalog);
    }
}
