//! # Network Configuration
//!
//! Everything the pipeline needs besides geometry: the earth model and, for
//! each routed modality, a threshold and a hub registry.
//!
//! ```yaml
//! distance_model: spherical      # or ellipsoidal
//! sea:
//!   threshold_km: 5000
//!   hubs:
//!     Japan: { lat: 35.6586, lon: 139.7454 }
//! air:
//!   threshold_km: 8000
//!   hubs: {}
//! ```
//!
//! An absent modality section means no edges of that modality.

use std::collections::BTreeMap;

use regnet_core::{Coordinate, EarthModel, Kilometers, Modality, RegionName};
use serde::{Deserialize, Serialize};

use crate::error::GraphError;
use crate::routes::HubRegistry;

const ASIA_HUBS_YAML: &str = include_str!("../data/asia_hubs.yaml");

/// Threshold and hubs for one routed modality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModalityConfig {
    pub threshold_km: f64,
    #[serde(default)]
    pub hubs: BTreeMap<RegionName, Coordinate>,
}

impl ModalityConfig {
    pub fn new(threshold_km: f64) -> Self {
        Self {
            threshold_km,
            hubs: BTreeMap::new(),
        }
    }

    pub fn threshold(&self) -> Kilometers {
        Kilometers::new(self.threshold_km)
    }
}

/// Pipeline configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NetworkConfig {
    #[serde(default)]
    pub distance_model: EarthModel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sea: Option<ModalityConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub air: Option<ModalityConfig>,
}

impl NetworkConfig {
    /// Parse and validate a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, GraphError> {
        let config: NetworkConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// The bundled Asia registry: eight ports with a 5000 km sea threshold
    /// and eight airports with an 8000 km air threshold.
    pub fn asia_default() -> Result<Self, GraphError> {
        Self::from_yaml_str(ASIA_HUBS_YAML)
    }

    /// Check that every configured threshold is finite and positive.
    pub fn validate(&self) -> Result<(), GraphError> {
        for modality in Modality::routed() {
            if let Some(section) = self.section(*modality) {
                let value = section.threshold_km;
                if !value.is_finite() || value <= 0.0 {
                    return Err(GraphError::InvalidThreshold {
                        modality: *modality,
                        value,
                    });
                }
            }
        }
        Ok(())
    }

    /// The section for a routed modality; `None` for land or when absent.
    pub fn section(&self, modality: Modality) -> Option<&ModalityConfig> {
        match modality {
            Modality::Land => None,
            Modality::Sea => self.sea.as_ref(),
            Modality::Air => self.air.as_ref(),
        }
    }

    fn section_mut(&mut self, modality: Modality) -> Result<&mut Option<ModalityConfig>, GraphError> {
        match modality {
            Modality::Land => Err(GraphError::InvalidModality(modality)),
            Modality::Sea => Ok(&mut self.sea),
            Modality::Air => Ok(&mut self.air),
        }
    }

    /// Replace a modality's threshold, creating an empty section if needed.
    pub fn set_threshold(&mut self, modality: Modality, threshold_km: f64) -> Result<(), GraphError> {
        if !threshold_km.is_finite() || threshold_km <= 0.0 {
            return Err(GraphError::InvalidThreshold {
                modality,
                value: threshold_km,
            });
        }
        let section = self.section_mut(modality)?;
        match section {
            Some(existing) => existing.threshold_km = threshold_km,
            None => *section = Some(ModalityConfig::new(threshold_km)),
        }
        Ok(())
    }

    /// Register or replace a hub, creating the section with `threshold_km`
    /// if the modality has none yet.
    pub fn insert_hub(
        &mut self,
        modality: Modality,
        region: RegionName,
        hub: Coordinate,
        threshold_km: f64,
    ) -> Result<(), GraphError> {
        let section = self.section_mut(modality)?;
        section
            .get_or_insert_with(|| ModalityConfig::new(threshold_km))
            .hubs
            .insert(region, hub);
        Ok(())
    }

    /// The hub registry for a routed modality (empty when absent).
    pub fn hub_registry(&self, modality: Modality) -> Result<HubRegistry, GraphError> {
        let hubs = self
            .section(modality)
            .map(|s| s.hubs.clone())
            .unwrap_or_default();
        HubRegistry::with_hubs(modality, hubs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asia_default_loads() {
        let config = NetworkConfig::asia_default().unwrap();
        assert_eq!(config.distance_model, EarthModel::Spherical);
        let sea = config.sea.as_ref().unwrap();
        let air = config.air.as_ref().unwrap();
        assert_eq!(sea.threshold_km, 5000.0);
        assert_eq!(air.threshold_km, 8000.0);
        assert_eq!(sea.hubs.len(), 8);
        assert_eq!(air.hubs.len(), 8);
        let busan = sea.hubs.get("South Korea").unwrap();
        assert_eq!(busan.lat(), 35.1796);
        assert_eq!(busan.lon(), 129.0756);
    }

    #[test]
    fn minimal_document_defaults() {
        let config = NetworkConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, NetworkConfig::default());
        assert!(config.hub_registry(Modality::Sea).unwrap().is_empty());
    }

    #[test]
    fn ellipsoidal_model_parses() {
        let config = NetworkConfig::from_yaml_str("distance_model: ellipsoidal\n").unwrap();
        assert_eq!(config.distance_model, EarthModel::Ellipsoidal);
    }

    #[test]
    fn bad_threshold_is_rejected() {
        let err = NetworkConfig::from_yaml_str("sea:\n  threshold_km: -5\n").unwrap_err();
        assert!(matches!(
            err,
            GraphError::InvalidThreshold {
                modality: Modality::Sea,
                ..
            }
        ));
    }

    #[test]
    fn invalid_hub_coordinate_is_rejected() {
        let yaml = "air:\n  threshold_km: 100\n  hubs:\n    X: { lat: 91.0, lon: 0.0 }\n";
        assert!(matches!(
            NetworkConfig::from_yaml_str(yaml),
            Err(GraphError::Config(_))
        ));
    }

    #[test]
    fn unknown_field_is_rejected() {
        assert!(NetworkConfig::from_yaml_str("rail:\n  threshold_km: 10\n").is_err());
    }

    #[test]
    fn set_threshold_and_insert_hub() {
        let mut config = NetworkConfig::default();
        config.set_threshold(Modality::Air, 1234.0).unwrap();
        assert_eq!(config.air.as_ref().unwrap().threshold_km, 1234.0);
        assert!(config.set_threshold(Modality::Land, 10.0).is_err());
        assert!(config.set_threshold(Modality::Sea, 0.0).is_err());

        let hub = Coordinate::new(1.0, 1.0).unwrap();
        config
            .insert_hub(Modality::Sea, RegionName::new("X").unwrap(), hub, 500.0)
            .unwrap();
        let registry = config.hub_registry(Modality::Sea).unwrap();
        assert_eq!(registry.get("X"), Some(hub));
        assert_eq!(config.sea.as_ref().unwrap().threshold_km, 500.0);
    }
}
