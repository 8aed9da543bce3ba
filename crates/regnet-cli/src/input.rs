//! # Input Loading
//!
//! Region fixtures and hub configuration files are YAML (JSON also parses).

use std::path::Path;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use regnet_core::{EarthModel, Modality};
use regnet_geometry::{GeometryProvider, GeometrySource};
use regnet_graph::NetworkConfig;

/// Earth model selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModelArg {
    /// Haversine on a 6371 km sphere.
    Spherical,
    /// Vincenty on the WGS-84 ellipsoid.
    Ellipsoidal,
}

impl From<ModelArg> for EarthModel {
    fn from(arg: ModelArg) -> Self {
        match arg {
            ModelArg::Spherical => EarthModel::Spherical,
            ModelArg::Ellipsoidal => EarthModel::Ellipsoidal,
        }
    }
}

/// Per-invocation overrides applied on top of the loaded configuration.
#[derive(Args, Debug, Clone, Default)]
pub struct NetworkOverrides {
    /// Override the earth model.
    #[arg(long, value_enum)]
    pub model: Option<ModelArg>,

    /// Override the sea threshold in km.
    #[arg(long)]
    pub sea_threshold: Option<f64>,

    /// Override the air threshold in km.
    #[arg(long)]
    pub air_threshold: Option<f64>,
}

impl NetworkOverrides {
    pub fn apply(&self, config: &mut NetworkConfig) -> Result<()> {
        if let Some(model) = self.model {
            config.distance_model = model.into();
        }
        if let Some(km) = self.sea_threshold {
            config.set_threshold(Modality::Sea, km)?;
        }
        if let Some(km) = self.air_threshold {
            config.set_threshold(Modality::Air, km)?;
        }
        Ok(())
    }
}

/// Parse a region fixture file.
pub fn load_source(path: &Path) -> Result<GeometrySource> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read region file {}", path.display()))?;
    let source: GeometrySource = serde_yaml::from_str(&content)
        .with_context(|| format!("failed to parse region file {}", path.display()))?;
    tracing::debug!(path = %path.display(), regions = source.region_count(), "region file loaded");
    Ok(source)
}

/// Parse a region fixture file and build its provider.
pub fn load_provider(path: &Path) -> Result<Box<dyn GeometryProvider>> {
    load_source(path)?
        .into_provider()
        .with_context(|| format!("invalid region file {}", path.display()))
}

/// Load the hub configuration, or the bundled Asia registry when `path` is
/// `None`, and apply overrides.
pub fn load_config(path: Option<&Path>, overrides: &NetworkOverrides) -> Result<NetworkConfig> {
    let mut config = match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            NetworkConfig::from_yaml_str(&content)
                .with_context(|| format!("invalid config {}", path.display()))?
        }
        None => {
            tracing::debug!("no --config given; using bundled Asia hub registry");
            NetworkConfig::asia_default().context("bundled Asia hub registry is invalid")?
        }
    };
    overrides.apply(&mut config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_has_path_in_error() {
        let err = load_source(Path::new("/nonexistent/regions.yaml")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/regions.yaml"));
    }

    #[test]
    fn default_config_with_overrides() {
        let overrides = NetworkOverrides {
            model: Some(ModelArg::Ellipsoidal),
            sea_threshold: Some(1000.0),
            air_threshold: None,
        };
        let config = load_config(None, &overrides).unwrap();
        assert_eq!(config.distance_model, EarthModel::Ellipsoidal);
        assert_eq!(config.sea.as_ref().unwrap().threshold_km, 1000.0);
        assert_eq!(config.air.as_ref().unwrap().threshold_km, 8000.0);
    }

    #[test]
    fn invalid_override_is_rejected() {
        let overrides = NetworkOverrides {
            air_threshold: Some(-1.0),
            ..NetworkOverrides::default()
        };
        assert!(load_config(None, &overrides).is_err());
    }
}
