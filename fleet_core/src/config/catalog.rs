//! Ship catalog configuration loading

use super::ConfigError;
use crate::ship::{Ship, ShipSpec};
use crate::types::ShipClass;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Container for ship archetype configurations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(rename = "ships")]
    pub ships: Vec<ShipSpec>,
}

/// Archetype table: base attributes plus advance transform per ship class
///
/// New archetypes are data, not new types; the engine only ever sees the
/// validated [`Ship`] values built from these rows.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    specs: HashMap<ShipClass, ShipSpec>,
}

impl Catalog {
    /// Number of archetypes in the table
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Look up the raw spec for an archetype
    pub fn spec(&self, class: ShipClass) -> Option<&ShipSpec> {
        self.specs.get(&class)
    }

    /// Build a validated ship of the given archetype
    pub fn build(&self, class: ShipClass) -> Result<Ship, ConfigError> {
        let spec = self.specs.get(&class).ok_or_else(|| {
            ConfigError::ValidationError(format!("no archetype configured for {class:?}"))
        })?;
        spec.build()
            .map_err(|e| ConfigError::ValidationError(e.to_string()))
    }
}

impl TryFrom<CatalogConfig> for Catalog {
    type Error = ConfigError;

    fn try_from(config: CatalogConfig) -> Result<Self, ConfigError> {
        let mut specs = HashMap::new();
        for spec in config.ships {
            // Validate rows eagerly so a broken table fails at load time
            spec.build()
                .map_err(|e| ConfigError::ValidationError(format!("{}: {e}", spec.name)))?;
            specs.insert(spec.class, spec);
        }
        Ok(Catalog { specs })
    }
}

/// Load a ship catalog from a TOML file
pub fn load_catalog(path: &Path) -> Result<Catalog, ConfigError> {
    let config: CatalogConfig = super::load_toml(path)?;
    config.try_into()
}

/// Load a ship catalog from a TOML string
pub fn parse_catalog(content: &str) -> Result<Catalog, ConfigError> {
    let config: CatalogConfig = super::parse_toml(content)?;
    config.try_into()
}

/// Get the default ship catalog
pub fn default_catalog() -> Catalog {
    let toml = include_str!("../../config/ships.toml");
    parse_catalog(toml).unwrap_or_default()
}
