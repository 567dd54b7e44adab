//! Hasher configuration.
//!
//! A hasher is fixed at construction by its root region and maximum depth.
//! Both can be loaded from JSON or, with the `toml` feature, TOML.
use crate::error::{HashError, Result};
use serde::de::Error;
use std::path::Path;

pub use orbhash_types::bbox::{BoundingBox3D, SpaceTimeBox};
pub use orbhash_types::point::{Point3d, SpaceTimePoint};

use crate::hasher::MAX_SUPPORTED_DEPTH;

/// Key length used when a configuration does not name one.
pub const DEFAULT_MAX_DEPTH: usize = 16;

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HasherConfig {
    /// Maximum key length
    #[serde(default = "HasherConfig::default_max_depth")]
    pub max_depth: usize,

    /// The addressable universe
    pub root: SpaceTimeBox,
}

impl HasherConfig {
    const fn default_max_depth() -> usize {
        DEFAULT_MAX_DEPTH
    }

    pub fn new(root: SpaceTimeBox) -> Self {
        Self {
            max_depth: Self::default_max_depth(),
            root,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn validate(&self) -> std::result::Result<(), String> {
        self.root.validate()?;

        if self.max_depth > MAX_SUPPORTED_DEPTH {
            return Err(format!(
                "Max depth {} exceeds the supported limit of {}",
                self.max_depth, MAX_SUPPORTED_DEPTH
            ));
        }

        Ok(())
    }

    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        let config: HasherConfig = serde_json::from_str(json)?;
        if let Err(e) = config.validate() {
            return Err(Error::custom(e));
        }
        Ok(config)
    }

    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> std::result::Result<Self, toml::de::Error> {
        let config: HasherConfig = toml::from_str(toml_str)?;
        if let Err(e) = config.validate() {
            return Err(toml::de::Error::custom(e));
        }
        Ok(config)
    }

    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Load a configuration file, picking the format from its extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::from_json(&contents)?),
            #[cfg(feature = "toml")]
            Some("toml") => Ok(Self::from_toml(&contents)?),
            other => {
                log::warn!("Rejecting config file {} with extension {:?}", path.display(), other);
                Err(HashError::InvalidConfig(format!(
                    "Unsupported config file extension: {:?}",
                    other
                )))
            }
        }
    }
}
