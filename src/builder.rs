//! Builder for hex hashers
//!
//! Collects a root region and maximum depth, then validates both once in
//! [`HasherBuilder::build`].

use crate::config::{DEFAULT_MAX_DEPTH, HasherConfig};
use crate::error::{HashError, Result};
use crate::hasher::HexHasher;
use orbhash_types::bbox::SpaceTimeBox;
use std::path::Path;

/// Builder for [`HexHasher`] with a fluent interface.
#[derive(Debug, Clone)]
pub struct HasherBuilder {
    root: Option<SpaceTimeBox>,
    max_depth: usize,
}

impl HasherBuilder {
    /// Create a builder with no root and the default maximum depth.
    pub fn new() -> Self {
        Self {
            root: None,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Set the universe the hasher addresses.
    pub fn root(mut self, root: SpaceTimeBox) -> Self {
        self.root = Some(root);
        self
    }

    /// Set the maximum key length.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Take both settings from a configuration.
    pub fn config(mut self, config: HasherConfig) -> Self {
        self.root = Some(config.root);
        self.max_depth = config.max_depth;
        self
    }

    /// Take both settings from a JSON or TOML configuration file.
    pub fn config_file<P: AsRef<Path>>(self, path: P) -> Result<Self> {
        Ok(self.config(HasherConfig::from_file(path)?))
    }

    /// Build the hasher. Fails if no root was given or the settings are
    /// invalid.
    pub fn build(self) -> Result<HexHasher> {
        let root = self
            .root
            .ok_or_else(|| HashError::InvalidConfig("A root region is required".to_string()))?;
        HexHasher::new(root, self.max_depth)
    }
}

impl Default for HasherBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hasher::SpaceTimeHasher;
    use orbhash_types::bbox::BoundingBox3D;
    use std::time::{Duration, UNIX_EPOCH};

    fn root() -> SpaceTimeBox {
        SpaceTimeBox::new(
            BoundingBox3D::new(0.0, 0.0, 0.0, 8.0, 8.0, 8.0),
            UNIX_EPOCH,
            UNIX_EPOCH + Duration::from_secs(8),
        )
    }

    #[test]
    fn test_builder_defaults() {
        let hasher = HasherBuilder::new().root(root()).build().unwrap();
        assert_eq!(hasher.max_depth(), DEFAULT_MAX_DEPTH);
        assert_eq!(hasher.root(), &root());
    }

    #[test]
    fn test_builder_requires_root() {
        assert!(matches!(
            HasherBuilder::default().max_depth(4).build(),
            Err(HashError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_builder_from_config() {
        let config = HasherConfig::new(root()).with_max_depth(3);
        let hasher = HexHasher::builder().config(config.clone()).build().unwrap();
        assert_eq!(hasher.config(), config);
    }

    #[test]
    fn test_builder_from_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hasher.json");
        let config = HasherConfig::new(root()).with_max_depth(5);
        std::fs::write(&path, config.to_json().unwrap()).unwrap();

        let hasher = HasherBuilder::new()
            .config_file(&path)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(hasher.max_depth(), 5);
    }

    #[test]
    fn test_builder_rejects_excessive_depth() {
        let result = HasherBuilder::new().root(root()).max_depth(65).build();
        assert!(matches!(result, Err(HashError::InvalidDepth { .. })));
    }
}
