//! Error types for encoding and decoding space-time hashes.

use std::time::SystemTime;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, HashError>;

#[derive(Debug, Error)]
pub enum HashError {
    /// The point lies outside the hasher's root region.
    #[error("Point ({x}, {y}, {z}) at {timestamp:?} is outside the root region")]
    OutOfBounds {
        x: f64,
        y: f64,
        z: f64,
        timestamp: SystemTime,
    },

    #[error("Depth {depth} exceeds the maximum depth of {max_depth}")]
    InvalidDepth { depth: usize, max_depth: usize },

    #[error("Hash length {length} exceeds the maximum depth of {max_depth}")]
    InvalidLength { length: usize, max_depth: usize },

    #[error("Invalid hash character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },

    #[error("Invalid region: {0}")]
    InvalidRegion(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// No child region matched a point its parent contains. This is a defect
    /// in the partition logic, never a consequence of caller input.
    #[error("Partition invariant violated: {0}")]
    InvariantViolation(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "toml")]
    #[error("TOML error: {0}")]
    Toml(String),
}

impl HashError {
    /// True for the one variant that signals a bug rather than bad input.
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, HashError::InvariantViolation(_))
    }
}

#[cfg(feature = "toml")]
impl From<toml::de::Error> for HashError {
    fn from(err: toml::de::Error) -> Self {
        HashError::Toml(err.to_string())
    }
}

#[cfg(feature = "toml")]
impl From<toml::ser::Error> for HashError {
    fn from(err: toml::ser::Error) -> Self {
        HashError::Toml(err.to_string())
    }
}
