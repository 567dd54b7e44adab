//! The encode/decode contract and its implementations.
//!
//! Consumers depend on [`SpaceTimeHasher`] rather than a concrete scheme, so a
//! different branching factor or axis weighting can be swapped in without
//! touching them.

mod hex;

pub use hex::{F64_RESOLVABLE_DEPTH, HexHasher, MAX_SUPPORTED_DEPTH};

use crate::error::Result;
use orbhash_types::bbox::SpaceTimeBox;
use orbhash_types::point::SpaceTimePoint;

/// Maps space-time points to hierarchical string keys and keys back to the
/// regions they denote.
///
/// Implementations are immutable after construction and safe to share across
/// threads.
pub trait SpaceTimeHasher: Send + Sync {
    /// Encode `point` into a key of exactly `depth` characters.
    fn encode(&self, point: &SpaceTimePoint, depth: usize) -> Result<String>;

    /// Recover the region a key denotes. The empty key denotes the root.
    fn decode(&self, hash: &str) -> Result<SpaceTimeBox>;

    /// The universe this hasher can address.
    fn root(&self) -> &SpaceTimeBox;

    /// Longest key this hasher produces or accepts.
    fn max_depth(&self) -> usize;

    /// Encode at the hasher's maximum depth.
    fn hash(&self, point: &SpaceTimePoint) -> Result<String> {
        self.encode(point, self.max_depth())
    }
}
