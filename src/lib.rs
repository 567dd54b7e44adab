//! Hierarchical space-time hashing.
//!
//! Encodes a point in three spatial dimensions plus time into a short hex key,
//! like a geohash across four dimensions. Each digit halves all four axes of
//! the region named by the digits before it, so points close in space and
//! time share key prefixes and a sorted-key store can answer range questions
//! with prefix scans.
//!
//! ## Features
//! - **Exact partition**: sixteen children tile every region, with half-open
//!   boundaries so each point lands in exactly one
//! - **Invertible keys**: any valid key decodes back to the region it names
//! - **Pluggable schemes**: consumers program against [`SpaceTimeHasher`]
//! - **Batch encoding**: parallel across threads with the `parallel` feature
//!
//! ```rust
//! use orbhash::prelude::*;
//! use std::time::UNIX_EPOCH;
//!
//! let t0 = UNIX_EPOCH + Duration::from_secs(1_700_000_000);
//! let hasher = HexHasher::builder()
//!     .root(SpaceTimeBox::new(
//!         BoundingBox3D::new(0.0, 0.0, 0.0, 100.0, 100.0, 100.0),
//!         t0,
//!         t0 + Duration::from_secs(100),
//!     ))
//!     .max_depth(12)
//!     .build()?;
//!
//! let probe = SpaceTimePoint::new(10.0, 10.0, 10.0, t0 + Duration::from_secs(10));
//! let key = hasher.encode(&probe, 2)?;
//! assert_eq!(key, "00");
//!
//! // Shorter prefixes name enclosing regions
//! let cell = hasher.decode(&key)?;
//! let parent = hasher.decode(&key[..1])?;
//! assert!(parent.contains_box(&cell));
//! # Ok::<(), orbhash::HashError>(())
//! ```

pub mod batch;
pub mod builder;
pub mod config;
pub mod error;
pub mod hasher;
pub mod partition;
pub mod prefix;

pub use builder::HasherBuilder;
pub use config::{DEFAULT_MAX_DEPTH, HasherConfig};
pub use error::{HashError, Result};
pub use hasher::{F64_RESOLVABLE_DEPTH, HexHasher, MAX_SUPPORTED_DEPTH, SpaceTimeHasher};

pub use orbhash_types::bbox::{Axis, BoundingBox3D, SpaceTimeBox};
pub use orbhash_types::point::{Point3d, SpaceTimePoint};

pub use batch::{encode_batch, encode_batch_ok};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{HashError, HasherBuilder, HexHasher, Result, SpaceTimeHasher};

    pub use crate::{BoundingBox3D, Point3d, SpaceTimeBox, SpaceTimePoint};

    pub use crate::HasherConfig;

    pub use crate::{encode_batch, prefix};

    pub use std::time::Duration;
}
