//! # orbhash-types
//!
//! Core space-time data types for the orbhash hasher.
//!
//! - **Point types**: `Point3d`, `SpaceTimePoint`
//! - **Region types**: `BoundingBox3D`, `SpaceTimeBox`
//!
//! All types are serializable with Serde and built on top of the `geo` crate's
//! geometric primitives.
//!
//! ## Examples
//!
//! ```rust
//! use orbhash_types::bbox::{BoundingBox3D, SpaceTimeBox};
//! use orbhash_types::point::SpaceTimePoint;
//! use std::time::{Duration, UNIX_EPOCH};
//!
//! let start = UNIX_EPOCH + Duration::from_secs(1_700_000_000);
//! let universe = SpaceTimeBox::new(
//!     BoundingBox3D::new(0.0, 0.0, 0.0, 100.0, 100.0, 100.0),
//!     start,
//!     start + Duration::from_secs(100),
//! );
//!
//! let probe = SpaceTimePoint::new(10.0, 10.0, 10.0, start + Duration::from_secs(10));
//! assert!(universe.contains(&probe));
//! ```

pub mod bbox;
pub mod point;
