//! Batch encoding.
//!
//! Every point is encoded independently, so a batch needs no coordination.
//! With the `parallel` feature the slice is spread over rayon's thread pool.

use crate::error::Result;
use crate::hasher::SpaceTimeHasher;
use orbhash_types::point::SpaceTimePoint;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Encode every point at `depth`. Result `i` belongs to `points[i]`.
///
/// ```rust
/// use orbhash::batch::encode_batch;
/// use orbhash::{BoundingBox3D, HexHasher, SpaceTimeBox, SpaceTimePoint};
/// use std::time::{Duration, UNIX_EPOCH};
///
/// let root = SpaceTimeBox::new(
///     BoundingBox3D::new(0.0, 0.0, 0.0, 100.0, 100.0, 100.0),
///     UNIX_EPOCH,
///     UNIX_EPOCH + Duration::from_secs(100),
/// );
/// let hasher = HexHasher::new(root, 4)?;
/// let points = [
///     SpaceTimePoint::new(10.0, 10.0, 10.0, UNIX_EPOCH),
///     SpaceTimePoint::new(500.0, 10.0, 10.0, UNIX_EPOCH),
/// ];
///
/// let keys = encode_batch(&hasher, &points, 1);
/// assert_eq!(keys[0].as_deref().ok(), Some("0"));
/// assert!(keys[1].is_err());
/// # Ok::<(), orbhash::HashError>(())
/// ```
pub fn encode_batch<H>(hasher: &H, points: &[SpaceTimePoint], depth: usize) -> Vec<Result<String>>
where
    H: SpaceTimeHasher + ?Sized,
{
    #[cfg(feature = "parallel")]
    let points = points.par_iter();
    #[cfg(not(feature = "parallel"))]
    let points = points.iter();

    points.map(|point| hasher.encode(point, depth)).collect()
}

/// Encode every point at `depth`, keeping only successes as
/// `(input index, key)` pairs in input order.
pub fn encode_batch_ok<H>(hasher: &H, points: &[SpaceTimePoint], depth: usize) -> Vec<(usize, String)>
where
    H: SpaceTimeHasher + ?Sized,
{
    let results = encode_batch(hasher, points, depth);
    let total = results.len();

    let encoded: Vec<(usize, String)> = results
        .into_iter()
        .enumerate()
        .filter_map(|(i, result)| result.ok().map(|key| (i, key)))
        .collect();

    if encoded.len() < total {
        log::debug!(
            "Skipped {} of {} points that could not be encoded",
            total - encoded.len(),
            total
        );
    }

    encoded
}
