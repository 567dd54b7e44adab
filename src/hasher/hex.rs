//! Sixteen-way space-time hasher.
//!
//! Like a geohash across four dimensions: each level halves x, y, z and time
//! at once and records which of the sixteen resulting boxes holds the point as
//! one hex digit. Keys sharing a prefix share an enclosing box.

use super::SpaceTimeHasher;
use crate::builder::HasherBuilder;
use crate::config::HasherConfig;
use crate::error::{HashError, Result};
use crate::partition;
use crate::prefix;
use orbhash_types::bbox::SpaceTimeBox;
use orbhash_types::point::SpaceTimePoint;

/// Hard cap on key length.
pub const MAX_SUPPORTED_DEPTH: usize = 64;

/// Deepest level at which spatial midpoints of a root still shrink. Beyond it
/// `f64` rounding collapses children onto their parent's bounds; keys stay
/// valid but stop adding spatial precision.
pub const F64_RESOLVABLE_DEPTH: usize = 52;

/// The 16-ary space-time hasher.
///
/// # Examples
///
/// ```rust
/// use orbhash::{BoundingBox3D, HexHasher, SpaceTimeBox, SpaceTimeHasher, SpaceTimePoint};
/// use std::time::{Duration, UNIX_EPOCH};
///
/// let t0 = UNIX_EPOCH + Duration::from_secs(1_700_000_000);
/// let root = SpaceTimeBox::new(
///     BoundingBox3D::new(0.0, 0.0, 0.0, 100.0, 100.0, 100.0),
///     t0,
///     t0 + Duration::from_secs(100),
/// );
/// let hasher = HexHasher::new(root, 8)?;
///
/// let probe = SpaceTimePoint::new(10.0, 10.0, 10.0, t0 + Duration::from_secs(10));
/// let key = hasher.encode(&probe, 2)?;
/// assert_eq!(key, "00");
///
/// let cell = hasher.decode(&key)?;
/// assert!(cell.contains(&probe));
/// # Ok::<(), orbhash::HashError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct HexHasher {
    root: SpaceTimeBox,
    max_depth: usize,
}

impl HexHasher {
    /// Create a hasher over `root` producing keys of at most `max_depth`
    /// digits.
    ///
    /// Every upper edge of `root` is treated as inclusive regardless of how
    /// the box was built.
    pub fn new(root: SpaceTimeBox, max_depth: usize) -> Result<Self> {
        root.validate().map_err(HashError::InvalidRegion)?;

        if max_depth > MAX_SUPPORTED_DEPTH {
            return Err(HashError::InvalidDepth {
                depth: max_depth,
                max_depth: MAX_SUPPORTED_DEPTH,
            });
        }

        if max_depth > F64_RESOLVABLE_DEPTH {
            log::warn!(
                "Max depth of {} exceeds the {} levels f64 coordinates can resolve; \
                deeper digits will not narrow spatial bounds.",
                max_depth,
                F64_RESOLVABLE_DEPTH
            );
        }

        log::debug!(
            "Created hex hasher with max depth {} over {:?}",
            max_depth,
            root
        );

        Ok(Self {
            root: root.as_root(),
            max_depth,
        })
    }

    /// Create a hasher from a validated configuration.
    pub fn from_config(config: &HasherConfig) -> Result<Self> {
        config.validate().map_err(HashError::InvalidConfig)?;
        Self::new(config.root.clone(), config.max_depth)
    }

    pub fn builder() -> HasherBuilder {
        HasherBuilder::new()
    }

    /// The configuration that reproduces this hasher.
    pub fn config(&self) -> HasherConfig {
        HasherConfig::new(self.root.clone()).with_max_depth(self.max_depth)
    }
}

impl SpaceTimeHasher for HexHasher {
    fn encode(&self, point: &SpaceTimePoint, depth: usize) -> Result<String> {
        if depth > self.max_depth {
            return Err(HashError::InvalidDepth {
                depth,
                max_depth: self.max_depth,
            });
        }

        if !self.root.contains(point) {
            return Err(HashError::OutOfBounds {
                x: point.x(),
                y: point.y(),
                z: point.z(),
                timestamp: point.timestamp(),
            });
        }

        let mut hash = String::with_capacity(depth);
        let mut current = self.root.clone();

        for level in 0..depth {
            let Some((index, next)) = partition::split(&current)
                .into_iter()
                .enumerate()
                .find(|(_, child)| child.contains(point))
            else {
                log::error!(
                    "No child of {:?} at level {} contains {:?}",
                    current,
                    level,
                    point
                );
                return Err(HashError::InvariantViolation(format!(
                    "no child region at level {} contains the point",
                    level
                )));
            };

            hash.push(partition::digit(index as u8));
            current = next;
        }

        log::trace!("Encoded {:?} as {:?}", point, hash);
        Ok(hash)
    }

    fn decode(&self, hash: &str) -> Result<SpaceTimeBox> {
        let digits = prefix::digits(hash, self.max_depth)?;

        let region = digits
            .into_iter()
            .fold(self.root.clone(), |current, index| {
                partition::child(&current, index)
            });

        log::trace!("Decoded {:?} as {:?}", hash, region);
        Ok(region)
    }

    fn root(&self) -> &SpaceTimeBox {
        &self.root
    }

    fn max_depth(&self) -> usize {
        self.max_depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbhash_types::bbox::{ALL_UPPER_CLOSED, BoundingBox3D};
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    fn t0() -> SystemTime {
        UNIX_EPOCH + Duration::from_secs(1_700_000_000)
    }

    fn secs(s: u64) -> SystemTime {
        t0() + Duration::from_secs(s)
    }

    fn root() -> SpaceTimeBox {
        SpaceTimeBox::new(
            BoundingBox3D::new(0.0, 0.0, 0.0, 100.0, 100.0, 100.0),
            t0(),
            secs(100),
        )
    }

    fn hasher() -> HexHasher {
        HexHasher::new(root(), 8).unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_root() {
        let inverted = SpaceTimeBox::new(
            BoundingBox3D::new(10.0, 0.0, 0.0, 0.0, 1.0, 1.0),
            t0(),
            secs(1),
        );
        assert!(matches!(
            HexHasher::new(inverted, 4),
            Err(HashError::InvalidRegion(_))
        ));
    }

    #[test]
    fn test_new_rejects_excessive_depth() {
        let err = HexHasher::new(root(), MAX_SUPPORTED_DEPTH + 1).unwrap_err();
        assert!(matches!(
            err,
            HashError::InvalidDepth {
                depth: 65,
                max_depth: MAX_SUPPORTED_DEPTH
            }
        ));
        assert!(HexHasher::new(root(), MAX_SUPPORTED_DEPTH).is_ok());
    }

    #[test]
    fn test_new_closes_root() {
        let open = SpaceTimeBox::from_parts(*root().bbox(), t0(), secs(100), 0);
        let hasher = HexHasher::new(open, 4).unwrap();
        assert_eq!(hasher.root().upper_closed(), ALL_UPPER_CLOSED);
    }

    #[test]
    fn test_encode_single_level_digits() {
        let h = hasher();
        let cases = [
            (SpaceTimePoint::new(10.0, 10.0, 10.0, secs(10)), "0"),
            (SpaceTimePoint::new(60.0, 10.0, 10.0, secs(10)), "1"),
            (SpaceTimePoint::new(10.0, 60.0, 10.0, secs(10)), "2"),
            (SpaceTimePoint::new(10.0, 10.0, 60.0, secs(10)), "4"),
            (SpaceTimePoint::new(10.0, 10.0, 10.0, secs(60)), "8"),
            (SpaceTimePoint::new(60.0, 60.0, 60.0, secs(60)), "F"),
        ];
        for (point, expected) in cases {
            assert_eq!(h.encode(&point, 1).unwrap(), expected);
        }
    }

    #[test]
    fn test_encode_depth_checked_before_bounds() {
        let h = hasher();
        let outside = SpaceTimePoint::new(200.0, 0.0, 0.0, t0());
        assert!(matches!(
            h.encode(&outside, 9),
            Err(HashError::InvalidDepth {
                depth: 9,
                max_depth: 8
            })
        ));
        assert!(matches!(
            h.encode(&outside, 1),
            Err(HashError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_hash_uses_max_depth() {
        let h = hasher();
        let p = SpaceTimePoint::new(33.0, 66.0, 99.0, secs(42));
        let full = h.hash(&p).unwrap();
        assert_eq!(full.len(), 8);
        assert_eq!(full, h.encode(&p, 8).unwrap());
    }

    #[test]
    fn test_decode_empty_is_root() {
        let h = hasher();
        assert_eq!(h.decode("").unwrap(), *h.root());
    }

    #[test]
    fn test_decode_errors() {
        let h = hasher();
        assert!(matches!(
            h.decode("0G"),
            Err(HashError::InvalidCharacter {
                character: 'G',
                position: 1
            })
        ));
        assert!(matches!(
            h.decode("000000000"),
            Err(HashError::InvalidLength {
                length: 9,
                max_depth: 8
            })
        ));
    }

    #[test]
    fn test_decode_matches_child() {
        let h = hasher();
        let region = h.decode("F0").unwrap();
        let expected = partition::child(&partition::child(h.root(), 0xF), 0x0);
        assert_eq!(region, expected);
        assert_eq!(region.bbox(), &BoundingBox3D::new(50.0, 50.0, 50.0, 75.0, 75.0, 75.0));
        assert_eq!(region.min_time(), secs(50));
        assert_eq!(region.max_time(), secs(75));
    }

    #[test]
    fn test_config_round_trip() {
        let h = hasher();
        let rebuilt = HexHasher::from_config(&h.config()).unwrap();
        assert_eq!(rebuilt, h);
    }
}
