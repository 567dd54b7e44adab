use crate::point::{Point3d, SpaceTimePoint};
use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime};

/// A 3D axis-aligned bounding box.
///
/// Represents a rectangular volume defined by minimum and maximum coordinates
/// in three dimensions (x, y, z). Containment lives on [`SpaceTimeBox`],
/// which applies the half-open boundary rule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox3D {
    /// Minimum x coordinate
    pub min_x: f64,
    /// Minimum y coordinate
    pub min_y: f64,
    /// Minimum z coordinate
    pub min_z: f64,
    /// Maximum x coordinate
    pub max_x: f64,
    /// Maximum y coordinate
    pub max_y: f64,
    /// Maximum z coordinate
    pub max_z: f64,
}

impl BoundingBox3D {
    /// Create a new 3D bounding box from minimum and maximum coordinates.
    ///
    /// # Examples
    ///
    /// ```
    /// use orbhash_types::bbox::BoundingBox3D;
    ///
    /// let bbox = BoundingBox3D::new(-5.0, -5.0, -1.0, 5.0, 5.0, 1.0);
    /// assert_eq!(bbox.volume(), 200.0);
    /// ```
    pub fn new(min_x: f64, min_y: f64, min_z: f64, max_x: f64, max_y: f64, max_z: f64) -> Self {
        Self {
            min_x,
            min_y,
            min_z,
            max_x,
            max_y,
            max_z,
        }
    }

    /// Get the center point of the bounding box.
    pub fn center(&self) -> Point3d {
        Point3d::new(
            self.min_x + self.width() / 2.0,
            self.min_y + self.height() / 2.0,
            self.min_z + self.depth() / 2.0,
        )
    }

    /// Get the width (x dimension) of the bounding box.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Get the height (y dimension) of the bounding box.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Get the depth (z dimension) of the bounding box.
    pub fn depth(&self) -> f64 {
        self.max_z - self.min_z
    }

    /// Get the volume of the bounding box.
    pub fn volume(&self) -> f64 {
        self.width() * self.height() * self.depth()
    }
}

/// One of the four axes of a space-time region.
///
/// The discriminant doubles as the bit the axis occupies in a child index and
/// in [`SpaceTimeBox::upper_closed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X = 0b0001,
    Y = 0b0010,
    Z = 0b0100,
    Time = 0b1000,
}

impl Axis {
    /// All axes in bit order.
    pub const ALL: [Axis; 4] = [Axis::X, Axis::Y, Axis::Z, Axis::Time];

    pub const fn bit(self) -> u8 {
        self as u8
    }
}

/// Mask with every upper edge inclusive.
pub const ALL_UPPER_CLOSED: u8 = 0b1111;

/// An axis-aligned box over three spatial axes and a time interval.
///
/// Every axis is the half-open interval `[min, max)` unless its bit is set in
/// the upper-closed mask, in which case the upper bound is included as well.
/// Boxes built with [`SpaceTimeBox::new`] close every upper edge, which is
/// what a root universe needs so points on its outer boundary stay
/// addressable. Sub-boxes produced by partitioning keep an upper edge closed
/// only when it coincides with the root's.
///
/// # Examples
///
/// ```
/// use orbhash_types::bbox::{BoundingBox3D, SpaceTimeBox};
/// use orbhash_types::point::SpaceTimePoint;
/// use std::time::{Duration, UNIX_EPOCH};
///
/// let end = UNIX_EPOCH + Duration::from_secs(60);
/// let region = SpaceTimeBox::new(
///     BoundingBox3D::new(0.0, 0.0, 0.0, 1.0, 1.0, 1.0),
///     UNIX_EPOCH,
///     end,
/// );
///
/// assert!(region.contains(&SpaceTimePoint::new(1.0, 1.0, 1.0, end)));
/// assert_eq!(region.volume(), 60.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpaceTimeBox {
    bbox: BoundingBox3D,
    min_time: SystemTime,
    max_time: SystemTime,
    #[serde(default = "SpaceTimeBox::default_upper_closed")]
    upper_closed: u8,
}

impl SpaceTimeBox {
    const fn default_upper_closed() -> u8 {
        ALL_UPPER_CLOSED
    }

    /// Create a region with every upper edge inclusive.
    pub fn new(bbox: BoundingBox3D, min_time: SystemTime, max_time: SystemTime) -> Self {
        Self::from_parts(bbox, min_time, max_time, ALL_UPPER_CLOSED)
    }

    /// Create a region with an explicit upper-closed mask (see [`Axis::bit`]).
    /// Bits above the four axes are ignored.
    pub fn from_parts(
        bbox: BoundingBox3D,
        min_time: SystemTime,
        max_time: SystemTime,
        upper_closed: u8,
    ) -> Self {
        Self {
            bbox,
            min_time,
            max_time,
            upper_closed: upper_closed & ALL_UPPER_CLOSED,
        }
    }

    /// The same bounds with every upper edge inclusive.
    pub fn as_root(&self) -> Self {
        Self::new(self.bbox, self.min_time, self.max_time)
    }

    pub fn bbox(&self) -> &BoundingBox3D {
        &self.bbox
    }

    pub fn min_time(&self) -> SystemTime {
        self.min_time
    }

    pub fn max_time(&self) -> SystemTime {
        self.max_time
    }

    pub fn upper_closed(&self) -> u8 {
        self.upper_closed
    }

    pub fn is_upper_closed(&self, axis: Axis) -> bool {
        self.upper_closed & axis.bit() != 0
    }

    /// Length of the time interval. Zero when the bounds are inverted.
    pub fn duration(&self) -> Duration {
        self.max_time
            .duration_since(self.min_time)
            .unwrap_or_default()
    }

    /// Product of the three spatial extents and the duration in seconds.
    pub fn volume(&self) -> f64 {
        self.bbox.volume() * self.duration().as_secs_f64()
    }

    /// The midpoint of every axis.
    pub fn center(&self) -> SpaceTimePoint {
        SpaceTimePoint::from_position(self.bbox.center(), self.min_time + self.duration() / 2)
    }

    /// Check that bounds are finite and ordered on every axis, and that every
    /// spatial extent is representable.
    pub fn validate(&self) -> Result<(), String> {
        let b = &self.bbox;
        let axes = [
            ("x", b.min_x, b.max_x),
            ("y", b.min_y, b.max_y),
            ("z", b.min_z, b.max_z),
        ];
        for (name, min, max) in axes {
            if !min.is_finite() || !max.is_finite() {
                return Err(format!(
                    "Bounds on the {} axis must be finite, got [{}, {}]",
                    name, min, max
                ));
            }
            if min > max {
                return Err(format!(
                    "Minimum exceeds maximum on the {} axis: [{}, {}]",
                    name, min, max
                ));
            }
            // midpoints are min + (max - min) / 2, so the extent itself must fit
            if !(max - min).is_finite() {
                return Err(format!(
                    "Extent of the {} axis overflows f64: [{}, {}]",
                    name, min, max
                ));
            }
        }

        if self.min_time > self.max_time {
            return Err(format!(
                "Start time {:?} is after end time {:?}",
                self.min_time, self.max_time
            ));
        }

        Ok(())
    }

    /// Half-open containment test.
    ///
    /// A value equal to an axis maximum only matches when that axis is upper
    /// closed. NaN coordinates never match.
    pub fn contains(&self, point: &SpaceTimePoint) -> bool {
        let b = &self.bbox;
        within(point.x(), b.min_x, b.max_x, self.is_upper_closed(Axis::X))
            && within(point.y(), b.min_y, b.max_y, self.is_upper_closed(Axis::Y))
            && within(point.z(), b.min_z, b.max_z, self.is_upper_closed(Axis::Z))
            && within(
                point.timestamp(),
                self.min_time,
                self.max_time,
                self.is_upper_closed(Axis::Time),
            )
    }

    /// Whether `other` lies entirely within this region's bounds.
    pub fn contains_box(&self, other: &SpaceTimeBox) -> bool {
        let (a, b) = (&self.bbox, &other.bbox);
        b.min_x >= a.min_x
            && b.max_x <= a.max_x
            && b.min_y >= a.min_y
            && b.max_y <= a.max_y
            && b.min_z >= a.min_z
            && b.max_z <= a.max_z
            && other.min_time >= self.min_time
            && other.max_time <= self.max_time
    }
}

fn within<T: PartialOrd>(value: T, min: T, max: T, upper_closed: bool) -> bool {
    value >= min && (value < max || (upper_closed && value == max))
}
