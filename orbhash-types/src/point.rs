use geo::Point;
use serde::{Deserialize, Serialize};
use std::time::SystemTime;

/// A point in 3D Cartesian space.
///
/// Positions are frame-agnostic: the hasher only compares them against region
/// bounds, so any consistent unit (km, AU) works.
///
/// # Examples
///
/// ```
/// use orbhash_types::point::Point3d;
///
/// let mars = Point3d::new(1.52, 0.0, 0.03);
/// assert_eq!(mars.z(), 0.03);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point3d {
    /// The x/y plane component
    pub point: Point<f64>,
    /// The z coordinate
    pub z: f64,
}

impl Point3d {
    /// Create a new 3D point from x, y, and z coordinates.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            point: Point::new(x, y),
            z,
        }
    }

    pub fn x(&self) -> f64 {
        self.point.x()
    }

    pub fn y(&self) -> f64 {
        self.point.y()
    }

    pub fn z(&self) -> f64 {
        self.z
    }
}

/// A position at an instant: the value the hasher classifies.
///
/// Produced upstream (for example by propagating an orbit to a given time)
/// and never modified afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpaceTimePoint {
    pub position: Point3d,
    pub timestamp: SystemTime,
}

impl SpaceTimePoint {
    pub fn new(x: f64, y: f64, z: f64, timestamp: SystemTime) -> Self {
        Self {
            position: Point3d::new(x, y, z),
            timestamp,
        }
    }

    pub fn from_position(position: Point3d, timestamp: SystemTime) -> Self {
        Self {
            position,
            timestamp,
        }
    }

    pub fn position(&self) -> &Point3d {
        &self.position
    }

    pub fn x(&self) -> f64 {
        self.position.x()
    }

    pub fn y(&self) -> f64 {
        self.position.y()
    }

    pub fn z(&self) -> f64 {
        self.position.z()
    }

    pub fn timestamp(&self) -> SystemTime {
        self.timestamp
    }
}
