//! Sixteen-way subdivision of space-time regions.
//!
//! Every axis is bisected at its midpoint and the four halves are combined
//! into a child index, one bit per axis:
//!
//! ```text
//! bit 3   bit 2   bit 1   bit 0
//! time    z       y       x        0 = low half [min, mid)
//!                                  1 = high half [mid, max)
//! ```
//!
//! The index rendered as a single uppercase hex digit is one level of a hash.

use orbhash_types::bbox::{BoundingBox3D, SpaceTimeBox};
use std::time::SystemTime;

pub use orbhash_types::bbox::Axis;

/// Number of children produced by one split.
pub const BRANCHING_FACTOR: usize = 16;

/// Hash digit for each child index.
pub static HEX_ALPHABET: [char; BRANCHING_FACTOR] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F',
];

/// Render a child index as its hash digit. Only the low four bits are used.
#[inline]
pub fn digit(index: u8) -> char {
    HEX_ALPHABET[usize::from(index & 0x0F)]
}

/// Parse a hash digit back into its child index.
///
/// Lowercase letters are not part of the alphabet.
#[inline]
pub fn index_of(digit: char) -> Option<u8> {
    match digit {
        '0'..='9' => Some(digit as u8 - b'0'),
        'A'..='F' => Some(digit as u8 - b'A' + 10),
        _ => None,
    }
}

/// Midpoint of a real interval.
#[inline]
pub fn split_f64(min: f64, max: f64) -> f64 {
    min + (max - min) / 2.0
}

/// Midpoint of a time interval, truncated to whole nanoseconds.
#[inline]
pub fn split_time(min: SystemTime, max: SystemTime) -> SystemTime {
    min + max.duration_since(min).unwrap_or_default() / 2
}

#[inline]
fn pick_side<T: Copy>(high: bool, min: T, mid: T, max: T) -> (T, T) {
    if high { (mid, max) } else { (min, mid) }
}

/// Build the child of `region` selected by `index`.
///
/// A child keeps the parent's inclusive upper edge on exactly the axes where
/// it takes the high half; its low-half upper edges end at an open midpoint.
pub fn child(region: &SpaceTimeBox, index: u8) -> SpaceTimeBox {
    let index = index & 0x0F;
    let b = region.bbox();

    let (min_x, max_x) = pick_side(
        index & Axis::X.bit() != 0,
        b.min_x,
        split_f64(b.min_x, b.max_x),
        b.max_x,
    );
    let (min_y, max_y) = pick_side(
        index & Axis::Y.bit() != 0,
        b.min_y,
        split_f64(b.min_y, b.max_y),
        b.max_y,
    );
    let (min_z, max_z) = pick_side(
        index & Axis::Z.bit() != 0,
        b.min_z,
        split_f64(b.min_z, b.max_z),
        b.max_z,
    );
    let (min_time, max_time) = pick_side(
        index & Axis::Time.bit() != 0,
        region.min_time(),
        split_time(region.min_time(), region.max_time()),
        region.max_time(),
    );

    SpaceTimeBox::from_parts(
        BoundingBox3D::new(min_x, min_y, min_z, max_x, max_y, max_z),
        min_time,
        max_time,
        region.upper_closed() & index,
    )
}

/// Split a region into its sixteen children, ordered by child index.
pub fn split(region: &SpaceTimeBox) -> [SpaceTimeBox; BRANCHING_FACTOR] {
    std::array::from_fn(|index| child(region, index as u8))
}
