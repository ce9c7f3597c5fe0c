//! Coordinate handling for geographic data
//!
//! This module provides the coordinate value type, great-circle
//! primitives on a spherical Earth, and approximate region utilities.

mod bbox;
mod point;
pub mod great_circle;
pub mod planar;

#[cfg(test)]
mod tests;

// Re-export key types
pub use self::bbox::{bounding_box, point_in_box, BoundingBox};
pub use self::point::Coordinate;
pub use self::great_circle::{bearing, destination_point, distance, path_length, EARTH_RADIUS_M};
