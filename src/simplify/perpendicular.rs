//! Perpendicular distance from a point to a chord
//!
//! Works in raw degree space with latitude as `x` and longitude as `y`,
//! then scales by the fixed meters-per-degree factor. Longitude is not
//! shortened by `cos(latitude)`, so east-west offsets are overstated away
//! from the equator.

use crate::coordinate::planar;
use crate::coordinate::Coordinate;

/// Distance in meters from `point` to the infinite line through `start` and `end`
///
/// A zero-length chord (`start == end`) yields 0.
pub fn perpendicular_distance(point: &Coordinate, start: &Coordinate, end: &Coordinate) -> f64 {
    let (x0, y0) = point.as_pair();
    let (x1, y1) = start.as_pair();
    let (x2, y2) = end.as_pair();

    let dx = x2 - x1;
    let dy = y2 - y1;
    let denominator = (dy * dy + dx * dx).sqrt();
    if denominator == 0.0 {
        return 0.0;
    }

    let numerator = (dy * x0 - dx * y0 + x2 * y1 - y2 * x1).abs();
    planar::degrees_to_meters(numerator / denominator)
}
