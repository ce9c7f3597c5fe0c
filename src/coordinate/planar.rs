//! Local planar approximation of degrees as meters
//!
//! Bounding boxes and the simplifier's perpendicular distance both treat a
//! degree as a fixed number of meters. This only holds at regional scale
//! and breaks down near the poles.

/// Approximate length of one degree of latitude in meters
pub const METERS_PER_DEGREE: f64 = 111_000.0;

/// Degrees of latitude spanned by a distance in meters
pub fn latitude_degrees(meters: f64) -> f64 {
    meters / METERS_PER_DEGREE
}

/// Degrees of longitude spanned by a distance in meters at a given latitude
///
/// The divisor shrinks with `cos(latitude)`, so the result grows without
/// bound as the latitude approaches either pole.
pub fn longitude_degrees(meters: f64, latitude: f64) -> f64 {
    meters / (METERS_PER_DEGREE * latitude.to_radians().cos())
}

/// Convert a planar distance expressed in degrees to meters
pub fn degrees_to_meters(degrees: f64) -> f64 {
    degrees * METERS_PER_DEGREE
}
