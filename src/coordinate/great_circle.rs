//! Great-circle primitives on a spherical Earth

use super::point::Coordinate;
use crate::errors::{GeoError, GeoResult};

/// Mean Earth radius in meters
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Haversine great-circle distance in meters
///
/// Symmetric in its arguments and zero for equal coordinates. The result
/// lies in `[0, π·R]`.
pub fn distance(a: &Coordinate, b: &Coordinate) -> f64 {
    let lat1 = a.latitude().to_radians();
    let lat2 = b.latitude().to_radians();
    let delta_lat = (b.latitude() - a.latitude()).to_radians();
    let delta_lon = (b.longitude() - a.longitude()).to_radians();

    let half_lat = (delta_lat / 2.0).sin();
    let half_lon = (delta_lon / 2.0).sin();
    let h = half_lat * half_lat + lat1.cos() * lat2.cos() * half_lon * half_lon;
    // Rounding can push h a hair above 1 for antipodal points
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * f64::atan2(h.sqrt(), (1.0 - h).sqrt());

    EARTH_RADIUS_M * c
}

/// Initial bearing in degrees `[0, 360)` along the great circle from `a` to `b`
///
/// Coincident points have no defined heading; 0 is returned for them.
pub fn bearing(a: &Coordinate, b: &Coordinate) -> f64 {
    let lat1 = a.latitude().to_radians();
    let lat2 = b.latitude().to_radians();
    let delta_lon = (b.longitude() - a.longitude()).to_radians();

    let x = delta_lon.sin() * lat2.cos();
    let y = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * delta_lon.cos();

    if x == 0.0 && y == 0.0 {
        return 0.0;
    }

    let degrees = f64::atan2(x, y).to_degrees();
    (degrees + 360.0) % 360.0
}

/// Solve the direct geodetic problem on the sphere
///
/// # Arguments
/// * `origin` - Starting point
/// * `distance_m` - Distance to travel in meters
/// * `bearing_deg` - Initial bearing in degrees, clockwise from north
///
/// # Returns
/// The destination, whose longitude is not wrapped into (-180, 180].
/// `GeoError::InvalidDistance` for a negative or non-finite distance and
/// `GeoError::InvalidBearing` for a non-finite bearing.
pub fn destination_point(origin: &Coordinate, distance_m: f64, bearing_deg: f64) -> GeoResult<Coordinate> {
    if !distance_m.is_finite() || distance_m < 0.0 {
        return Err(GeoError::InvalidDistance(distance_m));
    }
    if !bearing_deg.is_finite() {
        return Err(GeoError::InvalidBearing(bearing_deg));
    }

    let lat = origin.latitude().to_radians();
    let lon = origin.longitude().to_radians();
    let theta = bearing_deg.to_radians();
    let delta = distance_m / EARTH_RADIUS_M;

    let sin_dest_lat = lat.sin() * delta.cos() + lat.cos() * delta.sin() * theta.cos();
    let dest_lat = sin_dest_lat.clamp(-1.0, 1.0).asin();
    let dest_lon = lon
        + f64::atan2(
            theta.sin() * delta.sin() * lat.cos(),
            delta.cos() - lat.sin() * dest_lat.sin(),
        );

    // finite inputs keep asin within [-90, 90] and the longitude finite
    Ok(Coordinate::from_degrees_unchecked(dest_lat.to_degrees(), dest_lon.to_degrees()))
}

/// Total length in meters of a path, summing consecutive great-circle legs
pub fn path_length(points: &[Coordinate]) -> f64 {
    points.windows(2).map(|leg| distance(&leg[0], &leg[1])).sum()
}
