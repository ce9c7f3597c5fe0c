//! Coordinate structure for representing geographic positions

use std::fmt;
use log::warn;
use crate::errors::{GeoError, GeoResult, LatitudeBound};

/// A geographic position in degrees
///
/// Latitude is validated to lie within [-90, 90] on construction and
/// longitude must be finite. A finite longitude outside (-180, 180] is
/// carried through unmodified; no wraparound is applied anywhere in this crate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Create a new coordinate, rejecting latitudes outside [-90, 90]
    ///
    /// # Arguments
    /// * `latitude` - Latitude in degrees
    /// * `longitude` - Longitude in degrees, passed through as-is if finite
    ///
    /// # Returns
    /// The coordinate, `GeoError::InvalidCoordinate` naming the violated
    /// latitude bound, or `GeoError::InvalidLongitude` for a NaN or infinite longitude
    pub fn new(latitude: f64, longitude: f64) -> GeoResult<Self> {
        if let Some(bound) = LatitudeBound::violated_by(latitude) {
            return Err(GeoError::InvalidCoordinate { index: None, latitude, bound });
        }
        if !longitude.is_finite() {
            return Err(GeoError::InvalidLongitude { index: None, longitude });
        }
        if !(-180.0..=180.0).contains(&longitude) {
            warn!("Longitude {} is outside [-180, 180]; using it unmodified", longitude);
        }
        Ok(Coordinate { latitude, longitude })
    }

    /// Build coordinates from `(lat, lon)` pairs, reporting the index of the first bad one
    pub fn from_pairs(pairs: &[(f64, f64)]) -> GeoResult<Vec<Self>> {
        pairs
            .iter()
            .enumerate()
            .map(|(i, &(lat, lon))| {
                Coordinate::new(lat, lon).map_err(|e| match e {
                    GeoError::InvalidCoordinate { latitude, bound, .. } => {
                        GeoError::InvalidCoordinate { index: Some(i), latitude, bound }
                    }
                    GeoError::InvalidLongitude { longitude, .. } => {
                        GeoError::InvalidLongitude { index: Some(i), longitude }
                    }
                    other => other,
                })
            })
            .collect()
    }

    /// Construct without validation; callers must guarantee the latitude range
    pub(crate) fn from_degrees_unchecked(latitude: f64, longitude: f64) -> Self {
        Coordinate { latitude, longitude }
    }

    /// Latitude in degrees
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// The coordinate as a `(lat, lon)` pair
    pub fn as_pair(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6},{:.6}", self.latitude, self.longitude)
    }
}
