//! Custom error types for geodesy and track processing

use std::fmt;
use std::io;

/// Which latitude bound a coordinate violated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatitudeBound {
    /// Latitude above +90 degrees
    Upper,
    /// Latitude below -90 degrees
    Lower,
    /// Latitude is NaN
    NotFinite,
}

impl LatitudeBound {
    /// Classify a latitude, returning `None` when it lies within [-90, 90]
    pub fn violated_by(latitude: f64) -> Option<Self> {
        if latitude.is_nan() {
            Some(LatitudeBound::NotFinite)
        } else if latitude > 90.0 {
            Some(LatitudeBound::Upper)
        } else if latitude < -90.0 {
            Some(LatitudeBound::Lower)
        } else {
            None
        }
    }
}

impl fmt::Display for LatitudeBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LatitudeBound::Upper => write!(f, "exceeds +90"),
            LatitudeBound::Lower => write!(f, "is below -90"),
            LatitudeBound::NotFinite => write!(f, "is not a number"),
        }
    }
}

/// Geodesy-specific error types
#[derive(Debug)]
pub enum GeoError {
    /// Latitude outside [-90, 90]
    InvalidCoordinate {
        /// Position of the coordinate in its sequence, if it came from one
        index: Option<usize>,
        /// The offending latitude
        latitude: f64,
        /// Which bound was violated
        bound: LatitudeBound,
    },
    /// Longitude is NaN or infinite
    InvalidLongitude {
        /// Position of the coordinate in its sequence, if it came from one
        index: Option<usize>,
        /// The offending longitude
        longitude: f64,
    },
    /// Simplification tolerance is negative or not finite
    InvalidTolerance(f64),
    /// Radius or distance is negative or not finite
    InvalidDistance(f64),
    /// Bearing is not finite
    InvalidBearing(f64),
    /// Query bounding box failed validation
    InvalidBoundingBox(String),
    /// Malformed coordinate text or track line
    ParseError(String),
    /// Malformed configuration
    ConfigError(String),
    /// I/O error
    IoError(io::Error),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for GeoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeoError::InvalidCoordinate { index: Some(i), latitude, bound } => {
                write!(f, "Invalid coordinate at index {}: latitude {} {}", i, latitude, bound)
            }
            GeoError::InvalidCoordinate { index: None, latitude, bound } => {
                write!(f, "Invalid coordinate: latitude {} {}", latitude, bound)
            }
            GeoError::InvalidLongitude { index: Some(i), longitude } => {
                write!(f, "Invalid coordinate at index {}: longitude {} is not finite", i, longitude)
            }
            GeoError::InvalidLongitude { index: None, longitude } => {
                write!(f, "Invalid coordinate: longitude {} is not finite", longitude)
            }
            GeoError::InvalidTolerance(t) => {
                write!(f, "Invalid tolerance: {} (must be finite and >= 0)", t)
            }
            GeoError::InvalidDistance(d) => {
                write!(f, "Invalid distance: {} (must be finite and >= 0)", d)
            }
            GeoError::InvalidBearing(b) => write!(f, "Invalid bearing: {} (must be finite)", b),
            GeoError::InvalidBoundingBox(msg) => write!(f, "Invalid bounding box: {}", msg),
            GeoError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            GeoError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            GeoError::IoError(e) => write!(f, "I/O error: {}", e),
            GeoError::GenericError(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for GeoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GeoError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for GeoError {
    fn from(error: io::Error) -> Self {
        GeoError::IoError(error)
    }
}

impl From<String> for GeoError {
    fn from(msg: String) -> Self {
        GeoError::GenericError(msg)
    }
}

/// Result type for geodesy operations
pub type GeoResult<T> = Result<T, GeoError>;
