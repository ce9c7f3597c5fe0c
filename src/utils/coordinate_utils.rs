//! Coordinate utility functions
//!
//! Parsing of `lat,lon` text as typed on the command line or stored in
//! track files, and human-readable formatting of distances.

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use crate::coordinate::Coordinate;
use crate::errors::{GeoError, GeoResult};

lazy_static! {
    // "lat,lon" with optional whitespace and optional surrounding parentheses
    static ref COORDINATE_PATTERN: Regex = Regex::new(
        r"^\s*\(?\s*([-+]?(?:\d+\.?\d*|\.\d+)(?:[eE][-+]?\d+)?)\s*,\s*([-+]?(?:\d+\.?\d*|\.\d+)(?:[eE][-+]?\d+)?)\s*\)?\s*$"
    ).expect("coordinate pattern is valid");
}

/// Parse a `lat,lon` string into a raw pair without range validation
///
/// # Arguments
/// * `text` - Coordinate text, e.g. `"14.5995,120.9842"` or `"(14.5995, 120.9842)"`
///
/// # Returns
/// The `(lat, lon)` pair or a `GeoError::ParseError`
pub fn parse_pair(text: &str) -> GeoResult<(f64, f64)> {
    let captures = COORDINATE_PATTERN.captures(text).ok_or_else(|| {
        GeoError::ParseError(format!("Coordinate must be in format 'lat,lon', got '{}'", text.trim()))
    })?;

    let lat = captures[1].parse::<f64>()
        .map_err(|_| GeoError::ParseError(format!("Invalid latitude: '{}'", &captures[1])))?;
    let lon = captures[2].parse::<f64>()
        .map_err(|_| GeoError::ParseError(format!("Invalid longitude: '{}'", &captures[2])))?;

    debug!("Parsed coordinate: lat={}, lon={}", lat, lon);
    Ok((lat, lon))
}

/// Parse and validate a `lat,lon` string
pub fn parse_coordinate(text: &str) -> GeoResult<Coordinate> {
    let (lat, lon) = parse_pair(text)?;
    Coordinate::new(lat, lon)
}

/// Whether a line is a `lat,lon` header rather than data
pub fn is_header_line(line: &str) -> bool {
    let normalized: String = line
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase();
    matches!(normalized.as_str(), "lat,lon" | "lat,lng" | "latitude,longitude")
}

/// Format a distance in meters as `"850m"` or `"1.25km"`
pub fn format_distance(meters: f64) -> String {
    if meters < 1000.0 {
        format!("{}m", meters.round())
    } else {
        format!("{:.2}km", meters / 1000.0)
    }
}
