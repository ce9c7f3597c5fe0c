//! Bounding box structure for defining regions

use std::fmt;
use log::debug;
use super::planar;
use super::point::Coordinate;
use crate::errors::{GeoError, GeoResult};

/// An axis-aligned box in latitude/longitude space
///
/// Boxes from [`bounding_box`] and [`BoundingBox::from_string`] always have
/// `south <= north`. [`BoundingBox::new`] takes its edges as given, and an
/// inverted box built that way contains nothing.
///
/// Boxes that cross the antimeridian are not handled specially: a box
/// with `west > east` contains nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Northern latitude bound
    pub north: f64,
    /// Southern latitude bound
    pub south: f64,
    /// Eastern longitude bound
    pub east: f64,
    /// Western longitude bound
    pub west: f64,
}

impl BoundingBox {
    /// Create a new bounding box from its four edges, unchecked
    pub fn new(north: f64, south: f64, east: f64, west: f64) -> Self {
        BoundingBox { north, south, east, west }
    }

    /// Parse a bounding box from a string (format: "north,south,east,west")
    ///
    /// Every edge must be a finite number and south may not lie above north.
    pub fn from_string(bbox_str: &str) -> GeoResult<Self> {
        let parts: Vec<&str> = bbox_str.split(',').collect();
        if parts.len() != 4 {
            return Err(GeoError::ParseError(
                "Bounding box must have 4 comma-separated values (north,south,east,west)".to_string()));
        }

        let mut values = [0.0f64; 4];
        for (slot, (part, name)) in values
            .iter_mut()
            .zip(parts.iter().zip(["north", "south", "east", "west"]))
        {
            *slot = part.trim().parse::<f64>()
                .ok()
                .filter(|v: &f64| v.is_finite())
                .ok_or_else(|| GeoError::ParseError(format!("Invalid {} value: '{}'", name, part.trim())))?;
        }
        if values[1] > values[0] {
            return Err(GeoError::InvalidBoundingBox(
                format!("south {} lies above north {}", values[1], values[0])));
        }

        Ok(BoundingBox::new(values[0], values[1], values[2], values[3]))
    }

    /// Approximate box around a point; see [`bounding_box`]
    pub fn around(center: &Coordinate, radius_m: f64) -> GeoResult<Self> {
        bounding_box(center, radius_m)
    }

    /// Check if this bounding box contains a point (edges inclusive)
    pub fn contains(&self, point: &Coordinate) -> bool {
        point_in_box(point, self)
    }

    /// Latitude span in degrees
    pub fn height(&self) -> f64 {
        self.north - self.south
    }

    /// Longitude span in degrees
    pub fn width(&self) -> f64 {
        self.east - self.west
    }

    /// Validate a caller-supplied query box
    ///
    /// Both corners must be valid coordinates, north must lie strictly
    /// above south, and neither span may exceed `max_span_deg`.
    pub fn validate_query(&self, max_span_deg: f64) -> GeoResult<()> {
        for (name, lat) in [("north", self.north), ("south", self.south)] {
            if !(-90.0..=90.0).contains(&lat) {
                return Err(GeoError::InvalidBoundingBox(
                    format!("{} latitude {} is outside [-90, 90]", name, lat)));
            }
        }
        for (name, lon) in [("east", self.east), ("west", self.west)] {
            if !(-180.0..=180.0).contains(&lon) {
                return Err(GeoError::InvalidBoundingBox(
                    format!("{} longitude {} is outside [-180, 180]", name, lon)));
            }
        }
        if self.north <= self.south {
            return Err(GeoError::InvalidBoundingBox(
                "north must be greater than south".to_string()));
        }
        if self.height().abs() > max_span_deg || self.width().abs() > max_span_deg {
            return Err(GeoError::InvalidBoundingBox(
                format!("box too large (max {} degree span)", max_span_deg)));
        }
        Ok(())
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "N {:.6} S {:.6} E {:.6} W {:.6}", self.north, self.south, self.east, self.west)
    }
}

/// Approximate bounding box of `radius_m` meters around `center`
///
/// Uses a flat conversion of 111,000 m per degree of latitude and
/// `111,000·cos(lat)` m per degree of longitude. Not geodesically exact:
/// the longitude span inflates towards the poles, and the box is not
/// wrapped at the antimeridian.
///
/// # Returns
/// The box, or `GeoError::InvalidDistance` for a negative or non-finite radius
pub fn bounding_box(center: &Coordinate, radius_m: f64) -> GeoResult<BoundingBox> {
    if !radius_m.is_finite() || radius_m < 0.0 {
        return Err(GeoError::InvalidDistance(radius_m));
    }

    let lat_delta = planar::latitude_degrees(radius_m);
    let lon_delta = planar::longitude_degrees(radius_m, center.latitude());
    debug!("Bounding box around {} with radius {} m: lat delta {}, lon delta {}",
           center, radius_m, lat_delta, lon_delta);

    Ok(BoundingBox {
        north: center.latitude() + lat_delta,
        south: center.latitude() - lat_delta,
        east: center.longitude() + lon_delta,
        west: center.longitude() - lon_delta,
    })
}

/// Inclusive containment test on both axes
pub fn point_in_box(point: &Coordinate, bbox: &BoundingBox) -> bool {
    bbox.south <= point.latitude()
        && point.latitude() <= bbox.north
        && bbox.west <= point.longitude()
        && point.longitude() <= bbox.east
}
