use log::{debug, info};
use crate::config::Config;
use crate::coordinate::{self, BoundingBox, Coordinate};
use crate::errors::GeoResult;
use crate::simplify::Path;

/// Main interface to the geopath library
///
/// Accepts raw `(lat, lon)` pairs, validates them at the boundary, and
/// applies configured defaults where an argument is omitted.
#[derive(Debug, Clone)]
pub struct GeoPath {
    config: Config,
}

impl GeoPath {
    /// Create a new GeoPath instance
    ///
    /// # Arguments
    /// * `config` - Settings providing default tolerance, radius and span limits
    ///
    /// # Returns
    /// A GeoPath instance or an error if the configuration is out of range
    pub fn new(config: Config) -> GeoResult<Self> {
        config.validate()?;
        Ok(GeoPath { config })
    }

    /// Create an instance using the built-in defaults
    pub fn with_defaults() -> Self {
        GeoPath { config: Config::defaults() }
    }

    /// The active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Great-circle distance in meters between two raw coordinates
    pub fn distance(&self, from: (f64, f64), to: (f64, f64)) -> GeoResult<f64> {
        let (a, b) = Self::validate_two(from, to)?;
        Ok(coordinate::distance(&a, &b))
    }

    /// Initial bearing in degrees between two raw coordinates
    pub fn bearing(&self, from: (f64, f64), to: (f64, f64)) -> GeoResult<f64> {
        let (a, b) = Self::validate_two(from, to)?;
        Ok(coordinate::bearing(&a, &b))
    }

    /// Destination reached from `origin` after `distance_m` meters on `bearing_deg`
    pub fn destination(&self, origin: (f64, f64), distance_m: f64, bearing_deg: f64) -> GeoResult<Coordinate> {
        let origin = Coordinate::new(origin.0, origin.1)?;
        let dest = coordinate::destination_point(&origin, distance_m, bearing_deg)?;
        debug!("Projected {} by {} m at {}° to {}", origin, distance_m, bearing_deg, dest);
        Ok(dest)
    }

    /// Approximate bounding box around `center`
    ///
    /// # Arguments
    /// * `center` - Raw `(lat, lon)` center
    /// * `radius_m` - Radius in meters, or the configured default
    pub fn region(&self, center: (f64, f64), radius_m: Option<f64>) -> GeoResult<BoundingBox> {
        let center = Coordinate::new(center.0, center.1)?;
        let radius = radius_m.unwrap_or(self.config.default_radius_m);
        info!("Computing bounding box of {} m around {}", radius, center);
        coordinate::bounding_box(&center, radius)
    }

    /// Build and validate a caller-supplied query box against the configured span limit
    pub fn query_bounds(&self, north: f64, south: f64, east: f64, west: f64) -> GeoResult<BoundingBox> {
        let bbox = BoundingBox::new(north, south, east, west);
        bbox.validate_query(self.config.max_query_span_deg)?;
        Ok(bbox)
    }

    /// Whether a raw coordinate lies within a box
    pub fn contains(&self, bbox: &BoundingBox, point: (f64, f64)) -> GeoResult<bool> {
        let point = Coordinate::new(point.0, point.1)?;
        Ok(coordinate::point_in_box(&point, bbox))
    }

    /// Validate a raw track and simplify it
    ///
    /// # Arguments
    /// * `pairs` - Track samples as `(lat, lon)` in travel order
    /// * `tolerance_m` - Tolerance in meters, or the configured default
    ///
    /// # Returns
    /// The simplified path, or an error naming the first invalid sample
    pub fn simplify(&self, pairs: &[(f64, f64)], tolerance_m: Option<f64>) -> GeoResult<Path> {
        let path = Path::from_pairs(pairs)?;
        self.simplify_path(&path, tolerance_m)
    }

    /// Simplify an already validated path
    pub fn simplify_path(&self, path: &Path, tolerance_m: Option<f64>) -> GeoResult<Path> {
        let tolerance = tolerance_m.unwrap_or(self.config.tolerance_m);
        let simplified = path.simplify(tolerance)?;
        info!("Simplified track from {} to {} points at {} m tolerance",
              path.len(), simplified.len(), tolerance);
        Ok(simplified)
    }

    /// Great-circle length in meters of a raw track
    pub fn track_length(&self, pairs: &[(f64, f64)]) -> GeoResult<f64> {
        Ok(Path::from_pairs(pairs)?.length_m())
    }

    fn validate_two(from: (f64, f64), to: (f64, f64)) -> GeoResult<(Coordinate, Coordinate)> {
        let pairs = [from, to];
        let coords = Coordinate::from_pairs(&pairs)?;
        Ok((coords[0], coords[1]))
    }
}
