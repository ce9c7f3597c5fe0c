//! Ordered coordinate sequence representing a travelled track

use crate::coordinate::{path_length, Coordinate};
use crate::errors::GeoResult;
use super::douglas_peucker;

/// An ordered sequence of coordinates
///
/// Order is meaningful. Duplicate and out-of-order points are allowed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    points: Vec<Coordinate>,
}

impl Path {
    /// Wrap already validated coordinates
    pub fn new(points: Vec<Coordinate>) -> Self {
        Path { points }
    }

    /// Build a path from `(lat, lon)` pairs, validating every latitude
    pub fn from_pairs(pairs: &[(f64, f64)]) -> GeoResult<Self> {
        Ok(Path::new(Coordinate::from_pairs(pairs)?))
    }

    /// The points in travel order
    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the path has no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First point, if any
    pub fn first(&self) -> Option<&Coordinate> {
        self.points.first()
    }

    /// Last point, if any
    pub fn last(&self) -> Option<&Coordinate> {
        self.points.last()
    }

    /// Great-circle length in meters
    pub fn length_m(&self) -> f64 {
        path_length(&self.points)
    }

    /// Douglas-Peucker simplification at `tolerance_m` meters
    pub fn simplify(&self, tolerance_m: f64) -> GeoResult<Path> {
        douglas_peucker::simplify(&self.points, tolerance_m).map(Path::new)
    }

    /// Consume the path, returning its points
    pub fn into_points(self) -> Vec<Coordinate> {
        self.points
    }
}

impl From<Vec<Coordinate>> for Path {
    fn from(points: Vec<Coordinate>) -> Self {
        Path::new(points)
    }
}
