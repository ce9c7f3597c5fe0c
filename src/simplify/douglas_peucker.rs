//! Douglas-Peucker polyline simplification
//!
//! The textbook algorithm recurses into the two halves on either side of
//! the farthest point. Long GPS tracks can make that recursion arbitrarily
//! deep, so ranges are pushed onto an explicit worklist instead. A point is
//! retained exactly when the recursive formulation would retain it, so the
//! output is identical.

use log::debug;
use crate::coordinate::Coordinate;
use crate::errors::{GeoError, GeoResult};
use super::perpendicular::perpendicular_distance;

/// Simplify a path, keeping only points that deviate more than `tolerance_m`
///
/// # Arguments
/// * `points` - The input path; order is preserved
/// * `tolerance_m` - Maximum allowed perpendicular distance in meters
///
/// # Returns
/// An order-preserving subsequence that always includes the first and last
/// points, or `GeoError::InvalidTolerance` for a negative or non-finite
/// tolerance. Paths of two points or fewer are returned unchanged.
pub fn simplify(points: &[Coordinate], tolerance_m: f64) -> GeoResult<Vec<Coordinate>> {
    let indices = simplify_indices(points, tolerance_m)?;
    Ok(indices.into_iter().map(|i| points[i]).collect())
}

/// Simplify a path and return the indices of retained points
///
/// Same contract as [`simplify`]; indices are strictly increasing.
pub fn simplify_indices(points: &[Coordinate], tolerance_m: f64) -> GeoResult<Vec<usize>> {
    if !tolerance_m.is_finite() || tolerance_m < 0.0 {
        return Err(GeoError::InvalidTolerance(tolerance_m));
    }
    if points.len() <= 2 {
        return Ok((0..points.len()).collect());
    }

    let mut keep = vec![false; points.len()];
    keep[0] = true;
    keep[points.len() - 1] = true;

    let mut worklist = vec![(0usize, points.len() - 1)];
    while let Some((start, end)) = worklist.pop() {
        if end <= start + 1 {
            continue;
        }

        if let Some(split) = farthest_beyond(points, start, end, tolerance_m) {
            keep[split] = true;
            worklist.push((split, end));
            worklist.push((start, split));
        }
    }

    let kept: Vec<usize> = keep
        .iter()
        .enumerate()
        .filter_map(|(i, &k)| if k { Some(i) } else { None })
        .collect();
    debug!("Simplified {} points to {} (tolerance {} m)", points.len(), kept.len(), tolerance_m);

    Ok(kept)
}

/// Index of the interior point farthest from the chord `start..end`, if it
/// lies strictly beyond `tolerance_m`
///
/// The scan uses strict `>` so the first index reaching the maximum wins.
fn farthest_beyond(points: &[Coordinate], start: usize, end: usize, tolerance_m: f64) -> Option<usize> {
    let first = &points[start];
    let last = &points[end];

    let mut max_distance = 0.0;
    let mut max_index = start;
    for (i, point) in points.iter().enumerate().take(end).skip(start + 1) {
        let distance = perpendicular_distance(point, first, last);
        if distance > max_distance {
            max_distance = distance;
            max_index = i;
        }
    }

    if max_index != start && max_distance > tolerance_m {
        Some(max_index)
    } else {
        None
    }
}
