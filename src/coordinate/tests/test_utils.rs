use crate::coordinate::Coordinate;

/// Builds a coordinate that is known to be valid
pub fn coord(lat: f64, lon: f64) -> Coordinate {
    Coordinate::new(lat, lon).unwrap()
}

/// Asserts two floats are within `tolerance` of each other
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {} to be within {} of {}",
        actual, tolerance, expected
    );
}

/// Smallest absolute difference between two headings, in degrees
pub fn heading_difference(a: f64, b: f64) -> f64 {
    let diff = (a - b).rem_euclid(360.0);
    diff.min(360.0 - diff)
}

/// A handful of locations spread over both hemispheres
pub fn sample_coordinates() -> Vec<Coordinate> {
    vec![
        coord(0.0, 0.0),
        coord(14.5995, 120.9842),
        coord(51.5074, -0.1278),
        coord(-33.8688, 151.2093),
        coord(40.7128, -74.0060),
        coord(-54.8019, -68.3030),
        coord(64.1466, -21.9426),
    ]
}
