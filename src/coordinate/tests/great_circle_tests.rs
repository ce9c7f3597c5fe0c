//! Tests for distance, bearing and destination projection

use super::test_utils::{assert_close, coord, heading_difference, sample_coordinates};
use crate::coordinate::{bearing, destination_point, Coordinate, distance, path_length, EARTH_RADIUS_M};
use crate::errors::GeoError;
use std::f64::consts::PI;

#[test]
fn test_distance_to_self_is_zero() {
    for c in sample_coordinates() {
        assert_eq!(distance(&c, &c), 0.0);
    }
}

#[test]
fn test_distance_is_symmetric() {
    let coords = sample_coordinates();
    for a in &coords {
        for b in &coords {
            assert_eq!(distance(a, b), distance(b, a));
        }
    }
}

#[test]
fn test_known_distance_london_paris() {
    let london = coord(51.5074, -0.1278);
    let paris = coord(48.8566, 2.3522);
    assert_close(distance(&london, &paris), 343_556.06, 1.0);
}

#[test]
fn test_one_degree_along_equator() {
    let d = distance(&coord(0.0, 0.0), &coord(0.0, 1.0));
    assert_close(d, 111_194.93, 0.01);
    let d = distance(&coord(0.0, 0.0), &coord(1.0, 0.0));
    assert_close(d, 111_194.93, 0.01);
}

#[test]
fn test_antipodal_distance_is_half_circumference() {
    let d = distance(&coord(0.0, 0.0), &coord(0.0, 180.0));
    assert_close(d, PI * EARTH_RADIUS_M, 1e-3);
    let d = distance(&coord(90.0, 0.0), &coord(-90.0, 0.0));
    assert_close(d, PI * EARTH_RADIUS_M, 1e-3);
}

#[test]
fn test_distance_range() {
    let coords = sample_coordinates();
    for a in &coords {
        for b in &coords {
            let d = distance(a, b);
            assert!(d >= 0.0 && d <= PI * EARTH_RADIUS_M + 1e-6);
        }
    }
}

#[test]
fn test_cardinal_bearings() {
    let origin = coord(0.0, 0.0);
    assert_close(bearing(&origin, &coord(1.0, 0.0)), 0.0, 1e-9);
    assert_close(bearing(&origin, &coord(0.0, 1.0)), 90.0, 1e-9);
    assert_close(bearing(&origin, &coord(-1.0, 0.0)), 180.0, 1e-9);
    assert_close(bearing(&origin, &coord(0.0, -1.0)), 270.0, 1e-9);
}

#[test]
fn test_bearing_london_paris() {
    let london = coord(51.5074, -0.1278);
    let paris = coord(48.8566, 2.3522);
    assert_close(bearing(&london, &paris), 148.1156, 1e-3);
}

#[test]
fn test_bearing_of_coincident_points_is_zero() {
    for c in sample_coordinates() {
        assert_eq!(bearing(&c, &c), 0.0);
    }
}

#[test]
fn test_bearing_is_within_range() {
    let coords = sample_coordinates();
    for a in &coords {
        for b in &coords {
            let brg = bearing(a, b);
            assert!((0.0..360.0).contains(&brg), "bearing {} out of range", brg);
        }
    }
}

#[test]
fn test_destination_round_trips_distance() {
    let distances = [0.0, 1.0, 250.0, 10_000.0, 1_500_000.0, 8_000_000.0];
    let bearings = [0.0, 45.0, 90.0, 135.0, 180.0, 225.0, 270.0, 315.0, 359.9];

    for origin in sample_coordinates() {
        for &d in &distances {
            for &b in &bearings {
                let dest = destination_point(&origin, d, b).unwrap();
                assert_close(distance(&origin, &dest), d, 1.0);
            }
        }
    }
}

#[test]
fn test_destination_round_trips_bearing() {
    let bearings = [0.0, 30.0, 90.0, 179.0, 181.0, 270.0, 330.0];

    for origin in sample_coordinates() {
        for &b in &bearings {
            let dest = destination_point(&origin, 25_000.0, b).unwrap();
            assert!(heading_difference(bearing(&origin, &dest), b) < 1e-6,
                    "bearing {} from {} did not round trip", b, origin);
        }
    }
}

#[test]
fn test_destination_with_zero_distance_is_origin() {
    let origin = coord(14.5995, 120.9842);
    let dest = destination_point(&origin, 0.0, 123.0).unwrap();
    assert_close(dest.latitude(), origin.latitude(), 1e-12);
    assert_close(dest.longitude(), origin.longitude(), 1e-12);
}

#[test]
fn test_destination_does_not_wrap_longitude() {
    let origin = coord(0.0, 179.9);
    let dest = destination_point(&origin, 111_194.93, 90.0).unwrap();
    assert!(dest.longitude() > 180.0);
}

#[test]
fn test_destination_rejects_unusable_distance_and_bearing() {
    let origin = coord(10.0, 10.0);
    for d in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, -1_000.0] {
        assert!(matches!(destination_point(&origin, d, 0.0), Err(GeoError::InvalidDistance(_))),
                "distance {} accepted", d);
    }
    for b in [f64::NAN, f64::INFINITY] {
        assert!(matches!(destination_point(&origin, 100.0, b), Err(GeoError::InvalidBearing(_))),
                "bearing {} accepted", b);
    }

    let dest = destination_point(&origin, 8_000_000.0, 45.0).unwrap();
    assert!(Coordinate::new(dest.latitude(), dest.longitude()).is_ok());
}

#[test]
fn test_path_length_sums_legs() {
    let a = coord(0.0, 0.0);
    let b = coord(0.0, 1.0);
    let c = coord(1.0, 1.0);
    let expected = distance(&a, &b) + distance(&b, &c);
    assert_close(path_length(&[a, b, c]), expected, 1e-9);
}

#[test]
fn test_path_length_of_short_paths_is_zero() {
    assert_eq!(path_length(&[]), 0.0);
    assert_eq!(path_length(&[coord(10.0, 10.0)]), 0.0);
}
