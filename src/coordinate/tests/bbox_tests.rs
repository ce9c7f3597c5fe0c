//! Tests for approximate bounding boxes and containment

use super::test_utils::{assert_close, coord};
use crate::coordinate::{bounding_box, point_in_box, BoundingBox};
use crate::errors::GeoError;

#[test]
fn test_one_degree_box_at_equator() {
    let center = coord(0.0, 0.0);
    let bbox = bounding_box(&center, 111_000.0).unwrap();

    assert_close(bbox.north, 1.0, 1e-12);
    assert_close(bbox.south, -1.0, 1e-12);
    assert_close(bbox.east, 1.0, 1e-12);
    assert_close(bbox.west, -1.0, 1e-12);
    assert!(point_in_box(&center, &bbox));
}

#[test]
fn test_longitude_span_widens_with_latitude() {
    let equator = bounding_box(&coord(0.0, 0.0), 5_000.0).unwrap();
    let north = bounding_box(&coord(60.0, 0.0), 5_000.0).unwrap();

    assert_close(north.height(), equator.height(), 1e-12);
    // cos(60°) = 0.5
    assert_close(north.width(), equator.width() * 2.0, 1e-9);
}

#[test]
fn test_south_never_exceeds_north() {
    for lat in [-89.0, -45.0, 0.0, 30.0, 89.9] {
        for radius in [0.0, 1.0, 1_000.0, 250_000.0] {
            let bbox = bounding_box(&coord(lat, 10.0), radius).unwrap();
            assert!(bbox.south <= bbox.north);
        }
    }
}

#[test]
fn test_zero_radius_box_contains_only_center() {
    let center = coord(14.5995, 120.9842);
    let bbox = bounding_box(&center, 0.0).unwrap();
    assert!(point_in_box(&center, &bbox));
    assert!(!point_in_box(&coord(14.5996, 120.9842), &bbox));
}

#[test]
fn test_negative_radius_is_rejected() {
    match bounding_box(&coord(0.0, 0.0), -1.0) {
        Err(GeoError::InvalidDistance(r)) => assert_eq!(r, -1.0),
        other => panic!("expected InvalidDistance, got {:?}", other),
    }
    assert!(bounding_box(&coord(0.0, 0.0), f64::NAN).is_err());
    assert!(bounding_box(&coord(0.0, 0.0), f64::INFINITY).is_err());
}

#[test]
fn test_point_in_box_is_inclusive() {
    let bbox = BoundingBox::new(2.0, 1.0, 4.0, 3.0);
    assert!(point_in_box(&coord(2.0, 4.0), &bbox));
    assert!(point_in_box(&coord(1.0, 3.0), &bbox));
    assert!(point_in_box(&coord(1.5, 3.5), &bbox));
    assert!(!point_in_box(&coord(2.0001, 3.5), &bbox));
    assert!(!point_in_box(&coord(1.5, 2.9999), &bbox));
}

#[test]
fn test_antimeridian_box_is_not_special_cased() {
    // west > east: nothing is inside
    let bbox = BoundingBox::new(10.0, -10.0, -179.0, 179.0);
    assert!(!point_in_box(&coord(0.0, 179.5), &bbox));
    assert!(!point_in_box(&coord(0.0, -179.5), &bbox));
}

#[test]
fn test_contains_matches_free_function() {
    let bbox = BoundingBox::around(&coord(40.0, -74.0), 2_000.0).unwrap();
    let inside = coord(40.005, -74.005);
    let outside = coord(40.5, -74.0);
    assert_eq!(bbox.contains(&inside), point_in_box(&inside, &bbox));
    assert!(bbox.contains(&inside));
    assert!(!bbox.contains(&outside));
}

#[test]
fn test_from_string() {
    let bbox = BoundingBox::from_string("14.7, 14.5, 121.1, 120.9").unwrap();
    assert_eq!(bbox, BoundingBox::new(14.7, 14.5, 121.1, 120.9));

    assert!(matches!(BoundingBox::from_string("1,2,3"), Err(GeoError::ParseError(_))));
    assert!(matches!(BoundingBox::from_string("1,2,x,4"), Err(GeoError::ParseError(_))));
    assert!(matches!(BoundingBox::from_string("NaN,0,1,0"), Err(GeoError::ParseError(_))));
    assert!(matches!(BoundingBox::from_string("1,0,inf,0"), Err(GeoError::ParseError(_))));
}

#[test]
fn test_from_string_rejects_inverted_latitudes() {
    assert!(matches!(BoundingBox::from_string("-1,1,1,0"), Err(GeoError::InvalidBoundingBox(_))));

    // a degenerate box is still a box
    let flat = BoundingBox::from_string("1,1,1,0").unwrap();
    assert!(flat.contains(&coord(1.0, 0.5)));
}

#[test]
fn test_validate_query() {
    assert!(BoundingBox::new(14.7, 14.5, 121.1, 120.9).validate_query(1.0).is_ok());

    // north not above south
    assert!(BoundingBox::new(14.5, 14.5, 121.1, 120.9).validate_query(1.0).is_err());
    // too tall
    assert!(BoundingBox::new(16.0, 14.5, 121.1, 120.9).validate_query(1.0).is_err());
    // too wide
    assert!(BoundingBox::new(14.7, 14.5, 122.5, 120.9).validate_query(1.0).is_err());
    // corners out of range
    assert!(BoundingBox::new(91.0, 90.5, 1.0, 0.0).validate_query(1.0).is_err());
    assert!(BoundingBox::new(1.0, 0.0, 181.0, 180.5).validate_query(1.0).is_err());
    // a wider limit accepts the wide box
    assert!(BoundingBox::new(14.7, 14.5, 122.5, 120.9).validate_query(2.0).is_ok());
}
