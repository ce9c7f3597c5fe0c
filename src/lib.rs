//! Great-circle geometry, approximate region queries and GPS track
//! simplification.
//!
//! All geometry assumes a spherical Earth of radius 6,371 km. Region
//! queries and the simplifier's deviation metric use a flat 111 km per
//! degree approximation that is only accurate at regional scale; it
//! degrades towards the poles and ignores the antimeridian.

pub mod errors;
pub mod coordinate;
pub mod simplify;
pub mod config;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::GeoPath;

pub use config::Config;
pub use coordinate::{bearing, bounding_box, destination_point, distance, path_length, point_in_box};
pub use coordinate::{BoundingBox, Coordinate};
pub use errors::{GeoError, GeoResult, LatitudeBound};
pub use simplify::{simplify, simplify_indices, Path};
