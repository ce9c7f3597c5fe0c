//! Path simplification
//!
//! This module reduces GPS tracks with the Douglas-Peucker algorithm,
//! measuring deviation with a planar perpendicular-distance metric.

pub mod douglas_peucker;
pub mod perpendicular;
mod path;


pub use self::douglas_peucker::{simplify, simplify_indices};
pub use self::path::Path;
pub use self::perpendicular::perpendicular_distance;
