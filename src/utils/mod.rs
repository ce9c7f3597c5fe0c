//! Utility modules for common functionality
//!
//! This module provides logging, progress reporting, and the text formats
//! used by the command-line front end.

pub mod logger;
pub(crate) mod progress;
pub mod coordinate_utils;
pub mod track_utils;
