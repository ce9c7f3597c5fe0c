//! Track file reading and writing
//!
//! A track file holds one `lat,lon` pair per line. Blank lines and lines
//! starting with `#` are skipped, as is an optional `lat,lon` header.

use std::fs;
use std::path::Path as FsPath;
use log::debug;
use crate::errors::{GeoError, GeoResult};
use crate::simplify::Path;
use super::coordinate_utils::{is_header_line, parse_pair};

/// Parse track text into raw `(lat, lon)` pairs
///
/// Parse errors name the 1-based line number.
pub fn parse_track_pairs(content: &str) -> GeoResult<Vec<(f64, f64)>> {
    let mut pairs = Vec::new();

    for (line_no, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if pairs.is_empty() && is_header_line(trimmed) {
            continue;
        }

        let pair = parse_pair(trimmed).map_err(|e| match e {
            GeoError::ParseError(msg) => GeoError::ParseError(format!("line {}: {}", line_no + 1, msg)),
            other => other,
        })?;
        pairs.push(pair);
    }

    Ok(pairs)
}

/// Parse track text into a validated path
pub fn parse_track(content: &str) -> GeoResult<Path> {
    Path::from_pairs(&parse_track_pairs(content)?)
}

/// Read and validate a track file
pub fn read_track<P: AsRef<FsPath>>(path: P) -> GeoResult<Path> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let track = parse_track(&content)?;
    debug!("Read {} points from {}", track.len(), path.display());
    Ok(track)
}

/// Render a path in track file format with six decimal places
pub fn format_track(track: &Path) -> String {
    let mut out = String::with_capacity(track.len() * 24);
    for point in track.points() {
        out.push_str(&point.to_string());
        out.push('\n');
    }
    out
}

/// Write a path to a track file, replacing any existing file
pub fn write_track<P: AsRef<FsPath>>(path: P, track: &Path) -> GeoResult<()> {
    let path = path.as_ref();
    fs::write(path, format_track(track))?;
    debug!("Wrote {} points to {}", track.len(), path.display());
    Ok(())
}
