//! Stunt level documents.
//!
//! A level is authored as a JSON object holding a list of polylines,
//! each polyline being an ordered list of `{x, y}` points where `x` is
//! distance along the track and `y` is elevation:
//!
//! ```json
//! { "polyLines": [ { "points": [ { "x": 0.0, "y": 12.5 } ] } ] }
//! ```
//!
//! Unknown fields are ignored, `x` and `y` are required.

mod error;
mod service;

pub use crate::{
    error::LevelError,
    service::{LevelService, DEFAULT_BASE_URL, DEFAULT_TIMEOUT},
};
use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, io::Read, path::Path, str::FromStr};

/// A single elevation sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Distance along the track.
    pub x: f64,
    /// Elevation.
    pub y: f64,
}

/// An ordered run of points, as authored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    pub points: Vec<Point>,
}

impl Polyline {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl FromIterator<(f64, f64)> for Polyline {
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(|(x, y)| Point { x, y }).collect())
    }
}

/// A deserialized level document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Level {
    #[serde(rename = "polyLines")]
    pub poly_lines: Vec<Polyline>,
}

impl Level {
    /// Returns a Level parsed from the JSON file at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, LevelError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| LevelError::Io(e, path.to_owned()))?;
        Self::from_reader(BufReader::new(file))
    }

    /// Returns a Level parsed from JSON read from `rdr`.
    pub fn from_reader<R: Read>(rdr: R) -> Result<Self, LevelError> {
        Ok(serde_json::from_reader(rdr)?)
    }

    /// Total number of points across all polylines.
    pub fn point_count(&self) -> usize {
        self.poly_lines.iter().map(|line| line.points.len()).sum()
    }
}

impl FromStr for Level {
    type Err = LevelError;

    fn from_str(s: &str) -> Result<Self, LevelError> {
        Ok(serde_json::from_str(s)?)
    }
}
