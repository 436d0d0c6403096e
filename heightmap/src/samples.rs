//! Polyline flattening and the sorted interpolation source.

use crate::HeightmapError;
use geo::geometry::Coord;
use levels::Polyline;

/// Flattens `polylines` into one list of coordinates, in authored
/// order.
///
/// Fails if there are no polylines, no points at all, or any
/// coordinate which is not finite.
pub fn extract_points(polylines: &[Polyline]) -> Result<Vec<Coord<f64>>, HeightmapError> {
    if polylines.is_empty() {
        return Err(HeightmapError::InvalidInput(
            "level contains no polylines".to_string(),
        ));
    }

    let mut points = Vec::with_capacity(polylines.iter().map(|line| line.points.len()).sum());
    for (line_idx, line) in polylines.iter().enumerate() {
        for (point_idx, point) in line.points.iter().enumerate() {
            if !(point.x.is_finite() && point.y.is_finite()) {
                return Err(HeightmapError::InvalidInput(format!(
                    "polyline {line_idx} point {point_idx} is not finite: ({}, {})",
                    point.x, point.y
                )));
            }
            points.push(Coord {
                x: point.x,
                y: point.y,
            });
        }
    }

    if points.is_empty() {
        return Err(HeightmapError::InvalidInput(format!(
            "{} polylines contain zero points",
            polylines.len()
        )));
    }

    Ok(points)
}

/// Elevation samples sorted ascending by distance.
///
/// Samples sharing an x value keep their authored relative order.
#[derive(Debug, Clone, PartialEq)]
pub struct Samples(Box<[Coord<f64>]>);

impl Samples {
    pub fn new(mut points: Vec<Coord<f64>>) -> Result<Self, HeightmapError> {
        if points.is_empty() {
            return Err(HeightmapError::InvalidInput("no samples".to_string()));
        }
        // Stable, so duplicate x values retain authored order.
        points.sort_by(|a, b| a.x.total_cmp(&b.x));
        Ok(Self(points.into_boxed_slice()))
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[Coord<f64>] {
        &self.0
    }

    /// Returns the piecewise-linear elevation at `x`.
    ///
    /// Queries outside the sampled range clamp to the nearest end
    /// sample. An exact hit on a duplicated x returns the first
    /// sample at that x. Between distinct x values the bracket is the
    /// last sample left of `x` and the first sample at or right of it.
    pub fn interpolate(&self, x: f64) -> f64 {
        let samples = &self.0;
        let idx = samples.partition_point(|s| s.x < x);
        if idx == 0 {
            return samples[0].y;
        }
        if idx == samples.len() {
            return samples[samples.len() - 1].y;
        }
        let hi = samples[idx];
        if hi.x == x {
            return hi.y;
        }
        let lo = samples[idx - 1];
        let t = (x - lo.x) / (hi.x - lo.x);
        // Weighted sum; `hi.y - lo.y` can overflow for extreme elevations.
        lo.y * (1.0 - t) + hi.y * t
    }
}

#[cfg(test)]
mod tests {
    use super::{extract_points, Coord, HeightmapError, Samples};
    use approx::assert_relative_eq;
    use levels::{Point, Polyline};

    fn samples(pts: &[(f64, f64)]) -> Samples {
        Samples::new(pts.iter().map(|&(x, y)| Coord { x, y }).collect()).unwrap()
    }

    #[test]
    fn test_extract_concatenates() {
        let lines = vec![
            Polyline::from_iter([(0.0, 1.0), (2.0, 3.0)]),
            Polyline::default(),
            Polyline::from_iter([(-1.0, 4.0)]),
        ];
        let points = extract_points(&lines).unwrap();
        assert_eq!(
            points,
            vec![
                Coord { x: 0.0, y: 1.0 },
                Coord { x: 2.0, y: 3.0 },
                Coord { x: -1.0, y: 4.0 },
            ]
        );
    }

    #[test]
    fn test_extract_empty_collection() {
        assert!(matches!(
            extract_points(&[]),
            Err(HeightmapError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_extract_zero_points() {
        let lines = vec![Polyline::default(), Polyline::default()];
        assert!(matches!(
            extract_points(&lines),
            Err(HeightmapError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_extract_rejects_nan() {
        let lines = vec![Polyline::new(vec![
            Point { x: 0.0, y: 0.0 },
            Point {
                x: 1.0,
                y: f64::NAN,
            },
        ])];
        match extract_points(&lines) {
            Err(HeightmapError::InvalidInput(msg)) => assert!(msg.contains("point 1")),
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_samples_sorted() {
        let s = samples(&[(2.0, 0.0), (0.0, 0.0), (1.0, 1.0)]);
        let xs: Vec<f64> = s.as_slice().iter().map(|c| c.x).collect();
        assert_eq!(xs, vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_interpolate_linear() {
        let s = samples(&[(0.0, 0.0), (10.0, 5.0)]);
        assert_relative_eq!(s.interpolate(4.0), 2.0);
        assert_relative_eq!(s.interpolate(10.0), 5.0);
    }

    #[test]
    fn test_interpolate_clamps() {
        let s = samples(&[(0.0, 3.0), (1.0, 7.0)]);
        assert_eq!(s.interpolate(-100.0), 3.0);
        assert_eq!(s.interpolate(100.0), 7.0);
    }

    #[test]
    fn test_interpolate_extreme_elevations() {
        let s = samples(&[(0.0, -1e308), (1.0, 1e308)]);
        assert_eq!(s.interpolate(0.5), 0.0);
        assert!(s.interpolate(0.25).is_finite());
    }

    #[test]
    fn test_interpolate_single_sample() {
        let s = samples(&[(5.0, 9.0)]);
        assert_eq!(s.interpolate(0.0), 9.0);
        assert_eq!(s.interpolate(5.0), 9.0);
        assert_eq!(s.interpolate(6.0), 9.0);
    }

    #[test]
    fn test_interpolate_duplicate_x_first_occurrence() {
        // A cliff at x = 1: authored as 2 then 8.
        let s = samples(&[(0.0, 0.0), (1.0, 2.0), (1.0, 8.0), (2.0, 8.0)]);
        assert_eq!(s.interpolate(1.0), 2.0);
        // Left of the cliff brackets against the first occurrence.
        assert_relative_eq!(s.interpolate(0.5), 1.0);
        // Right of the cliff brackets against the last occurrence.
        assert_relative_eq!(s.interpolate(1.5), 8.0);
    }

    #[test]
    fn test_interpolate_duplicate_x_authored_order() {
        let s = samples(&[(1.0, 8.0), (0.0, 0.0), (1.0, 2.0)]);
        assert_eq!(s.interpolate(1.0), 8.0);
    }
}
