use crate::HeightmapError;
use geo::geometry::{Coord, Rect};

/// Returns the bounding box of `points` in a single pass.
///
/// Zero-width or zero-height boxes are valid.
pub fn bounds(points: &[Coord<f64>]) -> Result<Rect<f64>, HeightmapError> {
    let (first, rest) = points
        .split_first()
        .ok_or_else(|| HeightmapError::InvalidInput("no samples to bound".to_string()))?;
    let (min, max) = rest.iter().fold((*first, *first), |(min, max), c| {
        (
            Coord {
                x: min.x.min(c.x),
                y: min.y.min(c.y),
            },
            Coord {
                x: max.x.max(c.x),
                y: max.y.max(c.y),
            },
        )
    });
    Ok(Rect::new(min, max))
}

#[cfg(test)]
mod tests {
    use super::{bounds, Coord, HeightmapError};

    #[test]
    fn test_bounds() {
        let points = [
            Coord { x: 3.0, y: -1.0 },
            Coord { x: -2.0, y: 4.0 },
            Coord { x: 7.5, y: 0.5 },
        ];
        let rect = bounds(&points).unwrap();
        assert_eq!(rect.min(), Coord { x: -2.0, y: -1.0 });
        assert_eq!(rect.max(), Coord { x: 7.5, y: 4.0 });
        for p in points {
            assert!(rect.min().x <= p.x && p.x <= rect.max().x);
            assert!(rect.min().y <= p.y && p.y <= rect.max().y);
        }
    }

    #[test]
    fn test_degenerate_bounds() {
        let rect = bounds(&[Coord { x: 1.0, y: 2.0 }, Coord { x: 1.0, y: 2.0 }]).unwrap();
        assert_eq!(rect.width(), 0.0);
        assert_eq!(rect.height(), 0.0);
    }

    #[test]
    fn test_empty_bounds() {
        assert!(matches!(bounds(&[]), Err(HeightmapError::InvalidInput(_))));
    }
}
