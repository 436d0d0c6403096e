//! Profile sampling and grid construction.

use crate::{math::linspace, Dimensions, HeightmapError, Samples};
use geo::geometry::Rect;

/// Raw elevations, `height` rows of `width` columns, row-major.
///
/// Every row holds the same longitudinal profile; column 0 is the
/// terrain's minimum x, the last column its maximum x.
#[derive(Debug, Clone, PartialEq)]
pub struct ElevationGrid {
    dimensions: Dimensions,
    cells: Box<[f64]>,
}

/// Returns `width` elevations sampled evenly across the x extent of
/// `bounds`.
pub fn sample_profile(
    samples: &Samples,
    bounds: &Rect<f64>,
    width: usize,
) -> Result<Vec<f64>, HeightmapError> {
    if width == 0 {
        return Err(HeightmapError::DegenerateRange { width, height: 0 });
    }
    Ok(linspace(bounds.min().x, bounds.max().x, width)
        .map(|x| samples.interpolate(x))
        .collect())
}

/// Samples the elevation profile and broadcasts it down every row.
pub fn rasterize(
    samples: &Samples,
    bounds: &Rect<f64>,
    dimensions: Dimensions,
) -> Result<ElevationGrid, HeightmapError> {
    let Dimensions { width, height } = dimensions;
    if width == 0 || height == 0 {
        return Err(HeightmapError::DegenerateRange { width, height });
    }
    let profile = sample_profile(samples, bounds, width)?;
    Ok(ElevationGrid::broadcast(&profile, height))
}

impl ElevationGrid {
    /// Returns a grid with `height` copies of `profile`.
    pub fn broadcast(profile: &[f64], height: usize) -> Self {
        let mut cells = Vec::with_capacity(profile.len() * height);
        for _ in 0..height {
            cells.extend_from_slice(profile);
        }
        Self {
            dimensions: Dimensions {
                width: profile.len(),
                height,
            },
            cells: cells.into_boxed_slice(),
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// All cells, row-major.
    pub fn cells(&self) -> &[f64] {
        &self.cells
    }

    /// Returns an iterator over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.cells.chunks(self.dimensions.width.max(1))
    }

    /// The per-column elevations shared by every row.
    pub fn profile(&self) -> &[f64] {
        &self.cells[..self.dimensions.width]
    }

    /// Returns the (lowest, highest) elevation in the grid.
    pub fn min_max(&self) -> (f64, f64) {
        self.profile()
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            })
    }
}

impl std::ops::Index<(usize, usize)> for ElevationGrid {
    type Output = f64;

    /// Index by (column, row).
    fn index(&self, (col, row): (usize, usize)) -> &Self::Output {
        assert!(col < self.dimensions.width && row < self.dimensions.height);
        &self.cells[row * self.dimensions.width + col]
    }
}
