use crate::{Dimensions, ElevationGrid};

/// Elevations rescaled into `[0, 1]`, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedGrid {
    dimensions: Dimensions,
    cells: Box<[f32]>,
}

/// Rescales `grid` to `[0, 1]`.
///
/// `range` is the (min, max) elevation mapped to 0 and 1; values
/// outside it are clamped. When `None` the grid's own extremes are
/// used. A flat grid, or a range with `max <= min`, maps to all
/// zeros.
///
/// Operands are halved before subtracting so that ranges spanning
/// most of `f64` don't overflow to infinity.
pub fn normalize(grid: &ElevationGrid, range: Option<(f64, f64)>) -> NormalizedGrid {
    let (min, max) = range.unwrap_or_else(|| grid.min_max());
    let half_min = min * 0.5;
    let half_span = max * 0.5 - half_min;
    let cells = if half_span > 0.0 {
        grid.cells()
            .iter()
            .map(|v| ((v * 0.5 - half_min) / half_span).clamp(0.0, 1.0) as f32)
            .collect()
    } else {
        vec![0.0; grid.cells().len()].into_boxed_slice()
    };
    NormalizedGrid {
        dimensions: grid.dimensions(),
        cells,
    }
}

impl NormalizedGrid {
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn width(&self) -> usize {
        self.dimensions.width
    }

    pub fn height(&self) -> usize {
        self.dimensions.height
    }

    /// All cells, row-major, row 0 first.
    pub fn cells(&self) -> &[f32] {
        &self.cells
    }

    /// Returns an iterator over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[f32]> + '_ {
        self.cells.chunks(self.dimensions.width.max(1))
    }
}

impl std::ops::Index<(usize, usize)> for NormalizedGrid {
    type Output = f32;

    /// Index by (column, row).
    fn index(&self, (col, row): (usize, usize)) -> &Self::Output {
        assert!(col < self.dimensions.width && row < self.dimensions.height);
        &self.cells[row * self.dimensions.width + col]
    }
}
