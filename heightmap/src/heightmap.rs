use crate::{
    bounds, extract_points, normalize, rasterize, Dimensions, Fallback, HeightmapError,
    NormalizedGrid, Samples, Sizing,
};
use geo::geometry::Rect;
use levels::Polyline;
use log::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct Heightmap {
    /// Extent of the source samples (x: distance, y: elevation).
    pub bounds: Rect<f64>,

    /// Resolved output size.
    pub dimensions: Dimensions,

    /// Raw elevation at each column, before normalization.
    pub profile: Box<[f64]>,

    /// Normalized output image.
    pub grid: NormalizedGrid,
}

impl Heightmap {
    pub fn builder() -> HeightmapBuilder {
        HeightmapBuilder {
            sizing: Sizing::default(),
            polyline: None,
            elevation_range: None,
        }
    }
}

pub struct HeightmapBuilder {
    sizing: Sizing,

    /// Only rasterize the polyline at this index.
    polyline: Option<usize>,

    /// Elevations mapped to 0 and 1.
    elevation_range: Option<(f64, f64)>,
}

impl HeightmapBuilder {
    pub fn width(mut self, pixels: usize) -> Self {
        self.sizing.width = Some(pixels);
        self
    }

    pub fn height(mut self, pixels: usize) -> Self {
        self.sizing.height = Some(pixels);
        self
    }

    pub fn pixels_per_metre(mut self, ppm: f64) -> Self {
        self.sizing.pixels_per_metre = Some(ppm);
        self
    }

    /// Derive the missing dimension from the terrain's aspect ratio.
    pub fn auto(mut self, auto: bool) -> Self {
        self.sizing.auto = auto;
        self
    }

    pub fn fallback(mut self, fallback: Fallback) -> Self {
        self.sizing.fallback = fallback;
        self
    }

    pub fn max_pixels(mut self, pixels: usize) -> Self {
        self.sizing.max_pixels = pixels;
        self
    }

    pub fn polyline(mut self, index: usize) -> Self {
        self.polyline = Some(index);
        self
    }

    pub fn elevation_range(mut self, min: f64, max: f64) -> Self {
        self.elevation_range = Some((min, max));
        self
    }

    /// Rasterizes `polylines`.
    ///
    /// Grid size is resolved and checked against the pixel limit
    /// before anything is allocated for it.
    pub fn build(&self, polylines: &[Polyline]) -> Result<Heightmap, HeightmapError> {
        let polylines = match self.polyline {
            None => polylines,
            Some(idx) => polylines.get(idx).map(std::slice::from_ref).ok_or_else(|| {
                HeightmapError::InvalidInput(format!(
                    "polyline {idx} requested, level has {}",
                    polylines.len()
                ))
            })?,
        };

        if let Some((min, max)) = self.elevation_range {
            if !(min.is_finite() && max.is_finite()) {
                return Err(HeightmapError::InvalidInput(format!(
                    "elevation range must be finite, got {min}..{max}"
                )));
            }
        }

        let points = extract_points(polylines)?;
        let bounds = bounds(&points)?;
        let dimensions = Dimensions::resolve(&bounds, &self.sizing)?;
        let samples = Samples::new(points)?;

        let (elevation, raster_runtime) = {
            let now = std::time::Instant::now();
            let elevation = rasterize(&samples, &bounds, dimensions)?;
            (elevation, now.elapsed())
        };

        let (grid, normalize_runtime) = {
            let now = std::time::Instant::now();
            let grid = normalize(&elevation, self.elevation_range);
            (grid, now.elapsed())
        };

        debug!(
            "heightmap; samples: {}, size: {}x{}, raster_exec: {:?}, normalize_exec: {:?}",
            samples.len(),
            dimensions.width,
            dimensions.height,
            raster_runtime,
            normalize_runtime
        );

        Ok(Heightmap {
            bounds,
            dimensions,
            profile: elevation.profile().into(),
            grid,
        })
    }
}
