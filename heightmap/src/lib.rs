//! Polyline terrain profiles to normalized heightmaps.
//!
//! The pipeline flattens a level's polylines into elevation samples,
//! sizes an output grid from their bounding box, samples the
//! piecewise-linear profile once per column, repeats that profile on
//! every row, and rescales the result into `[0, 1]`.
//!
//! ```no_run
//! use heightmap::{Format, Heightmap};
//! use levels::Level;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let level = Level::open("level.json")?;
//! let hmap = Heightmap::builder()
//!     .height(512)
//!     .auto(true)
//!     .build(&level.poly_lines)?;
//! hmap.grid.write("level.exr", Format::Exr)?;
//! # Ok(())
//! # }
//! ```

mod bounds;
mod dimensions;
mod error;
mod heightmap;
mod math;
mod normalize;
mod output;
mod raster;
mod samples;

pub use crate::{
    bounds::bounds,
    dimensions::{Dimensions, Fallback, Sizing, DEFAULT_HEIGHT, DEFAULT_MAX_PIXELS, DEFAULT_PPM},
    error::HeightmapError,
    heightmap::{Heightmap, HeightmapBuilder},
    normalize::{normalize, NormalizedGrid},
    output::Format,
    raster::{rasterize, sample_profile, ElevationGrid},
    samples::{extract_points, Samples},
};
pub use geo;
pub use levels;
