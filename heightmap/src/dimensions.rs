//! Output grid size selection.

use crate::HeightmapError;
use geo::geometry::Rect;
use log::debug;

/// Height used when none is requested.
pub const DEFAULT_HEIGHT: usize = 1024;

/// Pixels per metre used by the default fallback.
pub const DEFAULT_PPM: f64 = 1.0;

/// Largest grid, in pixels, we're willing to allocate.
pub const DEFAULT_MAX_PIXELS: usize = 64_000_000;

/// How to size the grid when neither explicit dimensions nor
/// automatic sizing were requested.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fallback {
    /// Width is the terrain's x extent times this factor (truncated).
    PixelsPerMetre(f64),

    /// Width equals height.
    Square,
}

impl Default for Fallback {
    fn default() -> Self {
        Self::PixelsPerMetre(DEFAULT_PPM)
    }
}

/// A requested grid size, resolved against the terrain's bounds by
/// [Dimensions::resolve].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sizing {
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub pixels_per_metre: Option<f64>,

    /// Derive the missing dimension from the terrain's aspect ratio.
    pub auto: bool,

    pub fallback: Fallback,

    /// Upper bound on `width * height`.
    pub max_pixels: usize,
}

impl Default for Sizing {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            pixels_per_metre: None,
            auto: false,
            fallback: Fallback::default(),
            max_pixels: DEFAULT_MAX_PIXELS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub width: usize,
    pub height: usize,
}

impl Dimensions {
    /// Total number of grid cells, or `None` on overflow.
    pub fn pixels(&self) -> Option<usize> {
        self.width.checked_mul(self.height)
    }

    /// Resolves `sizing` against `bounds`.
    ///
    /// Precedence, highest first:
    ///
    /// 1. explicit width and height, each clamped to at least 1
    /// 2. `auto`: the missing dimension is derived from the x/y
    ///    extent ratio (rounded), height defaulting to
    ///    [DEFAULT_HEIGHT]; a zero extent on either axis uses a ratio
    ///    of 1
    /// 3. `pixels_per_metre`: width is `trunc(x_extent * ppm)` unless
    ///    given, height defaults to [DEFAULT_HEIGHT]
    /// 4. the [Fallback] policy
    ///
    /// The result is never allocated here; it is rejected if it
    /// exceeds `sizing.max_pixels`.
    #[allow(clippy::cast_precision_loss)]
    pub fn resolve(bounds: &Rect<f64>, sizing: &Sizing) -> Result<Self, HeightmapError> {
        let x_extent = bounds.width();
        let y_extent = bounds.height();

        let (width, height) = match *sizing {
            Sizing {
                width: Some(width),
                height: Some(height),
                ..
            } => (width.max(1), height.max(1)),

            Sizing {
                auto: true,
                width,
                height,
                ..
            } => {
                let ratio = aspect_ratio(x_extent, y_extent);
                match width {
                    Some(width) => (width.max(1), to_pixels(width as f64 / ratio, "height")?),
                    None => {
                        let height = height.unwrap_or(DEFAULT_HEIGHT).max(1);
                        let width = to_pixels(height as f64 * ratio, "width")?;
                        (width, height)
                    }
                }
            }

            Sizing {
                pixels_per_metre: Some(ppm),
                width,
                height,
                ..
            }
            | Sizing {
                pixels_per_metre: None,
                fallback: Fallback::PixelsPerMetre(ppm),
                width,
                height,
                ..
            } => {
                if !(ppm.is_finite() && ppm > 0.0) {
                    return Err(HeightmapError::InvalidDimensions(format!(
                        "pixels per metre must be positive, got {ppm}"
                    )));
                }
                let width = match width {
                    Some(width) => width.max(1),
                    None => to_pixels((x_extent * ppm).trunc(), "width")?,
                };
                (width, height.unwrap_or(DEFAULT_HEIGHT).max(1))
            }

            Sizing {
                fallback: Fallback::Square,
                width,
                height,
                ..
            } => {
                let height = height.unwrap_or(DEFAULT_HEIGHT).max(1);
                (width.map_or(height, |w| w.max(1)), height)
            }
        };

        let dimensions = Self { width, height };
        match dimensions.pixels() {
            Some(pixels) if pixels <= sizing.max_pixels => {
                debug!("dimensions; extent: {x_extent}x{y_extent}, resolved: {width}x{height}");
                Ok(dimensions)
            }
            _ => Err(HeightmapError::InvalidDimensions(format!(
                "{width}x{height} exceeds the {} pixel limit",
                sizing.max_pixels
            ))),
        }
    }
}

/// Terrain x/y extent ratio, or 1 when either extent is degenerate.
fn aspect_ratio(x_extent: f64, y_extent: f64) -> f64 {
    let ratio = x_extent / y_extent;
    if x_extent > 0.0 && y_extent > 0.0 && ratio.is_finite() {
        ratio
    } else {
        1.0
    }
}

/// Rounds `val` to a pixel count of at least 1.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_pixels(val: f64, what: &str) -> Result<usize, HeightmapError> {
    if val.is_finite() {
        Ok((val.round() as usize).max(1))
    } else {
        Err(HeightmapError::InvalidDimensions(format!(
            "derived {what} is not finite"
        )))
    }
}
