//! Heightmap image emitters.
//!
//! Both formats store one `f32` per cell, row-major, with row 0 as
//! the first (top) scanline and column 0 at the terrain's minimum x.

use crate::{Dimensions, HeightmapError, NormalizedGrid};
use byteorder::{LittleEndian as LE, WriteBytesExt};
use log::debug;
use std::{
    ffi::OsStr,
    fs::{self, File},
    io::{self, BufWriter, ErrorKind, Write},
    path::{Path, PathBuf},
};

/// Channel engines read terrain height from.
const EXR_CHANNEL: &str = "R";

/// On-disk image format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Single-channel 32-bit float OpenEXR.
    Exr,

    /// Headerless little-endian `f32` samples.
    Raw,
}

impl Format {
    /// Guesses the format from `path`'s extension: `.r32` and `.raw`
    /// are [Format::Raw], anything else [Format::Exr].
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        match path
            .as_ref()
            .extension()
            .and_then(OsStr::to_str)
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("r32" | "raw") => Self::Raw,
            _ => Self::Exr,
        }
    }
}

impl NormalizedGrid {
    /// Writes this grid to `path`.
    ///
    /// The image is written next to `path` first and moved into place
    /// once complete, so a failed write never leaves a truncated
    /// heightmap at `path`.
    pub fn write<P: AsRef<Path>>(&self, path: P, format: Format) -> Result<(), HeightmapError> {
        let path = path.as_ref();
        let partial = partial_path(path);
        let now = std::time::Instant::now();

        let res = match format {
            Format::Exr => write_exr(&partial, self.dimensions(), self.cells())
                .map_err(|e| io::Error::new(ErrorKind::Other, e)),
            Format::Raw => File::create(&partial)
                .map(BufWriter::new)
                .and_then(|mut wtr| {
                    self.write_raw(&mut wtr)?;
                    wtr.flush()
                }),
        }
        .and_then(|()| fs::rename(&partial, path));

        if let Err(source) = res {
            let _ = fs::remove_file(&partial);
            return Err(HeightmapError::EmitFailure {
                path: path.to_owned(),
                source,
            });
        }

        debug!(
            "write; path: {path:?}, format: {format:?}, size: {}x{}, exec: {:?}",
            self.width(),
            self.height(),
            now.elapsed()
        );
        Ok(())
    }

    /// Writes every cell as a little-endian `f32`, row-major.
    pub fn write_raw<W: Write>(&self, mut wtr: W) -> io::Result<()> {
        for &cell in self.cells() {
            wtr.write_f32::<LE>(cell)?;
        }
        Ok(())
    }
}

fn write_exr(
    path: &Path,
    dimensions: Dimensions,
    cells: &[f32],
) -> Result<(), exr::error::Error> {
    use exr::prelude::*;

    let channel = AnyChannel {
        name: Text::from(EXR_CHANNEL),
        sample_data: FlatSamples::F32(cells.to_vec()),
        quantize_linearly: true,
        sampling: Vec2(1, 1),
    };
    let mut list = SmallVec::<[AnyChannel<FlatSamples>; 4]>::new();
    list.push(channel);

    let image = Image::from_channels(
        (dimensions.width, dimensions.height),
        AnyChannels::sort(list),
    );
    image.write().to_file(path)
}

/// Returns `path` with `.partial` appended.
fn partial_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".partial");
    PathBuf::from(name)
}
