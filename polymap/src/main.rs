#![allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]

mod options;

use anyhow::Error as AnyError;
use clap::Parser;
use heightmap::{Fallback, Format, Heightmap, HeightmapBuilder, HeightmapError};
use levels::{Level, LevelService};
use log::info;
use options::Cli;
use std::time::Duration;
use textplots::{Chart, Plot, Shape};

fn main() -> Result<(), AnyError> {
    let cli = Cli::parse();

    env_logger::init();

    let level = load_level(&cli)?;
    info!(
        "level; polylines: {}, points: {}",
        level.poly_lines.len(),
        level.point_count()
    );

    let hmap = builder(&cli).build(&level.poly_lines)?;
    let Heightmap {
        bounds, dimensions, ..
    } = &hmap;
    info!(
        "terrain; delta x: {}, delta y: {}, size: {}x{}",
        bounds.width(),
        bounds.height(),
        dimensions.width,
        dimensions.height
    );

    if cli.preview {
        plot_ascii(&hmap.profile);
    }

    let format = cli
        .format
        .map_or_else(|| Format::from_path(&cli.output), Format::from);
    hmap.grid.write(&cli.output, format)?;

    println!(
        "{}x{} heightmap written to {}",
        dimensions.width,
        dimensions.height,
        cli.output.display()
    );
    Ok(())
}

fn load_level(cli: &Cli) -> Result<Level, HeightmapError> {
    let level = match (&cli.input, cli.id) {
        (Some(path), _) => {
            info!("reading level from {path:?}");
            Level::open(path)?
        }
        (None, Some(id)) => LevelService::new(cli.base_url.as_str())
            .timeout(Duration::from_secs(cli.timeout))
            .fetch(id)?,
        (None, None) => {
            return Err(HeightmapError::InvalidInput(
                "no level file or identifier given".to_string(),
            ))
        }
    };
    Ok(level)
}

fn builder(cli: &Cli) -> HeightmapBuilder {
    let mut builder = Heightmap::builder()
        .auto(cli.auto)
        .max_pixels(cli.max_pixels);
    if let Some(width) = cli.width {
        builder = builder.width(width);
    }
    if let Some(height) = cli.height {
        builder = builder.height(height);
    }
    if let Some(ppm) = cli.ppm {
        builder = builder.pixels_per_metre(ppm);
    }
    if cli.square {
        builder = builder.fallback(Fallback::Square);
    }
    if let Some(idx) = cli.polyline {
        builder = builder.polyline(idx);
    }
    if let (Some(min), Some(max)) = (cli.min_elevation, cli.max_elevation) {
        builder = builder.elevation_range(min, max);
    }
    builder
}

fn plot_ascii(profile: &[f64]) {
    let plot_data: Vec<(f32, f32)> = profile
        .iter()
        .enumerate()
        .map(|(idx, elev)| (idx as f32, *elev as f32))
        .collect();
    Chart::new(300, 150, 0.0, plot_data.len() as f32)
        .lineplot(&Shape::Lines(&plot_data))
        .display();
}
