use clap::{ArgGroup, Parser, ValueEnum};
use heightmap::DEFAULT_MAX_PIXELS;
use std::path::PathBuf;

/// Convert stunt level polylines into a heightmap image.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("source").required(true).args(["input", "id"])))]
pub struct Cli {
    /// Level JSON file.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Level identifier to fetch from the level service.
    #[arg(long)]
    pub id: Option<u64>,

    /// Level service base URL.
    #[arg(long, default_value = levels::DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Level service request timeout, in seconds.
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    /// Output image path.
    #[arg(short, long, default_value = "heightmap.exr")]
    pub output: PathBuf,

    /// Output format, guessed from the output extension if omitted.
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output width in pixels.
    #[arg(short, long)]
    pub width: Option<usize>,

    /// Output height in pixels [default: 1024].
    #[arg(short = 't', long)]
    pub height: Option<usize>,

    /// Output pixels per metre of track; sets the width from the
    /// terrain's length [default: 1.0].
    #[arg(short, long)]
    pub ppm: Option<f64>,

    /// Derive the missing dimension from the terrain's aspect ratio.
    #[arg(short, long, default_value_t = false, conflicts_with = "ppm")]
    pub auto: bool,

    /// Without explicit sizing, make the output square instead of
    /// using pixels per metre.
    #[arg(long, default_value_t = false, conflicts_with_all = ["ppm", "auto"])]
    pub square: bool,

    /// Refuse to generate images with more pixels than this.
    #[arg(long, default_value_t = DEFAULT_MAX_PIXELS)]
    pub max_pixels: usize,

    /// Only use the polyline at this index.
    #[arg(long)]
    pub polyline: Option<usize>,

    /// Elevation mapped to 0; requires --max-elevation.
    #[arg(long, requires = "max_elevation", allow_negative_numbers = true)]
    pub min_elevation: Option<f64>,

    /// Elevation mapped to 1; requires --min-elevation.
    #[arg(long, requires = "min_elevation", allow_negative_numbers = true)]
    pub max_elevation: Option<f64>,

    /// Plot the elevation profile to the terminal.
    #[arg(long, default_value_t = false)]
    pub preview: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Single-channel 32-bit float OpenEXR.
    Exr,

    /// Headerless little-endian 32-bit floats.
    Raw,
}

impl From<OutputFormat> for heightmap::Format {
    fn from(fmt: OutputFormat) -> Self {
        match fmt {
            OutputFormat::Exr => Self::Exr,
            OutputFormat::Raw => Self::Raw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Cli, OutputFormat};
    use clap::{CommandFactory, Parser};
    use std::path::PathBuf;

    #[test]
    fn test_cli_debug_assert() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["polymap", "-i", "level.json"]).unwrap();
        assert_eq!(cli.input, Some(PathBuf::from("level.json")));
        assert_eq!(cli.output, PathBuf::from("heightmap.exr"));
        assert_eq!(cli.height, None);
        assert_eq!(cli.ppm, None);
        assert!(!cli.auto);
        assert_eq!(cli.format, None);
    }

    #[test]
    fn test_id_source() {
        let cli = Cli::try_parse_from(["polymap", "--id", "17", "-t", "128", "--auto"]).unwrap();
        assert_eq!(cli.id, Some(17));
        assert_eq!(cli.height, Some(128));
        assert!(cli.auto);
    }

    #[test]
    fn test_source_required() {
        assert!(Cli::try_parse_from(["polymap"]).is_err());
        assert!(Cli::try_parse_from(["polymap", "-i", "a.json", "--id", "3"]).is_err());
    }

    #[test]
    fn test_negative_dimensions_rejected() {
        assert!(Cli::try_parse_from(["polymap", "-i", "a.json", "-w", "-3"]).is_err());
    }

    #[test]
    fn test_elevation_range_pairs() {
        assert!(Cli::try_parse_from(["polymap", "-i", "a.json", "--min-elevation", "-5"]).is_err());
        let cli = Cli::try_parse_from([
            "polymap",
            "-i",
            "a.json",
            "--min-elevation",
            "-5",
            "--max-elevation",
            "120",
            "-f",
            "raw",
        ])
        .unwrap();
        assert_eq!(cli.min_elevation, Some(-5.0));
        assert_eq!(cli.max_elevation, Some(120.0));
        assert_eq!(cli.format, Some(OutputFormat::Raw));
    }
}
