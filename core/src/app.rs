//! Application related stuff

use crate::config::{RenderConfig, RenderMode};
use crate::geometry::Point2;
use crate::parallel::ParallelOptions;
use crate::pbrt::Float;
use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use std::fmt;

/// Synthetic volumes that can be rendered without a data file.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum SyntheticKind {
    /// Constant density.
    Uniform,

    /// A ball of high density centered in the grid.
    #[default]
    Sphere,

    /// Density increasing along the x-axis.
    Ramp,

    /// A single dense voxel in the middle of an empty grid.
    Voxel,
}

impl fmt::Display for SyntheticKind {
    /// Formats the value using the given formatter.
    ///
    /// * `f` - Formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Uniform => "uniform",
            Self::Sphere => "sphere",
            Self::Ramp => "ramp",
            Self::Voxel => "voxel",
        };
        write!(f, "{name}")
    }
}

/// System wide options.
#[derive(Parser, Clone, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Options {
    /// Number of threads to use for rendering.
    #[clap(
        long = "nthreads",
        short = 't',
        value_name = "NUM",
        help = "Use specified number of threads for rendering. Defaults to all logical CPUs."
    )]
    n_threads: Option<usize>,

    /// Tile size.
    #[clap(
        long = "tilesize",
        short = 'p',
        value_name = "NUM",
        default_value_t = crate::parallel::DEFAULT_TILE_SIZE,
        help = "Size in pixels of square tiles rendered per thread."
    )]
    pub tile_size: usize,

    /// Suppress all text output other than error messages.
    #[clap(long, help = "Suppress all text output other than error messages.")]
    pub quiet: bool,

    /// Image width.
    #[clap(long, value_name = "NUM", default_value_t = 512, help = "Image width in pixels.")]
    pub width: usize,

    /// Image height.
    #[clap(long, value_name = "NUM", default_value_t = 512, help = "Image height in pixels.")]
    pub height: usize,

    /// Rendering mode.
    #[clap(
        long,
        short = 'm',
        value_enum,
        default_value_t = RenderMode::Slice,
        help = "Rendering mode."
    )]
    pub mode: RenderMode,

    /// Iso value for surface rendering.
    #[clap(
        long = "iso",
        value_name = "FLOAT",
        default_value_t = 95.0,
        help = "Iso value for iso surface rendering."
    )]
    pub iso_value: Float,

    /// Enable shading.
    #[clap(long, help = "Enable shading in iso surface and compositing modes.")]
    pub shading: bool,

    /// Use tone based shading instead of Phong.
    #[clap(long, help = "Use tone based shading instead of Phong in iso surface mode.")]
    pub tone: bool,

    /// Orbit angle step per frame.
    #[clap(
        long,
        value_name = "DEGREES",
        default_value_t = 0.0,
        help = "Rotate the camera around the volume by this angle after each frame."
    )]
    pub orbit: Float,

    /// Number of frames to render.
    #[clap(long, value_name = "NUM", default_value_t = 1, help = "Number of frames to render.")]
    pub frames: usize,

    /// Synthetic volume used when no file is given.
    #[clap(
        long,
        value_enum,
        default_value_t = SyntheticKind::Sphere,
        help = "Synthetic volume to render when no input file is given."
    )]
    pub synthetic: SyntheticKind,

    /// Edge length of synthetic volumes.
    #[clap(
        long,
        value_name = "NUM",
        default_value_t = 64,
        help = "Edge length in voxels of synthetic volumes."
    )]
    pub size: usize,

    /// Path to an AVS field file.
    #[clap(value_name = "FILE", help = "AVS field (.fld) volume file.")]
    pub path: Option<String>,
}

impl Options {
    /// Returns the number of threads to use.
    pub fn threads(&self) -> usize {
        self.parallel_options().n_threads
    }

    /// Returns the validated parallel rendering options.
    pub fn parallel_options(&self) -> ParallelOptions {
        match self.n_threads {
            Some(n) => ParallelOptions::new(n, self.tile_size),
            None => ParallelOptions::new(num_cpus::get(), self.tile_size),
        }
    }

    /// Returns the render settings selected on the command line. Transfer
    /// functions keep their defaults.
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            render_resolution: Point2::new(self.width, self.height),
            render_mode: self.mode,
            iso_value: self.iso_value,
            volume_shading: self.shading,
            tone_based_shading: self.tone,
            ..Default::default()
        }
    }
}

/// Returns a progress bar for `len` steps.
///
/// * `len` - Total number of steps.
pub fn create_progress_bar(len: u64) -> ProgressBar {
    let progress = ProgressBar::new(len);
    let template = "{msg} [{elapsed_precise}] [{wide_bar}] {pos}/{len} ({eta})";
    match ProgressStyle::with_template(template) {
        Ok(style) => progress.with_style(style.progress_chars("=> ")),
        Err(e) => {
            warn!("Invalid progress bar template: {e}");
            progress
        }
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_render_options() {
        let options = Options::try_parse_from([
            "volvis", "--mode", "iso", "--iso", "40", "--shading", "--width", "64", "--height",
            "32", "-t", "1", "vol.fld",
        ])
        .unwrap();
        assert_eq!(options.mode, RenderMode::Iso);
        assert_eq!(options.iso_value, 40.0);
        assert!(options.shading);
        assert!(!options.tone);
        assert_eq!((options.width, options.height), (64, 32));
        assert_eq!(options.threads(), 1);
        assert_eq!(options.path.as_deref(), Some("vol.fld"));

        let config = options.render_config();
        assert_eq!(config.render_resolution, Point2::new(64, 32));
        assert_eq!(config.render_mode, RenderMode::Iso);
        assert_eq!(config.iso_value, 40.0);
        assert!(config.volume_shading);
    }

    #[test]
    fn defaults_render_synthetic_sphere() {
        let options = Options::try_parse_from(["volvis"]).unwrap();
        assert_eq!(options.mode, RenderMode::Slice);
        assert_eq!(options.synthetic, SyntheticKind::Sphere);
        assert_eq!(options.frames, 1);
        assert!(options.path.is_none());
        assert_eq!(options.parallel_options().tile_size, 16);
    }

    #[test]
    fn invalid_mode_is_rejected() {
        assert!(Options::try_parse_from(["volvis", "--mode", "raytrace"]).is_err());
    }
}
