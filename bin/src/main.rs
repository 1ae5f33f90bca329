#[macro_use]
extern crate log;

use cameras::*;
use clap::Parser;
use integrators::Renderer;
use std::sync::Arc;
use std::time::Instant;
use volumes::*;
use volvis_core::app::*;
use volvis_core::geometry::*;
use volvis_core::pbrt::*;
use volvis_core::volume::Volume;

#[cfg(all(feature = "dhat-rs", feature = "jemalloc"))]
compile_error!("feature 'dhat-rs' and feature 'jemalloc' cannot be enabled at the same time");

#[cfg(feature = "dhat-rs")]
use dhat::{Dhat, DhatAlloc};

#[cfg(feature = "dhat-rs")]
#[global_allocator]
static ALLOCATOR: DhatAlloc = DhatAlloc;

#[cfg(feature = "jemalloc")]
#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(feature = "jemalloc")]
#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static ALLOCATOR: Jemalloc = Jemalloc;

/// Vertical field of view of the benchmark camera in degrees.
const FIELD_OF_VIEW: Float = 60.0;

fn main() {
    #[cfg(feature = "dhat-rs")]
    let _dhat = Dhat::start_heap_profiling();

    // Initialize `env_logger`.
    env_logger::init();

    let options = Options::parse();
    if let Err(e) = run(&options) {
        error!("{e}");
        std::process::exit(1);
    }
}

/// Loads or builds the volume and renders the requested frames.
///
/// * `options` - Command line options.
fn run(options: &Options) -> Result<(), String> {
    let start = Instant::now();
    let volume = match options.path.as_deref() {
        Some(path) => read_fld(path)?,
        None => synthesize(options.synthetic, options.size)?,
    };
    let gradient = GradientGrid::new(&volume);
    info!(
        "Prepared {} volume and gradients in {:.3}s",
        volume.dims(),
        start.elapsed().as_secs_f32()
    );

    let config = options.render_config();
    let resolution = config.render_resolution;
    if resolution.x == 0 || resolution.y == 0 {
        return Err(format!("Invalid image resolution {resolution}"));
    }

    let mut camera = benchmark_camera(&volume, resolution.x as Float / resolution.y as Float)?;
    let mut renderer =
        Renderer::new(Arc::new(volume), Arc::new(gradient), Arc::new(camera), config);
    let parallel_options = options.parallel_options();
    renderer.set_parallel_options(parallel_options);

    let progress = (!options.quiet).then(|| create_progress_bar(options.frames as u64));
    if let Some(progress) = &progress {
        progress.set_message(format!("Rendering {} frames", renderer.config().render_mode));
    }

    let start = Instant::now();
    for _ in 0..options.frames {
        renderer.render();
        if let Some(progress) = &progress {
            progress.inc(1);
        }

        if options.orbit != 0.0 {
            camera = camera.orbit(options.orbit)?;
            renderer.set_camera(Arc::new(camera));
        }
    }
    let elapsed = start.elapsed();

    if let Some(progress) = progress {
        progress.finish_with_message("Render complete");
    }

    let frame = renderer.frame();
    let ms_per_frame = if options.frames > 0 {
        elapsed.as_secs_f64() * 1000.0 / options.frames as f64
    } else {
        0.0
    };
    info!(
        "Rendered {} frames of {} with {} threads in {:.3}s ({:.2} ms/frame)",
        options.frames,
        resolution,
        parallel_options.n_threads,
        elapsed.as_secs_f32(),
        ms_per_frame
    );
    info!(
        "Last frame coverage {:.4}, mean luminance {:.4}",
        frame.coverage(),
        frame.mean_luminance()
    );

    if !options.quiet {
        println!(
            "{} frames, {:.2} ms/frame, coverage {:.4}, mean luminance {:.4}",
            options.frames,
            ms_per_frame,
            frame.coverage(),
            frame.mean_luminance()
        );
    }

    Ok(())
}

/// Returns a synthetic volume.
///
/// * `kind` - The volume kind.
/// * `size` - Number of voxels along each axis.
fn synthesize(kind: SyntheticKind, size: usize) -> Result<GridVolume, String> {
    if size < 2 {
        return Err(format!("Synthetic volume size {size} must be at least 2"));
    }

    let n = size as Int;
    let dims = Vector3i::new(n, n, n);
    info!("Building {kind} volume of {size}³ voxels");
    match kind {
        SyntheticKind::Uniform => uniform_volume(dims, 100.0),
        SyntheticKind::Sphere => sphere_volume(n, (n / 2) as Float, 255.0),
        SyntheticKind::Ramp => ramp_x_volume(dims, 255.0 / (n - 1) as Float),
        SyntheticKind::Voxel => single_voxel_volume(dims, Point3i::new(n / 2, n / 2, n / 2), 255.0),
    }
}

/// Returns a perspective camera on the +z side of the volume that sees all of
/// it.
///
/// * `volume` - The volume.
/// * `aspect` - Image width divided by height.
fn benchmark_camera(volume: &GridVolume, aspect: Float) -> Result<PerspectiveCamera, String> {
    let dims = Vector3f::from(volume.dims());
    let center = Point3f::from(dims / 2.0);
    let distance = 2.0 * dims.length();
    let frame = LookAt::new(
        center + Vector3f::new(0.0, 0.0, distance),
        center,
        Vector3f::new(0.0, 1.0, 0.0),
    )?;
    PerspectiveCamera::new(frame, FIELD_OF_VIEW, aspect)
}
