//! Renderer

use crate::*;
use std::thread;
use volvis_core::camera::*;
use volvis_core::color::*;
use volvis_core::config::RenderConfig;
use volvis_core::film::*;
use volvis_core::geometry::*;
use volvis_core::parallel::ParallelOptions;
use volvis_core::scene::Scene;
use volvis_core::volume::*;

/// Renders a volume into a `FrameBuffer` one ray per pixel, splitting the
/// image into tiles processed by a pool of worker threads.
pub struct Renderer {
    /// The scalar field.
    volume: ArcVolume,

    /// The gradient field.
    gradient_volume: ArcGradientVolume,

    /// The camera.
    camera: ArcCamera,

    /// The render configuration.
    config: RenderConfig,

    /// Worker pool settings.
    parallel_options: ParallelOptions,

    /// The output image.
    frame_buffer: FrameBuffer,
}

impl Renderer {
    /// Create a new `Renderer` with a cleared frame buffer.
    ///
    /// * `volume`          - The scalar field.
    /// * `gradient_volume` - The gradient field.
    /// * `camera`          - The camera.
    /// * `config`          - Initial render configuration.
    pub fn new(
        volume: ArcVolume,
        gradient_volume: ArcGradientVolume,
        camera: ArcCamera,
        config: RenderConfig,
    ) -> Self {
        report_problems(&config);
        Self {
            volume,
            gradient_volume,
            camera,
            frame_buffer: FrameBuffer::new(config.render_resolution),
            config,
            parallel_options: ParallelOptions::default(),
        }
    }

    /// Replaces the render configuration. A new resolution reallocates the
    /// frame buffer and clears it.
    ///
    /// * `config` - The new configuration.
    pub fn set_config(&mut self, config: RenderConfig) {
        report_problems(&config);
        if config.render_resolution != self.config.render_resolution {
            info!(
                "Resizing frame buffer {} -> {}",
                self.config.render_resolution, config.render_resolution
            );
            self.frame_buffer.resize(config.render_resolution);
        }
        self.config = config;
    }

    /// Returns the render configuration.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Replaces the camera for subsequent render passes.
    ///
    /// * `camera` - The camera.
    pub fn set_camera(&mut self, camera: ArcCamera) {
        self.camera = camera;
    }

    /// Replaces the worker pool settings.
    ///
    /// * `parallel_options` - The worker pool settings.
    pub fn set_parallel_options(&mut self, parallel_options: ParallelOptions) {
        self.parallel_options = parallel_options;
    }

    /// Returns the frame buffer.
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame_buffer
    }

    /// Returns a read-only view of the pixels in row-major order.
    pub fn frame_buffer(&self) -> &[RGBAColor] {
        self.frame_buffer.pixels()
    }

    /// Renders a full frame. Returns once every tile has been written.
    pub fn render(&mut self) {
        let Self {
            volume,
            gradient_volume,
            camera,
            config,
            parallel_options,
            frame_buffer,
        } = self;

        frame_buffer.clear();

        let scene = Scene::new(
            volume.as_ref(),
            gradient_volume.as_ref(),
            camera.as_ref(),
            config,
        );
        let integrator = Integrator::from(config.render_mode);

        // Compute number of tiles to use for the image.
        let resolution = frame_buffer.resolution();
        let tile_size = parallel_options.tile_size.max(1);
        let n_tiles = Point2::new(
            resolution.x.div_ceil(tile_size),
            resolution.y.div_ceil(tile_size),
        );
        let tile_count = n_tiles.x * n_tiles.y;
        let n_threads = parallel_options.n_threads.max(1);

        info!(
            "Rendering {}x{} tiles of {} pixels with {} threads in {} mode",
            n_tiles.x, n_tiles.y, tile_size, n_threads, config.render_mode
        );

        let scene = &scene;
        let integrator = &integrator;
        let pixel_bounds = frame_buffer.pixel_bounds();

        thread::scope(|scope| {
            let (tx_collector, rx_collector) = crossbeam_channel::bounded::<FrameTile>(n_threads);
            let (tx_worker, rx_worker) = crossbeam_channel::bounded::<usize>(n_threads);

            // Spawn collector thread.
            let frame_buffer = &mut *frame_buffer;
            scope.spawn(move || {
                for tile in rx_collector.iter() {
                    frame_buffer.merge_frame_tile(&tile);
                }
            });

            // Spawn worker threads.
            for _ in 0..n_threads {
                let rx_worker = rx_worker.clone();
                let tx_collector = tx_collector.clone();
                scope.spawn(move || {
                    for tile_idx in rx_worker.iter() {
                        let tile_x = tile_idx % n_tiles.x;
                        let tile_y = tile_idx / n_tiles.x;
                        let tile_bounds =
                            get_tile_bounds(tile_x, tile_y, tile_size, &pixel_bounds);

                        debug!("Starting image tile {}", tile_bounds);
                        let tile = render_tile(tile_bounds, resolution, scene, integrator);
                        debug!("Finished image tile {}", tile_bounds);

                        if tx_collector.send(tile).is_err() {
                            error!("Frame buffer collector stopped early");
                            break;
                        }
                    }
                });
            }
            drop(rx_worker); // Drop extra since we've cloned one for each worker.
            drop(tx_collector);

            // Send work.
            for tile_idx in 0..tile_count {
                if tx_worker.send(tile_idx).is_err() {
                    error!("All render workers stopped early");
                    break;
                }
            }
        });
    }
}

/// Logs degenerate configuration settings.
///
/// * `config` - The render configuration.
fn report_problems(config: &RenderConfig) {
    for problem in config.validate() {
        warn!("{problem}");
    }
}

/// Returns the pixel bounds of a tile clipped to the image.
///
/// * `tile_x`       - Tile column.
/// * `tile_y`       - Tile row.
/// * `tile_size`    - Tile edge length in pixels.
/// * `pixel_bounds` - Image bounds.
fn get_tile_bounds(
    tile_x: usize,
    tile_y: usize,
    tile_size: usize,
    pixel_bounds: &Bounds2u,
) -> Bounds2u {
    let x0 = pixel_bounds.p_min.x + tile_x * tile_size;
    let x1 = x0.saturating_add(tile_size);
    let y0 = pixel_bounds.p_min.y + tile_y * tile_size;
    let y1 = y0.saturating_add(tile_size);
    Bounds2::new(Point2::new(x0, y0), Point2::new(x1, y1)).intersect(pixel_bounds)
}

/// Renders the pixels of one tile.
///
/// * `tile_bounds` - Pixels covered by the tile.
/// * `resolution`  - Image resolution.
/// * `scene`       - The scene.
/// * `integrator`  - The integrator for the current render mode.
fn render_tile(
    tile_bounds: Bounds2u,
    resolution: Point2<usize>,
    scene: &Scene,
    integrator: &Integrator,
) -> FrameTile {
    let mut tile = FrameTile::new(tile_bounds);
    for p_pixel in tile_bounds {
        if let Some(color) = render_pixel(&p_pixel, resolution, scene, integrator) {
            tile.set_pixel(&p_pixel, color);
        }
    }
    tile
}

/// Returns the color of a pixel or `None` if its ray misses the volume.
///
/// * `p_pixel`    - Pixel coordinates.
/// * `resolution` - Image resolution.
/// * `scene`      - The scene.
/// * `integrator` - The integrator for the current render mode.
fn render_pixel(
    p_pixel: &Point2<usize>,
    resolution: Point2<usize>,
    scene: &Scene,
    integrator: &Integrator,
) -> Option<RGBAColor> {
    // Map the pixel center to [-1, 1]².
    let p_film = (Point2f::from(*p_pixel) + Point2f::new(0.5, 0.5)) / Point2f::from(resolution);
    let p_ndc = p_film * 2.0 - Point2f::new(1.0, 1.0);

    let mut ray = scene.camera().generate_ray(&p_ndc);
    if !ray.clip(&scene.bounds) {
        return None;
    }

    let color = integrator.li(&ray, scene);
    if color.has_nans() {
        error!("Not-a-number color returned for pixel {}; ray {}", p_pixel, ray);
        return None;
    }
    Some(color)
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
