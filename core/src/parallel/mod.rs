//! Parallel rendering options.

/// Default edge length in pixels of the square tiles handed to workers.
pub const DEFAULT_TILE_SIZE: usize = 16;

/// Controls how a frame is split across worker threads.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ParallelOptions {
    /// Number of worker threads.
    pub n_threads: usize,

    /// Edge length of the square pixel tiles.
    pub tile_size: usize,
}

impl ParallelOptions {
    /// Create new `ParallelOptions`. Out of range values are clamped.
    ///
    /// * `n_threads` - Number of worker threads; 0 is clamped to 1 and values
    ///                 above the number of logical CPUs are reduced.
    /// * `tile_size` - Tile edge length; 0 is clamped to 1.
    pub fn new(n_threads: usize, tile_size: usize) -> Self {
        let max_threads = num_cpus::get();
        let n_threads = match n_threads {
            0 => {
                warn!("Invalid nthreads");
                1
            }
            n if n > max_threads => {
                warn!("Num threads > max logical CPUs {}", max_threads);
                max_threads
            }
            n => n,
        };

        let tile_size = if tile_size == 0 {
            warn!("Invalid tilesize");
            1
        } else {
            tile_size
        };

        Self {
            n_threads,
            tile_size,
        }
    }
}

impl Default for ParallelOptions {
    /// Use all logical CPUs and the default tile size.
    fn default() -> Self {
        Self {
            n_threads: num_cpus::get(),
            tile_size: DEFAULT_TILE_SIZE,
        }
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
