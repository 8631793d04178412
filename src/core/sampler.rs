// Copyright @genoise 2026

use crate::core::sample::Sample;
use crate::math::constants::Float;

/// Inclusive pixel rectangle a sampler is responsible for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRegion {
    pub x0: usize,
    pub y0: usize,
    pub x1: usize,
    pub y1: usize,
}

impl PixelRegion {
    pub fn new(x0: usize, y0: usize, x1: usize, y1: usize) -> Self {
        assert!(x0 <= x1 && y0 <= y1);
        Self { x0, y0, x1, y1 }
    }

    pub fn width(&self) -> usize {
        self.x1 - self.x0 + 1
    }

    pub fn height(&self) -> usize {
        self.y1 - self.y0 + 1
    }

    pub fn pixel_count(&self) -> usize {
        self.width() * self.height()
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.x0 && x <= self.x1 && y >= self.y0 && y <= self.y1
    }

    /// Disjoint row bands covering the region, at most `n` of them, for
    /// decomposing a render job across workers.
    pub fn split_rows(&self, n: usize) -> Vec<PixelRegion> {
        let n = n.max(1).min(self.height());
        let rows = self.height();
        let base = rows / n;
        let extra = rows % n;

        let mut bands = Vec::with_capacity(n);
        let mut y = self.y0;
        for band in 0..n {
            let h = base + if band < extra { 1 } else { 0 };
            bands.push(PixelRegion::new(self.x0, y, self.x1, y + h - 1));
            y += h;
        }
        bands
    }
}

/// Produces the stochastic sample stream for a pixel region: exactly
/// `width * height * samples_per_pixel` samples, each inside its pixel's
/// unit cell. Strategies differ only in how positions are distributed.
pub trait Sampler: Send {
    /// Next sample, or `None` once the stream is exhausted.
    fn next_sample(&mut self) -> Option<Sample>;

    fn samples_per_pixel(&self) -> u32;

    fn region(&self) -> PixelRegion;

    fn total_samples(&self) -> usize {
        self.region().pixel_count() * self.samples_per_pixel() as usize
    }

    /// Independent sampler over a sub-rectangle with the same strategy,
    /// per-pixel count and seed derivation. Partitions may be driven from
    /// different threads or processes with no shared state.
    fn partition(&self, region: PixelRegion) -> Box<dyn Sampler>;
}

/// Deterministic per-pixel stream seed: partitioned samplers must emit
/// the same values for a pixel as the whole-frame sampler does.
pub fn pixel_seed(base_seed: u64, x: usize, y: usize) -> u64 {
    let mut state = base_seed
        ^ ((y as u64) << 32)
        ^ (x as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    // splitmix64 finalizer
    state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

pub type ProgressFraction = Float;

/* Tests for PixelRegion */
