// Copyright @genoise 2026

use crate::core::sample::Sample;
use crate::core::sampler::{pixel_seed, PixelRegion, Sampler};
use crate::math::constants::{Float, Vector2f};
use crate::samplers::common::PixelWalk;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// A pixel's samples sit on a jittered sub-grid, both in film position
/// and in the first extra 2-D dimension, which lowers variance versus
/// independent uniform placement. Strata are shuffled so consumption
/// order carries no spatial correlation.
pub struct StratifiedSampler {
    region: PixelRegion,
    samples_per_pixel: u32,
    base_seed: u64,
    walk: PixelWalk,
    pixel_rng: SmallRng,
    film_positions: Vec<Vector2f>,
    extra_strata: Vec<Vector2f>,
}

impl StratifiedSampler {
    pub fn new(region: PixelRegion, samples_per_pixel: u32, base_seed: u64) -> Self {
        let samples_per_pixel = samples_per_pixel.max(1);
        Self {
            region,
            samples_per_pixel,
            base_seed,
            walk: PixelWalk::new(region, samples_per_pixel),
            pixel_rng: SmallRng::seed_from_u64(base_seed),
            film_positions: Vec::new(),
            extra_strata: Vec::new(),
        }
    }

    fn grid_dimensions(&self) -> (usize, usize) {
        let spp = self.samples_per_pixel as usize;
        let nx = (spp as Float).sqrt().ceil() as usize;
        let ny = (spp + nx - 1) / nx;
        (nx.max(1), ny.max(1))
    }

    // Jittered sub-grid covering [0,1)^2, shuffled, truncated to spp.
    fn jittered_grid(&mut self) -> Vec<Vector2f> {
        let (nx, ny) = self.grid_dimensions();
        let mut cells = Vec::with_capacity(nx * ny);
        for cy in 0..ny {
            for cx in 0..nx {
                let jx = self.pixel_rng.gen::<Float>();
                let jy = self.pixel_rng.gen::<Float>();
                cells.push(Vector2f::new(
                    (cx as Float + jx) / nx as Float,
                    (cy as Float + jy) / ny as Float,
                ));
            }
        }
        cells.shuffle(&mut self.pixel_rng);
        cells.truncate(self.samples_per_pixel as usize);
        cells
    }

    fn start_pixel(&mut self, x: usize, y: usize) {
        self.pixel_rng = SmallRng::seed_from_u64(pixel_seed(self.base_seed, x, y));
        self.film_positions = self.jittered_grid();
        self.extra_strata = self.jittered_grid();
    }
}

impl Sampler for StratifiedSampler {
    fn next_sample(&mut self) -> Option<Sample> {
        if self.walk.is_done() {
            return None;
        }

        let (x, y, sub) = self.walk.current();
        if self.walk.starts_pixel() {
            self.start_pixel(x, y);
        }

        let offset = self.film_positions[sub as usize];
        let film_x = x as Float + offset.x;
        let film_y = y as Float + offset.y;
        let lens_u = self.pixel_rng.gen::<Float>();
        let lens_v = self.pixel_rng.gen::<Float>();
        let time = self.pixel_rng.gen::<Float>();
        let first_2d = self.extra_strata[sub as usize];
        let stream_seed = self.pixel_rng.gen::<u64>();

        self.walk.advance();
        Some(Sample::new(x, y, film_x, film_y, lens_u, lens_v, time,
                         Vec::new(), vec![first_2d], stream_seed))
    }

    fn samples_per_pixel(&self) -> u32 {
        self.samples_per_pixel
    }

    fn region(&self) -> PixelRegion {
        self.region
    }

    fn partition(&self, region: PixelRegion) -> Box<dyn Sampler> {
        Box::new(StratifiedSampler::new(region, self.samples_per_pixel, self.base_seed))
    }
}

/* Tests for StratifiedSampler */
